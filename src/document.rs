use std::sync::Arc;

use crate::canvas::RasterImage;
use crate::shape::Shape;

/// The committed drawing: an optional imported backdrop raster with the
/// shape list painted over it in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
    backdrop: Option<Arc<RasterImage>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn remove_last_shape(&mut self) -> Option<Shape> {
        self.shapes.pop()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    pub fn backdrop(&self) -> Option<&RasterImage> {
        self.backdrop.as_deref()
    }

    /// Replace everything with an imported raster and no shapes.
    pub fn set_backdrop(&mut self, image: Arc<RasterImage>) {
        self.shapes.clear();
        self.backdrop = Some(image);
    }

    pub fn is_blank(&self) -> bool {
        self.shapes.is_empty() && self.backdrop.is_none()
    }

    /// Empty the document, handing back what it held.
    pub fn take(&mut self) -> Document {
        std::mem::take(self)
    }
}

use std::sync::Arc;

use egui::Color32;

use crate::canvas::RasterImage;
use crate::document::Document;
use crate::shape::Shape;

/// A committed, reversible change to the document.
///
/// Each variant carries what it needs to be applied again on redo and
/// reverted on undo, so history never stores pixels of its own.
#[derive(Clone)]
pub enum Command {
    /// Append a finished shape to the document
    AddShape { shape: Shape },
    /// Fill the shape at `index`, remembering its prior fill state
    FillShape {
        index: usize,
        color: Color32,
        previous_color: Color32,
        previous_filled: bool,
    },
    /// Blank the canvas (new canvas / clear all)
    Reset { previous: Document },
    /// Replace the document with an imported raster
    ImportRaster {
        image: Arc<RasterImage>,
        previous: Document,
    },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::AddShape { shape } => f
                .debug_struct("AddShape")
                .field("kind", &shape.kind())
                .finish(),
            Command::FillShape { index, color, .. } => f
                .debug_struct("FillShape")
                .field("index", index)
                .field("color", color)
                .finish(),
            Command::Reset { previous } => f
                .debug_struct("Reset")
                .field("previous_shapes", &previous.shapes().len())
                .finish(),
            Command::ImportRaster { image, .. } => f
                .debug_struct("ImportRaster")
                .field("size", &image.dimensions())
                .finish(),
        }
    }
}

impl Command {
    /// Short label for history listings
    pub fn label(&self) -> &'static str {
        match self {
            Command::AddShape { shape } => shape.kind().name(),
            Command::FillShape { .. } => "Fill Shape",
            Command::Reset { .. } => "Clear Canvas",
            Command::ImportRaster { .. } => "Open Image",
        }
    }

    pub fn execute(&self, document: &mut Document) {
        match self {
            Command::AddShape { shape } => document.add_shape(shape.clone()),
            Command::FillShape { index, color, .. } => {
                if let Some(shape) = document.shape_mut(*index) {
                    shape.fill(*color);
                } else {
                    log::warn!("Fill target {} no longer exists", index);
                }
            }
            Command::Reset { .. } => {
                document.take();
            }
            Command::ImportRaster { image, .. } => document.set_backdrop(Arc::clone(image)),
        }
    }

    pub fn undo(&self, document: &mut Document) {
        match self {
            Command::AddShape { .. } => {
                document.remove_last_shape();
            }
            Command::FillShape {
                index,
                previous_color,
                previous_filled,
                ..
            } => {
                if let Some(shape) = document.shape_mut(*index) {
                    shape.restore_fill(*previous_color, *previous_filled);
                } else {
                    log::warn!("Fill target {} no longer exists", index);
                }
            }
            Command::Reset { previous } | Command::ImportRaster { previous, .. } => {
                *document = previous.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeStyle;
    use egui::Pos2;

    fn rectangle() -> Shape {
        Shape::rectangle(Pos2::new(10.0, 10.0), Pos2::new(50.0, 40.0), ShapeStyle::new(Color32::RED, 2.0, false))
    }

    #[test]
    fn test_add_shape_roundtrip() {
        let mut doc = Document::new();
        let cmd = Command::AddShape { shape: rectangle() };
        cmd.execute(&mut doc);
        assert_eq!(doc.shapes().len(), 1);
        cmd.undo(&mut doc);
        assert!(doc.shapes().is_empty());
    }

    #[test]
    fn test_fill_undo_restores_previous_fill() {
        let mut doc = Document::new();
        doc.add_shape(rectangle());
        let cmd = Command::FillShape {
            index: 0,
            color: Color32::BLUE,
            previous_color: Color32::RED,
            previous_filled: false,
        };
        cmd.execute(&mut doc);
        assert!(doc.shapes()[0].is_filled());
        assert_eq!(doc.shapes()[0].color(), Color32::BLUE);

        cmd.undo(&mut doc);
        assert!(!doc.shapes()[0].is_filled());
        assert_eq!(doc.shapes()[0].color(), Color32::RED);
    }

    #[test]
    fn test_fill_missing_index_is_ignored() {
        let mut doc = Document::new();
        let cmd = Command::FillShape {
            index: 3,
            color: Color32::BLUE,
            previous_color: Color32::RED,
            previous_filled: false,
        };
        cmd.execute(&mut doc);
        assert!(doc.is_blank());
    }

    #[test]
    fn test_reset_undo_restores_document() {
        let mut doc = Document::new();
        doc.add_shape(rectangle());
        let cmd = Command::Reset { previous: doc.clone() };
        cmd.execute(&mut doc);
        assert!(doc.is_blank());
        cmd.undo(&mut doc);
        assert_eq!(doc.shapes(), &[rectangle()]);
    }
}

//! The raster drawing surface.
//!
//! Backed by a `tiny_skia::Pixmap` (premultiplied RGBA). Everything drawn on
//! it is opaque over an opaque background, so premultiplied and straight
//! alpha coincide for any exported pixel.

use egui::Color32;
use image::RgbaImage;
use tiny_skia::{ColorU8, IntSize, Pixmap, PixmapPaint, Transform};

use crate::error::{PaintError, PaintResult};
use crate::geometry::CanvasBounds;

/// A whole-canvas pixel buffer as exchanged with file I/O.
pub type RasterImage = RgbaImage;

pub struct Canvas {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(PaintError::InvalidCanvasSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(self.width() as f32, self.height() as f32)
    }

    pub fn clear(&mut self, color: Color32) {
        self.pixmap.fill(to_skia_color(color));
    }

    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }

    /// Color of a single pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color32::from_rgba_unmultiplied(
            color.red(),
            color.green(),
            color.blue(),
            color.alpha(),
        ))
    }

    /// Composite `image` at the origin. It must already match the canvas size.
    pub fn draw_image(&mut self, image: &RasterImage) -> PaintResult<()> {
        self.ensure_dimensions(image)?;

        let mut data = Vec::with_capacity(image.as_raw().len());
        for pixel in image.pixels() {
            let [r, g, b, a] = pixel.0;
            let premultiplied = ColorU8::from_rgba(r, g, b, a).premultiply();
            data.extend_from_slice(&[
                premultiplied.red(),
                premultiplied.green(),
                premultiplied.blue(),
                premultiplied.alpha(),
            ]);
        }

        let size = IntSize::from_wh(image.width(), image.height()).ok_or(PaintError::InvalidCanvasSize {
            width: image.width(),
            height: image.height(),
        })?;
        let Some(source) = Pixmap::from_vec(data, size) else {
            return Err(PaintError::InvalidCanvasSize {
                width: image.width(),
                height: image.height(),
            });
        };

        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Ok(())
    }

    /// Check that `image` has exactly the canvas dimensions.
    pub fn ensure_dimensions(&self, image: &RasterImage) -> PaintResult<()> {
        if image.dimensions() != (self.width(), self.height()) {
            return Err(PaintError::DimensionMismatch {
                expected: (self.width(), self.height()),
                found: image.dimensions(),
            });
        }
        Ok(())
    }

    /// Copy the canvas out as straight-alpha RGBA.
    pub fn to_rgba_image(&self) -> RasterImage {
        let mut raw = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let color = pixel.demultiply();
            raw.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }
        // Buffer length is width * height * 4 by construction
        RgbaImage::from_raw(self.width(), self.height(), raw)
            .unwrap_or_else(|| RgbaImage::new(self.width(), self.height()))
    }

    /// Upload-ready image for the UI.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_premultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixmap.data(),
        )
    }
}

pub(crate) fn to_skia_color(color: Color32) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_canvas_rejected() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(PaintError::InvalidCanvasSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_clear_and_export() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.clear(Color32::WHITE);
        let image = canvas.to_rgba_image();
        assert_eq!(image.dimensions(), (4, 3));
        assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }

    #[test]
    fn test_draw_image_roundtrips_opaque_pixels() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.clear(Color32::WHITE);
        let image = RgbaImage::from_fn(2, 2, |x, y| image::Rgba([x as u8 * 100, y as u8 * 100, 7, 255]));
        canvas.draw_image(&image).unwrap();
        assert_eq!(canvas.to_rgba_image(), image);
    }

    #[test]
    fn test_draw_image_wrong_size() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        let image = RgbaImage::new(3, 2);
        assert!(matches!(
            canvas.draw_image(&image),
            Err(PaintError::DimensionMismatch { expected: (2, 2), found: (3, 2) })
        ));
    }
}

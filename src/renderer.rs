// src/renderer.rs
use egui::{Color32, Pos2};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Rect, Stroke, Transform};

use crate::canvas::{Canvas, RasterImage, to_skia_color};
use crate::shape::{Geometry, Shape};

/// Paints shapes onto a [`Canvas`].
///
/// Every draw call builds its own paint and stroke from the shape it is given;
/// nothing set for one shape carries over to the next.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    /// Draws a single shape on top of whatever the canvas already shows.
    ///
    /// Closed shapes are filled first (when `filled`) and then stroked.
    /// A freehand or eraser stroke with fewer than two samples draws nothing.
    pub fn draw_shape(&self, canvas: &mut Canvas, shape: &Shape) {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(shape.color()));
        paint.anti_alias = true;

        let mut stroke = Stroke {
            width: shape.stroke_width(),
            ..Default::default()
        };

        let pixmap = canvas.pixmap_mut();
        let path = match shape.geometry() {
            Geometry::Line { start, end } => polyline(&[*start, *end]),
            Geometry::Rectangle { origin, size } => {
                Rect::from_xywh(origin.x, origin.y, size.x, size.y).map(PathBuilder::from_rect)
            }
            Geometry::Oval { origin, size } => {
                Rect::from_xywh(origin.x, origin.y, size.x, size.y).and_then(PathBuilder::from_oval)
            }
            Geometry::Triangle { vertices } => {
                let mut pb = PathBuilder::new();
                pb.move_to(vertices[0].x, vertices[0].y);
                pb.line_to(vertices[1].x, vertices[1].y);
                pb.line_to(vertices[2].x, vertices[2].y);
                pb.close();
                pb.finish()
            }
            Geometry::Freehand { points } | Geometry::Eraser { points } => {
                if points.len() < 2 {
                    return;
                }
                stroke.line_cap = LineCap::Round;
                stroke.line_join = LineJoin::Round;
                polyline(points)
            }
        };

        // Degenerate geometry (zero-size boxes, coincident points) yields no path
        let Some(path) = path else {
            return;
        };

        if shape.is_filled() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Repaint the whole canvas: background, then the backdrop raster if any,
    /// then every shape in insertion order so later shapes occlude earlier ones.
    pub fn redraw(&self, canvas: &mut Canvas, backdrop: Option<&RasterImage>, shapes: &[Shape]) {
        canvas.clear(self.background);

        if let Some(image) = backdrop {
            if let Err(err) = canvas.draw_image(image) {
                log::warn!("Skipping backdrop: {}", err);
            }
        }

        for shape in shapes {
            self.draw_shape(canvas, shape);
        }
    }
}

fn polyline(points: &[Pos2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for point in rest {
        pb.line_to(point.x, point.y);
    }
    pb.finish()
}

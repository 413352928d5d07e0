use egui::{Pos2, Vec2};

pub mod hit_testing;

/// The drawable area, `[0, width] x [0, height]` in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub width: f32,
    pub height: f32,
}

impl CanvasBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp both axes independently into the canvas.
    pub fn clamp(&self, pos: Pos2) -> Pos2 {
        Pos2::new(pos.x.clamp(0.0, self.width), pos.y.clamp(0.0, self.height))
    }
}

/// Normalize a drag into `(origin, size)` with `origin = min(start, end)` and
/// `size = |end - start|`.
pub fn normalize_drag(start: Pos2, end: Pos2) -> (Pos2, Vec2) {
    let origin = start.min(end);
    let size = (end - start).abs();
    (origin, size)
}

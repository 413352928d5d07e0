//! Point-in-shape predicates used by the fill tool.
//!
//! Ellipse and triangle math runs in `f64`: canvas-sized triangles have areas in
//! the hundreds of thousands, where `f32` rounding alone exceeds the area
//! tolerance.

use egui::{Pos2, Vec2};

/// Axis-aligned containment, edges included.
pub fn rect_contains(origin: Pos2, size: Vec2, p: Pos2) -> bool {
    p.x >= origin.x && p.x <= origin.x + size.x && p.y >= origin.y && p.y <= origin.y + size.y
}

/// Normalized ellipse test against the ellipse inscribed in the box.
///
/// A degenerate box (zero width or height) contains nothing.
pub fn ellipse_contains(origin: Pos2, size: Vec2, p: Pos2) -> bool {
    let a = f64::from(size.x) / 2.0;
    let b = f64::from(size.y) / 2.0;
    let cx = f64::from(origin.x) + a;
    let cy = f64::from(origin.y) + b;

    let dx = (f64::from(p.x) - cx) / a;
    let dy = (f64::from(p.y) - cy) / b;
    // NaN (0/0 on a degenerate axis) compares false
    dx * dx + dy * dy <= 1.0
}

/// Unsigned triangle area via the shoelace formula.
pub fn triangle_area(a: Pos2, b: Pos2, c: Pos2) -> f64 {
    let (ax, ay) = (f64::from(a.x), f64::from(a.y));
    let (bx, by) = (f64::from(b.x), f64::from(b.y));
    let (cx, cy) = (f64::from(c.x), f64::from(c.y));
    ((ax * (by - cy) + bx * (cy - ay) + cx * (ay - by)) / 2.0).abs()
}

/// Area-sum test: `p` is inside when the three sub-triangles it forms with the
/// edges add up to the whole, within `tolerance` area units.
pub fn triangle_contains(vertices: &[Pos2; 3], p: Pos2, tolerance: f64) -> bool {
    let [a, b, c] = *vertices;
    let area = triangle_area(a, b, c);
    let sum = triangle_area(p, b, c) + triangle_area(a, p, c) + triangle_area(a, b, p);
    (area - sum).abs() <= tolerance
}

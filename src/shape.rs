use egui::{Color32, Pos2, Vec2};

use crate::geometry::{CanvasBounds, hit_testing, normalize_drag};

/// Area tolerance used by [`Shape::contains`] for triangles.
pub const TRIANGLE_TOLERANCE: f64 = 0.01;

/// The six kinds of shape a user can place on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Oval,
    Triangle,
    Freehand,
    Eraser,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Triangle => "Triangle",
            Self::Freehand => "Freehand",
            Self::Eraser => "Eraser",
        }
    }

    /// Only closed kinds have an interior to fill.
    pub fn is_fillable(&self) -> bool {
        matches!(self, Self::Rectangle | Self::Oval | Self::Triangle)
    }
}

/// Kind-specific geometry of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line { start: Pos2, end: Pos2 },
    Rectangle { origin: Pos2, size: Vec2 },
    Oval { origin: Pos2, size: Vec2 },
    /// Left base, right base, apex
    Triangle { vertices: [Pos2; 3] },
    Freehand { points: Vec<Pos2> },
    Eraser { points: Vec<Pos2> },
}

/// Stroke settings a shape is built with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub color: Color32,
    pub stroke_width: f32,
    pub filled: bool,
}

impl ShapeStyle {
    pub fn new(color: Color32, stroke_width: f32, filled: bool) -> Self {
        Self {
            color: opaque(color),
            stroke_width,
            filled,
        }
    }
}

/// A committed (or preview) drawing primitive.
///
/// Once appended to a document a shape is immutable apart from its fill:
/// see [`Shape::fill`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    color: Color32,
    stroke_width: f32,
    filled: bool,
}

/// Drop any translucency; shapes are always fully opaque.
pub fn opaque(color: Color32) -> Color32 {
    let [r, g, b, _] = color.to_srgba_unmultiplied();
    Color32::from_rgb(r, g, b)
}

impl Shape {
    fn new(geometry: Geometry, style: ShapeStyle) -> Self {
        let filled = style.filled && geometry_kind(&geometry).is_fillable();
        Self {
            geometry,
            color: opaque(style.color),
            stroke_width: style.stroke_width,
            filled,
        }
    }

    pub fn line(start: Pos2, end: Pos2, style: ShapeStyle) -> Self {
        Self::new(Geometry::Line { start, end }, style)
    }

    pub fn rectangle(start: Pos2, end: Pos2, style: ShapeStyle) -> Self {
        let (origin, size) = normalize_drag(start, end);
        Self::new(Geometry::Rectangle { origin, size }, style)
    }

    pub fn oval(start: Pos2, end: Pos2, style: ShapeStyle) -> Self {
        let (origin, size) = normalize_drag(start, end);
        Self::new(Geometry::Oval { origin, size }, style)
    }

    /// Isosceles triangle inscribed in the drag box: base along the bottom
    /// edge, apex at the top edge's midpoint. Each vertex is clamped into
    /// `bounds` on its own.
    pub fn triangle(start: Pos2, end: Pos2, style: ShapeStyle, bounds: &CanvasBounds) -> Self {
        let left = start.x.min(end.x);
        let right = start.x.max(end.x);
        let top = start.y.min(end.y);
        let base = start.y.max(end.y);

        let vertices = [
            Pos2::new(left, base),
            Pos2::new(right, base),
            Pos2::new((left + right) / 2.0, top),
        ]
        .map(|v| bounds.clamp(v));

        Self::new(Geometry::Triangle { vertices }, style)
    }

    pub fn freehand(points: Vec<Pos2>, style: ShapeStyle) -> Self {
        Self::new(Geometry::Freehand { points }, style)
    }

    /// Eraser strokes paint with the background color, whatever the active color.
    pub fn eraser(points: Vec<Pos2>, background: Color32, stroke_width: f32) -> Self {
        Self::new(
            Geometry::Eraser { points },
            ShapeStyle::new(background, stroke_width, false),
        )
    }

    pub fn kind(&self) -> ShapeKind {
        geometry_kind(&self.geometry)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Test whether `p` falls inside the shape. Stroke-only kinds are never
    /// fill targets and always answer `false`.
    pub fn contains(&self, p: Pos2) -> bool {
        self.contains_within(p, TRIANGLE_TOLERANCE)
    }

    /// Like [`Shape::contains`] with an explicit triangle area tolerance.
    pub fn contains_within(&self, p: Pos2, tolerance: f64) -> bool {
        match &self.geometry {
            Geometry::Line { .. } | Geometry::Freehand { .. } | Geometry::Eraser { .. } => false,
            Geometry::Rectangle { origin, size } => hit_testing::rect_contains(*origin, *size, p),
            Geometry::Oval { origin, size } => hit_testing::ellipse_contains(*origin, *size, p),
            Geometry::Triangle { vertices } => {
                hit_testing::triangle_contains(vertices, p, tolerance)
            }
        }
    }

    /// The one permitted mutation of a committed shape: mark it filled and
    /// recolor it with `color` at full opacity.
    pub fn fill(&mut self, color: Color32) {
        self.color = opaque(color);
        self.filled = true;
    }

    /// Put back a fill state captured before [`Shape::fill`].
    pub(crate) fn restore_fill(&mut self, color: Color32, filled: bool) {
        self.color = color;
        self.filled = filled;
    }
}

fn geometry_kind(geometry: &Geometry) -> ShapeKind {
    match geometry {
        Geometry::Line { .. } => ShapeKind::Line,
        Geometry::Rectangle { .. } => ShapeKind::Rectangle,
        Geometry::Oval { .. } => ShapeKind::Oval,
        Geometry::Triangle { .. } => ShapeKind::Triangle,
        Geometry::Freehand { .. } => ShapeKind::Freehand,
        Geometry::Eraser { .. } => ShapeKind::Eraser,
    }
}

//! The fill tool: recolor the topmost closed shape under a click.

use egui::{Color32, Pos2};

use crate::command::Command;
use crate::document::Document;
use crate::shape::{Shape, opaque};

/// Index of the most recently added shape containing `point`.
///
/// Shapes are scanned newest first, so a later shape absorbs clicks anywhere
/// inside its own area even where an older shape is the one visible.
pub fn find_fill_target(shapes: &[Shape], point: Pos2, tolerance: f64) -> Option<usize> {
    shapes.iter().rposition(|shape| shape.contains_within(point, tolerance))
}

/// Build the command filling the shape under `point` with `color`, or `None`
/// when the click lands on no closed shape.
pub fn fill_at(document: &Document, point: Pos2, color: Color32, tolerance: f64) -> Option<Command> {
    let Some(index) = find_fill_target(document.shapes(), point, tolerance) else {
        log::debug!("No shape found at ({}, {})", point.x, point.y);
        return None;
    };

    let target = &document.shapes()[index];
    log::debug!("Filling {} #{} at ({}, {})", target.kind().name(), index, point.x, point.y);
    Some(Command::FillShape {
        index,
        color: opaque(color),
        previous_color: target.color(),
        previous_filled: target.is_filled(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{ShapeStyle, TRIANGLE_TOLERANCE};

    fn style() -> ShapeStyle {
        ShapeStyle::new(Color32::RED, 2.0, false)
    }

    #[test]
    fn test_topmost_shape_wins() {
        let shapes = vec![
            Shape::rectangle(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0), style()),
            Shape::oval(Pos2::new(20.0, 20.0), Pos2::new(60.0, 60.0), style()),
        ];
        assert_eq!(find_fill_target(&shapes, Pos2::new(40.0, 40.0), TRIANGLE_TOLERANCE), Some(1));
        assert_eq!(find_fill_target(&shapes, Pos2::new(90.0, 90.0), TRIANGLE_TOLERANCE), Some(0));
        assert_eq!(find_fill_target(&shapes, Pos2::new(150.0, 90.0), TRIANGLE_TOLERANCE), None);
    }

    #[test]
    fn test_strokes_are_skipped() {
        let shapes = vec![
            Shape::rectangle(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0), style()),
            Shape::line(Pos2::new(0.0, 0.0), Pos2::new(100.0, 100.0), style()),
        ];
        assert_eq!(find_fill_target(&shapes, Pos2::new(50.0, 50.0), TRIANGLE_TOLERANCE), Some(0));
    }

    #[test]
    fn test_fill_at_records_previous_state() {
        let mut document = Document::new();
        document.add_shape(Shape::rectangle(Pos2::new(10.0, 10.0), Pos2::new(50.0, 40.0), style()));

        let Some(Command::FillShape {
            index,
            color,
            previous_color,
            previous_filled,
        }) = fill_at(&document, Pos2::new(30.0, 25.0), Color32::BLUE, TRIANGLE_TOLERANCE)
        else {
            panic!("expected a fill command");
        };
        assert_eq!(index, 0);
        assert_eq!(color, Color32::BLUE);
        assert_eq!(previous_color, Color32::RED);
        assert!(!previous_filled);
    }

    #[test]
    fn test_fill_on_empty_canvas_is_none() {
        let document = Document::new();
        assert!(fill_at(&document, Pos2::new(1.0, 1.0), Color32::BLUE, TRIANGLE_TOLERANCE).is_none());
    }
}

use egui::{Color32, Pos2};

use super::ToolSettings;
use crate::config::CanvasConfig;
use crate::geometry::CanvasBounds;
use crate::shape::{Shape, ShapeKind, ShapeStyle};

/// Transient state of one press -> drag -> release gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    kind: ShapeKind,
    style: ShapeStyle,
    start: Pos2,
    /// Accumulated samples, only used by freehand and eraser
    points: Vec<Pos2>,
}

impl Gesture {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(Gesture),
}

/// What the session should do in response to a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to repaint
    None,
    /// Repaint the committed shapes, then overlay this uncommitted shape
    Preview(Shape),
    /// Append this shape to the document and record a history point
    Commit(Shape),
    /// Run the fill tool at this (clamped) point
    Fill(Pos2),
}

/// Turns pointer gestures into preview and committed shapes.
///
/// Tool, color, width and fill default are captured from [`ToolSettings`] on
/// press and stay fixed for the rest of the gesture.
#[derive(Debug, Clone)]
pub struct InteractionController {
    state: InteractionState,
    builder: ShapeBuilder,
    min_sample_distance: f32,
}

/// Builds preview and final shapes from a gesture.
#[derive(Debug, Clone)]
struct ShapeBuilder {
    bounds: CanvasBounds,
    background: Color32,
    eraser_width_factor: f32,
}

impl ShapeBuilder {
    /// Same construction for preview and commit. Freehand and eraser strokes
    /// use the accumulated samples and ignore `end`.
    fn build(&self, gesture: &Gesture, end: Pos2) -> Shape {
        let start = gesture.start;
        match gesture.kind {
            ShapeKind::Line => Shape::line(start, end, gesture.style),
            ShapeKind::Rectangle => Shape::rectangle(start, end, gesture.style),
            ShapeKind::Oval => Shape::oval(start, end, gesture.style),
            ShapeKind::Triangle => Shape::triangle(start, end, gesture.style, &self.bounds),
            ShapeKind::Freehand => Shape::freehand(gesture.points.clone(), gesture.style),
            ShapeKind::Eraser => Shape::eraser(
                gesture.points.clone(),
                self.background,
                gesture.style.stroke_width * self.eraser_width_factor,
            ),
        }
    }
}

impl InteractionController {
    pub fn new(config: &CanvasConfig) -> Self {
        Self {
            state: InteractionState::Idle,
            builder: ShapeBuilder {
                bounds: CanvasBounds::new(config.width as f32, config.height as f32),
                background: config.background_color(),
                eraser_width_factor: config.eraser_width_factor,
            },
            min_sample_distance: config.min_sample_distance,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    pub fn on_press(&mut self, pos: Pos2, settings: &ToolSettings) -> GestureOutcome {
        let pos = self.builder.bounds.clamp(pos);

        let Some(kind) = settings.tool.shape_kind() else {
            self.state = InteractionState::Idle;
            return GestureOutcome::Fill(pos);
        };

        let points = match kind {
            ShapeKind::Freehand | ShapeKind::Eraser => vec![pos],
            _ => Vec::new(),
        };

        self.state = InteractionState::Dragging(Gesture {
            kind,
            style: settings.style(),
            start: pos,
            points,
        });
        GestureOutcome::None
    }

    pub fn on_drag(&mut self, pos: Pos2) -> GestureOutcome {
        let pos = self.builder.bounds.clamp(pos);
        let min_distance = self.min_sample_distance;
        let InteractionState::Dragging(gesture) = &mut self.state else {
            return GestureOutcome::None;
        };

        if matches!(gesture.kind, ShapeKind::Freehand | ShapeKind::Eraser) {
            let far_enough = gesture
                .points
                .last()
                .is_none_or(|last| last.distance(pos) > min_distance);
            if !far_enough {
                return GestureOutcome::None;
            }
            gesture.points.push(pos);
        }

        GestureOutcome::Preview(self.builder.build(gesture, pos))
    }

    /// Finish the gesture. Releasing without having moved still commits a
    /// zero-size shape.
    pub fn on_release(&mut self, pos: Pos2) -> GestureOutcome {
        let pos = self.builder.bounds.clamp(pos);
        let InteractionState::Dragging(gesture) = std::mem::take(&mut self.state) else {
            return GestureOutcome::None;
        };

        let shape = self.builder.build(&gesture, pos);
        log::debug!("Gesture finished: {:?} from {:?} to {:?}", gesture.kind, gesture.start, pos);
        GestureOutcome::Commit(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Geometry;
    use crate::tools::ToolKind;
    use egui::Vec2;

    fn controller() -> InteractionController {
        InteractionController::new(&CanvasConfig {
            width: 200,
            height: 100,
            ..Default::default()
        })
    }

    fn settings(tool: ToolKind) -> ToolSettings {
        ToolSettings {
            tool,
            ..Default::default()
        }
    }

    #[test]
    fn test_rectangle_gesture() {
        let mut ctl = controller();
        assert_eq!(ctl.on_press(Pos2::new(10.0, 10.0), &settings(ToolKind::Rectangle)), GestureOutcome::None);
        assert!(ctl.is_dragging());

        let GestureOutcome::Preview(preview) = ctl.on_drag(Pos2::new(30.0, 30.0)) else {
            panic!("expected a preview");
        };
        assert_eq!(preview.kind(), ShapeKind::Rectangle);

        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(50.0, 40.0)) else {
            panic!("expected a commit");
        };
        assert_eq!(
            shape.geometry(),
            &Geometry::Rectangle {
                origin: Pos2::new(10.0, 10.0),
                size: Vec2::new(40.0, 30.0)
            }
        );
        assert_eq!(ctl.state(), &InteractionState::Idle);
    }

    #[test]
    fn test_fill_tool_skips_dragging() {
        let mut ctl = controller();
        let outcome = ctl.on_press(Pos2::new(300.0, 50.0), &settings(ToolKind::FillShape));
        assert_eq!(outcome, GestureOutcome::Fill(Pos2::new(200.0, 50.0)));
        assert!(!ctl.is_dragging());
        assert_eq!(ctl.on_drag(Pos2::new(20.0, 20.0)), GestureOutcome::None);
        assert_eq!(ctl.on_release(Pos2::new(20.0, 20.0)), GestureOutcome::None);
    }

    #[test]
    fn test_freehand_drops_close_samples() {
        let mut ctl = controller();
        ctl.on_press(Pos2::new(10.0, 10.0), &settings(ToolKind::Freehand));
        assert_eq!(ctl.on_drag(Pos2::new(11.0, 11.0)), GestureOutcome::None);
        assert!(matches!(ctl.on_drag(Pos2::new(13.0, 10.0)), GestureOutcome::Preview(_)));

        let InteractionState::Dragging(gesture) = ctl.state() else {
            panic!("expected a gesture in progress");
        };
        assert_eq!(gesture.kind(), ShapeKind::Freehand);
        assert_eq!(gesture.start(), Pos2::new(10.0, 10.0));
        assert_eq!(gesture.points(), &[Pos2::new(10.0, 10.0), Pos2::new(13.0, 10.0)]);

        // Exactly at the threshold is still too close
        assert_eq!(ctl.on_drag(Pos2::new(15.0, 10.0)), GestureOutcome::None);

        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(90.0, 90.0)) else {
            panic!("expected a commit");
        };
        assert_eq!(
            shape.geometry(),
            &Geometry::Freehand {
                points: vec![Pos2::new(10.0, 10.0), Pos2::new(13.0, 10.0)]
            }
        );
    }

    #[test]
    fn test_eraser_width_and_color() {
        let mut ctl = controller();
        let mut tool_settings = settings(ToolKind::Eraser);
        tool_settings.color = [255, 0, 0];
        tool_settings.stroke_width = 3.0;
        ctl.on_press(Pos2::new(10.0, 10.0), &tool_settings);
        ctl.on_drag(Pos2::new(20.0, 10.0));

        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(20.0, 10.0)) else {
            panic!("expected a commit");
        };
        assert_eq!(shape.kind(), ShapeKind::Eraser);
        assert_eq!(shape.color(), Color32::WHITE);
        assert_eq!(shape.stroke_width(), 6.0);
    }

    #[test]
    fn test_off_canvas_gesture_lands_on_boundary() {
        let mut ctl = controller();
        ctl.on_press(Pos2::new(-50.0, -50.0), &settings(ToolKind::Line));
        ctl.on_drag(Pos2::new(500.0, -3.0));
        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(900.0, 400.0)) else {
            panic!("expected a commit");
        };
        assert_eq!(
            shape.geometry(),
            &Geometry::Line {
                start: Pos2::new(0.0, 0.0),
                end: Pos2::new(200.0, 100.0)
            }
        );
    }

    #[test]
    fn test_zero_movement_commits_degenerate_shape() {
        let mut ctl = controller();
        ctl.on_press(Pos2::new(40.0, 40.0), &settings(ToolKind::Oval));
        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(40.0, 40.0)) else {
            panic!("expected a commit");
        };
        assert_eq!(
            shape.geometry(),
            &Geometry::Oval {
                origin: Pos2::new(40.0, 40.0),
                size: Vec2::ZERO
            }
        );
    }

    #[test]
    fn test_settings_captured_at_press() {
        let mut ctl = controller();
        let mut tool_settings = settings(ToolKind::Rectangle);
        tool_settings.filled = true;
        ctl.on_press(Pos2::new(0.0, 0.0), &tool_settings);
        let GestureOutcome::Commit(shape) = ctl.on_release(Pos2::new(10.0, 10.0)) else {
            panic!("expected a commit");
        };
        assert!(shape.is_filled());
    }
}

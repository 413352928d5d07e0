use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::shape::{ShapeKind, ShapeStyle, opaque};

mod interaction;
pub use interaction::{Gesture, GestureOutcome, InteractionController, InteractionState};

/// Tools the user can pick from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Line,
    Rectangle,
    Oval,
    Triangle,
    Freehand,
    Eraser,
    /// Click inside a closed shape to fill it; has no drag phase
    FillShape,
}

impl ToolKind {
    pub const ALL: [ToolKind; 7] = [
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Oval,
        ToolKind::Triangle,
        ToolKind::Freehand,
        ToolKind::Eraser,
        ToolKind::FillShape,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Line => "Line",
            ToolKind::Rectangle => "Rectangle",
            ToolKind::Oval => "Oval",
            ToolKind::Triangle => "Triangle",
            ToolKind::Freehand => "Free Hand",
            ToolKind::Eraser => "Eraser",
            ToolKind::FillShape => "Fill Shape",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            ToolKind::Line => "Draw Line",
            ToolKind::Rectangle => "Draw Rectangle",
            ToolKind::Oval => "Draw Oval",
            ToolKind::Triangle => "Draw Triangle",
            ToolKind::Freehand => "Freehand Drawing",
            ToolKind::Eraser => "Erase Content",
            ToolKind::FillShape => "Fill Shape with Color",
        }
    }

    /// The kind of shape a drag with this tool produces, `None` for the fill tool.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            ToolKind::Line => Some(ShapeKind::Line),
            ToolKind::Rectangle => Some(ShapeKind::Rectangle),
            ToolKind::Oval => Some(ShapeKind::Oval),
            ToolKind::Triangle => Some(ShapeKind::Triangle),
            ToolKind::Freehand => Some(ShapeKind::Freehand),
            ToolKind::Eraser => Some(ShapeKind::Eraser),
            ToolKind::FillShape => None,
        }
    }
}

/// Per-session tool configuration, read by the interaction controller at the
/// start of every gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    pub tool: ToolKind,
    /// Active color as opaque RGB
    pub color: [u8; 3],
    pub stroke_width: f32,
    /// Whether new rectangles, ovals and triangles start out filled
    pub filled: bool,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: ToolKind::Freehand,
            color: [0, 0, 0],
            stroke_width: 2.0,
            filled: false,
        }
    }
}

impl ToolSettings {
    pub fn color32(&self) -> Color32 {
        let [r, g, b] = self.color;
        Color32::from_rgb(r, g, b)
    }

    /// Set the active color at full opacity. Picking a color while erasing
    /// switches back to freehand drawing.
    pub fn set_color(&mut self, color: Color32) {
        let color = opaque(color);
        self.color = [color.r(), color.g(), color.b()];
        if self.tool == ToolKind::Eraser {
            self.tool = ToolKind::Freehand;
        }
    }

    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::new(self.color32(), self.stroke_width, self.filled)
    }
}

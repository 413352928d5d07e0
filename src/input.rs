use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect};

/// Application commands bound to a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    New,
    Save,
    Open,
    Undo,
    Redo,
}

impl Shortcut {
    pub const ALL: [Shortcut; 5] = [
        Shortcut::New,
        Shortcut::Save,
        Shortcut::Open,
        Shortcut::Undo,
        Shortcut::Redo,
    ];

    /// Ctrl (Cmd on macOS) plus a letter
    pub fn keyboard_shortcut(self) -> KeyboardShortcut {
        let key = match self {
            Shortcut::New => Key::N,
            Shortcut::Save => Key::S,
            Shortcut::Open => Key::O,
            Shortcut::Undo => Key::Z,
            Shortcut::Redo => Key::Y,
        };
        KeyboardShortcut::new(Modifiers::COMMAND, key)
    }

    /// Consume every shortcut pressed this frame, in a fixed order.
    pub fn poll(ctx: &Context) -> Vec<Shortcut> {
        ctx.input_mut(|input| {
            Self::ALL
                .into_iter()
                .filter(|shortcut| input.consume_shortcut(&shortcut.keyboard_shortcut()))
                .collect()
        })
    }
}

/// A pointer event already translated into canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    Press(Pos2),
    Drag(Pos2),
    Release(Pos2),
}

/// Primary-button pointer state for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerFrame {
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    /// The canvas widget is the topmost thing under the pointer
    pub over_canvas: bool,
}

impl PointerFrame {
    /// Read this frame's pointer state. `canvas` is the canvas widget's
    /// response, which knows whether a window or panel covers the pointer.
    pub fn from_egui(ctx: &Context, canvas: &egui::Response) -> Self {
        ctx.input(|i| Self {
            over_canvas: canvas.contains_pointer(),
            pos: i.pointer.interact_pos(),
            pressed: i.pointer.button_pressed(PointerButton::Primary),
            down: i.pointer.button_down(PointerButton::Primary),
            released: i.pointer.button_released(PointerButton::Primary),
        })
    }
}

/// Turns raw pointer frames into press/drag/release gestures on the canvas.
///
/// A gesture only starts on a press over the visible, uncovered part of the
/// canvas, but once started it follows the pointer anywhere and always ends
/// with a release.
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Part of the screen the canvas is actually shown in (scroll area viewport)
    clip_rect: Rect,
    last_pos: Option<Pos2>,
    active: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self {
            canvas_rect: Rect::NOTHING,
            clip_rect: Rect::EVERYTHING,
            last_pos: None,
            active: false,
        }
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            ..Default::default()
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn set_clip_rect(&mut self, rect: Rect) {
        self.clip_rect = rect;
    }

    fn accepts_press(&self, frame: &PointerFrame, pos: Pos2) -> bool {
        frame.over_canvas && self.canvas_rect.intersect(self.clip_rect).contains(pos)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn to_canvas(&self, screen_pos: Pos2) -> Pos2 {
        Pos2::ZERO + (screen_pos - self.canvas_rect.min)
    }

    pub fn process(&mut self, frame: PointerFrame) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        if frame.pressed && !self.active {
            if let Some(pos) = frame.pos.filter(|pos| self.accepts_press(&frame, *pos)) {
                self.active = true;
                self.last_pos = Some(pos);
                events.push(CanvasEvent::Press(self.to_canvas(pos)));
            }
        }

        if !self.active {
            return events;
        }

        if let Some(pos) = frame.pos {
            if frame.down && Some(pos) != self.last_pos {
                events.push(CanvasEvent::Drag(self.to_canvas(pos)));
            }
            self.last_pos = Some(pos);
        }

        if frame.released || !frame.down {
            // The pointer may have left the window, fall back to where it was last seen
            if let Some(pos) = frame.pos.or(self.last_pos) {
                events.push(CanvasEvent::Release(self.to_canvas(pos)));
            }
            self.active = false;
            self.last_pos = None;
        }

        events
    }
}

use std::path::PathBuf;

use crate::config::CanvasConfig;
use crate::error::PaintResult;
use crate::file_io;
use crate::input::{InputHandler, Shortcut};
use crate::panels::{central_panel, tools_panel};
use crate::session::PaintSession;
use crate::tools::ToolSettings;

/// Message shown in a small window until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub is_error: bool,
}

pub struct PaintApp {
    session: PaintSession,
    input: InputHandler,
    texture: Option<egui::TextureHandle>,
    /// Canvas changed since the texture was last uploaded
    canvas_dirty: bool,
    notification: Option<Notification>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: CanvasConfig) -> PaintResult<Self> {
        // Tool settings survive restarts, the drawing itself does not
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value::<ToolSettings>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| ToolSettings {
                stroke_width: config.default_stroke_width,
                ..Default::default()
            });

        Ok(Self::from_session(PaintSession::with_settings(config, settings)?))
    }

    pub fn from_session(session: PaintSession) -> Self {
        Self {
            session,
            input: InputHandler::default(),
            texture: None,
            canvas_dirty: true,
            notification: None,
        }
    }

    pub fn session(&self) -> &PaintSession {
        &self.session
    }

    /// Mutable access to the session. The canvas texture is re-uploaded on
    /// the next frame.
    pub fn session_mut(&mut self) -> &mut PaintSession {
        self.canvas_dirty = true;
        &mut self.session
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    fn notify(&mut self, message: String, is_error: bool) {
        if is_error {
            log::error!("{}", message);
        }
        self.notification = Some(Notification { message, is_error });
    }

    pub fn new_canvas(&mut self) {
        self.session_mut().new_canvas();
    }

    pub fn undo(&mut self) {
        self.session_mut().undo();
    }

    pub fn redo(&mut self) {
        self.session_mut().redo();
    }

    pub fn clear_all(&mut self) {
        self.session_mut().clear_all();
    }

    /// Ask for a destination and save the canvas there as PNG.
    pub fn save_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Image")
            .add_filter("PNG Files", &["png"])
            .save_file()
        else {
            return;
        };
        self.save_to(path);
    }

    pub fn save_to(&mut self, path: PathBuf) {
        match file_io::save_png(&self.session.export_raster(), &path) {
            Ok(written) => self.notify(format!("Image saved to {}", written.display()), false),
            Err(err) => self.notify(format!("Failed to save image: {}", err), true),
        }
    }

    /// Ask for an image file and load it onto the canvas.
    pub fn open_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_title("Open Image")
            .add_filter("Image Files", file_io::IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        self.open_from(path);
    }

    /// Load `path` scaled to the canvas. A failure leaves the drawing and its
    /// history as they were.
    pub fn open_from(&mut self, path: PathBuf) {
        let (width, height) = (self.session.canvas().width(), self.session.canvas().height());
        let result = file_io::load_image(&path, width, height)
            .and_then(|image| self.session_mut().import_raster(image));

        match result {
            Ok(()) => self.notify(format!("Image loaded from {}", path.display()), false),
            Err(err) => self.notify(format!("Failed to open image: {}", err), true),
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        for shortcut in Shortcut::poll(ctx) {
            log::debug!("Shortcut {:?}", shortcut);
            match shortcut {
                Shortcut::New => self.new_canvas(),
                Shortcut::Save => self.save_dialog(),
                Shortcut::Open => self.open_dialog(),
                Shortcut::Undo => self.undo(),
                Shortcut::Redo => self.redo(),
            }
        }
    }

    /// Texture showing the current canvas, uploading it first if stale.
    pub(crate) fn canvas_texture(&mut self, ctx: &egui::Context) -> &egui::TextureHandle {
        let options = egui::TextureOptions::NEAREST;
        if let Some(texture) = &mut self.texture {
            if self.canvas_dirty {
                texture.set(self.session.canvas().to_color_image(), options);
            }
        }
        self.canvas_dirty = false;

        self.texture
            .get_or_insert_with(|| ctx.load_texture("canvas", self.session.canvas().to_color_image(), options))
    }

    fn show_notification(&mut self, ctx: &egui::Context) {
        let Some(notification) = &self.notification else {
            return;
        };

        let title = if notification.is_error { "Error" } else { "Notice" };
        let mut dismissed = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&notification.message);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });

        if dismissed {
            self.dismiss_notification();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.session.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.show_notification(ctx);
    }
}

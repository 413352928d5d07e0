use std::sync::Arc;

use egui::{Color32, Pos2};

use crate::canvas::{Canvas, RasterImage};
use crate::command::{Command, CommandHistory};
use crate::config::CanvasConfig;
use crate::document::Document;
use crate::error::PaintResult;
use crate::fill;
use crate::renderer::Renderer;
use crate::shape::Shape;
use crate::tools::{GestureOutcome, InteractionController, ToolKind, ToolSettings};

/// One open drawing: the canvas raster, the committed document, its history
/// and the tool settings the next gesture will use.
///
/// This is the surface the UI layer talks to. Pointer events go through
/// [`on_press`](Self::on_press), [`on_drag`](Self::on_drag) and
/// [`on_release`](Self::on_release); everything else is a call-through from a
/// button or shortcut.
#[derive(Debug)]
pub struct PaintSession {
    config: CanvasConfig,
    canvas: Canvas,
    document: Document,
    history: CommandHistory,
    renderer: Renderer,
    settings: ToolSettings,
    controller: InteractionController,
}

impl PaintSession {
    /// Create a blank session and commit its baseline.
    pub fn new(config: CanvasConfig) -> PaintResult<Self> {
        let settings = ToolSettings {
            stroke_width: config.default_stroke_width,
            ..Default::default()
        };
        Self::with_settings(config, settings)
    }

    /// Like [`new`](Self::new) but starting from previously saved tool settings.
    pub fn with_settings(config: CanvasConfig, settings: ToolSettings) -> PaintResult<Self> {
        config.validate()?;
        let canvas = Canvas::new(config.width, config.height)?;

        let mut session = Self {
            renderer: Renderer::new(config.background_color()),
            controller: InteractionController::new(&config),
            canvas,
            document: Document::new(),
            history: CommandHistory::new(),
            settings,
            config,
        };
        session.settings.stroke_width = session.clamp_width(session.settings.stroke_width);
        session.history.execute(
            Command::Reset {
                previous: Document::new(),
            },
            &mut session.document,
        );
        session.redraw();
        Ok(session)
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn shapes(&self) -> &[Shape] {
        self.document.shapes()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    // Tool settings

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.settings.tool = tool;
    }

    pub fn set_color(&mut self, color: Color32) {
        self.settings.set_color(color);
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.settings.stroke_width = self.clamp_width(width);
    }

    pub fn set_filled_default(&mut self, filled: bool) {
        self.settings.filled = filled;
    }

    fn clamp_width(&self, width: f32) -> f32 {
        if width.is_nan() {
            return self.config.default_stroke_width;
        }
        width.clamp(self.config.min_stroke_width, self.config.max_stroke_width)
    }

    // Pointer input

    pub fn on_press(&mut self, pos: Pos2) {
        let outcome = self.controller.on_press(pos, &self.settings);
        self.apply(outcome);
    }

    pub fn on_drag(&mut self, pos: Pos2) {
        let outcome = self.controller.on_drag(pos);
        self.apply(outcome);
    }

    pub fn on_release(&mut self, pos: Pos2) {
        let outcome = self.controller.on_release(pos);
        self.apply(outcome);
    }

    fn apply(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::None => {}
            GestureOutcome::Preview(shape) => {
                self.redraw();
                self.renderer.draw_shape(&mut self.canvas, &shape);
            }
            GestureOutcome::Commit(shape) => {
                self.history.execute(Command::AddShape { shape }, &mut self.document);
                self.redraw();
            }
            GestureOutcome::Fill(pos) => {
                self.fill_at(pos);
            }
        }
    }

    /// Fill the topmost closed shape under `pos` with the active color.
    /// Returns `false` when nothing was hit.
    pub fn fill_at(&mut self, pos: Pos2) -> bool {
        let Some(command) = fill::fill_at(
            &self.document,
            pos,
            self.settings.color32(),
            self.config.triangle_tolerance,
        ) else {
            return false;
        };
        self.history.execute(command, &mut self.document);
        self.redraw();
        true
    }

    // History

    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.document);
        if undone {
            self.redraw();
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.document);
        if redone {
            self.redraw();
        }
        redone
    }

    /// Blank the canvas and commit that as a new history point.
    pub fn new_canvas(&mut self) {
        log::info!("New canvas");
        self.reset();
    }

    pub fn clear_all(&mut self) {
        log::info!("Clearing canvas");
        self.reset();
    }

    fn reset(&mut self) {
        let previous = self.document.clone();
        self.history.execute(Command::Reset { previous }, &mut self.document);
        self.redraw();
    }

    // Raster exchange

    /// The canvas as currently displayed.
    pub fn export_raster(&self) -> RasterImage {
        self.canvas.to_rgba_image()
    }

    /// Replace the drawing with `image`, which must match the canvas size.
    /// On error nothing is changed.
    pub fn import_raster(&mut self, image: RasterImage) -> PaintResult<()> {
        self.canvas.ensure_dimensions(&image)?;

        log::info!("Importing {}x{} raster", image.width(), image.height());
        let command = Command::ImportRaster {
            image: Arc::new(image),
            previous: self.document.clone(),
        };
        self.history.execute(command, &mut self.document);
        self.redraw();
        Ok(())
    }

    fn redraw(&mut self) {
        self.renderer
            .redraw(&mut self.canvas, self.document.backdrop(), self.document.shapes());
    }
}

use crate::PaintApp;
use crate::input::{CanvasEvent, PointerFrame};

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas = app.session().canvas();
        let size = egui::vec2(canvas.width() as f32, canvas.height() as f32);

        egui::ScrollArea::both().show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let canvas_rect = response.rect;

            // Presses over a covering window or outside the scrolled viewport don't reach the canvas
            let input = app.input_mut();
            input.set_canvas_rect(canvas_rect);
            input.set_clip_rect(ui.clip_rect());
            let events = input.process(PointerFrame::from_egui(ctx, &response));
            if !events.is_empty() {
                let session = app.session_mut();
                for event in events {
                    match event {
                        CanvasEvent::Press(pos) => session.on_press(pos),
                        CanvasEvent::Drag(pos) => session.on_drag(pos),
                        CanvasEvent::Release(pos) => session.on_release(pos),
                    }
                }
            }

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }

            // Render the canvas
            let texture = app.canvas_texture(ctx);
            painter.image(
                texture.id(),
                canvas_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
        });
    });
}

use egui::Color32;

use crate::PaintApp;
use crate::tools::ToolKind;

/// Palette offered as one-click swatches.
pub const BASIC_COLORS: [Color32; 8] = [
    Color32::BLACK,
    Color32::from_rgb(128, 128, 128),
    Color32::from_rgb(128, 0, 128),
    Color32::from_rgb(0, 0, 255),
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(255, 69, 0),
    Color32::from_rgb(255, 0, 0),
    Color32::from_rgb(255, 255, 0),
];

const SHAPE_TOOLS: [ToolKind; 4] = [ToolKind::Line, ToolKind::Rectangle, ToolKind::Oval, ToolKind::Triangle];
const OTHER_TOOLS: [ToolKind; 3] = [ToolKind::Freehand, ToolKind::Eraser, ToolKind::FillShape];

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("File");
            ui.horizontal(|ui| {
                if ui.button("New").on_hover_text("New canvas (Ctrl+N)").clicked() {
                    app.new_canvas();
                }
                if ui.button("Open").on_hover_text("Open an image (Ctrl+O)").clicked() {
                    app.open_dialog();
                }
                if ui.button("Save").on_hover_text("Save as PNG (Ctrl+S)").clicked() {
                    app.save_dialog();
                }
            });
            ui.separator();

            ui.heading("Colors");
            color_section(app, ui);
            ui.separator();

            ui.heading("Shapes");
            tool_buttons(app, ui, &SHAPE_TOOLS);
            ui.separator();

            ui.heading("Tools");
            tool_buttons(app, ui, &OTHER_TOOLS);
            ui.separator();

            let mut width = app.session().settings().stroke_width;
            let (min, max) = {
                let config = app.session().config();
                (config.min_stroke_width, config.max_stroke_width)
            };
            if ui
                .add(egui::Slider::new(&mut width, min..=max).text("Stroke width"))
                .changed()
            {
                app.session_mut().set_stroke_width(width);
            }

            let mut filled = app.session().settings().filled;
            if ui.checkbox(&mut filled, "Fill new shapes").changed() {
                app.session_mut().set_filled_default(filled);
            }
            ui.separator();

            // Undo/Redo section
            ui.horizontal(|ui| {
                let can_undo = app.session().history().can_undo();
                let can_redo = app.session().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
                if ui.button("Clear").on_hover_text("Clear the whole canvas").clicked() {
                    app.clear_all();
                }
            });

            ui.separator();
            history_grid(app, ui);
        });
}

fn color_section(app: &mut PaintApp, ui: &mut egui::Ui) {
    let active = app.session().settings().color32();

    ui.horizontal_wrapped(|ui| {
        for color in BASIC_COLORS {
            let (rect, response) = ui.allocate_exact_size(egui::vec2(20.0, 20.0), egui::Sense::click());
            let stroke = if color == active {
                egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
            } else {
                egui::Stroke::new(1.0, Color32::DARK_GRAY)
            };
            ui.painter().rect_filled(rect, 2.0, color);
            ui.painter().rect_stroke(rect, 2.0, stroke);

            if response.clicked() {
                app.session_mut().set_color(color);
            }
        }
    });

    ui.horizontal(|ui| {
        let mut picked = active;
        ui.label("Custom:");
        if ui.color_edit_button_srgba(&mut picked).changed() {
            app.session_mut().set_color(picked);
        }
    });
}

fn tool_buttons(app: &mut PaintApp, ui: &mut egui::Ui, tools: &[ToolKind]) {
    let active = app.session().settings().tool;

    ui.horizontal_wrapped(|ui| {
        for &tool in tools {
            if ui
                .selectable_label(active == tool, tool.name())
                .on_hover_text(tool.tooltip())
                .clicked()
            {
                log::info!("Tool selected from UI: {}", tool.name());
                app.session_mut().set_tool(tool);
            }
        }
    });
}

fn history_grid(app: &PaintApp, ui: &mut egui::Ui) {
    let history = app.session().history();
    ui.horizontal(|ui| {
        ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
        ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
    });

    egui::Grid::new("command_history_grid")
        .num_columns(2)
        .spacing([40.0, 4.0])
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Undo Stack");
            ui.strong("Redo Stack");
            ui.end_row();

            let undo_stack = history.undo_stack();
            let redo_stack = history.redo_stack();

            for i in 0..undo_stack.len().max(redo_stack.len()) {
                ui.label(undo_stack.get(i).map_or("", |command| command.label()));
                ui.label(redo_stack.get(i).map_or("", |command| command.label()));
                ui.end_row();
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_has_a_button() {
        for tool in ToolKind::ALL {
            assert!(SHAPE_TOOLS.contains(&tool) || OTHER_TOOLS.contains(&tool));
        }
    }

    #[test]
    fn test_basic_colors_are_opaque_and_distinct() {
        for (i, color) in BASIC_COLORS.iter().enumerate() {
            assert!(color.is_opaque());
            assert!(!BASIC_COLORS[i + 1..].contains(color));
        }
    }
}

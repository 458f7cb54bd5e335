use crate::PixelStudioApp;
use crate::color;
use crate::command::Command;
use crate::components::ToolButton;
use crate::settings::MAX_CANVAS_SIZE;
use crate::tools::ToolKind;

pub fn toolbar_panel(app: &mut PixelStudioApp, ctx: &egui::Context) {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("toolbar_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let document = app.document();
            let active_tool = document.tool();
            let mut active_color = document.color();
            let can_undo = document.can_undo();
            let can_redo = document.can_redo();
            let can_export = document.settled_grid().is_some();

            // Tools
            for tool in ToolKind::ALL {
                if ToolButton::new(tool, active_tool == tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    commands.push(Command::SelectTool(tool));
                }
            }
            ui.separator();

            // Color
            if egui::color_picker::color_edit_button_srgba(
                ui,
                &mut active_color,
                egui::color_picker::Alpha::Opaque,
            )
            .changed()
            {
                commands.push(Command::SetColor(active_color));
            }

            let hex = ui.add(
                egui::TextEdit::singleline(app.hex_input_mut())
                    .font(egui::TextStyle::Monospace)
                    .desired_width(64.0),
            );
            if hex.lost_focus() {
                match color::parse_hex(app.hex_input_mut().trim()) {
                    Ok(parsed) => {
                        active_color = parsed;
                        commands.push(Command::SetColor(parsed));
                    }
                    Err(err) => {
                        log::warn!("Rejected color input: {}", err);
                        app.set_status(format!("Invalid color: {err}"));
                    }
                }
            }
            if !hex.has_focus() {
                *app.hex_input_mut() = color::to_hex(active_color);
            }
            ui.separator();

            // Undo/Redo section
            if ui
                .add_enabled(can_undo, egui::Button::new("⟲ Undo"))
                .clicked()
            {
                commands.push(Command::Undo);
            }
            if ui
                .add_enabled(can_redo, egui::Button::new("⟳ Redo"))
                .clicked()
            {
                commands.push(Command::Redo);
            }
            ui.separator();

            if ui
                .add_enabled(can_export, egui::Button::new("⬇ Download"))
                .clicked()
            {
                app.download();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Canvas:");
            let (width, height) = app.pending_size_mut();
            ui.add(egui::DragValue::new(width).range(1..=MAX_CANVAS_SIZE));
            ui.label("×");
            ui.add(egui::DragValue::new(height).range(1..=MAX_CANVAS_SIZE));
            let (width, height) = *app.pending_size_mut();
            if ui.button("New").clicked() {
                commands.push(Command::NewCanvas { width, height });
            }
            ui.separator();

            let settings = app.settings_mut();
            ui.label("Zoom:");
            ui.add(egui::Slider::new(&mut settings.pixel_size, 4.0..=40.0).suffix(" px"));
            ui.checkbox(&mut settings.show_grid_lines, "Grid");

            let mut skip = settings.skip_unchanged_commits;
            if ui
                .checkbox(&mut skip, "Skip empty history steps")
                .changed()
            {
                app.set_skip_unchanged_commits(skip);
            }
        });
        ui.add_space(4.0);
    });

    for command in commands {
        app.execute_command(command);
    }
}

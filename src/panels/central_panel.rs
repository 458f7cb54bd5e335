use crate::PixelStudioApp;
use crate::input::CanvasLayout;

pub fn central_panel(app: &mut PixelStudioApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let grid = app.document().grid();
            let settings = app.settings();
            let size = CanvasLayout::new(
                egui::Pos2::ZERO,
                settings.pixel_size,
                grid.width(),
                grid.height(),
            )
            .size();

            let (response, painter) = ui.allocate_painter(size, egui::Sense::click_and_drag());
            let layout = CanvasLayout::new(
                response.rect.min,
                settings.pixel_size,
                grid.width(),
                grid.height(),
            );

            // Handle input before painting so the frame shows the latest stroke
            app.handle_input(ctx, &response, &layout);

            let document = app.document();
            let preview = document.preview();
            app.renderer().render(
                &painter,
                &layout,
                document.grid(),
                preview.as_ref(),
                app.settings().show_grid_lines,
            );

            if response.hovered() {
                ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    });
}

pub fn status_panel(app: &PixelStudioApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let document = app.document();
            let history = document.history();
            ui.label(format!(
                "{}x{}",
                document.grid().width(),
                document.grid().height()
            ));
            ui.separator();
            ui.label(format!("Tool: {}", document.tool().name()));
            ui.separator();
            ui.label(format!("State: {}", document.gestures().current_state_name()));
            ui.separator();
            if let Some(cursor) = history.cursor() {
                ui.label(format!("History: {} / {}", cursor, history.len() - 1));
            }
            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
    });
}

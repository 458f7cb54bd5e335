use eframe::egui::{self, Color32, Painter, Stroke};

use crate::gesture::Preview;
use crate::grid::{GridPos, PixelGrid};
use crate::input::CanvasLayout;

/// Paints the canvas, its grid lines and the shape preview
#[derive(Debug, Clone)]
pub struct Renderer {
    /// Checkerboard colors shown behind empty cells
    checker_light: Color32,
    checker_dark: Color32,
    grid_line: Stroke,
    /// Opacity applied to preview cells
    preview_alpha: u8,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            checker_light: Color32::WHITE,
            checker_dark: Color32::from_gray(235),
            grid_line: Stroke::new(1.0, Color32::from_gray(225)),
            preview_alpha: 160,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the grid and, while previewing, the shape on top of it
    pub fn render(
        &self,
        painter: &Painter,
        layout: &CanvasLayout,
        grid: &PixelGrid,
        preview: Option<&Preview>,
        show_grid_lines: bool,
    ) {
        for (x, y, color) in grid.iter() {
            let cell = GridPos::new(x as i32, y as i32);
            let fill = color.unwrap_or_else(|| self.checker_color(cell));
            painter.rect_filled(layout.cell_rect(cell), 0.0, fill);
        }

        if let Some(preview) = preview {
            for &cell in &preview.cells {
                if !grid.contains(cell.x, cell.y) {
                    continue;
                }
                let fill = self.preview_color(preview, cell);
                painter.rect_filled(layout.cell_rect(cell), 0.0, fill);
            }
        }

        if show_grid_lines && layout.pixel_size >= 4.0 {
            self.paint_grid_lines(painter, layout);
        }
        painter.rect_stroke(layout.rect(), 0.0, Stroke::new(1.0, Color32::from_gray(160)));
    }

    fn checker_color(&self, cell: GridPos) -> Color32 {
        if (cell.x + cell.y) % 2 == 0 {
            self.checker_light
        } else {
            self.checker_dark
        }
    }

    /// Preview cells are drawn translucent; an erasing preview shows the
    /// checkerboard it would reveal.
    fn preview_color(&self, preview: &Preview, cell: GridPos) -> Color32 {
        let base = preview.color.unwrap_or_else(|| self.checker_color(cell));
        Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), self.preview_alpha)
    }

    fn paint_grid_lines(&self, painter: &Painter, layout: &CanvasLayout) {
        let rect = layout.rect();
        for x in 1..layout.width {
            let sx = rect.min.x + x as f32 * layout.pixel_size;
            painter.line_segment([egui::pos2(sx, rect.min.y), egui::pos2(sx, rect.max.y)], self.grid_line);
        }
        for y in 1..layout.height {
            let sy = rect.min.y + y as f32 * layout.pixel_size;
            painter.line_segment([egui::pos2(rect.min.x, sy), egui::pos2(rect.max.x, sy)], self.grid_line);
        }
    }
}

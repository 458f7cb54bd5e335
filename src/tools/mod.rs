use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::grid::{CellColor, GridPos};
use crate::raster;

/// The drawing tools offered by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToolKind {
    #[default]
    Pencil,
    Eraser,
    Square,
    Circle,
}

/// How a tool turns pointer motion into cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    /// Paints directly into the grid along the pointer path
    Freehand,
    /// Shows a preview while dragging and paints once on release
    Shape,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Pencil,
        ToolKind::Eraser,
        ToolKind::Square,
        ToolKind::Circle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Eraser => "Eraser",
            Self::Square => "Square",
            Self::Circle => "Circle",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Pencil => "✏",
            Self::Eraser => "⌫",
            Self::Square => "⏹",
            Self::Circle => "⏺",
        }
    }

    /// Keyboard key that selects this tool
    pub fn shortcut(self) -> egui::Key {
        match self {
            Self::Pencil => egui::Key::P,
            Self::Eraser => egui::Key::E,
            Self::Square => egui::Key::S,
            Self::Circle => egui::Key::C,
        }
    }

    pub fn mode(self) -> ToolMode {
        match self {
            Self::Pencil | Self::Eraser => ToolMode::Freehand,
            Self::Square | Self::Circle => ToolMode::Shape,
        }
    }

    /// The cell color this tool writes when the active color is `color`
    pub fn paint_color(self, color: Color32) -> CellColor {
        match self {
            Self::Eraser => None,
            Self::Pencil | Self::Square | Self::Circle => Some(color),
        }
    }

    /// Cells covered by the shape spanned from `anchor` to `current`.
    /// Freehand tools have no shape.
    pub fn shape_cells(self, anchor: GridPos, current: GridPos) -> Option<Vec<GridPos>> {
        match self {
            Self::Square => Some(raster::filled_rectangle(anchor, current)),
            Self::Circle => Some(raster::filled_circle(anchor, current)),
            Self::Pencil | Self::Eraser => None,
        }
    }
}

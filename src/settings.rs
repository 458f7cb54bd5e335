use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::tools::ToolKind;

pub const DEFAULT_CANVAS_SIZE: usize = 32;
pub const DEFAULT_PIXEL_SIZE: f32 = 20.0;
pub const MAX_CANVAS_SIZE: usize = 256;

/// Editor preferences restored between runs. The drawing itself is not part
/// of these settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct EditorSettings {
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// On-screen size of one cell, in points
    pub pixel_size: f32,
    pub tool: ToolKind,
    pub color: Color32,
    pub show_grid_lines: bool,
    /// Skip the history snapshot for gestures that changed no cell
    pub skip_unchanged_commits: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            pixel_size: DEFAULT_PIXEL_SIZE,
            tool: ToolKind::Pencil,
            color: Color32::BLACK,
            show_grid_lines: true,
            skip_unchanged_commits: false,
        }
    }
}

impl EditorSettings {
    /// Canvas size limited to `1..=MAX_CANVAS_SIZE` on both axes
    pub fn canvas_size(&self) -> (usize, usize) {
        (
            self.canvas_width.clamp(1, MAX_CANVAS_SIZE),
            self.canvas_height.clamp(1, MAX_CANVAS_SIZE),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert_eq!(settings.canvas_size(), (32, 32));
        assert_eq!(settings.tool, ToolKind::Pencil);
        assert_eq!(settings.color, Color32::BLACK);
        assert!(!settings.skip_unchanged_commits);
    }

    #[test]
    fn test_canvas_size_is_clamped() {
        let settings = EditorSettings {
            canvas_width: 0,
            canvas_height: 10_000,
            ..Default::default()
        };
        assert_eq!(settings.canvas_size(), (1, MAX_CANVAS_SIZE));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: EditorSettings =
            serde_json::from_str(r#"{ "canvas_width": 16, "tool": "Circle" }"#).unwrap();
        assert_eq!(settings.canvas_size(), (16, 32));
        assert_eq!(settings.tool, ToolKind::Circle);
        assert_eq!(settings.pixel_size, DEFAULT_PIXEL_SIZE);
    }

    #[test]
    fn test_round_trip() {
        let settings = EditorSettings {
            color: Color32::from_rgb(12, 34, 56),
            tool: ToolKind::Eraser,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let restored: EditorSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, settings);
    }
}

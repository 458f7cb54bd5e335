use egui::Color32;

use super::CommandResult;
use crate::document::Document;
use crate::tools::ToolKind;

/// Actions requested by the toolbar and keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Change the tool used by the next gesture
    SelectTool(ToolKind),
    /// Change the color used by the next gesture
    SetColor(Color32),
    Undo,
    Redo,
    /// Start over on a blank canvas of the given size
    NewCanvas { width: usize, height: usize },
}

impl Command {
    /// Human readable label, used for logging and tooltips
    pub fn label(&self) -> &'static str {
        match self {
            Command::SelectTool(_) => "Select Tool",
            Command::SetColor(_) => "Set Color",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::NewCanvas { .. } => "New Canvas",
        }
    }

    /// Applies the command to the document
    pub fn execute(&self, document: &mut Document) -> CommandResult {
        match *self {
            Command::SelectTool(tool) => document.select_tool(tool),
            Command::SetColor(color) => document.set_color(color),
            Command::Undo => {
                if !document.undo()? {
                    log::debug!("Nothing to undo");
                }
            }
            Command::Redo => {
                if !document.redo()? {
                    log::debug!("Nothing to redo");
                }
            }
            Command::NewCanvas { width, height } => document.resize(width, height)?,
        }
        Ok(())
    }
}

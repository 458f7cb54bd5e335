use egui::Color32;

use crate::command::HistoryStore;
use crate::error::{EditorError, Result};
use crate::gesture::{GestureController, GestureOutcome, Preview};
use crate::grid::{GridPos, PixelGrid};
use crate::settings::EditorSettings;
use crate::tools::ToolKind;

/// One editing session: the live canvas, its history and the pointer state.
#[derive(Debug)]
pub struct Document {
    grid: PixelGrid,
    history: HistoryStore,
    gestures: GestureController,
    tool: ToolKind,
    color: Color32,
    skip_unchanged_commits: bool,
}

impl Document {
    /// Creates a blank canvas whose first history entry is the blank state.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let grid = PixelGrid::new(width, height)?;
        let history = HistoryStore::with_initial(&grid);
        Ok(Self {
            grid,
            history,
            gestures: GestureController::new(),
            tool: ToolKind::default(),
            color: Color32::BLACK,
            skip_unchanged_commits: false,
        })
    }

    pub fn from_settings(settings: &EditorSettings) -> Result<Self> {
        let (width, height) = settings.canvas_size();
        let mut document = Self::new(width, height)?;
        document.tool = settings.tool;
        document.color = settings.color;
        document.skip_unchanged_commits = settings.skip_unchanged_commits;
        Ok(document)
    }

    /// The live grid, including strokes of a gesture in progress
    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// The grid, but only once no gesture is in progress
    pub fn settled_grid(&self) -> Option<&PixelGrid> {
        (!self.gestures.is_active()).then_some(&self.grid)
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gestures.is_active()
    }

    pub fn preview(&self) -> Option<Preview> {
        self.gestures.preview()
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    /// Selects the tool for the next gesture. A gesture in progress keeps
    /// the tool it started with.
    pub fn select_tool(&mut self, tool: ToolKind) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool.name());
            self.tool = tool;
        }
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    /// Sets the color for the next gesture
    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    pub fn set_skip_unchanged_commits(&mut self, skip: bool) {
        self.skip_unchanged_commits = skip;
    }

    pub fn pointer_down(&mut self, pos: GridPos) {
        let interrupted = self
            .gestures
            .pointer_down(pos, self.tool, self.color, &mut self.grid);
        if let Some(outcome) = interrupted {
            log::warn!("Pointer pressed before the previous gesture was released");
            self.resolve(outcome);
        }
    }

    pub fn pointer_move(&mut self, pos: GridPos) {
        self.gestures.pointer_move(pos, &mut self.grid);
    }

    pub fn pointer_up(&mut self, pos: GridPos) -> Option<GestureOutcome> {
        let outcome = self.gestures.pointer_up(pos, &mut self.grid)?;
        self.resolve(outcome);
        Some(outcome)
    }

    /// The pointer left the canvas surface without a release
    pub fn pointer_leave(&mut self) -> Option<GestureOutcome> {
        let outcome = self.gestures.pointer_leave(&mut self.grid)?;
        self.resolve(outcome);
        Some(outcome)
    }

    fn resolve(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Finished { changed, .. } => {
                if changed || !self.skip_unchanged_commits {
                    self.history.commit(&self.grid);
                } else {
                    log::debug!("Skipping snapshot for unchanged gesture");
                }
            }
            GestureOutcome::Discarded { .. } => {}
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.gestures.is_active() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.gestures.is_active() && self.history.can_redo()
    }

    /// Restores the previous snapshot. Returns `Ok(false)` when there is
    /// nothing to undo or a gesture is in progress.
    pub fn undo(&mut self) -> Result<bool> {
        if self.gestures.is_active() {
            log::debug!("Undo ignored during a gesture");
            return Ok(false);
        }
        let Some(snapshot) = self.history.undo() else {
            return Ok(false);
        };
        if let Err(err) = self.grid.replace_with(snapshot) {
            self.history.redo();
            log::error!("Undo rejected: {err}");
            return Err(err);
        }
        Ok(true)
    }

    /// Re-applies the next snapshot. Returns `Ok(false)` when there is
    /// nothing to redo or a gesture is in progress.
    pub fn redo(&mut self) -> Result<bool> {
        if self.gestures.is_active() {
            log::debug!("Redo ignored during a gesture");
            return Ok(false);
        }
        let Some(snapshot) = self.history.redo() else {
            return Ok(false);
        };
        if let Err(err) = self.grid.replace_with(snapshot) {
            self.history.undo();
            log::error!("Redo rejected: {err}");
            return Err(err);
        }
        Ok(true)
    }

    /// Replaces the canvas with a blank one of the given size and restarts
    /// history from it.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<()> {
        if self.gestures.is_active() {
            return Err(EditorError::GestureInProgress);
        }
        self.grid = PixelGrid::new(width, height)?;
        self.history.reset(&self.grid);
        log::info!("New {}x{} canvas", width, height);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_blank_entry() {
        let document = Document::new(4, 4).unwrap();
        assert!(document.grid().is_blank());
        assert_eq!(document.history().len(), 1);
        assert_eq!(document.history().cursor(), Some(0));
        assert!(!document.can_undo());
        assert!(!document.can_redo());
    }

    #[test]
    fn test_settled_grid_hidden_mid_gesture() {
        let mut document = Document::new(4, 4).unwrap();
        document.pointer_down(GridPos::new(0, 0));
        assert!(document.settled_grid().is_none());
        document.pointer_up(GridPos::new(0, 0));
        assert!(document.settled_grid().is_some());
    }

    #[test]
    fn test_tool_change_mid_gesture_is_deferred() {
        let mut document = Document::new(4, 4).unwrap();
        document.set_color(Color32::RED);
        document.pointer_down(GridPos::new(0, 0));
        document.select_tool(ToolKind::Eraser);
        document.set_color(Color32::BLUE);
        document.pointer_move(GridPos::new(2, 0));
        document.pointer_up(GridPos::new(2, 0));

        for x in 0..3 {
            assert_eq!(document.grid().get(x, 0), Some(Color32::RED));
        }
        assert_eq!(document.tool(), ToolKind::Eraser);
    }

    #[test]
    fn test_noop_gesture_commits_by_default() {
        let mut document = Document::new(2, 2).unwrap();
        document.select_tool(ToolKind::Eraser);
        document.pointer_down(GridPos::new(0, 0));
        document.pointer_up(GridPos::new(0, 0));
        assert_eq!(document.history().len(), 2);
    }

    #[test]
    fn test_noop_gesture_skipped_when_configured() {
        let mut document = Document::new(2, 2).unwrap();
        document.set_skip_unchanged_commits(true);
        document.select_tool(ToolKind::Eraser);
        document.pointer_down(GridPos::new(0, 0));
        document.pointer_up(GridPos::new(0, 0));
        assert_eq!(document.history().len(), 1);
    }

    #[test]
    fn test_undo_ignored_mid_gesture() {
        let mut document = Document::new(2, 2).unwrap();
        document.pointer_down(GridPos::new(0, 0));
        document.pointer_up(GridPos::new(0, 0));
        document.pointer_down(GridPos::new(1, 1));
        assert!(!document.can_undo());
        assert_eq!(document.undo(), Ok(false));
        assert_eq!(document.grid().painted_cells(), 2);
    }

    #[test]
    fn test_discarded_shape_commits_nothing() {
        let mut document = Document::new(4, 4).unwrap();
        document.select_tool(ToolKind::Square);
        document.pointer_down(GridPos::new(0, 0));
        document.pointer_move(GridPos::new(3, 3));
        assert_eq!(document.preview().map(|p| p.cells.len()), Some(16));
        document.pointer_leave();
        assert!(document.grid().is_blank());
        assert_eq!(document.history().len(), 1);
    }

    #[test]
    fn test_resize_restarts_history() {
        let mut document = Document::new(4, 4).unwrap();
        document.pointer_down(GridPos::new(0, 0));
        document.pointer_up(GridPos::new(0, 0));
        document.resize(8, 2).unwrap();

        assert_eq!((document.grid().width(), document.grid().height()), (8, 2));
        assert!(document.grid().is_blank());
        assert_eq!(document.history().len(), 1);
        assert_eq!(document.undo(), Ok(false));
    }

    #[test]
    fn test_resize_rejected_mid_gesture() {
        let mut document = Document::new(4, 4).unwrap();
        document.pointer_down(GridPos::new(0, 0));
        assert_eq!(document.resize(8, 8), Err(EditorError::GestureInProgress));
        assert_eq!(document.resize(0, 8), Err(EditorError::GestureInProgress));
    }

    #[test]
    fn test_from_settings() {
        let settings = EditorSettings {
            canvas_width: 10,
            canvas_height: 6,
            tool: ToolKind::Circle,
            color: Color32::RED,
            ..Default::default()
        };
        let document = Document::from_settings(&settings).unwrap();
        assert_eq!(document.grid().width(), 10);
        assert_eq!(document.grid().height(), 6);
        assert_eq!(document.tool(), ToolKind::Circle);
        assert_eq!(document.color(), Color32::RED);
    }
}

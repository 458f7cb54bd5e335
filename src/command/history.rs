use crate::grid::PixelGrid;

/// Linear undo/redo log of full canvas snapshots.
///
/// `cursor` points at the snapshot currently shown. Entries after the cursor
/// are only reachable through redo, and are dropped by the next commit.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<PixelGrid>,
    cursor: Option<usize>,
}

impl HistoryStore {
    /// Creates an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history whose first entry is `initial`
    pub fn with_initial(initial: &PixelGrid) -> Self {
        let mut history = Self::new();
        history.commit(initial);
        history
    }

    /// Stores a deep copy of `grid`, discarding any redo tail.
    pub fn commit(&mut self, grid: &PixelGrid) {
        let keep = self.cursor.map_or(0, |cursor| cursor + 1);
        if keep < self.entries.len() {
            log::debug!("Dropping {} redo entries", self.entries.len() - keep);
        }
        self.entries.truncate(keep);
        self.entries.push(grid.clone());
        self.cursor = Some(self.entries.len() - 1);
        log::debug!("Committed history entry {}", self.entries.len() - 1);
    }

    /// Steps back one entry and returns it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&PixelGrid> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)? - 1;
        self.cursor = Some(cursor);
        log::debug!("Undo to history entry {}", cursor);
        self.entries.get(cursor)
    }

    /// Steps forward one entry and returns it, or `None` at the newest entry.
    pub fn redo(&mut self) -> Option<&PixelGrid> {
        let cursor = self.cursor? + 1;
        if cursor >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor);
        log::debug!("Redo to history entry {}", cursor);
        self.entries.get(cursor)
    }

    /// Drops every entry and starts over from `initial`
    pub fn reset(&mut self, initial: &PixelGrid) {
        self.entries.clear();
        self.cursor = None;
        self.commit(initial);
    }

    /// The snapshot the cursor points at
    pub fn current(&self) -> Option<&PixelGrid> {
        self.cursor.and_then(|cursor| self.entries.get(cursor))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if there are entries that can be undone
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    /// Returns true if there are entries that can be redone
    pub fn can_redo(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.entries.len())
    }
}

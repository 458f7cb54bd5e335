use egui::Color32;

use crate::error::{EditorError, Result};

/// Contents of a single cell. `None` is the transparent, erased state.
pub type CellColor = Option<Color32>;

/// An integer cell coordinate. May lie outside the grid: strokes are allowed
/// to run past the edge and get clipped by the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Fixed-size grid of cells, stored as `height` rows of `width` cells.
/// (0, 0) is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    cells: Vec<Vec<CellColor>>,
}

impl PixelGrid {
    /// Creates a blank grid. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![vec![None; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Nearest in-bounds cell to `pos`
    pub fn clamp(&self, pos: GridPos) -> GridPos {
        GridPos::new(
            pos.x.clamp(0, self.width as i32 - 1),
            pos.y.clamp(0, self.height as i32 - 1),
        )
    }

    /// Overwrites a cell. Coordinates outside the grid are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: CellColor) {
        if self.contains(x, y) {
            self.cells[y as usize][x as usize] = color;
        }
    }

    /// Returns the cell color, or empty for coordinates outside the grid.
    pub fn get(&self, x: i32, y: i32) -> CellColor {
        if self.contains(x, y) {
            self.cells[y as usize][x as usize]
        } else {
            None
        }
    }

    /// Paints every position in `cells` with `color`, clipping as `set` does.
    /// Returns how many cells actually changed.
    pub fn paint(&mut self, cells: &[GridPos], color: CellColor) -> usize {
        let mut changed = 0;
        for pos in cells {
            if self.contains(pos.x, pos.y) && self.get(pos.x, pos.y) != color {
                self.set(pos.x, pos.y, color);
                changed += 1;
            }
        }
        changed
    }

    /// Copies the contents of `snapshot` into this grid.
    ///
    /// The snapshot is copied, never adopted, so the caller's copy stays
    /// independent from the live grid.
    pub fn replace_with(&mut self, snapshot: &PixelGrid) -> Result<()> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(EditorError::DimensionMismatch {
                expected_width: self.width,
                expected_height: self.height,
                found_width: snapshot.width,
                found_height: snapshot.height,
            });
        }
        self.cells.clone_from(&snapshot.cells);
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellColor]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Iterates over all cells as `(x, y, color)`, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellColor)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, color)| (x, y, *color))
        })
    }

    pub fn painted_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_blank(&self) -> bool {
        self.painted_cells() == 0
    }
}

use egui::Color32;

use crate::grid::{CellColor, GridPos, PixelGrid};
use crate::raster;
use crate::tools::{ToolKind, ToolMode};

/// One continuous pointer interaction. Tool and color are captured on
/// pointer-down and stay fixed until the gesture resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gesture {
    pub tool: ToolKind,
    pub color: Color32,
    /// First cell touched
    pub anchor: GridPos,
    /// Most recently touched cell
    pub current: GridPos,
    /// Whether any grid cell has changed so far
    pub changed: bool,
}

impl Gesture {
    fn new(tool: ToolKind, color: Color32, pos: GridPos) -> Self {
        Self {
            tool,
            color,
            anchor: pos,
            current: pos,
            changed: false,
        }
    }

    fn paint_color(&self) -> CellColor {
        self.tool.paint_color(self.color)
    }

    fn shape(&self) -> Vec<GridPos> {
        self.tool
            .shape_cells(self.anchor, self.current)
            .unwrap_or_default()
    }
}

/// State of the pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pencil or eraser: the grid is painted as the pointer moves
    Drawing(Gesture),
    /// Square or circle: only a preview changes until release
    Previewing(Gesture),
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing(_) => "Drawing",
            Self::Previewing(_) => "Previewing",
        }
    }
}

/// How a gesture ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture's cells are in the grid and a snapshot should be committed
    Finished { tool: ToolKind, changed: bool },
    /// The gesture ended without touching the grid
    Discarded { tool: ToolKind },
}

/// Hypothetical shape shown on top of the grid while previewing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub cells: Vec<GridPos>,
    pub color: CellColor,
}

/// Turns pointer events into grid mutations for the active tool
#[derive(Debug, Default)]
pub struct GestureController {
    state: GestureState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, GestureState::Idle)
    }

    pub fn current_state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Starts a gesture at `pos`.
    ///
    /// If a gesture is still active (its release was never delivered) it is
    /// resolved first, as if the pointer had left, and its outcome returned.
    pub fn pointer_down(
        &mut self,
        pos: GridPos,
        tool: ToolKind,
        color: Color32,
        grid: &mut PixelGrid,
    ) -> Option<GestureOutcome> {
        let interrupted = self.pointer_leave(grid);

        let mut gesture = Gesture::new(tool, color, pos);
        self.state = match tool.mode() {
            ToolMode::Freehand => {
                gesture.changed = grid.paint(&[pos], gesture.paint_color()) > 0;
                GestureState::Drawing(gesture)
            }
            ToolMode::Shape => GestureState::Previewing(gesture),
        };
        log::debug!("{} gesture started at {:?}", tool.name(), pos);

        interrupted
    }

    /// Follows the pointer to `pos`. Freehand tools paint the line from the
    /// previous sample so fast motion leaves no gaps. Shapes clamp `pos` the
    /// same way a release does, so the preview always matches the commit.
    pub fn pointer_move(&mut self, pos: GridPos, grid: &mut PixelGrid) {
        match &mut self.state {
            GestureState::Idle => {}
            GestureState::Drawing(gesture) => {
                if gesture.current != pos {
                    let cells = raster::line(gesture.current, pos);
                    if grid.paint(&cells, gesture.paint_color()) > 0 {
                        gesture.changed = true;
                    }
                    gesture.current = pos;
                }
            }
            GestureState::Previewing(gesture) => gesture.current = grid.clamp(pos),
        }
    }

    /// Ends the gesture at `pos`, clamped to the nearest cell of the grid.
    /// Shapes are painted now; freehand strokes are already in the grid.
    pub fn pointer_up(&mut self, pos: GridPos, grid: &mut PixelGrid) -> Option<GestureOutcome> {
        let pos = grid.clamp(pos);
        let outcome = match std::mem::take(&mut self.state) {
            GestureState::Idle => return None,
            GestureState::Drawing(gesture) => GestureOutcome::Finished {
                tool: gesture.tool,
                changed: gesture.changed,
            },
            GestureState::Previewing(mut gesture) => {
                gesture.current = pos;
                let changed = grid.paint(&gesture.shape(), gesture.paint_color()) > 0;
                GestureOutcome::Finished {
                    tool: gesture.tool,
                    changed,
                }
            }
        };
        log::debug!("Gesture ended at {:?}: {:?}", pos, outcome);
        Some(outcome)
    }

    /// Resolves a gesture whose release will never arrive. Freehand strokes
    /// keep what they painted; shape previews are dropped.
    pub fn pointer_leave(&mut self, grid: &mut PixelGrid) -> Option<GestureOutcome> {
        match self.state {
            GestureState::Idle => None,
            GestureState::Drawing(gesture) => self.pointer_up(gesture.current, grid),
            GestureState::Previewing(gesture) => {
                self.state = GestureState::Idle;
                log::debug!("{} preview discarded", gesture.tool.name());
                Some(GestureOutcome::Discarded { tool: gesture.tool })
            }
        }
    }

    /// The shape that would be painted if the pointer were released now
    pub fn preview(&self) -> Option<Preview> {
        match &self.state {
            GestureState::Previewing(gesture) => Some(Preview {
                cells: gesture.shape(),
                color: gesture.paint_color(),
            }),
            GestureState::Idle | GestureState::Drawing(_) => None,
        }
    }
}

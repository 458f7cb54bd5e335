use egui::{Context, Key, KeyboardShortcut, Modifiers, Pos2, Rect, Response, Vec2};

use crate::command::Command;
use crate::grid::GridPos;
use crate::tools::ToolKind;

/// Maps screen positions onto canvas cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Screen position of the top-left corner of cell (0, 0)
    pub origin: Pos2,
    /// On-screen size of one cell
    pub pixel_size: f32,
    pub width: usize,
    pub height: usize,
}

impl CanvasLayout {
    pub fn new(origin: Pos2, pixel_size: f32, width: usize, height: usize) -> Self {
        Self {
            origin,
            pixel_size: pixel_size.max(1.0),
            width,
            height,
        }
    }

    /// Total on-screen size of the canvas
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32) * self.pixel_size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size())
    }

    /// Cell under a screen position. Positions outside the canvas give cells
    /// outside the grid, which the grid clips.
    pub fn cell_at(&self, pos: Pos2) -> GridPos {
        let local = (pos - self.origin) / self.pixel_size;
        GridPos::new(local.x.floor() as i32, local.y.floor() as i32)
    }

    /// Screen rectangle covered by a cell
    pub fn cell_rect(&self, cell: GridPos) -> Rect {
        let min = self.origin + Vec2::new(cell.x as f32, cell.y as f32) * self.pixel_size;
        Rect::from_min_size(min, Vec2::splat(self.pixel_size))
    }
}

/// Pointer events in cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { cell: GridPos },
    PointerMove { cell: GridPos },
    PointerUp { cell: GridPos },
    /// The pointer left the window while a gesture was active
    PointerLeave,
}

/// Primary pointer state for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    /// Latest pointer position, `None` when the pointer is outside the window
    pub pos: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
    pub down: bool,
    /// The canvas is the topmost visible widget under the pointer. False when
    /// the pointer is over a panel, a popup or a scrolled-away part of it.
    pub over_canvas: bool,
}

impl PointerSample {
    pub fn from_context(ctx: &Context, canvas: &Response) -> Self {
        ctx.input(|input| Self {
            pos: input.pointer.latest_pos(),
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            down: input.pointer.primary_down(),
            over_canvas: canvas.hovered(),
        })
    }
}

/// Converts raw pointer samples into cell-level gesture events
#[derive(Debug, Default)]
pub struct InputHandler {
    /// Last cell reported while a gesture is being tracked
    tracking: Option<GridPos>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking.is_some()
    }

    /// Process raw egui input and generate our InputEvents. `canvas` is the
    /// response of the widget the canvas is painted into.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas: &Response,
        layout: &CanvasLayout,
    ) -> Vec<InputEvent> {
        self.process_sample(PointerSample::from_context(ctx, canvas), layout)
    }

    pub fn process_sample(&mut self, sample: PointerSample, layout: &CanvasLayout) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // Gestures only start on the visible canvas
        if sample.pressed && sample.over_canvas && self.tracking.is_none() {
            if let Some(pos) = sample.pos.filter(|pos| layout.rect().contains(*pos)) {
                let cell = layout.cell_at(pos);
                events.push(InputEvent::PointerDown { cell });
                self.tracking = Some(cell);
            }
        }

        let Some(last) = self.tracking else {
            return events;
        };

        let Some(pos) = sample.pos else {
            events.push(InputEvent::PointerLeave);
            self.tracking = None;
            return events;
        };

        let cell = layout.cell_at(pos);
        if cell != last {
            events.push(InputEvent::PointerMove { cell });
            self.tracking = Some(cell);
        }

        // A release can go missing when the button is let go outside the window
        if sample.released || !sample.down {
            events.push(InputEvent::PointerUp { cell });
            self.tracking = None;
        }

        events
    }
}

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);
const REDO_ALT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// Commands triggered by keyboard shortcuts this frame
pub fn shortcut_commands(ctx: &Context) -> Vec<Command> {
    // Text fields keep their own shortcuts
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }

    ctx.input_mut(|input| {
        let mut commands = Vec::new();
        // Check the longer shortcut first so Ctrl+Shift+Z is not eaten by Ctrl+Z
        if input.consume_shortcut(&REDO) || input.consume_shortcut(&REDO_ALT) {
            commands.push(Command::Redo);
        }
        if input.consume_shortcut(&UNDO) {
            commands.push(Command::Undo);
        }
        for tool in ToolKind::ALL {
            if input.consume_key(Modifiers::NONE, tool.shortcut()) {
                commands.push(Command::SelectTool(tool));
            }
        }
        commands
    })
}

#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod command;
pub mod components;
pub mod document;
pub mod error;
pub mod export;
pub mod gesture;
pub mod grid;
pub mod input;
pub mod panels;
pub mod raster;
pub mod renderer;
pub mod settings;
pub mod tools;

pub use app::PixelStudioApp;
pub use command::{Command, HistoryStore};
pub use document::Document;
pub use error::{EditorError, ExportError};
pub use gesture::{GestureController, GestureOutcome, GestureState, Preview};
pub use grid::{CellColor, GridPos, PixelGrid};
pub use renderer::Renderer;
pub use settings::EditorSettings;
pub use tools::ToolKind;

use thiserror::Error;

/// Errors raised by the drawing engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A snapshot does not have the same size as the live canvas
    #[error("snapshot is {found_width}x{found_height} but the canvas is {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },

    /// A canvas must be at least one cell wide and tall
    #[error("invalid canvas size {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The operation needs the canvas to be idle
    #[error("a gesture is still in progress")]
    GestureInProgress,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors that can occur while exporting the canvas
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot export while a gesture is in progress")]
    Unsettled,

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write image: {0}")]
    Write(#[from] std::io::Error),
}

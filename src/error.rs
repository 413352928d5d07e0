use thiserror::Error;

/// Errors surfaced by the paint engine and its file collaborators.
///
/// Most "failures" inside the engine (undo on an empty stack, a fill click on
/// empty canvas, a zero-size shape) are not errors at all; they are absorbed
/// as no-ops. What remains is I/O and raster validation.
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvasSize { width: u32, height: u32 },

    #[error("Invalid stroke width range {min}..={max}")]
    InvalidStrokeRange { min: f32, max: f32 },

    #[error("Invalid value {value} for {name}")]
    InvalidSetting { name: &'static str, value: f64 },

    #[error("Raster is {}x{} but the canvas is {}x{}", found.0, found.1, expected.0, expected.1)]
    DimensionMismatch {
        expected: (u32, u32),
        found: (u32, u32),
    },
}

/// Result type for paint operations
pub type PaintResult<T> = Result<T, PaintError>;

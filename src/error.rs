use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cocoplus operations.
#[derive(Debug, Error)]
pub enum CocoPlusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Expected boxes with 4 columns, got {columns}")]
    BoxShape { columns: usize },

    #[error("Expected a box of exactly 4 numbers, got {len}")]
    BoxLength { len: usize },

    #[error("Box array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Unsupported color format '{0}' (expected 'RGB' or 'BGR')")]
    UnsupportedColorFormat(String),

    #[error("Unsupported box format '{0}' (expected 'xywh' or 'xyxy')")]
    UnsupportedBoxFormat(String),

    #[error("Boxes and names must have the same length ({boxes} box(es), {names} name(s))")]
    NameCountMismatch { boxes: usize, names: usize },

    #[error("Class names were given but no label font is configured")]
    MissingLabelFont,

    #[error("Failed to load font from {path}: {message}")]
    FontLoad { path: PathBuf, message: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to parse config from {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to render JSON output: {0}")]
    JsonWrite(#[source] serde_json::Error),

    #[error("Invalid log level '{0}' (expected DEBUG, INFO, WARN, ERROR or CRITICAL)")]
    InvalidLogLevel(String),

    #[error("Failed to install logger: {0}")]
    LoggerInstall(#[from] log::SetLoggerError),

    #[error("No category matches {0}")]
    UnknownCategory(String),
}

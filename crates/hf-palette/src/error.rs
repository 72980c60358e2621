use hf_color::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error("a palette holds 2 to 8 colors, got {len}")]
    InvalidLength { len: usize },

    #[error("invalid {field}: {reason}")]
    InvalidConstraint { field: &'static str, reason: String },

    #[error("unknown {kind} {name:?}")]
    UnknownName { kind: &'static str, name: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, PaletteError>;

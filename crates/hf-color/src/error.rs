// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors produced while decoding color values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input did not contain 3 or 6 hex digits after the optional `#`.
    #[error("invalid hex color {input:?}: expected 3 or 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// The input contained a character outside `[0-9a-fA-F]`.
    #[error("invalid hex color {input:?}: {digit:?} is not a hex digit")]
    InvalidDigit { input: String, digit: char },
}

pub type Result<T> = std::result::Result<T, ColorError>;

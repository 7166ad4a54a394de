//! Cube state machine error types.

use crate::core::ParseFaceletsError;
use thiserror::Error;

/// Errors that can occur when replacing the cube's facelets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    /// Input did not hold exactly 54 facelets
    #[error("Invalid state shape: expected 54 facelets, found {found}")]
    InvalidStateShape { found: usize },

    /// Input string contained a character that is not a color code
    #[error("Unknown color code '{code}' at index {index}")]
    UnknownColor { index: usize, code: char },
}

impl From<ParseFaceletsError> for MachineError {
    fn from(err: ParseFaceletsError) -> Self {
        match err {
            ParseFaceletsError::WrongLength(found) => Self::InvalidStateShape { found },
            ParseFaceletsError::UnknownColor { index, code } => Self::UnknownColor { index, code },
        }
    }
}

//! Structural problems a facelet string can have.

use crate::core::{Color, Face};
use thiserror::Error;

/// Reasons a facelet string is not well-formed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid state length: expected 54 facelets, found {found}")]
    WrongLength { found: usize },

    #[error("Incorrect count for color {color}: expected {expected}, found {actual}")]
    WrongColorCount {
        color: Color,
        expected: usize,
        actual: usize,
    },

    #[error("Center of face {face} must be {expected} ({}), found '{found}'", .expected.name())]
    WrongCenter {
        face: Face,
        expected: Color,
        found: char,
    },
}

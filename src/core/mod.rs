//! Pure cube model.
//!
//! This module contains the side-effect-free part of the engine:
//! - Colors, faces and the 54-slot facelet array
//! - The 12-move quarter-turn vocabulary and its notation
//! - The rotation transform
//! - Move history tracking
//!
//! Nothing in here owns a session; [`crate::machine`] wires these pieces
//! into a stateful cube.

mod color;
mod facelets;
mod history;
mod moves;
mod rotation;

pub use color::{Color, Face, CENTER_SLOT, FACE_SIZE};
pub use facelets::{FaceletState, ParseFaceletsError, FACELET_COUNT};
pub use history::{MoveHistory, MoveRecord};
pub use moves::{format_sequence, parse_sequence, Direction, Move, ParseMoveError};
pub use rotation::{rotate, rotate_in_place};

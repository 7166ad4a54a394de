//! Facecube: a 3x3x3 color cube state engine
//!
//! Facecube models the cube as a flat array of 54 colored facelets and
//! keeps the logic in a pure core with a thin stateful shell around it.
//! Renderers, input handling and storage sit outside the crate; they read
//! the facelet string and send moves in.
//!
//! # Core Concepts
//!
//! - **Facelets**: 54 colors in face order `U,R,F,D,L,B`, row-major per face
//! - **Moves**: 12 quarter turns, written `R` (clockwise) or `R'`
//! - **Rotation**: a pure transform driven by fixed permutation tables
//! - **Cube state**: facelets plus an undoable move history
//! - **Scrambles**: random move sequences with no face turned twice in a row
//! - **Validation**: structural checks for hand-entered states
//!
//! # Example
//!
//! ```rust
//! use facecube::core::{parse_sequence, Move};
//! use facecube::machine::CubeState;
//! use facecube::validation::validate;
//!
//! let mut cube = CubeState::new();
//! let moves = parse_sequence("R U R' U'").unwrap();
//! cube.apply_all(moves.iter().copied());
//!
//! let undo: Vec<Move> = moves.iter().rev().map(|m| m.inverse()).collect();
//! cube.apply_all(undo);
//!
//! assert!(cube.is_solved());
//! assert_eq!(validate(&cube.facelet_string()), Ok(()));
//! ```

pub mod checkpoint;
pub mod core;
pub mod machine;
pub mod scramble;
pub mod validation;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, SavedSession};
pub use self::core::{Color, Direction, Face, FaceletState, Move, MoveHistory};
pub use machine::{CubeState, MachineError};
pub use scramble::{ScrambleConfig, Scrambler};
pub use validation::{validate, ValidationError};

//! Random scramble generation.
//!
//! A scramble is a random move sequence in which no face is turned twice
//! in a row. The generator is stateless apart from its configuration; the
//! only shared resource is the thread-local random source.
//!
//! # Example
//!
//! ```rust
//! use facecube::machine::CubeState;
//! use facecube::scramble::Scrambler;
//!
//! let mut cube = CubeState::new();
//! let steps = cube.scramble(&Scrambler::default());
//!
//! assert_eq!(steps.len(), 20);
//! assert_eq!(cube.history().len(), 20);
//! ```

mod config;
mod generator;

pub use config::{ScrambleConfig, ScrambleConfigBuilder, DEFAULT_SCRAMBLE_LENGTH};
pub use generator::{generate_steps_with, generate_with, ScrambleStep, Scrambler, ScramblerBuilder};

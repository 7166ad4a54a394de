//! Stateful cube session.
//!
//! This module is the imperative shell around the pure [`crate::core`]:
//! [`CubeState`] owns one facelet array and one move history, and delegates
//! every transform to the rotation functions.

mod cube;
mod error;

pub use cube::CubeState;
pub use error::MachineError;

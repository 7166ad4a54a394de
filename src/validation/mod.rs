//! Structural validation of facelet strings.
//!
//! Used as an admission gate for states typed in by a user before they are
//! loaded into a [`crate::machine::CubeState`]. A well-formed string has 54
//! facelets, nine of each color, and every center on its own face.
//!
//! Two entry points are provided:
//! - [`validate`] stops at the first problem and returns a `Result`
//! - [`validate_all`] uses Stillwater's `Validation` to collect every
//!   problem, for forms that want to show them all at once
//!
//! Reachability (edge and corner parity) is out of scope.

pub mod rules;
pub mod violations;

pub use rules::{validate, validate_all, validate_state, COLOR_COUNT};
pub use violations::ValidationError;

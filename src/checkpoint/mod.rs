//! Saved cube sessions.
//!
//! A [`SavedSession`] is what a persistence layer stores for a cube: a
//! free-text label, the 54-character facelet snapshot and the move history,
//! plus some bookkeeping. Storage itself is someone else's job; this module
//! only encodes to and decodes from JSON or a compact binary form.

use crate::core::{FaceletState, MoveHistory};
use crate::machine::CubeState;
use crate::validation::validate_state;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of one cube session.
///
/// # Example
///
/// ```rust
/// use facecube::checkpoint::SavedSession;
/// use facecube::core::parse_sequence;
/// use facecube::machine::CubeState;
///
/// let mut cube = CubeState::new();
/// cube.apply_all(parse_sequence("R U").unwrap());
///
/// let saved = SavedSession::capture("practice", &cube);
/// let json = saved.to_json().unwrap();
///
/// let restored = SavedSession::from_json(&json).unwrap().restore().unwrap();
/// assert_eq!(restored.facelets(), cube.facelets());
/// assert_eq!(restored.history().notation(), "R U");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    /// Checkpoint format version
    pub version: u32,

    /// Unique session identifier
    pub id: Uuid,

    /// User-facing name
    pub label: String,

    /// Facelet snapshot, serialized as the 54-character color string
    pub facelets: FaceletState,

    /// Moves applied in the session, oldest first
    pub history: MoveHistory,

    /// Time spent between first and last move
    pub elapsed_ms: u64,

    /// Whether the facelets were typed in rather than reached by turning
    pub user_filled: bool,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

impl SavedSession {
    /// Snapshot a cube session.
    pub fn capture(label: impl Into<String>, cube: &CubeState) -> Self {
        let elapsed_ms = cube
            .history()
            .elapsed()
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0);

        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            label: label.into(),
            facelets: *cube.facelets(),
            history: cube.history().clone(),
            elapsed_ms,
            user_filled: false,
            created_at: Utc::now(),
        }
    }

    /// Snapshot a state entered by hand, with no history behind it.
    pub fn user_entered(label: impl Into<String>, facelets: FaceletState) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            label: label.into(),
            facelets,
            history: MoveHistory::new(),
            elapsed_ms: 0,
            user_filled: true,
            created_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let session: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        session.check_version()?;
        Ok(session)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let session: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        session.check_version()?;
        Ok(session)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Rebuild a cube from this snapshot.
    ///
    /// The facelets must pass structural validation; the history is
    /// taken as recorded.
    pub fn restore(&self) -> Result<CubeState, CheckpointError> {
        if let Err(err) = validate_state(&self.facelets) {
            warn!(id = %self.id, label = %self.label, error = %err, "rejecting saved session");
            return Err(err.into());
        }

        let cube = CubeState::from_parts(self.facelets, self.history.clone());
        info!(
            id = %self.id,
            label = %self.label,
            depth = self.history.len(),
            "restored saved session"
        );
        Ok(cube)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_sequence, Color};
    use crate::validation::ValidationError;

    fn scrambled() -> CubeState {
        let mut cube = CubeState::new();
        cube.apply_all(parse_sequence("F R' D L B U'").unwrap());
        cube
    }

    #[test]
    fn capture_copies_cube_and_history() {
        let cube = scrambled();
        let saved = SavedSession::capture("evening", &cube);

        assert_eq!(saved.version, CHECKPOINT_VERSION);
        assert_eq!(saved.label, "evening");
        assert_eq!(&saved.facelets, cube.facelets());
        assert_eq!(saved.history.notation(), "F R' D L B U'");
        assert!(!saved.user_filled);
    }

    #[test]
    fn json_round_trip_restores_cube() {
        let cube = scrambled();
        let json = SavedSession::capture("json", &cube).to_json().unwrap();

        assert!(json.contains(&cube.facelet_string()));

        let restored = SavedSession::from_json(&json).unwrap().restore().unwrap();
        assert_eq!(restored, cube);
    }

    #[test]
    fn binary_round_trip_restores_cube() {
        let cube = scrambled();
        let saved = SavedSession::capture("binary", &cube);
        let bytes = saved.to_bytes().unwrap();

        let decoded = SavedSession::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, saved);
        assert_eq!(decoded.restore().unwrap(), cube);
    }

    #[test]
    fn restored_cube_can_undo_back_to_solved() {
        let saved = SavedSession::capture("undo", &scrambled());
        let mut cube = saved.restore().unwrap();

        while cube.undo().is_some() {}
        assert!(cube.is_solved());
    }

    #[test]
    fn user_entered_session_has_no_history() {
        let saved = SavedSession::user_entered("typed", FaceletState::solved());
        assert!(saved.user_filled);
        assert!(saved.history.is_empty());
        assert_eq!(saved.elapsed_ms, 0);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut saved = SavedSession::capture("old", &CubeState::new());
        saved.version = 99;
        let json = saved.to_json().unwrap();

        let result = SavedSession::from_json(&json);
        assert!(matches!(
            result,
            Err(CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_deserialization_error() {
        let result = SavedSession::from_json("{\"label\": 3}");
        assert!(matches!(
            result,
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn restore_rejects_malformed_facelets() {
        let saved = SavedSession::user_entered("bad", FaceletState::from_colors([Color::Red; 54]));

        let result = saved.restore();
        assert!(matches!(
            result,
            Err(CheckpointError::ValidationFailed(
                ValidationError::WrongColorCount {
                    color: Color::White,
                    ..
                }
            ))
        ));
    }
}

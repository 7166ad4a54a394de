//! Move history tracking.
//!
//! The history is a stack of applied moves, each stamped with the time it
//! was recorded. It is owned by a single [`crate::machine::CubeState`].

use super::moves::{format_sequence, Move};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied move.
///
/// # Example
///
/// ```rust
/// use facecube::core::{Face, Move, MoveRecord};
/// use chrono::Utc;
///
/// let record = MoveRecord {
///     mv: Move::cw(Face::U),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.mv.to_string(), "U");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The move that was applied
    pub mv: Move,
    /// When it was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered stack of applied moves.
///
/// Grows by one on every apply, shrinks by one on every undo, and is
/// emptied on reset.
///
/// # Example
///
/// ```rust
/// use facecube::core::{Face, Move, MoveHistory};
///
/// let mut history = MoveHistory::new();
/// history.push(Move::cw(Face::R));
/// history.push(Move::ccw(Face::U));
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.last(), Some(Move::ccw(Face::U)));
/// assert_eq!(history.notation(), "R U'");
///
/// assert_eq!(history.pop(), Some(Move::ccw(Face::U)));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveHistory {
    records: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Push a move, stamped with the current time.
    pub fn push(&mut self, mv: Move) {
        self.record(MoveRecord {
            mv,
            timestamp: Utc::now(),
        });
    }

    /// Push a pre-built record.
    pub fn record(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.records.pop().map(|r| r.mv)
    }

    /// The most recent move, without removing it.
    pub fn last(&self) -> Option<Move> {
        self.records.last().map(|r| r.mv)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Applied moves, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        self.records.iter().map(|r| r.mv).collect()
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Space-separated notation of the applied moves, oldest first.
    pub fn notation(&self) -> String {
        format_sequence(&self.moves())
    }

    /// Time between the first and last recorded move.
    ///
    /// Returns `None` for an empty history.
    pub fn elapsed(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

//! The quarter-turn move vocabulary and its notation.
//!
//! A move is a face plus a turning direction. The vocabulary is closed:
//! 6 faces x 2 directions = 12 values. Half turns are not a move of their
//! own; they are written as two clockwise applications.

use super::color::Face;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a token is not one of the 12 move names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown move notation '{0}'")]
pub struct ParseMoveError(pub String);

/// Turning direction, as seen looking straight at the face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A single quarter turn of one face.
///
/// # Example
///
/// ```rust
/// use facecube::core::{Direction, Face, Move};
///
/// let m: Move = "R'".parse().unwrap();
/// assert_eq!(m, Move::new(Face::R, Direction::CounterClockwise));
/// assert_eq!(m.inverse().to_string(), "R");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// The full vocabulary, clockwise before counter-clockwise per face.
    pub const ALL: [Move; 12] = [
        Move::cw(Face::U),
        Move::ccw(Face::U),
        Move::cw(Face::R),
        Move::ccw(Face::R),
        Move::cw(Face::F),
        Move::ccw(Face::F),
        Move::cw(Face::D),
        Move::ccw(Face::D),
        Move::cw(Face::L),
        Move::ccw(Face::L),
        Move::cw(Face::B),
        Move::ccw(Face::B),
    ];

    pub const fn new(face: Face, direction: Direction) -> Self {
        Self { face, direction }
    }

    pub const fn cw(face: Face) -> Self {
        Self::new(face, Direction::Clockwise)
    }

    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Direction::CounterClockwise)
    }

    /// Same face, opposite direction.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.direction.opposite())
    }

    pub const fn is_clockwise(self) -> bool {
        matches!(self.direction, Direction::Clockwise)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::CounterClockwise => write!(f, "{}'", self.face),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(|| ParseMoveError(s.to_string()))?;

        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::cw(face)),
            (Some('\''), None) => Ok(Self::ccw(face)),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Move> for String {
    fn from(m: Move) -> Self {
        m.to_string()
    }
}

/// Parse whitespace-separated notation such as `"R U R' U'"`.
///
/// Fails on the first token that is not a move name.
pub fn parse_sequence(text: &str) -> Result<Vec<Move>, ParseMoveError> {
    text.split_whitespace().map(str::parse::<Move>).collect()
}

/// Render moves as space-separated notation.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn vocabulary_has_twelve_distinct_moves() {
        let unique: HashSet<Move> = Move::ALL.iter().copied().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn notation_round_trips_for_every_move() {
        for m in Move::ALL {
            let text = m.to_string();
            assert_eq!(text.parse::<Move>(), Ok(m));
        }
    }

    #[test]
    fn prime_suffix_means_counter_clockwise() {
        let m: Move = "U'".parse().unwrap();
        assert_eq!(m.face, Face::U);
        assert_eq!(m.direction, Direction::CounterClockwise);
        assert!(!m.is_clockwise());
    }

    #[test]
    fn rejects_unknown_notation() {
        for bad in ["", "X", "R2", "R''", "r", "'R", "RU"] {
            assert_eq!(bad.parse::<Move>(), Err(ParseMoveError(bad.to_string())));
        }
    }

    #[test]
    fn inverse_flips_direction_only() {
        for m in Move::ALL {
            let inv = m.inverse();
            assert_eq!(inv.face, m.face);
            assert_ne!(inv.direction, m.direction);
            assert_eq!(inv.inverse(), m);
        }
    }

    #[test]
    fn parse_sequence_splits_on_whitespace() {
        let moves = parse_sequence("R  U R'\tU'").unwrap();
        assert_eq!(format_sequence(&moves), "R U R' U'");
        assert!(parse_sequence("").unwrap().is_empty());
    }

    #[test]
    fn parse_sequence_stops_on_bad_token() {
        assert_eq!(
            parse_sequence("R U2 F"),
            Err(ParseMoveError("U2".to_string()))
        );
    }

    #[test]
    fn move_serializes_as_notation() {
        let json = serde_json::to_string(&Move::ccw(Face::L)).unwrap();
        assert_eq!(json, "\"L'\"");

        let m: Move = serde_json::from_str("\"B\"").unwrap();
        assert_eq!(m, Move::cw(Face::B));
    }
}

//! Sticker colors and cube faces.
//!
//! Both are small closed enumerations. Each face owns a fixed 9-slot
//! region of the facelet array and a canonical center color; the mapping
//! between the two is a direct table, not a lookup by name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of facelets on one face.
pub const FACE_SIZE: usize = 9;

/// Slot of the center facelet within a face region.
pub const CENTER_SLOT: usize = 4;

/// One of the six sticker colors.
///
/// # Example
///
/// ```rust
/// use facecube::core::Color;
///
/// assert_eq!(Color::from_code('G'), Some(Color::Green));
/// assert_eq!(Color::Orange.code(), 'O');
/// assert_eq!(Color::from_code('X'), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Green,
    Yellow,
    Orange,
    Blue,
}

impl Color {
    /// All colors in canonical scan order `W,R,G,Y,O,B`.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Blue,
    ];

    /// Single-character code used in facelet strings.
    pub const fn code(self) -> char {
        match self {
            Self::White => 'W',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Blue => 'B',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(Self::White),
            'R' => Some(Self::Red),
            'G' => Some(Self::Green),
            'Y' => Some(Self::Yellow),
            'O' => Some(Self::Orange),
            'B' => Some(Self::Blue),
            _ => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::White => "White",
            Self::Red => "Red",
            Self::Green => "Green",
            Self::Yellow => "Yellow",
            Self::Orange => "Orange",
            Self::Blue => "Blue",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One of the six faces, in facelet-array order `U,R,F,D,L,B`.
///
/// # Example
///
/// ```rust
/// use facecube::core::{Color, Face};
///
/// assert_eq!(Face::F.offset(), 18);
/// assert_eq!(Face::F.center_index(), 22);
/// assert_eq!(Face::F.center_color(), Color::Green);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}

impl Face {
    /// All faces in facelet-array order.
    pub const ALL: [Face; 6] = [Face::U, Face::R, Face::F, Face::D, Face::L, Face::B];

    /// Position of this face in the facelet array, `0..6`.
    pub const fn index(self) -> usize {
        match self {
            Self::U => 0,
            Self::R => 1,
            Self::F => 2,
            Self::D => 3,
            Self::L => 4,
            Self::B => 5,
        }
    }

    /// First facelet index owned by this face.
    pub const fn offset(self) -> usize {
        self.index() * FACE_SIZE
    }

    pub const fn center_index(self) -> usize {
        self.offset() + CENTER_SLOT
    }

    /// Color of this face's fixed center in the canonical scheme.
    pub const fn center_color(self) -> Color {
        match self {
            Self::U => Color::White,
            Self::R => Color::Red,
            Self::F => Color::Green,
            Self::D => Color::Yellow,
            Self::L => Color::Orange,
            Self::B => Color::Blue,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            Self::U => 'U',
            Self::R => 'R',
            Self::F => 'F',
            Self::D => 'D',
            Self::L => 'L',
            Self::B => 'B',
        }
    }

    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Self::U),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'L' => Some(Self::L),
            'B' => Some(Self::B),
            _ => None,
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_codes_round_trip() {
        for color in Color::ALL {
            assert_eq!(Color::from_code(color.code()), Some(color));
        }
    }

    #[test]
    fn unknown_color_code_is_rejected() {
        assert_eq!(Color::from_code('w'), None);
        assert_eq!(Color::from_code('U'), None);
    }

    #[test]
    fn face_regions_are_contiguous() {
        let offsets: Vec<usize> = Face::ALL.iter().map(|f| f.offset()).collect();
        assert_eq!(offsets, vec![0, 9, 18, 27, 36, 45]);
    }

    #[test]
    fn centers_follow_face_order() {
        let centers: Vec<usize> = Face::ALL.iter().map(|f| f.center_index()).collect();
        assert_eq!(centers, vec![4, 13, 22, 31, 40, 49]);
    }

    #[test]
    fn every_face_has_a_distinct_center_color() {
        let colors: Vec<Color> = Face::ALL.iter().map(|f| f.center_color()).collect();
        assert_eq!(colors, Color::ALL.to_vec());
    }

    #[test]
    fn face_letters_round_trip() {
        for face in Face::ALL {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
        assert_eq!(Face::from_letter('X'), None);
    }
}

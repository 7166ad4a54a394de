//! The 54-slot facelet array.

use super::color::{Color, Face, FACE_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of facelets on the whole cube.
pub const FACELET_COUNT: usize = 54;

/// Errors produced when reading a facelet string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseFaceletsError {
    #[error("Facelet string must be 54 characters (found {0})")]
    WrongLength(usize),

    #[error("Unknown color code '{code}' at index {index}")]
    UnknownColor { index: usize, code: char },
}

/// Ordered sequence of exactly 54 colors, face order `U,R,F,D,L,B`,
/// row-major within each face as viewed from outside the cube.
///
/// The length invariant is carried by the type. Color counts and centers
/// are not enforced here; see [`crate::validation`].
///
/// # Example
///
/// ```rust
/// use facecube::core::{Color, Face, FaceletState};
///
/// let solved = FaceletState::solved();
/// assert!(solved.is_solved());
/// assert_eq!(solved.center(Face::D), Color::Yellow);
///
/// let parsed: FaceletState = solved.to_string().parse().unwrap();
/// assert_eq!(parsed, solved);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FaceletState([Color; FACELET_COUNT]);

impl FaceletState {
    /// The canonical solved state: every face filled with its center color.
    pub fn solved() -> Self {
        let mut facelets = [Color::White; FACELET_COUNT];
        for face in Face::ALL {
            let offset = face.offset();
            facelets[offset..offset + FACE_SIZE].fill(face.center_color());
        }
        Self(facelets)
    }

    pub const fn from_colors(colors: [Color; FACELET_COUNT]) -> Self {
        Self(colors)
    }

    /// Build a state from a slice, which must hold exactly 54 colors.
    pub fn from_slice(colors: &[Color]) -> Result<Self, ParseFaceletsError> {
        let array: [Color; FACELET_COUNT] = colors
            .try_into()
            .map_err(|_| ParseFaceletsError::WrongLength(colors.len()))?;
        Ok(Self(array))
    }

    pub fn colors(&self) -> &[Color; FACELET_COUNT] {
        &self.0
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Color; FACELET_COUNT] {
        &mut self.0
    }

    /// The 9 facelets of one face, row-major.
    pub fn face(&self, face: Face) -> [Color; FACE_SIZE] {
        let mut out = [Color::White; FACE_SIZE];
        let offset = face.offset();
        out.copy_from_slice(&self.0[offset..offset + FACE_SIZE]);
        out
    }

    pub fn center(&self, face: Face) -> Color {
        self.0[face.center_index()]
    }

    /// Number of facelets showing `color`.
    pub fn count(&self, color: Color) -> usize {
        self.0.iter().filter(|&&c| c == color).count()
    }

    /// True when every facelet of every face matches that face's center.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|&face| {
            let center = self.center(face);
            self.face(face).iter().all(|&c| c == center)
        })
    }
}

impl Default for FaceletState {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}

impl fmt::Debug for FaceletState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FaceletState")
            .field(&self.to_string())
            .finish()
    }
}

impl FromStr for FaceletState {
    type Err = ParseFaceletsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != FACELET_COUNT {
            return Err(ParseFaceletsError::WrongLength(len));
        }

        let mut facelets = [Color::White; FACELET_COUNT];
        for (index, code) in s.chars().enumerate() {
            facelets[index] =
                Color::from_code(code).ok_or(ParseFaceletsError::UnknownColor { index, code })?;
        }
        Ok(Self(facelets))
    }
}

impl TryFrom<String> for FaceletState {
    type Error = ParseFaceletsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FaceletState> for String {
    fn from(state: FaceletState) -> Self {
        state.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB";

    #[test]
    fn solved_state_renders_canonical_string() {
        assert_eq!(FaceletState::solved().to_string(), SOLVED);
    }

    #[test]
    fn solved_state_has_nine_of_each_color() {
        let state = FaceletState::solved();
        for color in Color::ALL {
            assert_eq!(state.count(color), 9);
        }
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let result = SOLVED[..53].parse::<FaceletState>();
        assert_eq!(result, Err(ParseFaceletsError::WrongLength(53)));
    }

    #[test]
    fn parse_reports_first_unknown_code() {
        let mut input = SOLVED.to_string();
        input.replace_range(10..11, "x");
        let result = input.parse::<FaceletState>();
        assert_eq!(
            result,
            Err(ParseFaceletsError::UnknownColor {
                index: 10,
                code: 'x'
            })
        );
    }

    #[test]
    fn from_slice_checks_length() {
        let colors = vec![Color::Red; 10];
        assert_eq!(
            FaceletState::from_slice(&colors),
            Err(ParseFaceletsError::WrongLength(10))
        );

        let solved = FaceletState::solved();
        assert_eq!(FaceletState::from_slice(solved.colors()), Ok(solved));
    }

    #[test]
    fn face_returns_its_region() {
        let state = FaceletState::solved();
        assert_eq!(state.face(Face::L), [Color::Orange; 9]);
        assert_eq!(state.center(Face::B), Color::Blue);
    }

    #[test]
    fn single_off_color_is_not_solved() {
        let mut colors = *FaceletState::solved().colors();
        colors.swap(0, 53);
        assert!(!FaceletState::from_colors(colors).is_solved());
    }

    #[test]
    fn state_serializes_as_string() {
        let state = FaceletState::solved();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, format!("\"{SOLVED}\""));

        let deserialized: FaceletState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, state);
    }

    #[test]
    fn deserialize_rejects_short_string() {
        let result: Result<FaceletState, _> = serde_json::from_str("\"WWW\"");
        assert!(result.is_err());
    }
}

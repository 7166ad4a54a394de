//! Structural checks for user-supplied facelet strings.

use super::violations::ValidationError;
use crate::core::{Color, Face, FaceletState, FACELET_COUNT, FACE_SIZE};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Every color appears this many times on a well-formed cube.
pub const COLOR_COUNT: usize = FACE_SIZE;

/// Check a facelet string, stopping at the first problem.
///
/// Checks run in this order: length, per-color counts in scan order
/// `W,R,G,Y,O,B`, then centers in face order `U,R,F,D,L,B`.
///
/// Permutation and orientation parity are not checked, so a string can
/// pass and still be unreachable from the solved cube.
///
/// # Example
///
/// ```rust
/// use facecube::core::{Color, Face};
/// use facecube::validation::{validate, ValidationError};
///
/// let solved = "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB";
/// assert_eq!(validate(solved), Ok(()));
///
/// let mut swapped = solved.to_string();
/// swapped.replace_range(4..5, "R");
/// swapped.replace_range(9..10, "W");
/// assert_eq!(
///     validate(&swapped),
///     Err(ValidationError::WrongCenter { face: Face::U, expected: Color::White, found: 'R' })
/// );
/// ```
pub fn validate(facelets: &str) -> Result<(), ValidationError> {
    let codes = check_length(facelets)?;

    for color in Color::ALL {
        check_count(&codes, color)?;
    }
    for face in Face::ALL {
        check_center(&codes, face)?;
    }
    Ok(())
}

/// Check an already-parsed state.
pub fn validate_state(state: &FaceletState) -> Result<(), ValidationError> {
    validate(&state.to_string())
}

/// Check a facelet string, collecting every problem found.
///
/// A wrong length is reported alone, since counts and centers are
/// meaningless without the right shape. Otherwise all count and center
/// problems are returned together.
pub fn validate_all(facelets: &str) -> Validation<(), NonEmptyVec<ValidationError>> {
    let codes = match check_length(facelets) {
        Ok(codes) => codes,
        Err(err) => return Validation::fail(err),
    };

    let mut checks: Vec<Validation<(), NonEmptyVec<ValidationError>>> = Vec::new();
    for color in Color::ALL {
        checks.push(into_validation(check_count(&codes, color)));
    }
    for face in Face::ALL {
        checks.push(into_validation(check_center(&codes, face)));
    }

    Validation::all_vec(checks).map(|_| ())
}

fn into_validation(
    result: Result<(), ValidationError>,
) -> Validation<(), NonEmptyVec<ValidationError>> {
    match result {
        Ok(()) => Validation::success(()),
        Err(err) => Validation::fail(err),
    }
}

fn check_length(facelets: &str) -> Result<Vec<char>, ValidationError> {
    let codes: Vec<char> = facelets.chars().collect();
    if codes.len() != FACELET_COUNT {
        return Err(ValidationError::WrongLength { found: codes.len() });
    }
    Ok(codes)
}

fn check_count(codes: &[char], color: Color) -> Result<(), ValidationError> {
    let actual = codes.iter().filter(|&&c| c == color.code()).count();
    if actual != COLOR_COUNT {
        return Err(ValidationError::WrongColorCount {
            color,
            expected: COLOR_COUNT,
            actual,
        });
    }
    Ok(())
}

fn check_center(codes: &[char], face: Face) -> Result<(), ValidationError> {
    let expected = face.center_color();
    let found = codes[face.center_index()];
    if found != expected.code() {
        return Err(ValidationError::WrongCenter {
            face,
            expected,
            found,
        });
    }
    Ok(())
}

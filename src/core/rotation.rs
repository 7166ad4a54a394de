//! Face rotation transform.
//!
//! A quarter turn does two things: it permutes the 8 outer facelets of the
//! turned face (the center is a fixed point), and it cycles the 3-facelet
//! strips on the 4 neighboring faces. Both are driven by constant tables;
//! there is no per-face branching.

use super::color::{Face, FACE_SIZE};
use super::facelets::FaceletState;
use super::moves::{Direction, Move};
use tracing::trace;

/// Clockwise surface permutation: `dst[i] = src[CW_SURFACE[i]]`.
const CW_SURFACE: [usize; FACE_SIZE] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Inverse of [`CW_SURFACE`].
const CCW_SURFACE: [usize; FACE_SIZE] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// A 3-facelet strip on a neighboring face.
type Strip = [usize; 3];

/// Neighbor strips per face, indexed by [`Face::index`].
///
/// On a clockwise turn strip `k` receives the colors of strip `k + 1`
/// (mod 4), position by position. Strip order within each triple pairs
/// physically adjacent facelets, so the pairing survives the turn.
const ADJACENT: [[Strip; 4]; 6] = [
    // U: F top, R top, B top, L top
    [[18, 19, 20], [9, 10, 11], [45, 46, 47], [36, 37, 38]],
    // R: U right, F right, D right, B left (bottom to top)
    [[2, 5, 8], [20, 23, 26], [29, 32, 35], [51, 48, 45]],
    // F: U bottom, L right (bottom to top), D top (right to left), R left
    [[6, 7, 8], [44, 41, 38], [29, 28, 27], [9, 12, 15]],
    // D: F bottom, L bottom, B bottom, R bottom
    [[24, 25, 26], [42, 43, 44], [51, 52, 53], [15, 16, 17]],
    // L: U left, B right (bottom to top), D left, F left
    [[0, 3, 6], [53, 50, 47], [27, 30, 33], [18, 21, 24]],
    // B: U top (right to left), R right, D bottom, L left (top to bottom)
    [[2, 1, 0], [17, 14, 11], [33, 34, 35], [36, 39, 42]],
];

/// Apply one move, returning the new state.
///
/// Total over all 12 moves and any 54-slot array. The result is only a
/// legal cube position if the input was one.
///
/// # Example
///
/// ```rust
/// use facecube::core::{rotate, FaceletState, Move};
///
/// let solved = FaceletState::solved();
/// let m: Move = "F".parse().unwrap();
///
/// let turned = rotate(&solved, m);
/// assert!(!turned.is_solved());
/// assert_eq!(rotate(&turned, m.inverse()), solved);
/// ```
pub fn rotate(state: &FaceletState, m: Move) -> FaceletState {
    let mut next = *state;
    rotate_in_place(&mut next, m);
    next
}

/// Apply one move to `state` in place.
pub fn rotate_in_place(state: &mut FaceletState, m: Move) {
    trace!(mv = %m, "rotating face");
    permute_surface(state, m.face, m.direction);
    cycle_neighbors(state, m.face, m.direction);
}

fn permute_surface(state: &mut FaceletState, face: Face, direction: Direction) {
    let table = match direction {
        Direction::Clockwise => &CW_SURFACE,
        Direction::CounterClockwise => &CCW_SURFACE,
    };

    let offset = face.offset();
    let facelets = state.colors_mut();
    let src: [_; FACE_SIZE] = std::array::from_fn(|i| facelets[offset + i]);
    for (slot, &from) in table.iter().enumerate() {
        facelets[offset + slot] = src[from];
    }
}

fn cycle_neighbors(state: &mut FaceletState, face: Face, direction: Direction) {
    let strips = &ADJACENT[face.index()];
    // Source strip for destination strip k.
    let step = match direction {
        Direction::Clockwise => 1,
        Direction::CounterClockwise => 3,
    };

    let facelets = state.colors_mut();
    let before = *facelets;
    for (k, dst) in strips.iter().enumerate() {
        let src = &strips[(k + step) % 4];
        for (&d, &s) in dst.iter().zip(src.iter()) {
            facelets[d] = before[s];
        }
    }
}

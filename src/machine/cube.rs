//! Cube state machine that owns a facelet array and its move history.

use crate::core::{rotate_in_place, Color, FaceletState, Move, MoveHistory};
use crate::machine::error::MachineError;
use tracing::{debug, warn};

/// A single cube session: one facelet array plus one move history.
///
/// Created solved. Mutated only through [`apply`](Self::apply),
/// [`undo`](Self::undo), [`reset`](Self::reset) and the `load` family.
/// Not meant to be shared across threads without outside locking.
///
/// # Example
///
/// ```rust
/// use facecube::core::parse_sequence;
/// use facecube::machine::CubeState;
///
/// let mut cube = CubeState::new();
/// cube.apply_all(parse_sequence("R U R' U'").unwrap());
/// assert!(!cube.is_solved());
///
/// while !cube.history().is_empty() {
///     cube.undo();
/// }
/// assert!(cube.is_solved());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CubeState {
    facelets: FaceletState,
    history: MoveHistory,
}

impl CubeState {
    /// Create a new cube in the solved state with empty history
    pub fn new() -> Self {
        Self {
            facelets: FaceletState::solved(),
            history: MoveHistory::new(),
        }
    }

    /// Rebuild a session from saved facelets and history
    pub fn from_parts(facelets: FaceletState, history: MoveHistory) -> Self {
        Self { facelets, history }
    }

    /// Current facelets (pure)
    pub fn facelets(&self) -> &FaceletState {
        &self.facelets
    }

    /// Current facelets as the 54-character color string
    pub fn facelet_string(&self) -> String {
        self.facelets.to_string()
    }

    /// Move history (pure)
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn is_solved(&self) -> bool {
        self.facelets.is_solved()
    }

    /// Return to the solved state and forget all history.
    pub fn reset(&mut self) {
        debug!(dropped = self.history.len(), "resetting cube");
        self.facelets = FaceletState::solved();
        self.history.clear();
    }

    /// Replace the facelets wholesale.
    ///
    /// Only the shape is checked; run [`crate::validation::validate`] first
    /// to gate user-entered states. History is kept as is. On error the
    /// current state is untouched.
    pub fn load(&mut self, colors: &[Color]) -> Result<(), MachineError> {
        let next = FaceletState::from_slice(colors).map_err(|e| {
            warn!(found = colors.len(), "rejecting facelets with wrong shape");
            MachineError::from(e)
        })?;
        self.replace(next);
        Ok(())
    }

    /// Replace the facelets from a 54-character color string.
    pub fn load_str(&mut self, facelets: &str) -> Result<(), MachineError> {
        let next = facelets.parse::<FaceletState>().map_err(|e| {
            warn!(error = %e, "rejecting facelet string");
            MachineError::from(e)
        })?;
        self.replace(next);
        Ok(())
    }

    /// Replace the facelets and clear history, as for a freshly entered cube.
    pub fn load_fresh(&mut self, facelets: FaceletState) {
        self.replace(facelets);
        self.history.clear();
    }

    fn replace(&mut self, facelets: FaceletState) {
        debug!(facelets = %facelets, kept_history = self.history.len(), "loading facelets");
        self.facelets = facelets;
    }

    /// Rotate a face and record the move.
    pub fn apply(&mut self, mv: Move) {
        rotate_in_place(&mut self.facelets, mv);
        self.history.push(mv);
        debug!(mv = %mv, depth = self.history.len(), "applied move");
    }

    /// Apply moves in order.
    pub fn apply_all<I>(&mut self, moves: I)
    where
        I: IntoIterator<Item = Move>,
    {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Take back the most recent move.
    ///
    /// Pops the move and applies its inverse once, without recording the
    /// inverse. Does nothing when history is empty. Returns the move that
    /// was undone.
    pub fn undo(&mut self) -> Option<Move> {
        let mv = self.history.pop()?;
        rotate_in_place(&mut self.facelets, mv.inverse());
        debug!(mv = %mv, depth = self.history.len(), "undid move");
        Some(mv)
    }

    /// Most recent move, if any (pure)
    pub fn peek_last(&self) -> Option<Move> {
        self.history.last()
    }

    /// Same face, opposite direction (pure)
    pub fn inverse(mv: Move) -> Move {
        mv.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse_sequence, Face};

    const SOLVED: &str = "WWWWWWWWWRRRRRRRRRGGGGGGGGGYYYYYYYYYOOOOOOOOOBBBBBBBBB";

    fn moves(text: &str) -> Vec<Move> {
        parse_sequence(text).unwrap()
    }

    #[test]
    fn new_cube_is_solved_with_empty_history() {
        let cube = CubeState::new();
        assert!(cube.is_solved());
        assert_eq!(cube.facelet_string(), SOLVED);
        assert!(cube.history().is_empty());
        assert_eq!(cube.peek_last(), None);
    }

    #[test]
    fn apply_records_each_move() {
        let mut cube = CubeState::new();
        cube.apply(Move::cw(Face::R));
        cube.apply(Move::ccw(Face::U));

        assert_eq!(cube.history().len(), 2);
        assert_eq!(cube.peek_last(), Some(Move::ccw(Face::U)));
        assert_eq!(cube.history().notation(), "R U'");
    }

    #[test]
    fn apply_then_undo_restores_state_and_depth() {
        for mv in Move::ALL {
            let mut cube = CubeState::new();
            cube.apply(Move::cw(Face::F));
            let before = *cube.facelets();
            let depth = cube.history().len();

            cube.apply(mv);
            assert_eq!(cube.undo(), Some(mv));

            assert_eq!(cube.facelets(), &before, "{mv}");
            assert_eq!(cube.history().len(), depth);
        }
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut cube = CubeState::new();
        assert_eq!(cube.undo(), None);
        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }

    #[test]
    fn undo_does_not_record_the_inverse() {
        let mut cube = CubeState::new();
        cube.apply_all(moves("R U"));
        cube.undo();
        assert_eq!(cube.history().moves(), moves("R"));
    }

    #[test]
    fn undo_all_returns_to_solved() {
        let mut cube = CubeState::new();
        cube.apply_all(moves("F B' L D R' U F' L'"));
        assert!(!cube.is_solved());

        while cube.undo().is_some() {}
        assert!(cube.is_solved());
    }

    #[test]
    fn reset_restores_solved_and_clears_history() {
        let mut cube = CubeState::new();
        cube.apply_all(moves("R U F"));
        cube.reset();

        assert!(cube.is_solved());
        assert!(cube.history().is_empty());
    }

    #[test]
    fn load_rejects_wrong_length_and_keeps_state() {
        let mut cube = CubeState::new();
        cube.apply(Move::cw(Face::R));
        let before = cube.clone();

        let result = cube.load(&[Color::White; 53]);

        assert_eq!(result, Err(MachineError::InvalidStateShape { found: 53 }));
        assert_eq!(cube, before);
    }

    #[test]
    fn load_keeps_history() {
        let mut cube = CubeState::new();
        cube.apply(Move::cw(Face::D));

        let solved = FaceletState::solved();
        cube.load(solved.colors()).unwrap();

        assert!(cube.is_solved());
        assert_eq!(cube.history().len(), 1);
    }

    #[test]
    fn load_skips_structural_checks() {
        let mut cube = CubeState::new();
        cube.load(&[Color::Blue; 54]).unwrap();
        assert_eq!(cube.facelets().count(Color::Blue), 54);
    }

    #[test]
    fn load_str_maps_parse_errors() {
        let mut cube = CubeState::new();

        assert_eq!(
            cube.load_str("WWW"),
            Err(MachineError::InvalidStateShape { found: 3 })
        );

        let mut bad = SOLVED.to_string();
        bad.replace_range(0..1, "?");
        assert_eq!(
            cube.load_str(&bad),
            Err(MachineError::UnknownColor {
                index: 0,
                code: '?'
            })
        );
        assert!(cube.is_solved());
    }

    #[test]
    fn load_fresh_clears_history() {
        let mut cube = CubeState::new();
        cube.apply_all(moves("L L"));

        let mut other = CubeState::new();
        other.apply(Move::cw(Face::B));

        cube.load_fresh(*other.facelets());
        assert_eq!(cube.facelets(), other.facelets());
        assert!(cube.history().is_empty());
    }

    #[test]
    fn inverse_is_a_pure_lookup() {
        assert_eq!(CubeState::inverse(Move::cw(Face::U)), Move::ccw(Face::U));
        assert_eq!(CubeState::inverse(Move::ccw(Face::B)), Move::cw(Face::B));
    }
}

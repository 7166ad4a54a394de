//! Random scramble generation.

use super::config::{ScrambleConfig, ScrambleConfigBuilder};
use crate::core::{Direction, Face, Move};
use crate::machine::CubeState;
use rand::Rng;
use std::fmt;
use tracing::debug;

/// One scramble step.
///
/// Half turns only exist here; they expand to two clockwise quarter turns
/// before they reach a cube.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrambleStep {
    Turn(Move),
    Double(Face),
}

impl ScrambleStep {
    pub fn face(&self) -> Face {
        match self {
            Self::Turn(mv) => mv.face,
            Self::Double(face) => *face,
        }
    }

    /// Quarter turns that realize this step.
    pub fn expand(&self) -> Vec<Move> {
        match self {
            Self::Turn(mv) => vec![*mv],
            Self::Double(face) => vec![Move::cw(*face), Move::cw(*face)],
        }
    }
}

impl fmt::Display for ScrambleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Turn(mv) => write!(f, "{mv}"),
            Self::Double(face) => write!(f, "{face}2"),
        }
    }
}

/// Generates random scrambles with no face turned twice in a row.
///
/// Holds only its configuration; every call draws a fresh sequence from
/// the thread-local random source.
///
/// # Example
///
/// ```rust
/// use facecube::scramble::Scrambler;
///
/// let scrambler = Scrambler::builder().length(12).build();
/// let moves = scrambler.generate(12);
///
/// assert_eq!(moves.len(), 12);
/// assert!(moves.windows(2).all(|w| w[0].face != w[1].face));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scrambler {
    config: ScrambleConfig,
}

impl Scrambler {
    pub fn new(config: ScrambleConfig) -> Self {
        Self { config }
    }

    pub fn builder() -> ScramblerBuilder {
        ScramblerBuilder::default()
    }

    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// Exactly `length` quarter turns, no two consecutive on one face.
    pub fn generate(&self, length: usize) -> Vec<Move> {
        generate_with(length, &mut rand::thread_rng())
    }

    /// Steps per the configuration, possibly including half turns.
    pub fn generate_steps(&self) -> Vec<ScrambleStep> {
        generate_steps_with(&self.config, &mut rand::thread_rng())
    }
}

/// Builder for [`Scrambler`]
#[derive(Clone, Debug, Default)]
pub struct ScramblerBuilder {
    config: ScrambleConfigBuilder,
}

impl ScramblerBuilder {
    pub fn length(mut self, length: usize) -> Self {
        self.config = self.config.length(length);
        self
    }

    pub fn double_turns(mut self, enabled: bool) -> Self {
        self.config = self.config.double_turns(enabled);
        self
    }

    pub fn build(self) -> Scrambler {
        Scrambler::new(self.config.build())
    }
}

/// Generate `length` quarter turns from the given random source.
pub fn generate_with<R: Rng>(length: usize, rng: &mut R) -> Vec<Move> {
    let mut moves = Vec::with_capacity(length);
    let mut previous = None;
    for _ in 0..length {
        let face = draw_face(rng, previous);
        let direction = if rng.gen_bool(0.5) {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        moves.push(Move::new(face, direction));
        previous = Some(face);
    }
    moves
}

/// Generate scramble steps per `config` from the given random source.
pub fn generate_steps_with<R: Rng>(
    config: &ScrambleConfig,
    rng: &mut R,
) -> Vec<ScrambleStep> {
    if !config.double_turns {
        return generate_with(config.length, rng)
            .into_iter()
            .map(ScrambleStep::Turn)
            .collect();
    }

    let mut steps = Vec::with_capacity(config.length);
    let mut previous = None;
    for _ in 0..config.length {
        let face = draw_face(rng, previous);
        let step = match rng.gen_range(0..3) {
            0 => ScrambleStep::Turn(Move::cw(face)),
            1 => ScrambleStep::Turn(Move::ccw(face)),
            _ => ScrambleStep::Double(face),
        };
        steps.push(step);
        previous = Some(face);
    }
    steps
}

/// Draw a uniform face, redrawing while it equals `previous`.
fn draw_face<R: Rng>(rng: &mut R, previous: Option<Face>) -> Face {
    loop {
        let face = Face::ALL[rng.gen_range(0..Face::ALL.len())];
        if Some(face) != previous {
            return face;
        }
    }
}

impl CubeState {
    /// Apply a freshly generated scramble, returning the steps taken.
    ///
    /// Each quarter turn lands in history, so a half turn takes two undos.
    pub fn scramble(&mut self, scrambler: &Scrambler) -> Vec<ScrambleStep> {
        let steps = scrambler.generate_steps();
        for step in &steps {
            self.apply_all(step.expand());
        }
        debug!(steps = steps.len(), depth = self.history().len(), "scrambled cube");
        steps
    }
}

//! Scramble configuration and its builder.

use serde::{Deserialize, Serialize};

/// Quarter-turn count used when no length is given.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// How scrambles are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrambleConfig {
    /// Number of steps per scramble
    pub length: usize,

    /// Also draw half turns (`R2`), applied as two clockwise turns
    pub double_turns: bool,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
            double_turns: false,
        }
    }
}

/// Builder for [`ScrambleConfig`]
#[derive(Clone, Debug, Default)]
pub struct ScrambleConfigBuilder {
    config: ScrambleConfig,
}

impl ScrambleConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of steps per scramble
    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    /// Allow half-turn steps
    pub fn double_turns(mut self, enabled: bool) -> Self {
        self.config.double_turns = enabled;
        self
    }

    pub fn build(self) -> ScrambleConfig {
        self.config
    }
}

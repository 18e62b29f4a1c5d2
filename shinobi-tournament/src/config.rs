//! Configuration types for tournament play

use serde::{Deserialize, Serialize};
use shinobi_core::PowerModifiers;

/// Number of fighters in a bracket
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum TournamentMode {
    /// A single final
    Two,
    /// Semifinals and final
    Four,
    /// Quarter finals, semifinals and final
    Eight,
}

impl Default for TournamentMode {
    fn default() -> Self {
        TournamentMode::Eight
    }
}

/// A fighter count that is not a supported mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported tournament mode {0}: expected 2, 4 or 8 fighters")]
pub struct UnsupportedMode(pub usize);

impl TournamentMode {
    pub const ALL: [TournamentMode; 3] = [TournamentMode::Two, TournamentMode::Four, TournamentMode::Eight];

    /// Fighters needed to start
    pub fn fighters(self) -> usize {
        match self {
            TournamentMode::Two => 2,
            TournamentMode::Four => 4,
            TournamentMode::Eight => 8,
        }
    }

    /// Rounds played, final included
    pub fn rounds(self) -> usize {
        self.fighters().trailing_zeros() as usize
    }

    /// Matches played in the whole bracket
    pub fn total_matches(self) -> usize {
        self.fighters() - 1
    }
}

impl TryFrom<usize> for TournamentMode {
    type Error = UnsupportedMode;

    fn try_from(fighters: usize) -> Result<Self, Self::Error> {
        match fighters {
            2 => Ok(TournamentMode::Two),
            4 => Ok(TournamentMode::Four),
            8 => Ok(TournamentMode::Eight),
            other => Err(UnsupportedMode(other)),
        }
    }
}

impl From<TournamentMode> for usize {
    fn from(mode: TournamentMode) -> Self {
        mode.fighters()
    }
}

impl std::fmt::Display for TournamentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fighters", self.fighters())
    }
}

/// Tournament configuration
#[derive(Clone, Debug, Default)]
pub struct TournamentConfig {
    /// Bracket size
    pub mode: TournamentMode,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Fight score modifiers
    pub modifiers: PowerModifiers,
}

impl TournamentConfig {
    /// Create config for the given mode
    pub fn new(mode: TournamentMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set custom fight modifiers
    pub fn with_modifiers(mut self, modifiers: PowerModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

//! Stat bundles and power tiers

use serde::{Deserialize, Serialize};

/// Chakra at or above this marks a fighter as high-chakra
pub const HIGH_CHAKRA_THRESHOLD: f64 = 150.0;

/// The five combat stats of a fighter
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub attack: f64,
    pub defense: f64,
    pub speed: f64,
    pub intelligence: f64,
    pub chakra: f64,
}

impl Stats {
    pub const fn new(attack: f64, defense: f64, speed: f64, intelligence: f64, chakra: f64) -> Self {
        Self {
            attack,
            defense,
            speed,
            intelligence,
            chakra,
        }
    }

    pub fn has_high_chakra(&self) -> bool {
        self.chakra >= HIGH_CHAKRA_THRESHOLD
    }
}

/// Named base stat bundle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatTier {
    /// Headliners, jinchuriki, kekkei genkai users and legendary clans
    Top,
    /// Kage, Akatsuki and Sannin
    Elite,
    /// Everyone else
    Mid,
    LowMid,
    /// Not assigned by any rule
    Baseline,
}

impl StatTier {
    pub const ALL: [StatTier; 5] = [
        StatTier::Top,
        StatTier::Elite,
        StatTier::Mid,
        StatTier::LowMid,
        StatTier::Baseline,
    ];

    pub const fn stats(self) -> Stats {
        match self {
            StatTier::Top => Stats::new(150.0, 140.0, 150.0, 150.0, 200.0),
            StatTier::Elite => Stats::new(130.0, 120.0, 130.0, 130.0, 150.0),
            StatTier::Mid => Stats::new(110.0, 110.0, 110.0, 110.0, 130.0),
            StatTier::LowMid => Stats::new(85.0, 85.0, 85.0, 85.0, 100.0),
            StatTier::Baseline => Stats::new(60.0, 60.0, 60.0, 60.0, 80.0),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            StatTier::Top => "top",
            StatTier::Elite => "elite",
            StatTier::Mid => "mid",
            StatTier::LowMid => "low-mid",
            StatTier::Baseline => "baseline",
        }
    }
}

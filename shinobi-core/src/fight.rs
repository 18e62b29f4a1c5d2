//! Fight resolution
//!
//! A fight is decided by comparing power scores:
//! - weighted stat sum (chakra only matters through the high-chakra flag)
//! - multiplicative lore modifiers, applied in a fixed order
//! - one jitter draw per fighter from an injected unit source
//!
//! Ties go to fighter B.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fighter::Fighter;
use crate::stats::Stats;

/// Stat weights for base power
pub const ATTACK_WEIGHT: f64 = 1.6;
pub const DEFENSE_WEIGHT: f64 = 1.1;
pub const SPEED_WEIGHT: f64 = 0.8;
pub const INTELLIGENCE_WEIGHT: f64 = 1.5;

/// Source of uniform values in [0, 1)
///
/// Every `rand::Rng` is a unit source. Tests and replays can use
/// [`ScriptedRolls`] to pin the jitter exactly.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Unit source that replays a fixed list of values, cycling when exhausted
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRolls {
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "ScriptedRolls needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always yields `value`
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Always yields the value that makes the jitter exactly neutral
    pub fn neutral() -> Self {
        Self::constant(0.5)
    }
}

impl UnitSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Multipliers applied on top of base power
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerModifiers {
    pub jinchuriki_boost: f64,
    /// Only applies to fighters that are not jinchuriki
    pub high_chakra_boost: f64,
    pub kekkei_genkai_boost: f64,
    pub elite_bonus: f64,
    pub jitter_min: f64,
    pub jitter_range: f64,
}

impl Default for PowerModifiers {
    fn default() -> Self {
        Self {
            jinchuriki_boost: 2.5,
            high_chakra_boost: 2.0,
            kekkei_genkai_boost: 1.7,
            elite_bonus: 1.1,
            jitter_min: 0.95,
            jitter_range: 0.1,
        }
    }
}

impl PowerModifiers {
    /// Modifiers with the random factor pinned to 1.0
    pub fn without_jitter() -> Self {
        Self {
            jitter_min: 1.0,
            jitter_range: 0.0,
            ..Default::default()
        }
    }

    /// Map a unit draw onto the jitter range
    pub fn jitter(&self, unit: f64) -> f64 {
        self.jitter_min + self.jitter_range * unit
    }
}

/// Which side of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

/// Result of a single fight
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FightOutcome {
    pub winner: Side,
    pub score_a: f64,
    pub score_b: f64,
}

/// Weighted stat sum
pub fn base_power(stats: &Stats) -> f64 {
    stats.attack * ATTACK_WEIGHT
        + stats.defense * DEFENSE_WEIGHT
        + stats.speed * SPEED_WEIGHT
        + stats.intelligence * INTELLIGENCE_WEIGHT
}

/// Power score before jitter
pub fn power_score(fighter: &Fighter, modifiers: &PowerModifiers) -> f64 {
    let mut score = base_power(&fighter.stats);

    if fighter.is_jinchuriki {
        score *= modifiers.jinchuriki_boost;
    } else if fighter.has_high_chakra {
        score *= modifiers.high_chakra_boost;
    }

    if fighter.has_kekkei_genkai {
        score *= modifiers.kekkei_genkai_boost;
    }

    score *= fighter.clan_bonus_multiplier;
    score *= fighter.nature_mastery_multiplier;

    if fighter.is_elite_class {
        score *= modifiers.elite_bonus;
    }

    score
}

/// Fight with explicit modifiers; draws jitter for A, then for B
pub fn fight<U: UnitSource + ?Sized>(
    a: &Fighter,
    b: &Fighter,
    modifiers: &PowerModifiers,
    rng: &mut U,
) -> FightOutcome {
    let score_a = power_score(a, modifiers) * modifiers.jitter(rng.next_unit());
    let score_b = power_score(b, modifiers) * modifiers.jitter(rng.next_unit());

    let winner = if score_a > score_b { Side::A } else { Side::B };

    tracing::debug!(
        a = %a.name,
        b = %b.name,
        score_a,
        score_b,
        ?winner,
        "fight resolved"
    );

    FightOutcome {
        winner,
        score_a,
        score_b,
    }
}

/// Pick the winner of `a` vs `b` with the standard modifiers
pub fn resolve<'a, U: UnitSource + ?Sized>(a: &'a Fighter, b: &'a Fighter, rng: &mut U) -> &'a Fighter {
    match fight(a, b, &PowerModifiers::default(), rng).winner {
        Side::A => a,
        Side::B => b,
    }
}

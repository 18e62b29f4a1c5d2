//! Shinobi Core - Fighter profiles and fight resolution
//!
//! This crate provides the pure building blocks of a tournament:
//! - Character records as returned by the character search API
//! - Stat tiers and per-name stat overrides
//! - Fighter builder (record -> normalized fighter profile)
//! - Fight resolver (power score + jitter from an injected unit source)

pub mod record;
pub mod stats;
pub mod fighter;
pub mod fight;

// Re-exports for convenient access
pub use record::{CharacterRecord, PersonalInfo};
pub use stats::{StatTier, Stats, HIGH_CHAKRA_THRESHOLD};
pub use fighter::{build_fighter, Fighter, FighterBuilder, RecordTraits, StatSource, TierRule};
pub use fight::{
    base_power, fight, power_score, resolve, FightOutcome, PowerModifiers, ScriptedRolls, Side,
    UnitSource,
};

//! Fighter profiles and the builder that derives them from character records
//!
//! Stats come from one of two places:
//! - an exact per-name override (characters with a lopsided stat spread)
//! - a tier picked by the first matching rule in an ordered rule list
//!
//! Combat flags and multipliers are always derived from the record itself.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::record::CharacterRecord;
use crate::stats::{StatTier, Stats};

pub const UNKNOWN_NAME: &str = "Unknown Ninja";
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/150/FF4500/FFFFFF?text=No+Image";

/// Clan bonus above this makes a clan legendary
pub const LEGENDARY_CLAN_THRESHOLD: f64 = 1.1;

/// Nature types needed for the mastery bonus
pub const MULTI_NATURE_COUNT: usize = 3;
pub const MULTI_NATURE_BONUS: f64 = 1.1;

/// Tier assigned when no rule matches
pub const FALLBACK_TIER: StatTier = StatTier::Mid;

const HEADLINER_NAMES: [&str; 4] = ["naruto", "sasuke", "madara", "hashirama"];
const ELITE_AFFILIATION_MARKERS: [&str; 3] = ["kage", "akatsuki", "sannin"];

const CLAN_BONUSES: [(&str, f64); 4] = [
    ("uchiha", 1.15),
    ("uzumaki", 1.15),
    ("hyuga", 1.1),
    ("senju", 1.5),
];

const STAT_OVERRIDES: [(&str, Stats); 2] = [
    ("shikamaru nara", Stats::new(60.0, 70.0, 80.0, 180.0, 90.0)),
    ("rock lee", Stats::new(120.0, 80.0, 150.0, 60.0, 70.0)),
];

/// Normalized combat profile
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fighter {
    pub id: Option<u64>,
    pub name: String,
    pub image: String,
    pub stats: Stats,
    pub is_jinchuriki: bool,
    pub has_kekkei_genkai: bool,
    pub is_elite_class: bool,
    pub has_high_chakra: bool,
    pub clan_bonus_multiplier: f64,
    pub nature_mastery_multiplier: f64,
}

impl Fighter {
    /// Plain fighter with the given stats and no bonuses
    pub fn with_stats(name: &str, stats: Stats) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            stats,
            is_jinchuriki: false,
            has_kekkei_genkai: false,
            is_elite_class: false,
            has_high_chakra: stats.has_high_chakra(),
            clan_bonus_multiplier: 1.0,
            nature_mastery_multiplier: 1.0,
        }
    }
}

/// Facts about a record that tier rules can inspect
#[derive(Clone, Debug, PartialEq)]
pub struct RecordTraits {
    pub name_lower: String,
    pub is_jinchuriki: bool,
    pub has_kekkei_genkai: bool,
    pub clan_multiplier: f64,
    pub is_elite_affiliate: bool,
}

impl RecordTraits {
    pub fn is_legendary_clan(&self) -> bool {
        self.clan_multiplier > LEGENDARY_CLAN_THRESHOLD
    }
}

/// One predicate -> tier rule
#[derive(Clone, Copy)]
pub struct TierRule {
    pub name: &'static str,
    pub tier: StatTier,
    pub applies: fn(&RecordTraits) -> bool,
}

impl std::fmt::Debug for TierRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TierRule")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

impl TierRule {
    /// The built-in rules, highest priority first
    pub fn standard() -> Vec<TierRule> {
        vec![
            TierRule {
                name: "headliner",
                tier: StatTier::Top,
                applies: |t| HEADLINER_NAMES.iter().any(|n| t.name_lower.contains(n)),
            },
            TierRule {
                name: "legendary-bloodline",
                tier: StatTier::Top,
                applies: |t| t.is_jinchuriki || t.has_kekkei_genkai || t.is_legendary_clan(),
            },
            TierRule {
                name: "elite-affiliation",
                tier: StatTier::Elite,
                applies: |t| t.is_elite_affiliate,
            },
        ]
    }
}

/// Where a fighter's stats came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Override,
    Rule(&'static str, StatTier),
    Fallback(StatTier),
}

impl StatSource {
    /// Tier behind the stats, `None` for overrides
    pub fn tier(self) -> Option<StatTier> {
        match self {
            StatSource::Override => None,
            StatSource::Rule(_, tier) | StatSource::Fallback(tier) => Some(tier),
        }
    }
}

/// Builds fighters from character records
#[derive(Clone, Debug)]
pub struct FighterBuilder {
    overrides: FxHashMap<String, Stats>,
    clan_bonuses: FxHashMap<String, f64>,
    rules: Vec<TierRule>,
}

impl Default for FighterBuilder {
    fn default() -> Self {
        Self {
            overrides: STAT_OVERRIDES
                .iter()
                .map(|&(name, stats)| (name.to_string(), stats))
                .collect(),
            clan_bonuses: CLAN_BONUSES
                .iter()
                .map(|&(clan, bonus)| (clan.to_string(), bonus))
                .collect(),
            rules: TierRule::standard(),
        }
    }
}

impl FighterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exact stat bundle for a full character name (case-insensitive)
    pub fn with_override(mut self, name: &str, stats: Stats) -> Self {
        self.overrides.insert(name.to_lowercase(), stats);
        self
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: TierRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rules(&self) -> &[TierRule] {
        &self.rules
    }

    /// Build the fighter profile for a record
    pub fn build(&self, record: &CharacterRecord) -> Fighter {
        self.build_with_source(record).0
    }

    /// Build the fighter profile and report which table or rule set its stats
    pub fn build_with_source(&self, record: &CharacterRecord) -> (Fighter, StatSource) {
        let traits = self.traits(record);

        let (stats, source) = match self.overrides.get(&traits.name_lower) {
            Some(&stats) => (stats, StatSource::Override),
            None => {
                let source = self.classify(&traits);
                let tier = source.tier().unwrap_or(FALLBACK_TIER);
                (tier.stats(), source)
            }
        };

        let nature_mastery_multiplier = if record.nature_types().len() >= MULTI_NATURE_COUNT {
            MULTI_NATURE_BONUS
        } else {
            1.0
        };

        let fighter = Fighter {
            id: record.id,
            name: record
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            image: record.first_image().unwrap_or(PLACEHOLDER_IMAGE).to_string(),
            stats,
            is_jinchuriki: traits.is_jinchuriki,
            has_kekkei_genkai: traits.has_kekkei_genkai,
            is_elite_class: traits.is_elite_affiliate,
            has_high_chakra: stats.has_high_chakra(),
            clan_bonus_multiplier: traits.clan_multiplier,
            nature_mastery_multiplier,
        };

        tracing::debug!(name = %fighter.name, ?source, "built fighter");

        (fighter, source)
    }

    /// Gather the facts the tier rules look at
    pub fn traits(&self, record: &CharacterRecord) -> RecordTraits {
        RecordTraits {
            name_lower: record.name_lower(),
            is_jinchuriki: record.is_jinchuriki(),
            has_kekkei_genkai: record.has_kekkei_genkai(),
            clan_multiplier: self.clan_multiplier(record),
            is_elite_affiliate: is_elite_affiliate(record),
        }
    }

    /// First clan in record order that has a bonus; 1.0 when none does
    pub fn clan_multiplier(&self, record: &CharacterRecord) -> f64 {
        record
            .clans()
            .iter()
            .find_map(|clan| self.clan_bonuses.get(&clan.to_lowercase()).copied())
            .unwrap_or(1.0)
    }

    fn classify(&self, traits: &RecordTraits) -> StatSource {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(traits))
            .map(|rule| StatSource::Rule(rule.name, rule.tier))
            .unwrap_or(StatSource::Fallback(FALLBACK_TIER))
    }
}

fn is_elite_affiliate(record: &CharacterRecord) -> bool {
    record.affiliations().iter().any(|affiliation| {
        let lower = affiliation.to_lowercase();
        ELITE_AFFILIATION_MARKERS.iter().any(|m| lower.contains(m))
    })
}

/// Build a fighter with the standard tables
pub fn build_fighter(record: &CharacterRecord) -> Fighter {
    FighterBuilder::default().build(record)
}

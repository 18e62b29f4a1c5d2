//! Fighters command - show the combat profile built from each record
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_profiles(), report
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use shinobi_core::{base_power, CharacterRecord, Fighter, FighterBuilder, StatSource};

use crate::common::load_records;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct FightersArgs {
    /// JSON array of character records
    #[arg(long, value_name = "FILE")]
    pub records: PathBuf,

    /// Output profiles as JSON
    #[arg(long)]
    pub json: bool,
}

/// A built fighter and where its stats came from
struct Profile {
    fighter: Fighter,
    source: StatSource,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: FightersArgs) -> Result<()> {
    let records = load_records(&args.records)?;
    let profiles = build_profiles(&records);

    if args.json {
        print_json(&profiles)?;
    } else {
        print_table(&profiles);
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_profiles(records: &[CharacterRecord]) -> Vec<Profile> {
    let builder = FighterBuilder::default();
    records
        .iter()
        .map(|record| {
            let (fighter, source) = builder.build_with_source(record);
            Profile { fighter, source }
        })
        .collect()
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn source_label(source: StatSource) -> String {
    match source {
        StatSource::Override => "override".to_string(),
        StatSource::Rule(rule, tier) => format!("{} ({})", tier.name(), rule),
        StatSource::Fallback(tier) => tier.name().to_string(),
    }
}

fn flags(fighter: &Fighter) -> String {
    let mut flags = Vec::new();
    if fighter.is_jinchuriki {
        flags.push("jinchuriki");
    }
    if fighter.has_kekkei_genkai {
        flags.push("kekkei-genkai");
    }
    if fighter.is_elite_class {
        flags.push("elite");
    }
    if fighter.has_high_chakra {
        flags.push("high-chakra");
    }
    flags.join(",")
}

fn print_table(profiles: &[Profile]) {
    println!(
        "{:<28} {:<28} {:>8} {:>6} {:>6}  FLAGS",
        "NAME", "STATS", "BASE", "CLAN", "NATURE"
    );
    for p in profiles {
        let f = &p.fighter;
        println!(
            "{:<28} {:<28} {:>8.1} {:>6.2} {:>6.2}  {}",
            f.name,
            source_label(p.source),
            base_power(&f.stats),
            f.clan_bonus_multiplier,
            f.nature_mastery_multiplier,
            flags(f)
        );
    }
    println!("\n{} fighters", profiles.len());
}

fn print_json(profiles: &[Profile]) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonProfile<'a> {
        #[serde(flatten)]
        fighter: &'a Fighter,
        source: String,
        base_power: f64,
    }

    let output: Vec<JsonProfile> = profiles
        .iter()
        .map(|p| JsonProfile {
            fighter: &p.fighter,
            source: source_label(p.source),
            base_power: base_power(&p.fighter.stats),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

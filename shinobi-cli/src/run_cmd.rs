//! Run command - seed one bracket and play it to the end
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_tournament(), report
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use shinobi_core::Fighter;
use shinobi_tournament::{
    Bracket, BracketSink, DiscardSink, JsonFileSink, Roster, Tournament, TournamentConfig,
};

use crate::common::{build_roster, create_rng, load_records, parse_mode};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// JSON array of character records
    #[arg(long, value_name = "FILE")]
    pub records: PathBuf,

    /// Bracket size (2, 4 or 8)
    #[arg(long, default_value = "8")]
    pub mode: usize,

    /// Write every bracket snapshot to this file
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Output the final bracket as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run one tournament:
/// 1. Build the roster from the records
/// 2. Seed and play every match
/// 3. Report the bracket
pub fn run(args: RunArgs, seed: Option<u64>) -> Result<()> {
    let mut config = TournamentConfig::new(parse_mode(args.mode)?);
    if let Some(s) = seed {
        config = config.with_seed(s);
    }

    let records = load_records(&args.records)?;
    let roster = build_roster(&records, config.mode)?;

    let sink: Box<dyn BracketSink> = match &args.snapshot {
        Some(path) => Box::new(JsonFileSink::new(path)),
        None => Box::new(DiscardSink),
    };
    let bracket = play_tournament(&roster, &config, sink)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bracket)?);
    } else {
        print_bracket(&bracket);
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Seed a bracket from the roster and play it out through `sink`
fn play_tournament<S: BracketSink>(
    roster: &Roster,
    config: &TournamentConfig,
    sink: S,
) -> Result<Bracket> {
    let mut rng = create_rng(config.seed);
    let bracket = roster.start(&mut rng)?;

    tracing::info!(
        "Starting tournament: {} ({} matches)",
        config.mode,
        bracket.slot_count()
    );

    let mut tournament = Tournament::new(bracket, sink)?.with_modifiers(config.modifiers);
    if let Some(champion) = tournament.play_out(&mut rng)? {
        tracing::info!("Champion: {}", champion.name);
    }

    let (bracket, _) = tournament.into_parts();
    Ok(bracket)
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn slot_name(slot: &Option<Fighter>) -> &str {
    slot.as_ref().map_or("TBD", |f| f.name.as_str())
}

fn print_bracket(bracket: &Bracket) {
    for (key, slots) in bracket.rounds() {
        println!("== {} ==", bracket.round_title(key));
        for m in slots.iter().flatten() {
            let winner = m
                .winner
                .as_ref()
                .map_or(String::new(), |w| format!("  -> {}", w.name));
            println!(
                "  {:<12} {} vs {}{}",
                m.id,
                slot_name(&m.fighter_a),
                slot_name(&m.fighter_b),
                winner
            );
        }
    }

    match bracket.champion() {
        Some(champion) => println!("\nChampion: {}", champion.name),
        None => println!("\nNo champion yet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shinobi_core::CharacterRecord;
    use shinobi_tournament::{MemorySink, TournamentMode};

    fn roster() -> Roster {
        let records: Vec<CharacterRecord> = ["Naruto Uzumaki", "Sasuke Uchiha", "Gaara", "Rock Lee"]
            .iter()
            .map(|n| CharacterRecord::named(n))
            .collect();
        build_roster(&records, TournamentMode::Four).unwrap()
    }

    #[test]
    fn test_play_tournament_completes() {
        let config = TournamentConfig::new(TournamentMode::Four).with_seed(42);
        let mut sink = MemorySink::new();
        let bracket = play_tournament(&roster(), &config, &mut sink).unwrap();

        assert!(bracket.is_complete());
        assert_eq!(bracket.played_count(), 3);
        assert_eq!(sink.history().len(), 4);
    }

    #[test]
    fn test_play_tournament_is_reproducible() {
        let config = TournamentConfig::new(TournamentMode::Four).with_seed(7);
        let a = play_tournament(&roster(), &config, DiscardSink).unwrap();
        let b = play_tournament(&roster(), &config, DiscardSink).unwrap();
        assert_eq!(a, b);
    }
}

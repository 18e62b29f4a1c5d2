//! Simulate command - play many independent tournaments and count champions
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: simulate(), report
//! - Level 3: play_one()
//! - Level 4: formatting utilities
//!
//! Each run gets its own RNG seeded from the base seed and the run index, so
//! the tally does not depend on how rayon schedules the runs.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use shinobi_tournament::{DiscardSink, Roster, Tournament};

use crate::common::{build_roster, load_records, parse_mode};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// JSON array of character records
    #[arg(long, value_name = "FILE")]
    pub records: PathBuf,

    /// Bracket size (2, 4 or 8)
    #[arg(long, default_value = "8")]
    pub mode: usize,

    /// Number of tournaments to play
    #[arg(long, default_value = "1000")]
    pub runs: usize,

    /// Output the tally as JSON
    #[arg(long)]
    pub json: bool,
}

/// Championships per fighter, most wins first
#[derive(Clone, Debug, PartialEq)]
struct Tally {
    runs: usize,
    champions: Vec<(String, usize)>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let mode = parse_mode(args.mode)?;
    let records = load_records(&args.records)?;
    let roster = build_roster(&records, mode)?;

    let base_seed = seed.unwrap_or_else(rand::random);
    tracing::info!(
        "Simulating {} tournaments ({}, base seed {})",
        args.runs,
        mode,
        base_seed
    );

    let tally = simulate(&roster, args.runs, base_seed)?;

    if args.json {
        print_json(&tally)?;
    } else {
        print_table(&tally);
    }
    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn simulate(roster: &Roster, runs: usize, base_seed: u64) -> Result<Tally> {
    let champions: Vec<String> = (0..runs)
        .into_par_iter()
        .map(|run| play_one(roster, base_seed.wrapping_add(run as u64)))
        .collect::<Result<_>>()?;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in champions {
        *counts.entry(name).or_default() += 1;
    }

    let mut champions: Vec<(String, usize)> = counts.into_iter().collect();
    champions.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    Ok(Tally { runs, champions })
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one full tournament and return the champion's name
fn play_one(roster: &Roster, seed: u64) -> Result<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bracket = roster.start(&mut rng)?;

    let mut tournament = Tournament::new(bracket, DiscardSink)?;
    let champion = tournament
        .play_out(&mut rng)?
        .map(|c| c.name.clone())
        .ok_or_else(|| anyhow::anyhow!("tournament ended without a champion"))?;

    tracing::debug!(seed, champion = %champion, "run finished");
    Ok(champion)
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn win_rate(wins: usize, runs: usize) -> f64 {
    if runs > 0 {
        wins as f64 / runs as f64
    } else {
        0.0
    }
}

fn print_table(tally: &Tally) {
    println!("{:<28} {:>8} {:>8}", "CHAMPION", "WINS", "RATE");
    for (name, wins) in &tally.champions {
        println!(
            "{:<28} {:>8} {:>7.1}%",
            name,
            wins,
            win_rate(*wins, tally.runs) * 100.0
        );
    }
    println!("\n{} tournaments", tally.runs);
}

fn print_json(tally: &Tally) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonChampion<'a> {
        name: &'a str,
        wins: usize,
        win_rate: f64,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        runs: usize,
        champions: Vec<JsonChampion<'a>>,
    }

    let output = JsonOutput {
        runs: tally.runs,
        champions: tally
            .champions
            .iter()
            .map(|(name, wins)| JsonChampion {
                name,
                wins: *wins,
                win_rate: win_rate(*wins, tally.runs),
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

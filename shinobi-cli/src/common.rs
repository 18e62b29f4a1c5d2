//! Helpers shared by the tournament commands

use std::path::Path;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use shinobi_core::{CharacterRecord, FighterBuilder};
use shinobi_tournament::{Roster, RosterError, TournamentMode};

/// Create RNG from optional seed
pub fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Parse a `--mode` value into a tournament size
pub fn parse_mode(fighters: usize) -> Result<TournamentMode> {
    TournamentMode::try_from(fighters).context("Unsupported --mode")
}

/// Load character records from a JSON array file
pub fn load_records(path: &Path) -> Result<Vec<CharacterRecord>> {
    let records = CharacterRecord::load_all(path)
        .with_context(|| format!("Failed to load character records: {}", path.display()))?;
    tracing::info!("Loaded {} character records from {}", records.len(), path.display());
    Ok(records)
}

/// Fill a roster with the first distinct fighters built from `records`
pub fn build_roster(records: &[CharacterRecord], mode: TournamentMode) -> Result<Roster> {
    let builder = FighterBuilder::default();
    let mut roster = Roster::new(mode);

    for record in records {
        if roster.is_complete() {
            break;
        }
        match roster.add(builder.build(record)) {
            Ok(()) => {}
            Err(RosterError::DuplicateFighter(name)) => {
                tracing::warn!("Skipping duplicate fighter: {}", name);
            }
            Err(e) => return Err(e.into()),
        }
    }

    if !roster.is_complete() {
        anyhow::bail!(
            "Only {} distinct fighters in records, {} needs {}",
            roster.len(),
            mode,
            mode.fighters()
        );
    }
    Ok(roster)
}

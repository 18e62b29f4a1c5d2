//! Resolve command - play one match of a saved bracket and write it back

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use shinobi_core::UnitSource;
use shinobi_tournament::{Bracket, RoundKey};

use crate::common::create_rng;

#[derive(Args)]
pub struct ResolveArgs {
    /// Bracket snapshot to update
    #[arg(long, value_name = "FILE")]
    pub snapshot: PathBuf,

    /// Round holding the match, e.g. round_1
    #[arg(long)]
    pub round: String,

    /// Match id, e.g. R1-M2
    #[arg(long = "match", value_name = "ID")]
    pub match_id: String,
}

pub fn run(args: ResolveArgs, seed: Option<u64>) -> Result<()> {
    let round: RoundKey = args.round.parse()?;
    let mut rng = create_rng(seed);

    let next = resolve_snapshot(&args.snapshot, round, &args.match_id, &mut rng)?;

    if let Some((_, played)) = next.find_match(&args.match_id) {
        if let Some(winner) = &played.winner {
            println!("{} ({}): {} wins", played.id, next.round_title(round), winner.name);
        }
    }
    if let Some(champion) = next.champion() {
        println!("Champion: {}", champion.name);
    }
    Ok(())
}

/// Load a snapshot, resolve one match and save the new snapshot in place
fn resolve_snapshot<U: UnitSource + ?Sized>(
    path: &Path,
    round: RoundKey,
    match_id: &str,
    rng: &mut U,
) -> Result<Bracket> {
    let bracket = Bracket::load(path)?;
    let next = bracket
        .resolve_match(round, match_id, rng)
        .with_context(|| format!("Cannot resolve {} in {}", match_id, round))?;
    next.save(path)?;

    tracing::info!(
        "Resolved {} ({}/{} matches played)",
        match_id,
        next.played_count(),
        next.mode().total_matches()
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shinobi_core::{Fighter, ScriptedRolls, StatTier};

    fn saved_bracket(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("shinobi-{}-{}.json", name, std::process::id()));
        let fighters = vec![
            Fighter::with_stats("Kakashi Hatake", StatTier::Elite.stats()),
            Fighter::with_stats("Obito Uchiha", StatTier::Top.stats()),
        ];
        let mut rng = create_rng(Some(1));
        Bracket::seed(fighters, 2, &mut rng).unwrap().save(&path).unwrap();
        path
    }

    #[test]
    fn test_resolve_snapshot_writes_back() {
        let path = saved_bracket("resolve");
        let next = resolve_snapshot(&path, RoundKey::FIRST, "R1-M1", &mut ScriptedRolls::neutral()).unwrap();

        assert!(next.is_complete());
        assert_eq!(Bracket::load(&path).unwrap(), next);
        assert_eq!(next.champion().map(|c| c.name.as_str()), Some("Obito Uchiha"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_resolve_snapshot_rejects_replay() {
        let path = saved_bracket("replay");
        let mut rolls = ScriptedRolls::neutral();
        resolve_snapshot(&path, RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();

        assert!(resolve_snapshot(&path, RoundKey::FIRST, "R1-M1", &mut rolls).is_err());
        assert_eq!(Bracket::load(&path).unwrap().played_count(), 1);

        std::fs::remove_file(&path).ok();
    }
}

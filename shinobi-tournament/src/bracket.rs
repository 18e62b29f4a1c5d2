//! Single-elimination bracket engine
//!
//! A bracket is an immutable snapshot. Resolving a match never touches the
//! snapshot it was called on; it returns the next snapshot with exactly one
//! match played and, unless that match was the final, the winner placed in
//! the next round.
//!
//! Slots in later rounds start empty and are materialized the first time a
//! winner is sent there. The winner of match `i` goes to match `i / 2` of the
//! next round, into fighter A if that is still empty and fighter B otherwise.

use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shinobi_core::{fight, Fighter, PowerModifiers, Side, UnitSource};

use crate::config::TournamentMode;
use crate::error::BracketError;

/// Identifies a round, `round_1` being the first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoundKey(usize);

impl RoundKey {
    pub const FIRST: RoundKey = RoundKey(1);

    /// Round by 1-based number
    pub fn new(number: usize) -> Option<Self> {
        (number >= 1).then_some(Self(number))
    }

    pub fn number(self) -> usize {
        self.0
    }

    /// 0-based position in the bracket
    pub fn index(self) -> usize {
        self.0 - 1
    }

    pub fn next(self) -> RoundKey {
        RoundKey(self.0 + 1)
    }

    /// Id of a match created at seed time, e.g. `R1-M3`
    pub fn seeded_match_id(self, index: usize) -> String {
        format!("R{}-M{}", self.0, index + 1)
    }

    /// Id of a match created when its first winner arrives, e.g. `ROUND_2-M1`
    pub fn advanced_match_id(self, index: usize) -> String {
        format!("{}-M{}", self.to_string().to_uppercase(), index + 1)
    }
}

impl std::fmt::Display for RoundKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "round_{}", self.0)
    }
}

impl FromStr for RoundKey {
    type Err = BracketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("round_")
            .and_then(|n| n.parse::<usize>().ok())
            .and_then(RoundKey::new)
            .ok_or_else(|| BracketError::InvalidRoundKey(s.to_string()))
    }
}

/// Progress of a single match
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchState {
    Empty,
    PartiallyReady,
    Ready,
    Played,
}

/// One bout between two fighter slots
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub fighter_a: Option<Fighter>,
    pub fighter_b: Option<Fighter>,
    pub winner: Option<Fighter>,
    pub is_played: bool,
}

impl Match {
    fn new(id: String, fighter_a: Option<Fighter>, fighter_b: Option<Fighter>) -> Self {
        Self {
            id,
            fighter_a,
            fighter_b,
            winner: None,
            is_played: false,
        }
    }

    pub fn state(&self) -> MatchState {
        if self.is_played {
            return MatchState::Played;
        }
        match (&self.fighter_a, &self.fighter_b) {
            (None, None) => MatchState::Empty,
            (Some(_), Some(_)) => MatchState::Ready,
            _ => MatchState::PartiallyReady,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.state() == MatchState::Ready
    }

    /// Put an advancing fighter into the first free slot
    fn admit(&mut self, fighter: Fighter) -> Result<(), BracketError> {
        if self.fighter_a.is_none() {
            self.fighter_a = Some(fighter);
        } else if self.fighter_b.is_none() {
            self.fighter_b = Some(fighter);
        } else {
            return Err(BracketError::SlotTaken {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Lifecycle of a whole bracket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BracketStatus {
    /// Nothing played yet
    Seeded,
    InProgress,
    /// Champion crowned
    Completed,
}

/// Full tournament state: every round plus the champion slot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBracket")]
pub struct Bracket {
    mode: TournamentMode,
    /// `rounds[0]` is round_1; `None` marks a slot no winner has reached yet
    rounds: Vec<Vec<Option<Match>>>,
    champion: Option<Fighter>,
}

/// Bracket as read from JSON, before its shape is checked
#[derive(Deserialize)]
struct RawBracket {
    mode: TournamentMode,
    rounds: Vec<Vec<Option<Match>>>,
    champion: Option<Fighter>,
}

impl TryFrom<RawBracket> for Bracket {
    type Error = BracketError;

    /// Rounds must halve from `mode / 2` slots down to a single final
    fn try_from(raw: RawBracket) -> Result<Self, Self::Error> {
        let expected = raw.mode.rounds();
        if raw.rounds.len() != expected {
            return Err(BracketError::MalformedBracket(format!(
                "{} needs {} rounds, found {}",
                raw.mode,
                expected,
                raw.rounds.len()
            )));
        }
        for (i, slots) in raw.rounds.iter().enumerate() {
            let size = raw.mode.fighters() >> (i + 1);
            if slots.len() != size {
                return Err(BracketError::MalformedBracket(format!(
                    "round_{} needs {} slots, found {}",
                    i + 1,
                    size,
                    slots.len()
                )));
            }
        }
        Ok(Self {
            mode: raw.mode,
            rounds: raw.rounds,
            champion: raw.champion,
        })
    }
}

impl Bracket {
    /// Shuffle `fighters` and pair them into the first round.
    ///
    /// `mode` must be 2, 4 or 8 and match the number of fighters.
    pub fn seed<R: Rng + ?Sized>(
        mut fighters: Vec<Fighter>,
        mode: usize,
        rng: &mut R,
    ) -> Result<Self, BracketError> {
        let invalid = BracketError::InvalidRosterSize {
            mode,
            fighters: fighters.len(),
        };
        let mode = match TournamentMode::try_from(mode) {
            Ok(m) if m.fighters() == fighters.len() => m,
            _ => return Err(invalid),
        };

        fighters.shuffle(rng);

        let mut pool = fighters.into_iter();
        let first_round: Vec<Option<Match>> = (0..mode.fighters() / 2)
            .map(|i| {
                Some(Match::new(
                    RoundKey::FIRST.seeded_match_id(i),
                    pool.next(),
                    pool.next(),
                ))
            })
            .collect();

        let mut rounds = vec![first_round];
        let mut size = mode.fighters() / 4;
        while size >= 1 {
            rounds.push(vec![None; size]);
            size /= 2;
        }

        tracing::info!(%mode, rounds = rounds.len(), "bracket seeded");

        Ok(Self {
            mode,
            rounds,
            champion: None,
        })
    }

    /// Resolve a match with the standard fight modifiers
    pub fn resolve_match<U: UnitSource + ?Sized>(
        &self,
        round: RoundKey,
        match_id: &str,
        rng: &mut U,
    ) -> Result<Self, BracketError> {
        self.resolve_match_with(round, match_id, &PowerModifiers::default(), rng)
    }

    /// Fight a ready match and return the next snapshot
    pub fn resolve_match_with<U: UnitSource + ?Sized>(
        &self,
        round: RoundKey,
        match_id: &str,
        modifiers: &PowerModifiers,
        rng: &mut U,
    ) -> Result<Self, BracketError> {
        let (index, current) = self.locate(round, match_id)?;

        if current.is_played {
            return Err(BracketError::AlreadyPlayed {
                id: match_id.to_string(),
            });
        }
        let (a, b) = match (&current.fighter_a, &current.fighter_b) {
            (Some(a), Some(b)) => (a, b),
            _ => {
                return Err(BracketError::MatchNotReady {
                    id: match_id.to_string(),
                })
            }
        };

        let outcome = fight(a, b, modifiers, rng);
        let winner = match outcome.winner {
            Side::A => a.clone(),
            Side::B => b.clone(),
        };

        let mut next = self.clone();
        if let Some(Some(played)) = next.rounds[round.index()].get_mut(index) {
            played.winner = Some(winner.clone());
            played.is_played = true;
        }

        if round.number() == self.rounds.len() {
            tracing::info!(champion = %winner.name, "champion crowned");
            next.champion = Some(winner);
            return Ok(next);
        }

        let dest_round = round.next();
        let dest_index = index / 2;
        let slot = next
            .rounds
            .get_mut(dest_round.index())
            .and_then(|r| r.get_mut(dest_index))
            .ok_or_else(|| BracketError::UnknownMatch {
                round: dest_round.to_string(),
                id: dest_round.advanced_match_id(dest_index),
            })?;

        tracing::debug!(
            id = match_id,
            winner = %winner.name,
            to = %dest_round,
            slot = dest_index,
            "winner advances"
        );

        slot.get_or_insert_with(|| Match::new(dest_round.advanced_match_id(dest_index), None, None))
            .admit(winner)?;

        Ok(next)
    }

    /// Position and contents of a match in a round
    fn locate(&self, round: RoundKey, match_id: &str) -> Result<(usize, &Match), BracketError> {
        self.rounds
            .get(round.index())
            .and_then(|slots| {
                slots.iter().enumerate().find_map(|(i, slot)| match slot {
                    Some(m) if m.id == match_id => Some((i, m)),
                    _ => None,
                })
            })
            .ok_or_else(|| BracketError::UnknownMatch {
                round: round.to_string(),
                id: match_id.to_string(),
            })
    }

    pub fn mode(&self) -> TournamentMode {
        self.mode
    }

    pub fn champion(&self) -> Option<&Fighter> {
        self.champion.as_ref()
    }

    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn final_round(&self) -> RoundKey {
        RoundKey(self.rounds.len())
    }

    /// Slots of a round, materialized or not
    pub fn round(&self, key: RoundKey) -> Option<&[Option<Match>]> {
        self.rounds.get(key.index()).map(Vec::as_slice)
    }

    /// Every round with its key, first round first
    pub fn rounds(&self) -> impl Iterator<Item = (RoundKey, &[Option<Match>])> {
        self.rounds
            .iter()
            .enumerate()
            .map(|(i, slots)| (RoundKey(i + 1), slots.as_slice()))
    }

    /// Every materialized match in round order, then slot order
    pub fn matches(&self) -> impl Iterator<Item = (RoundKey, &Match)> {
        self.rounds()
            .flat_map(|(key, slots)| slots.iter().flatten().map(move |m| (key, m)))
    }

    /// Total match slots across all rounds
    pub fn slot_count(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    pub fn played_count(&self) -> usize {
        self.matches().filter(|(_, m)| m.is_played).count()
    }

    /// Find a match anywhere in the bracket
    pub fn find_match(&self, match_id: &str) -> Option<(RoundKey, &Match)> {
        self.matches().find(|(_, m)| m.id == match_id)
    }

    /// First ready match, in round order then slot order
    pub fn next_ready(&self) -> Option<(RoundKey, &Match)> {
        self.matches().find(|(_, m)| m.is_ready())
    }

    pub fn status(&self) -> BracketStatus {
        if self.champion.is_some() {
            BracketStatus::Completed
        } else if self.played_count() > 0 {
            BracketStatus::InProgress
        } else {
            BracketStatus::Seeded
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status() == BracketStatus::Completed
    }

    /// Display title of a round, counted back from the final
    pub fn round_title(&self, key: RoundKey) -> String {
        match self.rounds.len().checked_sub(key.number()) {
            Some(0) => "Final".to_string(),
            Some(1) => "Semifinals".to_string(),
            Some(2) => "Quarter Finals".to_string(),
            _ => format!("Round {}", key.number()),
        }
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read bracket snapshot: {}", path.display()))?;
        let bracket = serde_json::from_str(&content)
            .with_context(|| format!("Invalid bracket snapshot: {}", path.display()))?;
        Ok(bracket)
    }

    /// Save the snapshot as pretty JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write bracket snapshot: {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use shinobi_core::{ScriptedRolls, StatTier};
    use std::collections::HashSet;

    fn roster(n: usize) -> Vec<Fighter> {
        (0..n)
            .map(|i| Fighter::with_stats(&format!("F{}", i), StatTier::Mid.stats()))
            .collect()
    }

    fn seeded(n: usize) -> Bracket {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        Bracket::seed(roster(n), n, &mut rng).unwrap()
    }

    fn fighter_name(slot: &Option<Fighter>) -> &str {
        slot.as_ref().map(|f| f.name.as_str()).unwrap_or("")
    }

    #[test]
    fn test_round_key_text_form() {
        let key: RoundKey = "round_2".parse().unwrap();
        assert_eq!(key.number(), 2);
        assert_eq!(key.to_string(), "round_2");
        assert_eq!(key.seeded_match_id(0), "R2-M1");
        assert_eq!(key.advanced_match_id(1), "ROUND_2-M2");

        assert!("round_0".parse::<RoundKey>().is_err());
        assert!("final".parse::<RoundKey>().is_err());
        assert_eq!(
            "round_x".parse::<RoundKey>(),
            Err(BracketError::InvalidRoundKey("round_x".into()))
        );
    }

    #[test]
    fn test_seed_slot_counts() {
        for n in [2, 4, 8] {
            let bracket = seeded(n);
            assert_eq!(bracket.slot_count(), n - 1);
            assert_eq!(bracket.round(RoundKey::FIRST).unwrap().len(), n / 2);
            assert_eq!(bracket.round_count(), TournamentMode::try_from(n).unwrap().rounds());
            assert_eq!(bracket.status(), BracketStatus::Seeded);
            assert!(bracket.champion().is_none());
        }
    }

    #[test]
    fn test_seed_pairs_every_fighter_once() {
        let bracket = seeded(8);
        let mut names = HashSet::new();
        for (i, slot) in bracket.round(RoundKey::FIRST).unwrap().iter().enumerate() {
            let m = slot.as_ref().unwrap();
            assert_eq!(m.id, format!("R1-M{}", i + 1));
            assert_eq!(m.state(), MatchState::Ready);
            assert!(names.insert(fighter_name(&m.fighter_a).to_string()));
            assert!(names.insert(fighter_name(&m.fighter_b).to_string()));
        }
        assert_eq!(names.len(), 8);

        // later rounds start as empty slots
        for (key, slots) in bracket.rounds().skip(1) {
            assert!(slots.iter().all(Option::is_none), "{} should be empty", key);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let order = |seed: u64| -> Vec<String> {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let bracket = Bracket::seed(roster(8), 8, &mut rng).unwrap();
            bracket
                .round(RoundKey::FIRST)
                .unwrap()
                .iter()
                .flatten()
                .flat_map(|m| [fighter_name(&m.fighter_a).to_string(), fighter_name(&m.fighter_b).to_string()])
                .collect()
        };
        assert_eq!(order(7), order(7));
    }

    #[test]
    fn test_seed_rejects_bad_sizes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            Bracket::seed(roster(3), 4, &mut rng),
            Err(BracketError::InvalidRosterSize { mode: 4, fighters: 3 })
        );
        assert_eq!(
            Bracket::seed(roster(16), 16, &mut rng),
            Err(BracketError::InvalidRosterSize { mode: 16, fighters: 16 })
        );
        assert_eq!(
            Bracket::seed(roster(6), 6, &mut rng),
            Err(BracketError::InvalidRosterSize { mode: 6, fighters: 6 })
        );
        assert!(Bracket::seed(Vec::new(), 0, &mut rng).is_err());
    }

    #[test]
    fn test_resolve_marks_match_played() {
        let bracket = seeded(4);
        let mut rolls = ScriptedRolls::neutral();
        let next = bracket.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();

        let (_, m) = next.find_match("R1-M1").unwrap();
        assert_eq!(m.state(), MatchState::Played);
        // equal stats and neutral jitter: B takes the tie
        assert_eq!(m.winner, m.fighter_b);
        assert_eq!(next.status(), BracketStatus::InProgress);

        // the input snapshot is untouched
        assert_eq!(bracket.played_count(), 0);
        assert_eq!(bracket.status(), BracketStatus::Seeded);
    }

    #[test]
    fn test_resolve_twice_is_rejected() {
        let bracket = seeded(4);
        let mut rolls = ScriptedRolls::neutral();
        let next = bracket.resolve_match(RoundKey::FIRST, "R1-M2", &mut rolls).unwrap();

        let again = next.resolve_match(RoundKey::FIRST, "R1-M2", &mut rolls);
        assert_eq!(again, Err(BracketError::AlreadyPlayed { id: "R1-M2".into() }));
    }

    #[test]
    fn test_resolve_unknown_match() {
        let bracket = seeded(4);
        let mut rolls = ScriptedRolls::neutral();
        assert_eq!(
            bracket.resolve_match(RoundKey::FIRST, "R1-M9", &mut rolls),
            Err(BracketError::UnknownMatch {
                round: "round_1".into(),
                id: "R1-M9".into()
            })
        );
        assert!(matches!(
            bracket.resolve_match(RoundKey::new(5).unwrap(), "R1-M1", &mut rolls),
            Err(BracketError::UnknownMatch { .. })
        ));
        // the id exists, but not in that round
        assert!(matches!(
            bracket.resolve_match(RoundKey::FIRST.next(), "R1-M1", &mut rolls),
            Err(BracketError::UnknownMatch { .. })
        ));
    }

    #[test]
    fn test_resolve_partially_ready_match() {
        let bracket = seeded(4);
        let mut rolls = ScriptedRolls::neutral();
        let next = bracket.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();

        let final_round = next.final_round();
        let (_, m) = next.find_match("ROUND_2-M1").unwrap();
        assert_eq!(m.state(), MatchState::PartiallyReady);

        assert_eq!(
            next.resolve_match(final_round, "ROUND_2-M1", &mut rolls),
            Err(BracketError::MatchNotReady { id: "ROUND_2-M1".into() })
        );
    }

    #[test]
    fn test_winner_propagation_order() {
        let bracket = seeded(8);
        let mut rolls = ScriptedRolls::neutral();

        let after_m1 = bracket.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();
        let after_m2 = after_m1.resolve_match(RoundKey::FIRST, "R1-M2", &mut rolls).unwrap();

        let semis = after_m2.round(RoundKey::FIRST.next()).unwrap();
        let m = semis[0].as_ref().unwrap();
        assert_eq!(m.id, "ROUND_2-M1");
        assert_eq!(m.state(), MatchState::Ready);

        let (_, m1) = after_m2.find_match("R1-M1").unwrap();
        let (_, m2) = after_m2.find_match("R1-M2").unwrap();
        assert_eq!(m.fighter_a, m1.winner);
        assert_eq!(m.fighter_b, m2.winner);

        // the other semifinal has not been touched
        assert!(semis[1].is_none());
    }

    #[test]
    fn test_out_of_order_resolution_fills_first_free_slot() {
        let bracket = seeded(4);
        let mut rolls = ScriptedRolls::neutral();

        let after_m2 = bracket.resolve_match(RoundKey::FIRST, "R1-M2", &mut rolls).unwrap();
        let after_m1 = after_m2.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();

        let (_, m) = after_m1.find_match("ROUND_2-M1").unwrap();
        let (_, m1) = after_m1.find_match("R1-M1").unwrap();
        let (_, m2) = after_m1.find_match("R1-M2").unwrap();
        assert_eq!(m.fighter_a, m2.winner);
        assert_eq!(m.fighter_b, m1.winner);
    }

    #[test]
    fn test_champion_only_after_final() {
        let mut bracket = seeded(8);
        let mut rolls = ScriptedRolls::neutral();

        while let Some((round, m)) = bracket.next_ready() {
            assert!(bracket.champion().is_none());
            let id = m.id.clone();
            bracket = bracket.resolve_match(round, &id, &mut rolls).unwrap();
        }

        assert_eq!(bracket.played_count(), 7);
        assert_eq!(bracket.status(), BracketStatus::Completed);

        let final_round = bracket.round(bracket.final_round()).unwrap();
        let the_final = final_round[0].as_ref().unwrap();
        assert_eq!(the_final.id, "ROUND_3-M1");
        assert!(the_final.is_played);
        assert_eq!(bracket.champion(), the_final.winner.as_ref());
    }

    #[test]
    fn test_two_fighter_bracket_final_is_round_one() {
        let bracket = seeded(2);
        let mut rolls = ScriptedRolls::neutral();
        let done = bracket.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls).unwrap();

        assert!(done.is_complete());
        assert_eq!(done.slot_count(), 1);
        assert!(done.next_ready().is_none());
    }

    #[test]
    fn test_round_titles() {
        let bracket = seeded(8);
        let titles: Vec<String> = bracket.rounds().map(|(k, _)| bracket.round_title(k)).collect();
        assert_eq!(titles, vec!["Quarter Finals", "Semifinals", "Final"]);

        let bracket = seeded(2);
        assert_eq!(bracket.round_title(RoundKey::FIRST), "Final");
    }

    #[test]
    fn test_snapshot_json_shape() {
        let bracket = seeded(2);
        let json = serde_json::to_value(&bracket).unwrap();
        assert_eq!(json["mode"], 2);
        assert_eq!(json["rounds"][0][0]["id"], "R1-M1");
        assert_eq!(json["rounds"][0][0]["isPlayed"], false);
        assert!(json["champion"].is_null());

        let restored: Bracket = serde_json::from_value(json).unwrap();
        assert_eq!(restored, bracket);
    }

    #[test]
    fn test_full_destination_slot_is_rejected() {
        let mut bracket = seeded(4);
        bracket.rounds[1][0] = Some(Match::new(
            "ROUND_2-M1".into(),
            Some(Fighter::with_stats("X", StatTier::Mid.stats())),
            Some(Fighter::with_stats("Y", StatTier::Mid.stats())),
        ));
        let json = serde_json::to_string(&bracket).unwrap();
        let loaded: Bracket = serde_json::from_str(&json).unwrap();

        let mut rolls = ScriptedRolls::neutral();
        assert_eq!(
            loaded.resolve_match(RoundKey::FIRST, "R1-M1", &mut rolls),
            Err(BracketError::SlotTaken { id: "ROUND_2-M1".into() })
        );
        assert_eq!(loaded.played_count(), 0);
    }

    #[test]
    fn test_snapshot_with_missing_rounds_is_rejected() {
        let bracket = seeded(8);
        let mut json = serde_json::to_value(&bracket).unwrap();
        let first_round = json["rounds"][0].clone();
        json["rounds"] = serde_json::json!([first_round]);

        let err = serde_json::from_value::<Bracket>(json).unwrap_err();
        assert!(err.to_string().contains("needs 3 rounds"));
    }

    #[test]
    fn test_snapshot_with_wrong_round_size_is_rejected() {
        let bracket = seeded(4);
        let mut json = serde_json::to_value(&bracket).unwrap();
        json["rounds"][1] = serde_json::json!([null, null]);

        let err = serde_json::from_value::<Bracket>(json).unwrap_err();
        assert!(err.to_string().contains("round_2 needs 1 slots"));
    }

    #[test]
    fn test_load_rejects_malformed_snapshot() {
        let path = std::env::temp_dir().join(format!("shinobi-malformed-{}.json", std::process::id()));
        let mut json = serde_json::to_value(seeded(8)).unwrap();
        let first_round = json["rounds"][0].clone();
        json["rounds"] = serde_json::json!([first_round]);
        std::fs::write(&path, json.to_string()).unwrap();

        assert!(Bracket::load(&path).is_err());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_custom_modifiers_flow_through() {
        // Fighter A gets an elite bonus large enough to beat B every time
        let mut a = Fighter::with_stats("A", StatTier::Mid.stats());
        a.is_elite_class = true;
        let b = Fighter::with_stats("B", StatTier::Mid.stats());

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let bracket = Bracket::seed(vec![a, b], 2, &mut rng).unwrap();
        let modifiers = PowerModifiers {
            elite_bonus: 10.0,
            ..Default::default()
        };
        let done = bracket
            .resolve_match_with(RoundKey::FIRST, "R1-M1", &modifiers, &mut rng)
            .unwrap();
        assert_eq!(done.champion().unwrap().name, "A");
    }
}

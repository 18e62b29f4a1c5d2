//! Tournament driver - applies resolutions and forwards snapshots to a sink
//!
//! Level 1 - Orchestration (play_out) and Level 2 - Steps (resolve, play_next)

use shinobi_core::{Fighter, PowerModifiers, UnitSource};

use crate::bracket::{Bracket, RoundKey};
use crate::error::TournamentError;
use crate::sink::BracketSink;

/// A match played by the driver
#[derive(Clone, Debug, PartialEq)]
pub struct PlayedMatch {
    pub round: RoundKey,
    pub id: String,
    pub winner: Fighter,
}

/// Owns the current snapshot and the sink that receives every new one
#[derive(Debug)]
pub struct Tournament<S: BracketSink> {
    bracket: Bracket,
    sink: S,
    modifiers: PowerModifiers,
}

impl<S: BracketSink> Tournament<S> {
    /// Start driving `bracket`; the sink receives it immediately
    pub fn new(bracket: Bracket, mut sink: S) -> Result<Self, TournamentError> {
        sink.accept(&bracket).map_err(TournamentError::Sink)?;
        Ok(Self {
            bracket,
            sink,
            modifiers: PowerModifiers::default(),
        })
    }

    /// Use custom fight modifiers for every later resolution
    pub fn with_modifiers(mut self, modifiers: PowerModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn champion(&self) -> Option<&Fighter> {
        self.bracket.champion()
    }

    pub fn into_parts(self) -> (Bracket, S) {
        (self.bracket, self.sink)
    }

    /// Resolve one match.
    ///
    /// On a rejected match nothing changes. On a sink failure the snapshot
    /// has already advanced.
    pub fn resolve<U: UnitSource + ?Sized>(
        &mut self,
        round: RoundKey,
        match_id: &str,
        rng: &mut U,
    ) -> Result<&Bracket, TournamentError> {
        let next = self
            .bracket
            .resolve_match_with(round, match_id, &self.modifiers, rng)?;
        self.bracket = next;
        self.sink.accept(&self.bracket).map_err(TournamentError::Sink)?;
        Ok(&self.bracket)
    }

    /// Play the first ready match, if any
    pub fn play_next<U: UnitSource + ?Sized>(
        &mut self,
        rng: &mut U,
    ) -> Result<Option<PlayedMatch>, TournamentError> {
        let Some((round, m)) = self.bracket.next_ready() else {
            return Ok(None);
        };
        let id = m.id.clone();

        let bracket = self.resolve(round, &id, rng)?;
        let winner = bracket
            .round(round)
            .and_then(|slots| slots.iter().flatten().find(|m| m.id == id))
            .and_then(|m| m.winner.clone());

        Ok(winner.map(|winner| PlayedMatch { round, id, winner }))
    }

    /// Play every remaining match; returns the champion
    pub fn play_out<U: UnitSource + ?Sized>(
        &mut self,
        rng: &mut U,
    ) -> Result<Option<&Fighter>, TournamentError> {
        while let Some(played) = self.play_next(rng)? {
            tracing::info!(
                round = %played.round,
                id = %played.id,
                winner = %played.winner.name,
                "match played"
            );
        }
        Ok(self.bracket.champion())
    }
}

//! Session state: the roster being picked, or the bracket being played
//!
//! A session is in the selection phase while it has no bracket and in the
//! bracket phase afterwards. It is what a front end persists between runs.

use std::path::Path;

use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};
use shinobi_core::Fighter;

use crate::bracket::Bracket;
use crate::config::TournamentMode;
use crate::error::{BracketError, RosterError};
use crate::roster::Roster;
use crate::sink::BracketSink;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    roster: Roster,
    bracket: Option<Bracket>,
}

impl Session {
    pub fn new(mode: TournamentMode) -> Self {
        Self {
            roster: Roster::new(mode),
            bracket: None,
        }
    }

    pub fn mode(&self) -> TournamentMode {
        self.roster.mode()
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    pub fn is_selection_phase(&self) -> bool {
        self.bracket.is_none()
    }

    pub fn select(&mut self, fighter: Fighter) -> Result<(), RosterError> {
        self.roster.add(fighter)
    }

    pub fn deselect(&mut self, name: &str) -> Option<Fighter> {
        self.roster.remove(name)
    }

    /// Change mode; clears the current selection
    pub fn set_mode(&mut self, mode: TournamentMode) {
        self.roster.set_mode(mode);
    }

    /// Seed a bracket from the roster and move to the bracket phase.
    ///
    /// The roster is emptied once the bracket exists.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Bracket, BracketError> {
        let bracket = self.roster.start(rng)?;
        self.roster.clear();
        Ok(self.bracket.insert(bracket))
    }

    /// Back to an empty selection phase, keeping the mode
    pub fn reset(&mut self) {
        self.bracket = None;
        self.roster.clear();
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session: {}", path.display()))?;
        let session = serde_json::from_str(&content)
            .with_context(|| format!("Invalid session file: {}", path.display()))?;
        Ok(session)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write session: {}", path.display()))?;
        Ok(())
    }
}

/// A session keeps the latest snapshot it is given
impl BracketSink for Session {
    fn accept(&mut self, bracket: &Bracket) -> anyhow::Result<()> {
        self.bracket = Some(bracket.clone());
        Ok(())
    }
}

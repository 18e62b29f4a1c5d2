//! Fighter selection before a bracket exists

use rand::Rng;
use serde::{Deserialize, Serialize};
use shinobi_core::Fighter;

use crate::bracket::Bracket;
use crate::config::TournamentMode;
use crate::error::{BracketError, RosterError};

/// Fighters picked for the next tournament
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    mode: TournamentMode,
    fighters: Vec<Fighter>,
}

impl Roster {
    pub fn new(mode: TournamentMode) -> Self {
        Self {
            mode,
            fighters: Vec::new(),
        }
    }

    pub fn mode(&self) -> TournamentMode {
        self.mode
    }

    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    /// Fighters still needed before the bracket can start
    pub fn missing(&self) -> usize {
        self.mode.fighters().saturating_sub(self.fighters.len())
    }

    pub fn is_complete(&self) -> bool {
        self.missing() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fighters.iter().any(|f| f.name == name)
    }

    /// Select a fighter; names must be unique and the roster must have room
    pub fn add(&mut self, fighter: Fighter) -> Result<(), RosterError> {
        if self.contains(&fighter.name) {
            return Err(RosterError::DuplicateFighter(fighter.name));
        }
        if self.is_complete() {
            return Err(RosterError::RosterFull(self.mode.fighters()));
        }
        self.fighters.push(fighter);
        Ok(())
    }

    /// Drop a fighter by name
    pub fn remove(&mut self, name: &str) -> Option<Fighter> {
        let pos = self.fighters.iter().position(|f| f.name == name)?;
        Some(self.fighters.remove(pos))
    }

    /// Switch mode; the current selection is discarded
    pub fn set_mode(&mut self, mode: TournamentMode) {
        self.mode = mode;
        self.fighters.clear();
    }

    pub fn clear(&mut self) {
        self.fighters.clear();
    }

    /// Seed a bracket from the selected fighters
    pub fn start<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Bracket, BracketError> {
        Bracket::seed(self.fighters.clone(), self.mode.fighters(), rng)
    }
}

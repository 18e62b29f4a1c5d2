//! Error types for bracket and roster operations
//!
//! Every error is a rejected precondition. A failed call never changes the
//! snapshot it was given.

/// Errors from seeding or resolving a bracket
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BracketError {
    #[error("invalid roster size: mode {mode} needs exactly {mode} fighters (2, 4 or 8), got {fighters}")]
    InvalidRosterSize { mode: usize, fighters: usize },

    #[error("unknown match {id} in {round}")]
    UnknownMatch { round: String, id: String },

    #[error("match {id} is not ready: both fighter slots must be filled")]
    MatchNotReady { id: String },

    #[error("match {id} has already been played")]
    AlreadyPlayed { id: String },

    #[error("invalid round key {0:?}: expected round_<n>")]
    InvalidRoundKey(String),

    #[error("match {id} already holds two fighters")]
    SlotTaken { id: String },

    #[error("malformed bracket: {0}")]
    MalformedBracket(String),
}

/// Errors from roster selection
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("{0} is already selected")]
    DuplicateFighter(String),

    #[error("roster already holds all {0} fighters")]
    RosterFull(usize),
}

/// Errors from driving a tournament through a sink
#[derive(Debug, thiserror::Error)]
pub enum TournamentError {
    #[error(transparent)]
    Bracket(#[from] BracketError),

    /// The snapshot advanced but the sink could not take it
    #[error("bracket sink failed: {0:#}")]
    Sink(#[source] anyhow::Error),
}

//! Shinobi Tournament - Single-elimination brackets
//!
//! This crate provides tournament infrastructure:
//! - Bracket seeding, match resolution and winner propagation
//! - Roster selection and session state
//! - Sinks that receive every bracket snapshot
//! - A driver that plays a bracket to completion
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: Tournament::play_out (orchestration)
//! - Level 2: Bracket::seed, Bracket::resolve_match (phases)
//! - Level 3: shinobi_core::fight, winner propagation (steps)
//! - Level 4: configuration, errors, sinks

mod bracket;
mod config;
mod error;
mod roster;
mod session;
mod sink;
mod tournament;

pub use bracket::{Bracket, BracketStatus, Match, MatchState, RoundKey};
pub use config::{TournamentConfig, TournamentMode, UnsupportedMode};
pub use error::{BracketError, RosterError, TournamentError};
pub use roster::Roster;
pub use session::Session;
pub use sink::{BracketSink, DiscardSink, JsonFileSink, MemorySink};
pub use tournament::{PlayedMatch, Tournament};

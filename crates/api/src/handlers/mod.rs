//! Request handlers.
//!
//! `espn` forwards documents untouched; the other modules shape cached or
//! freshly fetched league documents via `fantasy_core`.

pub mod espn;
pub mod league;
pub mod matchup;
pub mod team;

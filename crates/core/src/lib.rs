//! Domain logic for the fantasy proxy.
//!
//! Typed views over the ESPN league document plus the pure shaping logic
//! (projection extraction, roster partitioning, start/sit recommendations,
//! team and matchup summaries). Nothing in this crate performs I/O.

pub mod error;
pub mod league;
pub mod lineup;
pub mod matchup;
pub mod overview;
pub mod projection;
pub mod recommendation;
pub mod roster;

//! ESPN fantasy proxy server library.
//!
//! Exposes the building blocks (config, state, cache, error handling,
//! routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod cache;
pub mod config;
pub mod error;
pub mod handlers;
pub mod league_data;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;

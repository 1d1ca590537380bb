//! Upstream access to the ESPN fantasy API.

pub mod api;

pub use api::{parse_views, EspnApi, EspnCookies, LeagueRequest, UpstreamError};

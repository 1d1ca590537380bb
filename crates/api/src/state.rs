use std::sync::Arc;

use fantasy_espn::{EspnApi, UpstreamError};

use crate::cache::TtlCache;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, including cache TTLs.
    pub config: Arc<ServerConfig>,
    /// Authenticated ESPN client.
    pub espn: EspnApi,
    /// League documents keyed by `{kind}:{league_id}:{year}`.
    pub cache: Arc<TtlCache<serde_json::Value>>,
}

impl AppState {
    /// Build state with a fresh, empty cache.
    pub fn new(config: ServerConfig) -> Result<Self, UpstreamError> {
        let espn = EspnApi::new(
            config.espn.base_url.clone(),
            &config.espn.cookies,
            config.espn.timeout,
        )?;
        Ok(Self::with_cache(config, espn, Arc::new(TtlCache::new())))
    }

    /// Build state around an existing client and cache.
    pub fn with_cache(
        config: ServerConfig,
        espn: EspnApi,
        cache: Arc<TtlCache<serde_json::Value>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            espn,
            cache,
        }
    }
}

use std::time::Duration;

use fantasy_espn::api::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use fantasy_espn::EspnCookies;

/// Startup configuration problems. Any of these aborts the process.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct EspnSettings {
    pub base_url: String,
    pub cookies: EspnCookies,
    /// Per-request timeout for ESPN reads.
    pub timeout: Duration,
}

/// Freshness windows of the cached league documents.
#[derive(Debug, Clone)]
pub struct CacheTtls {
    /// Team list served by `/init`.
    pub init: Duration,
    /// Roster snapshot shared by `/team/overview` and `/start-sit`.
    pub roster: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            init: Duration::from_secs(3600),
            roster: Duration::from_secs(900),
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Inbound request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub espn: EspnSettings,
    pub cache: CacheTtls,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                                                  |
    /// |-------------------------|----------------------------------------------------------|
    /// | `HOST`                  | `0.0.0.0`                                                |
    /// | `PORT`                  | `8000`                                                   |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`                                  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                                                     |
    /// | `ESPN_BASE_URL`         | `https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl`|
    /// | `ESPN_S2`               | required                                                 |
    /// | `ESPN_SWID`             | required                                                 |
    /// | `ESPN_TIMEOUT_SECS`     | `20`                                                     |
    /// | `INIT_CACHE_TTL_SECS`   | `3600`                                                   |
    /// | `ROSTER_CACHE_TTL_SECS` | `900`                                                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = parse_or(&lookup, "PORT", 8000)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?;

        let espn_s2 = required(&lookup, "ESPN_S2")?;
        let swid = required(&lookup, "ESPN_SWID")?;
        let espn_timeout_secs: u64 =
            parse_or(&lookup, "ESPN_TIMEOUT_SECS", DEFAULT_TIMEOUT.as_secs())?;

        let defaults = CacheTtls::default();
        let init_ttl: u64 = parse_or(&lookup, "INIT_CACHE_TTL_SECS", defaults.init.as_secs())?;
        let roster_ttl: u64 =
            parse_or(&lookup, "ROSTER_CACHE_TTL_SECS", defaults.roster.as_secs())?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            espn: EspnSettings {
                base_url: lookup("ESPN_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into()),
                cookies: EspnCookies { espn_s2, swid },
                timeout: Duration::from_secs(espn_timeout_secs),
            },
            cache: CacheTtls {
                init: Duration::from_secs(init_ttl),
                roster: Duration::from_secs(roster_ttl),
            },
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

//! REST client for the ESPN fantasy-football read API.
//!
//! Every read targets the league endpoint
//! `{base}/seasons/{year}/segments/0/leagues/{league_id}` and selects the
//! document sections with repeated `view` query parameters. Requests carry
//! the `espn_s2` / `SWID` cookies of the account the proxy runs as.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};

/// Default public read endpoint for fantasy football.
pub const DEFAULT_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Views requested by `/espn/league` when the caller names none.
pub const DEFAULT_LEAGUE_VIEWS: &[&str] = &["mRoster", "mMatchup", "mTeam"];

/// Opaque authentication cookies, obtained out of band.
#[derive(Clone)]
pub struct EspnCookies {
    pub espn_s2: String,
    pub swid: String,
}

impl std::fmt::Debug for EspnCookies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EspnCookies")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

impl EspnCookies {
    fn header_value(&self) -> Result<HeaderValue, UpstreamError> {
        HeaderValue::from_str(&format!("espn_s2={}; SWID={}", self.espn_s2, self.swid))
            .map_err(|_| UpstreamError::InvalidCookies)
    }
}

/// Errors from the upstream read layer.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// ESPN returned a non-2xx status code.
    #[error("ESPN API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, passed through to the caller.
        body: String,
    },

    /// The configured cookies contain bytes not allowed in a header.
    #[error("ESPN cookies are not valid header values")]
    InvalidCookies,
}

impl UpstreamError {
    /// True when the request ran out of time before ESPN answered.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(err) if err.is_timeout())
    }
}

/// One league read: which league, which season, which sections.
#[derive(Debug, Clone)]
pub struct LeagueRequest {
    pub league_id: i64,
    pub year: i32,
    pub views: Vec<String>,
    /// Extra query parameters, e.g. `scoringPeriodId`.
    pub params: Vec<(String, String)>,
}

impl LeagueRequest {
    pub fn new(league_id: i64, year: i32) -> Self {
        Self {
            league_id,
            year,
            views: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn views<I, S>(mut self, views: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.views.extend(views.into_iter().map(Into::into));
        self
    }

    pub fn scoring_period(mut self, week: i64) -> Self {
        self.params
            .push(("scoringPeriodId".to_string(), week.to_string()));
        self
    }

    fn query(&self) -> Vec<(&str, &str)> {
        self.views
            .iter()
            .map(|v| ("view", v.as_str()))
            .chain(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .collect()
    }
}

/// Split a comma-separated `views` query value, dropping empty items.
pub fn parse_views(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// HTTP client for the ESPN league endpoint.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: reqwest::Client,
    base_url: String,
}

impl EspnApi {
    /// Build a client whose every request carries `cookies` and gives up
    /// after `timeout`.
    pub fn new(
        base_url: impl Into<String>,
        cookies: &EspnCookies,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookies.header_value()?);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("fantasy-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn league_url(&self, league_id: i64, year: i32) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, year, league_id
        )
    }

    /// Read a league document.
    ///
    /// No retry: a failed read is returned to the caller as is.
    pub async fn fetch_league(
        &self,
        request: &LeagueRequest,
    ) -> Result<serde_json::Value, UpstreamError> {
        let url = self.league_url(request.league_id, request.year);
        tracing::debug!(
            league_id = request.league_id,
            year = request.year,
            views = ?request.views,
            "Fetching ESPN league document"
        );

        let response = self
            .client
            .get(&url)
            .query(&request.query())
            .send()
            .await
            .inspect_err(|e| {
                tracing::warn!(league_id = request.league_id, error = %e, "ESPN request failed");
            })?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json::<serde_json::Value>().await?)
    }

    // ---- private helpers ----

    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, UpstreamError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "ESPN returned an error status");
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::SocketAddr;

    use assert_matches::assert_matches;
    use axum::extract::{Path, RawQuery};
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::get;
    use axum::{Json, Router};

    use super::*;

    fn cookies() -> EspnCookies {
        EspnCookies {
            espn_s2: "s2-token".into(),
            swid: "{SWID-1}".into(),
        }
    }

    /// Echo server: returns the path params, raw query and cookie header.
    async fn spawn_echo() -> SocketAddr {
        async fn echo(
            Path(params): Path<HashMap<String, String>>,
            RawQuery(query): RawQuery,
            headers: AxumHeaders,
        ) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
            if params.get("league_id").map(String::as_str) == Some("404") {
                return Err((StatusCode::NOT_FOUND, "league not found".to_string()));
            }
            let cookie = headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Ok(Json(serde_json::json!({
                "year": params["year"],
                "league_id": params["league_id"],
                "query": query,
                "cookie": cookie,
            })))
        }

        let app = Router::new().route("/seasons/{year}/segments/0/leagues/{league_id}", get(echo));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[test]
    fn parse_views_drops_empty_items() {
        assert_eq!(
            parse_views("mRoster,,mTeam, "),
            vec!["mRoster".to_string(), "mTeam".to_string()]
        );
        assert!(parse_views("").is_empty());
    }

    #[test]
    fn league_url_trims_trailing_slash() {
        let api = EspnApi::new("http://espn.test/ffl/", &cookies(), DEFAULT_TIMEOUT).unwrap();
        assert_eq!(
            api.league_url(123, 2025),
            "http://espn.test/ffl/seasons/2025/segments/0/leagues/123"
        );
    }

    #[test]
    fn cookies_are_redacted_in_debug() {
        let rendered = format!("{:?}", cookies());
        assert!(!rendered.contains("s2-token"));
    }

    #[test]
    fn invalid_cookie_is_rejected() {
        let bad = EspnCookies {
            espn_s2: "line\nbreak".into(),
            swid: "x".into(),
        };
        let result = EspnApi::new(DEFAULT_BASE_URL, &bad, DEFAULT_TIMEOUT);
        assert_matches!(result, Err(UpstreamError::InvalidCookies));
    }

    #[tokio::test]
    async fn sends_views_params_and_cookies() {
        let addr = spawn_echo().await;
        let api = EspnApi::new(format!("http://{addr}"), &cookies(), DEFAULT_TIMEOUT).unwrap();

        let request = LeagueRequest::new(777, 2025)
            .views(["mMatchup", "mTeam"])
            .scoring_period(4);
        let doc = api.fetch_league(&request).await.unwrap();

        assert_eq!(doc["league_id"], "777");
        assert_eq!(doc["year"], "2025");
        assert_eq!(doc["query"], "view=mMatchup&view=mTeam&scoringPeriodId=4");
        assert_eq!(doc["cookie"], "espn_s2=s2-token; SWID={SWID-1}");
    }

    #[tokio::test]
    async fn non_success_status_carries_body() {
        let addr = spawn_echo().await;
        let api = EspnApi::new(format!("http://{addr}"), &cookies(), DEFAULT_TIMEOUT).unwrap();

        let result = api.fetch_league(&LeagueRequest::new(404, 2025)).await;

        assert_matches!(
            result,
            Err(UpstreamError::Status { status: 404, ref body }) if body == "league not found"
        );
    }

    #[tokio::test]
    async fn connection_failure_is_request_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = EspnApi::new(format!("http://{addr}"), &cookies(), DEFAULT_TIMEOUT).unwrap();
        let result = api.fetch_league(&LeagueRequest::new(1, 2025)).await;

        assert_matches!(result, Err(UpstreamError::Request(_)));
        assert!(!result.unwrap_err().is_timeout());
    }
}

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::{Path, RawQuery, State};
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get as route_get;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use fantasy_api::config::{CacheTtls, EspnSettings, ServerConfig};
use fantasy_api::router::build_app_router;
use fantasy_api::state::AppState;
use fantasy_espn::EspnCookies;

/// League id the fake upstream answers with a 404.
pub const MISSING_LEAGUE: i64 = 404;

/// League id the fake upstream answers with a non-JSON 200.
pub const GARBLED_LEAGUE: i64 = 500;

/// League id the fake upstream answers with JSON of the wrong shape.
pub const MISSHAPEN_LEAGUE: i64 = 422;

pub const LEAGUE: i64 = 1001;
pub const YEAR: i32 = 2025;

// ---------------------------------------------------------------------------
// Fake ESPN upstream
// ---------------------------------------------------------------------------

/// In-process stand-in for the ESPN read API.
#[derive(Clone, Default)]
pub struct FakeEspn {
    hits: Arc<AtomicUsize>,
    queries: Arc<Mutex<Vec<String>>>,
    cookies: Arc<Mutex<Vec<String>>>,
}

impl FakeEspn {
    /// Number of league reads served so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Raw query string of the most recent read.
    pub fn last_query(&self) -> Option<String> {
        self.queries.lock().unwrap().last().cloned()
    }

    /// Cookie header of the most recent read.
    pub fn last_cookie(&self) -> Option<String> {
        self.cookies.lock().unwrap().last().cloned()
    }
}

async fn serve_league(
    State(fake): State<FakeEspn>,
    Path(params): Path<HashMap<String, String>>,
    RawQuery(query): RawQuery,
    headers: axum::http::HeaderMap,
) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);
    fake.queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());
    fake.cookies.lock().unwrap().push(
        headers
            .get("cookie")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string(),
    );

    let league_id: i64 = params["league_id"].parse().unwrap();
    match league_id {
        MISSING_LEAGUE => (StatusCode::NOT_FOUND, "league not found").into_response(),
        GARBLED_LEAGUE => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        MISSHAPEN_LEAGUE => Json(json!({ "teams": "not a list" })).into_response(),
        _ => Json(league_fixture()).into_response(),
    }
}

/// Start the fake upstream on an ephemeral port.
pub async fn spawn_fake_espn() -> (FakeEspn, SocketAddr) {
    let fake = FakeEspn::default();
    let app = Router::new()
        .route(
            "/seasons/{year}/segments/0/leagues/{league_id}",
            route_get(serve_league),
        )
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (fake, addr)
}

/// Start an upstream that answers every league read after `delay`.
pub async fn spawn_slow_espn(delay: Duration) -> SocketAddr {
    let app = Router::new().route(
        "/seasons/{year}/segments/0/leagues/{league_id}",
        route_get(move || async move {
            tokio::time::sleep(delay).await;
            Json(league_fixture())
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn projected(week: i64, total: f64) -> Value {
    json!({ "scoringPeriodId": week, "statSourceId": 1, "appliedTotal": total, "seasonId": 2025 })
}

fn roster_entry(id: i64, slot: i64, name: &str, eligible: &[i64], week3: f64) -> Value {
    json!({
        "playerId": id,
        "lineupSlotId": slot,
        "playerPoolEntry": { "player": {
            "id": id,
            "fullName": name,
            "defaultPositionId": 3,
            "eligibleSlots": eligible,
            "injuryStatus": "ACTIVE",
            "stats": [projected(3, week3), { "scoringPeriodId": 2, "statSourceId": 0, "appliedTotal": 99.0, "seasonId": 2025 }]
        } }
    })
}

/// League document served for every ordinary league id.
///
/// Team 1 for week 3: the WR starter (10.0) can be replaced by bench WR
/// "Burst" (10.6, +0.6) and the RB starter (10.0) by bench RB "Bruiser"
/// (11.2, +1.2). Bench WR "Steady" (10.3) never clears a 0.5 margin and the
/// IR player is never proposed.
pub fn league_fixture() -> Value {
    json!({
        "id": LEAGUE,
        "seasonId": YEAR,
        "scoringPeriodId": 3,
        "teams": [
            {
                "id": 1,
                "name": "Alpha Dogs",
                "abbrev": "ALP",
                "roster": { "entries": [
                    roster_entry(10, 0, "Quarter Back", &[0, 7, 20, 21], 20.0),
                    roster_entry(11, 4, "Wide Starter", &[3, 4, 5, 23, 20, 21], 10.0),
                    roster_entry(12, 2, "Run Starter", &[2, 3, 23, 20, 21], 10.0),
                    roster_entry(13, 20, "Steady", &[3, 4, 5, 23, 20, 21], 10.3),
                    roster_entry(14, 20, "Burst", &[3, 4, 5, 23, 20, 21], 10.6),
                    roster_entry(15, 20, "Bruiser", &[2, 3, 23, 20, 21], 11.2),
                    roster_entry(16, 21, "Hurt Star", &[2, 4, 23, 20, 21], 40.0)
                ] }
            },
            { "id": 2, "location": "Beta", "nickname": "Bears", "abbrev": "BET" }
        ],
        "schedule": [
            { "matchupPeriodId": 3, "home": { "teamId": 2, "totalPoints": 88.5 }, "away": { "teamId": 1, "totalPoints": 92.25 } }
        ]
    })
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` pointing at `espn_addr`.
pub fn test_config(espn_addr: SocketAddr) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        espn: EspnSettings {
            base_url: format!("http://{espn_addr}"),
            cookies: EspnCookies {
                espn_s2: "test-s2".to_string(),
                swid: "{TEST-SWID}".to_string(),
            },
            timeout: Duration::from_secs(5),
        },
        cache: CacheTtls::default(),
    }
}

/// A test app wired to a fresh fake upstream.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub espn: FakeEspn,
}

/// Build the full application router with all middleware layers, backed by
/// a fresh fake upstream and an empty cache.
pub async fn build_test_app() -> TestApp {
    let (espn, addr) = spawn_fake_espn().await;
    let config = test_config(addr);
    let state = AppState::new(config.clone()).unwrap();
    let router = build_app_router(state.clone(), &config);
    TestApp {
        router,
        state,
        espn,
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, "GET", uri).await
}

pub async fn post(app: Router, uri: &str) -> Response {
    send(app, "POST", uri).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

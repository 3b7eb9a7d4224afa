//! Fake stats API serving fixed fixture data.
//!
//! Known tags: player `GGJVJLU2`, club `QCGV8PG`. Player tag `2PPPPPPP`
//! answers 500; any other tag answers 404. Every route requires a non-empty
//! `authorization` header. `/misc` reports today's date so callers can check
//! the server clock against their own.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, Timelike, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const PLAYER_TAG: &str = "GGJVJLU2";
pub const CLUB_TAG: &str = "QCGV8PG";
pub const FAILING_TAG: &str = "2PPPPPPP";

/// Parsed fixture payloads, shared read-only by every handler.
pub struct Fixtures {
    pub player: Value,
    pub club: Value,
    pub clubs: Value,
    pub leaderboards: Value,
    pub events: Value,
    pub battlelog: Value,
    pub constants: Value,
}

impl Fixtures {
    pub fn load() -> Result<Self, serde_json::Error> {
        Ok(Self {
            player: serde_json::from_str(include_str!("../fixtures/player.json"))?,
            club: serde_json::from_str(include_str!("../fixtures/club.json"))?,
            clubs: serde_json::from_str(include_str!("../fixtures/clubs.json"))?,
            leaderboards: serde_json::from_str(include_str!("../fixtures/leaderboards.json"))?,
            events: serde_json::from_str(include_str!("../fixtures/events.json"))?,
            battlelog: serde_json::from_str(include_str!("../fixtures/battlelog.json"))?,
            constants: serde_json::from_str(include_str!("../fixtures/constants.json"))?,
        })
    }
}

pub type Db = Arc<Fixtures>;

#[derive(Deserialize)]
pub struct TagParams {
    pub tag: String,
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub name: String,
}

#[derive(Deserialize)]
pub struct LeaderboardParams {
    pub count: Option<usize>,
    pub region: Option<String>,
    pub brawler: Option<String>,
}

pub fn app() -> Router {
    // The fixtures are compiled in; a parse failure is a broken build.
    let db: Db = Arc::new(Fixtures::load().expect("fixtures are valid JSON"));
    Router::new()
        .route("/player", get(get_player))
        .route("/player/battlelog", get(get_battlelog))
        .route("/club", get(get_club))
        .route("/club/search", get(search_club))
        .route("/leaderboards/{kind}", get(get_leaderboard))
        .route("/events", get(get_events))
        .route("/misc", get(get_misc))
        .route("/constants", get(get_constants))
        .layer(middleware::from_fn(require_token))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_token(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| !v.trim().is_empty());
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "missing authorization token");
    }
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": true, "message": message }))).into_response()
}

fn normalize(tag: &str) -> String {
    tag.trim_start_matches('#').to_ascii_uppercase()
}

async fn get_player(State(db): State<Db>, Query(params): Query<TagParams>) -> Response {
    match normalize(&params.tag).as_str() {
        PLAYER_TAG => Json(db.player.clone()).into_response(),
        FAILING_TAG => error(StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        _ => error(StatusCode::NOT_FOUND, "player not found"),
    }
}

async fn get_battlelog(State(db): State<Db>, Query(params): Query<TagParams>) -> Response {
    match normalize(&params.tag).as_str() {
        PLAYER_TAG => Json(db.battlelog.clone()).into_response(),
        FAILING_TAG => error(StatusCode::INTERNAL_SERVER_ERROR, "internal error"),
        _ => error(StatusCode::NOT_FOUND, "player not found"),
    }
}

async fn get_club(State(db): State<Db>, Query(params): Query<TagParams>) -> Response {
    if normalize(&params.tag) == CLUB_TAG {
        Json(db.club.clone()).into_response()
    } else {
        error(StatusCode::NOT_FOUND, "club not found")
    }
}

async fn search_club(State(db): State<Db>, Query(params): Query<SearchParams>) -> Json<Vec<Value>> {
    let needle = params.name.to_lowercase();
    let hits = db
        .clubs
        .as_array()
        .into_iter()
        .flatten()
        .filter(|club| {
            club["name"]
                .as_str()
                .is_some_and(|name| name.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    Json(hits)
}

async fn get_leaderboard(
    State(db): State<Db>,
    Path(kind): Path<String>,
    Query(params): Query<LeaderboardParams>,
) -> Response {
    let Some(rows) = db.leaderboards.get(&kind).and_then(Value::as_array) else {
        return error(StatusCode::NOT_FOUND, "unknown leaderboard");
    };
    if kind == "brawlers" && params.brawler.is_none() {
        return error(StatusCode::BAD_REQUEST, "brawler is required");
    }
    let count = params.count.unwrap_or(200).min(200);
    let rows: Vec<Value> = rows
        .iter()
        .filter(|row| match (&params.brawler, row["brawlerName"].as_str()) {
            (Some(wanted), Some(name)) => name.eq_ignore_ascii_case(wanted),
            _ => true,
        })
        .take(count)
        .cloned()
        .collect();
    // Regional boards come back wrapped, global ones bare.
    if params.region.is_some() {
        let mut wrapped = serde_json::Map::new();
        wrapped.insert(kind, Value::Array(rows));
        Json(Value::Object(wrapped)).into_response()
    } else {
        Json(rows).into_response()
    }
}

async fn get_events(State(db): State<Db>) -> Json<Value> {
    Json(db.events.clone())
}

async fn get_misc() -> Json<Value> {
    let now = Utc::now();
    Json(json!({
        "serverDateYear": now.year(),
        "serverDateDayOfYear": now.ordinal(),
        "timeUntilSeasonEndInSeconds": 86_400 * 14,
        "timeUntilShopResetInSeconds": 86_400 - now.num_seconds_from_midnight(),
    }))
}

async fn get_constants(State(db): State<Db>) -> Json<Value> {
    Json(db.constants.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_parse() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.player["tag"], "#GGJVJLU2");
        assert_eq!(fixtures.club["tag"], "#QCGV8PG");
        assert!(fixtures.constants.get("maps").is_some());
        assert_eq!(fixtures.battlelog.as_array().unwrap().len(), 2);
    }

    #[test]
    fn normalize_strips_hash_and_uppercases() {
        assert_eq!(normalize("#ggjvjlu2"), PLAYER_TAG);
        assert_eq!(normalize(CLUB_TAG), CLUB_TAG);
    }

    #[test]
    fn tag_params_require_tag() {
        let result: Result<TagParams, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());
    }

    #[test]
    fn leaderboard_params_all_optional() {
        let params: LeaderboardParams = serde_json::from_str(r#"{}"#).unwrap();
        assert!(params.count.is_none());
        assert!(params.region.is_none());
        assert!(params.brawler.is_none());
    }
}

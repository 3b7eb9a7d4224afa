//! Stateless HTTP request builder and response parser for the stats API.
//!
//! # Design
//! `BrawlApi` holds only endpoints and the auth header and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that validates its input and produces an `HttpRequest`, and a
//! `parse_*` method that translates the status and decodes the body. The
//! blocking and async adapters run the round-trip between the two, so both
//! calling conventions share every validation and decoding rule.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::query::{validate_constants_key, LeaderboardQuery};
use crate::tag::Tag;
use crate::types::{
    Battle, BattleLog, Club, ClubSearchResult, Constants, Events, Leaderboard, LeaderboardEntry,
    MiscInfo, Player,
};

/// Stateless core shared by `BlockingClient` and `AsyncClient`.
#[derive(Clone)]
pub struct BrawlApi {
    base_url: String,
    constants_url: String,
    headers: Vec<(String, String)>,
}

impl BrawlApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            constants_url: config.constants_url.trim_end_matches('/').to_string(),
            headers: vec![
                ("authorization".to_string(), config.token.clone()),
                ("accept".to_string(), "application/json".to_string()),
                ("user-agent".to_string(), config.user_agent.clone()),
            ],
        }
    }

    fn get(&self, path: String, query: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            path,
            query,
            headers: self.headers.clone(),
        }
    }

    fn get_tagged(&self, endpoint: &str, tag: &str) -> Result<HttpRequest, ApiError> {
        let tag = Tag::parse(tag)?;
        Ok(self.get(
            format!("{}{endpoint}", self.base_url),
            vec![("tag".to_string(), tag.to_string())],
        ))
    }

    pub fn build_get_player(&self, tag: &str) -> Result<HttpRequest, ApiError> {
        self.get_tagged("/player", tag)
    }

    pub fn build_get_club(&self, tag: &str) -> Result<HttpRequest, ApiError> {
        self.get_tagged("/club", tag)
    }

    pub fn build_get_battle_logs(&self, tag: &str) -> Result<HttpRequest, ApiError> {
        self.get_tagged("/player/battlelog", tag)
    }

    pub fn build_get_leaderboard(&self, query: &LeaderboardQuery) -> Result<HttpRequest, ApiError> {
        let valid = query.validate()?;
        let mut params = vec![("count".to_string(), valid.limit.to_string())];
        if let Some(region) = valid.region {
            params.push(("region".to_string(), region));
        }
        if let Some(brawler) = valid.brawler {
            params.push(("brawler".to_string(), brawler));
        }
        Ok(self.get(format!("{}/leaderboards/{}", self.base_url, valid.kind), params))
    }

    pub fn build_get_events(&self) -> HttpRequest {
        self.get(format!("{}/events", self.base_url), Vec::new())
    }

    pub fn build_get_misc(&self) -> HttpRequest {
        self.get(format!("{}/misc", self.base_url), Vec::new())
    }

    /// The key is checked here, before any request exists.
    pub fn build_get_constants(&self, key: Option<&str>) -> Result<HttpRequest, ApiError> {
        if let Some(key) = key {
            validate_constants_key(key)?;
        }
        Ok(self.get(self.constants_url.clone(), Vec::new()))
    }

    pub fn build_search_club(&self, name: &str) -> Result<HttpRequest, ApiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidArgument("club search name is empty".to_string()));
        }
        Ok(self.get(
            format!("{}/club/search", self.base_url),
            vec![("name".to_string(), name.to_string())],
        ))
    }

    pub fn parse_get_player(&self, response: HttpResponse) -> Result<Player, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_club(&self, response: HttpResponse) -> Result<Club, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Takes the same query the request was built from; its kind selects the
    /// wrapper key of a regional body.
    pub fn parse_get_leaderboard(
        &self,
        query: &LeaderboardQuery,
        response: HttpResponse,
    ) -> Result<Leaderboard, ApiError> {
        let kind = query.validate()?.kind;
        check_status(&response)?;
        let entries: Vec<LeaderboardEntry> = decode_list(&response.body, kind.as_str())?;
        Ok(Leaderboard { kind, entries })
    }

    pub fn parse_get_events(&self, response: HttpResponse) -> Result<Events, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_misc(&self, response: HttpResponse) -> Result<MiscInfo, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// With a key, narrows the payload to that category. A recognized key the
    /// payload lacks is still an `UnknownKey`.
    pub fn parse_get_constants(
        &self,
        key: Option<&str>,
        response: HttpResponse,
    ) -> Result<Constants, ApiError> {
        check_status(&response)?;
        let data: serde_json::Value = decode(&response.body)?;
        if !data.is_object() {
            return Err(ApiError::MalformedResponse(
                "constants payload is not a JSON object".to_string(),
            ));
        }
        match key {
            None => Ok(Constants { key: None, data }),
            Some(key) => match data.get(key) {
                Some(section) if !section.is_null() => Ok(Constants {
                    key: Some(key.to_string()),
                    data: section.clone(),
                }),
                _ => Err(ApiError::UnknownKey(key.to_string())),
            },
        }
    }

    pub fn parse_search_club(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ClubSearchResult>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_battle_logs(&self, response: HttpResponse) -> Result<BattleLog, ApiError> {
        check_status(&response)?;
        let items: Vec<Battle> = decode_list(&response.body, "items")?;
        Ok(BattleLog { items })
    }
}

impl std::fmt::Debug for BrawlApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrawlApi")
            .field("base_url", &self.base_url)
            .field("constants_url", &self.constants_url)
            .finish_non_exhaustive()
    }
}

/// Decode a list sent either bare or wrapped in an object under `key`.
///
/// Other keys next to the list (paging cursors, region) are ignored.
fn decode_list<T: DeserializeOwned>(body: &str, key: &str) -> Result<Vec<T>, ApiError> {
    let items = match decode::<serde_json::Value>(body)? {
        serde_json::Value::Object(mut map) => map
            .remove(key)
            .ok_or_else(|| ApiError::MalformedResponse(format!("missing {key:?} list")))?,
        other => other,
    };
    serde_json::from_value(items).map_err(|e| {
        tracing::trace!(error = %e, key, "list entries failed to decode");
        ApiError::MalformedResponse(e.to_string())
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::trace!(error = %e, "response body failed to decode");
        ApiError::MalformedResponse(e.to_string())
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let url = response.url.clone();
    Err(match response.status {
        400 | 404 => ApiError::NotFound { url },
        401 | 403 => ApiError::Unauthorized { url },
        429 => ApiError::RateLimited { url },
        status @ 500..=599 => ApiError::Server { status, url },
        status => ApiError::Unexpected {
            status,
            body: response.body.clone(),
        },
    })
}

//! Blocking transport over `ureq`.

use std::time::Instant;

use brawl_core::{
    ApiError, BattleLog, BrawlApi, Club, ClubSearchResult, ClientConfig, Constants, Events,
    HttpRequest, HttpResponse, Leaderboard, LeaderboardQuery, MiscInfo, Player,
};

use crate::log_response;

/// Stats API client that blocks the calling thread for each request.
///
/// Owns one `ureq::Agent` (and its connection pool) for its whole life.
#[derive(Debug, Clone)]
pub struct BlockingClient {
    api: BrawlApi,
    agent: ureq::Agent,
}

impl BlockingClient {
    /// Building a ureq agent cannot fail; the `Result` matches
    /// `AsyncClient::new` so both modes construct the same way.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        // Status codes are translated by the core, not by ureq.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(config.timeout))
            .build()
            .new_agent();
        Ok(Self {
            api: BrawlApi::new(&config),
            agent,
        })
    }

    /// Release the connection pool.
    pub fn close(self) {
        tracing::debug!("closing blocking client");
    }

    /// Execute an `HttpRequest` and return an `HttpResponse`.
    ///
    /// 4xx/5xx responses come back as data; only transport failures are
    /// errors here.
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = req.url();
        tracing::debug!(%url, "sending request");
        let started = Instant::now();

        let mut builder = self.agent.get(&url);
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let mut response = builder.call().map_err(|e| transport_error(e, &url))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport_error(e, &url))?;
        log_response(&url, status, started.elapsed());

        Ok(HttpResponse {
            url,
            status,
            headers,
            body,
        })
    }

    pub fn get_player(&self, tag: &str) -> Result<Player, ApiError> {
        let req = self.api.build_get_player(tag)?;
        self.api.parse_get_player(self.execute(&req)?)
    }

    pub fn get_club(&self, tag: &str) -> Result<Club, ApiError> {
        let req = self.api.build_get_club(tag)?;
        self.api.parse_get_club(self.execute(&req)?)
    }

    pub fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<Leaderboard, ApiError> {
        let req = self.api.build_get_leaderboard(query)?;
        self.api.parse_get_leaderboard(query, self.execute(&req)?)
    }

    pub fn get_events(&self) -> Result<Events, ApiError> {
        let req = self.api.build_get_events();
        self.api.parse_get_events(self.execute(&req)?)
    }

    pub fn get_constants(&self, key: Option<&str>) -> Result<Constants, ApiError> {
        let req = self.api.build_get_constants(key)?;
        self.api.parse_get_constants(key, self.execute(&req)?)
    }

    pub fn get_misc(&self) -> Result<MiscInfo, ApiError> {
        let req = self.api.build_get_misc();
        self.api.parse_get_misc(self.execute(&req)?)
    }

    pub fn search_club(&self, name: &str) -> Result<Vec<ClubSearchResult>, ApiError> {
        let req = self.api.build_search_club(name)?;
        self.api.parse_search_club(self.execute(&req)?)
    }

    pub fn get_battle_logs(&self, tag: &str) -> Result<BattleLog, ApiError> {
        let req = self.api.build_get_battle_logs(tag)?;
        self.api.parse_get_battle_logs(self.execute(&req)?)
    }
}

fn transport_error(err: ureq::Error, url: &str) -> ApiError {
    tracing::warn!(%url, error = %err, "transport failure");
    match err {
        ureq::Error::Timeout(_) => ApiError::Timeout {
            url: url.to_string(),
        },
        other => ApiError::Transport(other.to_string()),
    }
}

//! Async transport over `reqwest`.

use std::time::Instant;

use brawl_core::{
    ApiError, BattleLog, BrawlApi, Club, ClubSearchResult, ClientConfig, Constants, Events,
    HttpRequest, HttpResponse, Leaderboard, LeaderboardQuery, MiscInfo, Player,
};

use crate::log_response;

/// Stats API client whose operations are `async` and await one HTTP
/// round-trip each.
///
/// Owns one `reqwest::Client` (and its connection pool). Requests are never
/// batched; cancel one by dropping its future.
#[derive(Debug, Clone)]
pub struct AsyncClient {
    api: BrawlApi,
    http: reqwest::Client,
}

impl AsyncClient {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self {
            api: BrawlApi::new(&config),
            http,
        })
    }

    /// Release the connection pool. Requests still in flight on clones of
    /// this client keep their own handle.
    pub fn close(self) {
        tracing::debug!("closing async client");
    }

    async fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = req.url();
        tracing::debug!(%url, "sending request");
        let started = Instant::now();

        let mut builder = self.http.get(&url);
        for (key, value) in &req.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        let response = builder.send().await.map_err(|e| transport_error(e, &url))?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
            .collect();
        let body = response.text().await.map_err(|e| transport_error(e, &url))?;
        log_response(&url, status, started.elapsed());

        Ok(HttpResponse {
            url,
            status,
            headers,
            body,
        })
    }

    pub async fn get_player(&self, tag: &str) -> Result<Player, ApiError> {
        let req = self.api.build_get_player(tag)?;
        self.api.parse_get_player(self.execute(&req).await?)
    }

    pub async fn get_club(&self, tag: &str) -> Result<Club, ApiError> {
        let req = self.api.build_get_club(tag)?;
        self.api.parse_get_club(self.execute(&req).await?)
    }

    pub async fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<Leaderboard, ApiError> {
        let req = self.api.build_get_leaderboard(query)?;
        self.api.parse_get_leaderboard(query, self.execute(&req).await?)
    }

    pub async fn get_events(&self) -> Result<Events, ApiError> {
        let req = self.api.build_get_events();
        self.api.parse_get_events(self.execute(&req).await?)
    }

    pub async fn get_constants(&self, key: Option<&str>) -> Result<Constants, ApiError> {
        let req = self.api.build_get_constants(key)?;
        self.api.parse_get_constants(key, self.execute(&req).await?)
    }

    pub async fn get_misc(&self) -> Result<MiscInfo, ApiError> {
        let req = self.api.build_get_misc();
        self.api.parse_get_misc(self.execute(&req).await?)
    }

    pub async fn search_club(&self, name: &str) -> Result<Vec<ClubSearchResult>, ApiError> {
        let req = self.api.build_search_club(name)?;
        self.api.parse_search_club(self.execute(&req).await?)
    }

    pub async fn get_battle_logs(&self, tag: &str) -> Result<BattleLog, ApiError> {
        let req = self.api.build_get_battle_logs(tag)?;
        self.api.parse_get_battle_logs(self.execute(&req).await?)
    }
}

fn transport_error(err: reqwest::Error, url: &str) -> ApiError {
    tracing::warn!(%url, error = %err, "transport failure");
    if err.is_timeout() {
        ApiError::Timeout {
            url: url.to_string(),
        }
    } else {
        ApiError::Transport(err.to_string())
    }
}

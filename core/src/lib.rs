//! I/O-free API client core for the Brawl Stars statistics API.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `BrawlApi` is stateless: it holds only endpoints and request headers.
//! - Each operation is split into `build_*` (validates input, produces the
//!   request) and `parse_*` (translates the status, decodes the body), so the
//!   I/O boundary is explicit and the blocking and async adapters in
//!   `brawl-client` share all of the logic.
//! - Malformed input fails in `build_*`, before any request exists.
//! - Response bodies decode into typed structs; a body that does not match
//!   fails with `ApiError::MalformedResponse`.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod tag;
pub mod types;

pub use client::BrawlApi;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use query::{LeaderboardKind, LeaderboardQuery};
pub use tag::Tag;
pub use types::{
    Battle, BattleBrawler, BattleDetails, BattleEvent, BattleLog, BattlePlayer, Club, ClubMember,
    ClubSearchResult, Constants, Event, Events, Leaderboard, LeaderboardEntry, MiscInfo, Player,
    PlayerBrawler, PlayerClub,
};

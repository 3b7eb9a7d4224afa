//! Blocking and async transports for the stats API.
//!
//! # Overview
//! `brawl-core` builds requests and parses responses without doing I/O. This
//! crate adds the two calling conventions on top of it:
//!
//! - [`BlockingClient`] runs each round-trip on the calling thread via `ureq`.
//! - [`AsyncClient`] awaits each round-trip via `reqwest`.
//!
//! Both expose the same eight operations and hand every request and response
//! to the same `BrawlApi`, so validation, status translation and decoding are
//! identical. Pick the mode by picking the type.
//!
//! ```no_run
//! use brawl_client::{BlockingClient, ClientConfig, LeaderboardQuery};
//!
//! let client = BlockingClient::new(ClientConfig::new("token"))?;
//! let player = client.get_player("#GGJVJLU2")?;
//! let board = client.get_leaderboard(&LeaderboardQuery::new("players").region("us"))?;
//! println!("{} has {} trophies; top is {}", player.name, player.trophies, board.entries[0].name);
//! client.close();
//! # Ok::<(), brawl_client::ApiError>(())
//! ```

pub mod asynchronous;
pub mod blocking;

use std::time::Duration;

pub use asynchronous::AsyncClient;
pub use blocking::BlockingClient;
pub use brawl_core::*;

fn log_response(url: &str, status: u16, elapsed: Duration) {
    let elapsed_ms = elapsed.as_millis() as u64;
    if (200..300).contains(&status) {
        tracing::debug!(%url, status, elapsed_ms, "response received");
    } else {
        tracing::warn!(%url, status, elapsed_ms, "request failed");
    }
}

//! Typed snapshots of the stats API's JSON payloads.
//!
//! # Design
//! Every struct is decoded with `serde` straight from the response body, so
//! a payload that lacks a required field fails as `MalformedResponse` instead
//! of surfacing later as a missing attribute. Fields the API omits for some
//! players or clubs are `Option` or `#[serde(default)]`. Unknown fields are
//! ignored so new API fields don't break decoding.
//!
//! Tags are stored without the leading `#` the API puts in bodies, matching
//! the normalized form of `Tag`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

use crate::query::LeaderboardKind;
use crate::tag::strip_hash;

fn de_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Ok(strip_hash(&raw))
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub name_color_code: Option<String>,
    #[serde(default)]
    pub avatar_id: Option<u64>,
    pub trophies: u32,
    pub highest_trophies: u32,
    pub exp_level: u32,
    #[serde(default)]
    pub exp_points: u32,
    #[serde(default)]
    pub victories: u32,
    #[serde(default)]
    pub solo_showdown_victories: u32,
    #[serde(default)]
    pub duo_showdown_victories: u32,
    #[serde(default)]
    pub club: Option<PlayerClub>,
    #[serde(default)]
    pub brawlers_unlocked: u32,
    #[serde(default)]
    pub brawlers: Vec<PlayerBrawler>,
}

impl Player {
    pub fn is_in_club(&self) -> bool {
        self.club.is_some()
    }

    /// Look up an owned brawler by name, ignoring case.
    pub fn brawler(&self, name: &str) -> Option<&PlayerBrawler> {
        self.brawlers.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }
}

/// The club a player belongs to, as embedded in the player payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerClub {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    #[serde(default)]
    pub trophies: Option<u32>,
    #[serde(default)]
    pub members_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerBrawler {
    pub name: String,
    #[serde(default)]
    pub id: Option<u64>,
    pub power: u8,
    pub rank: u8,
    pub trophies: u32,
    pub highest_trophies: u32,
    #[serde(default)]
    pub has_skin: bool,
    #[serde(default)]
    pub skin: Option<String>,
    #[serde(default)]
    pub star_power: Option<String>,
}

// ---------------------------------------------------------------------------
// Club
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    pub trophies: u32,
    pub required_trophies: u32,
    pub members_count: u32,
    #[serde(default)]
    pub online_members: u32,
    #[serde(default, alias = "type")]
    pub status: Option<String>,
    #[serde(default)]
    pub members: Vec<ClubMember>,
}

impl Club {
    pub fn member(&self, tag: &str) -> Option<&ClubMember> {
        let tag = strip_hash(tag).to_ascii_uppercase();
        self.members.iter().find(|m| m.tag == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMember {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    pub role: String,
    pub exp_level: u32,
    pub trophies: u32,
    #[serde(default)]
    pub online_less_than_one_hour_ago: bool,
    #[serde(default)]
    pub avatar_id: Option<u64>,
}

/// One hit from a club name search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubSearchResult {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub badge_id: Option<u64>,
    pub trophies: u32,
    #[serde(default)]
    pub required_trophies: u32,
    pub members_count: u32,
    #[serde(default, alias = "type")]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Leaderboard
// ---------------------------------------------------------------------------

/// A ranked list, in the order the API returned it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub kind: LeaderboardKind,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeaderboardEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a LeaderboardEntry;
    type IntoIter = std::slice::Iter<'a, LeaderboardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A player or club ranking row. Club rows carry `members_count`; brawler
/// rows carry `brawler_name`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    pub position: u32,
    pub trophies: u32,
    #[serde(default)]
    pub exp_level: Option<u32>,
    #[serde(default)]
    pub club_name: Option<String>,
    #[serde(default)]
    pub members_count: Option<u32>,
    #[serde(default)]
    pub badge_id: Option<u64>,
    #[serde(default)]
    pub brawler_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Events {
    pub current: Vec<Event>,
    #[serde(default)]
    pub upcoming: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub slot: u32,
    #[serde(default)]
    pub slot_name: Option<String>,
    pub game_mode: String,
    pub map_name: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub has_modifier: bool,
    #[serde(default)]
    pub modifier_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Static game data, either the whole payload or one category of it.
#[derive(Debug, Clone, PartialEq)]
pub struct Constants {
    pub key: Option<String>,
    pub data: serde_json::Value,
}

impl Constants {
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.data.get(name)
    }

    /// Category names when this holds the whole payload.
    pub fn keys(&self) -> Vec<&str> {
        match &self.data {
            serde_json::Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Battle log
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct BattleLog {
    pub items: Vec<Battle>,
}

impl BattleLog {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(rename = "battleTime")]
    pub raw_battle_time: String,
    pub event: BattleEvent,
    pub battle: BattleDetails,
}

impl Battle {
    /// Parse the compact `20191107T150306.000Z` timestamp the API uses.
    pub fn battle_time(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.raw_battle_time, "%Y%m%dT%H%M%S%.fZ")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleEvent {
    #[serde(default)]
    pub id: Option<u64>,
    pub mode: String,
    #[serde(default)]
    pub map: Option<String>,
}

/// Outcome of one match. Team modes fill `teams`, showdown fills `players`
/// and `rank`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleDetails {
    pub mode: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub trophy_change: Option<i32>,
    #[serde(default)]
    pub star_player: Option<BattlePlayer>,
    #[serde(default)]
    pub teams: Vec<Vec<BattlePlayer>>,
    #[serde(default)]
    pub players: Vec<BattlePlayer>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattlePlayer {
    #[serde(deserialize_with = "de_tag")]
    pub tag: String,
    pub name: String,
    #[serde(default)]
    pub brawler: Option<BattleBrawler>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BattleBrawler {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub power: u8,
    pub trophies: u32,
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

/// Server clock and season timers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiscInfo {
    pub server_date_year: i32,
    pub server_date_day_of_year: u32,
    #[serde(default)]
    pub time_until_season_end_in_seconds: u64,
    #[serde(default)]
    pub time_until_shop_reset_in_seconds: u64,
}

impl MiscInfo {
    pub fn server_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_yo_opt(self.server_date_year, self.server_date_day_of_year)
    }
}

//! Leaderboard and constants parameters, validated before a request is built.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

pub const MIN_LEADERBOARD_LIMIT: i64 = 1;
pub const MAX_LEADERBOARD_LIMIT: i64 = 200;

/// Brawler names accepted by brawler leaderboards, lower-cased.
pub const BRAWLERS: &[&str] = &[
    "8-bit", "barley", "bea", "bibi", "bo", "brock", "bull", "carl", "colt", "crow", "darryl",
    "dynamike", "el primo", "emz", "frank", "gale", "gene", "jacky", "jessie", "leon", "max",
    "mortis", "mr. p", "nita", "pam", "penny", "piper", "poco", "rico", "rosa", "sandy",
    "shelly", "spike", "sprout", "tara", "tick",
];

/// Top-level categories of the constants payload.
pub const CONSTANT_KEYS: &[&str] = &[
    "alliance_badges", "alliance_roles", "area_effects", "bosses", "cards", "characters",
    "globals", "items", "locations", "maps", "name_colors", "player_thumbnails", "projectiles",
    "regions", "resources", "skills", "skin_confs", "skins", "themes", "tiles",
];

/// Which ranking a leaderboard request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderboardKind {
    Players,
    Clubs,
    Brawlers,
}

impl LeaderboardKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaderboardKind::Players => "players",
            LeaderboardKind::Clubs => "clubs",
            LeaderboardKind::Brawlers => "brawlers",
        }
    }
}

impl FromStr for LeaderboardKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "players" => Ok(LeaderboardKind::Players),
            "clubs" => Ok(LeaderboardKind::Clubs),
            "brawlers" => Ok(LeaderboardKind::Brawlers),
            _ => Err(ApiError::InvalidArgument(format!(
                "leaderboard kind must be players, clubs or brawlers, got {s:?}"
            ))),
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw leaderboard parameters as a caller supplies them.
///
/// Nothing is checked until `validate`, so an out-of-range limit or an
/// unknown kind is representable and rejected with `InvalidArgument`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub kind: String,
    pub limit: i64,
    pub region: Option<String>,
    pub brawler: Option<String>,
}

impl LeaderboardQuery {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            limit: MAX_LEADERBOARD_LIMIT,
            region: None,
            brawler: None,
        }
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn brawler(mut self, brawler: impl Into<String>) -> Self {
        self.brawler = Some(brawler.into());
        self
    }

    /// Check every parameter and normalize it for the wire.
    pub fn validate(&self) -> Result<ValidLeaderboardQuery, ApiError> {
        let kind: LeaderboardKind = self.kind.parse()?;

        if !(MIN_LEADERBOARD_LIMIT..=MAX_LEADERBOARD_LIMIT).contains(&self.limit) {
            return Err(ApiError::InvalidArgument(format!(
                "limit must be between {MIN_LEADERBOARD_LIMIT} and {MAX_LEADERBOARD_LIMIT}, got {}",
                self.limit
            )));
        }

        let region = match self.region.as_deref() {
            None => None,
            Some(region) => {
                let region = region.trim().to_ascii_lowercase();
                if region.is_empty() || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                    return Err(ApiError::InvalidArgument(format!("invalid region {region:?}")));
                }
                Some(region)
            }
        };

        // The brawler only means something for brawler rankings.
        let brawler = match kind {
            LeaderboardKind::Brawlers => Some(validate_brawler(self.brawler.as_deref())?),
            _ => None,
        };

        Ok(ValidLeaderboardQuery {
            kind,
            limit: self.limit as u8,
            region,
            brawler,
        })
    }
}

/// Leaderboard parameters that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLeaderboardQuery {
    pub kind: LeaderboardKind,
    pub limit: u8,
    pub region: Option<String>,
    pub brawler: Option<String>,
}

fn validate_brawler(brawler: Option<&str>) -> Result<String, ApiError> {
    let Some(brawler) = brawler else {
        return Err(ApiError::InvalidArgument(
            "brawler leaderboards require a brawler name".to_string(),
        ));
    };
    let name = brawler.trim().to_lowercase();
    if BRAWLERS.contains(&name.as_str()) {
        Ok(name)
    } else {
        Err(ApiError::InvalidArgument(format!("unknown brawler {brawler:?}")))
    }
}

/// Check that `key` names a constants category.
pub fn validate_constants_key(key: &str) -> Result<&str, ApiError> {
    if CONSTANT_KEYS.contains(&key) {
        Ok(key)
    } else {
        Err(ApiError::UnknownKey(key.to_string()))
    }
}

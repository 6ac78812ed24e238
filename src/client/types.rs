//! Wire types for the chess data service
//!
//! The service accepts a POST with a JSON request document and answers with
//! an average time plus the opponents seen in the fetched games. Opponents
//! travel as two-element `[name, rating]` arrays, and older service versions
//! emit the time as a stringified float, so both quirks are handled here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ConfigError;

/// Color filter sent with every request. The walk cares about opponents,
/// not sides, so it always asks for games from both colors.
pub const COLOR_BOTH: &str = "both";

/// Game modes the walker can traverse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Blitz,
    Rapid,
    Bullet,
}

impl GameMode {
    /// All supported modes, in default run order
    pub const ALL: [GameMode; 3] = [GameMode::Blitz, GameMode::Rapid, GameMode::Bullet];

    /// Lowercase name as used on the wire and on the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Blitz => "blitz",
            GameMode::Rapid => "rapid",
            GameMode::Bullet => "bullet",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blitz" => Ok(GameMode::Blitz),
            "rapid" => Ok(GameMode::Rapid),
            "bullet" => Ok(GameMode::Bullet),
            _ => Err(ConfigError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

/// A player name paired with the rating the service reported for them.
///
/// Serialized as a two-element `[name, rating]` array, matching the
/// `players_considered` entries in service responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, i32)", into = "(String, i32)")]
pub struct UserRating {
    /// Account name, unique per player
    pub name: String,
    /// Rating at the time the service saw this player
    pub rating: i32,
}

impl UserRating {
    pub fn new(name: impl Into<String>, rating: i32) -> Self {
        Self {
            name: name.into(),
            rating,
        }
    }
}

impl From<(String, i32)> for UserRating {
    fn from((name, rating): (String, i32)) -> Self {
        Self { name, rating }
    }
}

impl From<UserRating> for (String, i32) {
    fn from(user: UserRating) -> Self {
        (user.name, user.rating)
    }
}

impl fmt::Display for UserRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.rating)
    }
}

/// Request document posted to the service
#[derive(Debug, Clone, Serialize)]
pub struct ChessDataRequest {
    pub username: String,
    pub games_count: u32,
    pub game_mode: GameMode,
    pub user_color: String,
}

impl ChessDataRequest {
    /// Request for one user's recent games in one mode, both colors
    pub fn new(username: impl Into<String>, games_count: u32, game_mode: GameMode) -> Self {
        Self {
            username: username.into(),
            games_count,
            game_mode,
            user_color: COLOR_BOTH.to_string(),
        }
    }
}

/// Response document returned by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChessDataResponse {
    /// Average time the service computed over the fetched games
    #[serde(rename = "time", deserialize_with = "number_or_string")]
    pub average_time: f64,

    /// Opponents seen in the fetched games. The service deduplicates them
    /// into a set before serializing, so order is arbitrary.
    #[serde(rename = "players_considered")]
    pub opponents: Vec<UserRating>,
}

/// Accepts a JSON number or a stringified float.
fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::consts::{GameMode, Region};
use crate::error::{Error, Result};

/// Seasons with recorded elo history.
pub const ELO_SEASONS: std::ops::RangeInclusive<u8> = 4..=9;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Status {
    pub released_at: String,
    pub version: String,
}

/// A player as seen in a response.
///
/// Players embedded in a match are often only a reference (bots, or players
/// the API did not sideload); those come back as `Stub`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum Player {
    Stub { id: String },
    Full(Box<PlayerProfile>),
}

impl Player {
    pub fn id(&self) -> &str {
        match self {
            Player::Stub { id } => id,
            Player::Full(profile) => &profile.id,
        }
    }

    pub fn profile(&self) -> Option<&PlayerProfile> {
        match self {
            Player::Stub { .. } => None,
            Player::Full(profile) => Some(profile),
        }
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, Player::Stub { .. })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub region: Region,
    pub elo_history: BTreeMap<u8, f64>,
    pub karma: Karma,
    pub account_level: u32,
    pub lifetime_gold: f64,
    pub games_played: GamesPlayed,
    pub skill_tier: i32,
    pub win_streak: i32,
    pub wins: u32,
    pub xp: u32,
    /// Only sent by the `/players` endpoints.
    pub guild_tag: Option<String>,
    pub current_elo: Option<CurrentElo>,
}

impl PlayerProfile {
    pub fn elo_for_season(&self, season: u8) -> Result<f64> {
        self.elo_history.get(&season).copied().ok_or_else(|| {
            Error::filter(format!(
                "Elo data is available only for seasons {} through {}.",
                ELO_SEASONS.start(),
                ELO_SEASONS.end()
            ))
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Karma {
    Bad,
    Good,
    Great,
}

impl Karma {
    pub fn level(self) -> u8 {
        match self {
            Karma::Bad => 0,
            Karma::Good => 1,
            Karma::Great => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Karma::Bad => "Bad Karma",
            Karma::Good => "Good Karma",
            Karma::Great => "Great Karma",
        }
    }
}

/// Levels other than 1 and 2 count as bad karma.
impl From<i64> for Karma {
    fn from(level: i64) -> Self {
        match level {
            1 => Karma::Good,
            2 => Karma::Great,
            _ => Karma::Bad,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GamesPlayed {
    pub battle_royale: u32,
    pub blitz: u32,
    pub casual: u32,
    pub ranked: u32,
    /// Missing from some legacy stat layouts.
    pub onslaught: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CurrentElo {
    pub blitz: f64,
    pub ranked: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Participant {
    pub id: String,
    pub actor: String,
    pub region: Region,
    pub assists: u32,
    pub crystal_mines_captured: u32,
    pub deaths: u32,
    pub farm: f64,
    pub first_time_afk: bool,
    pub went_afk: bool,
    pub gold: f64,
    pub gold_mines_captured: u32,
    /// Display name to quantity.
    pub items_bought: BTreeMap<String, u32>,
    pub items_sold: BTreeMap<String, u32>,
    pub items_used: BTreeMap<String, u32>,
    pub final_build: Vec<String>,
    pub jungle_kills: u32,
    pub kills: u32,
    pub krakens_captured: u32,
    pub minion_kills: u32,
    pub skin: String,
    pub turrets_captured: u32,
    pub winner: bool,
    pub player: Player,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Roster {
    pub id: String,
    pub region: Region,
    pub aces: u32,
    pub gold: u32,
    pub hero_kills: u32,
    pub krakens_captured: u32,
    /// `side/color`, e.g. `left/blue`.
    pub side: String,
    pub turret_kills: u32,
    pub turrets_remaining: u32,
    pub won: bool,
    pub participants: Vec<Participant>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Seconds.
    pub duration: u32,
    pub game_mode: GameMode,
    pub patch: String,
    pub region: Region,
    /// `victory` or `surrender`.
    pub end_reason: String,
    pub rosters: Vec<Roster>,
    pub spectators: Vec<Participant>,
    pub telemetry_url: String,
}

impl Match {
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.rosters.iter().flat_map(|r| r.participants.iter())
    }

    pub fn winner(&self) -> Option<&Roster> {
        self.rosters.iter().find(|r| r.won)
    }
}

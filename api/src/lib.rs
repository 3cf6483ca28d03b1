pub mod client;
pub mod endpoints;
pub mod espn;
pub mod leagues;
pub mod playoffs;

pub use client::{ApiError, ApiResult, EspnApi};
pub use endpoints::{Endpoints, ScoreboardQuery};
pub use leagues::Team;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Leagues
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Nfl,
    Nhl,
    Nba,
}

impl League {
    pub const ALL: [League; 3] = [League::Nfl, League::Nhl, League::Nba];

    pub fn as_str(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nhl => "nhl",
            League::Nba => "nba",
        }
    }

    /// `(sport, league)` path segments on ESPN's site API.
    pub fn path(&self) -> (&'static str, &'static str) {
        match self {
            League::Nfl => ("football", "nfl"),
            League::Nhl => ("hockey", "nhl"),
            League::Nba => ("basketball", "nba"),
        }
    }

    /// Only football records tied games.
    pub fn tracks_ties(&self) -> bool {
        matches!(self, League::Nfl)
    }

    /// Playoff berths per conference. Not consulted when classifying seeds:
    /// anything short of a clinch marker is reported as in the hunt.
    pub fn playoff_spots(&self) -> u32 {
        match self {
            League::Nfl => 7,
            League::Nhl | League::Nba => 8,
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for League {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        League::ALL
            .into_iter()
            .find(|league| league.as_str() == s)
            .ok_or_else(|| ApiError::InvalidLeague(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Output types: stable JSON shapes handed back to tool callers
// ---------------------------------------------------------------------------

/// Three-state game status derived from ESPN's `status.type.state`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Scheduled,
    InProgress,
    Final,
}

impl GameStatus {
    /// `"pre"` → scheduled, `"in"` → in progress, anything else → final.
    pub fn from_state(state: &str) -> Self {
        match state {
            "pre" => GameStatus::Scheduled,
            "in" => GameStatus::InProgress,
            _ => GameStatus::Final,
        }
    }
}

/// Schedule entries report a finished game as "completed" rather than "final".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Completed,
    #[default]
    Scheduled,
    InProgress,
}

impl From<GameStatus> for ScheduleStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Scheduled => ScheduleStatus::Scheduled,
            GameStatus::InProgress => ScheduleStatus::InProgress,
            GameStatus::Final => ScheduleStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsTeam {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub wins: u32,
    pub losses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
    pub pct: f64,
    pub games_back: f64,
    pub streak: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoff_seed: Option<u32>,
    /// Single-letter clinch code ("x", "y", "z", "e"...) when ESPN reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clinched: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StandingsGroup {
    pub name: String, // "AFC East", "Eastern Conference", ...
    pub teams: Vec<StandingsTeam>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsResponse {
    pub league: League,
    pub season: i32,
    pub groups: Vec<StandingsGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreboardTeam {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
    pub record: String, // "10-3"
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreboardGame {
    pub id: String,
    pub status: GameStatus,
    pub start_time: String,
    pub home_team: ScoreboardTeam,
    pub away_team: ScoreboardTeam,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardResponse {
    pub league: League,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    pub date: String,
    pub games: Vec<ScoreboardGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ties: Option<u32>,
    pub pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    /// Rank within the division, 0 when ESPN gives no standing summary.
    pub division: u32,
    /// Never populated: ESPN's team endpoint does not carry conference rank.
    pub conference: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoff_seed: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub location: String,
    pub nickname: String,
    /// Always empty, see [`TeamStanding::conference`].
    pub conference: String,
    pub division: String,
    pub record: TeamRecord,
    pub standing: TeamStanding,
    pub streak: String,
    pub logo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleOpponent {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScheduleResult {
    pub win: bool,
    pub score: String, // "27-20", team score first
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGame {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week: Option<u32>,
    pub date: String,
    pub opponent: ScheduleOpponent,
    pub home_away: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ScheduleResult>,
    pub status: ScheduleStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleResponse {
    pub team: String,
    pub league: League,
    pub games: Vec<ScheduleGame>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameTeamStats {
    pub name: String,
    pub abbreviation: String,
    pub score: u32,
    pub record: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub id: String,
    pub league: League,
    pub status: GameStatus,
    pub start_time: String,
    pub venue: String,
    pub home_team: GameTeamStats,
    pub away_team: GameTeamStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clock: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcast: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayoffStatus {
    DivisionLeader,
    WildCard,
    InHunt,
    /// Declared for consumers; classification never assigns it.
    Eliminated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonStatus {
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayoffTeam {
    pub name: String,
    pub abbreviation: String,
    pub record: String, // "11-5" or "9-7-1"
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayoffSeed {
    pub seed: u32,
    pub team: PlayoffTeam,
    pub clinched: bool,
    pub status: PlayoffStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayoffConference {
    pub name: String,
    pub seeds: Vec<PlayoffSeed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayoffsResponse {
    pub league: League,
    pub season: i32,
    pub status: SeasonStatus,
    pub conferences: Vec<PlayoffConference>,
}

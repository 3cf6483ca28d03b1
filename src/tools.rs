//! The six sports tools: their declared schemas, argument decoding and dispatch
//! onto the ESPN client. Every call ends in a single text payload, either
//! pretty-printed JSON or one error line.
use espn_api::{ApiError, ApiResult, EspnApi, League, ScoreboardQuery};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

#[derive(Debug, Deserialize)]
struct LeagueArg {
    league: String,
}

#[derive(Debug, Deserialize)]
struct StandingsArgs {
    group: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScoreboardArgs {
    week: Option<f64>,
    date: Option<String>,
}

impl ScoreboardArgs {
    /// Whole week number; fractions are truncated and anything below 1 means no week.
    fn week(&self) -> Option<u32> {
        self.week
            .filter(|w| w.is_finite() && *w >= 1.0)
            .map(|w| w.trunc() as u32)
    }
}

#[derive(Debug, Deserialize)]
struct TeamArgs {
    team: String,
}

#[derive(Debug, Deserialize)]
struct GameArgs {
    #[serde(rename = "gameId")]
    game_id: String,
}

pub struct SportsTools {
    api: EspnApi,
}

impl SportsTools {
    pub fn new(api: EspnApi) -> Self {
        Self { api }
    }

    /// Run the named tool. Failures come back as text, never as an `Err`.
    pub async fn call(&self, name: &str, arguments: Value) -> String {
        debug!("dispatching {name} with {arguments}");
        let result = match name {
            "get_standings" => self.standings(arguments).await,
            "get_scoreboard" => self.scoreboard(arguments).await,
            "get_team" => self.team(arguments).await,
            "get_schedule" => self.schedule(arguments).await,
            "get_game" => self.game(arguments).await,
            "get_playoffs" => self.playoffs(arguments).await,
            _ => return format!("Unknown tool: {name}"),
        };

        result.unwrap_or_else(|err| {
            warn!("{name} failed: {err}");
            format_error(&err)
        })
    }

    async fn standings(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let args: StandingsArgs = decode(arguments)?;
        let standings = self.api.fetch_standings(league, args.group.as_deref()).await?;
        to_text(&standings)
    }

    async fn scoreboard(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let args: ScoreboardArgs = decode(arguments)?;
        let query = ScoreboardQuery { week: args.week(), date: args.date };
        let scoreboard = self.api.fetch_scoreboard(league, &query).await?;
        to_text(&scoreboard)
    }

    async fn team(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let args: TeamArgs = decode(arguments)?;
        let team = self.api.fetch_team(league, &args.team).await?;
        to_text(&team)
    }

    async fn schedule(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let args: TeamArgs = decode(arguments)?;
        let schedule = self.api.fetch_schedule(league, &args.team).await?;
        to_text(&schedule)
    }

    async fn game(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let args: GameArgs = decode(arguments)?;
        let game = self.api.fetch_game(league, &args.game_id).await?;
        to_text(&game)
    }

    async fn playoffs(&self, arguments: Value) -> ApiResult<String> {
        let league = league_arg(&arguments)?;
        let playoffs = self.api.fetch_playoffs(league).await?;
        to_text(&playoffs)
    }
}

/// The league is validated before any other argument.
fn league_arg(arguments: &Value) -> ApiResult<League> {
    let arg = LeagueArg::deserialize(arguments)
        .map_err(|e| ApiError::Other(format!("Invalid arguments: {e}")))?;
    arg.league.parse()
}

fn decode<T: DeserializeOwned>(arguments: Value) -> ApiResult<T> {
    serde_json::from_value(arguments)
        .map_err(|e| ApiError::Other(format!("Invalid arguments: {e}")))
}

fn to_text<T: Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| ApiError::Other(e.to_string()))
}

/// One line of text per failure, shaped by error kind.
pub fn format_error(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, .. } => {
            format!("ESPN API Error: {err} (Status: {})", status.as_u16())
        }
        ApiError::Malformed(_) => format!("ESPN API Error: {err}"),
        ApiError::InvalidLeague(_) | ApiError::TeamNotFound { .. } => err.to_string(),
        ApiError::Network(..) | ApiError::Parsing(..) | ApiError::Other(_) => {
            format!("Error: {err}")
        }
    }
}

fn league_property() -> Value {
    json!({
        "type": "string",
        "enum": League::ALL.map(|l| l.as_str()),
        "description": "The sports league",
    })
}

pub fn definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "get_standings",
            description: "Get current standings for a league. Returns win-loss records, division standings, and playoff positioning.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                    "group": {
                        "type": "string",
                        "description": "Optional: conference (afc, nfc, eastern, western) or division (afc east, nfc north, atlantic, pacific, etc.)",
                    },
                },
                "required": ["league"],
            }),
        },
        ToolDefinition {
            name: "get_scoreboard",
            description: "Get current or upcoming games with scores. For NFL, can specify week number.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                    "week": {
                        "type": "number",
                        "description": "NFL only: week number (1-18 regular season, 19+ playoffs)",
                    },
                    "date": {
                        "type": "string",
                        "description": "Optional: specific date in YYYYMMDD format",
                    },
                },
                "required": ["league"],
            }),
        },
        ToolDefinition {
            name: "get_team",
            description: "Get detailed information about a specific team including record, stats, and current standing.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                    "team": {
                        "type": "string",
                        "description": "Team name, city, or abbreviation (e.g., 'Patriots', 'New England', 'NE')",
                    },
                },
                "required": ["league", "team"],
            }),
        },
        ToolDefinition {
            name: "get_schedule",
            description: "Get a team's schedule including past results and upcoming games.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                    "team": {
                        "type": "string",
                        "description": "Team name, city, or abbreviation",
                    },
                },
                "required": ["league", "team"],
            }),
        },
        ToolDefinition {
            name: "get_game",
            description: "Get detailed information about a specific game: teams, score, status, venue and broadcast.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                    "gameId": {
                        "type": "string",
                        "description": "ESPN game ID",
                    },
                },
                "required": ["league", "gameId"],
            }),
        },
        ToolDefinition {
            name: "get_playoffs",
            description: "Get the current playoff picture: seeds per conference with clinch status.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "league": league_property(),
                },
                "required": ["league"],
            }),
        },
    ]
}

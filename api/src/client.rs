use crate::endpoints::{Endpoints, ScoreboardQuery};
use crate::espn::{self, EspnCompetition, EspnCompetitor, EspnEvent, StatLine};
use crate::leagues::Team;
use crate::playoffs::playoff_picture;
use crate::{
    GameResponse, GameStatus, GameTeamStats, League, PlayoffsResponse, ScheduleGame,
    ScheduleOpponent, ScheduleResponse, ScheduleResult, ScheduleStatus, ScoreboardGame,
    ScoreboardResponse, ScoreboardTeam, StandingsGroup, StandingsResponse, StandingsTeam,
    TeamRecord, TeamResponse, TeamStanding,
};
use chrono::{Datelike, Utc};
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::fmt;

pub type ApiResult<T> = Result<T, ApiError>;

/// ESPN client. Holds no state beyond the HTTP client and the endpoint bases,
/// so one instance can be shared by every tool invocation.
#[derive(Debug, Clone)]
pub struct EspnApi {
    client: Client,
    endpoints: Endpoints,
}

impl Default for EspnApi {
    fn default() -> Self {
        Self::with_endpoints(Endpoints::default())
    }
}

#[derive(Debug)]
pub enum ApiError {
    InvalidLeague(String),
    TeamNotFound { team: String, league: League },
    Status { status: StatusCode, url: String },
    Malformed(String),
    Network(reqwest::Error, String),
    Parsing(reqwest::Error, String),
    Other(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidLeague(league) => {
                write!(f, "Invalid league: \"{league}\". Must be one of: nfl, nhl, nba")
            }
            ApiError::TeamNotFound { team, league } => {
                let league = league.as_str().to_uppercase();
                write!(f, "Team \"{team}\" not found in {league}")
            }
            ApiError::Status { status, .. } => {
                let reason = status.canonical_reason().unwrap_or_default();
                write!(f, "ESPN API request failed: {reason}")
            }
            ApiError::Malformed(msg) => f.write_str(msg),
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
            ApiError::Other(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl EspnApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("espn-mcp/", env!("CARGO_PKG_VERSION")))
                .build()
                .unwrap_or_default(),
            endpoints,
        }
    }

    /// Standings grouped as ESPN partitions them, optionally narrowed to groups
    /// whose name contains `group` (case-insensitive).
    pub async fn fetch_standings(
        &self,
        league: League,
        group: Option<&str>,
    ) -> ApiResult<StandingsResponse> {
        let url = self.endpoints.standings(league);
        let raw: espn::StandingsResponse = self.get(&url).await?;
        Ok(map_standings(league, raw, group))
    }

    pub async fn fetch_scoreboard(
        &self,
        league: League,
        query: &ScoreboardQuery,
    ) -> ApiResult<ScoreboardResponse> {
        let url = self.endpoints.scoreboard(league, query);
        let raw: espn::ScoreboardResponse = self.get(&url).await?;
        Ok(map_scoreboard(league, raw, query))
    }

    /// Resolve `query` against the league directory, then fetch the team page.
    pub async fn fetch_team(&self, league: League, query: &str) -> ApiResult<TeamResponse> {
        let team = resolve(league, query)?;
        let url = self.endpoints.team(league, team.id);
        let raw: espn::TeamResponse = self.get(&url).await?;
        Ok(map_team(league, team, raw))
    }

    pub async fn fetch_schedule(&self, league: League, query: &str) -> ApiResult<ScheduleResponse> {
        let team = resolve(league, query)?;
        let url = self.endpoints.schedule(league, team.id);
        let raw: espn::ScheduleResponse = self.get(&url).await?;
        Ok(map_schedule(league, team, raw))
    }

    pub async fn fetch_game(&self, league: League, game_id: &str) -> ApiResult<GameResponse> {
        let url = self.endpoints.game(league, game_id);
        let raw: espn::SummaryResponse = self.get(&url).await?;
        map_game(league, game_id, raw)
    }

    /// Playoff picture, derived from the standings endpoint.
    pub async fn fetch_playoffs(&self, league: League) -> ApiResult<PlayoffsResponse> {
        let standings = self.fetch_standings(league, None).await?;
        Ok(playoff_picture(standings))
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        let status = response.status();
        if !status.is_success() {
            debug!("GET {url} failed with {status}");
            return Err(ApiError::Status { status, url: url.to_owned() });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parsing(e, url.to_owned()))
    }
}

fn resolve(league: League, query: &str) -> ApiResult<&'static Team> {
    league.resolve_team(query).ok_or_else(|| ApiError::TeamNotFound {
        team: query.to_owned(),
        league,
    })
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → output types
// ---------------------------------------------------------------------------

fn current_year() -> i32 {
    Utc::now().year()
}

fn map_standings(
    league: League,
    raw: espn::StandingsResponse,
    group: Option<&str>,
) -> StandingsResponse {
    let filter = group.map(str::to_lowercase);
    let groups = raw
        .children
        .unwrap_or_default()
        .into_iter()
        .filter_map(|child| {
            let name = child.name.unwrap_or_default();
            if filter
                .as_deref()
                .is_some_and(|f| !name.to_lowercase().contains(f))
            {
                return None;
            }
            let teams: Vec<StandingsTeam> = child
                .standings
                .and_then(|s| s.entries)
                .unwrap_or_default()
                .iter()
                .map(|entry| map_standings_entry(league, entry))
                .collect();
            (!teams.is_empty()).then_some(StandingsGroup { name, teams })
        })
        .collect();

    StandingsResponse {
        league,
        season: raw.season.and_then(|s| s.year).unwrap_or_else(current_year),
        groups,
    }
}

fn map_standings_entry(league: League, entry: &espn::EspnStandingsEntry) -> StandingsTeam {
    let team = entry.team.clone().unwrap_or_default();
    let stats = StatLine::new(entry.stats.as_deref().unwrap_or_default());

    StandingsTeam {
        id: team.id.unwrap_or_default(),
        name: team.display_name.unwrap_or_default(),
        abbreviation: team.abbreviation.unwrap_or_default(),
        wins: stats.count("wins"),
        losses: stats.count("losses"),
        ties: league.tracks_ties().then(|| stats.count("ties")),
        pct: stats.value("winPercent"),
        games_back: stats.value("gamesBehind"),
        streak: stats.display("streak").unwrap_or_default().to_owned(),
        playoff_seed: Some(stats.count("playoffSeed")).filter(|seed| *seed > 0),
        clinched: stats
            .display("clincher")
            .filter(|c| !c.is_empty())
            .map(str::to_owned),
    }
}

fn map_scoreboard(
    league: League,
    raw: espn::ScoreboardResponse,
    query: &ScoreboardQuery,
) -> ScoreboardResponse {
    let games = raw
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(map_scoreboard_event)
        .collect();

    let date = raw
        .day
        .and_then(|d| d.date)
        .filter(|d| !d.is_empty())
        .or_else(|| query.date.clone().filter(|d| !d.is_empty()))
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string());

    ScoreboardResponse {
        league,
        week: raw
            .week
            .and_then(|w| w.number)
            .filter(|w| *w > 0)
            .or(query.week.filter(|w| *w > 0)),
        date,
        games,
    }
}

/// Events without a competition or without both home and away sides are skipped.
fn map_scoreboard_event(event: &EspnEvent) -> Option<ScoreboardGame> {
    let competition = event.competition()?;
    let home = competition.side("home")?;
    let away = competition.side("away")?;

    Some(ScoreboardGame {
        id: event.id.clone().unwrap_or_default(),
        status: GameStatus::from_state(competition.state()),
        start_time: event.date.clone().unwrap_or_default(),
        home_team: map_scoreboard_team(home),
        away_team: map_scoreboard_team(away),
        venue: competition.venue_name(),
        broadcast: competition.first_broadcast(),
    })
}

fn map_scoreboard_team(c: &EspnCompetitor) -> ScoreboardTeam {
    let team = c.team.clone().unwrap_or_default();
    ScoreboardTeam {
        id: team.id.unwrap_or_default(),
        name: team.display_name.unwrap_or_default(),
        abbreviation: team.abbreviation.unwrap_or_default(),
        score: c.score.as_ref().and_then(|s| s.points()),
        record: c.record_summary(),
    }
}

fn map_team(league: League, resolved: &Team, raw: espn::TeamResponse) -> TeamResponse {
    let detail = raw.team.unwrap_or_default();
    let record_stats = detail
        .record
        .as_ref()
        .and_then(|r| r.items.as_deref())
        .and_then(|items| items.first())
        .and_then(|item| item.stats.as_deref())
        .unwrap_or_default();
    let stats = StatLine::new(record_stats);

    let (division_rank, division) = detail
        .standing_summary
        .as_deref()
        .and_then(parse_standing_summary)
        .map(|(rank, division)| (rank, division.to_owned()))
        .unwrap_or_default();

    let streak = if stats.has("streak") {
        format_number(stats.value("streak"))
    } else {
        String::new()
    };

    let team = detail.team;
    TeamResponse {
        id: team.id.unwrap_or_else(|| resolved.id.to_owned()),
        name: team.display_name.unwrap_or_else(|| resolved.name.to_owned()),
        abbreviation: team.abbreviation.unwrap_or_else(|| resolved.abbreviation.to_owned()),
        location: team.location.unwrap_or_else(|| resolved.location.to_owned()),
        nickname: team.name.unwrap_or_else(|| resolved.nickname.to_owned()),
        conference: String::new(),
        division,
        record: TeamRecord {
            wins: stats.count("wins"),
            losses: stats.count("losses"),
            ties: league.tracks_ties().then(|| stats.count("ties")),
            pct: stats.value("winPercent"),
        },
        standing: TeamStanding {
            division: division_rank,
            conference: 0,
            playoff_seed: Some(stats.count("playoffSeed")).filter(|seed| *seed > 0),
        },
        streak,
        logo: team
            .logos
            .as_deref()
            .and_then(|l| l.first())
            .and_then(|l| l.href.clone())
            .unwrap_or_default(),
    }
}

/// Pull `(rank, division)` out of a summary like "1st in AFC East".
/// The first `<digits><st|nd|rd|th> in <text>` occurrence wins.
fn parse_standing_summary(summary: &str) -> Option<(u32, &str)> {
    const SUFFIXES: [&str; 4] = ["st", "nd", "rd", "th"];

    summary
        .char_indices()
        .filter(|(_, c)| c.is_ascii_digit())
        .find_map(|(start, _)| {
            let tail = &summary[start..];
            let digits_end = tail.find(|c: char| !c.is_ascii_digit()).unwrap_or(tail.len());
            let rank = tail[..digits_end].parse::<u32>().ok()?;
            let rest = SUFFIXES
                .iter()
                .find_map(|suffix| tail[digits_end..].strip_prefix(suffix))?;
            let division = rest.strip_prefix(" in ")?;
            (!division.is_empty()).then_some((rank, division))
        })
}

/// Render a stat value the way a JSON number prints: no trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

fn map_schedule(league: League, resolved: &Team, raw: espn::ScheduleResponse) -> ScheduleResponse {
    let games = raw
        .events
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|event| map_schedule_event(event, resolved.id))
        .collect();

    ScheduleResponse {
        team: raw
            .team
            .and_then(|t| t.display_name)
            .unwrap_or_else(|| resolved.name.to_owned()),
        league,
        games,
    }
}

fn map_schedule_event(event: &EspnEvent, team_id: &str) -> Option<ScheduleGame> {
    let competition = event.competition()?;
    let competitors = competition.competitors();
    let ours = competitors.iter().find(|c| c.team_id() == Some(team_id))?;
    let theirs = competitors.iter().find(|c| c.team_id() != Some(team_id))?;

    let status = ScheduleStatus::from(GameStatus::from_state(competition.state()));
    let scores = ours
        .score
        .as_ref()
        .and_then(|s| s.points())
        .zip(theirs.score.as_ref().and_then(|s| s.points()));
    let result = match (status, scores) {
        (ScheduleStatus::Completed, Some((us, them))) => Some(ScheduleResult {
            win: ours.winner == Some(true),
            score: format!("{us}-{them}"),
        }),
        _ => None,
    };

    let opponent = theirs.team.as_ref();
    Some(ScheduleGame {
        id: event.id.clone().unwrap_or_default(),
        week: event.week.as_ref().and_then(|w| w.number),
        date: event.date.clone().unwrap_or_default(),
        opponent: ScheduleOpponent {
            name: opponent.and_then(|t| t.display_name.clone()).unwrap_or_default(),
            abbreviation: opponent.and_then(|t| t.abbreviation.clone()).unwrap_or_default(),
        },
        home_away: ours.home_away.clone().unwrap_or_default(),
        result,
        status,
    })
}

fn map_game(league: League, game_id: &str, raw: espn::SummaryResponse) -> ApiResult<GameResponse> {
    let header = raw
        .header
        .ok_or_else(|| ApiError::Malformed(format!("Game {game_id} not found")))?;
    let competition: &EspnCompetition = header
        .competitions
        .as_deref()
        .and_then(|c| c.first())
        .ok_or_else(|| ApiError::Malformed(format!("Game {game_id} not found")))?;

    let (Some(home), Some(away)) = (competition.side("home"), competition.side("away")) else {
        return Err(ApiError::Malformed(format!("Invalid game data for {game_id}")));
    };

    let status = competition.status.as_ref();
    Ok(GameResponse {
        id: header.id.clone().unwrap_or_else(|| game_id.to_owned()),
        league,
        status: GameStatus::from_state(competition.state()),
        start_time: competition.date.clone().unwrap_or_default(),
        venue: competition.venue_name().unwrap_or_default(),
        home_team: map_game_team(home),
        away_team: map_game_team(away),
        period: status.and_then(|s| s.period).map(|p| p.to_string()),
        clock: status.and_then(|s| s.display_clock.clone()),
        broadcast: competition.first_broadcast(),
    })
}

fn map_game_team(c: &EspnCompetitor) -> GameTeamStats {
    let team = c.team.as_ref();
    GameTeamStats {
        name: team.and_then(|t| t.display_name.clone()).unwrap_or_default(),
        abbreviation: team.and_then(|t| t.abbreviation.clone()).unwrap_or_default(),
        score: c.score.as_ref().and_then(|s| s.points()).unwrap_or_default(),
        record: c.record_summary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayoffStatus, SeasonStatus};
    use mockito::{Matcher, Server, ServerGuard};

    const STANDINGS_JSON: &str = r#"{
        "season": {"year": 2025},
        "children": [
            {
                "name": "AFC East",
                "standings": {"entries": [
                    {"team": {"id": "2", "displayName": "Buffalo Bills", "abbreviation": "BUF"},
                     "stats": [
                        {"name": "wins", "value": 12.0},
                        {"name": "losses", "value": 4.0},
                        {"name": "ties", "value": 1.0},
                        {"name": "winPercent", "value": 0.735},
                        {"name": "gamesBehind", "value": 0.0},
                        {"name": "streak", "value": 3.0, "displayValue": "W3"},
                        {"name": "playoffSeed", "value": 2.0},
                        {"name": "clincher", "displayValue": "z"}
                     ]},
                    {"team": {"id": "15", "displayName": "Miami Dolphins", "abbreviation": "MIA"},
                     "stats": [
                        {"name": "wins", "value": 8.0},
                        {"name": "losses", "value": 9.0},
                        {"name": "gamesBehind", "value": 4.5},
                        {"name": "playoffSeed", "value": 0.0},
                        {"name": "clincher", "displayValue": ""}
                     ]}
                ]}
            },
            {
                "name": "AFC North",
                "standings": {"entries": [
                    {"team": {"id": "33", "displayName": "Baltimore Ravens", "abbreviation": "BAL"},
                     "stats": [{"name": "wins", "value": 11.0}, {"name": "playoffSeed", "value": 3.0}]}
                ]}
            },
            {"name": "NFC East", "standings": {"entries": []}}
        ]
    }"#;

    fn api_for(server: &ServerGuard) -> EspnApi {
        EspnApi::with_endpoints(Endpoints::new(&server.url(), &server.url()))
    }

    fn standings_fixture() -> espn::StandingsResponse {
        serde_json::from_str(STANDINGS_JSON).unwrap()
    }

    #[test]
    fn standings_filter_is_case_insensitive_substring() {
        let standings = map_standings(League::Nfl, standings_fixture(), Some("afc east"));
        assert_eq!(standings.season, 2025);
        assert_eq!(standings.groups.len(), 1);
        assert_eq!(standings.groups[0].name, "AFC East");

        let all_afc = map_standings(League::Nfl, standings_fixture(), Some("AFC"));
        assert_eq!(all_afc.groups.len(), 2);
    }

    #[test]
    fn standings_skip_empty_groups() {
        let standings = map_standings(League::Nfl, standings_fixture(), None);
        let names: Vec<&str> = standings.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["AFC East", "AFC North"]);
    }

    #[test]
    fn standings_entry_projection() {
        let standings = map_standings(League::Nfl, standings_fixture(), None);
        let bills = &standings.groups[0].teams[0];
        assert_eq!(bills.wins, 12);
        assert_eq!(bills.losses, 4);
        assert_eq!(bills.ties, Some(1));
        assert_eq!(bills.pct, 0.735);
        assert_eq!(bills.streak, "W3");
        assert_eq!(bills.playoff_seed, Some(2));
        assert_eq!(bills.clinched.as_deref(), Some("z"));

        let dolphins = &standings.groups[0].teams[1];
        assert_eq!(dolphins.ties, Some(0));
        assert_eq!(dolphins.games_back, 4.5);
        assert_eq!(dolphins.streak, "");
        assert_eq!(dolphins.playoff_seed, None);
        assert_eq!(dolphins.clinched, None);
    }

    #[test]
    fn ties_only_reported_for_football() {
        let standings = map_standings(League::Nhl, standings_fixture(), None);
        assert!(standings.groups.iter().flat_map(|g| &g.teams).all(|t| t.ties.is_none()));
    }

    #[test]
    fn standings_season_defaults_to_current_year() {
        let raw: espn::StandingsResponse = serde_json::from_str(r#"{"children": []}"#).unwrap();
        assert_eq!(map_standings(League::Nba, raw, None).season, current_year());
    }

    #[test]
    fn scoreboard_skips_incomplete_events() {
        let raw: espn::ScoreboardResponse = serde_json::from_str(
            r#"{
                "week": {"number": 6},
                "events": [
                    {"id": "1", "date": "2025-10-12T17:00Z", "competitions": [{
                        "status": {"type": {"state": "in"}},
                        "venue": {"fullName": "Highmark Stadium"},
                        "broadcasts": [{"names": ["CBS", "Paramount+"]}],
                        "competitors": [
                            {"homeAway": "home", "score": "21",
                             "team": {"id": "2", "displayName": "Buffalo Bills", "abbreviation": "BUF"},
                             "records": [{"summary": "4-1"}, {"summary": "2-0"}]},
                            {"homeAway": "away", "score": "",
                             "team": {"id": "15", "displayName": "Miami Dolphins", "abbreviation": "MIA"}}
                        ]}]},
                    {"id": "2", "competitions": []},
                    {"id": "3", "competitions": [{"competitors": [{"homeAway": "home"}]}]}
                ]
            }"#,
        )
        .unwrap();
        let query = ScoreboardQuery { week: Some(6), date: None };
        let board = map_scoreboard(League::Nfl, raw, &query);
        assert_eq!(board.week, Some(6));
        assert_eq!(board.games.len(), 1);
        let game = &board.games[0];
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.home_team.score, Some(21));
        assert_eq!(game.home_team.record, "4-1");
        assert_eq!(game.away_team.score, None);
        assert_eq!(game.away_team.record, "");
        assert_eq!(game.venue.as_deref(), Some("Highmark Stadium"));
        assert_eq!(game.broadcast.as_deref(), Some("CBS"));
    }

    #[test]
    fn scoreboard_date_falls_back_to_request_then_today() {
        let empty = || serde_json::from_str::<espn::ScoreboardResponse>("{}").unwrap();
        let query = ScoreboardQuery { week: None, date: Some("20250105".into()) };
        assert_eq!(map_scoreboard(League::Nba, empty(), &query).date, "20250105");

        let today = Utc::now().format("%Y-%m-%d").to_string();
        let board = map_scoreboard(League::Nba, empty(), &ScoreboardQuery::default());
        assert_eq!(board.date, today);
        assert_eq!(board.week, None);

        let with_day: espn::ScoreboardResponse =
            serde_json::from_str(r#"{"day": {"date": "2025-01-06"}}"#).unwrap();
        assert_eq!(map_scoreboard(League::Nba, with_day, &query).date, "2025-01-06");
    }

    #[test]
    fn standing_summary_parsing() {
        assert_eq!(parse_standing_summary("1st in AFC East"), Some((1, "AFC East")));
        assert_eq!(parse_standing_summary("12th in Western Conference"), Some((12, "Western Conference")));
        assert_eq!(parse_standing_summary("T-3rd in Atlantic Division"), Some((3, "Atlantic Division")));
        assert_eq!(parse_standing_summary("2nd in "), None);
        assert_eq!(parse_standing_summary("Eliminated"), None);
        assert_eq!(parse_standing_summary(""), None);
    }

    #[test]
    fn numbers_print_like_json() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(-2.0), "-2");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn team_detail_projection() {
        let raw: espn::TeamResponse = serde_json::from_str(
            r#"{"team": {
                "id": "17", "displayName": "New England Patriots", "abbreviation": "NE",
                "location": "New England", "name": "Patriots",
                "logos": [{"href": "https://a.espncdn.com/ne.png"}, {"href": "other"}],
                "standingSummary": "2nd in AFC East",
                "record": {"items": [{"summary": "9-7-1", "stats": [
                    {"name": "wins", "value": 9.0}, {"name": "losses", "value": 7.0},
                    {"name": "ties", "value": 1.0}, {"name": "winPercent", "value": 0.558},
                    {"name": "streak", "value": -2.0}, {"name": "playoffSeed", "value": 6.0}
                ]}]}
            }}"#,
        )
        .unwrap();
        let resolved = League::Nfl.resolve_team("NE").unwrap();
        let team = map_team(League::Nfl, resolved, raw);
        assert_eq!(team.nickname, "Patriots");
        assert_eq!(team.division, "AFC East");
        assert_eq!(team.conference, "");
        assert_eq!(team.standing, TeamStanding { division: 2, conference: 0, playoff_seed: Some(6) });
        assert_eq!(team.record, TeamRecord { wins: 9, losses: 7, ties: Some(1), pct: 0.558 });
        assert_eq!(team.streak, "-2");
        assert_eq!(team.logo, "https://a.espncdn.com/ne.png");
    }

    #[test]
    fn team_detail_without_summary_or_record() {
        let raw: espn::TeamResponse = serde_json::from_str(r#"{"team": {"id": "13"}}"#).unwrap();
        let resolved = League::Nba.resolve_team("lakers").unwrap();
        let team = map_team(League::Nba, resolved, raw);
        assert_eq!(team.name, "Los Angeles Lakers");
        assert_eq!(team.division, "");
        assert_eq!(team.standing.division, 0);
        assert_eq!(team.record.ties, None);
        assert_eq!(team.streak, "");
        assert_eq!(team.logo, "");
    }

    #[test]
    fn schedule_results_only_for_completed_games() {
        let raw: espn::ScheduleResponse = serde_json::from_str(
            r#"{
                "team": {"displayName": "Boston Celtics"},
                "events": [
                    {"id": "10", "date": "2025-10-22T23:30Z", "competitions": [{
                        "status": {"type": {"state": "post"}},
                        "competitors": [
                            {"homeAway": "home", "winner": true, "score": {"value": 112.0, "displayValue": "112"},
                             "team": {"id": "2", "displayName": "Boston Celtics", "abbreviation": "BOS"}},
                            {"homeAway": "away", "winner": false, "score": {"value": 104.0, "displayValue": "104"},
                             "team": {"id": "18", "displayName": "New York Knicks", "abbreviation": "NYK"}}
                        ]}]},
                    {"id": "11", "date": "2025-10-25T00:00Z", "competitions": [{
                        "status": {"type": {"state": "pre"}},
                        "competitors": [
                            {"homeAway": "home", "team": {"id": "20", "displayName": "Philadelphia 76ers", "abbreviation": "PHI"}},
                            {"homeAway": "away", "team": {"id": "2", "displayName": "Boston Celtics", "abbreviation": "BOS"}}
                        ]}]},
                    {"id": "12", "competitions": [{"competitors": [
                        {"homeAway": "home", "team": {"id": "5"}},
                        {"homeAway": "away", "team": {"id": "6"}}
                    ]}]}
                ]
            }"#,
        )
        .unwrap();
        let celtics = League::Nba.resolve_team("BOS").unwrap();
        let schedule = map_schedule(League::Nba, celtics, raw);
        assert_eq!(schedule.team, "Boston Celtics");
        assert_eq!(schedule.games.len(), 2);

        let opener = &schedule.games[0];
        assert_eq!(opener.status, ScheduleStatus::Completed);
        assert_eq!(opener.opponent.abbreviation, "NYK");
        assert_eq!(opener.home_away, "home");
        assert_eq!(opener.result, Some(ScheduleResult { win: true, score: "112-104".into() }));

        let next = &schedule.games[1];
        assert_eq!(next.status, ScheduleStatus::Scheduled);
        assert_eq!(next.home_away, "away");
        assert_eq!(next.opponent.name, "Philadelphia 76ers");
        assert_eq!(next.result, None);
    }

    #[test]
    fn game_requires_competition_and_both_sides() {
        let missing: espn::SummaryResponse = serde_json::from_str(r#"{"header": {"competitions": []}}"#).unwrap();
        let err = map_game(League::Nfl, "401", missing).unwrap_err();
        assert!(matches!(&err, ApiError::Malformed(m) if m == "Game 401 not found"));

        let one_sided: espn::SummaryResponse = serde_json::from_str(
            r#"{"header": {"competitions": [{"competitors": [{"homeAway": "home"}]}]}}"#,
        )
        .unwrap();
        let err = map_game(League::Nfl, "402", one_sided).unwrap_err();
        assert_eq!(err.to_string(), "Invalid game data for 402");
    }

    #[test]
    fn game_projection() {
        let raw: espn::SummaryResponse = serde_json::from_str(
            r#"{"header": {"id": "401", "competitions": [{
                "date": "2025-11-02T18:00Z",
                "venue": {"fullName": "Gillette Stadium"},
                "status": {"type": {"state": "in"}, "period": 3, "displayClock": "7:42"},
                "competitors": [
                    {"homeAway": "away", "score": "10", "team": {"displayName": "Buffalo Bills", "abbreviation": "BUF"},
                     "records": [{"summary": "5-3"}]},
                    {"homeAway": "home", "team": {"displayName": "New England Patriots", "abbreviation": "NE"}}
                ]}]}}"#,
        )
        .unwrap();
        let game = map_game(League::Nfl, "401", raw).unwrap();
        assert_eq!(game.status, GameStatus::InProgress);
        assert_eq!(game.venue, "Gillette Stadium");
        assert_eq!(game.away_team.score, 10);
        assert_eq!(game.away_team.record, "5-3");
        assert_eq!(game.home_team.score, 0);
        assert_eq!(game.period.as_deref(), Some("3"));
        assert_eq!(game.clock.as_deref(), Some("7:42"));
        assert_eq!(game.broadcast, None);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ApiError::InvalidLeague("mlb".into()).to_string(),
            "Invalid league: \"mlb\". Must be one of: nfl, nhl, nba"
        );
        assert_eq!(
            ApiError::TeamNotFound { team: "Sharks".into(), league: League::Nfl }.to_string(),
            "Team \"Sharks\" not found in NFL"
        );
    }

    #[tokio::test]
    async fn fetch_standings_filters_afc_east_with_ties() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/football/nfl/standings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STANDINGS_JSON)
            .create_async()
            .await;

        let standings = api_for(&server)
            .fetch_standings(League::Nfl, Some("AFC East"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(standings.groups.len(), 1);
        assert!(standings.groups[0].name.to_lowercase().contains("afc east"));
        let ties: Vec<Option<u32>> = standings.groups[0].teams.iter().map(|t| t.ties).collect();
        assert_eq!(ties, vec![Some(1), Some(0)]);
    }

    #[tokio::test]
    async fn non_success_status_reports_status_and_url() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/hockey/nhl/standings")
            .with_status(503)
            .create_async()
            .await;

        let err = api_for(&server).fetch_standings(League::Nhl, None).await.unwrap_err();
        assert_eq!(err.to_string(), "ESPN API request failed: Service Unavailable");
        match err {
            ApiError::Status { status, url } => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(url, format!("{}/hockey/nhl/standings", server.url()));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_team_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server.mock("GET", Matcher::Any).expect(0).create_async().await;

        let err = api_for(&server)
            .fetch_schedule(League::Nfl, "nonexistent-xyz")
            .await
            .unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "Team \"nonexistent-xyz\" not found in NFL");
    }

    #[tokio::test]
    async fn fetch_team_uses_resolved_id() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/basketball/nba/teams/13")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"team": {"id": "13", "displayName": "Los Angeles Lakers", "standingSummary": "3rd in Pacific Division"}}"#)
            .create_async()
            .await;

        let team = api_for(&server).fetch_team(League::Nba, "Lakers").await.unwrap();

        mock.assert_async().await;
        assert_eq!(team.id, "13");
        assert_eq!(team.division, "Pacific Division");
        assert_eq!(team.standing.division, 3);
    }

    #[tokio::test]
    async fn fetch_game_hits_summary_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/hockey/nhl/summary")
            .match_query(Matcher::UrlEncoded("event".into(), "401".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"header": {"id": "401"}}"#)
            .create_async()
            .await;

        let err = api_for(&server).fetch_game(League::Nhl, "401").await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "Game 401 not found");
    }

    #[tokio::test]
    async fn fetch_playoffs_builds_picture_from_standings() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/football/nfl/standings")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(STANDINGS_JSON)
            .create_async()
            .await;

        let picture = api_for(&server).fetch_playoffs(League::Nfl).await.unwrap();

        mock.assert_async().await;
        assert_eq!(picture.season, 2025);
        assert_eq!(picture.status, SeasonStatus::InProgress);
        assert_eq!(picture.conferences.len(), 1);
        let afc = &picture.conferences[0];
        assert_eq!(afc.name, "AFC");
        let order: Vec<&str> = afc.seeds.iter().map(|s| s.team.abbreviation.as_str()).collect();
        // MIA has no seed and lands at position 2 behind BUF; ties keep insertion order.
        assert_eq!(order, vec!["BUF", "MIA", "BAL"]);
        assert_eq!(afc.seeds[0].status, PlayoffStatus::DivisionLeader);
        assert_eq!(afc.seeds[0].team.record, "12-4-1");
        assert_eq!(afc.seeds[1].team.record, "8-9");
    }
}

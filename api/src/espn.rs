//! ESPN API raw wire types: serde shapes for deserializing ESPN responses.
//! These map to the output types via the mapping functions in client.rs.
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeam {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub abbreviation: Option<String>,
    pub location: Option<String>,
    pub name: Option<String>, // nickname, e.g. "Patriots"
    pub logos: Option<Vec<EspnLogo>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnLogo {
    pub href: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStat {
    pub name: Option<String>,
    pub value: Option<f64>,
    #[serde(rename = "displayValue")]
    pub display_value: Option<String>,
}

/// Stats keyed by name, built once per entry. First occurrence of a name wins.
#[derive(Debug, Default)]
pub struct StatLine<'a> {
    stats: HashMap<&'a str, &'a EspnStat>,
}

impl<'a> StatLine<'a> {
    pub fn new(stats: &'a [EspnStat]) -> Self {
        let mut map = HashMap::with_capacity(stats.len());
        for stat in stats {
            if let Some(name) = stat.name.as_deref() {
                map.entry(name).or_insert(stat);
            }
        }
        Self { stats: map }
    }

    pub fn has(&self, name: &str) -> bool {
        self.stats.contains_key(name)
    }

    /// Numeric value, 0 when the stat or its value is missing.
    pub fn value(&self, name: &str) -> f64 {
        self.stats.get(name).and_then(|s| s.value).unwrap_or(0.0)
    }

    /// Value as a non-negative count (wins, losses, seeds...).
    pub fn count(&self, name: &str) -> u32 {
        self.value(name).max(0.0) as u32
    }

    pub fn display(&self, name: &str) -> Option<&'a str> {
        self.stats.get(name).and_then(|s| s.display_value.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecord {
    pub summary: Option<String>,
}

/// Scores are strings on scoreboards and summaries, but objects on team
/// schedules (`{"value": 27.0, "displayValue": "27"}`).
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnScore {
    Text(String),
    Detailed {
        value: Option<f64>,
        #[serde(rename = "displayValue")]
        display_value: Option<String>,
    },
}

impl EspnScore {
    pub fn points(&self) -> Option<u32> {
        match self {
            EspnScore::Text(s) => s.trim().parse().ok(),
            EspnScore::Detailed { value: Some(v), .. } if *v >= 0.0 => Some(*v as u32),
            EspnScore::Detailed { display_value, .. } => {
                display_value.as_deref().and_then(|s| s.trim().parse().ok())
            }
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    pub score: Option<EspnScore>,
    pub winner: Option<bool>,
    pub records: Option<Vec<EspnRecord>>,
}

impl EspnCompetitor {
    pub fn team_id(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.id.as_deref())
    }

    /// Overall record summary, which ESPN lists first.
    pub fn record_summary(&self) -> String {
        self.records
            .as_deref()
            .and_then(|r| r.first())
            .and_then(|r| r.summary.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
    pub period: Option<u32>,
    #[serde(rename = "displayClock")]
    pub display_clock: Option<String>,
}

impl EspnStatus {
    pub fn state(&self) -> &str {
        self.status_type
            .as_ref()
            .and_then(|t| t.state.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    pub state: Option<String>, // "pre" | "in" | "post"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnVenue {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnBroadcast {
    pub names: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetition {
    pub date: Option<String>,
    pub venue: Option<EspnVenue>,
    pub competitors: Option<Vec<EspnCompetitor>>,
    pub status: Option<EspnStatus>,
    pub broadcasts: Option<Vec<EspnBroadcast>>,
}

impl EspnCompetition {
    pub fn competitors(&self) -> &[EspnCompetitor] {
        self.competitors.as_deref().unwrap_or_default()
    }

    pub fn side(&self, home_away: &str) -> Option<&EspnCompetitor> {
        self.competitors()
            .iter()
            .find(|c| c.home_away.as_deref() == Some(home_away))
    }

    pub fn state(&self) -> &str {
        self.status.as_ref().map(EspnStatus::state).unwrap_or_default()
    }

    pub fn first_broadcast(&self) -> Option<String> {
        self.broadcasts
            .as_deref()
            .and_then(|b| b.first())
            .and_then(|b| b.names.as_deref())
            .and_then(|n| n.first())
            .cloned()
    }

    pub fn venue_name(&self) -> Option<String> {
        self.venue.as_ref().and_then(|v| v.full_name.clone())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnWeek {
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub date: Option<String>, // ISO 8601
    pub competitions: Option<Vec<EspnCompetition>>,
    pub week: Option<EspnWeek>,
}

impl EspnEvent {
    pub fn competition(&self) -> Option<&EspnCompetition> {
        self.competitions.as_deref().and_then(|c| c.first())
    }
}

// ---------------------------------------------------------------------------
// Standings  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct StandingsResponse {
    pub children: Option<Vec<EspnStandingsGroup>>,
    pub season: Option<EspnSeason>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnSeason {
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStandingsGroup {
    pub name: Option<String>,
    pub standings: Option<EspnStandings>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStandings {
    pub entries: Option<Vec<EspnStandingsEntry>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStandingsEntry {
    pub team: Option<EspnTeam>,
    pub stats: Option<Vec<EspnStat>>,
}

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<EspnEvent>>,
    pub week: Option<EspnWeek>,
    pub day: Option<EspnDay>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnDay {
    pub date: Option<String>,
}

// ---------------------------------------------------------------------------
// Team detail and schedule  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct TeamResponse {
    pub team: Option<EspnTeamDetail>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnTeamDetail {
    #[serde(flatten)]
    pub team: EspnTeam,
    pub record: Option<EspnTeamRecord>,
    #[serde(rename = "standingSummary")]
    pub standing_summary: Option<String>, // "1st in AFC East"
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamRecord {
    pub items: Option<Vec<EspnRecordItem>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnRecordItem {
    pub stats: Option<Vec<EspnStat>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScheduleResponse {
    pub team: Option<EspnTeam>,
    pub events: Option<Vec<EspnEvent>>,
}

// ---------------------------------------------------------------------------
// Game summary  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummaryResponse {
    pub header: Option<EspnHeader>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnHeader {
    pub id: Option<String>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

use crate::League;

pub const SITE_BASE: &str = "https://site.api.espn.com/apis/site/v2/sports";
pub const CORE_BASE: &str = "https://sports.core.api.espn.com/v2/sports";

/// Regular season, used together with a week number.
const REGULAR_SEASON_TYPE: u8 = 2;
/// Postseason type id on the core API.
const POSTSEASON_TYPE: u8 = 3;

/// Optional filters for the scoreboard query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreboardQuery {
    pub week: Option<u32>,
    pub date: Option<String>, // YYYYMMDD
}

/// URL builder for every ESPN query kind.
#[derive(Debug, Clone)]
pub struct Endpoints {
    site_base: String,
    core_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(SITE_BASE, CORE_BASE)
    }
}

impl Endpoints {
    pub fn new(site_base: &str, core_base: &str) -> Self {
        Self {
            site_base: site_base.trim_end_matches('/').to_owned(),
            core_base: core_base.trim_end_matches('/').to_owned(),
        }
    }

    fn site(&self, league: League) -> String {
        let (sport, code) = league.path();
        format!("{}/{sport}/{code}", self.site_base)
    }

    pub fn scoreboard(&self, league: League, query: &ScoreboardQuery) -> String {
        let mut url = format!("{}/scoreboard", self.site(league));

        let mut params: Vec<String> = Vec::new();
        if let Some(week) = query.week.filter(|w| *w > 0) {
            params.push(format!("week={week}"));
            params.push(format!("seasontype={REGULAR_SEASON_TYPE}"));
        }
        if let Some(date) = query.date.as_deref().filter(|d| !d.is_empty()) {
            params.push(format!("dates={date}"));
        }

        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }

    pub fn standings(&self, league: League) -> String {
        format!("{}/standings", self.site(league))
    }

    pub fn team(&self, league: League, team_id: &str) -> String {
        format!("{}/teams/{team_id}", self.site(league))
    }

    pub fn schedule(&self, league: League, team_id: &str) -> String {
        format!("{}/teams/{team_id}/schedule", self.site(league))
    }

    pub fn game(&self, league: League, game_id: &str) -> String {
        format!("{}/summary?event={game_id}", self.site(league))
    }

    /// Postseason group standings on the core API. The shape varies by league
    /// and by how far the season has progressed.
    pub fn playoffs(&self, league: League, year: i32) -> String {
        let (sport, code) = league.path();
        format!(
            "{}/{sport}/{code}/seasons/{year}/types/{POSTSEASON_TYPE}/groups/standings",
            self.core_base
        )
    }
}

//! Static team directory for each supported league and the free-text resolver
//! that maps user input ("Patriots", "new england", "NE") onto it.
use crate::League;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: &'static str,           // ESPN team id
    pub name: &'static str,         // "New England Patriots"
    pub abbreviation: &'static str, // "NE"
    pub location: &'static str,     // "New England"
    pub nickname: &'static str,     // "Patriots"
}

impl Team {
    /// Rules are tried in order for this one team: abbreviation, nickname,
    /// location, full name, then full name containing the needle.
    /// `needle` must already be trimmed and lowercased.
    fn matches(&self, needle: &str) -> bool {
        let name = self.name.to_lowercase();
        self.abbreviation.to_lowercase() == needle
            || self.nickname.to_lowercase() == needle
            || self.location.to_lowercase() == needle
            || name == needle
            || name.contains(needle)
    }
}

const fn team(
    id: &'static str,
    name: &'static str,
    abbreviation: &'static str,
    location: &'static str,
    nickname: &'static str,
) -> Team {
    Team { id, name, abbreviation, location, nickname }
}

impl League {
    pub fn teams(&self) -> &'static [Team] {
        match self {
            League::Nfl => NFL_TEAMS,
            League::Nhl => NHL_TEAMS,
            League::Nba => NBA_TEAMS,
        }
    }

    pub fn resolve_team(&self, query: &str) -> Option<&'static Team> {
        resolve_in(self.teams(), query)
    }
}

/// Return the first team in `teams` that satisfies any match rule.
///
/// Teams are scanned in list order and each team is checked against every rule
/// before moving on, so a substring hit on an early team wins over an exact
/// abbreviation hit on a later one.
pub fn resolve_in<'a>(teams: &'a [Team], query: &str) -> Option<&'a Team> {
    let needle = query.trim().to_lowercase();
    teams.iter().find(|team| team.matches(&needle))
}

// Scan order is load-bearing: a team whose full name contains another team's
// abbreviation ("Miami Dolphins" / PHI, "Kansas City Chiefs" / CHI) is listed
// after that team so every abbreviation resolves to its own club.

static NFL_TEAMS: &[Team] = &[
    team("2", "Buffalo Bills", "BUF", "Buffalo", "Bills"),
    team("21", "Philadelphia Eagles", "PHI", "Philadelphia", "Eagles"),
    team("15", "Miami Dolphins", "MIA", "Miami", "Dolphins"),
    team("17", "New England Patriots", "NE", "New England", "Patriots"),
    team("20", "New York Jets", "NYJ", "New York", "Jets"),
    team("33", "Baltimore Ravens", "BAL", "Baltimore", "Ravens"),
    team("4", "Cincinnati Bengals", "CIN", "Cincinnati", "Bengals"),
    team("5", "Cleveland Browns", "CLE", "Cleveland", "Browns"),
    team("23", "Pittsburgh Steelers", "PIT", "Pittsburgh", "Steelers"),
    team("34", "Houston Texans", "HOU", "Houston", "Texans"),
    team("11", "Indianapolis Colts", "IND", "Indianapolis", "Colts"),
    team("30", "Jacksonville Jaguars", "JAX", "Jacksonville", "Jaguars"),
    team("10", "Tennessee Titans", "TEN", "Tennessee", "Titans"),
    team("7", "Denver Broncos", "DEN", "Denver", "Broncos"),
    team("3", "Chicago Bears", "CHI", "Chicago", "Bears"),
    team("12", "Kansas City Chiefs", "KC", "Kansas City", "Chiefs"),
    team("13", "Las Vegas Raiders", "LV", "Las Vegas", "Raiders"),
    team("24", "Los Angeles Chargers", "LAC", "Los Angeles", "Chargers"),
    team("6", "Dallas Cowboys", "DAL", "Dallas", "Cowboys"),
    team("19", "New York Giants", "NYG", "New York", "Giants"),
    team("28", "Washington Commanders", "WSH", "Washington", "Commanders"),
    team("8", "Detroit Lions", "DET", "Detroit", "Lions"),
    team("9", "Green Bay Packers", "GB", "Green Bay", "Packers"),
    team("16", "Minnesota Vikings", "MIN", "Minnesota", "Vikings"),
    team("1", "Atlanta Falcons", "ATL", "Atlanta", "Falcons"),
    team("29", "Carolina Panthers", "CAR", "Carolina", "Panthers"),
    team("18", "New Orleans Saints", "NO", "New Orleans", "Saints"),
    team("27", "Tampa Bay Buccaneers", "TB", "Tampa Bay", "Buccaneers"),
    team("22", "Arizona Cardinals", "ARI", "Arizona", "Cardinals"),
    team("14", "Los Angeles Rams", "LAR", "Los Angeles", "Rams"),
    team("25", "San Francisco 49ers", "SF", "San Francisco", "49ers"),
    team("26", "Seattle Seahawks", "SEA", "Seattle", "Seahawks"),
];

static NHL_TEAMS: &[Team] = &[
    team("1", "Boston Bruins", "BOS", "Boston", "Bruins"),
    team("7", "Buffalo Sabres", "BUF", "Buffalo", "Sabres"),
    team("17", "Detroit Red Wings", "DET", "Detroit", "Red Wings"),
    team("13", "Florida Panthers", "FLA", "Florida", "Panthers"),
    team("24", "Anaheim Ducks", "ANA", "Anaheim", "Ducks"),
    team("8", "Montreal Canadiens", "MTL", "Montreal", "Canadiens"),
    team("10", "Toronto Maple Leafs", "TOR", "Toronto", "Maple Leafs"),
    team("9", "Ottawa Senators", "OTT", "Ottawa", "Senators"),
    team("14", "Tampa Bay Lightning", "TB", "Tampa Bay", "Lightning"),
    team("12", "Carolina Hurricanes", "CAR", "Carolina", "Hurricanes"),
    team("26", "Los Angeles Kings", "LA", "Los Angeles", "Kings"),
    team("21", "Colorado Avalanche", "COL", "Colorado", "Avalanche"),
    team("29", "Columbus Blue Jackets", "CBJ", "Columbus", "Blue Jackets"),
    team("2", "New Jersey Devils", "NJD", "New Jersey", "Devils"),
    team("3", "New York Islanders", "NYI", "New York", "Islanders"),
    team("4", "New York Rangers", "NYR", "New York", "Rangers"),
    team("5", "Philadelphia Flyers", "PHI", "Philadelphia", "Flyers"),
    team("6", "Pittsburgh Penguins", "PIT", "Pittsburgh", "Penguins"),
    team("15", "Washington Capitals", "WSH", "Washington", "Capitals"),
    team("30", "Minnesota Wild", "MIN", "Minnesota", "Wild"),
    team("18", "Nashville Predators", "NSH", "Nashville", "Predators"),
    team("19", "St. Louis Blues", "STL", "St. Louis", "Blues"),
    team("16", "Chicago Blackhawks", "CHI", "Chicago", "Blackhawks"),
    team("25", "Dallas Stars", "DAL", "Dallas", "Stars"),
    team("52", "Winnipeg Jets", "WPG", "Winnipeg", "Jets"),
    team("37", "Utah Hockey Club", "UTA", "Utah", "Hockey Club"),
    team("20", "Calgary Flames", "CGY", "Calgary", "Flames"),
    team("22", "Edmonton Oilers", "EDM", "Edmonton", "Oilers"),
    team("28", "San Jose Sharks", "SJS", "San Jose", "Sharks"),
    team("55", "Seattle Kraken", "SEA", "Seattle", "Kraken"),
    team("23", "Vancouver Canucks", "VAN", "Vancouver", "Canucks"),
    team("54", "Vegas Golden Knights", "VGK", "Vegas", "Golden Knights"),
];

static NBA_TEAMS: &[Team] = &[
    team("2", "Boston Celtics", "BOS", "Boston", "Celtics"),
    team("17", "Brooklyn Nets", "BKN", "Brooklyn", "Nets"),
    team("18", "New York Knicks", "NYK", "New York", "Knicks"),
    team("20", "Philadelphia 76ers", "PHI", "Philadelphia", "76ers"),
    team("28", "Toronto Raptors", "TOR", "Toronto", "Raptors"),
    team("4", "Chicago Bulls", "CHI", "Chicago", "Bulls"),
    team("5", "Cleveland Cavaliers", "CLE", "Cleveland", "Cavaliers"),
    team("8", "Detroit Pistons", "DET", "Detroit", "Pistons"),
    team("11", "Indiana Pacers", "IND", "Indiana", "Pacers"),
    team("15", "Milwaukee Bucks", "MIL", "Milwaukee", "Bucks"),
    team("1", "Atlanta Hawks", "ATL", "Atlanta", "Hawks"),
    team("30", "Charlotte Hornets", "CHA", "Charlotte", "Hornets"),
    team("14", "Miami Heat", "MIA", "Miami", "Heat"),
    team("19", "Orlando Magic", "ORL", "Orlando", "Magic"),
    team("27", "Washington Wizards", "WAS", "Washington", "Wizards"),
    team("7", "Denver Nuggets", "DEN", "Denver", "Nuggets"),
    team("16", "Minnesota Timberwolves", "MIN", "Minnesota", "Timberwolves"),
    team("22", "Oklahoma City Thunder", "OKC", "Oklahoma City", "Thunder"),
    team("23", "Portland Trail Blazers", "POR", "Portland", "Trail Blazers"),
    team("26", "Utah Jazz", "UTA", "Utah", "Jazz"),
    team("9", "Golden State Warriors", "GSW", "Golden State", "Warriors"),
    team("12", "Los Angeles Clippers", "LAC", "Los Angeles", "Clippers"),
    team("13", "Los Angeles Lakers", "LAL", "Los Angeles", "Lakers"),
    team("21", "Phoenix Suns", "PHX", "Phoenix", "Suns"),
    team("23", "Sacramento Kings", "SAC", "Sacramento", "Kings"),
    team("6", "Dallas Mavericks", "DAL", "Dallas", "Mavericks"),
    team("10", "Houston Rockets", "HOU", "Houston", "Rockets"),
    team("29", "Memphis Grizzlies", "MEM", "Memphis", "Grizzlies"),
    team("3", "New Orleans Pelicans", "NOP", "New Orleans", "Pelicans"),
    team("24", "San Antonio Spurs", "SAS", "San Antonio", "Spurs"),
];

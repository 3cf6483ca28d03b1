//! Playoff picture derived from standings: groups are folded into conferences,
//! deduplicated by abbreviation and ordered by seed.
use crate::{
    PlayoffConference, PlayoffSeed, PlayoffStatus, PlayoffTeam, PlayoffsResponse, SeasonStatus,
    StandingsGroup, StandingsResponse, StandingsTeam,
};

/// Group name substrings mapped to a conference label. Case-sensitive, first hit wins.
const CONFERENCE_RULES: [(&[&str], &str); 4] = [
    (&["AFC", "American"], "AFC"),
    (&["NFC", "National"], "NFC"),
    (&["Eastern", "East"], "Eastern Conference"),
    (&["Western", "West"], "Western Conference"),
];

/// Build the playoff picture for a standings snapshot.
///
/// Season phase is not detected; the picture always reports the season as in progress.
pub fn playoff_picture(standings: StandingsResponse) -> PlayoffsResponse {
    PlayoffsResponse {
        league: standings.league,
        season: standings.season,
        status: SeasonStatus::InProgress,
        conferences: aggregate(&standings.groups),
    }
}

/// Fold standings groups into conferences in order of first appearance.
pub fn aggregate(groups: &[StandingsGroup]) -> Vec<PlayoffConference> {
    let mut conferences: Vec<PlayoffConference> = Vec::new();

    for group in groups {
        let label = conference_label(&group.name);
        let idx = match conferences.iter().position(|c| c.name == label) {
            Some(idx) => idx,
            None => {
                conferences.push(PlayoffConference { name: label, seeds: Vec::new() });
                conferences.len() - 1
            }
        };
        let seeds = &mut conferences[idx].seeds;

        for team in &group.teams {
            // Divisions and conferences overlap; keep the first sighting.
            if seeds.iter().any(|s| s.team.abbreviation == team.abbreviation) {
                continue;
            }
            let seed = team.playoff_seed.unwrap_or(seeds.len() as u32 + 1);
            seeds.push(PlayoffSeed {
                seed,
                team: PlayoffTeam {
                    name: team.name.clone(),
                    abbreviation: team.abbreviation.clone(),
                    record: record_line(team),
                },
                clinched: team.clinched.is_some(),
                status: classify(team.clinched.as_deref()),
            });
        }
    }

    for conference in &mut conferences {
        conference.seeds.sort_by_key(|s| s.seed);
    }
    conferences
}

pub fn conference_label(group_name: &str) -> String {
    CONFERENCE_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| group_name.contains(n)))
        .map(|(_, label)| (*label).to_owned())
        .unwrap_or_else(|| group_name.to_owned())
}

/// `y`/`z` clinched the division, `x` a wild card. Anything else, including an
/// elimination marker, is still reported as in the hunt.
fn classify(clinched: Option<&str>) -> PlayoffStatus {
    match clinched {
        Some("y") | Some("z") => PlayoffStatus::DivisionLeader,
        Some("x") => PlayoffStatus::WildCard,
        _ => PlayoffStatus::InHunt,
    }
}

fn record_line(team: &StandingsTeam) -> String {
    match team.ties {
        Some(ties) if ties > 0 => format!("{}-{}-{ties}", team.wins, team.losses),
        _ => format!("{}-{}", team.wins, team.losses),
    }
}

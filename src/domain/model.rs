use serde::{Deserialize, Serialize};

/// A roster entry. Field names follow the roster CSV headers; identity is the
/// team name, which must be unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "Town")]
    pub town: String,
    #[serde(rename = "Stadium")]
    pub stadium: String,
}

impl Team {
    pub fn new(
        name: impl Into<String>,
        town: impl Into<String>,
        stadium: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            town: town.into(),
            stadium: stadium.into(),
        }
    }
}

/// One scheduled match as emitted to consumers. Stadium and town are the home
/// team's. The serde renames reproduce the export column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledMatch {
    #[serde(rename = "Weekend")]
    pub weekend: u32,
    #[serde(rename = "Leg")]
    pub leg: u8,
    #[serde(rename = "Home Team")]
    pub home_team: String,
    #[serde(rename = "Away Team")]
    pub away_team: String,
    #[serde(rename = "Stadium")]
    pub stadium: String,
    #[serde(rename = "Town")]
    pub town: String,
}

/// A complete generated schedule: the roster it was built from and the match
/// list flattened in weekend order. Read-only once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    pub teams: Vec<Team>,
    pub matches: Vec<ScheduledMatch>,
    pub weekend_count: u32,
}

/// Output of the transform stage: the schedule, its advisory validation
/// result, and the rendered export payloads.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub fixtures: FixtureSet,
    pub violations: Vec<crate::core::validator::Violation>,
    pub csv_output: String,
    pub json_output: String,
}

use serde::{Deserialize, Serialize};

const STATIC_TEAMS_JSON: &str = include_str!("../data/teams.json");

/// League catalog entry. Venue and founding year are only known for the
/// clubs that also carry a match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamEntity {
    pub id: u32,
    pub name: String,
    pub short_name: String,
    pub venue: Option<String>,
    pub founded: Option<u16>,
}

pub struct TeamLoader;

impl TeamLoader {
    pub fn load() -> Vec<TeamEntity> {
        serde_json::from_str(STATIC_TEAMS_JSON).unwrap()
    }
}

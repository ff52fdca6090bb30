use core::TeamProfile;

const STATIC_TEAM_PROFILES_JSON: &str = include_str!("../data/team_profiles.json");

pub struct TeamProfileLoader;

impl TeamProfileLoader {
    pub fn load() -> Vec<TeamProfile> {
        serde_json::from_str(STATIC_TEAM_PROFILES_JSON).unwrap()
    }
}

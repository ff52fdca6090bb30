pub mod loaders;

use std::fmt::{Display, Formatter};

use core::{Player, TeamProfile, TeamRecord};
use log::debug;

pub use loaders::{PlayerEntity, PlayerLoader, TeamEntity, TeamLoader, TeamProfileLoader, TeamRecordLoader};

/// Everything the analyzers consume, loaded from the embedded catalogs.
pub struct Database {
    pub players: Vec<Player>,
    pub records: Vec<TeamRecord>,
    pub profiles: Vec<TeamProfile>,
    pub teams: Vec<TeamEntity>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    UnknownPlayer { id: u32 },
    UnknownProfile { name: String },
}

impl Display for DatabaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DatabaseError::UnknownPlayer { id } => {
                write!(f, "no player with id {} in the catalog", id)
            }
            DatabaseError::UnknownProfile { name } => {
                write!(f, "no scouting profile for team '{}'", name)
            }
        }
    }
}

impl std::error::Error for DatabaseError {}

impl Database {
    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Resolves catalog ids into a squad, in the order given. Fails on the
    /// first id with no catalog entry.
    pub fn squad(&self, ids: &[u32]) -> Result<Vec<Player>, DatabaseError> {
        ids.iter()
            .map(|&id| {
                self.player(id)
                    .cloned()
                    .ok_or(DatabaseError::UnknownPlayer { id })
            })
            .collect()
    }

    /// Match record for a team, case-insensitive on the name. Teams outside
    /// the tracked set get the stand-in record so any fixture can be scored.
    pub fn record(&self, name: &str) -> TeamRecord {
        match self
            .records
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
        {
            Some(record) => record.clone(),
            None => {
                debug!("no record for '{}', using fallback", name);
                TeamRecordLoader::fallback(name)
            }
        }
    }

    pub fn profile(&self, name: &str) -> Result<&TeamProfile, DatabaseError> {
        self.profiles
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DatabaseError::UnknownProfile {
                name: name.to_string(),
            })
    }

    /// Name or position-code search over the player catalog.
    pub fn search_players(&self, query: &str) -> Vec<&Player> {
        let query = query.to_lowercase();

        self.players
            .iter()
            .filter(|player| {
                player.name.to_lowercase().contains(&query)
                    || player.position.as_str().eq_ignore_ascii_case(&query)
            })
            .collect()
    }
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> Database {
        Database {
            players: PlayerLoader::load().into_iter().map(Player::from).collect(),
            records: TeamRecordLoader::load(),
            profiles: TeamProfileLoader::load(),
            teams: TeamLoader::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::PlayerPositionGroup;

    #[test]
    fn test_load_catalogs() {
        let database = DatabaseLoader::load();

        assert_eq!(database.players.len(), 20);
        assert_eq!(database.records.len(), 6);
        assert_eq!(database.profiles.len(), 3);
        assert_eq!(database.teams.len(), 20);
    }

    #[test]
    fn test_player_lookup() {
        let database = DatabaseLoader::load();

        let player = database.player(9).unwrap();
        assert_eq!(player.name, "Erling Haaland");
        assert_eq!(player.position, PlayerPositionGroup::Forward);
        assert_eq!(player.attributes.shooting, 94);

        assert!(database.player(999).is_none());
    }

    #[test]
    fn test_squad_resolution() {
        let database = DatabaseLoader::load();

        let squad = database.squad(&[1, 3, 6]).unwrap();
        assert_eq!(squad.len(), 3);
        assert_eq!(squad[1].name, "Virgil van Dijk");

        let err = database.squad(&[1, 999]).unwrap_err();
        assert_eq!(err, DatabaseError::UnknownPlayer { id: 999 });
        assert_eq!(err.to_string(), "no player with id 999 in the catalog");
    }

    #[test]
    fn test_record_fallback() {
        let database = DatabaseLoader::load();

        let tracked = database.record("manchester city");
        assert_eq!(tracked.goals_for, 45);

        let fallback = database.record("Luton Town");
        assert_eq!(fallback.name, "Luton Town");
        assert_eq!(fallback.wins, 6);
    }

    #[test]
    fn test_profile_lookup() {
        let database = DatabaseLoader::load();

        let profile = database.profile("Burnley").unwrap();
        assert_eq!(profile.midfield_physicality, 85);

        let err = database.profile("Everton").unwrap_err();
        assert_eq!(
            err.to_string(),
            "no scouting profile for team 'Everton'"
        );
    }

    #[test]
    fn test_player_search() {
        let database = DatabaseLoader::load();

        let by_name = database.search_players("salah");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 10);

        let by_position = database.search_players("gk");
        assert_eq!(by_position.len(), 3);
    }
}

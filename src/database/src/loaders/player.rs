use core::{Player, PlayerAttributes, PlayerPositionGroup};
use serde::Deserialize;

const STATIC_PLAYERS_JSON: &str = include_str!("../data/players.json");

#[derive(Deserialize)]
pub struct PlayerEntity {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionGroup,
    pub overall_rating: u8,
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
    pub dribbling: u8,
    pub physicality: u8,
    pub age: u8,
    pub market_value: u64,
    pub club: String,
}

impl From<PlayerEntity> for Player {
    fn from(entity: PlayerEntity) -> Player {
        Player {
            id: entity.id,
            name: entity.name,
            position: entity.position,
            overall_rating: entity.overall_rating,
            attributes: PlayerAttributes {
                pace: entity.pace,
                shooting: entity.shooting,
                passing: entity.passing,
                defending: entity.defending,
                dribbling: entity.dribbling,
                physicality: entity.physicality,
            },
            age: entity.age,
            market_value: entity.market_value,
            club: entity.club,
        }
    }
}

pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load() -> Vec<PlayerEntity> {
        serde_json::from_str(STATIC_PLAYERS_JSON).unwrap()
    }
}

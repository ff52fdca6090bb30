use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Position groups used to segment a squad for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerPositionGroup {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl PlayerPositionGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerPositionGroup::Goalkeeper => "GK",
            PlayerPositionGroup::Defender => "DEF",
            PlayerPositionGroup::Midfielder => "MID",
            PlayerPositionGroup::Forward => "FWD",
        }
    }
}

impl Display for PlayerPositionGroup {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outfield sub-attributes, 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub pace: u8,
    pub shooting: u8,
    pub passing: u8,
    pub defending: u8,
    pub dribbling: u8,
    pub physicality: u8,
}

/// A catalog player. Immutable once loaded; analysis never mutates players.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: PlayerPositionGroup,
    /// 0-100 composite rating, the main input to squad analysis.
    pub overall_rating: u8,
    pub attributes: PlayerAttributes,
    pub age: u8,
    /// Informational only, not used by any calculator.
    pub market_value: u64,
    pub club: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_group_as_str() {
        assert_eq!(PlayerPositionGroup::Goalkeeper.as_str(), "GK");
        assert_eq!(PlayerPositionGroup::Defender.as_str(), "DEF");
        assert_eq!(PlayerPositionGroup::Midfielder.as_str(), "MID");
        assert_eq!(PlayerPositionGroup::Forward.as_str(), "FWD");
    }

    #[test]
    fn test_position_group_serde_codes() {
        let json = serde_json::to_string(&PlayerPositionGroup::Midfielder).unwrap();
        assert_eq!(json, "\"MID\"");

        let parsed: PlayerPositionGroup = serde_json::from_str("\"FWD\"").unwrap();
        assert_eq!(parsed, PlayerPositionGroup::Forward);
    }
}

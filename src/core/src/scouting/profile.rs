use serde::{Deserialize, Serialize};

/// Unit-by-unit ratings for one team, 0-100 scale. This is the scouting
/// input shape: coarser than player data, finer than a single rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub midfield_passing: u8,
    pub midfield_buildup: u8,
    pub midfield_defense: u8,
    pub midfield_physicality: u8,
    pub defense_strength: u8,
    pub defense_pace: u8,
    pub attack_finishing: u8,
    pub attack_pace: u8,
    pub attack_creativity: u8,
    pub goalkeeping_quality: u8,
}

impl TeamProfile {
    /// All ten unit ratings, in report order.
    pub fn ratings(&self) -> [u8; 10] {
        [
            self.midfield_passing,
            self.midfield_buildup,
            self.midfield_defense,
            self.midfield_physicality,
            self.defense_strength,
            self.defense_pace,
            self.attack_finishing,
            self.attack_pace,
            self.attack_creativity,
            self.goalkeeping_quality,
        ]
    }

    /// Composite midfield rating used for formation advice.
    pub fn midfield_composite(&self) -> f32 {
        f32::from(
            u16::from(self.midfield_passing)
                + u16::from(self.midfield_buildup)
                + u16::from(self.midfield_defense),
        ) / 3.0
    }

    /// Composite attack rating used for formation advice.
    pub fn attack_composite(&self) -> f32 {
        f32::from(
            u16::from(self.attack_finishing)
                + u16::from(self.attack_pace)
                + u16::from(self.attack_creativity),
        ) / 3.0
    }

    /// Composite defense rating used for formation advice.
    pub fn defense_composite(&self) -> f32 {
        f32::from(u16::from(self.defense_strength) + u16::from(self.defense_pace)) / 2.0
    }
}

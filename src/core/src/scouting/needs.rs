use super::profile::TeamProfile;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// One suggested signing: the profile of player to chase and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecommendation {
    pub position: String,
    pub player_type: String,
    pub key_attributes: Vec<String>,
    pub reasoning: String,
    pub urgency: Urgency,
    pub suggested_players: Vec<String>,
}

impl PlayerRecommendation {
    fn new(
        position: &str,
        player_type: &str,
        key_attributes: [&str; 4],
        reasoning: &str,
        urgency: Urgency,
        suggested_players: [&str; 3],
    ) -> PlayerRecommendation {
        PlayerRecommendation {
            position: position.to_string(),
            player_type: player_type.to_string(),
            key_attributes: key_attributes.iter().map(|a| a.to_string()).collect(),
            reasoning: reasoning.to_string(),
            urgency,
            suggested_players: suggested_players.iter().map(|p| p.to_string()).collect(),
        }
    }
}

const CRITICAL_RATING: u8 = 50;
const CRITICAL_GOALKEEPING: u8 = 55;
const STRONG_UNIT: u8 = 75;
const SUPPORTING_UNIT: u8 = 70;
const UPGRADE_BAND_MIN: u8 = 60;
const UPGRADE_BAND_MAX: u8 = 75;
const BALANCED_SQUAD_RATING: u8 = 70;

pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Critical gaps: a unit rating at or below 50 (55 for goalkeeping),
    /// usually contrasted against a strong complementary unit. All are
    /// high urgency; rules fire independently and in a fixed order.
    pub fn priority_needs(profile: &TeamProfile) -> Vec<PlayerRecommendation> {
        let mut needs = Vec::new();

        if profile.midfield_defense <= CRITICAL_RATING
            && (profile.midfield_passing >= STRONG_UNIT || profile.midfield_buildup >= STRONG_UNIT)
        {
            needs.push(PlayerRecommendation::new(
                "Defensive Midfielder",
                "Box-to-Box Destroyer",
                ["Tackling", "Interceptions", "Physicality", "Work Rate"],
                "Your midfield excels at passing and buildup but lacks defensive protection. \
                 A defensive midfielder would provide the shield your creative players need.",
                Urgency::High,
                ["Declan Rice", "Casemiro", "Fabinho"],
            ));
        }

        if profile.midfield_physicality <= CRITICAL_RATING && profile.midfield_passing >= STRONG_UNIT {
            needs.push(PlayerRecommendation::new(
                "Central Midfielder",
                "Physical Presence",
                ["Physicality", "Aerial Ability", "Stamina", "Passing"],
                "Your midfield has excellent technical ability but lacks the physical presence \
                 to compete in intense matches.",
                Urgency::High,
                ["Yves Bissouma", "Moises Caicedo", "Tyler Adams"],
            ));
        }

        if profile.defense_pace <= CRITICAL_RATING && profile.attack_pace >= STRONG_UNIT {
            needs.push(PlayerRecommendation::new(
                "Centre-Back",
                "Pacey Defender",
                ["Pace", "Recovery Speed", "Positioning", "Passing"],
                "Your attacking pace creates opportunities but your slow defense is vulnerable \
                 to counter-attacks.",
                Urgency::High,
                ["Josko Gvardiol", "Alessandro Bastoni", "Jurrien Timber"],
            ));
        }

        if profile.defense_strength <= CRITICAL_RATING {
            needs.push(PlayerRecommendation::new(
                "Centre-Back",
                "Defensive Leader",
                ["Defending", "Aerial Ability", "Leadership", "Positioning"],
                "Your defense lacks the fundamental strength and organization needed for \
                 Premier League competition.",
                Urgency::High,
                ["Virgil van Dijk", "Ruben Dias", "William Saliba"],
            ));
        }

        if profile.attack_finishing <= CRITICAL_RATING
            && (profile.attack_creativity >= SUPPORTING_UNIT
                || profile.midfield_passing >= SUPPORTING_UNIT)
        {
            needs.push(PlayerRecommendation::new(
                "Striker",
                "Clinical Finisher",
                ["Finishing", "Positioning", "Composure", "Movement"],
                "Your team creates chances but lacks a reliable finisher to convert them into \
                 goals.",
                Urgency::High,
                ["Erling Haaland", "Harry Kane", "Ivan Toney"],
            ));
        }

        if profile.goalkeeping_quality <= CRITICAL_GOALKEEPING {
            needs.push(PlayerRecommendation::new(
                "Goalkeeper",
                "Reliable Shot-Stopper",
                ["Shot Stopping", "Distribution", "Command of Area", "Consistency"],
                "Goalkeeping inconsistency is costing points. A reliable keeper would provide \
                 the foundation for defensive stability.",
                Urgency::High,
                ["Alisson Becker", "Ederson", "Aaron Ramsdale"],
            ));
        }

        needs
    }

    /// Upgrade opportunities: serviceable units in the 60-75 band, plus a
    /// depth suggestion for already balanced squads.
    pub fn secondary_needs(profile: &TeamProfile, overall_balance: u8) -> Vec<PlayerRecommendation> {
        let mut needs = Vec::new();

        if (UPGRADE_BAND_MIN..=UPGRADE_BAND_MAX).contains(&profile.midfield_passing) {
            needs.push(PlayerRecommendation::new(
                "Central Midfielder",
                "Deep-Lying Playmaker",
                ["Passing", "Vision", "Ball Retention", "Positioning"],
                "Upgrading your midfield passing would improve overall team fluidity and control.",
                Urgency::Medium,
                ["Rodri", "Jorginho", "Thiago Alcantara"],
            ));
        }

        if (UPGRADE_BAND_MIN..=UPGRADE_BAND_MAX).contains(&profile.attack_creativity) {
            needs.push(PlayerRecommendation::new(
                "Attacking Midfielder/Winger",
                "Creative Playmaker",
                ["Creativity", "Dribbling", "Passing", "Pace"],
                "Additional creativity would unlock more scoring opportunities and improve \
                 attacking variety.",
                Urgency::Medium,
                ["Kevin De Bruyne", "Bruno Fernandes", "Martin Odegaard"],
            ));
        }

        if (UPGRADE_BAND_MIN..=UPGRADE_BAND_MAX).contains(&profile.attack_pace) {
            needs.push(PlayerRecommendation::new(
                "Winger",
                "Pacey Wide Player",
                ["Pace", "Dribbling", "Crossing", "Direct Running"],
                "Adding pace on the wings would stretch defenses and create more space for \
                 central players.",
                Urgency::Medium,
                ["Mohamed Salah", "Bukayo Saka", "Luis Diaz"],
            ));
        }

        if overall_balance >= BALANCED_SQUAD_RATING {
            needs.push(PlayerRecommendation::new(
                "Utility Player",
                "Versatile Squad Player",
                ["Versatility", "Work Rate", "Consistency", "Team Player"],
                "Your squad has good balance but could benefit from versatile players for \
                 rotation and tactical flexibility.",
                Urgency::Low,
                ["James Milner", "Oleksandr Zinchenko", "Emile Smith Rowe"],
            ));
        }

        needs
    }
}

use super::profile::TeamProfile;

pub const BALANCED_DEVELOPMENT_FALLBACK: &str = "Focus on balanced team development";

pub struct TacticsAdvisor;

impl TacticsAdvisor {
    /// Formation advice from composite unit strengths, strongest claim
    /// first: possession football needs midfield and attack, a back five
    /// needs defensive quality, and so on down to the cautious default.
    pub fn recommend_formation(profile: &TeamProfile) -> &'static str {
        let midfield = profile.midfield_composite();
        let attack = profile.attack_composite();
        let defense = profile.defense_composite();

        if midfield >= 75.0 && attack >= 70.0 {
            "4-3-3 (Possession-based)"
        } else if defense >= 75.0 && profile.midfield_defense >= 70 {
            "5-3-2 (Defensive Stability)"
        } else if attack >= 75.0 {
            "4-2-3-1 (Attack-minded)"
        } else if midfield >= 70.0 {
            "4-4-2 (Balanced)"
        } else {
            "5-4-1 (Defensive)"
        }
    }

    /// Trigger-based coaching pointers; falls back to a single generic
    /// suggestion when no unit stands out either way.
    pub fn tactical_suggestions(profile: &TeamProfile) -> Vec<String> {
        let mut suggestions = Vec::new();

        if profile.midfield_passing >= 75 {
            suggestions
                .push("Focus on possession-based football to utilize your passing strengths".to_string());
        }

        if profile.attack_pace >= 75 {
            suggestions.push("Implement quick counter-attacking strategies".to_string());
        }

        if profile.defense_strength >= 75 {
            suggestions.push("Use a high defensive line to compress the game".to_string());
        }

        if profile.midfield_defense <= 60 {
            suggestions.push(
                "Consider playing with two defensive midfielders for extra protection".to_string(),
            );
        }

        if profile.attack_creativity <= 60 {
            suggestions
                .push("Focus on set-piece situations to create scoring opportunities".to_string());
        }

        if profile.midfield_physicality >= 75 {
            suggestions.push("Use direct, physical play to dominate midfield battles".to_string());
        }

        if suggestions.is_empty() {
            suggestions.push(BALANCED_DEVELOPMENT_FALLBACK.to_string());
        }

        suggestions
    }
}

use super::analysis::{TeamAnalysis, TeamBalanceAnalyzer};
use super::needs::{PlayerRecommendation, RecommendationEngine};
use super::profile::TeamProfile;
use super::tactics::TacticsAdvisor;
use log::debug;
use serde::Serialize;

/// Complete scouting report for one team profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoutReport {
    pub priority_needs: Vec<PlayerRecommendation>,
    pub secondary_needs: Vec<PlayerRecommendation>,
    pub team_analysis: TeamAnalysis,
    pub recommended_formation: String,
    pub tactical_suggestions: Vec<String>,
}

pub struct ScoutAnalyzer;

impl ScoutAnalyzer {
    /// Build the full report: unit analysis, transfer targets ordered by
    /// urgency, then formation and tactical advice.
    pub fn generate(profile: &TeamProfile) -> ScoutReport {
        let team_analysis = TeamBalanceAnalyzer::analyze(profile);

        debug!(
            "scouted {}: balance {}, {} strengths, {} weaknesses",
            profile.name,
            team_analysis.overall_balance,
            team_analysis.strengths.len(),
            team_analysis.weaknesses.len()
        );

        ScoutReport {
            priority_needs: RecommendationEngine::priority_needs(profile),
            secondary_needs: RecommendationEngine::secondary_needs(
                profile,
                team_analysis.overall_balance,
            ),
            recommended_formation: TacticsAdvisor::recommend_formation(profile).to_string(),
            tactical_suggestions: TacticsAdvisor::tactical_suggestions(profile),
            team_analysis,
        }
    }
}

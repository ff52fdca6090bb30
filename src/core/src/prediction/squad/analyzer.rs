use super::balance::BalanceCalculator;
use super::narrative::NarrativeGenerator;
use super::placement::{PlacementMapper, PositionRange};
use super::rating::RatingAggregator;
use super::validator::{SquadError, SquadValidator};
use crate::club::Player;
use log::debug;
use serde::Serialize;

/// Rounded balance scores as they appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquadBalanceReport {
    pub attack: u8,
    pub midfield: u8,
    pub defense: u8,
    pub goalkeeping: u8,
}

/// Full squad analysis. All numeric fields are rounded integers clamped to
/// their documented ranges; every field serializes to plain JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquadAnalysis {
    pub overall_rating: u8,
    pub predicted_position: u8,
    pub position_range: PositionRange,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub squad_balance: SquadBalanceReport,
    pub confidence: u8,
}

pub struct SquadAnalyzer;

impl SquadAnalyzer {
    /// Validate the squad, then run balance, rating, placement and
    /// narrative generation. Pure and deterministic: the same squad in the
    /// same order always produces an identical analysis.
    pub fn analyze(players: &[Player]) -> Result<SquadAnalysis, SquadError> {
        SquadValidator::validate(players)?;

        let balance = BalanceCalculator::calculate(players);
        let overall_rating = RatingAggregator::aggregate(players, &balance);
        let predicted_position = PlacementMapper::predict(overall_rating);

        debug!(
            "analyzed squad of {}: rating {:.2}, predicted position {}",
            players.len(),
            overall_rating,
            predicted_position
        );

        Ok(SquadAnalysis {
            overall_rating: overall_rating.round() as u8,
            predicted_position,
            position_range: PlacementMapper::range(predicted_position),
            strengths: NarrativeGenerator::strengths(&balance, players),
            weaknesses: NarrativeGenerator::weaknesses(&balance, players),
            squad_balance: SquadBalanceReport {
                attack: balance.attack.round() as u8,
                midfield: balance.midfield.round() as u8,
                defense: balance.defense.round() as u8,
                goalkeeping: balance.goalkeeping.round() as u8,
            },
            confidence: NarrativeGenerator::confidence(&balance, players).round() as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::squad::test_support::{player, squad_of_eleven};
    use crate::club::PlayerPositionGroup::*;

    #[test]
    fn test_flat_seventy_five_squad() {
        let squad = squad_of_eleven(75, 26);
        let analysis = SquadAnalyzer::analyze(&squad).unwrap();

        assert_eq!(analysis.squad_balance.goalkeeping, 75);
        assert_eq!(analysis.squad_balance.defense, 75);
        assert_eq!(analysis.squad_balance.midfield, 75);
        assert_eq!(analysis.squad_balance.attack, 75);
        // 75 weighted + 0 depth + 2 peak age.
        assert_eq!(analysis.overall_rating, 77);
        assert_eq!(analysis.predicted_position, 10);
    }

    #[test]
    fn test_validation_failure_stops_analysis() {
        let squad = vec![player(1, Goalkeeper, 90, 25)];
        assert_eq!(
            SquadAnalyzer::analyze(&squad),
            Err(SquadError::TooFew { size: 1 })
        );
    }

    #[test]
    fn test_elite_deep_squad_predicted_champions() {
        let mut squad = squad_of_eleven(90, 26);
        for id in 100..114 {
            squad.push(player(id, Midfielder, 90, 26));
        }
        assert_eq!(squad.len(), 25);

        let analysis = SquadAnalyzer::analyze(&squad).unwrap();
        assert_eq!(analysis.predicted_position, 1);
        assert_eq!(analysis.position_range.best_case, 1);
        assert_eq!(analysis.position_range.worst_case, 4);
        // Uniform 90s sit far from the ideal balance of 75, so the
        // variance term bottoms out at -10; depth and peak age add 5 each.
        assert_eq!(analysis.confidence, 70);
    }

    #[test]
    fn test_squad_depth_raises_confidence() {
        let eleven = squad_of_eleven(90, 26);
        let shallow = SquadAnalyzer::analyze(&eleven).unwrap();

        let mut deep = squad_of_eleven(90, 26);
        for id in 100..114 {
            deep.push(player(id, Midfielder, 90, 26));
        }
        let full = SquadAnalyzer::analyze(&deep).unwrap();

        // Same ratings and age either way: only the depth terms differ,
        // -5 below fourteen players against +5 at twenty or more.
        assert_eq!(full.confidence, shallow.confidence + 10);
    }

    #[test]
    fn test_output_ranges_hold() {
        let squads = [
            squad_of_eleven(1, 18),
            squad_of_eleven(50, 29),
            squad_of_eleven(99, 38),
        ];

        for squad in &squads {
            let analysis = SquadAnalyzer::analyze(squad).unwrap();

            assert!((40..=95).contains(&analysis.overall_rating));
            assert!((50..=95).contains(&analysis.confidence));
            assert!([1, 2, 4, 7, 10, 13, 16, 19].contains(&analysis.predicted_position));
            assert!(analysis.position_range.best_case >= 1);
            assert!(analysis.position_range.worst_case <= 20);
            assert!(analysis.position_range.best_case <= analysis.predicted_position);
            assert!(analysis.predicted_position <= analysis.position_range.worst_case);
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let squad = squad_of_eleven(82, 27);

        let first = SquadAnalyzer::analyze(&squad).unwrap();
        let second = SquadAnalyzer::analyze(&squad).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_weak_goalkeeper_flagged_in_weaknesses() {
        let mut squad = squad_of_eleven(75, 26);
        squad.retain(|p| p.position != Goalkeeper);
        squad.push(player(50, Goalkeeper, 40, 26));

        let analysis = SquadAnalyzer::analyze(&squad).unwrap();
        assert!(analysis
            .weaknesses
            .contains(&"Goalkeeper concerns".to_string()));
        assert_eq!(analysis.squad_balance.goalkeeping, 40);
    }

    #[test]
    fn test_analysis_serializes_to_plain_json() {
        let squad = squad_of_eleven(75, 26);
        let analysis = SquadAnalyzer::analyze(&squad).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&analysis).unwrap()).unwrap();

        assert_eq!(json["overall_rating"], 77);
        assert_eq!(json["position_range"]["best_case"], 7);
        assert!(json["strengths"].is_array());
    }
}

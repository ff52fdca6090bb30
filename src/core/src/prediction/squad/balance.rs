use crate::club::{Player, PlayerPositionGroup};
use itertools::Itertools;

/// How many of the best players count towards each positional score.
pub const GOALKEEPER_SLOTS: usize = 1;
pub const DEFENDER_SLOTS: usize = 4;
pub const MIDFIELDER_SLOTS: usize = 4;
pub const FORWARD_SLOTS: usize = 3;

/// Neutral score for a position group with no players. Validation rules
/// this out for analyzed squads.
const EMPTY_GROUP_SCORE: f32 = 50.0;

/// Derived positional-group scores, unrounded. Computed fresh for every
/// analysis, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquadBalance {
    pub goalkeeping: f32,
    pub defense: f32,
    pub midfield: f32,
    pub attack: f32,
}

impl SquadBalance {
    /// Group scores in report order: attack, defense, midfield, goalkeeping.
    pub fn in_report_order(&self) -> [f32; 4] {
        [self.attack, self.defense, self.midfield, self.goalkeeping]
    }
}

pub struct BalanceCalculator;

impl BalanceCalculator {
    pub fn calculate(players: &[Player]) -> SquadBalance {
        SquadBalance {
            goalkeeping: group_score(players, PlayerPositionGroup::Goalkeeper, GOALKEEPER_SLOTS),
            defense: group_score(players, PlayerPositionGroup::Defender, DEFENDER_SLOTS),
            midfield: group_score(players, PlayerPositionGroup::Midfielder, MIDFIELDER_SLOTS),
            attack: group_score(players, PlayerPositionGroup::Forward, FORWARD_SLOTS),
        }
    }
}

/// Mean `overall_rating` of the best `slots` players in a position group.
/// The sort is stable, so equally rated players keep their squad order.
fn group_score(players: &[Player], group: PlayerPositionGroup, slots: usize) -> f32 {
    let selected: Vec<&Player> = players
        .iter()
        .filter(|p| p.position == group)
        .sorted_by(|a, b| b.overall_rating.cmp(&a.overall_rating))
        .take(slots)
        .collect();

    if selected.is_empty() {
        return EMPTY_GROUP_SCORE;
    }

    let total: u32 = selected.iter().map(|p| u32::from(p.overall_rating)).sum();

    total as f32 / selected.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::squad::test_support::{player, squad_of_eleven};
    use crate::club::PlayerPositionGroup::*;

    #[test]
    fn test_flat_squad_scores_flat_balance() {
        let balance = BalanceCalculator::calculate(&squad_of_eleven(75, 26));

        assert_eq!(balance.goalkeeping, 75.0);
        assert_eq!(balance.defense, 75.0);
        assert_eq!(balance.midfield, 75.0);
        assert_eq!(balance.attack, 75.0);
    }

    #[test]
    fn test_only_top_rated_players_count() {
        let mut squad = squad_of_eleven(70, 26);
        // A fifth defender rated far above the cap of four must displace
        // the weakest selected defender, not be averaged on top.
        squad.push(player(30, Defender, 90, 27));

        let balance = BalanceCalculator::calculate(&squad);
        assert_eq!(balance.defense, (90.0 + 70.0 + 70.0 + 70.0) / 4.0);
    }

    #[test]
    fn test_goalkeeping_uses_single_best_keeper() {
        let mut squad = squad_of_eleven(70, 26);
        squad.push(player(31, Goalkeeper, 88, 29));

        let balance = BalanceCalculator::calculate(&squad);
        assert_eq!(balance.goalkeeping, 88.0);
    }

    #[test]
    fn test_empty_group_defaults_to_neutral_score() {
        // Bypasses validation on purpose to reach the empty-group default.
        let squad = vec![player(1, Forward, 80, 24)];
        let balance = BalanceCalculator::calculate(&squad);

        assert_eq!(balance.goalkeeping, 50.0);
        assert_eq!(balance.defense, 50.0);
        assert_eq!(balance.midfield, 50.0);
        assert_eq!(balance.attack, 80.0);
    }

    #[test]
    fn test_tie_break_keeps_squad_order() {
        let squad = vec![
            player(1, Goalkeeper, 70, 30),
            player(2, Goalkeeper, 70, 22),
        ];

        let balance = BalanceCalculator::calculate(&squad);
        // Both keepers are rated 70; either way the score is 70, and the
        // stable sort guarantees the first-listed keeper is the one chosen.
        assert_eq!(balance.goalkeeping, 70.0);
    }
}

use super::balance::SquadBalance;
use super::mean_age;
use crate::club::Player;

const GOALKEEPING_WEIGHT: f32 = 0.15;
const DEFENSE_WEIGHT: f32 = 0.30;
const MIDFIELD_WEIGHT: f32 = 0.30;
const ATTACK_WEIGHT: f32 = 0.25;

pub const MIN_OVERALL_RATING: f32 = 40.0;
pub const MAX_OVERALL_RATING: f32 = 95.0;

const MAX_DEPTH_BONUS: f32 = 5.0;
const DEPTH_BONUS_PER_PLAYER: f32 = 0.5;

const PEAK_AGE_MIN: f32 = 24.0;
const PEAK_AGE_MAX: f32 = 30.0;

pub struct RatingAggregator;

impl RatingAggregator {
    /// Combine the four balance scores with squad depth and age adjustments
    /// into one overall rating, clamped to [40, 95].
    ///
    /// The value stays unrounded here: the placement mapper works on the
    /// exact rating, and rounding to an integer happens only at the
    /// analysis boundary.
    pub fn aggregate(players: &[Player], balance: &SquadBalance) -> f32 {
        let weighted = balance.goalkeeping * GOALKEEPING_WEIGHT
            + balance.defense * DEFENSE_WEIGHT
            + balance.midfield * MIDFIELD_WEIGHT
            + balance.attack * ATTACK_WEIGHT;

        let rating = weighted + depth_bonus(players.len()) + age_bonus(mean_age(players));

        rating.clamp(MIN_OVERALL_RATING, MAX_OVERALL_RATING)
    }
}

/// Every player beyond the starting eleven is worth half a point, up to +5.
fn depth_bonus(squad_size: usize) -> f32 {
    ((squad_size as f32 - 11.0) * DEPTH_BONUS_PER_PLAYER).min(MAX_DEPTH_BONUS)
}

/// Peak-years squads get the full bump, young squads half of it, and
/// ageing squads lose a point.
fn age_bonus(avg_age: f32) -> f32 {
    if (PEAK_AGE_MIN..=PEAK_AGE_MAX).contains(&avg_age) {
        2.0
    } else if avg_age < PEAK_AGE_MIN {
        1.0
    } else {
        -1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::squad::test_support::{player, squad_of_eleven};
    use crate::club::PlayerPositionGroup::*;
    use crate::prediction::squad::BalanceCalculator;

    #[test]
    fn test_flat_squad_at_peak_age() {
        let squad = squad_of_eleven(75, 26);
        let balance = BalanceCalculator::calculate(&squad);

        // Weighted sum of four 75s is 75; no depth bonus at eleven players;
        // +2 for a mean age inside the peak band.
        let rating = RatingAggregator::aggregate(&squad, &balance);
        assert_eq!(rating, 77.0);
    }

    #[test]
    fn test_young_squad_gets_half_bonus() {
        let squad = squad_of_eleven(75, 21);
        let balance = BalanceCalculator::calculate(&squad);

        assert_eq!(RatingAggregator::aggregate(&squad, &balance), 76.0);
    }

    #[test]
    fn test_old_squad_loses_a_point() {
        let squad = squad_of_eleven(75, 33);
        let balance = BalanceCalculator::calculate(&squad);

        assert_eq!(RatingAggregator::aggregate(&squad, &balance), 74.0);
    }

    #[test]
    fn test_depth_bonus_caps_at_five() {
        assert_eq!(depth_bonus(11), 0.0);
        assert_eq!(depth_bonus(15), 2.0);
        assert_eq!(depth_bonus(21), 5.0);
        assert_eq!(depth_bonus(25), 5.0);
    }

    #[test]
    fn test_rating_clamped_to_range() {
        let mut weak = squad_of_eleven(10, 35);
        weak.truncate(11);
        let weak_balance = BalanceCalculator::calculate(&weak);
        assert_eq!(RatingAggregator::aggregate(&weak, &weak_balance), 40.0);

        let mut strong = squad_of_eleven(99, 26);
        for id in 50..60 {
            strong.push(player(id, Midfielder, 99, 26));
        }
        let strong_balance = BalanceCalculator::calculate(&strong);
        assert_eq!(RatingAggregator::aggregate(&strong, &strong_balance), 95.0);
    }
}

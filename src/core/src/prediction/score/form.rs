use serde::{Deserialize, Serialize};

/// Result of one past match, from the team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "D")]
    Draw,
    #[serde(rename = "L")]
    Loss,
}

impl MatchOutcome {
    fn points(&self) -> f32 {
        match self {
            MatchOutcome::Win => 3.0,
            MatchOutcome::Draw => 1.0,
            MatchOutcome::Loss => 0.0,
        }
    }
}

/// Weights for the last five results, most recent first.
const FORM_WEIGHTS: [f32; 5] = [0.4, 0.3, 0.2, 0.1, 0.05];

pub const MIN_FORM_FACTOR: f32 = 0.5;
pub const MAX_FORM_FACTOR: f32 = 1.5;

/// Recent-form multiplier: weighted points over the last five results,
/// normalized against a full-wins run and clamped to [0.5, 1.5].
pub fn form_factor(form: &[MatchOutcome]) -> f32 {
    let score: f32 = form
        .iter()
        .take(FORM_WEIGHTS.len())
        .enumerate()
        .map(|(index, outcome)| outcome.points() * FORM_WEIGHTS[index])
        .sum();

    (score / 3.0).clamp(MIN_FORM_FACTOR, MAX_FORM_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::MatchOutcome::*;
    use super::*;

    #[test]
    fn test_all_wins_is_not_above_cap() {
        // 3 * (0.4 + 0.3 + 0.2 + 0.1 + 0.05) / 3 = 1.05
        let factor = form_factor(&[Win, Win, Win, Win, Win]);
        assert!((factor - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_all_losses_hits_floor() {
        assert_eq!(form_factor(&[Loss, Loss, Loss, Loss, Loss]), MIN_FORM_FACTOR);
    }

    #[test]
    fn test_recent_results_weigh_more() {
        // Mostly-win runs keep both factors above the 0.5 floor, so the
        // position of the single draw is what moves the result.
        let draw_was_long_ago = form_factor(&[Win, Win, Win, Win, Draw]);
        let draw_was_latest = form_factor(&[Draw, Win, Win, Win, Win]);

        // (3*(0.4+0.3+0.2+0.1) + 0.05) / 3 vs (0.4 + 3*(0.3+0.2+0.1+0.05)) / 3
        assert!((draw_was_long_ago - 3.05 / 3.0).abs() < 1e-6);
        assert!((draw_was_latest - 2.35 / 3.0).abs() < 1e-6);
        assert!(draw_was_long_ago > draw_was_latest);
    }

    #[test]
    fn test_extra_results_beyond_five_are_ignored() {
        let five = form_factor(&[Win, Win, Draw, Win, Win]);
        let seven = form_factor(&[Win, Win, Draw, Win, Win, Loss, Loss]);
        assert_eq!(five, seven);
    }

    #[test]
    fn test_short_form_is_accepted() {
        assert_eq!(form_factor(&[]), MIN_FORM_FACTOR);
        let factor = form_factor(&[Win, Draw]);
        assert!((MIN_FORM_FACTOR..=MAX_FORM_FACTOR).contains(&factor));
    }
}

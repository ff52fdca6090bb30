use serde::Serialize;

/// Outcome probabilities in whole percentages. Components are rounded
/// independently, so the sum can land on 99-101.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WinProbability {
    pub home: u8,
    pub draw: u8,
    pub away: u8,
}

const HOME_AWAY_FLOOR: f32 = 5.0;
const HOME_AWAY_CEILING: f32 = 80.0;
const DRAW_FLOOR: f32 = 10.0;
const DRAW_CEILING: f32 = 50.0;

impl WinProbability {
    /// Heuristic probabilities from the predicted scoreline: the leading
    /// side starts at 60% and gains 10% per goal of margin, the trailing
    /// side loses 5% per goal, level scorelines favour the draw.
    pub fn from_scores(home_score: u8, away_score: u8) -> WinProbability {
        let (mut home, mut draw, mut away): (f32, f32, f32) = if home_score > away_score {
            let margin = f32::from(home_score - away_score);
            (60.0 + margin * 10.0, 25.0, 15.0 - margin * 5.0)
        } else if away_score > home_score {
            let margin = f32::from(away_score - home_score);
            (15.0 - margin * 5.0, 25.0, 60.0 + margin * 10.0)
        } else {
            (30.0, 40.0, 30.0)
        };

        home = home.clamp(HOME_AWAY_FLOOR, HOME_AWAY_CEILING);
        away = away.clamp(HOME_AWAY_FLOOR, HOME_AWAY_CEILING);
        draw = draw.clamp(DRAW_FLOOR, DRAW_CEILING);

        let total = home + draw + away;

        WinProbability {
            home: (home / total * 100.0).round() as u8,
            draw: (draw / total * 100.0).round() as u8,
            away: (away / total * 100.0).round() as u8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_scoreline() {
        let probability = WinProbability::from_scores(1, 1);
        assert_eq!(probability.home, 30);
        assert_eq!(probability.draw, 40);
        assert_eq!(probability.away, 30);
    }

    #[test]
    fn test_one_goal_home_margin() {
        // 70 / 25 / 10 before normalization, total 105.
        let probability = WinProbability::from_scores(2, 1);
        assert_eq!(probability.home, 67);
        assert_eq!(probability.draw, 24);
        assert_eq!(probability.away, 10);
    }

    #[test]
    fn test_blowout_respects_bounds() {
        let probability = WinProbability::from_scores(5, 0);
        // 80 / 25 / 5 after clamping, total 110.
        assert_eq!(probability.home, 73);
        assert_eq!(probability.draw, 23);
        assert_eq!(probability.away, 5);
    }

    #[test]
    fn test_symmetry() {
        let home_win = WinProbability::from_scores(3, 1);
        let away_win = WinProbability::from_scores(1, 3);
        assert_eq!(home_win.home, away_win.away);
        assert_eq!(home_win.away, away_win.home);
        assert_eq!(home_win.draw, away_win.draw);
    }

    #[test]
    fn test_components_sum_close_to_hundred() {
        for home in 0..=5u8 {
            for away in 0..=5u8 {
                let p = WinProbability::from_scores(home, away);
                let total = u16::from(p.home) + u16::from(p.draw) + u16::from(p.away);
                assert!((99..=101).contains(&total), "{}-{} -> {}", home, away, total);
            }
        }
    }
}

use super::form::{form_factor, MatchOutcome};
use super::probability::WinProbability;
use log::debug;
use serde::{Deserialize, Serialize};

/// Season record for one team, as kept in the static database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub goals_for: u32,
    pub goals_against: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Last five results, most recent first.
    pub form: Vec<MatchOutcome>,
}

impl TeamRecord {
    pub fn matches_played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Goals scored per match. A record with no matches played contributes
    /// nothing rather than dividing by zero.
    fn attack_strength(&self) -> f32 {
        match self.matches_played() {
            0 => 0.0,
            played => self.goals_for as f32 / played as f32,
        }
    }

    /// Goals conceded per match, with the same zero-match guard.
    fn defense_strength(&self) -> f32 {
        match self.matches_played() {
            0 => 0.0,
            played => self.goals_against as f32 / played as f32,
        }
    }
}

/// Relative boost applied to the home side's attack and defense terms.
const HOME_ADVANTAGE: f32 = 0.3;

/// Predicted scores are capped at a realistic maximum.
const MAX_PREDICTED_GOALS: f32 = 5.0;

const BASE_CONFIDENCE: f32 = 75.0;
const MIN_CONFIDENCE: f32 = 60.0;
const MAX_CONFIDENCE: f32 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePrediction {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub confidence: u8,
    pub win_probability: WinProbability,
}

pub struct MatchScorePredictor;

impl MatchScorePredictor {
    /// Predict a scoreline from two season records: per-match scoring and
    /// conceding rates scaled by recent form and home advantage, with goal
    /// expectations clamped to [0, 5] before rounding.
    pub fn predict(home: &TeamRecord, away: &TeamRecord) -> ScorePrediction {
        let home_form = form_factor(&home.form);
        let away_form = form_factor(&away.form);

        let home_goals = (home.attack_strength() * (1.0 + HOME_ADVANTAGE) * home_form
            - away.defense_strength() * away_form)
            .max(0.0);

        let away_goals = (away.attack_strength() * away_form
            - home.defense_strength() * (1.0 + HOME_ADVANTAGE) * home_form)
            .max(0.0);

        let home_score = home_goals.min(MAX_PREDICTED_GOALS).round() as u8;
        let away_score = away_goals.min(MAX_PREDICTED_GOALS).round() as u8;

        debug!(
            "{} vs {}: expected goals {:.2} - {:.2}, form {:.2} / {:.2}",
            home.name, away.name, home_goals, away_goals, home_form, away_form
        );

        let confidence = (BASE_CONFIDENCE + (home_form + away_form) * 10.0)
            .clamp(MIN_CONFIDENCE, MAX_CONFIDENCE);

        ScorePrediction {
            home_team: home.name.clone(),
            away_team: away.name.clone(),
            home_score,
            away_score,
            confidence: confidence.round() as u8,
            win_probability: WinProbability::from_scores(home_score, away_score),
        }
    }
}

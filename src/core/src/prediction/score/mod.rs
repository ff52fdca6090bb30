mod form;
mod predictor;
mod probability;

pub use form::{form_factor, MatchOutcome};
pub use predictor::{MatchScorePredictor, ScorePrediction, TeamRecord};
pub use probability::WinProbability;

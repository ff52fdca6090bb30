mod analyzer;
mod balance;
mod narrative;
mod placement;
mod rating;
mod validator;

pub use analyzer::{SquadAnalysis, SquadAnalyzer, SquadBalanceReport};
pub use balance::{BalanceCalculator, SquadBalance};
pub use narrative::NarrativeGenerator;
pub use placement::{PlacementMapper, PositionRange, LEAGUE_SIZE};
pub use rating::RatingAggregator;
pub use validator::{SquadError, SquadValidator, MAX_SQUAD_SIZE, MIN_SQUAD_SIZE};

use crate::club::Player;

/// Mean age across the squad; zero for an empty slice so downstream
/// arithmetic never sees NaN.
pub(crate) fn mean_age(players: &[Player]) -> f32 {
    if players.is_empty() {
        return 0.0;
    }

    players.iter().map(|p| f32::from(p.age)).sum::<f32>() / players.len() as f32
}

/// Mean pace attribute across the squad, with the same empty-slice guard.
pub(crate) fn mean_pace(players: &[Player]) -> f32 {
    if players.is_empty() {
        return 0.0;
    }

    players.iter().map(|p| f32::from(p.attributes.pace)).sum::<f32>() / players.len() as f32
}

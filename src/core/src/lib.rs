pub mod club;
pub mod prediction;
pub mod scouting;
pub mod utils;

// Re-export club items
pub use club::{find_formation, Formation, FormationShape, Player, PlayerAttributes, PlayerPositionGroup, FORMATIONS};

// Re-export prediction items
pub use prediction::score::{form_factor, MatchOutcome, MatchScorePredictor, ScorePrediction, TeamRecord, WinProbability};
pub use prediction::squad::{
    BalanceCalculator, NarrativeGenerator, PlacementMapper, PositionRange, RatingAggregator,
    SquadAnalysis, SquadAnalyzer, SquadBalance, SquadBalanceReport, SquadError, SquadValidator,
    LEAGUE_SIZE, MAX_SQUAD_SIZE, MIN_SQUAD_SIZE,
};

// Re-export scouting items
pub use scouting::{
    PlayerRecommendation, RecommendationEngine, ScoutAnalyzer, ScoutReport, TacticsAdvisor,
    TeamAnalysis, TeamBalanceAnalyzer, TeamProfile, Urgency,
};

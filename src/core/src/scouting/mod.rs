mod analysis;
mod needs;
mod profile;
mod report;
mod tactics;

pub use analysis::{TeamAnalysis, TeamBalanceAnalyzer};
pub use needs::{PlayerRecommendation, RecommendationEngine, Urgency};
pub use profile::TeamProfile;
pub use report::{ScoutAnalyzer, ScoutReport};
pub use tactics::TacticsAdvisor;

use super::profile::TeamProfile;
use serde::Serialize;

const UNIT_STRENGTH_THRESHOLD: u8 = 80;
const UNIT_WEAKNESS_THRESHOLD: u8 = 60;

/// Fixed phrasing for one rated unit: (strength, weakness), indexed in
/// `TeamProfile::ratings()` report order.
const UNIT_PHRASES: [(&str, &str); 10] = [
    (
        "Excellent passing ability in midfield",
        "Poor midfield passing and distribution",
    ),
    (
        "Strong buildup play from midfield",
        "Struggles with buildup play and progression",
    ),
    (
        "Solid defensive midfield presence",
        "Lacks defensive protection in midfield",
    ),
    (
        "Physically dominant midfield",
        "Lacks physicality and presence in midfield",
    ),
    ("Rock-solid defensive foundation", "Vulnerable defensive line"),
    (
        "Pacey defense capable of high line",
        "Slow defense vulnerable to pace",
    ),
    (
        "Clinical finishing in front of goal",
        "Poor conversion rate and finishing",
    ),
    (
        "Lightning-fast attacking transitions",
        "Lacks pace in attacking areas",
    ),
    (
        "Highly creative attacking play",
        "Lacks creativity and chance creation",
    ),
    ("World-class goalkeeping", "Goalkeeping concerns and inconsistency"),
];

/// Unit-level strengths, weaknesses and an overall balance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub overall_balance: u8,
}

pub struct TeamBalanceAnalyzer;

impl TeamBalanceAnalyzer {
    /// Classify every unit rating: 80+ is a strength, 60 and below a
    /// weakness, anything in between goes unremarked. Overall balance is
    /// the rounded mean of all ten ratings.
    pub fn analyze(profile: &TeamProfile) -> TeamAnalysis {
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for (rating, (strength, weakness)) in profile.ratings().iter().zip(UNIT_PHRASES.iter()) {
            if *rating >= UNIT_STRENGTH_THRESHOLD {
                strengths.push((*strength).to_string());
            } else if *rating <= UNIT_WEAKNESS_THRESHOLD {
                weaknesses.push((*weakness).to_string());
            }
        }

        let ratings = profile.ratings();
        let total: u16 = ratings.iter().map(|r| u16::from(*r)).sum();
        let overall_balance = (f32::from(total) / ratings.len() as f32).round() as u8;

        TeamAnalysis {
            strengths,
            weaknesses,
            overall_balance,
        }
    }
}

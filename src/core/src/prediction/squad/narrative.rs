use super::balance::SquadBalance;
use super::{mean_age, mean_pace};
use crate::club::Player;

const MAJOR_STRENGTH_THRESHOLD: f32 = 80.0;
const MINOR_STRENGTH_THRESHOLD: f32 = 75.0;
const WEAKNESS_THRESHOLD: f32 = 65.0;

const PACE_STRENGTH_THRESHOLD: f32 = 75.0;
const PACE_WEAKNESS_THRESHOLD: f32 = 60.0;

// The strength and weakness age bands deliberately leave a gap: squads with
// a mean age in (24, 28) read as neither young nor experienced.
const EXPERIENCED_AGE: f32 = 28.0;
const YOUTHFUL_AGE: f32 = 24.0;
const AGING_AGE: f32 = 32.0;
const INEXPERIENCED_AGE: f32 = 21.0;

const THIN_SQUAD_SIZE: usize = 16;

const BASE_CONFIDENCE: f32 = 70.0;
const IDEAL_BALANCE: f32 = 75.0;
const DEEP_SQUAD_SIZE: usize = 20;
const SHALLOW_SQUAD_SIZE: usize = 14;
const CONFIDENCE_AGE_MIN: f32 = 24.0;
const CONFIDENCE_AGE_MAX: f32 = 30.0;
pub const MIN_CONFIDENCE: f32 = 50.0;
pub const MAX_CONFIDENCE: f32 = 95.0;

/// Fixed phrasing for one position group, keyed by the balance thresholds.
struct GroupPhrases {
    major_strength: &'static str,
    minor_strength: &'static str,
    weakness: &'static str,
}

/// In report order: attack, defense, midfield, goalkeeping.
const GROUP_PHRASES: [GroupPhrases; 4] = [
    GroupPhrases {
        major_strength: "Exceptional attacking threat",
        minor_strength: "Strong attacking options",
        weakness: "Lacks attacking threat",
    },
    GroupPhrases {
        major_strength: "Solid defensive foundation",
        minor_strength: "Reliable defense",
        weakness: "Defensive vulnerabilities",
    },
    GroupPhrases {
        major_strength: "Dominant midfield control",
        minor_strength: "Strong midfield presence",
        weakness: "Weak midfield control",
    },
    GroupPhrases {
        major_strength: "World-class goalkeeper",
        minor_strength: "Reliable goalkeeper",
        weakness: "Goalkeeper concerns",
    },
];

pub const NO_STRENGTHS_FALLBACK: &str = "Balanced squad composition";
pub const NO_WEAKNESSES_FALLBACK: &str = "No significant weaknesses identified";

const HIGH_PACE_STRENGTH: &str = "High team pace";
const EXPERIENCED_STRENGTH: &str = "Experienced squad";
const YOUTHFUL_STRENGTH: &str = "Young and energetic";

const DEPTH_WEAKNESS: &str = "Limited squad depth";
const AGING_WEAKNESS: &str = "Aging squad";
const INEXPERIENCE_WEAKNESS: &str = "Lacks experience";
const PACE_WEAKNESS: &str = "Lacks pace";

pub struct NarrativeGenerator;

impl NarrativeGenerator {
    /// Strength phrases derived from balance scores, team pace and mean
    /// age. Emits the fallback phrase when nothing stands out.
    pub fn strengths(balance: &SquadBalance, players: &[Player]) -> Vec<String> {
        let mut strengths = Vec::new();

        for (score, phrases) in balance.in_report_order().iter().zip(GROUP_PHRASES.iter()) {
            if *score >= MAJOR_STRENGTH_THRESHOLD {
                strengths.push(phrases.major_strength.to_string());
            } else if *score >= MINOR_STRENGTH_THRESHOLD {
                strengths.push(phrases.minor_strength.to_string());
            }
        }

        if mean_pace(players) >= PACE_STRENGTH_THRESHOLD {
            strengths.push(HIGH_PACE_STRENGTH.to_string());
        }

        let avg_age = mean_age(players);
        if avg_age >= EXPERIENCED_AGE {
            strengths.push(EXPERIENCED_STRENGTH.to_string());
        } else if avg_age <= YOUTHFUL_AGE {
            strengths.push(YOUTHFUL_STRENGTH.to_string());
        }

        if strengths.is_empty() {
            strengths.push(NO_STRENGTHS_FALLBACK.to_string());
        }

        strengths
    }

    /// Weakness phrases from low balance scores, thin depth, age extremes
    /// and a slow squad. Emits the fallback phrase when nothing is wrong.
    pub fn weaknesses(balance: &SquadBalance, players: &[Player]) -> Vec<String> {
        let mut weaknesses = Vec::new();

        for (score, phrases) in balance.in_report_order().iter().zip(GROUP_PHRASES.iter()) {
            if *score < WEAKNESS_THRESHOLD {
                weaknesses.push(phrases.weakness.to_string());
            }
        }

        if players.len() < THIN_SQUAD_SIZE {
            weaknesses.push(DEPTH_WEAKNESS.to_string());
        }

        let avg_age = mean_age(players);
        if avg_age >= AGING_AGE {
            weaknesses.push(AGING_WEAKNESS.to_string());
        } else if avg_age <= INEXPERIENCED_AGE {
            weaknesses.push(INEXPERIENCE_WEAKNESS.to_string());
        }

        if mean_pace(players) < PACE_WEAKNESS_THRESHOLD {
            weaknesses.push(PACE_WEAKNESS.to_string());
        }

        if weaknesses.is_empty() {
            weaknesses.push(NO_WEAKNESSES_FALLBACK.to_string());
        }

        weaknesses
    }

    /// Confidence in the placement prediction: starts at 70, moves with the
    /// spread of the four balance scores around 75, squad depth and age
    /// balance, clamped to [50, 95]. Returned unrounded.
    pub fn confidence(balance: &SquadBalance, players: &[Player]) -> f32 {
        let mut confidence = BASE_CONFIDENCE;

        let scores = balance.in_report_order();
        let variance = scores
            .iter()
            .map(|score| (score - IDEAL_BALANCE).powi(2))
            .sum::<f32>()
            / scores.len() as f32;

        confidence += ((20.0 - variance) / 2.0).clamp(-10.0, 10.0);

        if players.len() >= DEEP_SQUAD_SIZE {
            confidence += 5.0;
        } else if players.len() < SHALLOW_SQUAD_SIZE {
            confidence -= 5.0;
        }

        let avg_age = mean_age(players);
        if (CONFIDENCE_AGE_MIN..=CONFIDENCE_AGE_MAX).contains(&avg_age) {
            confidence += 5.0;
        }

        confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    }
}

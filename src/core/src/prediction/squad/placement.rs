use serde::Serialize;

pub const LEAGUE_SIZE: u8 = 20;

/// Rating thresholds to predicted league position, evaluated high to low.
/// The first matching threshold wins.
const PLACEMENT_TABLE: [(f32, u8); 7] = [
    (88.0, 1),  // Title contenders
    (85.0, 2),  // Top 2
    (82.0, 4),  // Top 4
    (78.0, 7),  // European spots
    (74.0, 10), // Mid-table
    (70.0, 13), // Lower mid-table
    (65.0, 16), // Relegation battle
];

/// Anything below the last threshold lands in the relegation zone.
const BOTTOM_PLACEMENT: u8 = 19;

/// Spread applied around the predicted position for the best/worst case.
const PLACEMENT_SPREAD: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRange {
    pub best_case: u8,
    pub worst_case: u8,
}

pub struct PlacementMapper;

impl PlacementMapper {
    /// Map an overall rating (unrounded) to a predicted league position.
    pub fn predict(overall_rating: f32) -> u8 {
        for (threshold, position) in PLACEMENT_TABLE {
            if overall_rating >= threshold {
                return position;
            }
        }

        BOTTOM_PLACEMENT
    }

    /// Predicted position +/- 3, clamped to the league table.
    pub fn range(position: u8) -> PositionRange {
        PositionRange {
            best_case: position.saturating_sub(PLACEMENT_SPREAD).max(1),
            worst_case: (position + PLACEMENT_SPREAD).min(LEAGUE_SIZE),
        }
    }
}

use crate::club::{Player, PlayerPositionGroup};
use std::fmt::{Display, Formatter, Result};

pub const MIN_SQUAD_SIZE: usize = 11;
pub const MAX_SQUAD_SIZE: usize = 25;
pub const MIN_GOALKEEPERS: usize = 1;
pub const MIN_DEFENDERS: usize = 3;
pub const MIN_MIDFIELDERS: usize = 3;
pub const MIN_FORWARDS: usize = 1;

/// A squad that fails composition rules cannot be analyzed. The checks run
/// in a fixed order and the first violated rule is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquadError {
    TooFew { size: usize },
    TooMany { size: usize },
    MissingGoalkeeper { found: usize },
    MissingDefenders { found: usize },
    MissingMidfielders { found: usize },
    MissingForwards { found: usize },
}

impl Display for SquadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SquadError::TooFew { size } => {
                write!(f, "Squad must have at least {} players, got {}", MIN_SQUAD_SIZE, size)
            }
            SquadError::TooMany { size } => {
                write!(f, "Squad cannot have more than {} players, got {}", MAX_SQUAD_SIZE, size)
            }
            SquadError::MissingGoalkeeper { found } => {
                write!(f, "Squad must have at least {} goalkeeper, got {}", MIN_GOALKEEPERS, found)
            }
            SquadError::MissingDefenders { found } => {
                write!(f, "Squad must have at least {} defenders, got {}", MIN_DEFENDERS, found)
            }
            SquadError::MissingMidfielders { found } => {
                write!(f, "Squad must have at least {} midfielders, got {}", MIN_MIDFIELDERS, found)
            }
            SquadError::MissingForwards { found } => {
                write!(f, "Squad must have at least {} forward, got {}", MIN_FORWARDS, found)
            }
        }
    }
}

impl std::error::Error for SquadError {}

pub struct SquadValidator;

impl SquadValidator {
    /// Check squad size and per-position minimums. Side-effect free; the
    /// first violated rule wins, violations are never aggregated.
    pub fn validate(players: &[Player]) -> std::result::Result<(), SquadError> {
        if players.len() < MIN_SQUAD_SIZE {
            return Err(SquadError::TooFew { size: players.len() });
        }

        if players.len() > MAX_SQUAD_SIZE {
            return Err(SquadError::TooMany { size: players.len() });
        }

        let count_by_group = |group: PlayerPositionGroup| -> usize {
            players.iter().filter(|p| p.position == group).count()
        };

        let goalkeepers = count_by_group(PlayerPositionGroup::Goalkeeper);
        if goalkeepers < MIN_GOALKEEPERS {
            return Err(SquadError::MissingGoalkeeper { found: goalkeepers });
        }

        let defenders = count_by_group(PlayerPositionGroup::Defender);
        if defenders < MIN_DEFENDERS {
            return Err(SquadError::MissingDefenders { found: defenders });
        }

        let midfielders = count_by_group(PlayerPositionGroup::Midfielder);
        if midfielders < MIN_MIDFIELDERS {
            return Err(SquadError::MissingMidfielders { found: midfielders });
        }

        let forwards = count_by_group(PlayerPositionGroup::Forward);
        if forwards < MIN_FORWARDS {
            return Err(SquadError::MissingForwards { found: forwards });
        }

        Ok(())
    }
}

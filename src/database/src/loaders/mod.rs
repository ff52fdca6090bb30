mod player;
mod profile;
mod record;
mod team;

pub use player::{PlayerEntity, PlayerLoader};
pub use profile::TeamProfileLoader;
pub use record::TeamRecordLoader;
pub use team::{TeamEntity, TeamLoader};

pub mod formation;
pub mod player;

pub use formation::{find_formation, Formation, FormationShape, FORMATIONS};
pub use player::{Player, PlayerAttributes, PlayerPositionGroup};

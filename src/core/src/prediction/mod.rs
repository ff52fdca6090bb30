pub mod score;
pub mod squad;

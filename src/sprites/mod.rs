//! Entities that live inside the Play mode.

pub mod animation;
pub mod obstacle;
pub mod player;

pub use animation::Animation;
pub use obstacle::{ObstaclePair, TubeSet};
pub use player::PlayerBody;

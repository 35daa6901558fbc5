// Character system
//
// This module contains everything related to the walking character:
// - Frame timing over a strip of sprite-sheet frames
// - One walk cycle per facing direction
// - Facing direction and how input picks it
// - The character controller itself

pub mod animation;
pub mod animation_set;
pub mod character;
pub mod direction;
pub mod stats;

// Re-export commonly used types
pub use character::Character;
pub use direction::Direction;
pub use stats::{CharacterStats, HUNTER_STATS, WALKER_STATS};

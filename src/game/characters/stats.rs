// Character movement properties

use super::direction::{Direction, DirectionPolicy};

/// Movement properties of the walking character
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterStats {
    /// Walking speed in pixels per second
    pub move_speed: f32,
    /// Facing before any input arrives
    pub initial_direction: Direction,
    /// How input vectors map onto a facing direction
    pub direction_policy: DirectionPolicy,
    /// Keep cycling the walk animation while standing still
    pub animate_while_idle: bool,
}

/// Stats for the four-strip walker sheet
pub const WALKER_STATS: CharacterStats = CharacterStats {
    move_speed: 100.0,
    initial_direction: Direction::Down,
    direction_policy: DirectionPolicy::DominantAxis,
    animate_while_idle: false,
};

/// Stats for the single-strip hunter sheet
///
/// The hunter sheet predates the idle freeze: its walk cycle loops every
/// frame, moving or not.
#[allow(dead_code)]
pub const HUNTER_STATS: CharacterStats = CharacterStats {
    move_speed: 100.0,
    initial_direction: Direction::Right,
    direction_policy: DirectionPolicy::FirstMatch,
    animate_while_idle: true,
};

impl Default for CharacterStats {
    fn default() -> Self {
        WALKER_STATS
    }
}

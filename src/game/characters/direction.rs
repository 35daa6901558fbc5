// Facing direction and the rules that pick it from movement input

use glam::Vec2;

/// Cardinal facing direction of a walking character
///
/// Screen coordinates: +X is right, +Y is down, so `Up` means negative Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    #[cfg(test)]
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Rule for turning an input vector into a facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionPolicy {
    /// The axis with the larger magnitude wins; exact ties go to the vertical axis
    #[default]
    DominantAxis,
    /// First match of x>0, x<0, y<0, y>0 wins, so any horizontal input beats vertical
    FirstMatch,
}

impl DirectionPolicy {
    /// Pick a direction for `input`, or `None` when the input is zero
    /// and the current facing should be kept
    pub fn select(&self, input: Vec2) -> Option<Direction> {
        match self {
            Self::DominantAxis => {
                if input == Vec2::ZERO {
                    None
                } else if input.x.abs() > input.y.abs() {
                    Some(if input.x > 0.0 {
                        Direction::Right
                    } else {
                        Direction::Left
                    })
                } else if input.y < 0.0 {
                    Some(Direction::Up)
                } else {
                    Some(Direction::Down)
                }
            }
            Self::FirstMatch => {
                if input.x > 0.0 {
                    Some(Direction::Right)
                } else if input.x < 0.0 {
                    Some(Direction::Left)
                } else if input.y < 0.0 {
                    Some(Direction::Up)
                } else if input.y > 0.0 {
                    Some(Direction::Down)
                } else {
                    None
                }
            }
        }
    }
}

// One frame timer per facing direction

use std::sync::Arc;

use super::animation::{AnimationError, FrameTimer};
use super::direction::Direction;
use crate::engine::assets::SpriteSheet;
use crate::game::config::SheetLayout;

/// Walk cycles for all four directions, cut from one shared sheet
#[derive(Debug, Clone)]
pub struct DirectionalAnimationSet {
    up: FrameTimer,
    down: FrameTimer,
    left: FrameTimer,
    right: FrameTimer,
}

impl DirectionalAnimationSet {
    pub fn new(up: FrameTimer, down: FrameTimer, left: FrameTimer, right: FrameTimer) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }

    /// Cut every direction's strip out of `sheet` as described by `layout`
    pub fn from_layout(
        layout: &SheetLayout,
        sheet: &Arc<SpriteSheet>,
    ) -> Result<Self, AnimationError> {
        let strip = |direction: Direction| {
            FrameTimer::new(
                layout.strip_origin(direction),
                layout.frame_width,
                layout.frame_height,
                layout.frame_count,
                Arc::clone(sheet),
            )
        };

        Ok(Self::new(
            strip(Direction::Up)?,
            strip(Direction::Down)?,
            strip(Direction::Left)?,
            strip(Direction::Right)?,
        ))
    }

    pub fn get(&self, direction: Direction) -> &FrameTimer {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, direction: Direction) -> &mut FrameTimer {
        match direction {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }
}

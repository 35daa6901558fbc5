// The walking character: input to velocity and facing, integration, render hand-off

use std::sync::Arc;

use glam::Vec2;
use log::debug;

use super::animation::{AnimationError, Frame};
use super::animation_set::DirectionalAnimationSet;
use super::direction::Direction;
use super::stats::CharacterStats;
use crate::engine::assets::SpriteSheet;
use crate::engine::renderer::{Sprite, TextureHandle};
use crate::game::config::SheetLayout;

/// A single walking character driven by a direction vector
#[derive(Debug)]
pub struct Character {
    /// Top-left corner on screen, in pixels
    position: Vec2,
    /// Pixels per second
    velocity: Vec2,
    /// Current facing; selects the active walk cycle
    direction: Direction,
    animations: DirectionalAnimationSet,
    stats: CharacterStats,
    /// Drawable kept in sync with position and the current frame
    sprite: Sprite,
}

impl Character {
    pub fn new(position: Vec2, animations: DirectionalAnimationSet, stats: CharacterStats) -> Self {
        let mut character = Self {
            position,
            velocity: Vec2::ZERO,
            direction: stats.initial_direction,
            animations,
            stats,
            sprite: Sprite::new(position, Vec2::ZERO),
        };
        character.sync_sprite();
        character
    }

    /// Build a character whose walk cycles are cut from `sheet` per `layout`
    pub fn from_layout(
        position: Vec2,
        layout: &SheetLayout,
        sheet: &Arc<SpriteSheet>,
        stats: CharacterStats,
    ) -> Result<Self, AnimationError> {
        let animations = DirectionalAnimationSet::from_layout(layout, sheet)?;
        Ok(Self::new(position, animations, stats))
    }

    /// Draw with the GPU copy of the sheet
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.sprite.texture = Some(texture);
        self
    }

    /// Set movement from an input vector
    ///
    /// Velocity is always `input * move_speed`. A zero input stops the
    /// character but keeps its facing.
    pub fn set_direction(&mut self, input: Vec2) {
        self.velocity = input * self.stats.move_speed;

        if let Some(direction) = self.stats.direction_policy.select(input) {
            if direction != self.direction {
                debug!("Facing {} -> {}", self.direction.name(), direction.name());
                self.direction = direction;
            }
        }
    }

    /// Move by `velocity * dt` and step the active walk cycle while moving
    /// (or always, with `animate_while_idle`)
    ///
    /// Walk cycles of other directions stay frozen where they were.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }

        self.position += self.velocity * dt;

        if self.velocity != Vec2::ZERO || self.stats.animate_while_idle {
            self.animations.get_mut(self.direction).advance(dt);
        }

        self.sync_sprite();
    }

    fn sync_sprite(&mut self) {
        let frame = self.current_frame();
        let sheet = self.animations.get(self.direction).sheet();

        self.sprite.position = self.position;
        self.sprite.set_region(&frame, sheet.width(), sheet.height());
    }

    #[allow(dead_code)]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[allow(dead_code)]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[allow(dead_code)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sheet region to draw this frame
    pub fn current_frame(&self) -> Frame {
        self.animations.get(self.direction).current_frame()
    }

    /// Sprite positioned and cropped for the renderer
    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    #[allow(dead_code)]
    pub fn animations(&self) -> &DirectionalAnimationSet {
        &self.animations
    }

    #[allow(dead_code)]
    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::IntRect;
    use crate::game::characters::direction::DirectionPolicy;
    use crate::game::characters::stats::{HUNTER_STATS, WALKER_STATS};
    use approx::assert_abs_diff_eq;
    use glam::UVec2;
    use image::RgbaImage;

    fn walker_layout() -> SheetLayout {
        SheetLayout::stacked(
            64,
            64,
            9,
            [
                Direction::Up,
                Direction::Left,
                Direction::Down,
                Direction::Right,
            ],
        )
    }

    fn walker() -> Character {
        let sheet = Arc::new(SpriteSheet::from_rgba("test", RgbaImage::new(576, 256)));
        Character::from_layout(Vec2::ZERO, &walker_layout(), &sheet, WALKER_STATS).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let character = walker();
        assert_eq!(character.direction(), Direction::Down);
        assert_eq!(character.velocity(), Vec2::ZERO);
        assert_eq!(character.position(), Vec2::ZERO);
        assert_eq!(character.current_frame(), IntRect::new(0, 128, 64, 64));
    }

    #[test]
    fn test_velocity_from_input() {
        let mut character = walker();
        character.set_direction(Vec2::new(-1.0, 0.0));

        assert_eq!(character.velocity(), Vec2::new(-100.0, 0.0));
        assert_eq!(character.direction(), Direction::Left);
    }

    #[test]
    fn test_idle_keeps_last_facing() {
        let mut character = walker();

        character.set_direction(Vec2::new(1.0, 0.0));
        assert_eq!(character.direction(), Direction::Right);

        character.set_direction(Vec2::ZERO);
        assert_eq!(character.direction(), Direction::Right);
        assert_eq!(character.velocity(), Vec2::ZERO);

        character.set_direction(Vec2::ZERO);
        assert_eq!(character.direction(), Direction::Right);
    }

    #[test]
    fn test_normalized_diagonal_speed() {
        let mut character = walker();
        character.set_direction(Vec2::new(1.0, 1.0).normalize());

        assert_abs_diff_eq!(character.velocity().length(), 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(character.velocity().x, 70.710_68, epsilon = 1e-3);
        // |x| == |y|, vertical axis wins the tie
        assert_eq!(character.direction(), Direction::Down);
    }

    #[test]
    fn test_euler_integration() {
        let mut character = walker();
        character.set_direction(Vec2::new(1.0, 0.0));

        character.update(0.5);
        assert_eq!(character.position(), Vec2::new(50.0, 0.0));

        character.set_direction(Vec2::new(0.0, -1.0));
        character.update(0.25);
        assert_eq!(character.position(), Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_integration_independent_of_step_split() {
        let input = Vec2::new(0.6, -0.8);

        let mut whole = walker();
        whole.set_direction(input);
        whole.update(0.9);

        let mut split = walker();
        split.set_direction(input);
        for dt in [0.1, 0.35, 0.05, 0.4] {
            split.update(dt);
        }

        let expected = input * 100.0 * 0.9;
        assert_abs_diff_eq!(whole.position().x, expected.x, epsilon = 1e-3);
        assert_abs_diff_eq!(whole.position().y, expected.y, epsilon = 1e-3);
        assert_abs_diff_eq!(split.position().x, whole.position().x, epsilon = 1e-3);
        assert_abs_diff_eq!(split.position().y, whole.position().y, epsilon = 1e-3);
    }

    #[test]
    fn test_idle_does_not_animate() {
        let mut character = walker();
        character.update(1.0);

        let timer = character.animations().get(Direction::Down);
        assert_eq!(timer.current_index(), 0);
        assert_eq!(timer.accumulated(), 0.0);
    }

    #[test]
    fn test_only_active_direction_advances() {
        let mut character = walker();
        character.set_direction(Vec2::new(1.0, 0.0));
        character.update(0.25);

        assert_eq!(character.animations().get(Direction::Right).current_index(), 2);
        for direction in [Direction::Up, Direction::Down, Direction::Left] {
            let timer = character.animations().get(direction);
            assert_eq!(timer.current_index(), 0);
            assert_eq!(timer.accumulated(), 0.0);
        }
    }

    #[test]
    fn test_switching_back_resumes_mid_cycle() {
        let mut character = walker();

        character.set_direction(Vec2::new(1.0, 0.0));
        character.update(0.35);
        let right_index = character.animations().get(Direction::Right).current_index();
        let right_accumulated = character.animations().get(Direction::Right).accumulated();
        assert_eq!(right_index, 3);

        character.set_direction(Vec2::new(0.0, -1.0));
        character.update(0.45);
        assert_eq!(character.animations().get(Direction::Right).current_index(), right_index);
        assert_eq!(
            character.animations().get(Direction::Right).accumulated(),
            right_accumulated
        );

        character.set_direction(Vec2::new(1.0, 0.0));
        assert_eq!(character.current_frame(), IntRect::new(192, 192, 64, 64));
    }

    #[test]
    fn test_sprite_follows_position_and_frame() {
        let mut character = walker();
        character.set_direction(Vec2::new(0.0, 1.0));
        character.update(0.15);

        let sprite = character.sprite();
        assert_eq!(sprite.position, character.position());
        assert_eq!(sprite.size, Vec2::new(64.0, 64.0));
        assert_eq!(sprite.uv_min, Vec2::new(64.0 / 576.0, 0.5));
        assert_eq!(sprite.uv_max, Vec2::new(128.0 / 576.0, 0.75));
        assert_eq!(sprite.texture, None);
    }

    #[test]
    fn test_bad_delta_ignored() {
        let mut character = walker();
        character.set_direction(Vec2::new(1.0, 0.0));
        character.update(f32::NAN);
        character.update(-1.0);

        assert_eq!(character.position(), Vec2::ZERO);
    }

    #[test]
    fn test_hunter_preset() {
        let sheet = Arc::new(SpriteSheet::from_rgba("hunter", RgbaImage::new(820, 184)));
        let layout = SheetLayout::single_strip(UVec2::new(184, 0), 159, 184, 4);
        let mut character =
            Character::from_layout(Vec2::ZERO, &layout, &sheet, HUNTER_STATS).unwrap();

        assert_eq!(character.direction(), Direction::Right);
        assert_eq!(character.stats().direction_policy, DirectionPolicy::FirstMatch);

        // Any horizontal component beats a larger vertical one
        character.set_direction(Vec2::new(-0.2, -1.0));
        assert_eq!(character.direction(), Direction::Left);
    }

    #[test]
    fn test_hunter_animates_while_idle() {
        let sheet = Arc::new(SpriteSheet::from_rgba("hunter", RgbaImage::new(820, 184)));
        let layout = SheetLayout::single_strip(UVec2::new(184, 0), 159, 184, 4);
        let mut character =
            Character::from_layout(Vec2::ZERO, &layout, &sheet, HUNTER_STATS).unwrap();

        character.update(0.25);

        assert_eq!(character.position(), Vec2::ZERO);
        assert_eq!(character.animations().get(Direction::Right).current_index(), 2);
        assert_eq!(character.current_frame(), IntRect::new(502, 0, 159, 184));
        assert_eq!(character.sprite().uv_min.x, 502.0 / 820.0);
    }
}

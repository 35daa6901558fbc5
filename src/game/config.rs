// Hard-coded demo presets
//
// Two sheets are supported: the four-strip walker sheet (`character.png`)
// and the older single-strip hunter sheet (`hunter.jpg`).

use glam::{UVec2, Vec2};

use super::characters::{CharacterStats, Direction, HUNTER_STATS, WALKER_STATS};

/// Where each direction's walk cycle sits on the sprite sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    /// Width of each frame in pixels
    pub frame_width: u32,
    /// Height of each frame in pixels
    pub frame_height: u32,
    /// Frames per walk cycle
    pub frame_count: usize,
    /// Top-left of the first frame of each strip
    pub up: UVec2,
    pub down: UVec2,
    pub left: UVec2,
    pub right: UVec2,
}

impl SheetLayout {
    /// Strips stacked top to bottom in `order`, each starting at x = 0
    pub fn stacked(
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
        order: [Direction; 4],
    ) -> Self {
        let mut layout = Self::single_strip(UVec2::ZERO, frame_width, frame_height, frame_count);
        for (row, direction) in order.into_iter().enumerate() {
            let origin = UVec2::new(0, row as u32 * frame_height);
            match direction {
                Direction::Up => layout.up = origin,
                Direction::Down => layout.down = origin,
                Direction::Left => layout.left = origin,
                Direction::Right => layout.right = origin,
            }
        }
        layout
    }

    /// Every direction plays the same strip starting at `origin`
    pub fn single_strip(
        origin: UVec2,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
    ) -> Self {
        Self {
            frame_width,
            frame_height,
            frame_count,
            up: origin,
            down: origin,
            left: origin,
            right: origin,
        }
    }

    /// 64x64 cells, nine per strip, strips ordered up, left, down, right
    pub fn walker() -> Self {
        Self::stacked(
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

    /// One four-frame strip of 159x184 cells starting at (184, 0)
    #[allow(dead_code)]
    pub fn hunter() -> Self {
        Self::single_strip(UVec2::new(184, 0), 159, 184, 4)
    }

    pub fn strip_origin(&self, direction: Direction) -> UVec2 {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self::walker()
    }
}

/// Everything the demo needs to start
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub window_title: String,
    /// Logical window size in pixels
    pub window_size: UVec2,
    /// Directory sprite sheets are resolved against
    pub asset_dir: String,
    /// Sheet file name inside `asset_dir`
    pub sheet_path: String,
    pub layout: SheetLayout,
    pub stats: CharacterStats,
    /// Starting top-left position of the character
    pub spawn: Vec2,
    /// Advisory frame rate cap, `None` to run unthrottled
    pub frame_limit: Option<u32>,
}

impl DemoConfig {
    pub fn walker() -> Self {
        Self {
            window_title: "Sprite Walker".to_string(),
            window_size: UVec2::new(1024, 768),
            asset_dir: ".".to_string(),
            sheet_path: "character.png".to_string(),
            layout: SheetLayout::walker(),
            stats: WALKER_STATS,
            spawn: Vec2::new(100.0, 100.0),
            frame_limit: Some(60),
        }
    }

    /// Legacy hunter sheet, kept to document its layout; `main` always runs the walker
    ///
    /// Faces right, lets any horizontal input win the facing and keeps its
    /// walk cycle running while idle.
    #[allow(dead_code)]
    pub fn hunter() -> Self {
        Self {
            window_title: "Sprite Walker".to_string(),
            window_size: UVec2::new(1024, 768),
            asset_dir: ".".to_string(),
            sheet_path: "hunter.jpg".to_string(),
            layout: SheetLayout::hunter(),
            stats: HUNTER_STATS,
            spawn: Vec2::ZERO,
            frame_limit: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::walker()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::direction::DirectionPolicy;

    #[test]
    fn test_walker_strip_order() {
        let layout = SheetLayout::walker();
        assert_eq!(layout.strip_origin(Direction::Up), UVec2::new(0, 0));
        assert_eq!(layout.strip_origin(Direction::Left), UVec2::new(0, 64));
        assert_eq!(layout.strip_origin(Direction::Down), UVec2::new(0, 128));
        assert_eq!(layout.strip_origin(Direction::Right), UVec2::new(0, 192));
        assert_eq!(layout.frame_count, 9);
    }

    #[test]
    fn test_hunter_single_strip() {
        let layout = SheetLayout::hunter();
        for direction in Direction::ALL {
            assert_eq!(layout.strip_origin(direction), UVec2::new(184, 0));
        }
        assert_eq!((layout.frame_width, layout.frame_height), (159, 184));
        assert_eq!(layout.frame_count, 4);
    }

    #[test]
    fn test_stacked_custom_order() {
        let layout = SheetLayout::stacked(
            32,
            48,
            6,
            [
                Direction::Down,
                Direction::Left,
                Direction::Right,
                Direction::Up,
            ],
        );
        assert_eq!(layout.down, UVec2::new(0, 0));
        assert_eq!(layout.left, UVec2::new(0, 48));
        assert_eq!(layout.right, UVec2::new(0, 96));
        assert_eq!(layout.up, UVec2::new(0, 144));
    }

    #[test]
    fn test_default_config_is_walker() {
        let config = DemoConfig::default();
        assert_eq!(config.sheet_path, "character.png");
        assert_eq!(config.layout, SheetLayout::walker());
        assert_eq!(config.stats.direction_policy, DirectionPolicy::DominantAxis);
        assert_eq!(config.frame_limit, Some(60));
    }

    #[test]
    fn test_hunter_config() {
        let config = DemoConfig::hunter();
        assert_eq!(config.sheet_path, "hunter.jpg");
        assert_eq!(config.stats.initial_direction, Direction::Right);
        assert!(config.stats.animate_while_idle);
        assert_eq!(config.frame_limit, None);
    }
}

// Game loop timing
//
// Measures wall-clock time between frames with a monotonic clock and hands
// the raw delta to the simulation. The delta is never clamped; a long stall
// shows up as one large delta. An optional frame limit only tells the host
// when the next frame is due, it never sleeps itself.

use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// How often the FPS average is logged
const FPS_LOG_INTERVAL: Duration = Duration::from_secs(1);

/// Game loop timing state
pub struct GameLoop {
    /// Time of last frame
    last_frame_time: Instant,

    /// Minimum spacing between frames, if capped
    frame_interval: Option<Duration>,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,

    /// Last time the FPS was logged
    last_fps_log: Instant,
}

impl GameLoop {
    /// Create a new game loop, optionally capped to `frame_limit` frames per second
    pub fn new(frame_limit: Option<u32>) -> Self {
        let now = Instant::now();
        Self {
            last_frame_time: now,
            frame_interval: frame_limit
                .filter(|&fps| fps > 0)
                .map(|fps| Duration::from_secs_f64(1.0 / fps as f64)),
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            current_fps: 0.0,
            last_fps_log: now,
        }
    }

    /// Begin a new frame, returns seconds elapsed since the previous one
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if now.saturating_duration_since(self.last_fps_log) >= FPS_LOG_INTERVAL {
            log::debug!("{:.1} FPS over {} frames", self.current_fps, self.frame_count);
            self.last_fps_log = now;
        }

        frame_time.as_secs_f32()
    }

    /// When the next frame should start, `None` if uncapped
    pub fn next_frame_at(&self) -> Option<Instant> {
        self.frame_interval
            .map(|interval| self.last_frame_time + interval)
    }

    /// Whether a new frame may start now
    pub fn frame_due(&self, now: Instant) -> bool {
        self.next_frame_at().map_or(true, |at| now >= at)
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::thread;

    #[test]
    fn test_game_loop_creation() {
        let game_loop = GameLoop::new(None);
        assert_eq!(game_loop.frame_count, 0);
        assert_eq!(game_loop.next_frame_at(), None);
    }

    #[test]
    fn test_frame_counting() {
        let mut game_loop = GameLoop::new(None);
        game_loop.tick();
        assert_eq!(game_loop.frame_count, 1);

        game_loop.tick();
        assert_eq!(game_loop.frame_count, 2);
    }

    #[test]
    fn test_delta_measures_elapsed_time() {
        let mut game_loop = GameLoop::new(None);
        let start = game_loop.last_frame_time;

        let dt = game_loop.tick_at(start + Duration::from_millis(250));
        assert_abs_diff_eq!(dt, 0.25, epsilon = 1e-6);
        assert_eq!(game_loop.next_frame_at(), None);
    }

    #[test]
    fn test_long_stall_not_clamped() {
        let mut game_loop = GameLoop::new(Some(60));
        let start = game_loop.last_frame_time;

        let dt = game_loop.tick_at(start + Duration::from_secs(30));
        assert_abs_diff_eq!(dt, 30.0, epsilon = 1e-4);
    }

    #[test]
    fn test_real_sleep_produces_positive_delta() {
        let mut game_loop = GameLoop::new(None);
        thread::sleep(Duration::from_millis(10));
        let dt = game_loop.tick();
        assert!(dt >= 0.010);
    }

    #[test]
    fn test_frame_limit_schedule() {
        let mut game_loop = GameLoop::new(Some(50));
        let start = game_loop.last_frame_time;
        game_loop.tick_at(start);

        assert_eq!(
            game_loop.next_frame_at(),
            Some(start + Duration::from_millis(20))
        );
        assert!(!game_loop.frame_due(start + Duration::from_millis(10)));
        assert!(game_loop.frame_due(start + Duration::from_millis(20)));
    }

    #[test]
    fn test_uncapped_always_due() {
        let game_loop = GameLoop::new(None);
        assert!(game_loop.frame_due(Instant::now()));

        let zero = GameLoop::new(Some(0));
        assert_eq!(zero.next_frame_at(), None);
    }

    #[test]
    fn test_fps_average() {
        let mut game_loop = GameLoop::new(None);
        let mut now = game_loop.last_frame_time;
        for _ in 0..10 {
            now += Duration::from_millis(20);
            game_loop.tick_at(now);
        }
        assert_abs_diff_eq!(game_loop.current_fps, 50.0, epsilon = 0.01);
    }
}

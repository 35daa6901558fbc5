// Character animation timing
//
// A `FrameTimer` turns elapsed wall-clock time into a looping frame index
// over a strip of frames cut from a shared sprite sheet.

use std::sync::Arc;

use glam::UVec2;
use log::debug;

use crate::core::math::IntRect;
use crate::engine::assets::SpriteSheet;

/// How long each frame stays on screen, in seconds
pub const FRAME_HOLD_TIME: f32 = 0.1;

/// One still image of an animation: a sub-rectangle of the sprite sheet
pub type Frame = IntRect;

/// Errors raised while cutting frames out of a sheet
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    #[error("Animation needs at least one frame")]
    EmptySequence,

    #[error("Animation frames must have a non-zero width and height")]
    ZeroSizedFrame,

    #[error("Frame {frame} lies outside the {sheet_width}x{sheet_height} sprite sheet")]
    OutOfBounds {
        frame: Frame,
        sheet_width: u32,
        sheet_height: u32,
    },
}

/// Looping frame timer over a horizontal strip of frames
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// Frames in playback order
    frames: Vec<Frame>,
    /// Sheet every frame is cut from
    sheet: Arc<SpriteSheet>,
    /// Duration of each frame in seconds
    hold_time: f32,
    /// Time accumulated toward the next frame, always in `[0, hold_time)`
    accumulated: f32,
    /// Index into `frames`
    current_index: usize,
}

impl FrameTimer {
    /// Cut `frame_count` frames laid out left to right starting at `origin`
    pub fn new(
        origin: UVec2,
        frame_width: u32,
        frame_height: u32,
        frame_count: usize,
        sheet: Arc<SpriteSheet>,
    ) -> Result<Self, AnimationError> {
        if frame_count == 0 {
            return Err(AnimationError::EmptySequence);
        }
        if frame_width == 0 || frame_height == 0 {
            return Err(AnimationError::ZeroSizedFrame);
        }

        let mut frames = Vec::with_capacity(frame_count);
        for i in 0..frame_count {
            let x = u32::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(frame_width))
                .and_then(|offset| offset.checked_add(origin.x));

            let frame = Frame::new(x.unwrap_or(u32::MAX), origin.y, frame_width, frame_height);
            if x.is_none() || !sheet.contains(&frame) {
                return Err(AnimationError::OutOfBounds {
                    frame,
                    sheet_width: sheet.width(),
                    sheet_height: sheet.height(),
                });
            }
            frames.push(frame);
        }

        Ok(Self {
            frames,
            sheet,
            hold_time: FRAME_HOLD_TIME,
            accumulated: 0.0,
            current_index: 0,
        })
    }

    /// Advance the timer by `dt` seconds
    ///
    /// Every full `hold_time` in the accumulator steps the index forward by one,
    /// wrapping after the last frame. Non-positive or non-finite deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }

        self.accumulated += dt;

        // Whole cycles land back on the same index, so drop them up front and
        // keep the stepping loop bounded by the frame count.
        let cycle = self.cycle_duration();
        if self.accumulated >= cycle {
            let skipped = (self.accumulated / cycle).floor();
            self.accumulated %= cycle;
            debug!("Frame timer skipped {} whole animation cycles", skipped);
        }

        while self.accumulated >= self.hold_time {
            self.accumulated -= self.hold_time;
            self.step();
        }
    }

    /// Return to the first frame with an empty accumulator
    #[allow(dead_code)]
    pub fn reset(&mut self) {
        self.current_index = 0;
        self.accumulated = 0.0;
    }

    fn step(&mut self) {
        self.current_index += 1;
        if self.current_index >= self.frames.len() {
            self.current_index = 0;
        }
    }

    /// Frame to show right now
    pub fn current_frame(&self) -> Frame {
        self.frames[self.current_index]
    }

    #[allow(dead_code)]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Time accumulated toward the next frame
    #[allow(dead_code)]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    #[allow(dead_code)]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    #[allow(dead_code)]
    pub fn hold_time(&self) -> f32 {
        self.hold_time
    }

    /// Duration of one full pass over every frame
    pub fn cycle_duration(&self) -> f32 {
        self.hold_time * self.frames.len() as f32
    }

    pub fn sheet(&self) -> &Arc<SpriteSheet> {
        &self.sheet
    }
}

//! Frame cycling over a horizontal sprite strip.

use crate::presenter::TextureRegion;

#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<TextureRegion>,
    /// Seconds each frame stays on screen.
    frame_duration: f32,
    elapsed: f32,
    frame: usize,
}

impl Animation {
    /// Slice `strip` into `frame_count` equal-width frames played over
    /// `cycle_time` seconds.
    ///
    /// `frame_count` must be at least 1.
    pub fn new(strip: TextureRegion, frame_count: usize, cycle_time: f32) -> Self {
        debug_assert!(frame_count >= 1, "animation needs at least one frame");
        let frame_width = strip.width / frame_count as u32;
        let frames = (0..frame_count as u32)
            .map(|i| TextureRegion {
                x: strip.x + i * frame_width,
                width: frame_width,
                ..strip
            })
            .collect();

        Self {
            frames,
            frame_duration: cycle_time / frame_count as f32,
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance by `dt` seconds. At most one frame is stepped per call and any
    /// time past the threshold is dropped, not carried into the next frame.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed > self.frame_duration {
            self.frame += 1;
            self.elapsed = 0.0;
        }
        if self.frame >= self.frames.len() {
            self.frame = 0;
        }
    }

    pub fn current_frame(&self) -> TextureRegion {
        self.frames[self.frame]
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_duration(&self) -> f32 {
        self.frame_duration
    }
}

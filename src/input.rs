//! Per-tick input signal.

use glam::Vec2;

/// A tap registered this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tap {
    /// Viewport coordinates (origin bottom-left). `None` for keyboard taps,
    /// which activate whatever control has focus.
    pub position: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Input {
    pub tap: Option<Tap>,
}

impl Input {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn key_tap() -> Self {
        Self {
            tap: Some(Tap { position: None }),
        }
    }

    pub fn tap_at(x: f32, y: f32) -> Self {
        Self {
            tap: Some(Tap {
                position: Some(Vec2::new(x, y)),
            }),
        }
    }

    pub fn tapped(&self) -> bool {
        self.tap.is_some()
    }
}

//! Tuning values for one game session.
//!
//! A single immutable `GameConfig` is handed by reference to every
//! constructor; nothing reads tuning values from globals.

use glam::Vec2;
use thiserror::Error;

/// Reasons a configuration cannot be used to build a game.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("animation needs at least one frame")]
    ZeroAnimationFrames,
    #[error("animation cycle must be positive, got {0}")]
    NonPositiveCycle(f32),
    #[error("obstacle pool needs at least one pair")]
    ZeroTubeCount,
    #[error("tube fluctuation range must be non-empty")]
    ZeroFluctuation,
    #[error("viewport must be positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    // ── Camera ───────────────────────────────────────────────────────────────
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Camera x = player x + this lead.
    pub camera_lead: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    /// Added to the vertical velocity every tick while airborne.
    pub gravity: f32,
    /// Horizontal speed in units per second.
    pub movement: f32,
    pub jump_impulse: f32,
    /// Highest y the player may reach; jumps are ignored up here.
    pub ceiling: f32,
    pub player_start: Vec2,
    pub animation_frames: usize,
    /// Seconds for one full pass through the animation strip.
    pub animation_cycle: f32,
    pub flap_volume: f32,

    // ── Obstacles ────────────────────────────────────────────────────────────
    pub tube_width: f32,
    pub tube_gap: f32,
    /// Lower bound for the opening.
    pub lowest_opening: f32,
    /// Exclusive upper bound of the random top-tube offset.
    pub fluctuation: u32,
    pub tube_spacing: f32,
    pub tube_count: usize,
    /// Pair `i` starts at slot `i + first_tube_slot`.
    pub first_tube_slot: usize,
    /// How far a consumed score zone is pushed out of play.
    pub score_zone_banish: f32,
    pub point_volume: f32,

    // ── Ground ───────────────────────────────────────────────────────────────
    pub ground_y_offset: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 240.0,
            viewport_height: 400.0,
            camera_lead: 80.0,

            gravity: -15.0,
            movement: 100.0,
            jump_impulse: 250.0,
            ceiling: 375.0,
            player_start: Vec2::new(50.0, 225.0),
            animation_frames: 3,
            animation_cycle: 0.5,
            flap_volume: 0.5,

            tube_width: 52.0,
            tube_gap: 80.0,
            lowest_opening: 120.0,
            fluctuation: 130,
            tube_spacing: 125.0,
            tube_count: 4,
            first_tube_slot: 2,
            score_zone_banish: 1000.0,
            point_volume: 1.0,

            ground_y_offset: -50.0,
        }
    }
}

impl GameConfig {
    /// Check the values that component constructors take as preconditions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_frames == 0 {
            return Err(ConfigError::ZeroAnimationFrames);
        }
        if !(self.animation_cycle > 0.0) {
            return Err(ConfigError::NonPositiveCycle(self.animation_cycle));
        }
        if self.tube_count == 0 {
            return Err(ConfigError::ZeroTubeCount);
        }
        if self.fluctuation == 0 {
            return Err(ConfigError::ZeroFluctuation);
        }
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }
        Ok(())
    }

    /// Horizontal distance a recycled pair jumps forward.
    pub fn recycle_distance(&self) -> f32 {
        (self.tube_width + self.tube_spacing) * self.tube_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_frames() {
        let config = GameConfig {
            animation_frames: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroAnimationFrames));
    }

    #[test]
    fn rejects_nan_cycle() {
        let config = GameConfig {
            animation_cycle: f32::NAN,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveCycle(_))
        ));
    }

    #[test]
    fn rejects_empty_pool_and_range() {
        let empty_pool = GameConfig {
            tube_count: 0,
            ..GameConfig::default()
        };
        assert_eq!(empty_pool.validate(), Err(ConfigError::ZeroTubeCount));

        let flat = GameConfig {
            fluctuation: 0,
            ..GameConfig::default()
        };
        assert_eq!(flat.validate(), Err(ConfigError::ZeroFluctuation));
    }

    #[test]
    fn rejects_degenerate_viewport() {
        let config = GameConfig {
            viewport_height: 0.0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidViewport {
                width: 240.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn recycle_distance_covers_whole_pool() {
        // (52 + 125) * 4
        assert_eq!(GameConfig::default().recycle_distance(), 708.0);
    }
}

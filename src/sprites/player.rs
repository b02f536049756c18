//! The player-controlled body: gravity, jump impulse and hit-box.

use glam::{Vec2, Vec3};

use crate::assets::{SoundAsset, TextureAsset};
use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::presenter::{Presenter, SoundId, Texture, TextureRegion};
use crate::sprites::Animation;

#[derive(Clone, Debug)]
pub struct PlayerBody {
    position: Vec3,
    velocity: Vec3,
    bounds: Rect,
    animation: Animation,
    strip: Texture,
    flap: SoundId,

    gravity: f32,
    movement: f32,
    jump_impulse: f32,
    ceiling: f32,
    flap_volume: f32,
}

impl PlayerBody {
    /// Build a body from already-loaded resources. The body takes ownership
    /// of `strip` and `flap` and releases them in [`PlayerBody::dispose`].
    pub fn new(start: Vec2, strip: Texture, flap: SoundId, config: &GameConfig) -> Self {
        let animation = Animation::new(
            strip.full_region(),
            config.animation_frames,
            config.animation_cycle,
        );
        let frame_width = strip.width / config.animation_frames as u32;

        Self {
            position: start.extend(0.0),
            velocity: Vec3::ZERO,
            bounds: Rect::new(start.x, start.y, frame_width as f32, strip.height as f32),
            animation,
            strip,
            flap,
            gravity: config.gravity,
            movement: config.movement,
            jump_impulse: config.jump_impulse,
            ceiling: config.ceiling,
            flap_volume: config.flap_volume,
        }
    }

    /// Load the player's resources and place it at `start`.
    pub fn spawn(start: Vec2, presenter: &mut dyn Presenter, config: &GameConfig) -> Self {
        let strip = presenter.load_texture(TextureAsset::BirdStrip);
        let flap = presenter.load_sound(SoundAsset::Flap);
        Self::new(start, strip, flap, config)
    }

    /// Advance one tick.
    ///
    /// Velocity is kept in units per second but is scaled by `dt` for the
    /// position step and scaled back afterwards. Gravity is added per tick,
    /// not per second.
    pub fn update(&mut self, dt: f32) {
        self.animation.update(dt);
        if dt <= 0.0 {
            return;
        }

        if self.position.y > 0.0 {
            self.velocity.y += self.gravity;
        }

        self.velocity *= dt;
        self.position += Vec3::new(self.movement * dt, self.velocity.y, 0.0);
        self.position.y = self.position.y.clamp(0.0, self.ceiling);
        self.velocity *= 1.0 / dt;

        self.bounds.set_position(self.position.truncate());
    }

    /// Kick upwards unless already pinned to the ceiling.
    pub fn jump(&mut self, presenter: &mut dyn Presenter) {
        if self.position.y < self.ceiling {
            self.velocity.y = self.jump_impulse;
            presenter.play_sound(self.flap, self.flap_volume);
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn bounds(&self) -> &Rect {
        &self.bounds
    }

    /// Move the body without touching its velocity.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position.extend(self.position.z);
        self.bounds.set_position(position);
    }

    pub fn frame(&self) -> TextureRegion {
        self.animation.current_frame()
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    pub fn dispose(self, presenter: &mut dyn Presenter) {
        presenter.unload_texture(self.strip);
        presenter.unload_sound(self.flap);
    }
}

//! The narrow drawing/audio interface the simulation talks to.
//!
//! Handles are plain ids owned by whoever loaded them; releasing them is the
//! owner's job and must happen exactly once. Drawing calls are buffered by the
//! implementation between [`Presenter::begin`] and [`Presenter::end`].

use glam::Vec2;

use crate::assets::{MusicAsset, SoundAsset, TextureAsset};
use crate::camera::Camera;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SoundId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MusicId(pub u32);

/// A loaded texture and its pixel size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Texture {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

/// A rectangular window into a texture, in texture pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureRegion {
    pub texture: TextureId,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Region covering the whole texture.
    pub fn full_region(&self) -> TextureRegion {
        TextureRegion {
            texture: self.id,
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }
}

pub trait Presenter {
    // ── Resources ────────────────────────────────────────────────────────────
    fn load_texture(&mut self, asset: TextureAsset) -> Texture;
    fn unload_texture(&mut self, texture: Texture);
    fn load_sound(&mut self, asset: SoundAsset) -> SoundId;
    fn unload_sound(&mut self, sound: SoundId);
    fn load_music(&mut self, asset: MusicAsset) -> MusicId;
    fn unload_music(&mut self, music: MusicId);

    // ── Audio ────────────────────────────────────────────────────────────────
    /// Fire and forget.
    fn play_sound(&mut self, sound: SoundId, volume: f32);
    /// Start a looping track.
    fn play_music(&mut self, music: MusicId);
    fn stop_music(&mut self, music: MusicId);

    // ── Drawing ──────────────────────────────────────────────────────────────
    fn begin(&mut self, camera: &Camera);
    /// Draw `region` with its bottom-left corner at `position` (world space).
    fn draw(&mut self, region: TextureRegion, position: Vec2);
    /// Draw `text` with its bottom-left corner at `position` (world space).
    fn draw_text(&mut self, text: &str, position: Vec2, scale: f32);
    /// Width of `text` in world units at `scale`.
    fn text_width(&self, text: &str, scale: f32) -> f32;
    fn end(&mut self);
}

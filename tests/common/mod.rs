#![allow(dead_code)]

use std::collections::HashMap;

use flappy_game::assets::{MusicAsset, SoundAsset, TextureAsset};
use flappy_game::camera::Camera;
use flappy_game::config::GameConfig;
use flappy_game::modes::ModeContext;
use flappy_game::presenter::{MusicId, Presenter, SoundId, Texture, TextureId, TextureRegion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Presenter double that remembers everything asked of it.
#[derive(Default)]
pub struct RecordingPresenter {
    next_id: u32,
    pub textures: HashMap<TextureId, TextureAsset>,
    pub sounds: HashMap<SoundId, SoundAsset>,
    pub music: HashMap<MusicId, MusicAsset>,
    pub playing: Option<MusicAsset>,
    pub sounds_played: Vec<(SoundAsset, f32)>,
    pub music_started: Vec<MusicAsset>,
    pub draws: Vec<(TextureAsset, Vec2)>,
    pub texts: Vec<(String, Vec2)>,
    pub frames_begun: usize,
    pub frames_ended: usize,
    pub bad_releases: usize,
    pub last_camera: Option<Camera>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(&self) -> usize {
        self.textures.len() + self.sounds.len() + self.music.len()
    }

    pub fn count_loaded(&self, asset: TextureAsset) -> usize {
        self.textures.values().filter(|&&a| a == asset).count()
    }

    pub fn texture(&mut self, asset: TextureAsset) -> Texture {
        self.load_texture(asset)
    }

    pub fn plays_of(&self, sound: SoundAsset) -> usize {
        self.sounds_played.iter().filter(|(s, _)| *s == sound).count()
    }

    fn fresh_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }
}

impl Presenter for RecordingPresenter {
    fn load_texture(&mut self, asset: TextureAsset) -> Texture {
        let id = TextureId(self.fresh_id());
        self.textures.insert(id, asset);
        let (width, height) = asset.size();
        Texture { id, width, height }
    }

    fn unload_texture(&mut self, texture: Texture) {
        if self.textures.remove(&texture.id).is_none() {
            self.bad_releases += 1;
        }
    }

    fn load_sound(&mut self, asset: SoundAsset) -> SoundId {
        let id = SoundId(self.fresh_id());
        self.sounds.insert(id, asset);
        id
    }

    fn unload_sound(&mut self, sound: SoundId) {
        if self.sounds.remove(&sound).is_none() {
            self.bad_releases += 1;
        }
    }

    fn load_music(&mut self, asset: MusicAsset) -> MusicId {
        let id = MusicId(self.fresh_id());
        self.music.insert(id, asset);
        id
    }

    fn unload_music(&mut self, music: MusicId) {
        if self.music.remove(&music).is_none() {
            self.bad_releases += 1;
        }
    }

    fn play_sound(&mut self, sound: SoundId, volume: f32) {
        let asset = self.sounds[&sound];
        self.sounds_played.push((asset, volume));
    }

    fn play_music(&mut self, music: MusicId) {
        let asset = self.music[&music];
        self.playing = Some(asset);
        self.music_started.push(asset);
    }

    fn stop_music(&mut self, music: MusicId) {
        if self.music.get(&music).copied() == self.playing {
            self.playing = None;
        }
    }

    fn begin(&mut self, camera: &Camera) {
        self.frames_begun += 1;
        self.last_camera = Some(*camera);
        self.draws.clear();
        self.texts.clear();
    }

    fn draw(&mut self, region: TextureRegion, position: Vec2) {
        let asset = self.textures[&region.texture];
        self.draws.push((asset, position));
    }

    fn draw_text(&mut self, text: &str, position: Vec2, _scale: f32) {
        self.texts.push((text.to_string(), position));
    }

    fn text_width(&self, text: &str, scale: f32) -> f32 {
        text.len() as f32 * 8.0 * scale
    }

    fn end(&mut self) {
        self.frames_ended += 1;
    }
}

/// Owns what a `ModeContext` borrows.
pub struct Harness {
    pub presenter: RecordingPresenter,
    pub rng: StdRng,
    pub config: GameConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            presenter: RecordingPresenter::new(),
            rng: StdRng::seed_from_u64(42),
            config: GameConfig::default(),
        }
    }

    pub fn ctx(&mut self) -> ModeContext<'_> {
        ModeContext {
            presenter: &mut self.presenter,
            rng: &mut self.rng,
            config: &self.config,
        }
    }
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

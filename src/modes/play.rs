//! The running game.

use glam::Vec2;
use log::{debug, info};

use crate::assets::{MusicAsset, TextureAsset};
use crate::camera::Camera;
use crate::input::Input;
use crate::modes::{GameMode, ModeContext, ModeKind, Transition};
use crate::presenter::{MusicId, Presenter, Texture};
use crate::sprites::{ObstaclePair, PlayerBody, TubeSet};

/// Score readout scale.
const SCORE_SCALE: f32 = 2.0;

/// The running game: player, obstacle pool, scrolling ground and score.
pub struct PlayMode {
    camera: Camera,
    player: PlayerBody,
    pairs: Vec<ObstaclePair>,
    tubes: TubeSet,
    background: Texture,
    ground: Texture,
    /// Two ground sprites leap-frogging each other under the camera.
    ground_markers: [Vec2; 2],
    ground_y_offset: f32,
    music: MusicId,
    score: u32,
}

impl PlayMode {
    pub fn enter(ctx: &mut ModeContext<'_>) -> Self {
        let config = ctx.config;
        let camera = Camera::with_viewport(config.viewport_width, config.viewport_height);
        let player = PlayerBody::spawn(config.player_start, &mut *ctx.presenter, config);
        let background = ctx.presenter.load_texture(TextureAsset::Background);
        let ground = ctx.presenter.load_texture(TextureAsset::Ground);

        let left = camera.left();
        let ground_markers = [
            Vec2::new(left, config.ground_y_offset),
            Vec2::new(left + ground.width as f32, config.ground_y_offset),
        ];

        let tubes = TubeSet::load(&mut *ctx.presenter);
        let slot_width = config.tube_spacing + config.tube_width;
        let mut pairs = Vec::with_capacity(config.tube_count);
        for i in 0..config.tube_count {
            let x = (i + config.first_tube_slot) as f32 * slot_width;
            pairs.push(ObstaclePair::new(x, tubes, config, &mut *ctx.rng));
        }

        let music = ctx.presenter.load_music(MusicAsset::Gameplay);
        ctx.presenter.play_music(music);

        Self {
            camera,
            player,
            pairs,
            tubes,
            background,
            ground,
            ground_markers,
            ground_y_offset: config.ground_y_offset,
            music,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerBody {
        &mut self.player
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn pairs_mut(&mut self) -> &mut [ObstaclePair] {
        &mut self.pairs
    }

    pub fn ground_markers(&self) -> [Vec2; 2] {
        self.ground_markers
    }

    /// Height at or below which the player has hit the ground.
    pub fn ground_level(&self) -> f32 {
        self.ground.height as f32 + self.ground_y_offset
    }

    fn update_ground(&mut self) {
        let left = self.camera.left();
        let width = self.ground.width as f32;
        for marker in &mut self.ground_markers {
            if left > marker.x + width {
                marker.x += width * 2.0;
            }
        }
    }
}

impl GameMode for PlayMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Play
    }

    fn handle_input(&mut self, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition> {
        if input.tapped() {
            self.player.jump(&mut *ctx.presenter);
        }
        None
    }

    fn update(&mut self, dt: f32, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition> {
        if let Some(transition) = self.handle_input(input, ctx) {
            return Some(transition);
        }
        self.update_ground();
        self.player.update(dt);
        self.camera.position.x = self.player.position().x + ctx.config.camera_lead;

        let left = self.camera.left();
        let recycle_distance = ctx.config.recycle_distance();
        for (index, pair) in self.pairs.iter_mut().enumerate() {
            if left > pair.right_edge() {
                let x = pair.top_position().x + recycle_distance;
                pair.reposition(x, &mut *ctx.rng);
                debug!("recycled obstacle pair {index} to x={x}");
            }

            if pair.collides(self.player.bounds()) {
                info!("hit obstacle pair {index}, final score {}", self.score);
                return Some(Transition::GameOver { score: self.score });
            }

            if pair.scores(self.player.bounds(), &mut *ctx.presenter) {
                self.score += 1;
                info!("score: {}", self.score);
            }
        }

        if self.player.position().y <= self.ground_level() {
            info!("hit the ground, final score {}", self.score);
            return Some(Transition::GameOver { score: self.score });
        }
        None
    }

    fn render(&self, presenter: &mut dyn Presenter) {
        let camera = &self.camera;
        presenter.begin(camera);
        presenter.draw(self.background.full_region(), Vec2::new(camera.left(), 0.0));
        presenter.draw(self.player.frame(), self.player.position().truncate());
        for pair in &self.pairs {
            presenter.draw(self.tubes.top.full_region(), pair.top_position());
            presenter.draw(self.tubes.bottom.full_region(), pair.bottom_position());
        }
        for marker in self.ground_markers {
            presenter.draw(self.ground.full_region(), marker);
        }

        let text = self.score.to_string();
        let width = presenter.text_width(&text, SCORE_SCALE);
        presenter.draw_text(
            &text,
            Vec2::new(camera.position.x - width / 2.0, camera.position.y * 7.0 / 4.0),
            SCORE_SCALE,
        );
        presenter.end();
    }

    fn dispose(self: Box<Self>, presenter: &mut dyn Presenter) {
        let this = *self;
        presenter.stop_music(this.music);
        presenter.unload_music(this.music);
        this.player.dispose(presenter);
        this.tubes.release(presenter);
        presenter.unload_texture(this.background);
        presenter.unload_texture(this.ground);
    }
}

//! Crash screen with the final score.

use glam::Vec2;

use crate::assets::{MusicAsset, TextureAsset};
use crate::camera::Camera;
use crate::input::Input;
use crate::modes::{GameMode, ModeContext, ModeKind, Transition};
use crate::presenter::{MusicId, Presenter, Texture};

/// Shown after a crash; any tap returns to the menu.
pub struct GameOverMode {
    camera: Camera,
    background: Texture,
    banner: Texture,
    music: MusicId,
    score: u32,
}

impl GameOverMode {
    pub fn enter(score: u32, ctx: &mut ModeContext<'_>) -> Self {
        let camera = Camera::with_viewport(ctx.config.viewport_width, ctx.config.viewport_height);
        let background = ctx.presenter.load_texture(TextureAsset::Background);
        let banner = ctx.presenter.load_texture(TextureAsset::GameOver);
        let music = ctx.presenter.load_music(MusicAsset::GameOver);
        ctx.presenter.play_music(music);

        Self {
            camera,
            background,
            banner,
            music,
            score,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl GameMode for GameOverMode {
    fn kind(&self) -> ModeKind {
        ModeKind::GameOver
    }

    fn handle_input(&mut self, input: &Input, _ctx: &mut ModeContext<'_>) -> Option<Transition> {
        input.tapped().then_some(Transition::Menu)
    }

    fn update(&mut self, _dt: f32, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition> {
        self.handle_input(input, ctx)
    }

    fn render(&self, presenter: &mut dyn Presenter) {
        let centre = self.camera.position;
        presenter.begin(&self.camera);
        presenter.draw(self.background.full_region(), Vec2::ZERO);
        presenter.draw(
            self.banner.full_region(),
            Vec2::new(centre.x - self.banner.width as f32 / 2.0, centre.y),
        );

        let line = format!("Score: {}", self.score);
        let width = presenter.text_width(&line, 1.0);
        presenter.draw_text(&line, Vec2::new(centre.x - width / 2.0, centre.y - 30.0), 1.0);
        presenter.end();
    }

    fn dispose(self: Box<Self>, presenter: &mut dyn Presenter) {
        presenter.stop_music(self.music);
        presenter.unload_music(self.music);
        presenter.unload_texture(self.background);
        presenter.unload_texture(self.banner);
    }
}

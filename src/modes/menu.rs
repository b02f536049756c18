//! Title screen.

use glam::Vec2;

use crate::assets::{MusicAsset, TextureAsset};
use crate::camera::Camera;
use crate::geometry::Rect;
use crate::input::Input;
use crate::modes::{GameMode, ModeContext, ModeKind, Transition};
use crate::presenter::{MusicId, Presenter, Texture};

/// Title screen with a single play button.
pub struct MenuMode {
    camera: Camera,
    background: Texture,
    play_button: Texture,
    title: Texture,
    music: MusicId,
    button_bounds: Rect,
}

impl MenuMode {
    pub fn enter(ctx: &mut ModeContext<'_>) -> Self {
        let camera = Camera::with_viewport(ctx.config.viewport_width, ctx.config.viewport_height);
        let background = ctx.presenter.load_texture(TextureAsset::Background);
        let play_button = ctx.presenter.load_texture(TextureAsset::PlayButton);
        let title = ctx.presenter.load_texture(TextureAsset::Title);
        let music = ctx.presenter.load_music(MusicAsset::Menu);
        ctx.presenter.play_music(music);

        let (w, h) = (play_button.width as f32, play_button.height as f32);
        let button_bounds = Rect::new(camera.position.x - w / 2.0, camera.position.y - h, w, h);

        Self {
            camera,
            background,
            play_button,
            title,
            music,
            button_bounds,
        }
    }

    pub fn button_bounds(&self) -> &Rect {
        &self.button_bounds
    }
}

impl GameMode for MenuMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Menu
    }

    fn handle_input(&mut self, input: &Input, _ctx: &mut ModeContext<'_>) -> Option<Transition> {
        let tap = input.tap?;
        let pressed = match tap.position {
            None => true,
            Some(point) => self.button_bounds.contains(self.camera.to_world(point)),
        };
        pressed.then_some(Transition::Play)
    }

    fn update(&mut self, _dt: f32, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition> {
        self.handle_input(input, ctx)
    }

    fn render(&self, presenter: &mut dyn Presenter) {
        presenter.begin(&self.camera);
        presenter.draw(self.background.full_region(), Vec2::ZERO);
        presenter.draw(self.play_button.full_region(), self.button_bounds.position());
        presenter.draw(
            self.title.full_region(),
            Vec2::new(
                self.camera.position.x - self.title.width as f32 / 2.0,
                self.camera.position.y + self.title.height as f32,
            ),
        );
        presenter.end();
    }

    fn dispose(self: Box<Self>, presenter: &mut dyn Presenter) {
        presenter.stop_music(self.music);
        presenter.unload_music(self.music);
        presenter.unload_texture(self.background);
        presenter.unload_texture(self.play_button);
        presenter.unload_texture(self.title);
    }
}

//! Host-facing lifecycle: create, update, render, dispose.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::{ConfigError, GameConfig};
use crate::input::Input;
use crate::modes::{ModeContext, ModeKind, ModeStack, Transition};
use crate::presenter::Presenter;

pub struct Game<P: Presenter> {
    presenter: P,
    config: GameConfig,
    rng: StdRng,
    stack: ModeStack,
}

impl<P: Presenter> Game<P> {
    /// Start at the menu with an entropy-seeded generator.
    pub fn create(config: GameConfig, presenter: P) -> Result<Self, ConfigError> {
        Self::with_rng(config, presenter, StdRng::from_entropy())
    }

    /// Start at the menu with a reproducible obstacle sequence.
    pub fn with_seed(config: GameConfig, presenter: P, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, presenter, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, presenter: P, rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut game = Self {
            presenter,
            config,
            rng,
            stack: ModeStack::new(),
        };

        let mut ctx = ModeContext {
            presenter: &mut game.presenter,
            rng: &mut game.rng,
            config: &game.config,
        };
        let menu = Transition::Menu.enter(&mut ctx);
        game.stack.push(menu);
        Ok(game)
    }

    /// Advance the active mode by `dt` seconds.
    pub fn update(&mut self, dt: f32, input: &Input) -> Option<ModeKind> {
        let mut ctx = ModeContext {
            presenter: &mut self.presenter,
            rng: &mut self.rng,
            config: &self.config,
        };
        self.stack.update(dt, input, &mut ctx)
    }

    pub fn render(&mut self) {
        self.stack.render(&mut self.presenter);
    }

    /// Release every mode's resources and hand the presenter back.
    pub fn dispose(mut self) -> P {
        self.stack.clear(&mut self.presenter);
        self.presenter
    }

    pub fn current_mode(&self) -> Option<ModeKind> {
        self.stack.top_kind()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}

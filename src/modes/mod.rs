//! Screen modes and the stack that switches between them.
//!
//! Exactly one mode, the top of the stack, receives update and render calls.
//! A mode never swaps itself out; it returns a [`Transition`] and the stack
//! builds the next mode and disposes the old one.

mod game_over;
mod menu;
mod play;

pub use game_over::GameOverMode;
pub use menu::MenuMode;
pub use play::PlayMode;

use log::{debug, info};
use rand::RngCore;

use crate::config::GameConfig;
use crate::input::Input;
use crate::presenter::Presenter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Menu,
    Play,
    GameOver,
}

/// A request, returned from an update, to replace the active mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Menu,
    Play,
    GameOver { score: u32 },
}

impl Transition {
    pub fn kind(self) -> ModeKind {
        match self {
            Self::Menu => ModeKind::Menu,
            Self::Play => ModeKind::Play,
            Self::GameOver { .. } => ModeKind::GameOver,
        }
    }

    /// Construct the requested mode, acquiring its resources.
    pub fn enter(self, ctx: &mut ModeContext<'_>) -> Box<dyn GameMode> {
        match self {
            Self::Menu => Box::new(MenuMode::enter(ctx)),
            Self::Play => Box::new(PlayMode::enter(ctx)),
            Self::GameOver { score } => Box::new(GameOverMode::enter(score, ctx)),
        }
    }
}

/// Everything a mode may touch during a tick besides its own state.
pub struct ModeContext<'a> {
    pub presenter: &'a mut dyn Presenter,
    pub rng: &'a mut dyn RngCore,
    pub config: &'a GameConfig,
}

pub trait GameMode {
    fn kind(&self) -> ModeKind;

    fn handle_input(&mut self, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition>;

    /// Advance by `dt` seconds. At most one transition is returned per call.
    fn update(&mut self, dt: f32, input: &Input, ctx: &mut ModeContext<'_>) -> Option<Transition>;

    fn render(&self, presenter: &mut dyn Presenter);

    /// Release every resource the mode acquired on entry.
    fn dispose(self: Box<Self>, presenter: &mut dyn Presenter);
}

#[derive(Default)]
pub struct ModeStack {
    modes: Vec<Box<dyn GameMode>>,
}

impl ModeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `mode` on top without disposing the current top.
    pub fn push(&mut self, mode: Box<dyn GameMode>) {
        info!("entering {:?}", mode.kind());
        self.modes.push(mode);
    }

    /// Dispose the current top and install `mode` in its place.
    pub fn replace_top(&mut self, mode: Box<dyn GameMode>, presenter: &mut dyn Presenter) {
        if let Some(old) = self.modes.pop() {
            debug!("disposing {:?}", old.kind());
            old.dispose(presenter);
        }
        self.push(mode);
    }

    pub fn peek(&self) -> Option<&dyn GameMode> {
        self.modes.last().map(|mode| &**mode)
    }

    pub fn top_kind(&self) -> Option<ModeKind> {
        self.peek().map(|mode| mode.kind())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Update the top mode and carry out any transition it asks for.
    /// Returns the kind of the newly installed mode, if any.
    pub fn update(&mut self, dt: f32, input: &Input, ctx: &mut ModeContext<'_>) -> Option<ModeKind> {
        let top = self.modes.last_mut()?;
        let transition = top.update(dt, input, ctx)?;
        let next = transition.enter(ctx);
        self.replace_top(next, &mut *ctx.presenter);
        Some(transition.kind())
    }

    pub fn render(&self, presenter: &mut dyn Presenter) {
        if let Some(top) = self.modes.last() {
            top.render(presenter);
        }
    }

    /// Dispose every mode, top first.
    pub fn clear(&mut self, presenter: &mut dyn Presenter) {
        while let Some(mode) = self.modes.pop() {
            debug!("disposing {:?}", mode.kind());
            mode.dispose(presenter);
        }
    }
}

//! Side-scrolling flap-through-the-gaps arcade game.
//!
//! The simulation core (modes, player physics, obstacle pool) never touches
//! a terminal or an audio device directly; everything it shows or plays goes
//! through the [`presenter::Presenter`] trait. [`display`] provides the
//! crossterm implementation used by the binary.

pub mod assets;
pub mod camera;
pub mod config;
pub mod display;
pub mod game;
pub mod geometry;
pub mod input;
pub mod modes;
pub mod presenter;
pub mod sprites;

pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use input::{Input, Tap};
pub use modes::{ModeKind, Transition};

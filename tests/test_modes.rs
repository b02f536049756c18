mod common;

use common::{Harness, RecordingPresenter};
use flappy_game::assets::{MusicAsset, TextureAsset};
use flappy_game::input::Input;
use flappy_game::modes::{GameMode, GameOverMode, MenuMode, ModeKind, ModeStack, Transition};
use flappy_game::{ConfigError, Game, GameConfig};
use glam::Vec2;

const DT: f32 = 1.0 / 30.0;

fn new_game() -> Game<RecordingPresenter> {
    Game::with_seed(GameConfig::default(), RecordingPresenter::new(), 7).expect("valid config")
}

// ── Menu ──────────────────────────────────────────────────────────────────────

#[test]
fn menu_button_sits_below_screen_centre() {
    let mut h = Harness::new();
    let menu = MenuMode::enter(&mut h.ctx());
    let b = menu.button_bounds();
    assert_eq!((b.x, b.y, b.width, b.height), (68.0, 142.0, 104.0, 58.0));
    assert_eq!(h.presenter.playing, Some(MusicAsset::Menu));
}

#[test]
fn menu_ignores_taps_outside_button() {
    let mut h = Harness::new();
    let mut menu = MenuMode::enter(&mut h.ctx());
    assert_eq!(menu.update(DT, &Input::tap_at(10.0, 10.0), &mut h.ctx()), None);
    assert_eq!(menu.update(DT, &Input::tap_at(120.0, 300.0), &mut h.ctx()), None);
    assert_eq!(menu.update(DT, &Input::none(), &mut h.ctx()), None);
}

#[test]
fn menu_starts_play_on_button_or_key() {
    let mut h = Harness::new();
    let mut menu = MenuMode::enter(&mut h.ctx());
    assert_eq!(
        menu.update(DT, &Input::tap_at(120.0, 170.0), &mut h.ctx()),
        Some(Transition::Play)
    );
    // Border of the button counts.
    assert_eq!(
        menu.handle_input(&Input::tap_at(68.0, 142.0), &mut h.ctx()),
        Some(Transition::Play)
    );
    assert_eq!(
        menu.update(DT, &Input::key_tap(), &mut h.ctx()),
        Some(Transition::Play)
    );
}

#[test]
fn menu_renders_background_button_and_title() {
    let mut h = Harness::new();
    let menu = MenuMode::enter(&mut h.ctx());
    menu.render(&mut h.presenter);
    let assets: Vec<TextureAsset> = h.presenter.draws.iter().map(|(a, _)| *a).collect();
    assert_eq!(
        assets,
        vec![TextureAsset::Background, TextureAsset::PlayButton, TextureAsset::Title]
    );
    // Title: (120 - 178/2, 200 + 48)
    assert_eq!(h.presenter.draws[2].1, Vec2::new(31.0, 248.0));
}

// ── GameOver ──────────────────────────────────────────────────────────────────

#[test]
fn game_over_returns_to_menu_on_any_tap() {
    let mut h = Harness::new();
    let mut over = GameOverMode::enter(12, &mut h.ctx());
    assert_eq!(over.score(), 12);
    assert_eq!(h.presenter.playing, Some(MusicAsset::GameOver));
    assert_eq!(over.update(DT, &Input::none(), &mut h.ctx()), None);
    assert_eq!(
        over.update(DT, &Input::tap_at(1.0, 1.0), &mut h.ctx()),
        Some(Transition::Menu)
    );
}

#[test]
fn game_over_shows_banner_and_final_score() {
    let mut h = Harness::new();
    let over = GameOverMode::enter(3, &mut h.ctx());
    over.render(&mut h.presenter);
    assert_eq!(h.presenter.draws[1], (TextureAsset::GameOver, Vec2::new(24.0, 200.0)));
    assert_eq!(h.presenter.texts.len(), 1);
    assert_eq!(h.presenter.texts[0].0, "Score: 3");
}

// ── ModeStack ─────────────────────────────────────────────────────────────────

#[test]
fn replace_top_disposes_previous_mode() {
    let mut h = Harness::new();
    let mut stack = ModeStack::new();
    assert!(stack.is_empty());

    stack.push(Transition::Menu.enter(&mut h.ctx()));
    let menu_handles = h.presenter.loaded();
    assert_eq!(stack.top_kind(), Some(ModeKind::Menu));

    let over = Transition::GameOver { score: 0 }.enter(&mut h.ctx());
    stack.replace_top(over, &mut h.presenter);

    assert_eq!(stack.len(), 1);
    assert_eq!(stack.top_kind(), Some(ModeKind::GameOver));
    assert_eq!(h.presenter.count_loaded(TextureAsset::PlayButton), 0);
    assert!(h.presenter.loaded() < menu_handles);
    assert_eq!(h.presenter.bad_releases, 0);
}

#[test]
fn push_keeps_previous_mode_alive() {
    let mut h = Harness::new();
    let mut stack = ModeStack::new();
    stack.push(Transition::Menu.enter(&mut h.ctx()));
    stack.push(Transition::GameOver { score: 1 }.enter(&mut h.ctx()));

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek().map(|m| m.kind()), Some(ModeKind::GameOver));
    assert_eq!(h.presenter.count_loaded(TextureAsset::PlayButton), 1);

    // Only the top receives updates.
    assert_eq!(
        stack.update(DT, &Input::key_tap(), &mut h.ctx()),
        Some(ModeKind::Menu)
    );
    assert_eq!(stack.len(), 2);

    stack.clear(&mut h.presenter);
    assert!(stack.is_empty());
    assert_eq!(h.presenter.loaded(), 0);
    assert_eq!(h.presenter.bad_releases, 0);
}

#[test]
fn stack_renders_top_only() {
    let mut h = Harness::new();
    let mut stack = ModeStack::new();
    stack.push(Transition::Menu.enter(&mut h.ctx()));
    stack.push(Transition::GameOver { score: 0 }.enter(&mut h.ctx()));
    stack.render(&mut h.presenter);
    assert_eq!(h.presenter.frames_begun, 1);
    assert!(h
        .presenter
        .draws
        .iter()
        .all(|(a, _)| *a != TextureAsset::PlayButton));
}

// ── Game lifecycle ────────────────────────────────────────────────────────────

#[test]
fn game_starts_at_menu() {
    let game = new_game();
    assert_eq!(game.config(), &GameConfig::default());
    assert_eq!(game.current_mode(), Some(ModeKind::Menu));
    assert_eq!(game.presenter().playing, Some(MusicAsset::Menu));
}

#[test]
fn invalid_config_is_rejected() {
    let config = GameConfig {
        tube_count: 0,
        ..GameConfig::default()
    };
    let result = Game::create(config, RecordingPresenter::new());
    assert!(matches!(result, Err(ConfigError::ZeroTubeCount)));
}

#[test]
fn full_round_trip_through_every_mode() {
    let mut game = new_game();

    assert_eq!(game.update(DT, &Input::key_tap()), Some(ModeKind::Play));
    assert_eq!(game.presenter().playing, Some(MusicAsset::Gameplay));

    // No input: the player drops onto the ground well before the first pair.
    let mut ticks = 0;
    let mut transitions = Vec::new();
    while game.current_mode() == Some(ModeKind::Play) && ticks < 300 {
        game.render();
        if let Some(kind) = game.update(DT, &Input::none()) {
            transitions.push(kind);
        }
        ticks += 1;
    }
    assert_eq!(transitions, vec![ModeKind::GameOver]);
    assert!(ticks < 60, "took {ticks} ticks to fall");

    assert_eq!(game.update(DT, &Input::none()), None);
    assert_eq!(game.update(DT, &Input::tap_at(5.0, 5.0)), Some(ModeKind::Menu));
    assert_eq!(game.presenter().playing, Some(MusicAsset::Menu));

    let presenter = game.dispose();
    assert_eq!(presenter.loaded(), 0);
    assert_eq!(presenter.bad_releases, 0);
}

#[test]
fn seeded_games_lay_out_identical_pools() {
    fn first_tops(seed: u64) -> Vec<f32> {
        let mut h = Harness::new();
        h.rng = rand::SeedableRng::seed_from_u64(seed);
        let play = flappy_game::modes::PlayMode::enter(&mut h.ctx());
        play.pairs().iter().map(|p| p.top_position().y).collect()
    }
    assert_eq!(first_tops(9), first_tops(9));
}

use std::fs::File;
use std::io::{stdout, BufWriter, Stdout};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal,
};
use log::{info, warn};

use flappy_game::display::{TerminalPresenter, TerminalSession};
use flappy_game::{Game, GameConfig, Input};

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

type Screen = TerminalPresenter<BufWriter<Stdout>>;

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode while the game runs, so log lines go to the
/// file named by `FLAPPY_LOG_FILE` instead of stderr.
fn init_logging() -> anyhow::Result<()> {
    match std::env::var_os("FLAPPY_LOG_FILE") {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Pipe(Box::new(file)))
                .init();
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"))
                .init();
        }
    }
    Ok(())
}

// ── Command line ──────────────────────────────────────────────────────────────

/// `--seed N` fixes the obstacle sequence.
fn parse_seed() -> anyhow::Result<Option<u64>> {
    let mut args = std::env::args().skip(1);
    let mut seed = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().context("--seed needs a value")?;
                let parsed = value
                    .parse()
                    .with_context(|| format!("invalid seed {value:?}"))?;
                seed = Some(parsed);
            }
            other => bail!("unknown argument {other:?} (usage: flappy_game [--seed N])"),
        }
    }
    Ok(seed)
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Control {
    Continue,
    Quit,
}

/// Fold one terminal event into this frame's input.
fn apply_event(event: Event, input: &mut Input, screen: &mut Screen) -> Control {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char(' ')
            | KeyCode::Enter
            | KeyCode::Up
            | KeyCode::Char('w')
            | KeyCode::Char('W') => *input = Input::key_tap(),
            _ => {}
        },
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => *input = screen.tap_at_cell(column, row),
        Event::Resize(cols, rows) => screen.resize(cols, rows),
        _ => {}
    }
    Control::Continue
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run(out: BufWriter<Stdout>, rx: &mpsc::Receiver<Event>, seed: Option<u64>) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let screen = TerminalPresenter::new(out, cols, rows);
    let config = GameConfig::default();
    let mut game = match seed {
        Some(seed) => Game::with_seed(config, screen, seed),
        None => Game::create(config, screen),
    }
    .context("building game")?;

    let mut last_frame = Instant::now();
    'frames: loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        let mut input = Input::none();
        while let Ok(event) = rx.try_recv() {
            if let Control::Quit = apply_event(event, &mut input, game.presenter_mut()) {
                break 'frames;
            }
        }

        let dt = frame_start.duration_since(last_frame).as_secs_f32();
        last_frame = frame_start;

        game.update(dt, &input);
        game.render();
        game.presenter_mut().present().context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }

    let screen = game.dispose();
    if screen.loaded_handles() > 0 {
        warn!("{} presentation handles still loaded at exit", screen.loaded_handles());
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let seed = parse_seed()?;
    info!("starting, seed {seed:?}");

    // Restores the terminal on drop, also when setup fails halfway.
    let session = TerminalSession::start(stdout()).context("preparing terminal")?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(BufWriter::new(stdout()), &rx, seed);

    // Restore before any error is printed.
    drop(session);
    result
}

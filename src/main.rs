//! Terminal tetrimino runner (default binary).
//!
//! Title screen, then the frame loop (render, poll input, step the engine)
//! until game over or quit, then the end screen.

use std::fs::File;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tetrimino::config::AppConfig;
use tetrimino::core::{audit, GameState, PieceCatalog};
use tetrimino::input::{should_quit, wait_for_any_key, InputSource, KeyboardState};
use tetrimino::term::{GameView, TerminalCanvas};

fn main() -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config)?;

    let catalog = load_catalog(&config)?;
    for mismatch in audit(&catalog) {
        warn!(
            "boundary table disagrees with catalog for {:?} {:?}: table {:?}, mask {:?}",
            mismatch.kind, mismatch.rotation, mismatch.table, mismatch.derived
        );
    }

    let seed = config.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");

    let mut canvas = TerminalCanvas::new()?;
    canvas.enter()?;

    let result = run(&mut canvas, &config, catalog, seed);

    // Always try to restore terminal state.
    let _ = canvas.exit();
    result
}

fn init_logging(config: &AppConfig) -> Result<()> {
    let file = File::create(&config.log_file)
        .with_context(|| format!("failed to create log file {}", config.log_file.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn load_catalog(config: &AppConfig) -> Result<PieceCatalog> {
    match &config.catalog_path {
        Some(path) => PieceCatalog::load(path)
            .with_context(|| format!("failed to load piece catalog {}", path.display())),
        None => Ok(PieceCatalog::classic()),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(
    canvas: &mut TerminalCanvas,
    config: &AppConfig,
    catalog: PieceCatalog,
    seed: u32,
) -> Result<()> {
    let view = GameView::new();

    view.render_title(canvas)?;
    if should_quit(wait_for_any_key()?) {
        return Ok(());
    }

    let mut game = GameState::with_seed(catalog, config.engine, seed);
    let mut keyboard = KeyboardState::new();
    let frame = Duration::from_millis(u64::from(config.frame_ms));
    let mut last_step = Instant::now();

    loop {
        view.render(canvas, &game.snapshot())?;

        // Drain input until the next frame is due.
        loop {
            let timeout = frame.saturating_sub(last_step.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!("quit at score {}", game.score());
                        return Ok(());
                    }
                    keyboard.handle_key_event(key);
                }
                Event::Resize(w, h) => canvas.resize(w, h),
                _ => {}
            }
        }

        let elapsed_ms = u32::try_from(last_step.elapsed().as_millis()).unwrap_or(u32::MAX);
        last_step = Instant::now();

        keyboard.update(elapsed_ms);
        let events = game.step(elapsed_ms, keyboard.frame_input());
        if events.game_over {
            break;
        }
    }

    let snap = game.snapshot();
    view.render_game_over(canvas, &snap)?;
    thread::sleep(Duration::from_millis(config.game_over_delay_ms));
    Ok(())
}

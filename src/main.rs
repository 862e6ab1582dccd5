//! Space Garbage runner (default binary).
//!
//! Steer the craft with the arrow keys (or WASD / hjkl), fire with space once
//! the plasma gun is unlocked, quit with `q`, `Esc` or `Ctrl-C`.

use std::time::Instant;

use anyhow::{bail, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use space_garbage::core::Game;
use space_garbage::input::{should_quit, ControlsHandler};
use space_garbage::setup::{init_logging, load_game_assets, next_deadline};
use space_garbage::term::{FrameBuffer, TerminalRenderer};
use space_garbage::GameConfig;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    if let Some(path) = &config.log_path {
        init_logging(path)?;
    }

    // Frames are loaded before touching the terminal so errors print normally.
    let assets = load_game_assets(&config.assets_dir)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &assets);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        warn!(error = %e, "game aborted");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, assets: &space_garbage::core::GameAssets) -> Result<()> {
    let (columns, rows) = crossterm::terminal::size()?;
    let (min_rows, min_columns) = assets.min_surface();
    if rows < min_rows || columns < min_columns {
        bail!("terminal is {columns}x{rows}, the game needs at least {min_columns}x{min_rows}");
    }

    let mut fb = FrameBuffer::new(rows, columns);
    let seed = config.resolve_seed();
    let mut game = Game::new(&mut fb, assets, seed, config.star_count);
    let mut controls = ControlsHandler::with_hold_ticks(config.hold_ticks);

    let tick_duration = config.tick_duration();
    let mut next_tick = Instant::now();

    loop {
        game.tick(&mut fb, controls.next_controls());
        term.draw(&fb)?;
        next_tick = next_deadline(next_tick, Instant::now(), tick_duration);

        // Input with timeout until next tick.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());
            if timeout.is_zero() || !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press && should_quit(key) {
                        info!(
                            year = game.world().year(),
                            ticks = game.scheduler().ticks(),
                            "player quit"
                        );
                        return Ok(());
                    }
                    controls.handle_key_event(key);
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }
    }
}

//! Startup helpers shared by the binary and the integration tests.

use std::fs::File;
use std::path::Path;
use std::rc::Rc;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::assets::FrameLibrary;
use crate::core::GameAssets;

/// Turn loaded frames into the shared handles the tasks animate with.
pub fn game_assets(library: FrameLibrary) -> Result<GameAssets> {
    let game_over = library
        .game_over
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("no game over frame loaded"))?;

    Ok(GameAssets {
        rocket: library.rocket.into(),
        garbage: library.garbage.into(),
        explosion: library.explosion.into(),
        game_over: Rc::from(game_over),
    })
}

/// Load the frame library under `dir` and convert it for the game.
pub fn load_game_assets(dir: &Path) -> Result<GameAssets> {
    let library = FrameLibrary::load(dir)
        .with_context(|| format!("loading frames from {}", dir.display()))?;
    game_assets(library)
}

/// Send `tracing` output to `path`, filtered by `RUST_LOG` (default `info`).
///
/// Stdout is the game screen, so logs only ever go to a file.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;
    Ok(())
}

/// Deadline of the tick after the one due at `deadline`.
///
/// A deadline that has already passed restarts the schedule from `now`, so a
/// stalled frame is not followed by a burst of catch-up ticks.
pub fn next_deadline(deadline: Instant, now: Instant, tick: Duration) -> Instant {
    let next = deadline + tick;
    if next <= now {
        now + tick
    } else {
        next
    }
}

//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{DEFAULT_STAR_COUNT, TICK_MS};

const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_HOLD_TICKS: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Root of the frame directories.
    pub assets_dir: PathBuf,
    pub tick_ms: u32,
    pub star_count: usize,
    /// Fixed RNG seed; `None` picks one from the clock.
    pub seed: Option<u32>,
    /// Ticks a key stays held after its last press on terminals without release events.
    pub hold_ticks: u32,
    /// Log file; logging is disabled when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            tick_ms: TICK_MS,
            star_count: DEFAULT_STAR_COUNT,
            seed: None,
            hold_ticks: DEFAULT_HOLD_TICKS,
            log_path: None,
        }
    }
}

impl GameConfig {
    /// Create from `SPACE_GARBAGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup. Unparsable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let assets_dir = non_empty("SPACE_GARBAGE_ASSETS")
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let tick_ms = non_empty("SPACE_GARBAGE_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let star_count = non_empty("SPACE_GARBAGE_STARS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.star_count);

        let seed = non_empty("SPACE_GARBAGE_SEED").and_then(|s| s.parse().ok());

        let hold_ticks = non_empty("SPACE_GARBAGE_HOLD_TICKS")
            .and_then(|s| s.parse().ok())
            .filter(|&ticks: &u32| ticks > 0)
            .unwrap_or(defaults.hold_ticks);

        let log_path = non_empty("SPACE_GARBAGE_LOG").map(PathBuf::from);

        Self {
            assets_dir,
            tick_ms,
            star_count,
            seed,
            hold_ticks,
            log_path,
        }
    }

    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// The configured seed, or one derived from the system clock.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

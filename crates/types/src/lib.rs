//! Core types module - shared data structures and constants
//!
//! This module defines the plain data shared by the simulation, the input layer
//! and the terminal layer. Nothing here performs I/O.
//!
//! # Timing
//!
//! The simulation advances in discrete ticks. Every tick each live task is
//! resumed exactly once and the screen is refreshed once.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Wall-clock duration of one tick |
//! | `TICKS_PER_YEAR` | 15 | Ticks between two year advances |
//! | `START_YEAR` | 1957 | Initial value of the world clock |
//! | `WEAPON_UNLOCK_YEAR` | 2020 | First year the craft may fire |
//!
//! # Garbage spawn delays
//!
//! Delay (in ticks) between two spawned pieces of garbage, by year:
//!
//! | Years | Delay |
//! |-------|-------|
//! | before 1961 | no spawning |
//! | 1961-1968 | 20 |
//! | 1969-1980 | 14 |
//! | 1981-1994 | 10 |
//! | 1995-2009 | 8 |
//! | 2010-2019 | 6 |
//! | 2020+ | 2 (floor) |
//!
//! # Examples
//!
//! ```
//! use space_garbage_types::{Controls, WEAPON_UNLOCK_YEAR};
//!
//! // Directions are normalised to -1, 0 or 1.
//! let controls = Controls::new(-5, 3, true);
//! assert_eq!(controls.rows, -1);
//! assert_eq!(controls.columns, 1);
//! assert!(controls.fire);
//!
//! assert!(Controls::default().is_idle());
//! assert_eq!(WEAPON_UNLOCK_YEAR, 2020);
//! ```

/// World clock value.
pub type Year = u32;

/// Fixed tick interval in milliseconds (10 ticks per second)
pub const TICK_MS: u32 = 100;

/// Distance in cells between the surface edge and the play area.
pub const BORDER_INDENT: u16 = 1;

/// Rows below the play area reserved for the status line.
pub const STATUS_LINE_ROWS: u16 = 1;

/// Initial value of the world clock.
pub const START_YEAR: Year = 1957;

/// The plasma gun becomes available in this year.
pub const WEAPON_UNLOCK_YEAR: Year = 2020;

/// Ticks between two year advances (1.5s at the default tick rate).
pub const TICKS_PER_YEAR: u32 = 15;

/// Garbage descent speed in rows per tick.
pub const GARBAGE_SPEED: f64 = 0.5;

/// Projectile vertical speed in rows per tick (negative = upwards).
pub const PROJECTILE_ROW_SPEED: f64 = -0.3;

/// Projectile horizontal speed in columns per tick.
pub const PROJECTILE_COLUMN_SPEED: f64 = 0.0;

/// Maximum craft speed along the row axis.
pub const ROW_SPEED_LIMIT: f64 = 2.0;

/// Maximum craft speed along the column axis.
pub const COLUMN_SPEED_LIMIT: f64 = 2.0;

/// Fraction of the craft speed kept from one tick to the next.
pub const SPEED_FADING: f64 = 0.8;

/// Number of decorative stars seeded at startup.
pub const DEFAULT_STAR_COUNT: usize = 150;

/// Glyphs a star may use.
pub const STAR_SYMBOLS: [char; 4] = ['+', '*', '.', ':'];

/// Star phase durations in ticks: dim, normal, bold, normal.
pub const BLINK_PHASE_TICKS: [u32; 4] = [20, 3, 5, 3];

/// Upper bound (inclusive) of a star's random initial offset.
pub const BLINK_MAX_OFFSET: u32 = 10;

/// First year garbage starts falling.
pub const FIRST_SPAWN_YEAR: Year = 1961;

/// Spawn delays as `(from_year, ticks)`, sorted by year.
///
/// The entry with the greatest `from_year` not exceeding the current year wins.
pub const SPAWN_DELAYS: [(Year, u32); 6] = [
    (1961, 20),
    (1969, 14),
    (1981, 10),
    (1995, 8),
    (2010, 6),
    (2020, 2),
];

/// Spawn delay floor.
pub const MIN_SPAWN_DELAY: u32 = 2;

/// Scripted events shown by the banner, keyed by year.
pub const PHRASES: [(Year, &str); 8] = [
    (1957, "First Sputnik"),
    (1961, "Gagarin flew!"),
    (1969, "Armstrong got on the moon!"),
    (1971, "First orbital space station Salute-1"),
    (1981, "Flight of the Shuttle Columbia"),
    (1998, "ISS start building"),
    (2011, "Messenger launch to Mercury"),
    (2020, "Take the plasma gun! Shoot the garbage!"),
];


/// Brightness attribute of a drawn cell.
///
/// Stars cycle through all three; everything else is drawn `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brightness {
    Dim,
    #[default]
    Normal,
    Bold,
}

/// Player intent for one tick.
///
/// `rows` and `columns` are always -1, 0 or 1. Negative rows point up,
/// negative columns point left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows: i8,
    pub columns: i8,
    pub fire: bool,
}

impl Controls {
    pub fn new(rows: i8, columns: i8, fire: bool) -> Self {
        Self {
            rows: rows.signum(),
            columns: columns.signum(),
            fire,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.rows == 0 && self.columns == 0 && !self.fire
    }
}

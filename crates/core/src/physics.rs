//! Craft speed smoothing.
//!
//! Speed fades every tick and is nudged towards the pressed direction with an
//! acceleration that shrinks as the speed approaches its limit.

use crate::types::{COLUMN_SPEED_LIMIT, ROW_SPEED_LIMIT, SPEED_FADING};

/// Speed limits and fading used by [`update_speed_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimits {
    pub row: f64,
    pub column: f64,
    /// Fraction of speed kept per tick, in `[0, 1]`.
    pub fading: f64,
}

impl Default for SpeedLimits {
    fn default() -> Self {
        Self {
            row: ROW_SPEED_LIMIT,
            column: COLUMN_SPEED_LIMIT,
            fading: SPEED_FADING,
        }
    }
}

/// New `(row_speed, column_speed)` after one tick with the given directions.
pub fn update_speed(row_speed: f64, column_speed: f64, rows_direction: i8, columns_direction: i8) -> (f64, f64) {
    update_speed_with(
        row_speed,
        column_speed,
        rows_direction,
        columns_direction,
        SpeedLimits::default(),
    )
}

pub fn update_speed_with(
    row_speed: f64,
    column_speed: f64,
    rows_direction: i8,
    columns_direction: i8,
    limits: SpeedLimits,
) -> (f64, f64) {
    debug_assert!((-1..=1).contains(&rows_direction));
    debug_assert!((-1..=1).contains(&columns_direction));

    let fading = limits.fading.clamp(0.0, 1.0);
    let mut row_speed = row_speed * fading;
    let mut column_speed = column_speed * fading;

    if rows_direction != 0 {
        row_speed = accelerate(row_speed, limits.row.abs(), rows_direction > 0);
    }
    if columns_direction != 0 {
        column_speed = accelerate(column_speed, limits.column.abs(), columns_direction > 0);
    }

    (row_speed, column_speed)
}

fn accelerate(speed: f64, limit: f64, forward: bool) -> f64 {
    if limit == 0.0 {
        return 0.0;
    }
    let delta = (speed / limit).cos() * 0.75;
    let result = if forward { speed + delta } else { speed - delta };
    let result = result.clamp(-limit, limit);
    if result.abs() < 0.1 {
        0.0
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_speed_decays_to_rest() {
        let (mut r, mut c) = (2.0, -2.0);
        for _ in 0..100 {
            (r, c) = update_speed(r, c, 0, 0);
        }
        assert!(r.abs() < 1e-6);
        assert!(c.abs() < 1e-6);
    }

    #[test]
    fn test_pressing_accelerates_in_direction() {
        let (r, c) = update_speed(0.0, 0.0, 1, -1);
        assert!(r > 0.0);
        assert!(c < 0.0);
        assert!((r - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_speed_never_exceeds_limit() {
        let (mut r, mut c) = (0.0, 0.0);
        for _ in 0..200 {
            (r, c) = update_speed(r, c, -1, 1);
            assert!(r.abs() <= ROW_SPEED_LIMIT);
            assert!(c.abs() <= COLUMN_SPEED_LIMIT);
        }
        assert!(r < -1.0);
        assert!(c > 1.0);
    }

    #[test]
    fn test_tiny_speed_snaps_to_zero() {
        let limits = SpeedLimits {
            fading: 1.0,
            ..SpeedLimits::default()
        };
        // Pushing back against a speed that almost cancels.
        let (r, _) = update_speed_with(0.7, 0.0, -1, 0, limits);
        assert_eq!(r, 0.0);
    }
}

//! Year-keyed tables: garbage spawn rate, scripted phrases, weapon gate.

use crate::types::{Year, PHRASES, SPAWN_DELAYS, WEAPON_UNLOCK_YEAR};

/// Ticks between two spawned pieces of garbage in `year`, or `None` while
/// spawning is disabled.
pub fn spawn_delay(year: Year) -> Option<u32> {
    SPAWN_DELAYS
        .iter()
        .rev()
        .find(|&&(from, _)| year >= from)
        .map(|&(_, ticks)| ticks)
}

/// The scripted phrase for exactly `year`, if any.
pub fn phrase(year: Year) -> Option<&'static str> {
    PHRASES
        .iter()
        .find(|&&(y, _)| y == year)
        .map(|&(_, text)| text)
}

pub fn weapon_unlocked(year: Year) -> bool {
    year >= WEAPON_UNLOCK_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIRST_SPAWN_YEAR, MIN_SPAWN_DELAY, START_YEAR};

    #[test]
    fn test_spawning_disabled_before_first_year() {
        assert_eq!(spawn_delay(START_YEAR), None);
        assert_eq!(spawn_delay(FIRST_SPAWN_YEAR - 1), None);
        assert_eq!(spawn_delay(FIRST_SPAWN_YEAR), Some(20));
    }

    #[test]
    fn test_spawn_delay_steps() {
        assert_eq!(spawn_delay(1968), Some(20));
        assert_eq!(spawn_delay(1969), Some(14));
        assert_eq!(spawn_delay(1980), Some(14));
        assert_eq!(spawn_delay(1981), Some(10));
        assert_eq!(spawn_delay(1995), Some(8));
        assert_eq!(spawn_delay(2010), Some(6));
        assert_eq!(spawn_delay(2019), Some(6));
        assert_eq!(spawn_delay(2020), Some(MIN_SPAWN_DELAY));
        assert_eq!(spawn_delay(3000), Some(MIN_SPAWN_DELAY));
    }

    #[test]
    fn test_phrases_match_exact_year_only() {
        assert_eq!(phrase(1957), Some("First Sputnik"));
        assert_eq!(phrase(1958), None);
        assert_eq!(phrase(1961), Some("Gagarin flew!"));
        assert_eq!(phrase(2020), Some("Take the plasma gun! Shoot the garbage!"));
    }

    #[test]
    fn test_weapon_gate() {
        assert!(!weapon_unlocked(2019));
        assert!(weapon_unlocked(2020));
    }
}

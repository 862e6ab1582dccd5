//! Held-key tracking for terminal environments.
//!
//! Most terminals only report presses and auto-repeats. A key therefore counts
//! as held for a few ticks after its last press or repeat event. Once the
//! terminal has reported a release, keys stay held until released instead.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, ControlKey};
use crate::types::Controls;

// Bridges the gap between the first press and the terminal's auto-repeat.
const DEFAULT_HOLD_TICKS: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Held {
    key: ControlKey,
    ticks_left: u32,
}

/// Folds key events into one [`Controls`] value per tick.
#[derive(Debug, Clone)]
pub struct ControlsHandler {
    held: ArrayVec<Held, 5>,
    hold_ticks: u32,
    release_events: bool,
}

impl ControlsHandler {
    pub fn new() -> Self {
        Self::with_hold_ticks(DEFAULT_HOLD_TICKS)
    }

    pub fn with_hold_ticks(hold_ticks: u32) -> Self {
        Self {
            held: ArrayVec::new(),
            hold_ticks: hold_ticks.max(1),
            release_events: false,
        }
    }

    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    /// True once the terminal has reported at least one key release.
    pub fn reports_releases(&self) -> bool {
        self.release_events
    }

    /// Feed one terminal key event. Returns the mapped key, if any.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> Option<ControlKey> {
        let key = map_key(event)?;
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key),
            KeyEventKind::Release => {
                self.release_events = true;
                self.release(key);
            }
        }
        Some(key)
    }

    pub fn press(&mut self, key: ControlKey) {
        let ticks_left = self.hold_ticks;
        if let Some(held) = self.held.iter_mut().find(|h| h.key == key) {
            held.ticks_left = ticks_left;
        } else {
            // One slot per key kind, so this cannot overflow.
            let _ = self.held.try_push(Held { key, ticks_left });
        }
    }

    pub fn release(&mut self, key: ControlKey) {
        self.held.retain(|h| h.key != key);
    }

    pub fn is_held(&self, key: ControlKey) -> bool {
        self.held.iter().any(|h| h.key == key)
    }

    /// Controls for the tick about to run, then age every held key by one tick.
    pub fn next_controls(&mut self) -> Controls {
        let mut rows = 0i8;
        let mut columns = 0i8;
        let mut fire = false;
        for held in &self.held {
            let (r, c) = held.key.direction();
            rows += r;
            columns += c;
            fire |= held.key == ControlKey::Fire;
        }

        if !self.release_events {
            for held in self.held.iter_mut() {
                held.ticks_left = held.ticks_left.saturating_sub(1);
            }
            self.held.retain(|h| h.ticks_left > 0);
        }

        Controls::new(rows, columns, fire)
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for ControlsHandler {
    fn default() -> Self {
        Self::new()
    }
}

//! Twinkling background star.

use serde::Serialize;

use crate::scheduler::{Step, Task, TickContext};
use crate::types::{Brightness, BLINK_PHASE_TICKS};

/// Brightness of each phase, in cycle order.
const PHASES: [Brightness; 4] = [
    Brightness::Dim,
    Brightness::Normal,
    Brightness::Bold,
    Brightness::Normal,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blink {
    row: u16,
    column: u16,
    symbol: char,
    /// Extra dim ticks that keep stars out of step with each other.
    offset: u32,
    phase: usize,
    /// Ticks left in the current phase.
    remaining: u32,
    drawn: bool,
}

impl Blink {
    /// A star whose dim phases last `offset` extra ticks.
    pub fn new(row: u16, column: u16, symbol: char, offset: u32) -> Self {
        Self {
            row,
            column,
            symbol,
            offset,
            phase: 0,
            remaining: BLINK_PHASE_TICKS[0] + offset,
            drawn: false,
        }
    }

    fn phase_ticks(&self, phase: usize) -> u32 {
        match phase {
            0 => BLINK_PHASE_TICKS[0] + self.offset,
            _ => BLINK_PHASE_TICKS[phase],
        }
    }

    pub fn brightness(&self) -> Brightness {
        PHASES[self.phase]
    }

    pub fn position(&self) -> (u16, u16) {
        (self.row, self.column)
    }
}

impl Task for Blink {
    fn name(&self) -> &'static str {
        "blink"
    }

    fn step(&mut self, cx: &mut TickContext<'_>) -> Step {
        if !self.drawn {
            cx.canvas
                .put_char(self.row, self.column, self.symbol, self.brightness());
            self.drawn = true;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = (self.phase + 1) % PHASES.len();
            self.remaining = self.phase_ticks(self.phase);
            self.drawn = false;
        }
        Step::Yield
    }
}

//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first draw (and any draw after a size change or [`TerminalRenderer::invalidate`])
//! repaints the whole screen; later draws only emit runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer};
use crate::types::Brightness;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, diffing against the previous draw.
    ///
    /// The caller keeps drawing into the same `FrameBuffer`; the renderer keeps
    /// its own copy and reuses that allocation from one draw to the next.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.rows() == fb.rows() && prev.columns() == fb.columns() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<Brightness> = None;
    for row in 0..fb.rows() {
        out.queue(cursor::MoveTo(0, row))?;
        for column in 0..fb.columns() {
            let cell = fb.get(row, column).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Brightness> = None;

    for_each_changed_run(prev, next, |row, column, len| {
        out.queue(cursor::MoveTo(column, row))?;
        for dc in 0..len {
            let cell = next.get(row, column + dc).unwrap_or_default();
            print_cell(out, cell, &mut current)?;
        }
        Ok(())
    })?;

    if current.is_some() {
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn print_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<Brightness>) -> Result<()> {
    if *current != Some(cell.brightness) {
        apply_brightness_into(out, cell.brightness)?;
        *current = Some(cell.brightness);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn apply_brightness_into(out: &mut Vec<u8>, brightness: Brightness) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    match brightness {
        Brightness::Dim => {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        Brightness::Bold => {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        Brightness::Normal => {}
    }
    Ok(())
}

/// Call `f(row, column, len)` for every horizontal run of changed cells.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.rows() != next.rows() || prev.columns() != next.columns() {
        // Size changed: treat everything as dirty (row runs).
        for row in 0..next.rows() {
            f(row, 0, next.columns())?;
        }
        return Ok(());
    }

    let columns = next.columns();

    for row in 0..next.rows() {
        let mut column = 0;
        while column < columns {
            if prev.get(row, column) == next.get(row, column) {
                column += 1;
                continue;
            }

            let start = column;
            column += 1;
            while column < columns && prev.get(row, column) != next.get(row, column) {
                column += 1;
            }
            f(row, start, column - start)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_garbage_core::Canvas;

    fn runs(a: &FrameBuffer, b: &FrameBuffer) -> Vec<(u16, u16, u16)> {
        let mut runs = Vec::new();
        for_each_changed_run(a, b, |row, column, len| {
            runs.push((row, column, len));
            Ok(())
        })
        .unwrap();
        runs
    }

    #[test]
    fn changed_run_iterator_coalesces_adjacent_cells() {
        let a = FrameBuffer::new(1, 5);
        let mut b = FrameBuffer::new(1, 5);

        for column in 1..=3 {
            b.put_char(0, column, 'X', Brightness::Normal);
        }
        assert_eq!(runs(&a, &b), vec![(0, 1, 3)]);
    }

    #[test]
    fn brightness_change_alone_is_a_change() {
        let mut a = FrameBuffer::new(2, 3);
        let mut b = FrameBuffer::new(2, 3);
        a.put_char(1, 2, '*', Brightness::Dim);
        b.put_char(1, 2, '*', Brightness::Bold);
        assert_eq!(runs(&a, &b), vec![(1, 2, 1)]);
    }

    #[test]
    fn identical_buffers_encode_nothing_visible() {
        let a = FrameBuffer::new(3, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn resized_buffers_repaint_every_row() {
        let a = FrameBuffer::new(1, 2);
        let b = FrameBuffer::new(2, 3);
        assert_eq!(runs(&a, &b), vec![(0, 0, 3), (1, 0, 3)]);
    }

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_char(0, 0, 'A', Brightness::Normal);
        fb.put_char(1, 1, 'D', Brightness::Bold);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('D'));
    }
}

//! Drawing primitives shared by every task.
//!
//! The simulation never owns screen storage. It reaches the screen through the
//! [`Canvas`] trait, implemented by the terminal framebuffer and by [`Grid`] for
//! headless runs.
//!
//! Frames are multi-line ASCII pictures. Spaces inside a frame are transparent:
//! they are neither drawn nor erased, so overlapping frames do not punch holes
//! into each other.

use crate::types::{Brightness, BORDER_INDENT, STATUS_LINE_ROWS};

/// A character surface addressed by `(row, column)`.
pub trait Canvas {
    /// Surface size as `(rows, columns)`.
    fn size(&self) -> (u16, u16);

    /// Write one cell. Writes outside the surface are ignored.
    fn put_char(&mut self, row: u16, column: u16, ch: char, brightness: Brightness);
}

/// Bounding box of a frame as `(height, width)`.
pub fn frame_size(frame: &str) -> (u16, u16) {
    let mut height = 0u16;
    let mut width = 0u16;
    for line in frame.lines() {
        height += 1;
        width = width.max(line.chars().count() as u16);
    }
    (height, width)
}

/// Draw (or erase, when `erase` is set) a frame with its top-left corner at
/// `(row, column)`, rounded to the nearest cell.
///
/// Frames must fit inside the surface; callers clamp positions before drawing.
/// Release builds clip whatever does not fit.
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, row: f64, column: f64, frame: &str, erase: bool) {
    let (rows, columns) = canvas.size();
    let start_row = row.round() as i32;
    let start_column = column.round() as i32;

    debug_assert!(
        {
            let (h, w) = frame_size(frame);
            start_row >= 0
                && start_column >= 0
                && start_row + h as i32 <= rows as i32
                && start_column + w as i32 <= columns as i32
        },
        "frame drawn out of bounds at ({start_row}, {start_column}) on a {rows}x{columns} surface"
    );

    for (dy, line) in frame.lines().enumerate() {
        let r = start_row + dy as i32;
        if r < 0 {
            continue;
        }
        if r >= rows as i32 {
            break;
        }
        for (dx, symbol) in line.chars().enumerate() {
            let c = start_column + dx as i32;
            if c < 0 {
                continue;
            }
            if c >= columns as i32 {
                break;
            }
            if symbol == ' ' {
                continue;
            }
            let ch = if erase { ' ' } else { symbol };
            canvas.put_char(r as u16, c as u16, ch, Brightness::Normal);
        }
    }
}

/// Write a single line of text, clipped at the right edge.
pub fn draw_text<C: Canvas + ?Sized>(canvas: &mut C, row: u16, column: u16, text: &str, brightness: Brightness) {
    let (rows, columns) = canvas.size();
    if row >= rows {
        return;
    }
    for (dx, ch) in text.chars().enumerate() {
        let c = column as usize + dx;
        if c >= columns as usize {
            break;
        }
        canvas.put_char(row, c as u16, ch, brightness);
    }
}

/// Blank out `len` cells starting at `(row, column)`.
pub fn erase_text<C: Canvas + ?Sized>(canvas: &mut C, row: u16, column: u16, len: usize) {
    let (rows, columns) = canvas.size();
    if row >= rows {
        return;
    }
    let end = (column as usize + len).min(columns as usize);
    for c in column as usize..end {
        canvas.put_char(row, c as u16, ' ', Brightness::Normal);
    }
}

/// Draw the single-line border around the play area.
pub fn draw_border<C: Canvas + ?Sized>(canvas: &mut C) {
    let (rows, columns) = canvas.size();
    if rows < 2 || columns < 2 {
        return;
    }
    let (bottom, right) = (rows - 1, columns - 1);
    for c in 1..right {
        canvas.put_char(0, c, '─', Brightness::Normal);
        canvas.put_char(bottom, c, '─', Brightness::Normal);
    }
    for r in 1..bottom {
        canvas.put_char(r, 0, '│', Brightness::Normal);
        canvas.put_char(r, right, '│', Brightness::Normal);
    }
    canvas.put_char(0, 0, '┌', Brightness::Normal);
    canvas.put_char(0, right, '┐', Brightness::Normal);
    canvas.put_char(bottom, 0, '└', Brightness::Normal);
    canvas.put_char(bottom, right, '┘', Brightness::Normal);
}

/// Inclusive range of top-left rows/columns at which a `height x width` frame
/// stays inside the border: `(min_row, max_row, min_column, max_column)`.
///
/// The last row inside the border belongs to the status line, not the play area.
///
/// On surfaces too small for the frame the maximum collapses onto the minimum.
pub fn play_area_limits(surface: (u16, u16), height: u16, width: u16) -> (f64, f64, f64, f64) {
    let (rows, columns) = surface;
    let min = BORDER_INDENT as f64;
    let max_row = (rows as f64 - height as f64 - BORDER_INDENT as f64 - STATUS_LINE_ROWS as f64).max(min);
    let max_column = (columns as f64 - width as f64 - BORDER_INDENT as f64).max(min);
    (min, max_row, min, max_column)
}

/// In-memory canvas used for headless runs and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u16,
    columns: u16,
    cells: Vec<(char, Brightness)>,
    writes: u64,
}

impl Grid {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            cells: vec![(' ', Brightness::Normal); rows as usize * columns as usize],
            writes: 0,
        }
    }

    fn idx(&self, row: u16, column: u16) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(row as usize * self.columns as usize + column as usize)
    }

    pub fn get(&self, row: u16, column: u16) -> Option<char> {
        self.idx(row, column).map(|i| self.cells[i].0)
    }

    pub fn brightness(&self, row: u16, column: u16) -> Option<Brightness> {
        self.idx(row, column).map(|i| self.cells[i].1)
    }

    /// One row as a string.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.columns)
            .map(|c| self.get(row, c).unwrap_or(' '))
            .collect()
    }

    /// Whether `needle` appears on any single row.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.rows).any(|r| self.row_text(r).contains(needle))
    }

    /// Total number of `put_char` calls that landed on the grid.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Canvas for Grid {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put_char(&mut self, row: u16, column: u16, ch: char, brightness: Brightness) {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = (ch, brightness);
            self.writes += 1;
        }
    }
}

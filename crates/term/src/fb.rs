//! Framebuffer of character cells.

use space_garbage_core::Canvas;

use crate::types::Brightness;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub brightness: Brightness,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            brightness: Brightness::Normal,
        }
    }
}

/// Row-major grid of cells, addressed by `(row, column)`.
///
/// The game draws incrementally, so the buffer is persistent: it always holds
/// the full screen as the tasks left it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: u16,
    columns: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(rows: u16, columns: u16) -> Self {
        let len = (rows as usize) * (columns as usize);
        Self {
            rows,
            columns,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, row: u16, column: u16) -> Option<usize> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some((row as usize) * (self.columns as usize) + (column as usize))
    }

    pub fn get(&self, row: u16, column: u16) -> Option<Cell> {
        self.idx(row, column).map(|i| self.cells[i])
    }

    pub fn set(&mut self, row: u16, column: u16, cell: Cell) {
        if let Some(i) = self.idx(row, column) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Text of one row, for tests and logs.
    pub fn row_text(&self, row: u16) -> String {
        (0..self.columns)
            .map(|c| self.get(row, c).map_or(' ', |cell| cell.ch))
            .collect()
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put_char(&mut self, row: u16, column: u16, ch: char, brightness: Brightness) {
        self.set(row, column, Cell { ch, brightness });
    }
}

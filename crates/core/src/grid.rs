//! Grid module - the settled playfield
//!
//! The grid is a 10x20 field where each cell is empty or holds a settled block.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! The falling piece is never stored here; see [`crate::stage`] for the overlay.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (STAGE_WIDTH as usize) * (STAGE_HEIGHT as usize);

/// Row indices removed by a single sweep.
pub type ClearedRows = ArrayVec<usize, { STAGE_HEIGHT as usize }>;

/// The settled grid - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= STAGE_WIDTH as i8 || y < 0 || y >= STAGE_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (STAGE_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        STAGE_WIDTH
    }

    pub fn height(&self) -> u8 {
        STAGE_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Place a settled block of `kind` at (x, y)
    pub fn fill(&mut self, x: i8, y: i8, kind: PieceKind) -> bool {
        self.set(x, y, Cell::settled(kind))
    }

    /// Within bounds and holding a settled block
    pub fn is_settled(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_settled())
    }

    /// Within bounds and holding any occupied cell
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(cell) if cell.is_occupied())
    }

    /// Slice of the cells in row `y`
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= STAGE_HEIGHT as usize {
            return None;
        }
        let start = y * STAGE_WIDTH as usize;
        Some(&self.cells[start..start + STAGE_WIDTH as usize])
    }

    /// Check if every column of row `y` is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(Cell::is_occupied))
            .unwrap_or(false)
    }

    /// Remove all full rows at once and return their indices (sorted bottom to top).
    ///
    /// Rows above each removed row shift down; the same number of empty rows
    /// appear at the top. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = STAGE_WIDTH as usize;
        let mut write_y = STAGE_HEIGHT as usize;

        for read_y in (0..STAGE_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);

        cleared
    }

    /// Number of occupied cells on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_occupied()).count()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a grid from rows of text, bottom-aligned.
    ///
    /// `.` is empty, any piece letter is a settled block of that kind. Rows
    /// not given are empty. Lines longer than the stage width are truncated.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let offset = (STAGE_HEIGHT as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().enumerate().take(STAGE_HEIGHT as usize) {
            for (x, ch) in line.chars().enumerate().take(STAGE_WIDTH as usize) {
                if let Some(kind) = PieceKind::from_str(&ch.to_string()) {
                    grid.fill(x as i8, (offset + i) as i8, kind);
                }
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

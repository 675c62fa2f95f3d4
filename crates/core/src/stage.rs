//! Stage compositor - overlays the falling piece and settles it into the grid

use crate::grid::{ClearedRows, Grid};
use crate::player::Tetromino;
use crate::types::{Cell, STAGE_HEIGHT, STAGE_WIDTH};

/// Row-major grid of cells ready for a renderer.
pub type DisplayGrid = [[Cell; STAGE_WIDTH as usize]; STAGE_HEIGHT as usize];

/// Result of writing a piece into the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettleReport {
    /// Rows removed by this settle, bottom to top, in pre-clear coordinates
    pub cleared_rows: ClearedRows,
}

impl SettleReport {
    pub fn rows_cleared(&self) -> u32 {
        self.cleared_rows.len() as u32
    }
}

/// Compose a display grid: settled cells plus the piece's in-bounds minos
/// marked as active overlay. The grid itself is not modified.
pub fn compose(grid: &Grid, piece: Option<&Tetromino>) -> DisplayGrid {
    let mut out = [[Cell::Empty; STAGE_WIDTH as usize]; STAGE_HEIGHT as usize];
    compose_into(grid, piece, &mut out);
    out
}

/// Allocation-free variant of [`compose`] writing into an existing buffer.
pub fn compose_into(grid: &Grid, piece: Option<&Tetromino>, out: &mut DisplayGrid) {
    for (y, row) in out.iter_mut().enumerate() {
        if let Some(src) = grid.row(y) {
            row.copy_from_slice(src);
        }
    }

    if let Some(piece) = piece {
        for (x, y) in piece.cells() {
            if (0..STAGE_WIDTH as i8).contains(&x) && (0..STAGE_HEIGHT as i8).contains(&y) {
                out[y as usize][x as usize] = Cell::active(piece.kind);
            }
        }
    }
}

/// Write `piece` permanently into `grid`, then sweep every complete row.
///
/// Minos above the stage are discarded. All complete rows are removed in one
/// pass, so the result does not depend on the order rows are found in.
pub fn settle(grid: &mut Grid, piece: &Tetromino) -> SettleReport {
    for (x, y) in piece.cells() {
        grid.fill(x, y, piece.kind);
    }

    let cleared_rows = grid.clear_full_rows();
    log::debug!(
        "settled {} at ({}, {}) rotation {}, cleared {} row(s)",
        piece.kind.as_str(),
        piece.x,
        piece.y,
        piece.rotation,
        cleared_rows.len()
    );

    SettleReport { cleared_rows }
}

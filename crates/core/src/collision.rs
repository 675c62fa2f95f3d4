//! Collision detection against the stage walls, floor and settled blocks
//!
//! The top of the stage is open: minos above row 0 never collide, so pieces
//! may enter the field partially hidden.

use crate::grid::Grid;
use crate::player::Tetromino;
use crate::types::{RotateDirection, STAGE_HEIGHT, STAGE_WIDTH};

/// A proposed change of placement: a shift plus an optional rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Displacement {
    pub dx: i8,
    pub dy: i8,
    pub rotate: Option<RotateDirection>,
}

impl Displacement {
    /// No movement at all (tests the current placement)
    pub const NONE: Displacement = Displacement {
        dx: 0,
        dy: 0,
        rotate: None,
    };

    pub fn shift(dx: i8, dy: i8) -> Self {
        Self {
            dx,
            dy,
            rotate: None,
        }
    }

    pub fn rotate(dir: RotateDirection) -> Self {
        Self {
            dx: 0,
            dy: 0,
            rotate: Some(dir),
        }
    }

    pub fn with_dx(self, dx: i8) -> Self {
        Self { dx, ..self }
    }
}

/// Would `piece` collide after applying `displacement`?
///
/// A mino collides if its column leaves `[0, STAGE_WIDTH)`, its row reaches
/// `STAGE_HEIGHT`, or it lands on a settled block. Pure: neither the piece
/// nor the grid is touched.
pub fn is_colliding(piece: &Tetromino, grid: &Grid, displacement: Displacement) -> bool {
    piece
        .displaced(displacement)
        .cells()
        .iter()
        .any(|&(x, y)| cell_blocked(grid, x, y))
}

#[inline(always)]
fn cell_blocked(grid: &Grid, x: i8, y: i8) -> bool {
    if x < 0 || x >= STAGE_WIDTH as i8 || y >= STAGE_HEIGHT as i8 {
        return true;
    }
    if y < 0 {
        return false;
    }
    grid.is_settled(x, y)
}

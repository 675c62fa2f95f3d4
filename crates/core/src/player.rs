//! Active piece - the one piece currently falling through the stage

use crate::collision::{is_colliding, Displacement};
use crate::grid::Grid;
use crate::pieces::{get_shape, kick_offsets, spawn_position, state_count, PieceShape};
use crate::types::{MoveDirection, PieceKind, RotateDirection};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    /// Index into the kind's rotation states
    pub rotation: u8,
    pub x: i8,
    pub y: i8,
    /// Set when a downward move was blocked; the piece is about to settle.
    pub collided: bool,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: 0,
            x,
            y,
            collided: false,
        }
    }

    /// Place a tetromino at an explicit anchor and rotation.
    pub fn at(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation: rotation % state_count(kind),
            x,
            y,
            collided: false,
        }
    }

    /// Get the shape (mino offsets) for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute (x, y) of every mino
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// The piece after `displacement`, without any legality check.
    pub fn displaced(&self, displacement: Displacement) -> Self {
        let rotation = match displacement.rotate {
            Some(dir) => dir.apply(self.rotation, state_count(self.kind)),
            None => self.rotation,
        };
        Self {
            rotation,
            x: self.x + displacement.dx,
            y: self.y + displacement.dy,
            ..*self
        }
    }

    /// Shift one column if the destination is free.
    ///
    /// Returns false (and leaves the piece untouched) on collision.
    pub fn try_move(&mut self, grid: &Grid, dir: MoveDirection) -> bool {
        let shift = Displacement::shift(dir.dx(), 0);
        if is_colliding(self, grid, shift) {
            return false;
        }
        *self = self.displaced(shift);
        true
    }

    /// Rotate with horizontal kicks.
    ///
    /// Tries the plain rotation first, then the offsets from
    /// [`kick_offsets`] up to `max_kick`. Returns the accepted kick, or None
    /// if every placement collided; the piece is then unchanged.
    pub fn try_rotate(&mut self, grid: &Grid, dir: RotateDirection, max_kick: i8) -> Option<i8> {
        let found = std::iter::once(0)
            .chain(kick_offsets(max_kick))
            .find(|&kick| !is_colliding(self, grid, Displacement::rotate(dir).with_dx(kick)));

        match found {
            Some(kick) => {
                *self = self.displaced(Displacement::rotate(dir).with_dx(kick));
                Some(kick)
            }
            None => {
                log::trace!(
                    "rotation of {} at ({}, {}) rejected",
                    self.kind.as_str(),
                    self.x,
                    self.y
                );
                None
            }
        }
    }

    /// Whether the piece can move one row down
    pub fn can_fall(&self, grid: &Grid) -> bool {
        !is_colliding(self, grid, Displacement::shift(0, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tetromino_new() {
        let piece = Tetromino::new(PieceKind::T);

        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, 0);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert!(!piece.collided);
    }

    #[test]
    fn test_cells_are_anchored() {
        let piece = Tetromino::at(PieceKind::I, 0, 2, 5);
        assert_eq!(piece.cells(), [(2, 5), (3, 5), (4, 5), (5, 5)]);
    }

    #[test]
    fn test_move_blocked_by_wall() {
        let grid = Grid::new();
        let mut piece = Tetromino::at(PieceKind::O, 0, 0, 5);

        assert!(!piece.try_move(&grid, MoveDirection::Left));
        assert_eq!(piece.x, 0);
        assert!(piece.try_move(&grid, MoveDirection::Right));
        assert_eq!(piece.x, 1);
    }

    #[test]
    fn test_rotate_in_open_space_needs_no_kick() {
        let grid = Grid::new();
        let mut piece = Tetromino::at(PieceKind::T, 0, 4, 5);

        assert_eq!(piece.try_rotate(&grid, RotateDirection::Cw, 2), Some(0));
        assert_eq!(piece.rotation, 1);
        assert_eq!(piece.try_rotate(&grid, RotateDirection::Ccw, 2), Some(0));
        assert_eq!(piece.rotation, 0);
    }

    #[test]
    fn test_o_piece_rotation_is_identity() {
        let grid = Grid::new();
        let mut piece = Tetromino::new(PieceKind::O);
        let before = piece.cells();

        assert_eq!(piece.try_rotate(&grid, RotateDirection::Cw, 2), Some(0));
        assert_eq!(piece.cells(), before);
    }

    #[test]
    fn test_right_wall_kick_moves_left() {
        let grid = Grid::new();
        // Vertical I in column 9.
        let mut piece = Tetromino::at(PieceKind::I, 1, 8, 5);

        assert_eq!(piece.try_rotate(&grid, RotateDirection::Cw, 2), Some(-2));
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.x, 6);
    }

    #[test]
    fn test_zero_kick_bound_rejects_blocked_rotation() {
        let grid = Grid::new();
        let mut piece = Tetromino::at(PieceKind::I, 1, -1, 5);
        let before = piece;

        assert_eq!(piece.try_rotate(&grid, RotateDirection::Cw, 0), None);
        assert_eq!(piece, before);
    }
}

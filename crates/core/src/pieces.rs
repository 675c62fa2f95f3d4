//! Pieces module - the tetromino catalog
//!
//! Every shape is static data addressed by [`PieceKind`] and a rotation index.
//! Shapes list the four occupied cells of a square occupancy box as (dx, dy)
//! offsets from the box's top-left corner. Rotation-0 states keep their top
//! row occupied so pieces enter the stage flush with row 0.

use crate::types::{PieceKind, STAGE_WIDTH};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const O_STATES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

/// All distinct rotation states of a piece kind
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states (1, 2 or 4)
pub fn state_count(kind: PieceKind) -> u8 {
    rotation_states(kind).len() as u8
}

/// Get the shape (mino offsets) for a piece kind and rotation index.
///
/// The index wraps modulo the kind's state count.
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation as usize % states.len()]
}

/// Side length of the square occupancy box
pub fn box_size(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Spawn anchor for a new piece (x, y)
///
/// Horizontally centered on the box; vertically placed so the topmost
/// occupied row of the spawn state lands on row 0.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let x = (STAGE_WIDTH as i8 - box_size(kind) as i8) / 2;
    let top = get_shape(kind, 0)
        .iter()
        .map(|&(_, dy)| dy)
        .min()
        .unwrap_or(0);
    (x, -top)
}

/// Horizontal kick offsets tried after a blocked rotation: 1, -1, 2, -2, ...
///
/// # Examples
///
/// ```
/// use stackfall_core::pieces::kick_offsets;
///
/// let kicks: Vec<i8> = kick_offsets(2).collect();
/// assert_eq!(kicks, vec![1, -1, 2, -2]);
/// assert_eq!(kick_offsets(0).count(), 0);
/// ```
pub fn kick_offsets(max_kick: i8) -> impl Iterator<Item = i8> {
    (1..=max_kick.max(0)).flat_map(|k| [k, -k])
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so the core engine,
//! the input mapper and the terminal view can all share them.
//!
//! # Stage Dimensions
//!
//! Standard playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host loop timestep (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Fall interval at level 0 |
//! | `MIN_DROP_MS` | 100 | Fastest fall interval |
//! | `SOFT_DROP_GRACE_MS` | 150 | Soft drop release emulation window |
//!
//! The fall interval at level `n` is `max(MIN_DROP_MS, BASE_DROP_MS / (n + 1))`.
//!
//! # Examples
//!
//! ```
//! use stackfall_types::{GameCommand, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let command = GameCommand::from_str("rotateCw").unwrap();
//! assert_eq!(command, GameCommand::RotateCw);
//!
//! assert_eq!(STAGE_WIDTH, 10);
//! assert_eq!(STAGE_HEIGHT, 20);
//! ```

/// Stage width in cells (10 columns)
pub const STAGE_WIDTH: u8 = 10;

/// Stage height in cells (20 rows)
pub const STAGE_HEIGHT: u8 = 20;

/// Host loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval at level 0 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Fall interval floor, reached at level 9
pub const MIN_DROP_MS: u32 = 100;

/// Soft drop is considered released after this long without a down-key event.
pub const SOFT_DROP_GRACE_MS: u32 = 150;

/// Cleared rows needed to advance one level
pub const ROWS_PER_LEVEL: u32 = 10;

/// Widest horizontal kick tried when a rotation collides
pub const MAX_KICK: i8 = 2;

/// Row clear scoring table (classic scoring)
///
/// Base points for clearing N rows at once at level 0:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(BASE_DROP_MS, 1000);
        assert_eq!(MIN_DROP_MS, 100);
        assert_eq!(ROWS_PER_LEVEL, 10);
        assert_eq!(LINE_SCORES, [0, 40, 100, 300, 1200]);
    }

    #[test]
    fn command_names_round_trip_through_parser() {
        for command in GameCommand::ALL {
            assert_eq!(GameCommand::from_str(command.as_str()), Some(command));
        }
    }
}

/// The seven tetromino piece kinds
///
/// The kind doubles as the color identity of a cell:
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every piece kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// A cell on the stage
///
/// `Occupied::active` separates the falling piece's overlay cells (only ever
/// present in a composed display grid) from permanently settled blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied { kind: PieceKind, active: bool },
}

impl Cell {
    /// A permanently settled block of the given kind.
    pub const fn settled(kind: PieceKind) -> Self {
        Cell::Occupied {
            kind,
            active: false,
        }
    }

    /// An overlay cell of the falling piece.
    pub const fn active(kind: PieceKind) -> Self {
        Cell::Occupied { kind, active: true }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied { .. })
    }

    /// Occupied by a settled block (blocks movement).
    pub fn is_settled(&self) -> bool {
        matches!(self, Cell::Occupied { active: false, .. })
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Column delta for this direction
    pub fn dx(&self) -> i8 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Cw,
    Ccw,
}

impl RotateDirection {
    /// Apply this direction to a rotation index with `states` distinct states.
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::RotateDirection;
    ///
    /// assert_eq!(RotateDirection::Cw.apply(3, 4), 0);
    /// assert_eq!(RotateDirection::Ccw.apply(0, 4), 3);
    /// assert_eq!(RotateDirection::Cw.apply(0, 1), 0);
    /// ```
    pub fn apply(&self, rotation: u8, states: u8) -> u8 {
        let states = states.max(1);
        match self {
            RotateDirection::Cw => (rotation + 1) % states,
            RotateDirection::Ccw => (rotation + states - 1) % states,
        }
    }
}

/// Lifecycle state of a round
///
/// - **Idle**: before the first start, nothing is scheduled
/// - **Running**: the drop clock fires at the level's interval
/// - **SoftDropping**: the clock is stopped and drop steps come from input
/// - **GameOver**: terminal until the next start/restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Idle,
    Running,
    SoftDropping,
    GameOver,
}

impl GamePhase {
    /// Whether the round accepts movement commands.
    pub fn is_live(&self) -> bool {
        matches!(self, GamePhase::Running | GamePhase::SoftDropping)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "idle",
            GamePhase::Running => "running",
            GamePhase::SoftDropping => "softDropping",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// Commands accepted by the engine
///
/// These are what an input adapter produces from physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameCommand {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece clockwise
    RotateCw,
    /// Rotate piece counter-clockwise
    RotateCcw,
    /// Down key pressed: stop the drop clock and step down
    SoftDropStart,
    /// Down key released: resume the drop clock
    SoftDropStop,
    /// Single forced drop step, resets the drop clock
    HardDropStep,
    /// Start a round from idle or game over
    Start,
    /// Discard the current round and start a new one
    Restart,
}

impl GameCommand {
    pub const ALL: [GameCommand; 9] = [
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::RotateCw,
        GameCommand::RotateCcw,
        GameCommand::SoftDropStart,
        GameCommand::SoftDropStop,
        GameCommand::HardDropStep,
        GameCommand::Start,
        GameCommand::Restart,
    ];

    /// Parse command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use stackfall_types::GameCommand;
    ///
    /// assert_eq!(GameCommand::from_str("moveLeft"), Some(GameCommand::MoveLeft));
    /// assert_eq!(GameCommand::from_str("SOFTDROPSTART"), Some(GameCommand::SoftDropStart));
    /// assert_eq!(GameCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameCommand::MoveLeft),
            "moveright" => Some(GameCommand::MoveRight),
            "rotatecw" => Some(GameCommand::RotateCw),
            "rotateccw" => Some(GameCommand::RotateCcw),
            "softdropstart" => Some(GameCommand::SoftDropStart),
            "softdropstop" => Some(GameCommand::SoftDropStop),
            "harddropstep" => Some(GameCommand::HardDropStep),
            "start" => Some(GameCommand::Start),
            "restart" => Some(GameCommand::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameCommand::MoveLeft => "moveLeft",
            GameCommand::MoveRight => "moveRight",
            GameCommand::RotateCw => "rotateCw",
            GameCommand::RotateCcw => "rotateCcw",
            GameCommand::SoftDropStart => "softDropStart",
            GameCommand::SoftDropStop => "softDropStop",
            GameCommand::HardDropStep => "hardDropStep",
            GameCommand::Start => "start",
            GameCommand::Restart => "restart",
        }
    }
}

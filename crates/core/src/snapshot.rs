use crate::player::Tetromino;
use crate::stage::DisplayGrid;
use crate::status::GameStatus;
use crate::types::{Cell, GamePhase, STAGE_HEIGHT, STAGE_WIDTH};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: DisplayGrid,
    pub active: Option<Tetromino>,
    pub status: GameStatus,
    pub phase: GamePhase,
    pub drop_interval_ms: Option<u32>,
    pub round: u32,
}

impl GameSnapshot {
    /// Whether the round accepts piece commands.
    pub fn playable(&self) -> bool {
        self.phase.is_live()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Cell::Empty; STAGE_WIDTH as usize]; STAGE_HEIGHT as usize],
            active: None,
            status: GameStatus::default(),
            phase: GamePhase::Idle,
            drop_interval_ms: None,
            round: 0,
        }
    }
}

//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all round state. It has **no
//! dependencies** on terminals, windows, input devices or wall-clock time:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Host-driven**: the host feeds elapsed time into [`Game::tick`]
//! - **Pull + push**: renderers query [`Game::display_grid`] / [`Game::snapshot`],
//!   and listeners registered with [`Game::on_event`] hear settles and game over
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 settled field with row sweeping
//! - [`pieces`]: static tetromino catalog and kick offsets
//! - [`player`]: the falling piece and its move/rotate rules
//! - [`collision`]: pure legality check for a proposed displacement
//! - [`stage`]: display overlay and settling
//! - [`status`]: score, rows and level
//! - [`clock`]: the drop clock
//! - [`rules`]: tunable scoring and timing policy
//! - [`game`]: the round state machine
//!
//! # Game Rules
//!
//! - **Uniform draws**: each piece is picked uniformly from the seven kinds
//! - **Open top**: pieces spawn flush with row 0 and may hang above the stage
//! - **Kicks**: a blocked rotation tries horizontal offsets 1, -1, 2, -2
//! - **Stack-out**: a piece blocked from falling while its anchor is above row 1 ends the round
//! - **Scoring**: 40/100/300/1200 per 1-4 rows, times (level + 1); a level per 10 rows
//!
//! # Example
//!
//! ```
//! use stackfall_core::Game;
//! use stackfall_types::{GameCommand, GamePhase};
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! game.apply_command(GameCommand::MoveRight);
//! game.apply_command(GameCommand::RotateCw);
//! game.apply_command(GameCommand::HardDropStep);
//!
//! assert_eq!(game.phase(), GamePhase::Running);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The fall interval is `max(100ms, 1000ms / (level + 1))`. The clock is
//! stopped while soft dropping and after game over.

pub mod clock;
pub mod collision;
pub mod game;
pub mod grid;
pub mod pieces;
pub mod player;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod stage;
pub mod status;

pub use stackfall_types as types;

// Re-export commonly used types for convenience
pub use clock::DropClock;
pub use collision::{is_colliding, Displacement};
pub use game::{DropOutcome, Game, GameEvent};
pub use grid::Grid;
pub use pieces::get_shape;
pub use player::Tetromino;
pub use rng::SimpleRng;
pub use rules::{Rules, RulesError};
pub use snapshot::GameSnapshot;
pub use stage::{compose, settle, DisplayGrid, SettleReport};
pub use status::GameStatus;

//! Game module - the round state machine
//!
//! Ties the grid, the active piece, the status tracker and the drop clock
//! together. Every command is a bounded synchronous update: a drop step's
//! collision check, settle, row clear, status update and respawn all happen
//! inside one call, so no caller ever observes a half-applied step.
//!
//! Phases: `Idle -> Running <-> SoftDropping -> GameOver`, and `start` /
//! `restart` re-enter `Running` from anywhere.

use std::fmt;

use crate::clock::DropClock;
use crate::collision::{is_colliding, Displacement};
use crate::grid::Grid;
use crate::player::Tetromino;
use crate::rng::SimpleRng;
use crate::rules::Rules;
use crate::snapshot::GameSnapshot;
use crate::stage::{compose, compose_into, settle, DisplayGrid};
use crate::status::{drop_interval_ms, GameStatus};
use crate::types::{GameCommand, GamePhase, MoveDirection, RotateDirection};

/// Notification pushed to listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece was written into the grid
    Settled { rows_cleared: u32, points: u32 },
    /// The round ended by stack-out
    GameOver { status: GameStatus },
}

/// What a single drop step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved,
    Settled { rows_cleared: u32 },
    ToppedOut,
}

pub type EventListener = Box<dyn FnMut(&GameEvent) + Send>;

pub struct Game {
    grid: Grid,
    active: Option<Tetromino>,
    status: GameStatus,
    phase: GamePhase,
    clock: DropClock,
    rules: Rules,
    rng: SimpleRng,
    /// Bumped on every start/restart.
    round: u32,
    last_event: Option<GameEvent>,
    listeners: Vec<EventListener>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("grid", &self.grid)
            .field("active", &self.active)
            .field("status", &self.status)
            .field("phase", &self.phase)
            .field("clock", &self.clock)
            .field("rules", &self.rules)
            .field("round", &self.round)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Game {
    /// Create an idle game with default rules and the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::default())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            status: GameStatus::new(),
            phase: GamePhase::Idle,
            clock: DropClock::new(),
            rules,
            rng: SimpleRng::new(seed),
            round: 0,
            last_event: None,
            listeners: Vec::new(),
        }
    }

    /// Begin a round: empty grid, zeroed status, first piece, clock running.
    ///
    /// Honored in every phase; an active round is discarded.
    pub fn start(&mut self) {
        self.grid.clear();
        self.status.reset();
        self.last_event = None;
        self.round = self.round.wrapping_add(1);
        self.phase = GamePhase::Running;
        self.reset_player();
        self.clock.restart(self.current_interval_ms());
        log::info!("round {} started (seed {})", self.round, self.rng.seed());
    }

    /// Discard the current round and start over.
    pub fn restart(&mut self) {
        self.start();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.status.score
    }

    pub fn level(&self) -> u32 {
        self.status.level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.status.rows_cleared
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    /// Replace the falling piece, for scenario setup in tests and tools.
    pub fn set_active(&mut self, piece: Tetromino) {
        self.active = Some(piece);
    }

    /// Interval the clock is currently running at; None while stopped.
    pub fn drop_interval_ms(&self) -> Option<u32> {
        self.clock.interval_ms()
    }

    /// Interval implied by the current level, regardless of clock state.
    pub fn current_interval_ms(&self) -> u32 {
        drop_interval_ms(self.status.level, &self.rules)
    }

    /// Settled grid with the falling piece overlaid.
    pub fn display_grid(&self) -> DisplayGrid {
        compose(&self.grid, self.active.as_ref())
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        compose_into(&self.grid, self.active.as_ref(), &mut out.grid);
        out.active = self.active;
        out.status = self.status;
        out.phase = self.phase;
        out.drop_interval_ms = self.clock.interval_ms();
        out.round = self.round;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Register a listener called on every settle and on game over.
    pub fn on_event(&mut self, listener: impl FnMut(&GameEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Take and clear the most recent event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Shift the piece one column; rejected silently on collision.
    pub fn move_player(&mut self, dir: MoveDirection) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        let grid = &self.grid;
        self.active
            .as_mut()
            .map(|piece| piece.try_move(grid, dir))
            .unwrap_or(false)
    }

    /// Rotate with kicks; a rotation with no legal placement is dropped.
    pub fn rotate(&mut self, dir: RotateDirection) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        let grid = &self.grid;
        let max_kick = self.rules.max_kick;
        self.active
            .as_mut()
            .and_then(|piece| piece.try_rotate(grid, dir, max_kick))
            .is_some()
    }

    /// Down key pressed: suspend the clock and step down once.
    ///
    /// Repeated presses while already soft dropping each step down.
    pub fn soft_drop_start(&mut self) -> bool {
        match self.phase {
            GamePhase::Running => {
                self.phase = GamePhase::SoftDropping;
                self.clock.stop();
            }
            GamePhase::SoftDropping => {}
            GamePhase::Idle | GamePhase::GameOver => return false,
        }
        self.drop_step();
        true
    }

    /// Down key released: resume the clock at the current level's interval.
    pub fn soft_drop_stop(&mut self) -> bool {
        if self.phase != GamePhase::SoftDropping {
            return false;
        }
        self.phase = GamePhase::Running;
        self.clock.restart(self.current_interval_ms());
        true
    }

    /// One forced drop step. The next automatic step is measured from here.
    pub fn hard_drop_step(&mut self) -> bool {
        if !self.phase.is_live() {
            return false;
        }
        if self.phase == GamePhase::Running {
            self.clock.restart(self.current_interval_ms());
        }
        self.drop_step();
        true
    }

    /// Advance the drop clock by `elapsed_ms`.
    ///
    /// Returns the outcome when an automatic drop step fired.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<DropOutcome> {
        if self.phase != GamePhase::Running {
            return None;
        }
        if self.clock.advance(elapsed_ms) {
            return Some(self.drop_step());
        }
        None
    }

    /// Dispatch a command value to the matching entry point.
    pub fn apply_command(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::MoveLeft => self.move_player(MoveDirection::Left),
            GameCommand::MoveRight => self.move_player(MoveDirection::Right),
            GameCommand::RotateCw => self.rotate(RotateDirection::Cw),
            GameCommand::RotateCcw => self.rotate(RotateDirection::Ccw),
            GameCommand::SoftDropStart => self.soft_drop_start(),
            GameCommand::SoftDropStop => self.soft_drop_stop(),
            GameCommand::HardDropStep => self.hard_drop_step(),
            GameCommand::Start => {
                self.start();
                true
            }
            GameCommand::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Move down one row, or settle, or top out.
    fn drop_step(&mut self) -> DropOutcome {
        let Some(mut piece) = self.active else {
            return DropOutcome::ToppedOut;
        };

        // Overlapping settled blocks means the piece spawned into the stack.
        if is_colliding(&piece, &self.grid, Displacement::NONE) {
            self.top_out();
            return DropOutcome::ToppedOut;
        }

        if piece.can_fall(&self.grid) {
            piece.y += 1;
            piece.collided = false;
            self.active = Some(piece);
            return DropOutcome::Moved;
        }

        // Blocked while the anchor is still in the top buffer: the stack
        // has reached the spawn area.
        if piece.y < 1 {
            self.top_out();
            return DropOutcome::ToppedOut;
        }

        piece.collided = true;
        self.active = Some(piece);
        let rows_cleared = self.settle_active();
        DropOutcome::Settled { rows_cleared }
    }

    fn settle_active(&mut self) -> u32 {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        debug_assert!(piece.collided);

        let report = settle(&mut self.grid, &piece);
        let rows_cleared = report.rows_cleared();
        let outcome = self.status.record_clear(rows_cleared, &self.rules);

        if outcome.level_changed {
            log::info!(
                "level {} reached after {} rows",
                self.status.level,
                self.status.rows_cleared
            );
            if self.phase == GamePhase::Running {
                self.clock.restart(self.current_interval_ms());
            }
        }

        self.emit(GameEvent::Settled {
            rows_cleared,
            points: outcome.points,
        });
        self.reset_player();
        rows_cleared
    }

    fn top_out(&mut self) {
        self.phase = GamePhase::GameOver;
        self.clock.stop();
        log::info!(
            "game over: score {}, rows {}, level {}",
            self.status.score,
            self.status.rows_cleared,
            self.status.level
        );
        self.emit(GameEvent::GameOver {
            status: self.status,
        });
    }

    /// Spawn a uniformly drawn piece at the top of the stage.
    ///
    /// A spawn onto settled blocks ends the round; the grid is left as is.
    fn reset_player(&mut self) {
        let piece = Tetromino::new(self.rng.next_piece());
        log::debug!("spawned {} at ({}, {})", piece.kind.as_str(), piece.x, piece.y);
        self.active = Some(piece);
        if is_colliding(&piece, &self.grid, Displacement::NONE) {
            self.top_out();
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.last_event = Some(event);
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}

//! End-to-end round scenarios driven through the public `Game` API.

use std::sync::{Arc, Mutex};

use stackfall::core::{DropOutcome, Game, GameEvent, Grid, Rules, Tetromino};
use stackfall::types::{Cell, GameCommand, GamePhase, PieceKind};

/// Start a round and replace the random first piece.
fn game_with(grid: Grid, piece: Tetromino) -> Game {
    let mut game = Game::new(7);
    game.start();
    *game.grid_mut() = grid;
    game.set_active(piece);
    game
}

/// Force drop steps until something settles; returns (steps, rows cleared).
fn drop_until_settled(game: &mut Game) -> (u32, u32) {
    for step in 1..=40 {
        assert!(game.hard_drop_step());
        if let Some(GameEvent::Settled { rows_cleared, .. }) = game.take_last_event() {
            return (step, rows_cleared);
        }
    }
    panic!("piece never settled");
}

#[test]
fn test_horizontal_i_falls_nineteen_rows_then_settles() {
    let mut game = game_with(Grid::new(), Tetromino::new(PieceKind::I));
    assert_eq!(game.active().unwrap().y, 0);

    for _ in 0..19 {
        assert!(game.hard_drop_step());
        assert_eq!(game.take_last_event(), None);
    }
    assert_eq!(game.active().unwrap().y, 19);

    assert!(game.hard_drop_step());
    assert_eq!(
        game.take_last_event(),
        Some(GameEvent::Settled {
            rows_cleared: 0,
            points: 0
        })
    );

    for x in 3..7 {
        assert_eq!(game.grid().get(x, 19), Some(Cell::settled(PieceKind::I)));
    }
    assert_eq!(game.grid().occupied_count(), 4);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), GamePhase::Running);
    // A fresh piece is already falling.
    assert_eq!(game.active().unwrap().y, 0);
}

#[test]
fn test_single_row_clear_scores_forty() {
    let grid = Grid::from_rows(&["JJJJJJ...."]);
    let mut game = game_with(grid, Tetromino::at(PieceKind::I, 0, 6, 0));

    let (steps, rows) = drop_until_settled(&mut game);

    assert_eq!(steps, 20);
    assert_eq!(rows, 1);
    assert_eq!(game.score(), 40);
    assert_eq!(game.rows_cleared(), 1);
    assert_eq!(game.level(), 0);
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn test_separated_rows_clear_together() {
    let grid = Grid::from_rows(&[
        "T.........",
        "JJJJJJJJJ.",
        "SS.SSSSSS.",
        "ZZZZZZZZZ.",
    ]);
    // Vertical I occupies column 9.
    let mut game = game_with(grid, Tetromino::at(PieceKind::I, 1, 8, 0));

    let (_, rows) = drop_until_settled(&mut game);

    assert_eq!(rows, 2);
    assert_eq!(game.score(), 100);

    // The two partial rows moved down, keeping their relative order.
    assert_eq!(game.grid().get(0, 19), Some(Cell::settled(PieceKind::S)));
    assert_eq!(game.grid().get(2, 19), Some(Cell::Empty));
    assert_eq!(game.grid().get(9, 19), Some(Cell::settled(PieceKind::I)));
    assert_eq!(game.grid().get(0, 18), Some(Cell::settled(PieceKind::T)));
    assert_eq!(game.grid().get(9, 18), Some(Cell::settled(PieceKind::I)));
    assert_eq!(game.grid().occupied_count(), 9 + 2);
}

#[test]
fn test_left_wall_rotation_kicks_right() {
    let piece = Tetromino::at(PieceKind::T, 1, -1, 5);
    let mut game = game_with(Grid::new(), piece);

    assert!(game.apply_command(GameCommand::RotateCw));

    let rotated = game.active().unwrap();
    assert_eq!(rotated.rotation, 2);
    assert_eq!(rotated.x, 0);
    assert_eq!(rotated.y, 5);
}

#[test]
fn test_blocked_rotation_is_rejected() {
    let mut grid = Grid::new();
    grid.fill(3, 10, PieceKind::O);
    grid.fill(5, 10, PieceKind::O);
    let piece = Tetromino::at(PieceKind::I, 1, 3, 10);
    let mut game = game_with(grid, piece);

    assert!(!game.apply_command(GameCommand::RotateCw));
    assert!(!game.apply_command(GameCommand::RotateCcw));
    assert_eq!(game.active(), Some(piece));
}

#[test]
fn test_moves_stop_at_walls() {
    let mut game = game_with(Grid::new(), Tetromino::new(PieceKind::O));

    let mut moved = 0;
    while game.apply_command(GameCommand::MoveLeft) {
        moved += 1;
    }
    assert_eq!(moved, 4);
    assert_eq!(game.active().unwrap().x, 0);

    while game.apply_command(GameCommand::MoveRight) {}
    assert_eq!(game.active().unwrap().x, 8);
}

#[test]
fn test_stack_out_ends_round_without_writing_piece() {
    let mut grid = Grid::new();
    grid.fill(4, 1, PieceKind::Z);
    let mut game = game_with(grid.clone(), Tetromino::new(PieceKind::I));

    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    game.on_event(move |event| sink.lock().unwrap().push(*event));

    assert!(game.hard_drop_step());

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.grid(), &grid);
    assert_eq!(game.drop_interval_ms(), None);
    assert!(matches!(
        events.lock().unwrap().as_slice(),
        [GameEvent::GameOver { .. }]
    ));

    // Nothing moves after game over.
    assert!(!game.apply_command(GameCommand::MoveLeft));
    assert!(!game.apply_command(GameCommand::HardDropStep));
    assert_eq!(game.tick(10_000), None);

    // Start is still honored.
    assert!(game.apply_command(GameCommand::Start));
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.grid().occupied_count(), 0);
}

#[test]
fn test_piece_overlapping_stack_ends_round() {
    // A lone block under the spawn row, left hanging by an earlier piece.
    let mut grid = Grid::new();
    grid.fill(3, 1, PieceKind::J);
    let piece = Tetromino::new(PieceKind::T);
    assert!(piece.cells().contains(&(3, 1)));
    let mut game = game_with(grid.clone(), piece);

    assert!(game.hard_drop_step());

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.grid(), &grid);
    assert_eq!(game.active(), Some(piece));
    assert!(matches!(
        game.take_last_event(),
        Some(GameEvent::GameOver { .. })
    ));
    assert!(!game.apply_command(GameCommand::SoftDropStart));
}

#[test]
fn test_level_up_speeds_up_the_clock() {
    let rules = Rules {
        rows_per_level: 1,
        ..Rules::default()
    };
    let mut game = Game::with_rules(3, rules);
    assert_eq!(game.rules().rows_per_level, 1);
    game.start();
    assert_eq!(game.drop_interval_ms(), Some(1000));

    *game.grid_mut() = Grid::from_rows(&["LLLLLL...."]);
    game.set_active(Tetromino::at(PieceKind::I, 0, 6, 0));
    let (_, rows) = drop_until_settled(&mut game);

    assert_eq!(rows, 1);
    // Scored at the level before the clear.
    assert_eq!(game.score(), 40);
    assert_eq!(game.level(), 1);
    assert_eq!(game.drop_interval_ms(), Some(500));
}

#[test]
fn test_clock_drives_automatic_drops() {
    let mut game = game_with(Grid::new(), Tetromino::new(PieceKind::T));

    assert_eq!(game.tick(999), None);
    assert_eq!(game.tick(1), Some(DropOutcome::Moved));
    assert_eq!(game.active().unwrap().y, 1);

    // Forced steps restart the interval.
    game.tick(900);
    game.hard_drop_step();
    assert_eq!(game.tick(900), None);
    assert_eq!(game.tick(100), Some(DropOutcome::Moved));
}

#[test]
fn test_soft_drop_suspends_clock_until_release() {
    let mut game = game_with(Grid::new(), Tetromino::new(PieceKind::T));

    assert!(game.apply_command(GameCommand::SoftDropStart));
    assert_eq!(game.phase(), GamePhase::SoftDropping);
    assert_eq!(game.active().unwrap().y, 1);
    assert_eq!(game.drop_interval_ms(), None);
    assert_eq!(game.tick(5_000), None);

    assert!(game.apply_command(GameCommand::SoftDropStart));
    assert_eq!(game.active().unwrap().y, 2);

    assert!(game.apply_command(GameCommand::SoftDropStop));
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.drop_interval_ms(), Some(1000));
    assert!(!game.apply_command(GameCommand::SoftDropStop));
}

#[test]
fn test_commands_ignored_before_start() {
    let mut game = Game::new(1);
    assert_eq!(game.phase(), GamePhase::Idle);

    assert!(!game.apply_command(GameCommand::MoveLeft));
    assert!(!game.apply_command(GameCommand::SoftDropStart));
    assert_eq!(game.tick(5_000), None);
    assert_eq!(game.active(), None);
}

#[test]
fn test_same_seed_replays_identically() {
    let script = [
        GameCommand::MoveLeft,
        GameCommand::RotateCw,
        GameCommand::HardDropStep,
        GameCommand::MoveRight,
        GameCommand::MoveRight,
        GameCommand::RotateCcw,
    ];

    let play = |seed| {
        let mut game = Game::new(seed);
        game.start();
        let mut kinds = Vec::new();
        for i in 0..400 {
            game.apply_command(script[i % script.len()]);
            game.tick(16);
            if let Some(piece) = game.active() {
                kinds.push(piece.kind);
            }
        }
        (game.snapshot(), kinds)
    };

    assert_eq!(play(99), play(99));
}

#[test]
fn test_restart_resets_round_state() {
    let grid = Grid::from_rows(&["JJJJJJ...."]);
    let mut game = game_with(grid, Tetromino::at(PieceKind::I, 0, 6, 0));
    drop_until_settled(&mut game);
    assert_eq!(game.score(), 40);
    let round = game.round();

    assert!(game.apply_command(GameCommand::Restart));

    assert_eq!(game.round(), round + 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.rows_cleared(), 0);
    assert_eq!(game.grid().occupied_count(), 0);
    assert_eq!(game.phase(), GamePhase::Running);
    assert!(game.active().is_some());
}

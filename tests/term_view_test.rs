use stackfall::core::{Game, GameSnapshot, Grid, Tetromino};
use stackfall::term::{GameView, TerminalRenderer};
use stackfall::types::{Cell, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let frame = GameView::default().render(&GameSnapshot::default());

    // 10 cells * 2 columns + border = 22 wide, 20 rows + border = 22 tall.
    assert_eq!(frame.get(0, 0).unwrap().ch, '┌');
    assert_eq!(frame.get(21, 0).unwrap().ch, '┐');
    assert_eq!(frame.get(0, 21).unwrap().ch, '└');
    assert_eq!(frame.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.grid[19][0] = Cell::settled(PieceKind::I);

    let frame = GameView::default().render(&snap);

    assert_eq!(frame.get(1, 20).unwrap().ch, '█');
    assert_eq!(frame.get(2, 20).unwrap().ch, '█');
    assert_eq!(frame.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_shows_active_piece_and_status() {
    let mut game = Game::new(5);
    game.start();
    game.set_active(Tetromino::new(PieceKind::O));

    let frame = GameView::default().render(&game.snapshot());

    // O spawns at column 4, row 0.
    let glyph = frame.get(1 + 4 * 2, 1).unwrap();
    assert_eq!(glyph.ch, '█');
    assert!(glyph.bold);

    let panel: String = (0..frame.height()).map(|y| frame.row_text(y)).collect();
    assert!(panel.contains("SCORE"));
    assert!(panel.contains("LEVEL"));
    assert!(panel.contains("1000ms"));
    assert!(!panel.contains("PRESS ENTER"));
    assert!(!panel.contains("GAME OVER"));
}

#[test]
fn term_view_overlays_follow_phase() {
    let idle = GameView::default().render(&Game::new(1).snapshot());
    assert!((0..idle.height()).any(|y| idle.row_text(y).contains("PRESS ENTER")));

    let mut game = Game::new(1);
    game.start();
    let mut grid = Grid::new();
    grid.fill(4, 1, PieceKind::Z);
    *game.grid_mut() = grid;
    game.set_active(Tetromino::new(PieceKind::I));
    game.hard_drop_step();

    let over = GameView::default().render(&game.snapshot());
    assert!((0..over.height()).any(|y| over.row_text(y).contains("GAME OVER")));
}

#[test]
fn renderer_can_be_constructed_without_a_terminal() {
    // Entering raw mode needs a tty; construction must not.
    let mut renderer = TerminalRenderer::new();
    renderer.invalidate();
}

//! GameView: maps a `core::GameSnapshot` into a terminal frame.
//!
//! Pure layout, no I/O. Each stage cell is two columns wide to compensate for
//! the usual terminal glyph aspect ratio.

use crate::core::GameSnapshot;
use crate::frame::{Frame, Glyph, Rgb, BLACK, TEXT};
use crate::types::{Cell, GamePhase, PieceKind, STAGE_HEIGHT, STAGE_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Rgb = Rgb::new(200, 200, 200);
const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Terminal columns per stage cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame size needed to show the well and the side panel.
    pub fn frame_size(&self) -> (u16, u16) {
        let (well_w, well_h) = self.well_size();
        (well_w + PANEL_GAP + PANEL_WIDTH, well_h)
    }

    fn well_size(&self) -> (u16, u16) {
        (STAGE_WIDTH as u16 * self.cell_w + 2, STAGE_HEIGHT as u16 + 2)
    }

    pub fn render(&self, snap: &GameSnapshot) -> Frame {
        let (w, h) = self.frame_size();
        let mut frame = Frame::new(w, h);
        self.render_into(snap, &mut frame);
        frame
    }

    pub fn render_into(&self, snap: &GameSnapshot, frame: &mut Frame) {
        let (well_w, well_h) = self.well_size();
        frame.fill_rect(0, 0, frame.width(), frame.height(), Glyph::default());
        draw_border(frame, well_w, well_h);

        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let glyph = cell_glyph(*cell);
                let px = 1 + x as u16 * self.cell_w;
                frame.fill_rect(px, 1 + y as u16, self.cell_w, 1, glyph);
            }
        }

        self.draw_panel(frame, snap, well_w + PANEL_GAP);

        if snap.playable() {
            return;
        }
        if snap.phase == GamePhase::GameOver {
            draw_banner(frame, well_w, well_h, "GAME OVER");
            let hint = "ENTER: again";
            let x = well_w.saturating_sub(hint.len() as u16) / 2;
            frame.put_str(x, well_h / 2 + 1, hint, TEXT, false);
        } else {
            draw_banner(frame, well_w, well_h, "PRESS ENTER");
        }
    }

    fn draw_panel(&self, frame: &mut Frame, snap: &GameSnapshot, x: u16) {
        let rows = [
            ("SCORE", snap.status.score),
            ("ROWS", snap.status.rows_cleared),
            ("LEVEL", snap.status.level),
        ];

        let mut y = 1;
        for (label, value) in rows {
            frame.put_str(x, y, label, TEXT, true);
            frame.put_str(x, y + 1, &value.to_string(), TEXT, false);
            y += 3;
        }

        let speed = match snap.drop_interval_ms {
            Some(ms) => format!("{}ms", ms),
            None => "-".to_string(),
        };
        frame.put_str(x, y, "SPEED", TEXT, true);
        frame.put_str(x, y + 1, &speed, TEXT, false);
    }
}

fn draw_border(frame: &mut Frame, w: u16, h: u16) {
    let line = |ch| Glyph::new(ch, BORDER, BLACK);
    frame.put(0, 0, line('┌'));
    frame.put(w - 1, 0, line('┐'));
    frame.put(0, h - 1, line('└'));
    frame.put(w - 1, h - 1, line('┘'));
    for x in 1..w - 1 {
        frame.put(x, 0, line('─'));
        frame.put(x, h - 1, line('─'));
    }
    for y in 1..h - 1 {
        frame.put(0, y, line('│'));
        frame.put(w - 1, y, line('│'));
    }
}

fn draw_banner(frame: &mut Frame, well_w: u16, well_h: u16, text: &str) {
    let x = well_w.saturating_sub(text.chars().count() as u16) / 2;
    frame.put_str(x, well_h / 2, text, Rgb::new(255, 255, 255), true);
}

fn cell_glyph(cell: Cell) -> Glyph {
    match cell {
        Cell::Empty => Glyph::new('·', Rgb::new(90, 90, 100), WELL_BG),
        Cell::Occupied { kind, active } => {
            let glyph = Glyph::new('█', piece_color(kind), WELL_BG);
            if active {
                glyph.bold()
            } else {
                glyph
            }
        }
    }
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::PieceColor;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

const HELP_LINES: [(&str, &str); 4] = [
    ("←/h/a", "left"),
    ("→/l/d", "right"),
    ("↓/j/s", "soft drop"),
    ("q/Esc", "quit"),
];

/// A lightweight terminal renderer for the game board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().with_char(' '));

        let board_w = snap.width.saturating_mul(self.cell_w);
        let board_h = snap.height.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            board_w,
            board_h,
            CellStyle::new(PLAY_BG, PLAY_BG).with_char(' '),
        );
        self.draw_border(fb, frame);

        // Settled cells.
        for row in 0..snap.height {
            for col in 0..snap.width {
                match snap.cell(row as usize, col as usize).flatten() {
                    Some(color) => self.draw_block(fb, frame, row, col, color),
                    None => self.draw_empty(fb, frame, row, col),
                }
            }
        }

        // Falling piece.
        if let Some(active) = &snap.active {
            for pos in &active.cells {
                if pos.row >= 0
                    && pos.col >= 0
                    && pos.row < snap.height as i32
                    && pos.col < snap.width as i32
                {
                    self.draw_block(fb, frame, pos.row as u16, pos.col as u16, active.color);
                }
            }
        }

        self.draw_side_panel(fb, viewport, frame);

        if snap.game_over {
            self.draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.set(x, y, style.with_char('┌'));
        fb.set(x + w - 1, y, style.with_char('┐'));
        fb.set(x, y + h - 1, style.with_char('└'));
        fb.set(x + w - 1, y + h - 1, style.with_char('┘'));

        for dx in 1..w - 1 {
            fb.set(x + dx, y, style.with_char('─'));
            fb.set(x + dx, y + h - 1, style.with_char('─'));
        }
        for dy in 1..h - 1 {
            fb.set(x, y + dy, style.with_char('│'));
            fb.set(x + w - 1, y + dy, style.with_char('│'));
        }
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell(fb, frame, row, col, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16, color: PieceColor) {
        let style = CellStyle::new(color_rgb(color), PLAY_BG).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x.saturating_add(1).saturating_add(col.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, style.with_char(ch));
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 16 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, "KEYS", label);
        for (keys, action) in HELP_LINES {
            y = y.saturating_add(1);
            fb.put_str(panel_x, y, keys, value);
            fb.put_str(panel_x + 7, y, action, value.dim());
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Terminal color for a piece color.
pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }

    #[test]
    fn oversized_cells_saturate_instead_of_overflowing() {
        let snap = GameSnapshot {
            width: 64,
            board: vec![None; 64 * 20],
            ..GameSnapshot::default()
        };
        let fb = GameView::new(1100, 1).render(&snap, Viewport::new(30, 22));
        assert_eq!((fb.width(), fb.height()), (30, 22));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in PieceColor::PALETTE.iter().enumerate() {
            for b in PieceColor::PALETTE.iter().skip(i + 1) {
                assert_ne!(color_rgb(*a), color_rgb(*b));
            }
        }
    }
}

//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Board row 0 is the bottom of the well, so it lands on the last screen row
//! inside the border. Each board cell is two terminal columns wide.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::{ghost_color, shape_color, BACKGROUND};
use crate::types::{Coord, Phase, Shape};

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

const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const TEXT_FG: Rgb = Rgb::new(235, 235, 235);

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

/// Screen placement of the board frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
}

impl GameView {
    /// Terminal size needed for a board: frame plus one status line
    pub fn required_size(&self, rows: u16, cols: u16) -> Viewport {
        Viewport::new(cols * self.cell_w + 2, rows + 3)
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::new(TEXT_FG, SCREEN_BG),
        });

        let need = self.required_size(snap.rows, snap.cols);
        if viewport.width < need.width || viewport.height < need.height {
            let msg = format!("terminal too small: need {}x{}", need.width, need.height);
            fb.put_str(0, 0, &msg, CellStyle::new(TEXT_FG, SCREEN_BG).bold());
            return;
        }

        let layout = Layout {
            x: (viewport.width - need.width) / 2,
            y: (viewport.height - need.height) / 2,
            frame_w: need.width,
            frame_h: snap.rows + 2,
        };

        self.draw_border(fb, layout);

        for row in 0..snap.rows as i32 {
            for col in 0..snap.cols as i32 {
                match snap.cell(row, col) {
                    Some(shape) => self.draw_block(fb, layout, snap.rows, Coord::new(row, col), shape),
                    None => self.draw_empty(fb, layout, snap.rows, Coord::new(row, col)),
                }
            }
        }

        if let Some(active) = &snap.active {
            if let Some(ghost) = &snap.ghost {
                for &coord in ghost {
                    self.draw_ghost(fb, layout, snap.rows, coord, active.shape);
                }
            }
            // Active cells go over the ghost where they overlap.
            for &coord in &active.cells {
                self.draw_block(fb, layout, snap.rows, coord, active.shape);
            }
        }

        self.draw_status(fb, layout, snap);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout) {
        let style = CellStyle::new(BORDER_FG, SCREEN_BG);
        let Layout {
            x,
            y,
            frame_w: w,
            frame_h: h,
        } = layout;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Screen position of a board cell; `None` when the cell is off the board.
    fn cell_origin(&self, layout: Layout, rows: u16, coord: Coord) -> Option<(u16, u16)> {
        let cols = (layout.frame_w - 2) / self.cell_w;
        if coord.row < 0 || coord.col < 0 || coord.row >= rows as i32 || coord.col >= cols as i32 {
            return None;
        }
        let sx = layout.x + 1 + coord.col as u16 * self.cell_w;
        let sy = layout.y + 1 + (rows - 1 - coord.row as u16);
        Some((sx, sy))
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, at: (u16, u16), ch: char, style: CellStyle) {
        fb.fill_rect(at.0, at.1, self.cell_w, 1, ch, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, rows: u16, coord: Coord) {
        if let Some(at) = self.cell_origin(layout, rows, coord) {
            let style = CellStyle::new(Rgb::new(110, 118, 126), BACKGROUND).dim();
            self.fill_cell(fb, at, ' ', style);
            fb.put_char(at.0, at.1, '·', style);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, rows: u16, coord: Coord, shape: Shape) {
        if let Some(at) = self.cell_origin(layout, rows, coord) {
            let color = shape_color(shape);
            self.fill_cell(fb, at, '█', CellStyle::new(color, BACKGROUND));
        }
    }

    fn draw_ghost(&self, fb: &mut FrameBuffer, layout: Layout, rows: u16, coord: Coord, shape: Shape) {
        if let Some(at) = self.cell_origin(layout, rows, coord) {
            let color = ghost_color(shape);
            self.fill_cell(fb, at, '░', CellStyle::new(color, BACKGROUND));
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, layout: Layout, snap: &GameSnapshot) {
        let text = if snap.phase == Phase::GameOver {
            "GAME OVER  r: restart  q: quit"
        } else if snap.paused {
            "PAUSED  p: resume  q: quit"
        } else {
            "p: pause  q: quit"
        };
        let style = CellStyle::new(TEXT_FG, SCREEN_BG);
        let style = if snap.playable() { style } else { style.bold() };
        let len = text.chars().count() as u16;
        let x = if len < layout.frame_w {
            layout.x + (layout.frame_w - len) / 2
        } else {
            layout.x
        };
        fb.put_str(x, layout.y + layout.frame_h, text, style);
    }
}

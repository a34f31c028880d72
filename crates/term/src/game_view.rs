//! BoardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Tiles are drawn at their continuous position, scaled from sub-cell units to
//! terminal cells, so a slide renders as motion rather than a jump.

use crate::core::{GameSnapshot, TileSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{COLS, ROWS};

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

const OUTLINE: Rgb = Rgb::new(187, 173, 160);
const BACKGROUND: Rgb = Rgb::new(205, 192, 180);
const FONT: Rgb = Rgb::new(119, 110, 101);
const SCREEN: Rgb = Rgb::new(250, 248, 239);

/// Tile colors by rank (2, 4, 8, ... 512); larger tiles reuse the last one.
const TILE_COLORS: [Rgb; 9] = [
    Rgb::new(237, 229, 218),
    Rgb::new(238, 225, 201),
    Rgb::new(243, 178, 122),
    Rgb::new(246, 150, 101),
    Rgb::new(247, 124, 95),
    Rgb::new(247, 95, 59),
    Rgb::new(237, 208, 115),
    Rgb::new(237, 204, 99),
    Rgb::new(236, 202, 80),
];

pub fn tile_color(value: u32) -> Rgb {
    let rank = value.max(2).trailing_zeros() as usize;
    TILE_COLORS[(rank - 1).min(TILE_COLORS.len() - 1)]
}

/// Renders the board, a status line and the game-over overlay.
pub struct BoardView {
    /// Board cell width in terminal columns.
    tile_w: u16,
    /// Board cell height in terminal rows.
    tile_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 8x4 looks square with the usual 2:1 glyph aspect ratio.
        Self {
            tile_w: 8,
            tile_h: 4,
        }
    }
}

impl BoardView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(2),
            tile_h: tile_h.max(2),
        }
    }

    /// Outer size of the framed board (border included).
    pub fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.tile_w + 2,
            ROWS as u16 * self.tile_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(FONT, SCREEN));

        let (frame_w, frame_h) = self.frame_size();
        // Two status lines below the frame.
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h + 2) / 2;

        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', CellStyle::new(OUTLINE, OUTLINE));

        for row in 0..ROWS as u16 {
            for col in 0..COLS as u16 {
                let x = start_x + 1 + col * self.tile_w;
                let y = start_y + 1 + row * self.tile_h;
                self.draw_slot(fb, x, y, CellStyle::new(BACKGROUND, BACKGROUND));
            }
        }

        for tile in &snap.tiles {
            self.draw_tile(fb, snap, start_x, start_y, tile);
        }

        let status = CellStyle::new(FONT, SCREEN);
        let line_y = start_y.saturating_add(frame_h);
        let mut line = String::with_capacity(32);
        line.push_str("best ");
        line.push_str(&snap.best_tile.to_string());
        line.push_str("   slides ");
        line.push_str(&snap.slides.to_string());
        fb.put_centered(start_x, line_y, frame_w, &line, status.bold());
        fb.put_centered(
            start_x,
            line_y.saturating_add(1),
            frame_w,
            "arrows/hjkl/wasd  r restart  q quit",
            status,
        );

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal offset of a continuous coordinate.
    fn scale(pos: i32, extent: i32, cells: u16) -> u16 {
        (pos.max(0) as i64 * cells as i64 / extent.max(1) as i64) as u16
    }

    /// One slot leaves a one-column and one-row gutter so the grid shows.
    fn draw_slot(&self, fb: &mut FrameBuffer, x: u16, y: u16, style: CellStyle) {
        fb.fill_rect(x, y, self.tile_w - 1, self.tile_h - 1, ' ', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        start_x: u16,
        start_y: u16,
        tile: &TileSnapshot,
    ) {
        let g = &snap.geometry;
        let x = start_x + 1 + Self::scale(tile.x, g.cell_width(), self.tile_w);
        let y = start_y + 1 + Self::scale(tile.y, g.cell_height(), self.tile_h);
        let color = tile_color(tile.value);
        self.draw_slot(fb, x, y, CellStyle::new(FONT, color));

        let label = tile.value.to_string();
        let mid = y + (self.tile_h - 1) / 2;
        fb.put_centered(x, mid, self.tile_w - 1, &label, CellStyle::new(FONT, color).bold());
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16, frame_h: u16) {
        let box_h = 4u16;
        let box_y = start_y + frame_h.saturating_sub(box_h) / 2;
        let shade = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(60, 58, 50));
        fb.fill_rect(start_x, box_y, frame_w, box_h, ' ', shade);
        fb.put_centered(start_x, box_y + 1, frame_w, "GAME OVER", shade.bold());
        fb.put_centered(start_x, box_y + 2, frame_w, "r play again   q quit", shade);
    }
}

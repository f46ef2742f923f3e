//! BoardView: maps an interactive [`Session`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Rows are drawn top-first, so the highest `y` is at the top of the frame and
//! `y = 0` at the bottom. Boards larger than the terminal are shown through a
//! window centered on the cursor.

use crate::engine::Session;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PlayerId, EMPTY_SYMBOL};

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

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 14;
/// Widest board cell, in terminal columns
const MAX_CELL_W: u16 = 8;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const CURSOR_BG: Rgb = Rgb::new(90, 90, 150);

const PALETTE: [Rgb; 8] = [
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(80, 220, 220),
    Rgb::new(255, 165, 0),
    Rgb::new(230, 230, 230),
];

fn player_color(player: PlayerId) -> Rgb {
    PALETTE[player.index() % PALETTE.len()]
}

/// Where the visible part of the board lands in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub start_x: u16,
    pub start_y: u16,
    /// Board columns and rows inside the border
    pub cols: u16,
    pub rows: u16,
    /// Lowest board coordinates shown
    pub origin_x: u32,
    pub origin_y: u32,
    cell_w: u16,
}

impl BoardLayout {
    pub fn frame_w(&self) -> u16 {
        self.cols.saturating_mul(self.cell_w).saturating_add(2)
    }

    pub fn frame_h(&self) -> u16 {
        self.rows.saturating_add(2)
    }

    /// Screen position of board field `(x, y)`, if it is inside the window.
    pub fn screen_pos(&self, x: u32, y: u32) -> Option<(u16, u16)> {
        let col = x.checked_sub(self.origin_x)?;
        let from_bottom = y.checked_sub(self.origin_y)?;
        if col >= u32::from(self.cols) || from_bottom >= u32::from(self.rows) {
            return None;
        }
        let row = u32::from(self.rows) - 1 - from_bottom;
        Some((
            self.start_x
                .saturating_add(1)
                .saturating_add((col as u16).saturating_mul(self.cell_w)),
            self.start_y.saturating_add(1 + row as u16),
        ))
    }
}

/// First visible coordinate so that `cursor` sits near the middle of a window
/// of `visible` fields on an axis of `len` fields.
fn window_origin(cursor: u32, visible: u32, len: u32) -> u32 {
    cursor
        .saturating_sub(visible / 2)
        .min(len.saturating_sub(visible))
}

/// Renders a session as a bordered grid with a side panel.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // Symbol plus a spacer keeps the grid roughly square.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    /// View with cells `cell_w` columns wide, clamped to `1..=8`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_W),
        }
    }

    pub fn layout(&self, session: &Session, viewport: Viewport) -> BoardLayout {
        let game = session.game();
        let (cursor_x, cursor_y) = session.cursor();

        let avail_cols = viewport.width.saturating_sub(2 + PANEL_GAP + PANEL_W) / self.cell_w;
        let avail_rows = viewport.height.saturating_sub(2);
        let cols = game.board_width().min(u32::from(avail_cols.max(1))) as u16;
        let rows = game.board_height().min(u32::from(avail_rows.max(1))) as u16;

        let frame_w = cols.saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = rows.saturating_add(2);
        BoardLayout {
            start_x: viewport
                .width
                .saturating_sub(frame_w.saturating_add(PANEL_GAP + PANEL_W))
                / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            cols,
            rows,
            origin_x: window_origin(cursor_x, u32::from(cols), game.board_width()),
            origin_y: window_origin(cursor_y, u32::from(rows), game.board_height()),
            cell_w: self.cell_w,
        }
    }

    /// Render the session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &Session, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(session, viewport);
        let game = session.game();
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(
            fb,
            layout.start_x,
            layout.start_y,
            layout.frame_w(),
            layout.frame_h(),
            border,
        );

        let (cursor_x, cursor_y) = session.cursor();
        for row in 0..u32::from(layout.rows) {
            let y = layout.origin_y + row;
            for col in 0..u32::from(layout.cols) {
                let x = layout.origin_x + col;
                let Some((px, py)) = layout.screen_pos(x, y) else {
                    continue;
                };
                let owner = game.field(x, y).and_then(|f| f.owner());
                let mut style = match owner {
                    Some(p) => CellStyle::new(player_color(p), BOARD_BG).bold(),
                    None => CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim(),
                };
                if (x, y) == (cursor_x, cursor_y) {
                    style.bg = CURSOR_BG;
                }
                let ch = owner.map_or(EMPTY_SYMBOL, PlayerId::symbol);
                fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                fb.put_char(px, py, ch, style);
            }
        }

        self.draw_side_panel(fb, session, viewport, &layout);

        if session.is_over() {
            self.draw_overlay_text(fb, &layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &Session, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '─', style);
            fb.put_char(x.saturating_add(dx), bottom, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '│', style);
            fb.put_char(right, y.saturating_add(dy), '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        session: &Session,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w())
            .saturating_add(PANEL_GAP);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let game = session.game();
        let current = session.current_player();
        let label = CellStyle::default().bold();
        let value = CellStyle::default();
        let raw = current.get();

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "PLAYER", label);
        y = y.saturating_add(1);
        fb.put_char(
            panel_x,
            y,
            current.symbol(),
            CellStyle::new(player_color(current), Rgb::new(0, 0, 0)).bold(),
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "OWNED", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, game.owned_field_count(raw), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FREE", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, game.free_field_count(raw), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "AREAS", label);
        y = y.saturating_add(1);
        let busy = u64::from(game.busy_areas(raw));
        fb.put_u64(panel_x, y, busy, value);
        let slash_x = panel_x.saturating_add(digit_count(busy));
        fb.put_char(slash_x, y, '/', value);
        fb.put_u64(
            slash_x.saturating_add(1),
            y,
            u64::from(game.area_limit()),
            value,
        );
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SCORES", label);
        y = y.saturating_add(1);
        for (symbol, owned) in session.summary() {
            if y >= viewport.height {
                break;
            }
            let marker = if symbol == current.symbol() { '>' } else { ' ' };
            fb.put_char(panel_x, y, marker, value);
            fb.put_char(panel_x + 1, y, symbol, label);
            fb.put_u64(panel_x + 3, y, owned, value);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: &BoardLayout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w().saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn digit_count(mut value: u64) -> u16 {
    let mut n = 1;
    while value >= 10 {
        value /= 10;
        n += 1;
    }
    n
}

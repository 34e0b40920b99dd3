//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, SymbolItem};
use crate::fb::{palette, CellStyle, FrameBuffer};
use crate::input::ControlPad;
use crate::optotype::{glyph, is_filled, OPTOTYPE_SIZE};
use crate::types::{Direction, GamePhase, SymbolStatus, TUTORIAL_LAST_STEP};

/// Rows above the symbol grid: header, rule, blank.
const HEADER_ROWS: u16 = 3;
/// Horizontal gap between control pad buttons.
const PAD_GAP: u16 = 1;
/// Height of one control pad button.
const PAD_BUTTON_H: u16 = 1;

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

/// Where the symbol grid sits for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub columns: u16,
    pub visible_rows: u16,
    pub cell_w: u16,
    pub row_h: u16,
}

impl GridLayout {
    /// Screen position of symbol `index` when the grid starts at `top_row`.
    pub fn cell_origin(&self, index: u32, top_row: u32) -> Option<(u16, u16)> {
        let columns = self.columns.max(1) as u32;
        let row = index / columns;
        if row < top_row || row >= top_row + self.visible_rows as u32 {
            return None;
        }
        let col = (index % columns) as u16;
        let x = self.x.saturating_add(col * self.cell_w);
        let y = self
            .y
            .saturating_add((row - top_row) as u16 * self.row_h);
        Some((x, y))
    }
}

/// A lightweight terminal renderer for the optotype game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid row pitch in terminal rows.
    row_h: u16,
    max_columns: u16,
    button_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 4,
            row_h: 2,
            max_columns: 10,
            button_w: 5,
        }
    }
}

impl GameView {
    fn pad_origin(&self, viewport: Viewport) -> (u16, u16) {
        let pad_w = ControlPad::width(self.button_w, PAD_GAP);
        let pad_h = ControlPad::height(PAD_BUTTON_H);
        let x = viewport.width.saturating_sub(pad_w) / 2;
        let y = viewport.height.saturating_sub(pad_h + 1);
        (x, y)
    }

    /// The clickable control pad, in the phases that show one.
    pub fn control_pad(&self, phase: GamePhase, viewport: Viewport) -> Option<ControlPad> {
        match phase {
            GamePhase::Tutorial | GamePhase::Playing => {
                let (x, y) = self.pad_origin(viewport);
                Some(ControlPad::layout(x, y, self.button_w, PAD_BUTTON_H, PAD_GAP))
            }
            _ => None,
        }
    }

    pub fn grid_layout(&self, viewport: Viewport) -> GridLayout {
        let columns = (viewport.width.saturating_sub(2) / self.cell_w).clamp(1, self.max_columns);
        let grid_w = columns * self.cell_w;
        let (_, pad_y) = self.pad_origin(viewport);
        let available = pad_y.saturating_sub(HEADER_ROWS + 1);
        GridLayout {
            x: viewport.width.saturating_sub(grid_w) / 2,
            y: HEADER_ROWS,
            columns,
            visible_rows: (available / self.row_h).max(1),
            cell_w: self.cell_w,
            row_h: self.row_h,
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes. `top_row` is the first grid row to show.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        top_row: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        match snap.phase {
            GamePhase::Menu => self.draw_menu(fb, viewport),
            GamePhase::Tutorial => self.draw_tutorial(fb, snap, viewport),
            GamePhase::Countdown => self.draw_countdown(fb, snap, viewport),
            GamePhase::Playing => self.draw_playing(fb, snap, top_row, viewport),
            GamePhase::Finished => self.draw_results(fb, snap, viewport),
        }

        if let Some(pad) = self.control_pad(snap.phase, viewport) {
            self.draw_pad(fb, &pad);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, top_row: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, top_row, viewport, &mut fb);
        fb
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let top = viewport.height.saturating_sub(15) / 2;
        let glyph_x = viewport.width.saturating_sub(OPTOTYPE_SIZE * 2) / 2;
        self.draw_big_optotype(
            fb,
            glyph_x,
            top,
            Direction::Right,
            CellStyle::fg(palette::AMBER).bold(),
        );

        let title = CellStyle::fg(palette::WHITE).bold();
        let muted = CellStyle::fg(palette::MUTED);
        let y = top + OPTOTYPE_SIZE + 1;
        fb.put_str_centered(y, "O P T O T Y P E", title);
        fb.put_str_centered(y + 2, "Test your visual processing speed.", muted);
        fb.put_str_centered(
            y + 3,
            "Name the direction of the E as fast as you can.",
            muted,
        );

        fb.put_str_centered(y + 5, "[Enter] Play", title);
        fb.put_str_centered(y + 6, "[T] How to play", CellStyle::fg(palette::AMBER));
        fb.put_str_centered(y + 8, "[Q] Quit", CellStyle::fg(palette::DIM));
    }

    fn draw_tutorial(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let accent = CellStyle::fg(palette::AMBER).bold();
        let muted = CellStyle::fg(palette::MUTED);

        let step = snap.tutorial.step() as u32 + 1;
        let total = TUTORIAL_LAST_STEP as u32 + 1;
        let heading = "TUTORIAL (";
        let width = heading.len() as u16 + digits(step) + 1 + digits(total) + 1;
        let mut x = viewport.width.saturating_sub(width) / 2;
        fb.put_str(x, 1, heading, accent);
        x += heading.len() as u16;
        x += fb.put_u32(x, 1, step, accent);
        fb.put_char(x, 1, '/', accent);
        x += 1;
        x += fb.put_u32(x, 1, total, accent);
        fb.put_char(x, 1, ')', accent);

        fb.put_str_centered(2, "Which way is the E pointing?", muted);

        // Panel around the large optotype.
        let panel_w = OPTOTYPE_SIZE * 2 + 4;
        let panel_h = OPTOTYPE_SIZE + 2;
        let panel_x = viewport.width.saturating_sub(panel_w) / 2;
        let panel_y = 4;
        let panel = CellStyle::fg(palette::WHITE).on(palette::PANEL);
        fb.fill_rect(panel_x, panel_y, panel_w, panel_h, ' ', panel);
        self.draw_big_optotype(
            fb,
            panel_x + 2,
            panel_y + 1,
            snap.tutorial.target(),
            CellStyle::fg(palette::AMBER).bold().on(palette::PANEL),
        );

        fb.put_str_centered(
            panel_y + panel_h + 1,
            "[Tab] Skip tutorial",
            CellStyle::fg(palette::WHITE),
        );
    }

    fn draw_countdown(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let bg = CellStyle::fg(palette::BLACK).on(palette::AMBER);
        fb.fill_rect(0, 0, viewport.width, viewport.height, ' ', bg);

        let mid = viewport.height / 2;
        let big = bg.bold();
        if snap.time_left > 0 {
            let x = viewport.width.saturating_sub(digits(snap.time_left)) / 2;
            fb.put_u32(x, mid.saturating_sub(1), snap.time_left, big);
        } else {
            fb.put_str_centered(mid.saturating_sub(1), "GO!", big);
        }
        fb.put_str_centered(mid + 1, "GET READY", bg);
    }

    fn draw_playing(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        top_row: u32,
        viewport: Viewport,
    ) {
        // Header: time on the left, points on the right.
        let amber = CellStyle::fg(palette::AMBER).bold();
        let mut x = 1;
        fb.put_str(x, 0, "TIME ", amber);
        x += 5;
        x += fb.put_u32(x, 0, snap.time_left, amber);
        fb.put_char(x, 0, 's', amber);

        let points = snap.stats.correct;
        let label = "POINTS ";
        let right_w = label.len() as u16 + digits(points);
        let px = viewport.width.saturating_sub(right_w + 1);
        fb.put_str(px, 0, label, CellStyle::fg(palette::DIM));
        fb.put_u32(
            px + label.len() as u16,
            0,
            points,
            CellStyle::fg(palette::WHITE).bold(),
        );

        let rule = CellStyle::fg(palette::PANEL);
        for x in 0..viewport.width {
            fb.put_char(x, 1, '─', rule);
        }

        let layout = self.grid_layout(viewport);
        for (i, sym) in snap.symbols.iter().enumerate() {
            if let Some((cx, cy)) = layout.cell_origin(i as u32, top_row) {
                draw_symbol(fb, cx, cy, sym);
            }
        }
    }

    fn draw_results(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let top = viewport.height.saturating_sub(12) / 2;
        let title = if snap.sequence_exhausted() {
            "SEQUENCE COMPLETE!"
        } else {
            "TIME'S UP!"
        };
        fb.put_str_centered(top, title, CellStyle::fg(palette::WHITE).bold());
        fb.put_str_centered(
            top + 1,
            "Let's see how your eyes are doing.",
            CellStyle::fg(palette::DIM),
        );

        let mid = viewport.width / 2;
        let label = CellStyle::fg(palette::DIM);
        let left_x = mid.saturating_sub(12);
        let right_x = mid + 4;
        fb.put_str(left_x, top + 3, "CORRECT", label);
        fb.put_u32(
            left_x,
            top + 4,
            snap.stats.correct,
            CellStyle::fg(palette::GREEN).bold(),
        );
        fb.put_str(right_x, top + 3, "ERRORS", label);
        fb.put_u32(
            right_x,
            top + 4,
            snap.stats.errors,
            CellStyle::fg(palette::RED).bold(),
        );

        let score = snap.stats.score();
        let label = "FINAL SCORE: ";
        let unit = " pts";
        let sign = u16::from(score < 0);
        let magnitude = score.unsigned_abs().min(u32::MAX as u64) as u32;
        let width = label.len() as u16 + sign + digits(magnitude) + unit.len() as u16;
        let accent = CellStyle::fg(palette::AMBER).bold();
        let mut x = viewport.width.saturating_sub(width) / 2;
        fb.put_str(x, top + 6, label, accent);
        x += label.len() as u16;
        x += fb.put_i64(x, top + 6, score, accent);
        fb.put_str(x, top + 6, unit, accent);

        fb.put_str_centered(top + 8, "[Enter] Try again", CellStyle::fg(palette::WHITE).bold());
        fb.put_str_centered(top + 9, "[M] Back to menu", CellStyle::fg(palette::MUTED));
    }

    fn draw_big_optotype(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        direction: Direction,
        style: CellStyle,
    ) {
        // Two columns per pattern cell to compensate for glyph aspect ratio.
        for py in 0..OPTOTYPE_SIZE {
            for px in 0..OPTOTYPE_SIZE {
                if is_filled(direction, px, py) {
                    fb.fill_rect(x + px * 2, y + py, 2, 1, '█', style);
                }
            }
        }
    }

    fn draw_pad(&self, fb: &mut FrameBuffer, pad: &ControlPad) {
        let style = CellStyle::fg(palette::WHITE).bold().on(palette::PANEL);
        for button in pad.buttons() {
            let r = button.rect;
            fb.fill_rect(r.x, r.y, r.w, r.h, ' ', style);
            fb.put_char(r.x + r.w / 2, r.y + r.h / 2, arrow(button.direction), style);
        }
    }
}

fn draw_symbol(fb: &mut FrameBuffer, x: u16, y: u16, sym: &SymbolItem) {
    let ch = glyph(sym.direction);
    match sym.status {
        SymbolStatus::Current => {
            let style = CellStyle::fg(palette::AMBER).bold().on(palette::PANEL);
            fb.put_char(x, y, '[', style);
            fb.put_char(x + 1, y, ch, style);
            fb.put_char(x + 2, y, ']', style);
        }
        SymbolStatus::Pending => fb.put_char(x + 1, y, ch, CellStyle::fg(palette::MUTED)),
        SymbolStatus::Correct => fb.put_char(x + 1, y, ch, CellStyle::fg(palette::GREEN).dimmed()),
        SymbolStatus::Wrong => fb.put_char(x + 1, y, ch, CellStyle::fg(palette::RED).dimmed()),
    }
}

fn arrow(direction: Direction) -> char {
    match direction {
        Direction::Up => '↑',
        Direction::Down => '↓',
        Direction::Left => '←',
        Direction::Right => '→',
    }
}

fn digits(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

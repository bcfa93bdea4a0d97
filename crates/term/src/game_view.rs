//! GameView: maps a `core::RoundSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Actor, RoundSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Mode, Position, Role, RoundOutcome, PULSE_MS};

const BOARD_BG: Rgb = Rgb::new(55, 65, 81);
const SCREEN_BG: Rgb = Rgb::new(17, 24, 39);
const SEEKER_FG: Rgb = Rgb::new(239, 68, 68);
const RUNNER_FG: Rgb = Rgb::new(245, 245, 245);

/// Glyph filling an AI actor's cell.
pub const AI_GLYPH: char = '█';
/// Glyph filling the human actor's cell.
pub const HUMAN_GLYPH: char = '▓';

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

/// Pulse phase of the human marker at `elapsed_ms` of wall time.
pub fn pulse_on(elapsed_ms: u64) -> bool {
    (elapsed_ms / PULSE_MS as u64) % 2 == 0
}

/// A lightweight terminal renderer for the chase board.
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

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// `pulse` selects the bright or dim phase of the human marker.
    pub fn render_into(
        &self,
        snap: &RoundSnapshot,
        pulse: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG).cell(' '));

        match snap.mode {
            Mode::Selecting => self.draw_menu(fb, snap, viewport),
            Mode::Playing => self.draw_round(fb, snap, pulse, viewport),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RoundSnapshot, pulse: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, pulse, viewport, &mut fb);
        fb
    }

    /// Top-left corner of the board frame (border included) for `snap`.
    pub fn board_origin(&self, snap: &RoundSnapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap.board_size);
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    fn frame_size(&self, board_size: u8) -> (u16, u16) {
        (
            board_size as u16 * self.cell_w + 2,
            board_size as u16 * self.cell_h + 2,
        )
    }

    fn draw_round(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, pulse: bool, viewport: Viewport) {
        let n = snap.board_size;
        let (frame_w, frame_h) = self.frame_size(n);
        let (start_x, start_y) = self.board_origin(snap, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let empty = CellStyle::new(Rgb::new(110, 120, 135), BOARD_BG).dim();
        for y in 0..n {
            for x in 0..n {
                let (ch, style) = match snap.actor_at(Position::new(x, y)) {
                    Some(actor) => marker(actor, pulse),
                    None => ('·', empty),
                };
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &RoundSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "ROLE", label);
        y += 1;
        if let Some(role) = snap.human_role {
            let style = CellStyle {
                fg: role_color(role),
                ..value
            };
            fb.put_str(panel_x, y, role_label(role), style);
        }
        y += 2;

        fb.put_str(panel_x, y, "ROUND", label);
        fb.put_u32(panel_x, y + 1, snap.round_id, value);
        y += 3;

        fb.put_str(panel_x, y, "STEPS", label);
        fb.put_u32(panel_x, y + 1, snap.ai_ticks, value);
        y += 3;

        let hint = match snap.human_role {
            Some(Role::Seeker) => "Catch the runners!",
            _ => "Avoid the seekers!",
        };
        fb.put_str(panel_x, y, hint, value);
        y += 2;

        let dim = value.dim();
        fb.put_str(panel_x, y, "arrows move", dim);
        fb.put_str(panel_x, y + 1, "esc    menu", dim);
        fb.put_str(panel_x, y + 2, "q      quit", dim);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &RoundSnapshot, viewport: Viewport) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let seeker = CellStyle::new(SEEKER_FG, SCREEN_BG).bold();
        let runner = CellStyle::new(RUNNER_FG, SCREEN_BG).bold();
        let note = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let outcome = snap.last_outcome.map(|o| match o {
            RoundOutcome::HumanWon => "You caught a runner!",
            RoundOutcome::HumanLost => "You were caught!",
        });

        let lines: [(&str, CellStyle); 6] = [
            ("TAG GAME", title),
            (outcome.unwrap_or(""), note),
            ("[1] Play as Seeker", seeker),
            ("[2] Play as Runner", runner),
            ("", note),
            ("q to quit", note.dim()),
        ];

        let block_h = lines.len() as u16 * 2 - 1;
        let mut y = viewport.height.saturating_sub(block_h) / 2;
        for (text, style) in lines {
            put_centered(fb, viewport, y, text, style);
            y = y.saturating_add(2);
        }
    }
}

fn marker(actor: &Actor, pulse: bool) -> (char, CellStyle) {
    let style = CellStyle::new(role_color(actor.role), BOARD_BG);
    if actor.is_human() {
        let style = if pulse { style.bold() } else { style.dim() };
        (HUMAN_GLYPH, style)
    } else {
        (AI_GLYPH, style)
    }
}

fn role_color(role: Role) -> Rgb {
    match role {
        Role::Seeker => SEEKER_FG,
        Role::Runner => RUNNER_FG,
    }
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Seeker => "SEEKER",
        Role::Runner => "RUNNER",
    }
}

fn put_centered(fb: &mut FrameBuffer, viewport: Viewport, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = viewport.width.saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

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

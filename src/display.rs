//! Rendering layer — all terminal output lives here.
//!
//! Each function receives a mutable writer and an immutable [`Frame`].
//! Field coordinates are scaled onto whatever terminal size the host
//! reports; nothing here feeds back into the game.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{Frame, Level, Outcome};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkYellow;
const C_TITLE: Color = Color::Blue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LEFT: Color = Color::Cyan;
const C_GATE: Color = Color::Blue;
const C_PLAYER: Color = Color::White;
const C_HAZARD: Color = Color::Red;
const C_TARGET: Color = Color::Green;
const C_INSTRUCTION: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

const HINT: &str = "←↑↓→ / WASD : Move   N : New Game   Q : Quit";

/// Terminal cells available for drawing, including HUD and hint rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screen {
    pub width: u16,
    pub height: u16,
}

impl Screen {
    // Play area: inside the border, rows 2 ..= height-4. The two rows
    // below the bottom border hold the instruction and the key help.
    fn left(&self) -> u16 {
        1
    }
    fn right(&self) -> u16 {
        self.width.saturating_sub(2).max(1)
    }
    fn top(&self) -> u16 {
        2
    }
    fn bottom(&self) -> u16 {
        self.height.saturating_sub(4).max(2)
    }

    /// Map a field position to a cell, clamping anything that has strayed
    /// past the border back onto it.
    pub fn cell(&self, frame: &Frame<'_>, x: i32, y: i32) -> (u16, u16) {
        let col = scale(x, frame.width, self.left(), self.right());
        let row = scale(y, frame.height, self.top(), self.bottom());
        (col, row)
    }
}

fn scale(v: i32, extent: i32, lo: u16, hi: u16) -> u16 {
    let span = i64::from(hi - lo);
    let v = i64::from(v.clamp(0, extent));
    let extent = i64::from(extent.max(1));
    lo + (v * span / extent) as u16
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, frame: &Frame<'_>, screen: Screen) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, screen)?;
    draw_hud(out, frame, screen)?;
    draw_gate(out, frame, screen)?;

    out.queue(style::SetForegroundColor(C_TARGET))?;
    for target in frame.targets {
        let (col, row) = screen.cell(frame, target.x, target.y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("♦"))?;
    }

    out.queue(style::SetForegroundColor(C_HAZARD))?;
    for hazard in frame.hazards {
        let (col, row) = screen.cell(frame, hazard.x, hazard.y);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(Print("☻"))?;
    }

    // Player last so it stays visible when overlapping
    let (col, row) = screen.cell(frame, frame.player.x, frame.player.y);
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    draw_controls_hint(out, frame, screen)?;

    if let Some((outcome, message)) = frame.terminal {
        draw_result(out, outcome, message, screen)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, screen.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, screen: Screen) -> std::io::Result<()> {
    let w = screen.width as usize;
    let h = screen.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(3)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(3) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(screen.width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, frame: &Frame<'_>, screen: Screen) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print("SCOOTER HUNTER"))?;

    let score = format!("Score: {}", frame.score);
    let level = match frame.level {
        Level::Easy => "[ EASY ]",
        Level::Normal => "[ NORMAL ]",
        Level::Hard => "[ HARD ]",
    };
    let level_color = match frame.level {
        Level::Easy => Color::Green,
        Level::Normal => Color::Yellow,
        Level::Hard => Color::Red,
    };
    let centre = format!("{score}  {level}");
    let cx = (screen.width / 2).saturating_sub(centre.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(cx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score))?;
    out.queue(Print("  "))?;
    out.queue(style::SetForegroundColor(level_color))?;
    out.queue(Print(level))?;

    let left = format!("Scooters: {}/{}", frame.targets.len(), frame.total_targets);
    let rx = screen.width.saturating_sub(left.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEFT))?;
    out.queue(Print(&left))?;

    Ok(())
}

// ── Gate ──────────────────────────────────────────────────────────────────────

fn draw_gate<W: Write>(out: &mut W, frame: &Frame<'_>, screen: Screen) -> std::io::Result<()> {
    let (c0, r0) = screen.cell(frame, frame.gate.x0, frame.gate.y0);
    let (c1, r1) = screen.cell(frame, frame.gate.x1, frame.gate.y1);
    let fill = "░".repeat(usize::from(c1.saturating_sub(c0)) + 1);

    out.queue(style::SetForegroundColor(C_GATE))?;
    for row in r0..=r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&fill))?;
    }
    Ok(())
}

// ── Instruction + controls hint (last two rows) ──────────────────────────────

pub fn instruction(frame: &Frame<'_>) -> String {
    format!(
        "Starting a {} level game... Use four arrow keys to move. Try to capture all {} \
         scooters while avoiding {} students walking around the campus.",
        frame.level, frame.total_targets, frame.total_hazards
    )
}

fn draw_controls_hint<W: Write>(
    out: &mut W,
    frame: &Frame<'_>,
    screen: Screen,
) -> std::io::Result<()> {
    let room = usize::from(screen.width.saturating_sub(2));
    let text: String = instruction(frame).chars().take(room).collect();
    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(2)))?;
    out.queue(style::SetForegroundColor(C_INSTRUCTION))?;
    out.queue(Print(text))?;

    out.queue(cursor::MoveTo(1, screen.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(HINT))?;
    Ok(())
}

// ── Result overlay ────────────────────────────────────────────────────────────

fn draw_result<W: Write>(
    out: &mut W,
    outcome: Outcome,
    message: &str,
    screen: Screen,
) -> std::io::Result<()> {
    let color = match outcome {
        Outcome::Won => Color::Blue,
        Outcome::Lost => Color::Red,
    };
    let lines: Vec<&str> = message.lines().collect();
    let inner = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 4;

    let top = format!("╔{}╗", "═".repeat(inner));
    let bottom = format!("╚{}╝", "═".repeat(inner));
    let mut rows = vec![top];
    for line in &lines {
        let pad = inner - line.chars().count();
        let left = pad / 2;
        rows.push(format!("║{}{}{}║", " ".repeat(left), line, " ".repeat(pad - left)));
    }
    rows.push(bottom);

    let cx = screen.width / 2;
    let start_row = (screen.height / 2).saturating_sub(rows.len() as u16 / 2);

    out.queue(style::SetForegroundColor(color))?;
    for (i, text) in rows.iter().enumerate() {
        let col = cx.saturating_sub(text.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(text))?;
    }

    Ok(())
}

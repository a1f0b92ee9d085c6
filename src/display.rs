/// Rendering layer: all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// state into terminal commands.  The logical playfield is scaled onto the
/// cells inside the border.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_shooter::entities::{
    EffectTint, GameState, GameStatus, Obstacle, Projectile, SizeClass, WeaponMode,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_STAR: Color = Color::DarkGrey;
const C_HUD: Color = Color::White;
const C_PLAYER: Color = Color::White;
const C_SHOT_STANDARD: Color = Color::Yellow;
const C_SHOT_CHARGED: Color = Color::Red;
const C_OBSTACLE: Color = Color::Grey;
const C_OBSTACLE_DAMAGED: Color = Color::DarkYellow;
const C_PICKUP: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// Rows below the play area: bottom border plus two HUD lines.
const HUD_ROWS: u16 = 3;
const STAR_COUNT: u32 = 40;

/// Cell rectangle the playfield is drawn into (inside the border).
#[derive(Clone, Copy)]
struct Area {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
}

impl Area {
    fn of(cols: u16, rows: u16) -> Self {
        Area {
            left: 1,
            top: 1,
            width: cols.saturating_sub(2).max(1),
            height: rows.saturating_sub(1 + HUD_ROWS).max(1),
        }
    }

    /// Map a playfield point to a cell; `None` when it is outside the playfield.
    fn cell(&self, state: &GameState, x: f32, y: f32) -> Option<(u16, u16)> {
        let pf = state.playfield;
        if x < 0.0 || y < 0.0 || x >= pf.width || y >= pf.height {
            return None;
        }
        let col = ((x / pf.width) * self.width as f32) as u16;
        let row = ((y / pf.height) * self.height as f32) as u16;
        Some((
            self.left + col.min(self.width - 1),
            self.top + row.min(self.height - 1),
        ))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &GameState) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    if state.status == GameStatus::GameOver {
        draw_game_over(out, state, cols, rows)?;
    } else {
        let area = Area::of(cols, rows);
        draw_border(out, area)?;
        draw_background(out, state, area)?;
        draw_player(out, state, area)?;
        for p in state.projectiles.values() {
            draw_projectile(out, state, area, p)?;
        }
        for o in state.obstacles.values() {
            draw_obstacle(out, state, area, o)?;
        }
        for p in state.pickups.values() {
            if let Some((col, row)) = area.cell(state, p.x, p.y) {
                out.queue(cursor::MoveTo(col, row))?;
                out.queue(style::SetForegroundColor(C_PICKUP))?;
                out.queue(Print("■"))?;
            }
        }
        for e in state.effects.values() {
            let (Some(tint), Some((col, row))) = (e.current(), area.cell(state, e.x, e.y)) else {
                continue;
            };
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(style::SetForegroundColor(tint_color(tint)))?;
            out.queue(Print("✹"))?;
        }
        draw_hud(out, state, area, cols)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border & background ───────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, area: Area) -> std::io::Result<()> {
    let w = area.width as usize;
    let bottom = area.top + area.height;

    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w))))?;
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w))))?;
    for row in area.top..bottom {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(area.left + area.width, row))?;
        out.queue(Print("│"))?;
    }

    // Controls hint sits in the top bar
    let hint = " ←/→ move  SPACE fire  1/2 weapon  Q quit ";
    out.queue(cursor::MoveTo(2, 0))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(hint))?;
    Ok(())
}

/// Fixed star pattern scrolled down by the background offset.
fn draw_background<W: Write>(out: &mut W, state: &GameState, area: Area) -> std::io::Result<()> {
    let pf = state.playfield;
    out.queue(style::SetForegroundColor(C_STAR))?;
    for i in 0..STAR_COUNT {
        let x = (i * 211 % 997) as f32 / 997.0 * pf.width;
        let y = ((i * 149 % 991) as f32 / 991.0 * pf.height + state.background_offset) % pf.height;
        if let Some((col, row)) = area.cell(state, x, y) {
            out.queue(cursor::MoveTo(col, row))?;
            out.queue(Print("."))?;
        }
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, state: &GameState, area: Area) -> std::io::Result<()> {
    // Sprite (2 rows, 3 cols):
    //   ▲       ← nose
    //  /|\      ← wings
    let p = &state.player;
    let Some((col, row)) = area.cell(state, p.x, p.y) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;
    if row + 1 < area.top + area.height {
        out.queue(cursor::MoveTo(col.saturating_sub(1).max(area.left), row + 1))?;
        out.queue(Print("/|\\"))?;
    }
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    state: &GameState,
    area: Area,
    p: &Projectile,
) -> std::io::Result<()> {
    let Some((col, row)) = area.cell(state, p.x, p.y) else {
        return Ok(());
    };
    let (glyph, color) = match p.weapon {
        WeaponMode::Standard => ("|", C_SHOT_STANDARD),
        WeaponMode::Charged => ("║", C_SHOT_CHARGED),
    };
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_obstacle<W: Write>(
    out: &mut W,
    state: &GameState,
    area: Area,
    o: &Obstacle,
) -> std::io::Result<()> {
    let Some((col, row)) = area.cell(state, o.x, o.y) else {
        return Ok(());
    };
    let sprite = match o.size {
        SizeClass::Small => "o",
        SizeClass::Medium => "(O)",
        SizeClass::Large => "{@@}",
    };
    let color = if o.health < o.size.health() {
        C_OBSTACLE_DAMAGED
    } else {
        C_OBSTACLE
    };
    let half = sprite.chars().count() as u16 / 2;
    out.queue(cursor::MoveTo(col.saturating_sub(half).max(area.left), row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(sprite))?;
    Ok(())
}

fn tint_color(tint: EffectTint) -> Color {
    match tint {
        EffectTint::Red => Color::Red,
        EffectTint::Orange => Color::DarkYellow,
        EffectTint::Yellow => Color::Yellow,
    }
}

// ── HUD (two rows under the play area) ────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, state: &GameState, area: Area, cols: u16) -> std::io::Result<()> {
    let first = area.top + area.height + 1;
    let second = first + 1;
    let progression = &state.progression;
    let player = &state.player;

    out.queue(style::SetForegroundColor(C_HUD))?;
    out.queue(cursor::MoveTo(1, first))?;
    out.queue(Print(format!("Score: {}", progression.score)))?;
    out.queue(cursor::MoveTo(1, second))?;
    out.queue(Print(format!("Level: {}", progression.level)))?;

    let weapon = match player.weapon {
        WeaponMode::Standard => "[ STANDARD ]",
        WeaponMode::Charged => "[ LASER ]",
    };
    let wx = (cols / 2).saturating_sub(weapon.len() as u16 / 2);
    out.queue(cursor::MoveTo(wx, second))?;
    out.queue(Print(weapon))?;

    let health = format!("Health: {}", player.health);
    let ammo = format!("Laser Ammo: {}", player.ammo);
    let rx = cols.saturating_sub(health.len().max(ammo.len()) as u16 + 1);
    out.queue(cursor::MoveTo(rx, first))?;
    out.queue(Print(&health))?;
    out.queue(cursor::MoveTo(rx, second))?;
    out.queue(Print(&ammo))?;
    Ok(())
}

// ── Game-over summary ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    state: &GameState,
    cols: u16,
    rows: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {}", state.progression.score);
    let mut lines: Vec<(String, Color)> = vec![
        ("Game Over".to_string(), Color::Red),
        (String::new(), Color::Reset),
        (score_line, Color::White),
        (String::new(), Color::Reset),
        ("Achievements Unlocked:".to_string(), Color::Cyan),
    ];
    let achievements = state.progression.achievements();
    if achievements.is_empty() {
        lines.push(("None. Keep trying!".to_string(), Color::DarkGrey));
    } else {
        for a in achievements {
            lines.push((format!("✔ {}", a.title()), Color::Green));
        }
    }
    lines.push((String::new(), Color::Reset));
    lines.push(("Q - Quit".to_string(), C_HINT));

    let cx = cols / 2;
    let start_row = (rows / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(msg))?;
    }

    Ok(())
}

//! Terminal canvas: the only place that talks to the terminal.
//!
//! Scales the 800×450 viewport onto whatever grid the terminal has and
//! translates `Canvas` calls into crossterm commands.  Sprites are stretched
//! with nearest-neighbour sampling; spaces in the art are transparent.

use std::io::{self, Write};

use airplane::assets::{Sprite, SpriteKind};
use airplane::render::{Canvas, TextStyle};
use airplane::tuning::{VIEW_HEIGHT, VIEW_WIDTH};
use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BACKGROUND: Color = Color::DarkGrey;
const C_TANK: Color = Color::Green;
const C_TANK_HIT: Color = Color::Red;
const C_PLANE: Color = Color::White;
const C_BOMB: Color = Color::Grey;
const C_BLAST: Color = Color::DarkYellow; // closest thing to orange
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_SCORE: Color = Color::Yellow;
const C_BANNER: Color = Color::Red;

const BLAST_GLYPH: char = '▓';

fn sprite_color(kind: SpriteKind) -> Color {
    match kind {
        SpriteKind::Background => C_BACKGROUND,
        SpriteKind::Tank => C_TANK,
        SpriteKind::TankHit => C_TANK_HIT,
        SpriteKind::Plane => C_PLANE,
        SpriteKind::Bomb => C_BOMB,
        SpriteKind::LivesIcon => C_HUD_LIVES,
        SpriteKind::ScoreIcon => C_HUD_SCORE,
    }
}

pub struct TerminalCanvas<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        TerminalCanvas {
            out,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols.max(1);
        self.rows = rows.max(1);
    }

    pub fn out_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Viewport X under the middle of a terminal column.
    pub fn column_to_view_x(&self, col: u16) -> i32 {
        self.view_x_of(i32::from(col))
    }

    fn to_col(&self, x: i32) -> i32 {
        (x * i32::from(self.cols)).div_euclid(VIEW_WIDTH)
    }

    fn to_row(&self, y: i32) -> i32 {
        (y * i32::from(self.rows)).div_euclid(VIEW_HEIGHT)
    }

    fn view_x_of(&self, col: i32) -> i32 {
        (2 * col + 1) * VIEW_WIDTH / (2 * i32::from(self.cols))
    }

    fn view_y_of(&self, row: i32) -> i32 {
        (2 * row + 1) * VIEW_HEIGHT / (2 * i32::from(self.rows))
    }

    fn in_rows(&self, row: i32) -> bool {
        (0..i32::from(self.rows)).contains(&row)
    }

    fn in_cols(&self, col: i32) -> bool {
        (0..i32::from(self.cols)).contains(&col)
    }

    /// Print an already clipped run of glyphs.
    fn put(&mut self, col: i32, row: i32, text: &str) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
        self.out.queue(Print(text))?;
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn begin_frame(&mut self) -> io::Result<()> {
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    fn draw_sprite(
        &mut self,
        sprite: &Sprite,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> io::Result<()> {
        let (src_w, src_h) = (sprite.width() as i32, sprite.height() as i32);
        if src_w == 0 || src_h == 0 {
            return Ok(());
        }

        let c0 = self.to_col(x);
        let c1 = self.to_col(x + width).max(c0 + 1);
        let r0 = self.to_row(y);
        let r1 = self.to_row(y + height).max(r0 + 1);
        let (dst_w, dst_h) = (c1 - c0, r1 - r0);

        self.out.queue(style::SetForegroundColor(sprite_color(sprite.kind)))?;

        let rows = i32::from(self.rows);
        for row in r0.max(0)..r1.min(rows) {
            let src_row = ((row - r0) * src_h / dst_h) as usize;
            let mut run = String::new();
            let mut run_start = 0;

            for col in c0..c1 {
                let src_col = ((col - c0) * src_w / dst_w) as usize;
                let glyph = if self.in_cols(col) {
                    sprite.glyph(src_col, src_row)
                } else {
                    None
                };
                match glyph {
                    Some(g) => {
                        if run.is_empty() {
                            run_start = col;
                        }
                        run.push(g);
                    }
                    None => {
                        self.put(run_start, row, &run)?;
                        run.clear();
                    }
                }
            }
            self.put(run_start, row, &run)?;
        }
        Ok(())
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> io::Result<()> {
        if radius <= 0 {
            return Ok(());
        }
        self.out.queue(style::SetForegroundColor(C_BLAST))?;

        let centre = (self.to_col(x), self.to_row(y));
        for row in self.to_row(y - radius)..=self.to_row(y + radius) {
            if !self.in_rows(row) {
                continue;
            }
            let dy = self.view_y_of(row) - y;
            for col in self.to_col(x - radius)..=self.to_col(x + radius) {
                if !self.in_cols(col) {
                    continue;
                }
                let dx = self.view_x_of(col) - x;
                // The centre cell always shows, even when the blast is
                // smaller than a cell.
                if dx * dx + dy * dy <= radius * radius || (col, row) == centre {
                    self.put(col, row, &BLAST_GLYPH.to_string())?;
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, text_style: TextStyle) -> io::Result<()> {
        let row = self.to_row(y).clamp(0, i32::from(self.rows) - 1);
        let col = self.to_col(x).max(0);
        let room = (i32::from(self.cols) - col).max(0) as usize;
        let clipped: String = text.chars().take(room).collect();

        match text_style {
            TextStyle::Hud => {
                self.out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
                self.put(col, row, &clipped)?;
            }
            TextStyle::Banner => {
                self.out.queue(style::SetForegroundColor(C_BANNER))?;
                self.out.queue(style::SetAttribute(Attribute::Bold))?;
                self.put(col, row, &clipped)?;
                self.out.queue(style::SetAttribute(Attribute::Reset))?;
            }
        }
        Ok(())
    }

    fn end_frame(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}

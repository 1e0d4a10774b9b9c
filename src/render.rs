//! Frame composition.
//!
//! `draw_frame` walks an immutable view of the game state and issues draw
//! calls back to front against a `Canvas`.  Hosts implement `Canvas`; no
//! game logic is performed here.  All coordinates are viewport pixels
//! (800×450, origin top-left).

use std::io;

use crate::assets::{Assets, Sprite};
use crate::entities::{Bomb, GameState, GameStatus, Tank};
use crate::tuning::{PLANE_ALTITUDE, PLANE_HEIGHT, PLANE_WIDTH, VIEW_HEIGHT, VIEW_WIDTH};

// ── HUD layout ────────────────────────────────────────────────────────────────

const ICON_SIZE: i32 = 50;
const ICON_GAP: i32 = 10;
const HUD_MARGIN: i32 = 10;

pub const LOST_BANNER: &str = "YOU LOST!!!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Hud,
    Banner,
}

/// Drawing primitives a host provides.
pub trait Canvas {
    fn begin_frame(&mut self) -> io::Result<()>;
    /// Draw `sprite` stretched over the given rectangle.
    fn draw_sprite(
        &mut self,
        sprite: &Sprite,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    ) -> io::Result<()>;
    fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> io::Result<()>;
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) -> io::Result<()>;
    fn end_frame(&mut self) -> io::Result<()>;
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame: background, enemies, plane, bombs, HUD, and the
/// loss banner once the game is lost.
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState, assets: &Assets) -> io::Result<()> {
    canvas.begin_frame()?;

    draw_background(canvas, state, assets)?;
    for tank in &state.enemies.tanks {
        draw_tank(canvas, tank, assets)?;
    }
    draw_plane(canvas, state, assets)?;
    for bomb in &state.plane.bombs {
        draw_bomb(canvas, bomb, assets)?;
    }
    draw_hud(canvas, state, assets)?;

    if state.status == GameStatus::Lost {
        draw_lost(canvas)?;
    }

    canvas.end_frame()
}

/// Placeholders are skipped: a missing asset leaves its entity invisible.
fn sprite<C: Canvas>(
    canvas: &mut C,
    sprite: &Sprite,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
) -> io::Result<()> {
    if sprite.is_placeholder() {
        return Ok(());
    }
    canvas.draw_sprite(sprite, x, y, width, height)
}

// ── Layers ────────────────────────────────────────────────────────────────────

fn draw_background<C: Canvas>(canvas: &mut C, state: &GameState, assets: &Assets) -> io::Result<()> {
    match assets.slides.get(state.background.current) {
        Some(slide) => sprite(canvas, slide, 0, 0, VIEW_WIDTH, VIEW_HEIGHT),
        None => Ok(()),
    }
}

fn draw_tank<C: Canvas>(canvas: &mut C, tank: &Tank, assets: &Assets) -> io::Result<()> {
    let art = if tank.hit { &assets.tank_hit } else { &assets.tank };
    sprite(
        canvas,
        art,
        tank.x - tank.width / 2 + VIEW_WIDTH / 2,
        tank.y + VIEW_HEIGHT / 3,
        tank.width,
        tank.height,
    )
}

fn draw_plane<C: Canvas>(canvas: &mut C, state: &GameState, assets: &Assets) -> io::Result<()> {
    let plane = &state.plane;
    sprite(
        canvas,
        assets.plane(plane.facing),
        plane.pos - PLANE_WIDTH / 2 + VIEW_WIDTH / 2,
        PLANE_ALTITUDE,
        PLANE_WIDTH,
        PLANE_HEIGHT,
    )
}

fn draw_bomb<C: Canvas>(canvas: &mut C, bomb: &Bomb, assets: &Assets) -> io::Result<()> {
    let (x, y) = (bomb.screen_x(), bomb.screen_y());
    if bomb.is_exploding() {
        return canvas.fill_circle(x as i32, y as i32, bomb.radius);
    }
    sprite(
        canvas,
        &assets.bomb,
        (x - bomb.width / 2.0) as i32,
        (y - bomb.height) as i32,
        bomb.width as i32,
        bomb.height as i32,
    )
}

/// Lives top-right (one icon per life left), score bottom-left.
fn draw_hud<C: Canvas>(canvas: &mut C, state: &GameState, assets: &Assets) -> io::Result<()> {
    let board = &state.scoreboard;
    for i in 1..=board.lives_left() as i32 {
        sprite(
            canvas,
            &assets.lives_icon,
            VIEW_WIDTH - i * (ICON_SIZE + ICON_GAP),
            HUD_MARGIN,
            ICON_SIZE,
            ICON_SIZE,
        )?;
    }

    let icon_y = VIEW_HEIGHT - ICON_SIZE - HUD_MARGIN;
    sprite(canvas, &assets.score_icon, HUD_MARGIN, icon_y, ICON_SIZE, ICON_SIZE)?;
    canvas.draw_text(
        &format!(":{}", board.score),
        HUD_MARGIN + ICON_SIZE + 5,
        VIEW_HEIGHT - 25,
        TextStyle::Hud,
    )
}

fn draw_lost<C: Canvas>(canvas: &mut C) -> io::Result<()> {
    let x = (f64::from(VIEW_WIDTH) / 3.5) as i32;
    let y = (f64::from(VIEW_HEIGHT) / 1.5) as i32;
    canvas.draw_text(LOST_BANNER, x, y, TextStyle::Banner)
}

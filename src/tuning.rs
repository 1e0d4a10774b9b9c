//! Gameplay tuning: viewport geometry, timings and growth factors.
//!
//! These values are the feel of the game.  Keep them separate from
//! runtime configuration (asset paths, log files, lives) in `config`.

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Logical viewport width in pixels.  Local coordinates put 0 at the centre.
pub const VIEW_WIDTH: i32 = 800;
pub const VIEW_HEIGHT: i32 = 450;

// ── Timing ────────────────────────────────────────────────────────────────────

/// Milliseconds between frames (≈24 FPS).
pub const FRAME_INTERVAL_MS: u32 = 1000 / 24;

/// Converts whole seconds into ticks the same way every cooldown does.
pub const fn seconds_to_ticks(seconds: u32) -> u32 {
    seconds * 1000 / FRAME_INTERVAL_MS
}

// ── Enemy tanks ───────────────────────────────────────────────────────────────

/// Vertical start of a freshly spawned tank (local, just under the horizon).
pub const TANK_START_Y: i32 = 20;
pub const TANK_START_WIDTH: i32 = 30;
pub const TANK_START_HEIGHT: i32 = 20;

/// Spawn column spread: tanks appear within ±SPREAD/2 of the centre.
pub const TANK_SPAWN_SPREAD: f64 = 80.0;

pub const TANK_X_GROWTH: f64 = 1.04;
pub const TANK_Y_GROWTH: f64 = 1.05;
pub const TANK_SIZE_GROWTH: f64 = 1.05;

/// First tank: 5 s plus up to 3 s of jitter.
pub const FIRST_SPAWN_MIN_SECS: u32 = 5;
pub const FIRST_SPAWN_JITTER_SECS: u32 = 3;

/// Every later tank: 2 s plus up to 1 s of jitter.
pub const RESPAWN_MIN_SECS: u32 = 2;
pub const RESPAWN_JITTER_SECS: u32 = 1;

// ── Plane ─────────────────────────────────────────────────────────────────────

pub const PLANE_WIDTH: i32 = 175;
pub const PLANE_HEIGHT: i32 = 75;

/// The plane flies at one sixth of the viewport height.
pub const PLANE_ALTITUDE: i32 = VIEW_HEIGHT / 6;

/// Pointer offset is divided by this to get the per-tick displacement.
pub const STEER_DIVISOR: i32 = 10;

/// |speed| at or below this keeps the plane facing forward.
pub const FACING_DEAD_ZONE: i32 = 5;

/// One second between drops.
pub const DROP_COOLDOWN_TICKS: u32 = seconds_to_ticks(1);

// ── Bombs ─────────────────────────────────────────────────────────────────────

pub const BOMB_START_Y: f64 = 10.0;
pub const BOMB_START_WIDTH: f64 = 10.0;
pub const BOMB_START_HEIGHT: f64 = 15.0;

/// Bombs detonate once they fall past a third of the viewport.
pub const BOMB_DETONATION_Y: f64 = (VIEW_HEIGHT / 3) as f64;

pub const BOMB_SHRINK: f64 = 0.95;
pub const BOMB_FALL: f64 = 1.2;
pub const BLAST_DRIFT_X: f64 = 1.02;
pub const BLAST_DRIFT_Y: f64 = 1.03;

pub const MAX_RADIUS: i32 = 40;
pub const RADIUS_STEP: i32 = 10;

/// A tank is hit when its distance to the blast is ≤ radius × BLAST_REACH.
pub const BLAST_REACH: f64 = 1.25;

// ── Scoreboard ────────────────────────────────────────────────────────────────

pub const MAX_HEALTH: u32 = 10;

// ── Background ────────────────────────────────────────────────────────────────

/// Ticks each background slide stays on screen.
pub const SLIDE_RATE: u32 = 10;

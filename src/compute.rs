//! Game controller.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (and, where needed, an RNG handle) and returns a brand-new
//! `GameState`.  Side effects are limited to the injected RNG.  Component
//! behaviour (enemy queue, plane and bombs, background) lives in the
//! submodules and mutates the copy in place.

mod background;
mod enemy;
mod plane;

pub use plane::BombStep;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameRules;
use crate::entities::{
    Background, Bomb, EnemyQueue, GameState, GameStatus, Plane, Scoreboard, Tank,
};
use crate::tuning::BLAST_REACH;

// ── Input port ────────────────────────────────────────────────────────────────

/// What a host input system needs to drive the game.  Both calls are plain
/// state writes; nothing happens until the next tick.
pub trait InputPort {
    /// Latest absolute pointer X (0 = left edge of the viewport).
    fn pointer_moved(&mut self, x: i32);
    /// A discrete "drop" action.
    fn clicked(&mut self);
}

impl InputPort for Plane {
    fn pointer_moved(&mut self, x: i32) {
        self.on_pointer_move(x);
    }

    fn clicked(&mut self) {
        self.on_click();
    }
}

impl InputPort for GameState {
    fn pointer_moved(&mut self, x: i32) {
        self.plane.pointer_moved(x);
    }

    fn clicked(&mut self) {
        self.plane.clicked();
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state.  `slide_count` is however many background
/// slides the host managed to load.
pub fn init_state(rules: &GameRules, slide_count: usize, rng: &mut impl Rng) -> GameState {
    let enemies = match rules.first_spawn_delay_secs {
        Some(seconds) => EnemyQueue::with_spawn_delay(seconds),
        None => EnemyQueue::new(rng),
    };
    GameState {
        background: Background::new(slide_count, rules.slide_rate),
        enemies,
        plane: Plane::default(),
        scoreboard: Scoreboard::new(rules.max_health),
        status: GameStatus::Running,
        frame: 0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn pointer_moved(state: &GameState, x: i32) -> GameState {
    let mut next = state.clone();
    next.pointer_moved(x);
    next
}

pub fn click(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.clicked();
    next
}

// ── Collision & scoring ──────────────────────────────────────────────────────

/// Whether a blast reaches a tank: truncated distance ≤ radius × 1.25,
/// boundary inclusive.
pub fn blast_reaches(tank: &Tank, bomb: &Bomb) -> bool {
    tank.distance_to(bomb.screen_x(), bomb.screen_y()) <= f64::from(bomb.radius) * BLAST_REACH
}

/// Mark every unhit tank inside the head bomb's blast; one point each.
fn check_explosion(plane: &Plane, enemies: &mut EnemyQueue, scoreboard: &mut Scoreboard) {
    let Some(blast) = plane.explosion() else {
        return;
    };
    for tank in enemies.tanks.iter_mut().filter(|t| !t.hit) {
        if blast_reaches(tank, blast) {
            tank.hit = true;
            scoreboard.add_score();
            debug!(x = tank.x, y = tank.y, radius = blast.radius, "enemy hit");
        }
    }
}

fn check_miss(enemies: &mut EnemyQueue, scoreboard: &mut Scoreboard) {
    if enemies.check_missed() {
        scoreboard.add_missed();
    }
}

// ── Per-frame tick (pure apart from the injected RNG) ─────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
///
/// A lost game is terminal: ticking it returns an unchanged copy.
pub fn tick(state: &GameState, rng: &mut impl Rng) -> GameState {
    if state.status == GameStatus::Lost {
        return state.clone();
    }

    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Entities ──────────────────────────────────────────────────────────
    next.background.update();
    next.enemies.update(rng);
    next.plane.update();

    // ── 2. Blast ↔ tanks ─────────────────────────────────────────────────────
    check_explosion(&next.plane, &mut next.enemies, &mut next.scoreboard);

    // ── 3. Tanks past the bottom edge ────────────────────────────────────────
    check_miss(&mut next.enemies, &mut next.scoreboard);

    // ── 4. Loss ──────────────────────────────────────────────────────────────
    if next.scoreboard.has_lost() {
        next.status = GameStatus::Lost;
        info!(
            frame = next.frame,
            score = next.scoreboard.score,
            missed = next.scoreboard.missed,
            "game lost"
        );
    }

    next
}

//! All game entity types — pure data, plus the coordinate accessors the
//! controller and the renderer share.  Behaviour lives in `compute`.

use std::collections::VecDeque;

use crate::tuning::{
    BOMB_START_HEIGHT, BOMB_START_WIDTH, BOMB_START_Y, PLANE_ALTITUDE, PLANE_HEIGHT,
    TANK_START_HEIGHT, TANK_START_WIDTH, TANK_START_Y, VIEW_HEIGHT, VIEW_WIDTH,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal: the loop stops ticking and waits for the player to dismiss.
    Lost,
}

/// Which way the plane is banking, derived from its steering speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Center,
    Right,
}

// ── Enemy tanks ───────────────────────────────────────────────────────────────

/// A tank rolling toward the viewer.
///
/// Geometry is integral: every growth step truncates toward zero, so tanks
/// close to the centre column keep their `x` while they approach.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tank {
    /// Horizontal offset from the viewport centre.
    pub x: i32,
    /// Distance travelled below the horizon line (a third of the viewport).
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub hit: bool,
}

impl Tank {
    pub fn new(x: i32) -> Self {
        Tank {
            x,
            y: TANK_START_Y,
            width: TANK_START_WIDTH,
            height: TANK_START_HEIGHT,
            hit: false,
        }
    }

    /// Screen-space centre X.
    pub fn center_x(&self) -> i32 {
        self.x + VIEW_WIDTH / 2
    }

    /// Screen-space centre Y.
    pub fn center_y(&self) -> i32 {
        self.y + VIEW_HEIGHT / 3 + self.height / 2
    }

    /// Whole-pixel distance (truncated) from the tank centre to a screen point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = f64::from(self.center_x()) - x;
        let dy = f64::from(self.center_y()) - y;
        (dx * dx + dy * dy).sqrt().trunc()
    }
}

/// FIFO of tanks: spawn order is draw order and departure order.
#[derive(Clone, Debug, Default)]
pub struct EnemyQueue {
    pub tanks: VecDeque<Tank>,
    /// Ticks until the next tank may spawn.
    pub countdown: u32,
}

// ── Plane & bombs ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BombPhase {
    Falling,
    /// Blast radius growing toward `MAX_RADIUS`.
    Expanding,
    /// Blast radius shrinking; the bomb is dropped one tick after it hits 0.
    Contracting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bomb {
    /// Local X (0 = viewport centre), taken from the plane at drop time.
    pub x: f64,
    /// Local Y (0 = plane altitude).
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub radius: i32,
    pub phase: BombPhase,
}

impl Bomb {
    pub fn new(x: i32) -> Self {
        Bomb {
            x: f64::from(x),
            y: BOMB_START_Y,
            width: BOMB_START_WIDTH,
            height: BOMB_START_HEIGHT,
            radius: 0,
            phase: BombPhase::Falling,
        }
    }

    pub fn is_exploding(&self) -> bool {
        self.phase != BombPhase::Falling
    }

    /// Screen-space X of the bomb (and of its blast).
    pub fn screen_x(&self) -> f64 {
        self.x + f64::from(VIEW_WIDTH / 2)
    }

    /// Screen-space Y of the bomb's lower tip (and of its blast centre).
    pub fn screen_y(&self) -> f64 {
        self.y + f64::from(PLANE_HEIGHT / 2 + PLANE_ALTITUDE) + self.height
    }
}

#[derive(Clone, Debug)]
pub struct Plane {
    /// Horizontal offset from the viewport centre.
    pub pos: i32,
    /// Latest absolute pointer X (0 = left edge).
    pub pointer_x: i32,
    pub facing: Facing,
    pub bombs: VecDeque<Bomb>,
    /// Ticks until another bomb may be dropped.
    pub cooldown: u32,
    /// Set by a click, consumed by the next update.
    pub drop_requested: bool,
}

impl Default for Plane {
    fn default() -> Self {
        Plane {
            pos: 0,
            pointer_x: VIEW_WIDTH / 2,
            facing: Facing::Center,
            bombs: VecDeque::new(),
            cooldown: 0,
            drop_requested: false,
        }
    }
}

// ── Background ────────────────────────────────────────────────────────────────

/// Cosmetic slideshow state.  Knows how many slides exist, not what they are.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Background {
    pub slide_count: usize,
    pub current: usize,
    /// Ticks each slide stays up.
    pub rate: u32,
    /// Ticks the current slide has been shown.
    pub shown_for: u32,
}

// ── Scoreboard ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    pub missed: u32,
    pub score: u32,
    pub max_health: u32,
}

impl Scoreboard {
    pub fn new(max_health: u32) -> Self {
        Scoreboard {
            missed: 0,
            score: 0,
            max_health,
        }
    }

    pub fn add_missed(&mut self) {
        self.missed += 1;
    }

    pub fn add_score(&mut self) {
        self.score += 1;
    }

    /// The game is lost once misses exceed the number of lives.
    pub fn has_lost(&self) -> bool {
        self.missed > self.max_health
    }

    pub fn lives_left(&self) -> u32 {
        self.max_health.saturating_sub(self.missed)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state.  Sibling components, no cross-ownership; cloneable
/// so the tick function can return a fresh copy.
#[derive(Clone, Debug)]
pub struct GameState {
    pub background: Background,
    pub enemies: EnemyQueue,
    pub plane: Plane,
    pub scoreboard: Scoreboard,
    pub status: GameStatus,
    pub frame: u64,
}

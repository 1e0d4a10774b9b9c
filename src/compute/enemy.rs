//! Enemy queue behaviour: spawning, approach, and departure bookkeeping.

use rand::Rng;
use tracing::{debug, info};

use crate::entities::{EnemyQueue, Tank};
use crate::tuning::{
    seconds_to_ticks, FIRST_SPAWN_JITTER_SECS, FIRST_SPAWN_MIN_SECS, FRAME_INTERVAL_MS,
    RESPAWN_JITTER_SECS, RESPAWN_MIN_SECS, TANK_SIZE_GROWTH, TANK_SPAWN_SPREAD,
    TANK_X_GROWTH, TANK_Y_GROWTH, VIEW_HEIGHT,
};

/// `min_secs` worth of ticks plus a uniform jitter of up to `jitter_secs`.
fn random_countdown(rng: &mut impl Rng, min_secs: u32, jitter_secs: u32) -> u32 {
    let jitter = rng.gen::<f64>() * f64::from(jitter_secs * 1000) / f64::from(FRAME_INTERVAL_MS);
    jitter as u32 + seconds_to_ticks(min_secs)
}

/// Multiply and truncate toward zero.
fn grow(value: i32, factor: f64) -> i32 {
    (f64::from(value) * factor) as i32
}

impl Tank {
    /// A tank on the horizon at a random column around the centre.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        let x = (rng.gen::<f64>() - 0.5) * TANK_SPAWN_SPREAD;
        Tank::new(x as i32)
    }
}

impl EnemyQueue {
    /// Empty queue whose first tank arrives after a random 5–8 s.
    pub fn new(rng: &mut impl Rng) -> Self {
        EnemyQueue {
            tanks: Default::default(),
            countdown: random_countdown(rng, FIRST_SPAWN_MIN_SECS, FIRST_SPAWN_JITTER_SECS),
        }
    }

    /// Empty queue whose first tank arrives after exactly `seconds`.
    pub fn with_spawn_delay(seconds: u32) -> Self {
        EnemyQueue {
            tanks: Default::default(),
            countdown: seconds_to_ticks(seconds),
        }
    }

    /// Spawn a tank if the countdown has run out, then re-arm it for 2–3 s.
    pub fn try_spawn(&mut self, rng: &mut impl Rng) {
        if self.countdown != 0 {
            return;
        }
        let tank = Tank::spawn(rng);
        debug!(x = tank.x, "tank spawned");
        self.tanks.push_back(tank);
        self.countdown = random_countdown(rng, RESPAWN_MIN_SECS, RESPAWN_JITTER_SECS);
    }

    /// Bring every tank one step closer to the viewer.
    pub fn advance(&mut self) {
        for tank in &mut self.tanks {
            tank.x = grow(tank.x, TANK_X_GROWTH);
            tank.y = grow(tank.y, TANK_Y_GROWTH);
            tank.width = grow(tank.width, TANK_SIZE_GROWTH);
            tank.height = grow(tank.height, TANK_SIZE_GROWTH);
        }
    }

    /// Retire the head tank once it has rolled past the bottom edge.
    ///
    /// Returns `true` only when the retired tank was never hit.  A hit tank
    /// leaves silently; an empty queue or an on-screen head is a no-op.
    pub fn check_missed(&mut self) -> bool {
        match self.tanks.front() {
            Some(head) if head.y > VIEW_HEIGHT => {}
            _ => return false,
        }
        match self.tanks.pop_front() {
            Some(tank) if !tank.hit => {
                info!(x = tank.x, "enemy missed");
                true
            }
            _ => false,
        }
    }

    pub fn countdown(&mut self) {
        self.countdown = self.countdown.saturating_sub(1);
    }

    /// One tick: advance, maybe spawn, count down.
    pub fn update(&mut self, rng: &mut impl Rng) {
        self.advance();
        self.try_spawn(rng);
        self.countdown();
    }

    pub fn len(&self) -> usize {
        self.tanks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tanks.is_empty()
    }
}

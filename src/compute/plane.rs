//! Plane steering, bomb drops, and the bomb falling/exploding state machine.

use tracing::debug;

use crate::entities::{Bomb, BombPhase, Facing, Plane};
use crate::tuning::{
    BLAST_DRIFT_X, BLAST_DRIFT_Y, BOMB_DETONATION_Y, BOMB_FALL, BOMB_SHRINK,
    DROP_COOLDOWN_TICKS, FACING_DEAD_ZONE, MAX_RADIUS, RADIUS_STEP, STEER_DIVISOR,
    VIEW_WIDTH,
};

/// Outcome of one bomb update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BombStep {
    Live,
    /// Explosion finished; the owner should drop the bomb.
    Spent,
}

impl Bomb {
    /// Fall until the detonation line, then drive the blast radius up to
    /// `MAX_RADIUS` and back down to zero.
    pub fn update(&mut self) -> BombStep {
        if self.phase == BombPhase::Falling && self.y <= BOMB_DETONATION_Y {
            self.width *= BOMB_SHRINK;
            self.height *= BOMB_SHRINK;
            self.y *= BOMB_FALL;
            return BombStep::Live;
        }

        self.x *= BLAST_DRIFT_X;
        self.y *= BLAST_DRIFT_Y;
        self.explode()
    }

    fn explode(&mut self) -> BombStep {
        if self.phase == BombPhase::Falling {
            self.phase = BombPhase::Expanding;
            self.radius = 0;
        }

        match self.phase {
            BombPhase::Expanding => {
                self.radius += RADIUS_STEP;
                if self.radius >= MAX_RADIUS {
                    self.radius = MAX_RADIUS;
                    self.phase = BombPhase::Contracting;
                }
                BombStep::Live
            }
            BombPhase::Contracting if self.radius > 0 => {
                self.radius = (self.radius - RADIUS_STEP).max(0);
                BombStep::Live
            }
            _ => BombStep::Spent,
        }
    }
}

impl Plane {
    /// Record the latest absolute pointer X; steering uses it next tick.
    /// Positions outside the viewport pin to its nearest edge.
    pub fn on_pointer_move(&mut self, x: i32) {
        self.pointer_x = x.clamp(0, VIEW_WIDTH);
    }

    /// Request a drop.  Honoured on the next update only if the cooldown
    /// has expired by then.
    pub fn on_click(&mut self) {
        self.drop_requested = true;
    }

    /// Per-tick displacement: proportional to the pointer's offset from the
    /// plane, truncated toward zero.
    pub fn steering_speed(&self) -> i32 {
        (self.pointer_x - self.pos - VIEW_WIDTH / 2) / STEER_DIVISOR
    }

    fn steer(&mut self) {
        let speed = self.steering_speed();
        self.pos += speed;
        self.facing = if speed > FACING_DEAD_ZONE {
            Facing::Right
        } else if speed < -FACING_DEAD_ZONE {
            Facing::Left
        } else {
            Facing::Center
        };
    }

    fn drop_bomb(&mut self) {
        self.bombs.push_back(Bomb::new(self.pos));
        self.cooldown = DROP_COOLDOWN_TICKS;
        debug!(pos = self.pos, "bomb dropped");
    }

    /// Consume a pending click, steer, update every bomb, count down.
    pub fn update(&mut self) {
        if std::mem::take(&mut self.drop_requested) && self.cooldown == 0 {
            self.drop_bomb();
        }

        self.steer();
        self.bombs.retain_mut(|bomb| bomb.update() == BombStep::Live);
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// The bomb at the head of the queue, if it is exploding.  Only this one
    /// is tested against tanks.
    pub fn explosion(&self) -> Option<&Bomb> {
        self.bombs.front().filter(|bomb| bomb.is_exploding())
    }
}

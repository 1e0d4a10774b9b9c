use std::collections::VecDeque;

use airplane::compute::{BombStep, InputPort};
use airplane::entities::*;
use airplane::tuning::{DROP_COOLDOWN_TICKS, MAX_RADIUS};

fn plane_pointing_at(x: i32) -> Plane {
    let mut p = Plane::default();
    p.on_pointer_move(x);
    p
}

fn exploding(radius: i32) -> Bomb {
    Bomb {
        radius,
        phase: BombPhase::Expanding,
        ..Bomb::new(0)
    }
}

// ── steering ──────────────────────────────────────────────────────────────────

#[test]
fn default_plane_is_centred_and_idle() {
    let p = Plane::default();
    assert_eq!(p.pos, 0);
    assert_eq!(p.pointer_x, 400);
    assert_eq!(p.facing, Facing::Center);
    assert_eq!(p.cooldown, 0);
    assert!(p.bombs.is_empty());
    assert_eq!(p.steering_speed(), 0);
}

#[test]
fn pointer_move_alone_does_not_move_the_plane() {
    let p = plane_pointing_at(700);
    assert_eq!(p.pos, 0);
    assert_eq!(p.pointer_x, 700);
}

#[test]
fn steering_is_proportional_to_pointer_offset() {
    let mut p = plane_pointing_at(600);
    p.update();
    assert_eq!(p.pos, 20);
    assert_eq!(p.facing, Facing::Right);
    p.update();
    assert_eq!(p.pos, 38); // (600 - 20 - 400) / 10 = 18
}

#[test]
fn steering_left_faces_left() {
    let mut p = plane_pointing_at(200);
    p.update();
    assert_eq!(p.pos, -20);
    assert_eq!(p.facing, Facing::Left);
}

#[test]
fn small_speeds_keep_facing_forward() {
    let mut p = plane_pointing_at(455); // speed 5
    p.update();
    assert_eq!(p.pos, 5);
    assert_eq!(p.facing, Facing::Center);

    let mut p = plane_pointing_at(460); // speed 6
    p.update();
    assert_eq!(p.facing, Facing::Right);

    let mut p = plane_pointing_at(345); // speed -5
    p.update();
    assert_eq!(p.facing, Facing::Center);
}

#[test]
fn steering_truncates_toward_zero() {
    let mut p = plane_pointing_at(391); // -9 / 10 = 0
    p.update();
    assert_eq!(p.pos, 0);

    let mut p = plane_pointing_at(409);
    p.update();
    assert_eq!(p.pos, 0);
}

#[test]
fn plane_settles_under_the_pointer() {
    let mut p = plane_pointing_at(700);
    for _ in 0..100 {
        p.update();
    }
    assert!((291..=300).contains(&p.pos), "pos = {}", p.pos);
    assert_eq!(p.facing, Facing::Center);
}

#[test]
fn pointer_outside_the_viewport_pins_to_the_edge() {
    let mut p = plane_pointing_at(i32::MIN);
    assert_eq!(p.pointer_x, 0);
    p.update();
    assert_eq!(p.pos, -40);
    assert_eq!(p.facing, Facing::Left);

    let mut p = plane_pointing_at(i32::MAX);
    assert_eq!(p.pointer_x, 800);
    for _ in 0..200 {
        p.update();
    }
    assert!((391..=400).contains(&p.pos), "pos = {}", p.pos);
}

// ── dropping ──────────────────────────────────────────────────────────────────

#[test]
fn click_drops_on_next_update_at_current_position() {
    let mut p = Plane::default();
    p.pos = -50;
    p.on_pointer_move(350); // keeps speed at 0
    p.on_click();
    assert!(p.bombs.is_empty());

    p.update();
    assert_eq!(p.bombs.len(), 1);
    assert_eq!(p.bombs[0].x, -50.0);
    assert!(!p.drop_requested);
    assert_eq!(p.cooldown, 23);
}

#[test]
fn click_during_cooldown_is_dropped_silently() {
    let mut p = Plane::default();
    p.on_click();
    p.update();
    p.on_click();
    p.update();
    assert_eq!(p.bombs.len(), 1);
    assert!(!p.drop_requested);
}

#[test]
fn drop_allowed_once_cooldown_runs_out() {
    let mut p = Plane::default();
    p.cooldown = 1;
    p.on_click();
    p.update();
    assert!(p.bombs.is_empty());
    assert_eq!(p.cooldown, 0);

    p.on_click();
    p.update();
    assert_eq!(p.bombs.len(), 1);
}

#[test]
fn one_bomb_per_second_while_clicking_every_tick() {
    let mut p = Plane::default();
    let mut drop_ticks = Vec::new();
    for t in 1..=60 {
        p.on_click();
        p.update();
        if p.cooldown == DROP_COOLDOWN_TICKS - 1 {
            drop_ticks.push(t);
        }
    }
    assert_eq!(drop_ticks, [1, 25, 49]);
}

#[test]
fn plane_implements_input_port() {
    let mut p = Plane::default();
    p.pointer_moved(10);
    p.clicked();
    assert_eq!(p.pointer_x, 10);
    assert!(p.drop_requested);
}

// ── bomb lifecycle ────────────────────────────────────────────────────────────

#[test]
fn new_bomb_starts_falling_below_the_plane() {
    let b = Bomb::new(0);
    assert_eq!(b.phase, BombPhase::Falling);
    assert_eq!(b.radius, 0);
    assert!(!b.is_exploding());
    assert_eq!(b.screen_x(), 400.0);
    assert_eq!(b.screen_y(), 137.0); // 10 + 37 + 75 + 15
}

#[test]
fn falling_bomb_shrinks_and_accelerates() {
    let mut b = Bomb::new(0);
    assert_eq!(b.update(), BombStep::Live);
    assert!((b.y - 12.0).abs() < 1e-9);
    assert!((b.width - 9.5).abs() < 1e-9);
    assert!((b.height - 14.25).abs() < 1e-9);
    assert_eq!(b.phase, BombPhase::Falling);
}

#[test]
fn bomb_runs_its_whole_lifecycle_in_24_updates() {
    let mut b = Bomb::new(0);
    let mut phases = Vec::new();
    let mut radii = Vec::new();
    let mut steps = 0;

    while b.update() == BombStep::Live {
        steps += 1;
        phases.push(b.phase);
        radii.push(b.radius);
        assert!((0..=MAX_RADIUS).contains(&b.radius));
        assert!(steps < 100, "bomb never finished");
    }

    assert_eq!(steps + 1, 24);
    assert!(phases[..15].iter().all(|p| *p == BombPhase::Falling));
    assert_eq!(radii[15..], [10, 20, 30, 40, 30, 20, 10, 0]);

    let transitions = phases
        .windows(2)
        .filter(|w| w[0] == BombPhase::Falling && w[1] != BombPhase::Falling)
        .count();
    assert_eq!(transitions, 1);
    assert!(phases[15..].iter().all(|p| *p != BombPhase::Falling));
}

#[test]
fn blast_drifts_outward_and_down() {
    let mut b = Bomb {
        y: 200.0,
        ..Bomb::new(100)
    };
    b.update();
    assert!(b.is_exploding());
    assert!((b.x - 102.0).abs() < 1e-9);
    assert!((b.y - 206.0).abs() < 1e-9);
}

#[test]
fn spent_bomb_is_removed_from_the_plane() {
    let mut p = Plane::default();
    p.bombs.push_back(Bomb {
        radius: 0,
        phase: BombPhase::Contracting,
        y: 200.0,
        ..Bomb::new(0)
    });
    p.update();
    assert!(p.bombs.is_empty());
}

#[test]
fn dropped_bomb_is_gone_after_its_lifetime() {
    let mut p = Plane::default();
    p.on_click();
    for _ in 0..23 {
        p.update();
    }
    assert_eq!(p.bombs.len(), 1);
    assert_eq!(p.bombs[0].radius, 0);
    p.update();
    assert!(p.bombs.is_empty());
}

// ── explosion query ───────────────────────────────────────────────────────────

#[test]
fn no_explosion_without_bombs() {
    assert!(Plane::default().explosion().is_none());
}

#[test]
fn explosion_is_the_exploding_head() {
    let mut p = Plane::default();
    p.bombs = VecDeque::from(vec![exploding(20), Bomb::new(0)]);
    assert_eq!(p.explosion().map(|b| b.radius), Some(20));
}

#[test]
fn explosion_ignores_bombs_behind_a_falling_head() {
    let mut p = Plane::default();
    p.bombs = VecDeque::from(vec![Bomb::new(0), exploding(20)]);
    assert!(p.explosion().is_none());
}

use space_shooter::entities::*;
use space_shooter::movement::*;
use space_shooter::pool::Pool;

use rand::rngs::StdRng;
use rand::SeedableRng;

const PF: Playfield = Playfield::DEFAULT;

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn projectile_moves_up_by_its_speed() {
    let mut pool = Pool::new();
    let id = pool.insert(Projectile::fire(WeaponMode::Standard, 100.0, 300.0));
    let charged = pool.insert(Projectile::fire(WeaponMode::Charged, 200.0, 300.0));
    advance_projectiles(&mut pool);
    assert_eq!(pool.get(id).map(|p| p.y), Some(290.0));
    assert_eq!(pool.get(charged).map(|p| p.y), Some(285.0));
}

#[test]
fn projectile_retired_once_fully_above_top() {
    let mut pool = Pool::new();
    // 14 → 4: bottom edge at 9, still visible
    let kept = pool.insert(Projectile::fire(WeaponMode::Standard, 100.0, 14.0));
    // 4 → -6: bottom edge at -1, gone
    let gone = pool.insert(Projectile::fire(WeaponMode::Standard, 200.0, 4.0));
    advance_projectiles(&mut pool);
    assert!(pool.get(kept).is_some());
    assert!(pool.get(gone).is_none());
}

// ── Obstacles & pickups ───────────────────────────────────────────────────────

#[test]
fn obstacle_falls_by_own_plus_player_speed() {
    let mut pool = Pool::new();
    let id = pool.insert(Obstacle::new(SizeClass::Medium, 100.0, 50.0, 1.5));
    advance_obstacles(&mut pool, 2.5, PF);
    assert_eq!(pool.get(id).map(|o| o.y), Some(54.0));
}

#[test]
fn obstacle_retired_once_top_passes_bottom_edge() {
    let mut pool = Pool::new();
    // top edge = y - OBSTACLE_SIZE / 2, whatever the size class
    let kept = pool.insert(Obstacle::new(SizeClass::Small, 100.0, 628.0, 2.0)); // top → 600
    let gone = pool.insert(Obstacle::new(SizeClass::Large, 200.0, 629.0, 2.0)); // top → 601
    advance_obstacles(&mut pool, 0.0, PF);
    assert!(pool.get(kept).is_some());
    assert!(pool.get(gone).is_none());
}

#[test]
fn pickup_falls_and_exits() {
    let mut pool = Pool::new();
    let falling = pool.insert(Pickup::new(100.0, 10.0));
    let exiting = pool.insert(Pickup::new(200.0, 612.0));
    advance_pickups(&mut pool, 2.5, PF);
    assert_eq!(pool.get(falling).map(|p| p.y), Some(14.5));
    assert!(pool.get(exiting).is_none());
}

#[test]
fn level_speed_bonus_hits_every_obstacle() {
    let mut pool = Pool::new();
    let a = pool.insert(Obstacle::new(SizeClass::Small, 100.0, 50.0, 1.0));
    let b = pool.insert(Obstacle::new(SizeClass::Large, 300.0, 80.0, 1.25));
    speed_up_obstacles(&mut pool, 0.5);
    assert_eq!(pool.get(a).map(|o| o.speed), Some(1.5));
    assert_eq!(pool.get(b).map(|o| o.speed), Some(1.75));
}

// ── Effects ───────────────────────────────────────────────────────────────────

#[test]
fn effect_advances_every_five_ticks_and_retires_after_last_frame() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = Pool::new();
    let id = pool.insert(VisualEffect::burst(&mut rng, 50.0, 50.0));

    for _ in 0..4 {
        advance_effects(&mut pool);
    }
    assert_eq!(pool.get(id).map(|e| e.frame), Some(0));
    advance_effects(&mut pool);
    assert_eq!(pool.get(id).map(|e| e.frame), Some(1));

    // 25 ticks in total exhaust five frames
    for _ in 5..24 {
        advance_effects(&mut pool);
    }
    assert_eq!(pool.get(id).map(|e| e.frame), Some(4));
    advance_effects(&mut pool);
    assert!(pool.is_empty());
}

// ── Background ────────────────────────────────────────────────────────────────

#[test]
fn background_scrolls_and_wraps() {
    assert_eq!(scroll_background(10.0, 2.5, PF), 12.5);
    assert_eq!(scroll_background(598.0, 2.5, PF), 0.0);
}

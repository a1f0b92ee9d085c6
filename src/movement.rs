/// Per-tick position updates and edge retirement.
///
/// Everything here runs before collision resolution, so an entity that left
/// the playfield this tick can no longer be hit or collected.

use crate::entities::{
    Obstacle, Pickup, Playfield, Projectile, VisualEffect, EFFECT_FRAME_TICKS, OBSTACLE_SIZE,
    PICKUP_SIZE, PROJECTILE_HEIGHT,
};
use crate::pool::Pool;

/// Move projectiles up; retire those whose bottom edge passed the top.
pub fn advance_projectiles(projectiles: &mut Pool<Projectile>) {
    projectiles.retain_mut(|p| {
        p.y -= p.speed;
        p.y + PROJECTILE_HEIGHT / 2.0 >= 0.0
    });
}

/// Move obstacles down by their own speed plus the player's scroll speed.
pub fn advance_obstacles(obstacles: &mut Pool<Obstacle>, player_speed: f32, playfield: Playfield) {
    obstacles.retain_mut(|o| {
        o.y += o.speed + player_speed;
        o.y - OBSTACLE_SIZE / 2.0 <= playfield.height
    });
}

pub fn advance_pickups(pickups: &mut Pool<Pickup>, player_speed: f32, playfield: Playfield) {
    pickups.retain_mut(|p| {
        p.y += p.speed + player_speed;
        p.y - PICKUP_SIZE / 2.0 <= playfield.height
    });
}

/// Step each effect's animation; retire it once its last frame has shown.
pub fn advance_effects(effects: &mut Pool<VisualEffect>) {
    effects.retain_mut(|e| {
        e.timer += 1;
        if e.timer % EFFECT_FRAME_TICKS == 0 {
            e.frame += 1;
        }
        e.frame < e.frames.len()
    });
}

/// Scroll the star field by the player's speed, wrapping at the playfield height.
pub fn scroll_background(offset: f32, player_speed: f32, playfield: Playfield) -> f32 {
    let next = offset + player_speed;
    if next >= playfield.height {
        0.0
    } else {
        next
    }
}

/// Apply a level-up speed bonus to every live obstacle.
pub fn speed_up_obstacles(obstacles: &mut Pool<Obstacle>, delta: f32) {
    for o in obstacles.values_mut() {
        o.speed += delta;
    }
}

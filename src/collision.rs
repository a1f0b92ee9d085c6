/// Bounding-box collision passes and their damage/reward rules.
///
/// The three passes touch disjoint pairs of entity kinds.  Each one is a
/// plain O(n·m) scan: with at most a couple of dozen obstacles on screen
/// there is nothing to gain from a broad phase.

use rand::Rng;

use crate::entities::{
    Obstacle, Pickup, Player, Projectile, SoundCue, VisualEffect, OBSTACLE_SIZE, PICKUP_SIZE,
    PLAYER_SIZE, PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
};
use crate::pool::{Pool, SlotId};
use crate::progression::ProgressionState;

/// Health the player loses per obstacle collision.
pub const COLLISION_DAMAGE: u32 = 20;

/// Axis-aligned box in playfield pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Aabb {
    pub fn centered(x: f32, y: f32, width: f32, height: f32) -> Self {
        Aabb {
            left: x - width / 2.0,
            top: y - height / 2.0,
            right: x + width / 2.0,
            bottom: y + height / 2.0,
        }
    }

    /// Boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

pub trait Bounded {
    fn bounds(&self) -> Aabb;
}

impl Bounded for Player {
    fn bounds(&self) -> Aabb {
        Aabb::centered(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

impl Bounded for Projectile {
    fn bounds(&self) -> Aabb {
        Aabb::centered(self.x, self.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

impl Bounded for Obstacle {
    fn bounds(&self) -> Aabb {
        Aabb::centered(self.x, self.y, OBSTACLE_SIZE, OBSTACLE_SIZE)
    }
}

impl Bounded for Pickup {
    fn bounds(&self) -> Aabb {
        Aabb::centered(self.x, self.y, PICKUP_SIZE, PICKUP_SIZE)
    }
}

/// Projectiles against obstacles.
///
/// Overlaps are all found first, against the obstacles alive at the start of
/// the pass, and every projectile that touched something is used up.  Damage
/// is then applied in pool order.  An obstacle brought to zero health is
/// removed on the spot and leaves an explosion behind; later hits on it in
/// the same pass are void, so a kill scores once.
pub fn resolve_projectile_hits(
    projectiles: &mut Pool<Projectile>,
    obstacles: &mut Pool<Obstacle>,
    effects: &mut Pool<VisualEffect>,
    progression: &mut ProgressionState,
    rng: &mut impl Rng,
    cues: &mut Vec<SoundCue>,
) {
    let hits: Vec<(SlotId, u32, Vec<SlotId>)> = projectiles
        .iter()
        .filter_map(|(pid, p)| {
            let bounds = p.bounds();
            let targets: Vec<_> = obstacles
                .iter()
                .filter(|(_, o)| o.bounds().overlaps(&bounds))
                .map(|(id, _)| id)
                .collect();
            (!targets.is_empty()).then_some((pid, p.damage, targets))
        })
        .collect();

    for (pid, damage, targets) in hits {
        projectiles.retire(pid);

        for oid in targets {
            let destroyed = match obstacles.get_mut(oid) {
                Some(o) => {
                    o.health -= damage as i32;
                    o.is_destroyed()
                }
                None => false,
            };
            if !destroyed {
                continue;
            }
            if let Some(o) = obstacles.retire(oid) {
                log::debug!("{:?} obstacle destroyed at ({:.0}, {:.0})", o.size, o.x, o.y);
                effects.insert(VisualEffect::burst(rng, o.x, o.y));
                progression.record_obstacle_destroyed();
                cues.push(SoundCue::Explosion);
            }
        }
    }
}

/// Collect every pickup the player touches.  Returns how many were collected.
pub fn resolve_pickups(
    player: &mut Player,
    pickups: &mut Pool<Pickup>,
    progression: &mut ProgressionState,
) -> u32 {
    let bounds = player.bounds();
    let mut collected = 0;
    pickups.retain_mut(|p| {
        if !p.bounds().overlaps(&bounds) {
            return true;
        }
        player.ammo += 1;
        progression.record_pickup_collected();
        collected += 1;
        false
    });
    if collected > 0 {
        log::debug!("collected {} pickup(s), ammo now {}", collected, player.ammo);
    }
    collected
}

/// Ram every obstacle the player touches.  Each one is removed and deals
/// `COLLISION_DAMAGE`; hits in the same tick stack.  Returns the hit count.
pub fn resolve_player_hits(player: &mut Player, obstacles: &mut Pool<Obstacle>) -> u32 {
    let bounds = player.bounds();
    let mut hits = 0;
    obstacles.retain_mut(|o| {
        if !o.bounds().overlaps(&bounds) {
            return true;
        }
        hits += 1;
        false
    });
    if hits > 0 {
        player.health = player.health.saturating_sub(hits * COLLISION_DAMAGE);
        log::debug!("player hit by {} obstacle(s), health now {}", hits, player.health);
    }
    hits
}

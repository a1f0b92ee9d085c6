/// Probabilistic obstacle and pickup generation under the progression caps.

use rand::Rng;

use crate::entities::{Obstacle, Pickup, Playfield};
use crate::pool::Pool;
use crate::progression::ProgressionState;

/// Chance per tick of an obstacle appearing while under the cap.
pub const OBSTACLE_SPAWN_CHANCE: f64 = 0.02;
/// Chance per tick of a pickup appearing while under the cap.
pub const PICKUP_SPAWN_CHANCE: f64 = 0.003;

pub fn maybe_spawn_obstacle(
    current: usize,
    capacity: usize,
    rng: &mut impl Rng,
    playfield: Playfield,
) -> Option<Obstacle> {
    if current < capacity && rng.gen_bool(OBSTACLE_SPAWN_CHANCE) {
        Some(Obstacle::spawn(rng, playfield))
    } else {
        None
    }
}

pub fn maybe_spawn_pickup(
    current: usize,
    capacity: usize,
    rng: &mut impl Rng,
    playfield: Playfield,
) -> Option<Pickup> {
    if current < capacity && rng.gen_bool(PICKUP_SPAWN_CHANCE) {
        Some(Pickup::spawn(rng, playfield))
    } else {
        None
    }
}

/// One spawn attempt per kind.  A miss simply waits for the next tick.
pub fn spawn(
    obstacles: &mut Pool<Obstacle>,
    pickups: &mut Pool<Pickup>,
    progression: &ProgressionState,
    rng: &mut impl Rng,
    playfield: Playfield,
) {
    if let Some(obstacle) =
        maybe_spawn_obstacle(obstacles.len(), progression.obstacle_cap, rng, playfield)
    {
        log::debug!("spawned {:?} obstacle at x={:.0}", obstacle.size, obstacle.x);
        obstacles.insert(obstacle);
    }
    if let Some(pickup) = maybe_spawn_pickup(pickups.len(), progression.pickup_cap, rng, playfield)
    {
        log::debug!("spawned pickup at x={:.0}", pickup.x);
        pickups.insert(pickup);
    }
}

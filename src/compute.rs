/// Game-loop controller.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.  The
/// subsystems (`spawner`, `movement`, `collision`, `progression`) work on the
/// pieces of that new copy.

use rand::Rng;

use crate::collision;
use crate::entities::{
    GameState, GameStatus, Playfield, Player, Projectile, SoundCue, WeaponMode, PLAYER_SIZE,
    PLAYER_STEP,
};
use crate::movement;
use crate::pool::Pool;
use crate::progression::ProgressionState;
use crate::spawner;

/// Polled key state for one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Fire was pressed since the previous tick.
    pub fire: bool,
    /// Weapon selected since the previous tick, if any.
    pub select: Option<WeaponMode>,
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial session state.
pub fn init_state(playfield: Playfield) -> GameState {
    GameState {
        player: Player::new(playfield),
        projectiles: Pool::new(),
        obstacles: Pool::new(),
        pickups: Pool::new(),
        effects: Pool::new(),
        progression: ProgressionState::new(),
        status: GameStatus::Playing,
        frame: 0,
        playfield,
        background_offset: 0.0,
    }
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.x - PLAYER_SIZE / 2.0 > 0.0 {
        next.player.x -= PLAYER_STEP;
    }
    next
}

pub fn move_player_right(state: &GameState) -> GameState {
    let mut next = state.clone();
    if next.player.x + PLAYER_SIZE / 2.0 < state.playfield.width {
        next.player.x += PLAYER_STEP;
    }
    next
}

pub fn select_weapon(state: &GameState, weapon: WeaponMode) -> GameState {
    let mut next = state.clone();
    next.player.weapon = weapon;
    next
}

/// Fire the selected weapon from the nose of the ship.  A charged shot with
/// no ammo left is silently refused: no projectile and no cue.
pub fn player_fire(state: &GameState) -> (GameState, Option<SoundCue>) {
    let mut next = state.clone();
    let cue = fire_in_place(&mut next);
    (next, cue)
}

fn fire_in_place(state: &mut GameState) -> Option<SoundCue> {
    let weapon = state.player.weapon;
    if weapon == WeaponMode::Charged {
        if state.player.ammo == 0 {
            return None;
        }
        state.player.ammo -= 1;
        state.progression.record_charged_shot();
    }
    let (x, y) = (state.player.x, state.player.top());
    state.projectiles.insert(Projectile::fire(weapon, x, y));
    Some(SoundCue::Fire)
}

// ── Per-frame tick (nearly pure, RNG is injected) ───────────────────────────

/// Advance the simulation by one tick and report the sounds it triggered.
/// A session that is already over comes back unchanged.
pub fn tick(
    state: &GameState,
    input: &TickInput,
    rng: &mut impl Rng,
) -> (GameState, Vec<SoundCue>) {
    let mut cues = Vec::new();
    if state.status == GameStatus::GameOver {
        return (state.clone(), cues);
    }

    // ── 1. Weapon selection & firing ─────────────────────────────────────────
    let mut next = match input.select {
        Some(weapon) => select_weapon(state, weapon),
        None => state.clone(),
    };
    next.frame += 1;
    if input.fire {
        cues.extend(fire_in_place(&mut next));
    }

    // ── 2. Player movement ───────────────────────────────────────────────────
    if input.left {
        next = move_player_left(&next);
    }
    if input.right {
        next = move_player_right(&next);
    }

    // ── 3. Level check ───────────────────────────────────────────────────────
    if let Some(change) = next.progression.advance() {
        movement::speed_up_obstacles(&mut next.obstacles, change.speed_delta);
        next.player.speed += change.speed_delta;
    }

    // ── 4. Spawning ──────────────────────────────────────────────────────────
    let playfield = next.playfield;
    spawner::spawn(
        &mut next.obstacles,
        &mut next.pickups,
        &next.progression,
        rng,
        playfield,
    );

    // ── 5. Movement & edge retirement ────────────────────────────────────────
    let player_speed = next.player.speed;
    next.background_offset =
        movement::scroll_background(next.background_offset, player_speed, playfield);
    movement::advance_projectiles(&mut next.projectiles);
    movement::advance_obstacles(&mut next.obstacles, player_speed, playfield);
    movement::advance_pickups(&mut next.pickups, player_speed, playfield);
    movement::advance_effects(&mut next.effects);

    // ── 6. Collisions ────────────────────────────────────────────────────────
    collision::resolve_projectile_hits(
        &mut next.projectiles,
        &mut next.obstacles,
        &mut next.effects,
        &mut next.progression,
        rng,
        &mut cues,
    );
    collision::resolve_pickups(&mut next.player, &mut next.pickups, &mut next.progression);
    collision::resolve_player_hits(&mut next.player, &mut next.obstacles);

    // ── 7. Status ────────────────────────────────────────────────────────────
    if !next.player.is_alive() {
        next.progression.check_achievements();
        log::info!(
            "game over at tick {}: score {}, achievements {:?}",
            next.frame,
            next.progression.score,
            next.progression.achievements()
        );
        next.status = GameStatus::GameOver;
    }

    next.projectiles.recycle();
    next.obstacles.recycle();
    next.pickups.recycle();
    next.effects.recycle();

    (next, cues)
}

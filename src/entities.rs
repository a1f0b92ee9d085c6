/// All game entity types: pure data plus their spawn constructors.
///
/// Positions are entity centres in logical playfield pixels (origin at the
/// top-left corner, y grows downward).  The renderer scales them onto the
/// terminal grid.

use rand::Rng;

use crate::pool::Pool;
use crate::progression::ProgressionState;

// ── Playfield ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub const DEFAULT: Playfield = Playfield {
        width: 800.0,
        height: 600.0,
    };
}

impl Default for Playfield {
    fn default() -> Self {
        Playfield::DEFAULT
    }
}

/// Obstacles and pickups never spawn closer than this to a side edge.
pub const SPAWN_MARGIN: f32 = 50.0;

// ── Status & output cues ──────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Fire-and-forget sound triggers emitted by a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Fire,
    Explosion,
}

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: f32 = 50.0;
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_START_SPEED: f32 = 2.5;
/// Horizontal step per tick while a direction key is held.
pub const PLAYER_STEP: f32 = 5.0;
/// Charged shots available at session start.
pub const STARTING_AMMO: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeaponMode {
    Standard,
    Charged,
}

impl WeaponMode {
    pub fn damage(self) -> u32 {
        match self {
            WeaponMode::Standard => 10,
            WeaponMode::Charged => 25,
        }
    }

    /// Upward speed in pixels per tick.
    pub fn speed(self) -> f32 {
        match self {
            WeaponMode::Standard => 10.0,
            WeaponMode::Charged => 15.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub health: u32,
    /// Scroll speed; added to every falling object's own speed.
    pub speed: f32,
    pub weapon: WeaponMode,
    /// Charged shots left.
    pub ammo: u32,
}

impl Player {
    pub fn new(playfield: Playfield) -> Self {
        Player {
            x: playfield.width / 2.0,
            y: playfield.height - 80.0 + PLAYER_SIZE / 2.0,
            health: PLAYER_MAX_HEALTH,
            speed: PLAYER_START_SPEED,
            weapon: WeaponMode::Standard,
            ammo: STARTING_AMMO,
        }
    }

    pub fn top(&self) -> f32 {
        self.y - PLAYER_SIZE / 2.0
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

pub const PROJECTILE_WIDTH: f32 = 5.0;
pub const PROJECTILE_HEIGHT: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    /// Upward speed in pixels per tick.
    pub speed: f32,
    pub damage: u32,
    pub weapon: WeaponMode,
}

impl Projectile {
    pub fn fire(weapon: WeaponMode, x: f32, y: f32) -> Self {
        Projectile {
            x,
            y,
            speed: weapon.speed(),
            damage: weapon.damage(),
            weapon,
        }
    }
}

// ── Obstacles ─────────────────────────────────────────────────────────────────

/// Side of every obstacle's square hitbox, whatever its size class.
pub const OBSTACLE_SIZE: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    pub const ALL: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    /// Only decides how far above the top edge a new obstacle starts.
    pub fn radius(self) -> f32 {
        match self {
            SizeClass::Small => 20.0,
            SizeClass::Medium => 35.0,
            SizeClass::Large => 50.0,
        }
    }

    pub fn health(self) -> i32 {
        match self {
            SizeClass::Small => 20,
            SizeClass::Medium => 50,
            SizeClass::Large => 100,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    /// Own downward speed, before the player's scroll speed is added.
    pub speed: f32,
    pub size: SizeClass,
    /// Signed so an overkill hit can be observed below zero.
    pub health: i32,
}

impl Obstacle {
    pub fn new(size: SizeClass, x: f32, y: f32, speed: f32) -> Self {
        Obstacle {
            x,
            y,
            speed,
            size,
            health: size.health(),
        }
    }

    /// A random asteroid just above the visible top edge.
    pub fn spawn(rng: &mut impl Rng, playfield: Playfield) -> Self {
        let size = SizeClass::ALL[rng.gen_range(0..SizeClass::ALL.len())];
        let x = rng.gen_range(SPAWN_MARGIN..=playfield.width - SPAWN_MARGIN);
        let speed = rng.gen_range(1.0..2.0);
        Obstacle::new(size, x, -size.radius(), speed)
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0
    }
}

// ── Pickups ───────────────────────────────────────────────────────────────────

pub const PICKUP_SIZE: f32 = 30.0;
pub const PICKUP_SPEED: f32 = 2.0;

/// A falling treasure box.
#[derive(Clone, Debug)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
}

impl Pickup {
    pub fn new(x: f32, y: f32) -> Self {
        Pickup {
            x,
            y,
            speed: PICKUP_SPEED,
        }
    }

    pub fn spawn(rng: &mut impl Rng, playfield: Playfield) -> Self {
        let x = rng.gen_range(SPAWN_MARGIN..=playfield.width - SPAWN_MARGIN);
        Pickup::new(x, -PICKUP_SIZE)
    }
}

// ── Visual effects ────────────────────────────────────────────────────────────

pub const EFFECT_FRAME_COUNT: usize = 5;
/// Ticks each effect frame stays on screen.
pub const EFFECT_FRAME_TICKS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectTint {
    Red,
    Orange,
    Yellow,
}

/// Explosion left behind by a destroyed obstacle.  Cosmetic only.
#[derive(Clone, Debug)]
pub struct VisualEffect {
    pub x: f32,
    pub y: f32,
    pub frames: Vec<EffectTint>,
    pub frame: usize,
    pub timer: u32,
}

impl VisualEffect {
    pub fn burst(rng: &mut impl Rng, x: f32, y: f32) -> Self {
        const TINTS: [EffectTint; 3] = [EffectTint::Red, EffectTint::Orange, EffectTint::Yellow];
        let frames = (0..EFFECT_FRAME_COUNT)
            .map(|_| TINTS[rng.gen_range(0..TINTS.len())])
            .collect();
        VisualEffect {
            x,
            y,
            frames,
            frame: 0,
            timer: 0,
        }
    }

    pub fn current(&self) -> Option<EffectTint> {
        self.frames.get(self.frame).copied()
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire session.  Cloneable so the top-level update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub projectiles: Pool<Projectile>,
    pub obstacles: Pool<Obstacle>,
    pub pickups: Pool<Pickup>,
    pub effects: Pool<VisualEffect>,
    pub progression: ProgressionState,
    pub status: GameStatus,
    pub frame: u64,
    pub playfield: Playfield,
    /// Vertical scroll of the star field, in `[0, playfield.height)`.
    pub background_offset: f32,
}

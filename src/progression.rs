//! Score, level, difficulty caps and achievement bookkeeping.

/// Score needed per level: the player levels up once `score > level * LEVEL_THRESHOLD`.
pub const LEVEL_THRESHOLD: u32 = 100;
pub const STARTING_OBSTACLE_CAP: usize = 10;
pub const STARTING_PICKUP_CAP: usize = 3;
pub const OBSTACLE_CAP_STEP: usize = 3;
pub const PICKUP_CAP_STEP: usize = 1;
/// Added to the player's speed and every live obstacle's speed on level-up.
pub const SPEED_STEP: f32 = 0.5;

pub const SCORE_PER_OBSTACLE: u32 = 10;
pub const SCORE_PER_PICKUP: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Achievement {
    AsteroidDestroyer,
    TreasureHunter,
    LaserCommander,
}

impl Achievement {
    pub fn title(self) -> &'static str {
        match self {
            Achievement::AsteroidDestroyer => "Asteroid Destroyer",
            Achievement::TreasureHunter => "Treasure Hunter",
            Achievement::LaserCommander => "Laser Commander",
        }
    }
}

/// Result of a tick's level check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelChange {
    pub level: u32,
    /// Speed to add to the player and every live obstacle.
    pub speed_delta: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionState {
    pub score: u32,
    pub level: u32,
    pub obstacle_cap: usize,
    pub pickup_cap: usize,
    pub obstacles_destroyed: u32,
    pub pickups_collected: u32,
    pub charged_shots_fired: u32,
    unlocked: Vec<Achievement>,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressionState {
    pub fn new() -> Self {
        ProgressionState {
            score: 0,
            level: 1,
            obstacle_cap: STARTING_OBSTACLE_CAP,
            pickup_cap: STARTING_PICKUP_CAP,
            obstacles_destroyed: 0,
            pickups_collected: 0,
            charged_shots_fired: 0,
            unlocked: Vec::new(),
        }
    }

    /// Level up at most once.  Called once per tick, so a score jump across
    /// several thresholds takes several ticks to catch up.
    pub fn advance(&mut self) -> Option<LevelChange> {
        if self.score <= self.level * LEVEL_THRESHOLD {
            return None;
        }
        self.level += 1;
        self.obstacle_cap += OBSTACLE_CAP_STEP;
        self.pickup_cap += PICKUP_CAP_STEP;
        log::info!(
            "level {} reached at score {} (caps: {} obstacles, {} pickups)",
            self.level,
            self.score,
            self.obstacle_cap,
            self.pickup_cap
        );
        Some(LevelChange {
            level: self.level,
            speed_delta: SPEED_STEP,
        })
    }

    pub fn record_obstacle_destroyed(&mut self) {
        self.score += SCORE_PER_OBSTACLE;
        self.obstacles_destroyed += 1;
    }

    pub fn record_pickup_collected(&mut self) {
        self.score += SCORE_PER_PICKUP;
        self.pickups_collected += 1;
    }

    pub fn record_charged_shot(&mut self) {
        self.charged_shots_fired += 1;
    }

    /// Unlock every achievement whose threshold has been met.  Already
    /// unlocked ones are left alone.
    pub fn check_achievements(&mut self) -> &[Achievement] {
        let earned = [
            (self.obstacles_destroyed >= 50, Achievement::AsteroidDestroyer),
            (self.pickups_collected >= 10, Achievement::TreasureHunter),
            (self.charged_shots_fired >= 20, Achievement::LaserCommander),
        ];
        for (met, achievement) in earned {
            if met && !self.unlocked.contains(&achievement) {
                self.unlocked.push(achievement);
            }
        }
        &self.unlocked
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.unlocked
    }
}

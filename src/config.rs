use std::{env, path::PathBuf, time::Duration};

// Runtime constants read from the environment (not gameplay tuning).

pub const DEFAULT_TICK_RATE: u32 = 60;

/// Fixed simulation rate.  Zero or unparsable values fall back to the default.
pub fn tick_rate() -> u32 {
    parse_tick_rate(env::var("SPACE_SHOOTER_TICK_RATE").ok().as_deref())
}

pub fn tick_interval() -> Duration {
    Duration::from_secs(1) / tick_rate()
}

/// Seed for a reproducible session; `None` means seed from entropy.
pub fn rng_seed() -> Option<u64> {
    env::var("SPACE_SHOOTER_SEED")
        .ok()
        .and_then(|v| v.trim().parse().ok())
}

/// The terminal is taken over by the game, so logs go to a file.
pub fn log_path() -> PathBuf {
    env::var("SPACE_SHOOTER_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("space_shooter.log"))
}

pub fn muted() -> bool {
    parse_flag(env::var("SPACE_SHOOTER_MUTE").ok().as_deref())
}

fn parse_tick_rate(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|&rate| rate > 0)
        .unwrap_or(DEFAULT_TICK_RATE)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

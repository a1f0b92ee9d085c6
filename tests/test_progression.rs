use space_shooter::progression::*;

#[test]
fn starts_at_level_one() {
    let p = ProgressionState::new();
    assert_eq!(p.score, 0);
    assert_eq!(p.level, 1);
    assert_eq!(p.obstacle_cap, 10);
    assert_eq!(p.pickup_cap, 3);
    assert!(p.achievements().is_empty());
}

#[test]
fn no_level_up_at_exactly_the_threshold() {
    let mut p = ProgressionState::new();
    p.score = 100;
    assert_eq!(p.advance(), None);
    assert_eq!(p.level, 1);
}

#[test]
fn level_up_past_the_threshold() {
    let mut p = ProgressionState::new();
    p.score = 101;
    let change = p.advance();
    assert_eq!(
        change,
        Some(LevelChange {
            level: 2,
            speed_delta: 0.5
        })
    );
    assert_eq!(p.level, 2);
    assert_eq!(p.obstacle_cap, 13);
    assert_eq!(p.pickup_cap, 4);
    // next threshold is 200
    assert_eq!(p.advance(), None);
}

#[test]
fn only_one_level_per_call() {
    let mut p = ProgressionState::new();
    p.score = 1_000;
    assert!(p.advance().is_some());
    assert_eq!(p.level, 2);
    assert!(p.advance().is_some());
    assert_eq!(p.level, 3);
    assert_eq!(p.obstacle_cap, 16);
    assert_eq!(p.pickup_cap, 5);
}

#[test]
fn rewards_update_score_and_counters() {
    let mut p = ProgressionState::new();
    p.record_obstacle_destroyed();
    p.record_pickup_collected();
    p.record_charged_shot();
    assert_eq!(p.score, 20);
    assert_eq!(p.obstacles_destroyed, 1);
    assert_eq!(p.pickups_collected, 1);
    assert_eq!(p.charged_shots_fired, 1);
}

#[test]
fn nothing_unlocked_below_thresholds() {
    let mut p = ProgressionState::new();
    p.obstacles_destroyed = 49;
    p.pickups_collected = 9;
    p.charged_shots_fired = 19;
    assert!(p.check_achievements().is_empty());
}

#[test]
fn each_threshold_unlocks_its_achievement() {
    let mut p = ProgressionState::new();
    p.obstacles_destroyed = 50;
    p.pickups_collected = 10;
    p.charged_shots_fired = 20;
    assert_eq!(
        p.check_achievements(),
        &[
            Achievement::AsteroidDestroyer,
            Achievement::TreasureHunter,
            Achievement::LaserCommander
        ]
    );
}

#[test]
fn achievements_unlock_at_most_once() {
    let mut p = ProgressionState::new();
    p.pickups_collected = 12;
    p.check_achievements();
    p.check_achievements();
    assert_eq!(p.achievements(), &[Achievement::TreasureHunter]);
}

#[test]
fn achievement_titles() {
    assert_eq!(Achievement::AsteroidDestroyer.title(), "Asteroid Destroyer");
    assert_eq!(Achievement::TreasureHunter.title(), "Treasure Hunter");
    assert_eq!(Achievement::LaserCommander.title(), "Laser Commander");
}

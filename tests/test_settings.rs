use std::path::Path;

use alien_invasion::settings::*;
use alien_invasion::stats::GameStats;

// ── Loading ───────────────────────────────────────────────────────────────────

#[test]
fn defaults_are_valid() {
    assert!(Settings::default().validate().is_ok());
}

#[test]
fn empty_toml_gives_defaults() {
    assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
}

#[test]
fn partial_toml_overrides_only_named_values() {
    let s = Settings::from_toml("ship_limit = 5\nbg_color = [0, 0, 0]\nalien_speed = 2.5\n").unwrap();
    assert_eq!(s.ship_limit, 5);
    assert_eq!(s.bg_color, Color(0, 0, 0));
    assert_eq!(s.alien_speed, 2.5);
    assert_eq!(s.bullets_allowed, Settings::default().bullets_allowed);
    assert_eq!(s.alien_points, 50);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Settings::from_toml("ship_limit = \"lots\"").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn out_of_range_values_rejected() {
    let err = Settings::from_toml("speedup_scale = 1.0").unwrap_err();
    match err {
        SettingsError::OutOfRange { name, .. } => assert_eq!(name, "speedup_scale"),
        other => panic!("unexpected error: {}", other),
    }

    let err = Settings::from_toml("bullets_allowed = 0").unwrap_err();
    assert!(err.to_string().contains("bullets_allowed"));

    let err = Settings::from_toml("alien_width = -4.0").unwrap_err();
    assert!(err.to_string().contains("alien_width"));

    let err = Settings::from_toml("fleet_drop_speed = -1.0").unwrap_err();
    assert!(err.to_string().contains("fleet_drop_speed"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let s = Settings::load(Path::new("definitely/not/here/alien_invasion.toml")).unwrap();
    assert_eq!(s, Settings::default());
}

#[test]
fn recovery_frames_covers_blinks_and_pause() {
    let s = Settings::default();
    assert_eq!(s.recovery_frames(), 5 * 12 + 48);
}

#[test]
fn recovery_frames_saturate_on_huge_values() {
    let s = Settings {
        blink_count: u32::MAX,
        blink_frames: 2,
        hit_pause_frames: 10,
        ..Settings::default()
    };
    assert_eq!(s.recovery_frames(), u32::MAX);
}

// ── Dynamic difficulty ────────────────────────────────────────────────────────

#[test]
fn initial_difficulty_from_base_speeds() {
    let s = Settings::default();
    let d = Difficulty::initial(&s);
    assert_eq!(d.ship_speed, s.ship_speed);
    assert_eq!(d.bullet_speed, s.bullet_speed);
    assert_eq!(d.alien_speed, s.alien_speed);
    assert_eq!(d.fleet_direction, FleetDirection::Right);
}

#[test]
fn increase_speed_scales_all_speeds() {
    let s = Settings::default();
    let d = Difficulty::initial(&s).increase_speed(2.0);
    assert_eq!(d.ship_speed, s.ship_speed * 2.0);
    assert_eq!(d.bullet_speed, s.bullet_speed * 2.0);
    assert_eq!(d.alien_speed, s.alien_speed * 2.0);
    assert_eq!(d.fleet_direction, FleetDirection::Right);
}

#[test]
fn fleet_direction_sign_and_flip() {
    assert_eq!(FleetDirection::Right.sign(), 1.0);
    assert_eq!(FleetDirection::Left.sign(), -1.0);
    assert_eq!(FleetDirection::Right.flipped(), FleetDirection::Left);
    assert_eq!(FleetDirection::Left.flipped().flipped(), FleetDirection::Left);
}

// ── Stats ─────────────────────────────────────────────────────────────────────

#[test]
fn stats_reset_restores_ship_limit_and_zero_score() {
    let settings = Settings {
        ship_limit: 4,
        ..Settings::default()
    };
    let mut stats = GameStats::new(&settings);
    assert_eq!((stats.score, stats.ships_left), (0, 4));
    stats.score = 9000;
    stats.ships_left = 0;
    stats.reset(&settings);
    assert_eq!((stats.score, stats.ships_left), (0, 4));
}

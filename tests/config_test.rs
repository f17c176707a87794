//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_negamax::{Player, PlayerKind, PlayerRegistry, SolverConfig};

#[test]
fn test_defaults_seat_engine_as_second() {
    let config = SolverConfig::default();
    assert_eq!(*config.first_player(), Player::First);
    assert_eq!(config.first().name(), "Player X");
    assert_eq!(*config.second().kind(), PlayerKind::Ai);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.roster().ai_player(), Some(Player::Second));
}

#[test]
fn test_empty_file_uses_defaults() {
    let config = SolverConfig::from_toml_str("").unwrap();
    assert_eq!(config, SolverConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
first_player = "second"
log_filter = "debug"

[first]
name = "Engine"
kind = "ai"
"#
    )
    .unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.first_player(), Player::Second);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.first().name(), "Engine");
    // Untouched seat keeps its default
    assert_eq!(config.second().name(), "Player O");
    assert_eq!(config.roster().ai_player(), Some(Player::First));
}

#[test]
fn test_missing_file_reports_location() {
    let dir = tempfile::tempdir().unwrap();
    let err = SolverConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_invalid_player_rejected() {
    let err = SolverConfig::from_toml_str(r#"first_player = "third""#).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

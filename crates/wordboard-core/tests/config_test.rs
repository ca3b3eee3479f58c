//! Tests for the wordboard configuration system.

use std::sync::Mutex;

use wordboard_core::config::{BoardConfig, ConfigOverrides, MalformedDecayPolicy};
use wordboard_core::errors::ConfigError;
use wordboard_core::word::Identity;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_wordboard_env_vars() {
    for key in [
        "WORDBOARD_DECAY_WINDOW_SECS",
        "WORDBOARD_DECAY_MALFORMED_POLICY",
        "WORDBOARD_MAX_WORDS_PER_CREATOR",
        "WORDBOARD_MAX_VOTES_PER_USER",
        "WORDBOARD_MAX_WEIGHT",
        "WORDBOARD_MAX_TEXT_LENGTH",
        "WORDBOARD_MAX_DESCRIPTION_LENGTH",
        "WORDBOARD_PRIVILEGED",
        "WORDBOARD_DB_PATH",
        "WORDBOARD_READ_POOL_SIZE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_match_deployment_values() {
    let config = BoardConfig::default();
    assert_eq!(config.limits.max_words_per_creator, 3);
    assert_eq!(config.limits.max_votes_per_user, 10);
    assert_eq!(config.limits.max_weight, 20.0);
    assert_eq!(config.limits.max_text_length, 20);
    assert_eq!(config.limits.max_description_length, 40);
    assert_eq!(config.decay.malformed_policy, MalformedDecayPolicy::Repair);
    assert!(BoardConfig::validate(&config).is_ok());
}

#[test]
fn layered_resolution_overrides_beat_env_beat_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("wordboard.toml"),
        r#"
[decay]
window_secs = 7200

[limits]
max_votes_per_user = 5
privileged = ["admin@x.edu"]

[storage]
db_path = "from_file.db"
"#,
    )
    .unwrap();

    std::env::set_var("WORDBOARD_MAX_VOTES_PER_USER", "7");
    std::env::set_var("WORDBOARD_DB_PATH", "from_env.db");

    let overrides = ConfigOverrides {
        db_path: Some("from_cli.db".to_string()),
        privileged: vec!["ops@x.edu".to_string()],
        ..Default::default()
    };
    let config = BoardConfig::load(dir.path(), Some(&overrides)).unwrap();

    assert_eq!(config.decay.window_secs, 7200);
    assert_eq!(config.limits.max_votes_per_user, 7);
    assert_eq!(config.storage.db_path, "from_cli.db");
    assert!(config.limits.is_privileged(&Identity::new("admin@x.edu")));
    assert!(config.limits.is_privileged(&Identity::new("ops@x.edu")));
    // Untouched keys keep their defaults.
    assert_eq!(config.limits.max_words_per_creator, 3);

    clear_wordboard_env_vars();
}

#[test]
fn decay_overrides_beat_env_and_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("wordboard.toml"),
        "[decay]\nwindow_secs = 7200\nmalformed_policy = \"fail_open\"\n",
    )
    .unwrap();
    std::env::set_var("WORDBOARD_DECAY_WINDOW_SECS", "3600");

    let overrides = ConfigOverrides {
        decay_window_secs: Some(60),
        malformed_policy: Some(MalformedDecayPolicy::FailRead),
        ..Default::default()
    };
    let config = BoardConfig::load(dir.path(), Some(&overrides)).unwrap();
    assert_eq!(config.decay.window_secs, 60);
    assert_eq!(config.decay.malformed_policy, MalformedDecayPolicy::FailRead);

    let config = BoardConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.decay.window_secs, 3600);
    assert_eq!(config.decay.malformed_policy, MalformedDecayPolicy::FailOpen);

    clear_wordboard_env_vars();
}

#[test]
fn zero_decay_window_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let overrides = ConfigOverrides {
        decay_window_secs: Some(0),
        ..Default::default()
    };
    let err = BoardConfig::load(dir.path(), Some(&overrides)).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "decay.window_secs"));
}

#[test]
fn missing_project_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = BoardConfig::load(dir.path(), None).unwrap();
    assert_eq!(config, BoardConfig::default());
}

#[test]
fn invalid_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    std::env::set_var("WORDBOARD_MAX_WEIGHT", "very heavy");
    std::env::set_var("WORDBOARD_DECAY_MALFORMED_POLICY", "fail-read");
    let dir = tempfile::TempDir::new().unwrap();
    let config = BoardConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.limits.max_weight, 20.0);
    assert_eq!(config.decay.malformed_policy, MalformedDecayPolicy::FailRead);

    clear_wordboard_env_vars();
}

#[test]
fn privileged_env_var_is_comma_separated() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_wordboard_env_vars();

    std::env::set_var("WORDBOARD_PRIVILEGED", "a@x.edu, b@x.edu,,");
    let dir = tempfile::TempDir::new().unwrap();
    let config = BoardConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.limits.privileged.len(), 2);
    assert!(config.limits.is_privileged(&Identity::new("b@x.edu")));

    clear_wordboard_env_vars();
}

#[test]
fn zero_decay_window_fails_validation() {
    let config = BoardConfig::from_toml("[decay]\nwindow_secs = 0\n").unwrap();
    let err = BoardConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "decay.window_secs"));
}

#[test]
fn max_weight_below_snap_fails_validation() {
    let config = BoardConfig::from_toml("[limits]\nmax_weight = 1.5\n").unwrap();
    assert!(BoardConfig::validate(&config).is_err());
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = BoardConfig::from_toml("[decay\nwindow_secs = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn toml_round_trip_preserves_policy() {
    let mut config = BoardConfig::default();
    config.decay.malformed_policy = MalformedDecayPolicy::FailOpen;
    let text = config.to_toml().unwrap();
    assert!(text.contains("fail_open"));
    assert_eq!(BoardConfig::from_toml(&text).unwrap(), config);
}

use hoslogger::config::Config;
use hoslogger::config::migrate::{migrate_config_file, missing_keys};
use hoslogger::core::calculator::limits::HosLimits;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str, content: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_hoslogger.conf", name));
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn test_missing_file_gives_defaults() {
    let path = env::temp_dir().join("does_not_exist_hoslogger.conf");
    fs::remove_file(&path).ok();

    let cfg = Config::load_from(&path).expect("defaults");
    assert_eq!(cfg.limits, HosLimits::default());
    assert!(cfg.strict_time_parsing);
    assert_eq!(cfg.history_limit, 10);
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = temp_conf(
        "partial",
        "database: /tmp/x.sqlite\nlimits:\n  max_driving_hours: 10\n",
    );
    let cfg = Config::load_from(&path).expect("valid config");

    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.limits.max_driving_hours, 10.0);
    assert_eq!(cfg.limits.max_on_duty_hours, 14.0);
    assert_eq!(cfg.separator_char, "-");
}

#[test]
fn test_non_positive_limit_rejected() {
    let path = temp_conf("bad_limit", "limits:\n  max_cycle_hours: 0\n");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn test_check_and_migrate_add_missing_keys() {
    let path = temp_conf(
        "migrate",
        "database: /tmp/keep.sqlite\nlimits:\n  max_driving_hours: 10\n",
    );

    let missing = missing_keys(&path).expect("readable");
    assert!(missing.contains(&"limits.max_cycle_hours".to_string()));
    assert!(missing.contains(&"strict_time_parsing".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = migrate_config_file(&path).expect("migrated");
    assert_eq!(added, missing);
    assert!(missing_keys(&path).expect("readable").is_empty());

    // existing values survive
    let cfg = Config::load_from(&path).expect("valid config");
    assert_eq!(cfg.database, "/tmp/keep.sqlite");
    assert_eq!(cfg.limits.max_driving_hours, 10.0);
}

#[test]
fn test_save_and_reload() {
    let path = env::temp_dir().join("roundtrip_hoslogger.conf");
    let cfg = Config {
        history_limit: 25,
        ..Config::default()
    };
    cfg.save_to(&path).expect("saved");

    assert_eq!(Config::load_from(&path).expect("loaded"), cfg);
}

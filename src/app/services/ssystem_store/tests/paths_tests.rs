//! Tests for store bootstrap and reset

use crate::app::services::ssystem_store::StoreLayout;
use crate::config::Config;
use crate::Error;
use tempfile::TempDir;

fn config_in(temp_dir: &TempDir) -> Config {
    Config::default().with_user_data_dir(temp_dir.path().join("user"))
}

#[test]
fn test_bootstrap_without_default_creates_empty_store() {
    let temp_dir = TempDir::new().unwrap();
    let layout = StoreLayout::from_config(&config_in(&temp_dir));

    let store_path = layout.ensure_user_store().unwrap();
    assert!(store_path.exists());
    assert_eq!(std::fs::read_to_string(store_path).unwrap(), "");
}

#[test]
fn test_bootstrap_copies_default_when_user_copy_absent() {
    let temp_dir = TempDir::new().unwrap();
    let default_store = temp_dir.path().join("install-ssystem.ini");
    std::fs::write(&default_store, "[Sun]\nname = Sun\n").unwrap();

    let config = config_in(&temp_dir).with_default_store(default_store);
    let layout = StoreLayout::from_config(&config);

    let store_path = layout.ensure_user_store().unwrap();
    assert_eq!(
        std::fs::read_to_string(store_path).unwrap(),
        "[Sun]\nname = Sun\n"
    );
}

#[test]
fn test_bootstrap_never_overwrites_existing_user_copy() {
    let temp_dir = TempDir::new().unwrap();
    let default_store = temp_dir.path().join("install-ssystem.ini");
    std::fs::write(&default_store, "[Sun]\nname = Sun\n").unwrap();

    let config = config_in(&temp_dir).with_default_store(default_store);
    let layout = StoreLayout::from_config(&config);

    // Pre-existing user copy with local edits
    std::fs::create_dir_all(layout.user_store().parent().unwrap()).unwrap();
    std::fs::write(layout.user_store(), "[2PEncke]\nname = 2P/Encke\n").unwrap();

    let store_path = layout.ensure_user_store().unwrap();
    assert_eq!(
        std::fs::read_to_string(store_path).unwrap(),
        "[2PEncke]\nname = 2P/Encke\n"
    );
}

#[test]
fn test_bootstrap_fails_when_configured_default_is_missing() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        config_in(&temp_dir).with_default_store(temp_dir.path().join("missing-ssystem.ini"));
    let layout = StoreLayout::from_config(&config);

    assert!(matches!(
        layout.ensure_user_store(),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_reset_removes_only_an_existing_user_copy() {
    let temp_dir = TempDir::new().unwrap();
    let layout = StoreLayout::from_config(&config_in(&temp_dir));

    // Nothing to remove yet
    assert!(!layout.reset_user_store().unwrap());

    layout.ensure_user_store().unwrap();
    assert!(layout.user_store().exists());

    assert!(layout.reset_user_store().unwrap());
    assert!(!layout.user_store().exists());
}

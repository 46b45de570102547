//! Integration tests for scpcu-config crate.

use scpcu_common::test_utils::{config_fixtures, create_temp_dir, write_fixture};
use scpcu_common::ScpError;
use scpcu_config::{
    ConfigLoader, RuntimeData, RuntimeDataStore, CONFIG_FILE_NAME, RUNTIME_DATA_FILE_NAME,
};
use std::collections::HashMap;

#[tokio::test]
async fn test_load_minimal_config() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::minimal_config_json());

    let config = ConfigLoader::new(path).load().await.unwrap();

    let expected = HashMap::from([("token".to_string(), "abc123".to_string())]);
    assert_eq!(config.as_map(), &expected);
    assert_eq!(config.into_map(), expected);
}

#[tokio::test]
async fn test_load_keeps_extra_keys() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::extended_config_json());

    let config = ConfigLoader::new(path).load_validated().await.unwrap();

    assert_eq!(config.token().unwrap(), "abc123");
    assert_eq!(config.get("contained_role"), Some("Contained"));
    assert_eq!(config.as_map().len(), 3);
}

#[tokio::test]
async fn test_missing_config_is_io_error() {
    let dir = create_temp_dir();
    let loader = ConfigLoader::new(dir.path().join(CONFIG_FILE_NAME));

    let err = loader.load().await.unwrap_err();
    assert!(err.is_io(), "expected I/O error, got {err:?}");
}

#[tokio::test]
async fn test_malformed_config_is_serialization_error() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::malformed_config_json());

    let err = ConfigLoader::new(path).load().await.unwrap_err();
    assert!(err.is_serialization(), "expected parse error, got {err:?}");
}

#[tokio::test]
async fn test_tokenless_config_fails_validation() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::tokenless_config_json());
    let loader = ConfigLoader::new(path);

    // Plain load succeeds, the token is only required at validation time
    assert!(loader.load().await.is_ok());
    let err = loader.load_validated().await.unwrap_err();
    assert!(matches!(err, ScpError::Config(_)));
}

#[test]
fn test_default_loader_uses_fixed_file_name() {
    let loader = ConfigLoader::default();
    assert_eq!(loader.path().to_str(), Some(CONFIG_FILE_NAME));

    let store = RuntimeDataStore::default();
    assert_eq!(store.path().to_str(), Some(RUNTIME_DATA_FILE_NAME));
}

#[tokio::test]
async fn test_missing_runtime_data_defaults_to_empty() {
    let dir = create_temp_dir();
    let store = RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME));

    let data = store.load().await;
    assert!(data.is_empty());
}

#[tokio::test]
async fn test_unreadable_runtime_data_defaults_to_empty() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, RUNTIME_DATA_FILE_NAME, "[1, 2, 3]");

    let data = RuntimeDataStore::new(path).load().await;
    assert_eq!(data, RuntimeData::default());
}

#[tokio::test]
async fn test_runtime_data_survives_save() {
    let dir = create_temp_dir();
    let store = RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME));

    let mut data = RuntimeData::default();
    data.insert("to_restore", serde_json::json!([]));
    store.save(&data).await.unwrap();

    let reloaded = store.load().await;
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.get("to_restore"), Some(&serde_json::json!([])));
}

//! Integration tests for scpcu-bot crate.
//!
//! These cover startup up to, but not including, the gateway connection.

use poise::serenity_prelude::GatewayIntents;
use scpcu_bot::{run, BotError, ContainmentBot};
use scpcu_common::test_utils::{config_fixtures, create_temp_dir, init_test_logging, write_fixture};
use scpcu_common::ScpError;
use scpcu_config::{
    Config, ConfigLoader, RuntimeData, RuntimeDataStore, CONFIG_FILE_NAME, RUNTIME_DATA_FILE_NAME,
};
use std::time::Duration;
use tokio::time::timeout;

#[tokio::test]
async fn test_missing_config_aborts_before_connecting() {
    init_test_logging();
    let dir = create_temp_dir();
    let loader = ConfigLoader::new(dir.path().join(CONFIG_FILE_NAME));
    let store = RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME));

    // Returns well inside the timeout because no connection is attempted
    let result = timeout(Duration::from_secs(5), run(loader, store))
        .await
        .expect("startup should fail fast");

    match result {
        Err(BotError::Config(err)) => assert!(err.is_io()),
        other => panic!("expected config I/O error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_config_aborts_before_connecting() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::malformed_config_json());
    let store = RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME));

    let result = run(ConfigLoader::new(path), store).await;
    assert!(matches!(result, Err(BotError::Config(ScpError::Serialization(_)))));
}

#[tokio::test]
async fn test_tokenless_config_aborts_before_connecting() {
    let dir = create_temp_dir();
    let path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::tokenless_config_json());
    let store = RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME));

    let result = run(ConfigLoader::new(path), store).await;
    assert!(matches!(result, Err(BotError::Config(ScpError::Config(_)))));
}

#[test]
fn test_bot_builds_containment_table() {
    let bot = ContainmentBot::new(Config::default(), RuntimeData::default());
    let names: Vec<_> = bot.commands().names().collect();
    assert_eq!(names, vec!["breach", "sitrep", "unbreach"]);
}

#[test]
fn test_intents_cover_prefix_commands_and_members() {
    let intents = ContainmentBot::intents();
    assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    assert!(intents.contains(GatewayIntents::GUILD_MEMBERS));
    assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
    assert!(intents.contains(GatewayIntents::DIRECT_MESSAGES));
}

#[tokio::test]
async fn test_start_without_token_fails_before_connecting() {
    let bot = ContainmentBot::new(Config::default(), RuntimeData::default());
    let result = bot.start().await;
    assert!(matches!(result, Err(BotError::Config(ScpError::Config(_)))));
}

#[tokio::test]
async fn test_from_files_holds_runtime_data() {
    let dir = create_temp_dir();
    let config_path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::minimal_config_json());
    let data_path = write_fixture(&dir, RUNTIME_DATA_FILE_NAME, r#"{"to_restore": []}"#);

    let bot = ContainmentBot::from_files(
        &ConfigLoader::new(config_path),
        &RuntimeDataStore::new(data_path),
    )
    .await
    .unwrap();

    assert_eq!(bot.runtime().len(), 1);
    assert_eq!(bot.runtime().get("to_restore"), Some(&serde_json::json!([])));
    assert_eq!(bot.commands().len(), 3);
}

#[tokio::test]
async fn test_from_files_without_runtime_data_starts_empty() {
    let dir = create_temp_dir();
    let config_path = write_fixture(&dir, CONFIG_FILE_NAME, config_fixtures::minimal_config_json());

    let bot = ContainmentBot::from_files(
        &ConfigLoader::new(config_path),
        &RuntimeDataStore::new(dir.path().join(RUNTIME_DATA_FILE_NAME)),
    )
    .await
    .unwrap();

    assert!(bot.runtime().is_empty());
}

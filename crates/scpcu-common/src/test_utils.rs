//! Test utilities and shared fixtures for the SCP Containment Unit bot.
//!
//! Enabled for other crates through the `testing` feature.

use std::sync::Once;

#[cfg(feature = "tracing-subscriber")]
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
#[cfg(feature = "tracing-subscriber")]
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        fmt().with_test_writer().with_env_filter(filter).init();
    });
}

/// No-op version when tracing-subscriber is not available
#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_test_logging() {
    INIT.call_once(|| {});
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Writes `contents` to `name` inside `dir` and returns the full path.
#[cfg(feature = "tempfile")]
pub fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Discord-related test utilities.
pub mod discord_fixtures {
    use crate::{ChannelId, GuildId, UserId};

    /// Create a test channel ID.
    pub const fn test_channel_id() -> ChannelId {
        ChannelId(123_456_789_012_345_678)
    }

    /// Create a test user ID.
    pub const fn test_user_id() -> UserId {
        UserId(987_654_321_098_765_432)
    }

    /// Create a test guild ID.
    pub const fn test_guild_id() -> GuildId {
        GuildId(555_555_555_555_555_555)
    }
}

/// Configuration-related test utilities.
pub mod config_fixtures {
    /// The smallest config file the bot accepts.
    pub const fn minimal_config_json() -> &'static str {
        r#"{"token": "abc123"}"#
    }

    /// A config file with keys beyond the token.
    pub const fn extended_config_json() -> &'static str {
        r#"{
    "token": "abc123",
    "role_prefix_to_remove": "Level",
    "contained_role": "Contained"
}"#
    }

    /// A config file that is valid JSON but has no token.
    pub const fn tokenless_config_json() -> &'static str {
        r#"{"prefix": "!"}"#
    }

    /// A config file that is not valid JSON.
    pub const fn malformed_config_json() -> &'static str {
        r#"{"token": "abc123""#
    }
}

/// Property-based testing utilities using proptest.
#[cfg(feature = "proptest")]
pub mod property_testing {
    use crate::{ChannelId, GuildId, UserId};
    use proptest::prelude::*;

    /// Strategy for generating valid Discord channel IDs.
    pub fn channel_id_strategy() -> impl Strategy<Value = ChannelId> {
        (100_000_000_000_000_000u64..=999_999_999_999_999_999u64).prop_map(ChannelId)
    }

    /// Strategy for generating valid Discord user IDs.
    pub fn user_id_strategy() -> impl Strategy<Value = UserId> {
        (100_000_000_000_000_000u64..=999_999_999_999_999_999u64).prop_map(UserId)
    }

    /// Strategy for generating valid Discord guild IDs.
    pub fn guild_id_strategy() -> impl Strategy<Value = GuildId> {
        (100_000_000_000_000_000u64..=999_999_999_999_999_999u64).prop_map(GuildId)
    }

    /// Strategy for generating valid username strings.
    pub fn username_strategy() -> impl Strategy<Value = String> {
        r"[a-zA-Z0-9_]{3,32}".prop_map(|s| s)
    }

    /// Strategy for generating command argument lists.
    pub fn args_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(r"[a-zA-Z0-9<>@!]{1,24}", 0..6)
    }
}

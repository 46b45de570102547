//! Fixed file names and key names.

/// File the configuration record is read from, relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "scpcu_config.json";

/// File reserved for runtime data, relative to the working directory.
pub const RUNTIME_DATA_FILE_NAME: &str = "scpcu_data.json";

/// Key holding the platform credential.
pub const TOKEN_KEY: &str = "token";

/// Prefix that marks a chat message as a command.
pub const COMMAND_PREFIX: &str = "!";

//! Application-wide error types using thiserror.

use poise::serenity_prelude as serenity;
use scpcu_common::ScpError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error("Could not load config: {0}")]
    Config(#[from] ScpError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;

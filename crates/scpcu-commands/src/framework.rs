//! Poise framework setup and command routing.

use crate::invocation::Invocation;
use crate::registry::{CommandRegistry, Dispatch};
use poise::serenity_prelude as serenity;
use scpcu_config::COMMAND_PREFIX;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Application data accessible in all commands.
pub struct Data {
    /// Command table consulted for every invocation.
    pub commands: Arc<CommandRegistry>,
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Framework options with every command registered under the `!` prefix.
pub fn framework_options() -> poise::FrameworkOptions<Data, Error> {
    poise::FrameworkOptions {
        commands: vec![
            crate::breach::breach(),
            crate::unbreach::unbreach(),
            crate::sitrep::sitrep(),
            crate::help::help(),
        ],
        prefix_options: poise::PrefixFrameworkOptions {
            prefix: Some(COMMAND_PREFIX.into()),
            ..Default::default()
        },
        on_error: |error| Box::pin(on_error(error)),
        event_handler: |ctx, event, framework, data| {
            Box::pin(event_handler(ctx, event, framework, data))
        },
        ..Default::default()
    }
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(framework_options())
}

/// Sends a command through the command table and replies if it ran.
pub async fn route(ctx: Context<'_>, name: &str, args: Vec<String>) -> Result<(), Error> {
    let invocation = Invocation::from_context(ctx, args).await;
    match ctx.data().commands.dispatch(name, &invocation).await? {
        Dispatch::Replied(reply) => {
            ctx.say(reply).await?;
        }
        Dispatch::Denied => {}
        Dispatch::Unknown => {
            warn!("Command '{}' reached the router but is not in the table", name);
        }
    }
    Ok(())
}

/// Global error handler for the framework.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to start bot: {:?}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Error in command '{}': {:?}", ctx.command().name, error);
        }
        poise::FrameworkError::EventHandler { error, event, .. } => {
            error!(
                "Error in event handler for {:?}: {:?}",
                event.snake_case_name(),
                error
            );
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

/// Central event handler for Discord events.
async fn event_handler(
    _ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot } => {
            debug!("Bot ready as {}", data_about_bot.user.name);
        }
        serenity::FullEvent::GuildCreate { guild, .. } => {
            info!("Available in guild: {} (ID: {})", guild.name, guild.id);
        }
        _ => {}
    }
    Ok(())
}

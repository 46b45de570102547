//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use poise::serenity_prelude as serenity;
use scpcu_commands::{create_framework, CommandRegistry, Data};
use scpcu_config::{Config, ConfigLoader, RuntimeData, RuntimeDataStore};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Main bot structure.
pub struct ContainmentBot {
    config: Arc<Config>,
    runtime: Arc<RuntimeData>,
    commands: Arc<CommandRegistry>,
}

impl ContainmentBot {
    /// Creates a new bot instance with the containment command table.
    pub fn new(config: Config, runtime: RuntimeData) -> Self {
        Self::with_commands(config, runtime, CommandRegistry::containment())
    }

    /// Creates a new bot instance with a custom command table.
    pub fn with_commands(config: Config, runtime: RuntimeData, commands: CommandRegistry) -> Self {
        Self {
            config: Arc::new(config),
            runtime: Arc::new(runtime),
            commands: Arc::new(commands),
        }
    }

    /// Gateway intents the bot connects with.
    ///
    /// Prefix commands need message content; resolving member permissions
    /// needs the member list.
    pub fn intents() -> serenity::GatewayIntents {
        serenity::GatewayIntents::non_privileged()
            | serenity::GatewayIntents::MESSAGE_CONTENT
            | serenity::GatewayIntents::GUILD_MEMBERS
    }

    /// Loads the config and runtime data files and builds the bot.
    ///
    /// A config error is returned as-is; a missing or unreadable runtime
    /// data file yields an empty record.
    pub async fn from_files(loader: &ConfigLoader, store: &RuntimeDataStore) -> BotResult<Self> {
        let config = loader.load_validated().await?;
        let runtime = store.load().await;
        Ok(Self::new(config, runtime))
    }

    /// Contents of the runtime data file, held for the process lifetime.
    pub fn runtime(&self) -> &RuntimeData {
        &self.runtime
    }

    /// The command table this bot dispatches through.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Connects and runs until the gateway connection ends.
    pub async fn start(&self) -> BotResult<()> {
        let token = self.config.token()?;
        let commands = self.commands.clone();

        let framework = create_framework()
            .setup(move |_ctx, ready, _framework| {
                Box::pin(async move {
                    info!("Bot connected as: {}", ready.user.name);
                    Ok(Data { commands })
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(token, Self::intents())
            .framework(framework)
            .await?;
        debug!("Bot set up");

        debug!("Bot starting");
        client.start().await?;
        Ok(())
    }
}

/// Loads the config and runtime data, then runs the bot.
///
/// A config error aborts before any connection is attempted. A connection
/// that ends, cleanly or not, is logged and returned to the caller.
pub async fn run(loader: ConfigLoader, store: RuntimeDataStore) -> BotResult<()> {
    info!("Setting up");
    let bot = match ContainmentBot::from_files(&loader, &store).await {
        Ok(bot) => bot,
        Err(e) => {
            error!("{}", e);
            return Err(e);
        }
    };
    debug!("Loaded {} runtime data entries", bot.runtime().len());
    let result = bot.start().await;
    if let Err(e) = &result {
        error!("Client error: {}", e);
    }
    warn!("Bot terminated");
    result
}

//! Main entry point for the SCP Containment Unit bot.

use scpcu_bot::{run, BotResult};
use scpcu_config::{ConfigLoader, RuntimeDataStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> BotResult<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "scpcu_bot=debug,scpcu_commands=debug,scpcu_config=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(ConfigLoader::default(), RuntimeDataStore::default()).await
}

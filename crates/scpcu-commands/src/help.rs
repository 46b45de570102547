//! Help command built on Poise's builtin help renderer.
#![allow(missing_docs)]

use crate::framework::{Context, Error};

/// Show available commands, or details for one command
#[poise::command(prefix_command, category = "Utility")]
pub async fn help(ctx: Context<'_>, #[rest] command: Option<String>) -> Result<(), Error> {
    let config = poise::builtins::HelpConfiguration {
        extra_text_at_bottom: "SCP Containment Unit, here to contain your SCPs!",
        ..Default::default()
    };
    poise::builtins::help(ctx, command.as_deref(), config).await?;
    Ok(())
}

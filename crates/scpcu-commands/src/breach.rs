//! `!breach` routed through the command table.
#![allow(missing_docs)]

use crate::containment::ContainmentCommand;
use crate::framework::{route, Context, Error};

/// Put an SCP into containment
#[poise::command(prefix_command, category = "Containment")]
pub async fn breach(ctx: Context<'_>, args: Vec<String>) -> Result<(), Error> {
    route(ctx, ContainmentCommand::Breach.name(), args).await
}

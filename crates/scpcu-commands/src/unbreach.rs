//! `!unbreach` routed through the command table.
#![allow(missing_docs)]

use crate::containment::ContainmentCommand;
use crate::framework::{route, Context, Error};

/// Let someone out of containment
#[poise::command(prefix_command, category = "Containment")]
pub async fn unbreach(ctx: Context<'_>, args: Vec<String>) -> Result<(), Error> {
    route(ctx, ContainmentCommand::Unbreach.name(), args).await
}

//! `!sitrep` routed through the command table.
#![allow(missing_docs)]

use crate::containment::ContainmentCommand;
use crate::framework::{route, Context, Error};

/// Get a situation report of the containment facilities
#[poise::command(prefix_command, category = "Containment")]
pub async fn sitrep(ctx: Context<'_>, args: Vec<String>) -> Result<(), Error> {
    route(ctx, ContainmentCommand::Sitrep.name(), args).await
}

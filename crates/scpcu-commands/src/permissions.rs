//! Authorization gate for administrative commands.

use crate::framework::Context;
use crate::invocation::Invocation;
use poise::serenity_prelude::{Guild, Permissions, RoleId, UserId};
use std::collections::HashMap;
use tracing::debug;

/// Returns true only if the author holds administrator privilege in the
/// guild the command came from.
///
/// Direct messages and members whose permissions could not be resolved are
/// refused. Refusal is not an error.
pub fn is_administrator(invocation: &Invocation) -> bool {
    debug!("Checking permission for command");
    let allowed = invocation
        .guild
        .and_then(|scope| scope.permissions)
        .is_some_and(|permissions| permissions.administrator());

    if !allowed {
        debug!(
            "User '{}' does not have the required permission",
            invocation.author_name
        );
    }
    allowed
}

/// Role permissions of a guild, captured from the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRoles {
    /// Owner of the guild; always holds every permission.
    pub owner_id: UserId,
    /// Permissions of the `@everyone` role.
    pub everyone: Permissions,
    /// Permissions granted by each role.
    pub roles: HashMap<RoleId, Permissions>,
}

impl GuildRoles {
    /// Snapshots the roles of a cached guild.
    pub fn from_guild(guild: &Guild) -> Self {
        let everyone_id = RoleId::new(guild.id.get());
        let everyone = guild
            .roles
            .get(&everyone_id)
            .map_or_else(Permissions::empty, |role| role.permissions);
        let roles = guild
            .roles
            .iter()
            .map(|(id, role)| (*id, role.permissions))
            .collect();

        Self {
            owner_id: guild.owner_id,
            everyone,
            roles,
        }
    }
}

/// Computes a member's guild-level permissions.
///
/// Permissions supplied with the event win. Otherwise the owner gets
/// everything and everyone else gets the union of `@everyone` and their
/// roles, with ADMINISTRATOR expanding to everything. `None` when nothing
/// was supplied and the guild is unknown.
pub fn resolve_permissions(
    user_id: UserId,
    member_roles: &[RoleId],
    supplied: Option<Permissions>,
    guild: Option<&GuildRoles>,
) -> Option<Permissions> {
    if supplied.is_some() {
        return supplied;
    }

    let guild = guild?;
    if user_id == guild.owner_id {
        return Some(Permissions::all());
    }

    let permissions = member_roles
        .iter()
        .filter_map(|role| guild.roles.get(role))
        .fold(guild.everyone, |acc, role| acc | *role);

    if permissions.administrator() {
        Some(Permissions::all())
    } else {
        Some(permissions)
    }
}

/// Resolves the author's effective permissions in the current guild.
///
/// Interaction payloads carry them directly; for prefix commands they are
/// computed from the cached guild. `None` outside guilds or when the member
/// or guild is unavailable.
pub async fn author_permissions(ctx: Context<'_>) -> Option<Permissions> {
    ctx.guild_id()?;
    let member = ctx.author_member().await?;
    let guild = ctx.guild().map(|guild| GuildRoles::from_guild(&guild));
    resolve_permissions(
        member.user.id,
        &member.roles,
        member.permissions,
        guild.as_ref(),
    )
}

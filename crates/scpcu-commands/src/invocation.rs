//! A single user-issued command event, detached from the framework context.

use crate::framework::Context;
use crate::permissions::author_permissions;
use poise::serenity_prelude::Permissions;
use scpcu_common::{ChannelId, GuildId, UserId};

/// The guild a command was issued in, with the author's permissions there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuildScope {
    /// Guild the command came from.
    pub guild_id: GuildId,
    /// Author's effective permissions, if they could be resolved.
    pub permissions: Option<Permissions>,
}

/// One command invocation. Built per event and dropped after handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Issuing user.
    pub author_id: UserId,
    /// Issuing user's name.
    pub author_name: String,
    /// Channel the command was sent in.
    pub channel_id: ChannelId,
    /// Channel name, or the ID rendered as text when the name is unknown.
    pub channel_name: String,
    /// `None` for direct messages.
    pub guild: Option<GuildScope>,
    /// Raw arguments following the command name.
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation outside any guild.
    pub fn new(
        author_id: UserId,
        author_name: impl Into<String>,
        channel_id: ChannelId,
        channel_name: impl Into<String>,
        args: Vec<String>,
    ) -> Self {
        Self {
            author_id,
            author_name: author_name.into(),
            channel_id,
            channel_name: channel_name.into(),
            guild: None,
            args,
        }
    }

    /// Places the invocation inside a guild.
    #[must_use]
    pub fn in_guild(mut self, guild_id: GuildId, permissions: Option<Permissions>) -> Self {
        self.guild = Some(GuildScope {
            guild_id,
            permissions,
        });
        self
    }

    /// Captures everything the command table needs from a Poise context.
    pub async fn from_context(ctx: Context<'_>, args: Vec<String>) -> Self {
        let author = ctx.author();
        let channel_id = ctx.channel_id();
        let channel_name = channel_id
            .name(ctx.serenity_context())
            .await
            .unwrap_or_else(|_| channel_id.to_string());

        let invocation = Self::new(
            UserId(author.id.get()),
            author.name.clone(),
            ChannelId(channel_id.get()),
            channel_name,
            args,
        );

        match ctx.guild_id() {
            Some(guild_id) => {
                let permissions = author_permissions(ctx).await;
                invocation.in_guild(GuildId(guild_id.get()), permissions)
            }
            None => invocation,
        }
    }

    /// Returns true if the command was sent in a direct message.
    pub const fn is_direct_message(&self) -> bool {
        self.guild.is_none()
    }
}

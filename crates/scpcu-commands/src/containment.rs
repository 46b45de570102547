//! Containment facility commands.
//!
//! None of the facility operations exist yet; every command answers with
//! [`NOT_IMPLEMENTED`].

use crate::framework::Error;
use crate::invocation::Invocation;
use crate::registry::CommandHandler;
use async_trait::async_trait;
use std::fmt;
use tracing::debug;

/// Reply sent by every containment command.
pub const NOT_IMPLEMENTED: &str = "Command not implemented!";

/// The administrative containment commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainmentCommand {
    /// Put an SCP into containment.
    Breach,
    /// Let someone out of containment.
    Unbreach,
    /// Report on the containment facilities.
    Sitrep,
}

impl ContainmentCommand {
    /// Every containment command.
    pub const ALL: [Self; 3] = [Self::Breach, Self::Unbreach, Self::Sitrep];

    /// Name the command is invoked by.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Breach => "breach",
            Self::Unbreach => "unbreach",
            Self::Sitrep => "sitrep",
        }
    }

    /// One-line help text.
    pub const fn brief(self) -> &'static str {
        match self {
            Self::Breach => "Put an SCP into containment",
            Self::Unbreach => "Let someone out of containment",
            Self::Sitrep => "Get a situation report of the containment facilities",
        }
    }
}

impl fmt::Display for ContainmentCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[async_trait]
impl CommandHandler for ContainmentCommand {
    async fn handle(&self, invocation: &Invocation) -> Result<String, Error> {
        debug!(
            "{} command used by {} in {}",
            self, invocation.author_name, invocation.channel_name
        );
        Ok(NOT_IMPLEMENTED.to_string())
    }
}

//! Command table mapping names to handlers and authorization predicates.

use crate::containment::ContainmentCommand;
use crate::framework::Error;
use crate::invocation::Invocation;
use crate::permissions::is_administrator;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authorization predicate evaluated before a handler runs.
pub type Predicate = fn(&Invocation) -> bool;

/// Something that can answer a command invocation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Handles the invocation and returns the reply to send.
    async fn handle(&self, invocation: &Invocation) -> Result<String, Error>;
}

/// A registered command.
#[derive(Clone)]
pub struct CommandEntry {
    /// One-line description shown in help.
    pub brief: &'static str,
    /// Runs once the predicate passes.
    pub handler: Arc<dyn CommandHandler>,
    /// Decides whether the handler may run.
    pub predicate: Predicate,
}

/// Outcome of routing an invocation through the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The predicate passed and the handler produced this reply.
    Replied(String),
    /// The predicate refused the invocation; the handler did not run.
    Denied,
    /// No command is registered under that name.
    Unknown,
}

/// Registration table built once at startup.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    entries: BTreeMap<String, CommandEntry>,
}

impl CommandRegistry {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table of administrator-only containment commands.
    pub fn containment() -> Self {
        let mut registry = Self::new();
        for command in ContainmentCommand::ALL {
            registry.register(
                command.name(),
                command.brief(),
                Arc::new(command),
                is_administrator,
            );
        }
        registry
    }

    /// Adds or replaces a command.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        brief: &'static str,
        handler: Arc<dyn CommandHandler>,
        predicate: Predicate,
    ) {
        let name = name.into();
        debug!("Registering command '{}'", name);
        self.entries.insert(
            name,
            CommandEntry {
                brief,
                handler,
                predicate,
            },
        );
    }

    /// Looks up a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandEntry> {
        self.entries.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Routes an invocation: evaluates the predicate, then runs the handler.
    pub async fn dispatch(&self, name: &str, invocation: &Invocation) -> Result<Dispatch, Error> {
        let Some(entry) = self.get(name) else {
            warn!("No handler registered for command '{}'", name);
            return Ok(Dispatch::Unknown);
        };

        if !(entry.predicate)(invocation) {
            debug!(
                "Command '{}' refused for {} in {}",
                name, invocation.author_name, invocation.channel_name
            );
            return Ok(Dispatch::Denied);
        }

        let reply = entry.handler.handle(invocation).await?;
        Ok(Dispatch::Replied(reply))
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

//! # SCPCU Commands
//!
//! Administrative chat commands for the SCP Containment Unit bot.
//!
//! Commands are described by an explicit [`CommandRegistry`]: each name maps
//! to a handler and the authorization predicate guarding it. The Poise
//! commands in this crate only route invocations into that table.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod breach;
pub mod containment;
pub mod framework;
pub mod help;
pub mod invocation;
pub mod permissions;
pub mod registry;
pub mod sitrep;
pub mod unbreach;

pub use containment::*;
pub use framework::*;
pub use invocation::*;
pub use permissions::*;
pub use registry::*;

//! # SCPCU Config
//!
//! Configuration and runtime data file loading for the SCP Containment Unit bot.
//!
//! The configuration record is read once at startup and never mutated.
//! The runtime data file is optional and its contents are reserved.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod runtime;
pub mod schema;

pub use defaults::*;
pub use loader::*;
pub use runtime::*;
pub use schema::*;

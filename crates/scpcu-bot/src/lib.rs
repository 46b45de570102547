//! # SCPCU Bot
//!
//! SCP Containment Unit, here to contain your SCPs!
//!
//! This is the binary crate that loads configuration, builds the command
//! table, and runs the Discord client using the Poise framework.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod bot;
pub mod error;

pub use bot::*;
pub use error::*;

//! # SCPCU Common
//!
//! Shared types, errors, and test utilities for the SCP Containment Unit bot.
//!
//! This crate provides the identifier newtypes and the error type used
//! across every other crate in the workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::*;
pub use types::*;

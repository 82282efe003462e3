//! # kc-mirror
//!
//! Command-line tool that keeps a local, file-based mirror of Keycloak
//! configuration (realms and client registrations) in sync with the Admin
//! REST API and reports drift between the two.
//!
//! The local mirror is authoritative by convention: every mutating command
//! re-reads the remote document afterwards and overwrites the mirror with
//! what the server actually stored (fetch-and-store), so the mirror always
//! reflects server-assigned fields.
//!
//! ## Modules
//!
//! - [`cli`] - Argument parsing
//! - [`commands`] - Command implementations
//! - [`config`] - Configuration file handling
//! - [`reconcile`] - Drift classification between mirror and server
//! - [`repo`] - The on-disk mirror
//! - [`output`] - Terminal output helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod reconcile;
pub mod repo;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};

//! # kc-admin-client
//!
//! Typed client for the Keycloak Admin REST API.
//!
//! This crate wraps the realm- and client-scoped admin resources behind a
//! small set of typed operations. A session is obtained once via the
//! password grant and travels inside the client; there is no process-wide
//! authentication state.
//!
//! ## Modules
//!
//! - [`session`] - Password-grant token exchange and the resulting session
//! - [`client`] - The admin API client and its typed operations
//! - [`types`] - Wire representations (realms, clients, secrets)
//! - [`error`] - Error types

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod error;
pub mod session;
pub mod types;

pub use client::AdminClient;
pub use error::{AdminError, AdminResult};
pub use session::AdminSession;
pub use types::{ClientRecord, ClientSecret, RealmRepresentation};

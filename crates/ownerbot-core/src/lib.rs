//! Core types, configuration, and error handling for ownerbot.
//!
//! This crate provides the shared foundation used by the other ownerbot
//! crates:
//! - [`OwnerbotError`] — unified error type using `thiserror`
//! - [`OwnerbotConfig`] — configuration loaded from `.ownerbot.toml`
//! - [`OwnersTable`] — the module-to-owners mapping loaded from
//!   `owners.json`

mod config;
mod error;
mod owners;

pub use config::{NotifyConfig, OwnerbotConfig};
pub use error::OwnerbotError;
pub use owners::OwnersTable;

/// A convenience `Result` type for ownerbot operations.
pub type Result<T> = std::result::Result<T, OwnerbotError>;

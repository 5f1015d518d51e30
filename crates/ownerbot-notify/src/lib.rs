//! Owner-notification pipeline for pull requests.
//!
//! Provides the pieces the `ownerbot` binary wires together: PR context
//! resolution, touched-module derivation, comment body composition,
//! reconciliation planning, and the GitHub client that performs the API
//! calls.

pub mod comment;
pub mod context;
pub mod github;
pub mod modules;
pub mod pipeline;

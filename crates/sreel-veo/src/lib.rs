//! Veo long-running video generation client.
//!
//! This crate provides:
//! - [`VeoClient`]: submit-and-poll driver for one generation job
//! - [`CredentialStore`]: explicit process-wide API key state
//! - A typed failure taxonomy ([`VeoError`], [`FailureKind`])

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;

pub use client::VeoClient;
pub use config::VeoConfig;
pub use credentials::CredentialStore;
pub use error::{classify_failure, FailureKind, VeoError, VeoResult};

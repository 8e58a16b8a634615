//! Test utilities shared across the gencred workspace
//!
//! This crate provides common testing infrastructure including:
//! - An in-memory credential store that accounts for every handle it hands
//!   out ([`MockCredentialStore`])
//! - Host doubles that record messages and pushed records
//!   ([`RecordingEngine`], [`RecordingAnchorManager`])
//! - Temporary XML configuration files ([`ConfigFileGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod host;
pub mod store;

// Re-export commonly used items
pub use config::{ConfigFileGuard, credential_config_xml};
pub use host::{AnchorState, RecordingAnchor, RecordingAnchorManager, RecordingEngine};
pub use store::{MockCredentialRecord, MockCredentialStore, utf16le};

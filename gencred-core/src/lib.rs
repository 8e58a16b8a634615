//! # Gencred Core Library
//!
//! Looks up a single "generic" credential in the operating system credential
//! store and hands back the decoded username and password. Every failure
//! along the way (missing entry, denied access, platform error, undecodable
//! secret) collapses into [`Lookup::Absent`]; callers only ever see found or
//! not found.
//!
//! ```no_run
//! use gencred_core::{Lookup, lookup_generic_credential};
//!
//! match lookup_generic_credential("foobar") {
//!   Lookup::Found(credential) => println!("NAME: {}", credential.username()),
//!   Lookup::Absent => println!("No matching credentials found"),
//! }
//! ```

pub mod credential;
pub mod decode;
pub mod error;
pub mod lookup;
pub mod platform;
pub mod store;

// Re-export main types for plugin developers
pub use credential::{Credential, Lookup};
pub use decode::decode_utf16le;
pub use error::{DecodeError, LookupError, StoreError};
pub use lookup::{lookup, lookup_generic_credential};
pub use platform::{SystemCredentialStore, system_store};
pub use store::{CredentialRecord, CredentialStore};

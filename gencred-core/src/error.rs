//! Error types behind an absent lookup. [`crate::lookup`] never returns them;
//! it logs them and reports [`crate::Lookup::Absent`].

use thiserror::Error;

/// Errors reported by a [`crate::CredentialStore`]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
  #[error("no generic credential named '{0}'")]
  NotFound(String),

  #[error("target name contains an interior NUL character")]
  InvalidTarget,

  #[error("credential store call failed with platform error code {code}")]
  Platform { code: u32 },

  #[error("no credential store is available on this platform")]
  Unsupported,
}

/// Errors produced while turning a credential blob into text
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
  #[error("unpaired UTF-16 surrogate 0x{unit:04X} in credential blob")]
  UnpairedSurrogate { unit: u16 },
}

/// Any reason a lookup did not produce a credential
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
  #[error("credential name is empty")]
  EmptyName,

  #[error(transparent)]
  Store(#[from] StoreError),

  #[error("stored credential has an empty secret")]
  EmptySecret,

  #[error(transparent)]
  Decode(#[from] DecodeError),
}

//! # Credential Store Seam
//!
//! The lookup talks to the platform through these two traits so the native
//! handle lifetime can be expressed with ownership: a record owns whatever
//! the store handed out and gives it back when dropped.

use crate::error::StoreError;

/// A retrieved generic credential entry
///
/// Implementations release the underlying native resource in `Drop`.
pub trait CredentialRecord {
  /// Stored account name, empty when the entry has none
  fn username(&self) -> String;

  /// Raw secret bytes, exactly the length declared by the store
  fn secret(&self) -> &[u8];
}

/// Read access to a credential store holding "generic" credentials
pub trait CredentialStore {
  /// Record handed out by the store, possibly borrowing from it
  type Record<'a>: CredentialRecord
  where
    Self: 'a;

  /// Read the generic credential stored under `target`
  fn read_generic(&self, target: &str) -> Result<Self::Record<'_>, StoreError>;
}

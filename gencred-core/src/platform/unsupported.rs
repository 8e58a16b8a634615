//! Fallback store for platforms without a Windows Credential Manager

use crate::error::StoreError;
use crate::store::{CredentialRecord, CredentialStore};

/// Store that never holds any credential
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedCredentialStore;

/// Uninhabited record type; [`UnsupportedCredentialStore`] never produces one
#[derive(Debug)]
pub enum NoRecord {}

impl CredentialRecord for NoRecord {
  fn username(&self) -> String {
    match *self {}
  }

  fn secret(&self) -> &[u8] {
    match *self {}
  }
}

impl CredentialStore for UnsupportedCredentialStore {
  type Record<'a> = NoRecord;

  fn read_generic(&self, _target: &str) -> Result<Self::Record<'_>, StoreError> {
    Err(StoreError::Unsupported)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Lookup, lookup};

  #[test]
  fn test_unsupported_store_reports_absent() {
    let store = UnsupportedCredentialStore;

    assert!(matches!(store.read_generic("anything"), Err(StoreError::Unsupported)));
    assert_eq!(lookup(&store, "anything"), Lookup::Absent);
  }
}

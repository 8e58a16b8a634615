use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use gencred_core::{CredentialRecord, CredentialStore, StoreError};

/// Encode text the way the Windows Credential Manager stores secrets
pub fn utf16le(text: &str) -> Vec<u8> {
  text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// In-memory generic credential store
///
/// Every record handed out is counted as acquired, and counted as released
/// when it is dropped, so tests can prove no handle outlives a lookup.
#[derive(Default)]
pub struct MockCredentialStore {
  entries: HashMap<String, (String, Vec<u8>)>,
  failure: RefCell<Option<StoreError>>,
  reads: Cell<usize>,
  acquired: Cell<usize>,
  released: Cell<usize>,
}

impl MockCredentialStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Store a credential with a UTF-16LE encoded password
  pub fn with_credential(self, target: &str, username: &str, password: &str) -> Self {
    self.with_raw_secret(target, username, &utf16le(password))
  }

  /// Store a credential with an arbitrary secret blob
  pub fn with_raw_secret(mut self, target: &str, username: &str, secret: &[u8]) -> Self {
    self
      .entries
      .insert(target.to_string(), (username.to_string(), secret.to_vec()));
    self
  }

  /// Make every subsequent read fail with `error`
  pub fn fail_with(&self, error: StoreError) {
    *self.failure.borrow_mut() = Some(error);
  }

  /// Number of `read_generic` calls
  pub fn reads(&self) -> usize {
    self.reads.get()
  }

  /// Number of records handed out
  pub fn acquired(&self) -> usize {
    self.acquired.get()
  }

  /// Number of records dropped
  pub fn released(&self) -> usize {
    self.released.get()
  }

  /// Records handed out but not yet dropped
  pub fn outstanding(&self) -> usize {
    self.acquired() - self.released()
  }
}

impl CredentialStore for MockCredentialStore {
  type Record<'a> = MockCredentialRecord<'a>;

  fn read_generic(&self, target: &str) -> Result<Self::Record<'_>, StoreError> {
    self.reads.set(self.reads.get() + 1);

    if let Some(error) = self.failure.borrow().clone() {
      return Err(error);
    }

    let (username, secret) = self
      .entries
      .get(target)
      .ok_or_else(|| StoreError::NotFound(target.to_string()))?;

    self.acquired.set(self.acquired.get() + 1);
    Ok(MockCredentialRecord {
      username,
      secret,
      released: &self.released,
    })
  }
}

/// Record handed out by [`MockCredentialStore`]
pub struct MockCredentialRecord<'a> {
  username: &'a str,
  secret: &'a [u8],
  released: &'a Cell<usize>,
}

impl CredentialRecord for MockCredentialRecord<'_> {
  fn username(&self) -> String {
    self.username.to_string()
  }

  fn secret(&self) -> &[u8] {
    self.secret
  }
}

impl Drop for MockCredentialRecord<'_> {
  fn drop(&mut self) {
    self.released.set(self.released.get() + 1);
  }
}

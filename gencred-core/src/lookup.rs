//! # Credential Lookup
//!
//! Single-shot read of one generic credential. The store record is held only
//! for the duration of [`lookup`] and is released on every path out of it.

use tracing::debug;

use crate::credential::{Credential, Lookup};
use crate::decode::decode_utf16le;
use crate::error::LookupError;
use crate::platform::system_store;
use crate::store::{CredentialRecord, CredentialStore};

/// Look up the generic credential `name` in the system credential store
pub fn lookup_generic_credential(name: &str) -> Lookup {
  lookup(&system_store(), name)
}

/// Look up the generic credential `name` in `store`
///
/// Returns [`Lookup::Absent`] for an empty name, an unknown name, any store
/// failure, an empty secret, or a secret that is not valid UTF-16LE.
pub fn lookup<S: CredentialStore + ?Sized>(store: &S, name: &str) -> Lookup {
  match read_credential(store, name) {
    Ok(credential) => {
      debug!(credential_name = name, username = credential.username(), "Retrieved generic credential");
      Lookup::Found(credential)
    }
    Err(err) => {
      debug!(credential_name = name, reason = %err, "Generic credential unavailable");
      Lookup::Absent
    }
  }
}

fn read_credential<S: CredentialStore + ?Sized>(store: &S, name: &str) -> Result<Credential, LookupError> {
  if name.is_empty() {
    return Err(LookupError::EmptyName);
  }

  let record = store.read_generic(name)?;
  let secret = record.secret();
  if secret.is_empty() {
    return Err(LookupError::EmptySecret);
  }

  let password = decode_utf16le(secret)?;
  Ok(Credential::new(record.username(), password))
}

#[cfg(test)]
mod tests {
  use std::cell::Cell;
  use std::collections::HashMap;

  use super::*;
  use crate::error::StoreError;

  struct CountingRecord<'a> {
    username: String,
    secret: Vec<u8>,
    released: &'a Cell<usize>,
  }

  impl CredentialRecord for CountingRecord<'_> {
    fn username(&self) -> String {
      self.username.clone()
    }

    fn secret(&self) -> &[u8] {
      &self.secret
    }
  }

  impl Drop for CountingRecord<'_> {
    fn drop(&mut self) {
      self.released.set(self.released.get() + 1);
    }
  }

  #[derive(Default)]
  struct CountingStore {
    entries: HashMap<String, (String, Vec<u8>)>,
    reads: Cell<usize>,
    released: Cell<usize>,
  }

  impl CountingStore {
    fn with(mut self, target: &str, username: &str, secret: &[u8]) -> Self {
      self
        .entries
        .insert(target.to_string(), (username.to_string(), secret.to_vec()));
      self
    }
  }

  impl CredentialStore for CountingStore {
    type Record<'a> = CountingRecord<'a>;

    fn read_generic(&self, target: &str) -> Result<Self::Record<'_>, StoreError> {
      self.reads.set(self.reads.get() + 1);
      let (username, secret) = self
        .entries
        .get(target)
        .ok_or_else(|| StoreError::NotFound(target.to_string()))?;
      Ok(CountingRecord {
        username: username.clone(),
        secret: secret.clone(),
        released: &self.released,
      })
    }
  }

  fn utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
  }

  #[test]
  fn test_lookup_found_decodes_password() {
    let store = CountingStore::default().with("warehouse", "etl_user", &utf16le("s3cr3t!"));

    let result = lookup(&store, "warehouse");

    assert_eq!(result, Lookup::Found(Credential::new("etl_user", "s3cr3t!")));
    assert_eq!(store.released.get(), 1);
  }

  #[test]
  fn test_lookup_unknown_name_is_absent() {
    let store = CountingStore::default().with("warehouse", "etl_user", &utf16le("pw"));

    assert_eq!(lookup(&store, "warehouse-typo"), Lookup::Absent);
    assert_eq!(store.released.get(), 0);
  }

  #[test]
  fn test_lookup_empty_name_skips_store() {
    let store = CountingStore::default().with("", "nobody", &utf16le("pw"));

    assert_eq!(lookup(&store, ""), Lookup::Absent);
    assert_eq!(store.reads.get(), 0);
  }

  #[test]
  fn test_lookup_empty_secret_is_absent_and_released() {
    let store = CountingStore::default().with("blank", "user", &[]);

    assert_eq!(lookup(&store, "blank"), Lookup::Absent);
    assert_eq!(store.released.get(), 1);
  }

  #[test]
  fn test_lookup_decode_failure_is_absent_and_released() {
    let store = CountingStore::default().with("broken", "user", &[0x00, 0xD8]);

    assert_eq!(lookup(&store, "broken"), Lookup::Absent);
    assert_eq!(store.released.get(), 1);
  }

  #[test]
  fn test_read_credential_reports_reason() {
    let store = CountingStore::default().with("blank", "user", &[]);

    assert_eq!(read_credential(&store, ""), Err(LookupError::EmptyName));
    assert_eq!(read_credential(&store, "blank"), Err(LookupError::EmptySecret));
    assert_eq!(
      read_credential(&store, "missing"),
      Err(LookupError::Store(StoreError::NotFound("missing".to_string())))
    );
  }
}

use gencred_core::{Credential, Lookup, StoreError, lookup};
use gencred_test_utils::{MockCredentialStore, utf16le};

#[test]
fn found_credential_matches_what_was_stored() {
  let store = MockCredentialStore::new()
    .with_credential("warehouse", "etl_user", "p@ss w0rd")
    .with_credential("unicode", "jürgen", "пароль🔑");

  assert_eq!(
    lookup(&store, "warehouse"),
    Lookup::Found(Credential::new("etl_user", "p@ss w0rd"))
  );
  assert_eq!(
    lookup(&store, "unicode"),
    Lookup::Found(Credential::new("jürgen", "пароль🔑"))
  );
}

#[test]
fn byte_pairs_decode_to_text() {
  let store = MockCredentialStore::new().with_raw_secret("ab", "user", &[0x41, 0x00, 0x42, 0x00]);

  let credential = lookup(&store, "ab").into_credential().expect("credential is stored");

  assert_eq!(credential.password(), "AB");
}

#[test]
fn unknown_and_empty_names_are_absent() {
  let store = MockCredentialStore::new().with_credential("warehouse", "etl_user", "pw");

  assert_eq!(lookup(&store, "does-not-exist"), Lookup::Absent);
  assert_eq!(lookup(&store, ""), Lookup::Absent);
  assert_eq!(store.reads(), 1);
  assert_eq!(store.acquired(), 0);
}

#[test]
fn store_failures_collapse_to_absent() {
  let store = MockCredentialStore::new().with_credential("warehouse", "etl_user", "pw");

  store.fail_with(StoreError::Platform { code: 5 });
  assert_eq!(lookup(&store, "warehouse"), Lookup::Absent);

  store.fail_with(StoreError::Unsupported);
  assert_eq!(lookup(&store, "warehouse"), Lookup::Absent);
}

#[test]
fn undecodable_secret_is_absent_and_released() {
  let mut secret = utf16le("ok");
  secret.extend_from_slice(&[0x00, 0xDC]);
  let store = MockCredentialStore::new().with_raw_secret("broken", "user", &secret);

  assert_eq!(lookup(&store, "broken"), Lookup::Absent);
  assert_eq!(store.acquired(), 1);
  assert_eq!(store.outstanding(), 0);
}

#[test]
fn thousand_mixed_lookups_release_every_handle() {
  let store = MockCredentialStore::new()
    .with_credential("alpha", "a", "first")
    .with_credential("beta", "b", "second")
    .with_raw_secret("empty", "e", &[])
    .with_raw_secret("broken", "x", &[0x00, 0xD8]);
  let names = ["alpha", "missing", "beta", "empty", "broken", ""];

  let mut found = 0;
  for i in 0..1000 {
    if lookup(&store, names[i % names.len()]).is_found() {
      found += 1;
    }
    assert_eq!(store.outstanding(), 0, "handle leaked on iteration {i}");
  }

  // alpha, beta, empty and broken each reach the store and get a record
  let per_cycle_acquired = 4;
  let cycles = 1000 / names.len();
  let remainder_acquired = names[..1000 % names.len()]
    .iter()
    .filter(|name| ["alpha", "beta", "empty", "broken"].contains(*name))
    .count();

  assert_eq!(store.acquired(), cycles * per_cycle_acquired + remainder_acquired);
  assert_eq!(store.released(), store.acquired());
  assert!(found > 0);
}

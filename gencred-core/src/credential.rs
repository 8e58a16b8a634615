//! # Credential Model
//!
//! The value produced by a successful lookup and the two-way result that
//! wraps it.

use std::fmt;

/// Username and decoded password of a generic credential
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
  username: String,
  password: String,
}

impl Credential {
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      username: username.into(),
      password: password.into(),
    }
  }

  /// Account name stored alongside the secret
  pub fn username(&self) -> &str {
    &self.username
  }

  /// Decoded secret
  pub fn password(&self) -> &str {
    &self.password
  }
}

impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credential")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Outcome of a credential lookup
///
/// There is no error variant: anything short of a fully decoded
/// credential is reported as [`Lookup::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
  Found(Credential),
  Absent,
}

impl Lookup {
  pub fn is_found(&self) -> bool {
    matches!(self, Lookup::Found(_))
  }

  pub fn credential(&self) -> Option<&Credential> {
    match self {
      Lookup::Found(credential) => Some(credential),
      Lookup::Absent => None,
    }
  }

  pub fn into_credential(self) -> Option<Credential> {
    match self {
      Lookup::Found(credential) => Some(credential),
      Lookup::Absent => None,
    }
  }
}

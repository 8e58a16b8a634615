//! Platform-specific credential store implementations
//!
//! Windows reads from the Credential Manager. Every other platform gets a
//! store that reports itself unsupported, which the lookup turns into
//! [`crate::Lookup::Absent`].

#[cfg(not(windows))]
mod unsupported;
#[cfg(windows)]
mod windows;

#[cfg(not(windows))]
pub use unsupported::{NoRecord, UnsupportedCredentialStore};
#[cfg(windows)]
pub use windows::{WindowsCredentialHandle, WindowsCredentialStore};

/// Credential store backing [`crate::lookup_generic_credential`] on this platform
#[cfg(windows)]
pub type SystemCredentialStore = WindowsCredentialStore;

/// Credential store backing [`crate::lookup_generic_credential`] on this platform
#[cfg(not(windows))]
pub type SystemCredentialStore = UnsupportedCredentialStore;

/// Get the credential store for the current platform
pub const fn system_store() -> SystemCredentialStore {
  #[cfg(windows)]
  {
    WindowsCredentialStore
  }
  #[cfg(not(windows))]
  {
    UnsupportedCredentialStore
  }
}

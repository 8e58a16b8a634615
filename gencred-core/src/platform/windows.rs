//! Windows Credential Manager store
//!
//! Reads generic credentials with `CredReadW`. The `CREDENTIALW` block the
//! API allocates is owned by [`WindowsCredentialHandle`] and handed back with
//! `CredFree` when the handle drops.

mod helpers;

use std::ffi::c_void;
use std::ptr::{self, NonNull};
use std::slice;

use tracing::trace;
use windows_sys::Win32::Foundation::{ERROR_NOT_FOUND, GetLastError};
use windows_sys::Win32::Security::Credentials::{CRED_TYPE_GENERIC, CREDENTIALW, CredFree, CredReadW};

use self::helpers::{pwstr_to_string, to_wide};
use crate::error::StoreError;
use crate::store::{CredentialRecord, CredentialStore};

/// Generic credential store backed by the Windows Credential Manager
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsCredentialStore;

impl CredentialStore for WindowsCredentialStore {
  type Record<'a> = WindowsCredentialHandle;

  fn read_generic(&self, target: &str) -> Result<Self::Record<'_>, StoreError> {
    let target_name = to_wide(target).ok_or(StoreError::InvalidTarget)?;
    let mut credential: *mut CREDENTIALW = ptr::null_mut();

    // SAFETY: `target_name` is a null-terminated UTF-16 buffer that outlives
    // the call, and `credential` is a valid out-pointer.
    let ok = unsafe { CredReadW(target_name.as_ptr(), CRED_TYPE_GENERIC, 0, &mut credential) };
    if ok == 0 {
      // SAFETY: No preconditions; reads the calling thread's last error.
      let code = unsafe { GetLastError() };
      trace!(target_name = target, code, "CredReadW failed");
      return Err(if code == ERROR_NOT_FOUND {
        StoreError::NotFound(target.to_string())
      } else {
        StoreError::Platform { code }
      });
    }

    NonNull::new(credential)
      .map(|ptr| WindowsCredentialHandle { ptr })
      .ok_or(StoreError::Platform { code: 0 })
  }
}

/// Owned `CREDENTIALW` returned by `CredReadW`
///
/// Released with `CredFree` on drop.
#[derive(Debug)]
pub struct WindowsCredentialHandle {
  ptr: NonNull<CREDENTIALW>,
}

impl WindowsCredentialHandle {
  fn credential(&self) -> &CREDENTIALW {
    // SAFETY: `ptr` came from a successful CredReadW and is only freed in
    // `drop`, so it is valid for the lifetime of `self`.
    unsafe { self.ptr.as_ref() }
  }
}

impl CredentialRecord for WindowsCredentialHandle {
  fn username(&self) -> String {
    // SAFETY: UserName is null or a null-terminated string inside the block
    // owned by this handle.
    unsafe { pwstr_to_string(self.credential().UserName) }
  }

  fn secret(&self) -> &[u8] {
    let credential = self.credential();
    if credential.CredentialBlob.is_null() || credential.CredentialBlobSize == 0 {
      return &[];
    }

    // SAFETY: CredentialBlob points to CredentialBlobSize bytes inside the
    // block owned by this handle.
    unsafe { slice::from_raw_parts(credential.CredentialBlob, credential.CredentialBlobSize as usize) }
  }
}

impl Drop for WindowsCredentialHandle {
  fn drop(&mut self) {
    // SAFETY: `ptr` was allocated by CredReadW and is freed exactly once here.
    unsafe { CredFree(self.ptr.as_ptr() as *const c_void) };
  }
}

//! # Credential Blob Decoding
//!
//! Windows stores generic credential secrets as raw UTF-16LE bytes. The blob
//! is decoded pair by pair instead of relying on any platform string
//! marshaling, so exactly the declared length is consumed.

use crate::error::DecodeError;

/// Decode a UTF-16LE byte blob into a `String`
///
/// Every two bytes form one little-endian code unit. A trailing odd byte is
/// taken as a code unit on its own. Surrogate pairs are combined into one
/// character; an unpaired surrogate fails the decode.
pub fn decode_utf16le(blob: &[u8]) -> Result<String, DecodeError> {
  let units = blob.chunks(2).map(code_unit);

  char::decode_utf16(units)
    .map(|decoded| {
      decoded.map_err(|err| DecodeError::UnpairedSurrogate {
        unit: err.unpaired_surrogate(),
      })
    })
    .collect()
}

fn code_unit(pair: &[u8]) -> u16 {
  match *pair {
    [low, high] => u16::from_le_bytes([low, high]),
    [low] => u16::from(low),
    _ => 0,
  }
}

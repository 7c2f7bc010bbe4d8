//! Explicit-length entry point for bindings
//!
//! Host-language bindings often pass a buffer together with a separately
//! tracked length. The length is never trusted: it is checked against the
//! buffer before anything is encoded.

use crate::{Result, YencError};
use tracing::warn;

use super::encode::encode;

/// Encode the first `len` bytes of `data`
///
/// Fails with [`YencError::InvalidLength`] if `len` is negative or larger
/// than `data`. A shorter `len` encodes only that prefix.
pub fn encode_with_len(data: &[u8], len: i64) -> Result<Vec<u8>> {
    let usable = usize::try_from(len)
        .ok()
        .filter(|&len| len <= data.len());

    match usable {
        Some(len) => encode(&data[..len]),
        None => {
            warn!(
                "Rejecting yEnc input: declared length {} for {}-byte buffer",
                len,
                data.len()
            );
            Err(YencError::InvalidLength {
                declared: len,
                actual: data.len(),
            })
        }
    }
}

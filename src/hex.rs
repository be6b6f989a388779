//! Lowercase hexadecimal rendering of digests.

use crate::error::{Error, Result};
use crate::{DIGEST_LEN, FORMATTED_LEN};

const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Renders a digest as a 32-character lowercase hex string.
#[must_use]
pub fn format_digest(digest: &[u8; DIGEST_LEN]) -> String {
    let mut out = [0u8; FORMATTED_LEN];
    write_hex(&mut out, digest);
    String::from_utf8(out.to_vec()).expect("hex alphabet is ASCII")
}

/// Renders a digest into caller-provided storage without allocating.
///
/// Writes exactly [`FORMATTED_LEN`] bytes at the start of `dst` and returns
/// them as a string slice. A destination shorter than [`FORMATTED_LEN`] is
/// rejected up front and left untouched.
pub fn format_digest_into<'a>(dst: &'a mut [u8], digest: &[u8; DIGEST_LEN]) -> Result<&'a str> {
    if dst.len() < FORMATTED_LEN {
        return Err(Error::BufferTooSmall {
            needed: FORMATTED_LEN,
            got: dst.len(),
        });
    }

    write_hex(&mut dst[..FORMATTED_LEN], digest);
    Ok(std::str::from_utf8(&dst[..FORMATTED_LEN]).expect("hex alphabet is ASCII"))
}

fn write_hex(dst: &mut [u8], digest: &[u8; DIGEST_LEN]) {
    for (pair, byte) in dst.chunks_exact_mut(2).zip(digest.iter()) {
        pair[0] = ALPHABET[usize::from(byte >> 4)];
        pair[1] = ALPHABET[usize::from(byte & 0x0F)];
    }
}

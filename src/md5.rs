//! Streaming MD5 context: chunked updates, padding, and finalization.

use tracing::{debug, trace};

use crate::DIGEST_LEN;
use crate::block::{BLOCK_SIZE, STATE_WORDS, process_block};

/// Initial chaining value from RFC 1321 section 3.3.
const INITIAL_STATE: [u32; STATE_WORDS] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476];

/// Offset of the 64-bit bit-length field within the final block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

/// An in-progress MD5 computation.
///
/// Feed data with [`update`](Md5::update) in chunks of any size; the digest
/// never depends on where the chunk boundaries fall. [`finalize`](Md5::finalize)
/// consumes the context, so a finished computation cannot be fed more data.
///
/// MD5 is broken for collision resistance. This type reproduces the algorithm
/// for checksumming and interoperability, not as a security primitive.
#[derive(Clone)]
pub struct Md5 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    total_len: u64,
}

impl Md5 {
    /// Creates a fresh context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: INITIAL_STATE,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// Appends `data` to the message being hashed.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let mut remaining = data;
        while !remaining.is_empty() {
            // Bypass the buffer while it is empty and more than a full block
            // remains: compress straight out of the caller's slice.
            if self.buffer_len == 0 && remaining.len() > BLOCK_SIZE {
                if let Some((block, tail)) = remaining.split_first_chunk() {
                    process_block(&mut self.state, block);
                    remaining = tail;
                }
                continue;
            }

            let space = BLOCK_SIZE - self.buffer_len;
            let take = space.min(remaining.len());
            let (head, tail) = remaining.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            remaining = tail;

            if self.buffer_len == BLOCK_SIZE {
                process_block(&mut self.state, &self.buffer);
                self.buffer_len = 0;
            }
        }
    }

    /// Pads the message per RFC 1321 and returns the 16-byte digest.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // length halves truncate to 32 bits on purpose
    pub fn finalize(mut self) -> [u8; DIGEST_LEN] {
        debug!(total_bytes = self.total_len, "finalizing md5 digest");

        // A full buffer cannot survive update(), but flush it anyway so the
        // padding byte below always has room.
        if self.buffer_len == BLOCK_SIZE {
            process_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        self.buffer[self.buffer_len] = 0x80;
        self.buffer_len += 1;

        // The length field needs 8 bytes. If the padding byte left less than
        // that, this block is zero-filled and flushed, and the length goes in
        // a fresh block.
        if self.buffer_len > LENGTH_OFFSET {
            trace!(buffered = self.buffer_len, "padding spills into an extra block");
            for byte in &mut self.buffer[self.buffer_len..] {
                *byte = 0;
            }
            process_block(&mut self.state, &self.buffer);
            self.buffer_len = 0;
        }

        for byte in &mut self.buffer[self.buffer_len..LENGTH_OFFSET] {
            *byte = 0;
        }

        // Bit length as two little-endian 32-bit halves, each half shifted
        // into bits independently. The carry out of the low half is dropped,
        // matching the reference layout byte for byte.
        let bits_lo = (self.total_len as u32) << 3;
        let bits_hi = ((self.total_len >> 32) as u32) << 3;
        self.buffer[LENGTH_OFFSET..LENGTH_OFFSET + 4].copy_from_slice(&bits_lo.to_le_bytes());
        self.buffer[LENGTH_OFFSET + 4..].copy_from_slice(&bits_hi.to_le_bytes());
        process_block(&mut self.state, &self.buffer);

        let mut digest = [0u8; DIGEST_LEN];
        for (chunk, value) in digest.chunks_exact_mut(4).zip(self.state.iter()) {
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        digest
    }

    /// Hashes a fully-available buffer in one call.
    #[must_use]
    pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

impl Default for Md5 {
    fn default() -> Self {
        Self::new()
    }
}

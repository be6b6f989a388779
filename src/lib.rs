//! Incremental MD5 message digest.
//!
//! This library implements the RFC 1321 streaming hash state machine: a
//! context is fed message bytes in chunks of any size and, once finalized,
//! yields the 16-byte digest. A formatter renders digests as lowercase hex.
//!
//! # Quick Start
//!
//! ```rust
//! use md5_stream::{Md5, format_digest};
//!
//! // Chunk boundaries never affect the result.
//! let mut hasher = Md5::new();
//! hasher.update(b"message ");
//! hasher.update(b"digest");
//! let digest = hasher.finalize();
//!
//! assert_eq!(digest, Md5::digest(b"message digest"));
//! assert_eq!(format_digest(&digest), "f96b697d7cb7938d525a2f31aaf161d0");
//! ```
//!
//! # Features
//!
//! - **Chunked streaming** - feed data as it arrives, one byte or one
//!   gigabyte at a time
//! - **No allocation in the hot path** - the context is a fixed-size value
//!   with an inline 64-byte buffer
//! - **Misuse resistance** - `finalize` consumes the context, so a spent
//!   computation cannot be updated again
//!
//! MD5 is cryptographically broken; use this crate for checksums and legacy
//! interoperability, not for anything adversarial.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod block;
mod error;
mod hex;
mod md5;

pub use error::{Error, Result};
pub use hex::{format_digest, format_digest_into};
pub use md5::Md5;

/// Digest size in bytes.
pub const DIGEST_LEN: usize = 16;

/// Length of a hex-formatted digest in characters.
pub const FORMATTED_LEN: usize = 2 * DIGEST_LEN;

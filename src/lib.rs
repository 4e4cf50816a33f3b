//! The [MD5] hash function over complete in-memory buffers.
//!
//! A message is padded into whole 64-byte blocks, every block is folded into
//! four 32-bit accumulators, and the accumulators are laid out as a 16-byte
//! digest.
//!
//! ## Example
//!
//! ```
//! let digest = md5_block::compute(b"abcdefghijklmnopqrstuvwxyz").unwrap();
//! assert_eq!(format!("{:x}", digest), "c3fcd3d76192e4007dfb496cca67e13b");
//!
//! let hex = md5_block::compute_hex(b"The quick brown fox jumps over the lazy dog").unwrap();
//! assert_eq!(hex, "9e107d9d372bb6826bd81d3542a419d6");
//! ```
//!
//! ## Security Warning
//!
//! The package is provided for the purposes of interoperability with protocols
//! and systems that mandate the use of MD5. However, MD5 should be considered
//! [cryptographically broken and unsuitable for further use][VU836068].
//! Collision attacks against MD5 are both practical and trivial, and
//! [theoretical attacks against MD5 have been found][ACM1724151].
//!
//! [RFC6151] advises no new protocols to be designed with any MD5-based
//! constructions, including HMAC-MD5.
//!
//! [MD5]: https://en.wikipedia.org/wiki/MD5
//!
//! [ACM1724151]: https://dl.acm.org/citation.cfm?id=1724151
//! [RFC6151]: https://tools.ietf.org/html/rfc6151
//! [VU836068]: https://www.kb.cert.org/vuls/id/836068

// The implementation is based on:
// https://tools.ietf.org/html/rfc1321

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate alloc;

use alloc::format;
use alloc::string::String;

mod compress;
mod consts;
mod digest;
mod error;
mod padding;

pub use consts::{SHIFTS, SINES, STATE};
pub use digest::Digest;
pub use error::{Error, Result};
pub use padding::{bit_length, pad, padded_len, BLOCK_LEN};

/// Compute the digest of data.
///
/// The whole message is padded into a fresh buffer before hashing, so the
/// call needs memory proportional to the length of the message.
pub fn compute<T: AsRef<[u8]>>(data: T) -> Result<Digest> {
    let data = data.as_ref();
    let padded = pad(data).inspect_err(|error| trace::failed(data.len(), error))?;
    trace::padded(data.len(), padded.len());

    let mut state = STATE;
    compress::compress(&mut state, &padded);

    Ok(Digest::from_state(state))
}

/// Compute the digest of data as 32 lowercase hexadecimal characters.
#[inline]
pub fn compute_hex<T: AsRef<[u8]>>(data: T) -> Result<String> {
    compute(data).map(|digest| format!("{:x}", digest))
}

mod trace {
    use crate::error::Error;

    #[cfg(feature = "tracing")]
    #[inline]
    pub fn padded(len: usize, padded_len: usize) {
        tracing::trace!(
            target: "md5_block",
            len,
            padded_len,
            blocks = padded_len / crate::BLOCK_LEN,
            "padded {} bytes into {} blocks",
            len,
            padded_len / crate::BLOCK_LEN
        );
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    pub fn padded(_len: usize, _padded_len: usize) {}

    #[cfg(feature = "tracing")]
    #[inline]
    pub fn failed(len: usize, error: &Error) {
        tracing::debug!(target: "md5_block", len, %error, "digest failed");
    }

    #[cfg(not(feature = "tracing"))]
    #[inline]
    pub fn failed(_len: usize, _error: &Error) {}
}

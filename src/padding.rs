use alloc::vec::Vec;

use crate::error::{Error, Result};

/// Size of a block in bytes.
pub const BLOCK_LEN: usize = 64;

/// Marker byte following the message: a single `1` bit and seven `0` bits.
const MARKER: u8 = 0x80;

// Marker byte plus the 64-bit length field.
const TRAILER_LEN: usize = 9;

/// Return the length of a message in bits.
///
/// Fails with [`Error::MessageTooLong`] when the count does not fit in the
/// 64-bit length field, which happens from 2^61 bytes on.
pub fn bit_length(len: usize) -> Result<u64> {
    u64::try_from(len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Error::MessageTooLong { len })
}

/// Return the length of the padded form of a message of `len` bytes.
///
/// This is the smallest multiple of 64 that leaves room for the marker byte
/// and the 8-byte length after the message. A message whose length modulo 64
/// is 55 still fits in its last block; from 56 on an extra block is needed.
pub fn padded_len(len: usize) -> Result<usize> {
    bit_length(len)?;
    len.checked_add(TRAILER_LEN + BLOCK_LEN - 1)
        .map(|end| end / BLOCK_LEN * BLOCK_LEN)
        .ok_or(Error::MessageTooLong { len })
}

/// Pad a message into whole blocks.
///
/// The result holds the message, the marker byte, zeros up to eight bytes
/// before the end, and the bit length of the message in little-endian order.
pub fn pad(message: &[u8]) -> Result<Vec<u8>> {
    let length = bit_length(message.len())?;
    let requested = padded_len(message.len())?;

    let mut buffer = reserve(requested)?;
    buffer.extend_from_slice(message);
    buffer.push(MARKER);
    buffer.resize(requested - 8, 0);
    buffer.extend_from_slice(&length.to_le_bytes());

    Ok(buffer)
}

fn reserve(requested: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(requested)
        .map_err(|_| Error::OutOfMemory { requested })?;
    Ok(buffer)
}

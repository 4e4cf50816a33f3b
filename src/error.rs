/// Errors that can occur while computing a digest.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// The padded copy of the message could not be allocated.
    #[error("failed to allocate {requested} bytes for the padded message")]
    OutOfMemory {
        /// Number of bytes requested for the padded buffer.
        requested: usize,
    },
    /// The bit length of the message does not fit in the 64-bit length field.
    #[error("message of {len} bytes exceeds the 2^61 - 1 byte limit")]
    MessageTooLong {
        /// Number of bytes in the rejected message.
        len: usize,
    },
}

/// A result whose error is [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

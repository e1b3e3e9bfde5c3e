//! WSG command frame error types.
//!
//! Every variant is an invalid-argument condition raised synchronously to the
//! caller. Serialization itself performs no I/O, so there are no transient
//! failures at this layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WsgError {
    #[error("Invalid command code: {0} is outside 0..=255")]
    CommandOutOfRange(i64),

    #[error("Invalid command code: 0x{0:02X} is not in the command set")]
    UnknownCommand(u8),

    #[error("Invalid payload length: maximum {max}, got {actual}")]
    PayloadTooLong { actual: usize, max: usize },

    #[error("Invalid buffer length: expected at least {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}

impl WsgError {
    /// All encoder errors are caller errors; there is no recoverable class.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            Self::CommandOutOfRange(_)
            | Self::UnknownCommand(_)
            | Self::PayloadTooLong { .. }
            | Self::BufferTooSmall { .. } => true,
        }
    }
}

pub type WsgResult<T> = Result<T, WsgError>;

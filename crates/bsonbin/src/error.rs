use std::result;

use thiserror::Error;

use crate::Subtype;

pub type Result<T, E = Error> = result::Result<T, E>;

/// Error types for binary value operations.
#[derive(Debug, Error)]
pub enum Error {
    // Argument errors
    #[error("Byte value {value} is outside 0..=255")]
    InvalidByte { value: i64 },

    #[error("Expected a single byte, got {len} elements")]
    NotSingleByte { len: usize },

    // Range errors
    #[error("Window of {len} bytes at offset {offset} exceeds capacity {capacity}")]
    OutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },

    // Codec errors
    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error("Unknown text format: {0}")]
    UnknownFormat(String),

    #[error("Invalid subtype: {0:?}")]
    InvalidSubtype(String),

    #[error("UUID must be 16 bytes, got {0}")]
    InvalidUuid(usize),

    #[error("Not a UUID: subtype {subtype}, {len} bytes")]
    NotUuid { subtype: Subtype, len: usize },
}

impl Error {
    /// Whether the error was caused by an unusable input value.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidByte { .. } | Self::NotSingleByte { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

//! Error types for decoding, validating and rendering raw RGB dumps

use thiserror::Error;

/// Failure to turn the input text into bytes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Cleaned input is empty or not made of whole 4-character groups
    #[error("invalid base64 length: {len} characters is not a non-zero multiple of 4")]
    InvalidLength { len: usize },

    /// A character outside `A-Z a-z 0-9 + / =`
    #[error("invalid base64 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },
}

/// Decoded bytes that cannot be read as RGB24 pixels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Decoded size ({byte_len} bytes) is not divisible by 3 (incomplete RGB data)")]
    NotDivisibleBy3 { byte_len: usize },

    #[error("Decoded data is empty (no pixels)")]
    Empty,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("{width}x{height} needs {} bytes, got {byte_len}", width.saturating_mul(*height).saturating_mul(3))]
    DimensionMismatch {
        width: usize,
        height: usize,
        byte_len: usize,
    },

    #[error("failed to write preview: {0}")]
    Io(#[from] std::io::Error),
}

/// Any reason an input is rejected before candidates are produced
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Base64 decode failed ({0})")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, Error>;

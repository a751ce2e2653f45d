//! RGB24 buffers and pixel counting

use std::num::NonZeroUsize;

use crate::error::ValidationError;

pub const BYTES_PER_PIXEL: usize = 3;

/// Decoded bytes, owned by whichever pipeline stage holds them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBytes(Box<[u8]>);

impl RawBytes {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for RawBytes {
    fn from(bytes: Vec<u8>) -> Self {
        RawBytes(bytes.into_boxed_slice())
    }
}

/// Number of RGB triplets in a buffer, never zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct PixelCount(NonZeroUsize);

impl PixelCount {
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(PixelCount)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl std::fmt::Display for PixelCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Check that `bytes` holds whole RGB triplets and count them
pub fn validate(bytes: &RawBytes) -> Result<PixelCount, ValidationError> {
    if bytes.is_empty() {
        return Err(ValidationError::Empty);
    }

    let byte_len = bytes.len();
    if byte_len % BYTES_PER_PIXEL != 0 {
        return Err(ValidationError::NotDivisibleBy3 { byte_len });
    }

    PixelCount::new(byte_len / BYTES_PER_PIXEL).ok_or(ValidationError::Empty)
}

/// A buffer that passed validation, together with its pixel count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    bytes: RawBytes,
    pixel_count: PixelCount,
}

impl DecodedImage {
    pub fn new(bytes: RawBytes) -> Result<Self, ValidationError> {
        let pixel_count = validate(&bytes)?;
        Ok(DecodedImage { bytes, pixel_count })
    }

    pub fn bytes(&self) -> &RawBytes {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    pub fn pixel_count(&self) -> PixelCount {
        self.pixel_count
    }

    pub fn into_bytes(self) -> RawBytes {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_whole_pixels() {
        let bytes = RawBytes::from(vec![0u8; 36]);
        assert_eq!(validate(&bytes).map(PixelCount::get), Ok(12));
    }

    #[test]
    fn rejects_partial_pixels() {
        let bytes = RawBytes::from(vec![0u8; 10]);
        assert_eq!(
            validate(&bytes),
            Err(ValidationError::NotDivisibleBy3 { byte_len: 10 })
        );
    }

    #[test]
    fn rejects_empty_buffers() {
        assert_eq!(
            validate(&RawBytes::from(Vec::new())),
            Err(ValidationError::Empty)
        );
    }

    #[test]
    fn decoded_image_keeps_its_bytes() {
        let image = DecodedImage::new(RawBytes::from(vec![1, 2, 3, 4, 5, 6])).unwrap();
        assert_eq!(image.byte_len(), 6);
        assert_eq!(image.pixel_count().get(), 2);
        assert_eq!(image.into_bytes().as_bytes(), &[1, 2, 3, 4, 5, 6]);
    }
}

//! Guess the width and height of a headerless RGB24 dump.
//!
//! The pipeline is decode → validate → enumerate factor pairs → score → rank:
//!
//! ```
//! let analysis = rgbsniff::analyze("/wAAAP8AAAD/AAAA", &Default::default()).unwrap();
//! assert_eq!(analysis.image.pixel_count().get(), 4);
//! let best = analysis.best().unwrap();
//! assert_eq!((best.width, best.height), (2, 2));
//! ```

pub mod candidate;
pub mod config;
pub mod decode;
pub mod error;
pub mod factor;
pub mod rank;
pub mod render;
pub mod rgb;
pub mod score;

// Re-export commonly used types
pub use candidate::{AspectRatio, SizeCandidate, Tag, Tags};
pub use config::{ColorMode, SniffConfig};
pub use error::{DecodeError, Error, RenderError, Result, ValidationError};
pub use render::ColorCapability;
pub use rgb::{DecodedImage, PixelCount, RawBytes};

/// Enumerate, score and rank every size that fits `pixel_count`
pub fn infer_dimensions(
    pixel_count: PixelCount,
    max_candidates: Option<usize>,
) -> Vec<SizeCandidate> {
    let mut candidates = factor::enumerate(pixel_count.get(), max_candidates);
    candidates.iter_mut().for_each(score::score_candidate);
    rank::rank(candidates)
}

/// Decode base64 text and check it holds whole RGB pixels
pub fn decode_image(text: &str) -> Result<DecodedImage> {
    let bytes = RawBytes::from(decode::decode(text)?);
    Ok(DecodedImage::new(bytes)?)
}

/// A valid image and its ranked size candidates
#[derive(Debug, Clone)]
pub struct Analysis {
    pub image: DecodedImage,
    pub candidates: Vec<SizeCandidate>,
}

impl Analysis {
    pub fn best(&self) -> Option<&SizeCandidate> {
        self.candidates.first()
    }

    pub fn top(&self, n: usize) -> &[SizeCandidate] {
        &self.candidates[..n.min(self.candidates.len())]
    }

    /// Candidates ranked below the first `n`
    pub fn remaining(&self, n: usize) -> usize {
        self.candidates.len().saturating_sub(n)
    }
}

/// Run the whole pipeline on base64 text
pub fn analyze(text: &str, config: &SniffConfig) -> Result<Analysis> {
    let image = decode_image(text)?;
    log::debug!(
        "Decoded {} bytes ({} pixels)",
        image.byte_len(),
        image.pixel_count()
    );

    let candidates = infer_dimensions(image.pixel_count(), config.max_candidates);
    log::debug!("Ranked {} candidates", candidates.len());

    Ok(Analysis { image, candidates })
}

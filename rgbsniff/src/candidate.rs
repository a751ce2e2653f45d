use arrayvec::ArrayVec;
use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// Common aspect ratios, in the order they are tested
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, EnumCount, EnumIter)]
pub enum AspectRatio {
    Square,
    Standard,
    Widescreen,
    Classic,
    Wide,
}

impl AspectRatio {
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }

    /// Landscape ratio as (long side, short side)
    pub fn parts(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Classic => (3, 2),
            AspectRatio::Wide => (16, 10),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Standard => "4:3",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Classic => "3:2",
            AspectRatio::Wide => "16:10",
        }
    }

    pub fn bonus(&self) -> f64 {
        match self {
            AspectRatio::Square => 80.0,
            AspectRatio::Standard | AspectRatio::Widescreen => 60.0,
            AspectRatio::Classic | AspectRatio::Wide => 50.0,
        }
    }

    /// 1:1 is implied by the square tag and never shown on its own
    pub fn is_tagged(&self) -> bool {
        *self != AspectRatio::Square
    }

    /// Whether `aspect` is within tolerance of this ratio in either orientation
    pub fn matches(&self, aspect: f64) -> bool {
        const TOLERANCE: f64 = 0.01;

        let (long, short) = self.parts();
        let landscape = long as f64 / short as f64;
        let portrait = short as f64 / long as f64;
        (aspect - landscape).abs() < TOLERANCE || (aspect - portrait).abs() < TOLERANCE
    }

    /// First ratio in test order that matches `aspect`
    pub fn classify(aspect: f64) -> Option<Self> {
        Self::iter().find(|ratio| ratio.matches(aspect))
    }
}

/// Short label explaining which bonus a candidate earned
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Tag {
    Square,
    PowerOfTwo,
    Aspect(AspectRatio),
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Square => "square",
            Tag::PowerOfTwo => "power-of-2",
            Tag::Aspect(ratio) => ratio.label(),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// At most one tag per scoring rule that can emit one
pub type Tags = ArrayVec<Tag, 3>;

/// Format tags as `"(a, b) "`, or nothing when there are none
pub fn describe_tags(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return String::new();
    }

    let joined = tags.iter().map(Tag::as_str).collect::<Vec<_>>().join(", ");
    format!("({joined}) ")
}

/// A hypothesized image size for a given pixel count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeCandidate {
    pub width: usize,
    pub height: usize,
    pub score: f64,
    pub tags: Tags,
}

impl SizeCandidate {
    /// An unscored candidate
    pub fn new(width: usize, height: usize) -> Self {
        SizeCandidate {
            width,
            height,
            score: 0.0,
            tags: Tags::new(),
        }
    }

    pub fn describe(&self) -> String {
        describe_tags(&crate::score::display_tags(self.width, self.height))
    }
}

impl std::fmt::Display for SizeCandidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}x{} {}[score: {:.1}]",
            self.width,
            self.height,
            self.describe(),
            self.score
        )
    }
}

//! Heuristic desirability of a candidate size
//!
//! Rules are applied in a fixed order and accumulate:
//!
//! ```text
//! square            +100   "square"
//! both powers of 2   +50   "power-of-2"
//! one power of 2     +25   "power-of-2"
//! aspect ratio   +50..+80  first match of 1:1, 4:3, 16:9, 3:2, 16:10
//! 8..=4096 per side  +20
//! aspect > 10 or < 0.1  -50
//! ```
//!
//! A square candidate earns both the square bonus and the 1:1 aspect bonus.

use crate::candidate::{AspectRatio, SizeCandidate, Tag, Tags};

pub const SQUARE_BONUS: f64 = 100.0;
pub const BOTH_POW2_BONUS: f64 = 50.0;
pub const ONE_POW2_BONUS: f64 = 25.0;
pub const PLAUSIBLE_BONUS: f64 = 20.0;
pub const EXTREME_PENALTY: f64 = -50.0;

pub const MIN_PLAUSIBLE_SIDE: usize = 8;
pub const MAX_PLAUSIBLE_SIDE: usize = 4096;
pub const MAX_ASPECT: f64 = 10.0;
pub const MIN_ASPECT: f64 = 0.1;

#[inline]
pub fn is_pow2(n: usize) -> bool {
    n > 0 && (n & (n - 1)) == 0
}

/// Width over height as a real number
#[inline]
pub fn aspect(width: usize, height: usize) -> f64 {
    width as f64 / height as f64
}

fn square(width: usize, height: usize) -> Option<(f64, Tag)> {
    (width == height).then_some((SQUARE_BONUS, Tag::Square))
}

fn power_of_two(width: usize, height: usize) -> Option<(f64, Tag)> {
    match (is_pow2(width), is_pow2(height)) {
        (true, true) => Some((BOTH_POW2_BONUS, Tag::PowerOfTwo)),
        (true, false) | (false, true) => Some((ONE_POW2_BONUS, Tag::PowerOfTwo)),
        (false, false) => None,
    }
}

fn aspect_ratio(aspect: f64) -> Option<(f64, Option<Tag>)> {
    AspectRatio::classify(aspect).map(|ratio| {
        let tag = ratio.is_tagged().then_some(Tag::Aspect(ratio));
        (ratio.bonus(), tag)
    })
}

fn plausible(width: usize, height: usize) -> bool {
    let range = MIN_PLAUSIBLE_SIDE..=MAX_PLAUSIBLE_SIDE;
    range.contains(&width) && range.contains(&height)
}

fn extreme(aspect: f64) -> bool {
    aspect > MAX_ASPECT || aspect < MIN_ASPECT
}

/// Score a `(width, height)` pair and collect the tags of the rules that fired
pub fn score(width: usize, height: usize) -> (f64, Tags) {
    let aspect = aspect(width, height);
    let mut total = 0.0;
    let mut tags = Tags::new();

    if let Some((bonus, tag)) = square(width, height) {
        total += bonus;
        tags.push(tag);
    }

    if let Some((bonus, tag)) = power_of_two(width, height) {
        total += bonus;
        tags.push(tag);
    }

    if let Some((bonus, tag)) = aspect_ratio(aspect) {
        total += bonus;
        tags.extend(tag);
    }

    if plausible(width, height) {
        total += PLAUSIBLE_BONUS;
    }

    if extreme(aspect) {
        total += EXTREME_PENALTY;
    }

    (total, tags)
}

/// Fill in the score and tags of an enumerated candidate
pub fn score_candidate(candidate: &mut SizeCandidate) {
    let (score, tags) = score(candidate.width, candidate.height);
    log::trace!(
        "Scored {}x{}: {score:.1} {tags:?}",
        candidate.width,
        candidate.height
    );
    candidate.score = score;
    candidate.tags = tags;
}

/// Human-facing tags for a size, derived from the tagging rules alone
pub fn display_tags(width: usize, height: usize) -> Tags {
    let mut tags = Tags::new();
    tags.extend(square(width, height).map(|(_, tag)| tag));
    tags.extend(power_of_two(width, height).map(|(_, tag)| tag));
    tags.extend(aspect_ratio(aspect(width, height)).and_then(|(_, tag)| tag));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(tags: &Tags) -> Vec<&'static str> {
        tags.iter().map(Tag::as_str).collect()
    }

    #[test]
    fn pow2() {
        assert!(!is_pow2(0));
        assert!(is_pow2(1));
        assert!(is_pow2(64));
        assert!(!is_pow2(96));
    }

    #[test]
    fn aspect_is_width_over_height() {
        assert_eq!(aspect(16, 9), 16.0 / 9.0);
        assert_eq!(aspect(3, 4), 0.75);
        assert_eq!(aspect(5, 5), 1.0);
    }

    #[test]
    fn square_64_double_counts_aspect() {
        let (score, tags) = score(64, 64);
        // square + both pow2 + 1:1 + plausible
        assert_eq!(score, 250.0);
        assert_eq!(labels(&tags), ["square", "power-of-2"]);
    }

    #[test]
    fn single_pixel() {
        let (score, tags) = score(1, 1);
        assert_eq!(score, 230.0);
        assert_eq!(labels(&tags), ["square", "power-of-2"]);
    }

    #[test]
    fn four_by_three_beats_twelve_by_one() {
        let (small, small_tags) = score(4, 3);
        let (strip, strip_tags) = score(12, 1);
        assert_eq!(small, 85.0);
        assert_eq!(labels(&small_tags), ["power-of-2", "4:3"]);
        // one pow2 (1) then extreme penalty
        assert_eq!(strip, -25.0);
        assert_eq!(labels(&strip_tags), ["power-of-2"]);
        assert!(small > strip);
    }

    #[test]
    fn common_resolutions() {
        let (vga, vga_tags) = score(640, 480);
        assert_eq!(vga, 80.0);
        assert_eq!(labels(&vga_tags), ["4:3"]);
        assert_eq!(score(1920, 1080).0, 80.0);
        assert_eq!(score(1920, 1200).0, 70.0);
        assert_eq!(score(300, 200).0, 70.0);
        assert_eq!(labels(&score(1080, 1920).1), ["16:9"]);
    }

    #[test]
    fn extreme_aspect_penalised() {
        assert_eq!(score(5000, 3).0, -50.0);
        assert_eq!(score(3, 31).0, -50.0);
        // exactly 10:1 is not extreme
        assert_eq!(score(80, 8).0, 45.0);
    }

    #[test]
    fn display_tags_match_scoring_tags() {
        for (w, h) in [(64, 64), (4, 3), (12, 1), (1920, 1200), (1080, 1920), (7, 5)] {
            assert_eq!(display_tags(w, h), score(w, h).1, "{w}x{h}");
        }
    }

    #[test]
    fn scoring_is_pure() {
        let mut a = SizeCandidate::new(320, 200);
        let mut b = SizeCandidate::new(320, 200);
        score_candidate(&mut a);
        score_candidate(&mut b);
        score_candidate(&mut b);
        assert_eq!(a, b);
        assert_eq!(labels(&a.tags), ["16:10"]);
    }
}

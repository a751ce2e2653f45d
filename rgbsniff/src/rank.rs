use std::cmp::Ordering;

use crate::candidate::SizeCandidate;

/// Order candidates by descending score.
///
/// The sort is stable, so equal scores keep their enumeration order.
pub fn rank(mut candidates: Vec<SizeCandidate>) -> Vec<SizeCandidate> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

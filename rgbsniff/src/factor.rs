//! Factor-pair enumeration

use crate::candidate::SizeCandidate;

/// Every `(width, height)` with `width * height == pixel_count`, unscored.
///
/// Divisors are scanned in ascending order up to the integer square root;
/// each hit yields the landscape pair and then, unless square, its
/// transpose. `capacity` stops emission once that many candidates exist.
pub fn enumerate(pixel_count: usize, capacity: Option<usize>) -> Vec<SizeCandidate> {
    let capacity = capacity.unwrap_or(usize::MAX);
    let mut candidates = Vec::new();

    let divisors = (1..=pixel_count)
        .take_while(|&i| i.checked_mul(i).is_some_and(|sq| sq <= pixel_count))
        .filter(|&i| pixel_count % i == 0);

    for height in divisors {
        let width = pixel_count / height;
        let pairs = if width == height {
            [Some((width, height)), None]
        } else {
            [Some((width, height)), Some((height, width))]
        };

        for (w, h) in pairs.into_iter().flatten() {
            if candidates.len() >= capacity {
                log::warn!(
                    "Candidate capacity {capacity} reached, stopping enumeration of {pixel_count} pixels"
                );
                return candidates;
            }
            candidates.push(SizeCandidate::new(w, h));
        }
    }

    log::debug!(
        "Found {} factor pairs for {pixel_count} pixels",
        candidates.len()
    );
    candidates
}

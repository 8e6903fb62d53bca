use crate::core::Sample;

/// Index of the sample whose timestamp is closest to `target_time`.
///
/// Bisection over an ascending-by-time slice: the insertion point splits the
/// slice into timestamps `<= target_time` and `> target_time`, and the
/// winner is whichever neighbor is nearer. An exact tie picks the later
/// sample. Targets beyond either end clamp to the first/last index.
///
/// Returns `None` only for an empty slice. O(log n).
#[must_use]
pub fn nearest_index(samples: &[Sample], target_time: f64) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }

    let insertion = samples.partition_point(|sample| sample.time <= target_time);
    if insertion == 0 {
        return Some(0);
    }
    if insertion == samples.len() {
        return Some(samples.len() - 1);
    }

    let left_distance = (target_time - samples[insertion - 1].time).abs();
    let right_distance = (samples[insertion].time - target_time).abs();
    if left_distance < right_distance {
        Some(insertion - 1)
    } else {
        Some(insertion)
    }
}

/// Sample counterpart of [`nearest_index`].
#[must_use]
pub fn nearest_sample(samples: &[Sample], target_time: f64) -> Option<Sample> {
    nearest_index(samples, target_time).map(|index| samples[index])
}

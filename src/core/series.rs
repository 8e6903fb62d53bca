use std::cmp::Ordering;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::Sample;

/// One named, chronologically ordered sample sequence.
///
/// Construction canonicalizes input: non-finite samples are dropped,
/// timestamps are sorted ascending, and duplicate timestamps keep the last
/// occurrence. This enforces the sorted invariant bisection depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    #[must_use]
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Self {
            samples: canonicalize_samples(samples),
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<Sample> {
        self.samples.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Sample> {
        self.samples.last().copied()
    }
}

/// Insertion-ordered collection of named series.
///
/// A dataset is replaced wholesale on regeneration; no incremental mutation
/// of samples exists, so scale domains can be recomputed exactly once per
/// replacement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    series: IndexMap<String, Series>,
}

impl Dataset {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, series: Series) {
        self.series.insert(name.into(), series);
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// True when no series holds any sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.values().all(Series::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Series)> {
        self.series.iter().map(|(name, series)| (name.as_str(), series))
    }

    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &Series)> {
        self.series
            .get_index(index)
            .map(|(name, series)| (name.as_str(), series))
    }

    #[must_use]
    pub fn total_samples(&self) -> usize {
        self.series.values().map(Series::len).sum()
    }

    /// `[min, max]` timestamp extent across every series, or `None` when the
    /// dataset is empty.
    #[must_use]
    pub fn time_extent(&self) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for series in self.series.values() {
            let (Some(first), Some(last)) = (series.first(), series.last()) else {
                continue;
            };
            extent = Some(match extent {
                Some((min, max)) => (min.min(first.time), max.max(last.time)),
                None => (first.time, last.time),
            });
        }
        extent
    }

    /// Highest sample value across every series, or `None` when empty.
    #[must_use]
    pub fn value_max(&self) -> Option<f64> {
        let mut max: Option<f64> = None;
        for series in self.series.values() {
            for sample in series.samples() {
                max = Some(match max {
                    Some(current) => current.max(sample.value),
                    None => sample.value,
                });
            }
        }
        max
    }
}

fn canonicalize_samples(mut samples: Vec<Sample>) -> Vec<Sample> {
    let original_len = samples.len();
    samples.retain(|sample| sample.is_finite());
    samples.sort_by(|a, b| a.time.total_cmp(&b.time));

    let mut deduped: Vec<Sample> = Vec::with_capacity(samples.len());
    let mut duplicate_count = 0_usize;
    for sample in samples {
        if let Some(last) = deduped.last_mut() {
            if sample.time.total_cmp(&last.time) == Ordering::Equal {
                *last = sample;
                duplicate_count += 1;
                continue;
            }
        }
        deduped.push(sample);
    }

    let filtered_count = original_len.saturating_sub(deduped.len() + duplicate_count);
    if filtered_count > 0 || duplicate_count > 0 {
        warn!(
            filtered_count,
            duplicate_count,
            canonical_count = deduped.len(),
            "canonicalized samples on series construction"
        );
    }
    deduped
}

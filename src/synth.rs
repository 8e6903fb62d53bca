//! Synthetic daily closing-price generation.
//!
//! Every generated dataset starts at a fixed epoch and steps forward one
//! day per sample, with values drawn uniformly from a bounded range.
//! Regeneration always produces a whole new [`Dataset`]; nothing is
//! appended or mutated in place.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Dataset, Sample, Series};
use crate::error::{ChartError, ChartResult};

/// 2007-04-24T00:00:00Z, the first trading day of the reference dataset.
const EPOCH_UNIX_SECONDS: f64 = 1_177_372_800.0;
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Controls for synthetic dataset generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    /// Number of independent series per generated dataset.
    pub series_count: usize,
    /// Inclusive lower bound of generated closing prices.
    pub value_min: f64,
    /// Exclusive upper bound of generated closing prices.
    pub value_max: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            series_count: 1,
            value_min: 25.0,
            value_max: 100.0,
        }
    }
}

impl SyntheticConfig {
    pub fn validate(self) -> ChartResult<Self> {
        if self.series_count == 0 {
            return Err(ChartError::InvalidData(
                "synthetic series count must be >= 1".to_owned(),
            ));
        }
        if !self.value_min.is_finite() || !self.value_max.is_finite() {
            return Err(ChartError::InvalidData(
                "synthetic value bounds must be finite".to_owned(),
            ));
        }
        if self.value_min < 0.0 || self.value_min >= self.value_max {
            return Err(ChartError::InvalidData(
                "synthetic value bounds must satisfy 0 <= min < max".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Generates a dataset with `sample_count` daily samples per series using a
/// thread-local RNG.
pub fn generate_dataset(config: SyntheticConfig, sample_count: usize) -> ChartResult<Dataset> {
    let mut rng = rand::thread_rng();
    generate_with_rng(config, sample_count, &mut rng)
}

/// Deterministic variant of [`generate_dataset`] for reproducible datasets.
pub fn generate_dataset_seeded(
    config: SyntheticConfig,
    sample_count: usize,
    seed: u64,
) -> ChartResult<Dataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(config, sample_count, &mut rng)
}

fn generate_with_rng<R: Rng>(
    config: SyntheticConfig,
    sample_count: usize,
    rng: &mut R,
) -> ChartResult<Dataset> {
    let config = config.validate()?;
    if sample_count == 0 {
        return Err(ChartError::InvalidData(
            "synthetic sample count must be >= 1".to_owned(),
        ));
    }

    let mut dataset = Dataset::new();
    for series_index in 0..config.series_count {
        let mut samples = Vec::with_capacity(sample_count);
        for day in 0..sample_count {
            let time = EPOCH_UNIX_SECONDS + day as f64 * SECONDS_PER_DAY;
            let value = rng.gen_range(config.value_min..config.value_max);
            samples.push(Sample::new(time, value));
        }
        // Generated samples are already ascending; canonicalization is a
        // no-op here but keeps the sorted invariant in one place.
        dataset.insert(format!("series-{series_index}"), Series::from_samples(samples));
    }

    debug!(
        series_count = config.series_count,
        sample_count, "generated synthetic dataset"
    );
    Ok(dataset)
}

use tracing::{debug, warn};

use crate::core::{Dataset, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;
use crate::synth;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the active dataset wholesale.
    ///
    /// Both scales are fitted to the incoming dataset before anything is
    /// committed, so a rejected dataset (for example one whose maximum value
    /// is not positive) leaves the prior dataset and scales untouched. On
    /// success the replacement is atomic from the resolver's point of view:
    /// dataset and scales swap together, and any tooltip snap is dropped
    /// since it may point into the prior dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) -> ChartResult<()> {
        let fitted = fit_scales(&dataset, self.headroom_ratio)?;
        debug!(
            series_count = dataset.series_count(),
            total_samples = dataset.total_samples(),
            "set dataset"
        );

        self.dataset = dataset;
        self.interaction.set_tooltip_snap(None);
        match fitted {
            Some((time_scale, value_scale)) => {
                self.time_scale = Some(time_scale);
                self.value_scale = Some(value_scale);
            }
            None => {
                self.time_scale = None;
                self.value_scale = None;
                warn!("dataset is empty; scales cleared and pointer interaction disabled");
            }
        }
        Ok(())
    }

    /// Replaces the dataset with a freshly generated synthetic one of
    /// `sample_count` daily samples per configured series.
    pub fn regenerate(&mut self, sample_count: usize) -> ChartResult<()> {
        let dataset = synth::generate_dataset(self.synthetic, sample_count)?;
        self.set_dataset(dataset)
    }

    /// Deterministic variant of [`ChartEngine::regenerate`].
    pub fn regenerate_seeded(&mut self, sample_count: usize, seed: u64) -> ChartResult<()> {
        let dataset = synth::generate_dataset_seeded(self.synthetic, sample_count, seed)?;
        self.set_dataset(dataset)
    }
}

/// Fits both scales to a candidate dataset without touching engine state.
///
/// `Ok(None)` means the dataset is empty and the engine should run without
/// scales; any scale construction failure rejects the dataset as a whole.
fn fit_scales(
    dataset: &Dataset,
    headroom_ratio: f64,
) -> ChartResult<Option<(TimeScale, ValueScale)>> {
    if dataset.is_empty() {
        return Ok(None);
    }

    let Some((time_min, time_max)) = dataset.time_extent() else {
        return Err(ChartError::InvalidData(
            "non-empty dataset produced no time extent".to_owned(),
        ));
    };
    let Some(value_max) = dataset.value_max() else {
        return Err(ChartError::InvalidData(
            "non-empty dataset produced no value maximum".to_owned(),
        ));
    };

    let time_scale = TimeScale::new(time_min, time_max)?;
    let value_scale = ValueScale::from_value_max(value_max, headroom_ratio)?;
    Ok(Some((time_scale, value_scale)))
}

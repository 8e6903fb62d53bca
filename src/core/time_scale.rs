use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Sample, Viewport};
use crate::error::{ChartError, ChartResult};

/// Time axis model fitted to the timestamp extent of the active dataset.
///
/// Mapping is defined over `[0, plot width]`; inversion is order-preserving,
/// so `pixel_to_time` can feed nearest-sample bisection directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
}

impl TimeScale {
    /// Creates a scale over an explicit time range.
    ///
    /// A degenerate range (single distinct timestamp) is widened by one
    /// second so single-sample datasets still map.
    pub fn new(time_start: f64, time_end: f64) -> ChartResult<Self> {
        let (domain_start, domain_end) = normalize_range(time_start, time_end, 1.0)?;
        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Fits the scale to the `[min, max]` timestamp extent of `samples`.
    ///
    /// An empty slice is rejected: callers must guard before building scales
    /// (the engine disables pointer interaction instead).
    pub fn from_samples(samples: &[Sample]) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for sample in samples {
            if !sample.time.is_finite() {
                return Err(ChartError::InvalidData(
                    "sample times must be finite".to_owned(),
                ));
            }
            min = min.min(sample.time);
            max = max.max(sample.time);
        }

        if min > max {
            return Err(ChartError::InvalidData(
                "time scale cannot be built from empty data".to_owned(),
            ));
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn time_to_pixel(self, time: f64, viewport: Viewport) -> ChartResult<f64> {
        validate_viewport(viewport)?;
        self.linear()?.to_pixel(time, f64::from(viewport.width))
    }

    pub fn pixel_to_time(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        validate_viewport(viewport)?;
        self.linear()?.from_pixel(pixel, f64::from(viewport.width))
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(self.domain_start, self.domain_end)
    }
}

fn validate_viewport(viewport: Viewport) -> ChartResult<()> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

fn normalize_range(start: f64, end: f64, min_span: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = min_span / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}

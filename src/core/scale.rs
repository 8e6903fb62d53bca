use crate::error::{ChartError, ChartResult};

/// Pure bidirectional linear mapping between a data domain and a pixel range.
///
/// The pixel range always starts at zero; axis-specific orientation (such as
/// the inverted value axis) is applied by the wrapping scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-degenerate".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps a domain value into `[0, range_px]`.
    pub fn to_pixel(self, value: f64, range_px: f64) -> ChartResult<f64> {
        validate_range_px(range_px)?;
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        Ok(normalized * range_px)
    }

    /// Inverse of [`LinearScale::to_pixel`].
    pub fn from_pixel(self, pixel: f64, range_px: f64) -> ChartResult<f64> {
        validate_range_px(range_px)?;
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = pixel / range_px;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}

fn validate_range_px(range_px: f64) -> ChartResult<()> {
    if !range_px.is_finite() || range_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "pixel range must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

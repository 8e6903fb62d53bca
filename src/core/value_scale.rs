use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Viewport};
use crate::error::{ChartError, ChartResult};

/// Value axis mapped onto an inverted Y pixel axis.
///
/// The domain is `[0, domain_max]` and the pixel range is `[height, 0]`, so
/// larger values plot higher. `domain_max` already includes any configured
/// headroom above the dataset maximum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_max: f64) -> ChartResult<Self> {
        if !domain_max.is_finite() || domain_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale maximum must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { domain_max })
    }

    /// Fits the domain to a dataset maximum plus a headroom ratio.
    ///
    /// `headroom_ratio` of `0.1` reserves 10% of the plot above the highest
    /// sample; `0.0` pins the maximum to the top edge.
    pub fn from_value_max(value_max: f64, headroom_ratio: f64) -> ChartResult<Self> {
        if !headroom_ratio.is_finite() || headroom_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        if !value_max.is_finite() || value_max <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale cannot be fitted to a non-positive maximum".to_owned(),
            ));
        }
        Self::new(value_max * (1.0 + headroom_ratio))
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (0.0, self.domain_max)
    }

    /// Maps a value to pixel Y; `0` lands on the bottom edge, `domain_max`
    /// on the top edge.
    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        validate_viewport(viewport)?;
        let height = f64::from(viewport.height);
        let mapped = self.linear()?.to_pixel(value, height)?;
        Ok(height - mapped)
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        validate_viewport(viewport)?;
        let height = f64::from(viewport.height);
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }
        self.linear()?.from_pixel(height - pixel, height)
    }

    fn linear(self) -> ChartResult<LinearScale> {
        LinearScale::new(0.0, self.domain_max)
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

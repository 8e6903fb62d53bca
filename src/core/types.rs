use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Plot-area size in pixels, after margins are subtracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins between the drawing canvas edge and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 60,
            bottom: 60,
            left: 80,
            right: 80,
        }
    }
}

/// Full drawing-canvas geometry: outer size plus configurable margins.
///
/// Scales and pointer coordinates operate in the inner plot space returned
/// by [`ChartLayout::plot_viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub margins: Margins,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(900, 400)
    }
}

impl ChartLayout {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margins: Margins::default(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Derives the inner plot viewport, rejecting layouts whose margins
    /// consume the whole canvas.
    pub fn plot_viewport(self) -> ChartResult<Viewport> {
        let horizontal = self.margins.left.saturating_add(self.margins.right);
        let vertical = self.margins.top.saturating_add(self.margins.bottom);
        if self.width <= horizontal || self.height <= vertical {
            return Err(ChartError::InvalidData(format!(
                "chart margins leave no plot area ({}x{} canvas)",
                self.width, self.height
            )));
        }

        let viewport = Viewport::new(self.width - horizontal, self.height - vertical);
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(viewport)
    }
}

/// One observed closing price at a point in time.
///
/// `time` is Unix seconds; sequences of samples must be ascending by time
/// for nearest-sample bisection to hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self::new(time.timestamp() as f64, value)
    }

    /// Recovers the sample timestamp as a UTC datetime when it fits the
    /// representable chrono range.
    #[must_use]
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        if !self.time.is_finite() {
            return None;
        }
        DateTime::from_timestamp(self.time as i64, 0)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.time.is_finite() && self.value.is_finite()
    }
}

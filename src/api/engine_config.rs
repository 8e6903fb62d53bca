use serde::{Deserialize, Serialize};

use crate::core::ChartLayout;
use crate::error::{ChartError, ChartResult};
use crate::synth::SyntheticConfig;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub layout: ChartLayout,
    /// Fraction of the plot height reserved above the highest sample.
    #[serde(default)]
    pub headroom_ratio: f64,
    #[serde(default = "default_synthetic_config")]
    pub synthetic: SyntheticConfig,
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ChartLayout::default())
    }
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            layout,
            headroom_ratio: 0.0,
            synthetic: default_synthetic_config(),
        }
    }

    #[must_use]
    pub fn with_headroom_ratio(mut self, headroom_ratio: f64) -> Self {
        self.headroom_ratio = headroom_ratio;
        self
    }

    #[must_use]
    pub fn with_synthetic_config(mut self, synthetic: SyntheticConfig) -> Self {
        self.synthetic = synthetic;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.layout.plot_viewport()?;
        if !self.headroom_ratio.is_finite() || self.headroom_ratio < 0.0 {
            return Err(ChartError::InvalidData(
                "headroom ratio must be finite and >= 0".to_owned(),
            ));
        }
        self.synthetic.validate()?;
        Ok(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_synthetic_config() -> SyntheticConfig {
    SyntheticConfig::default()
}

use crate::core::{ChartLayout, Dataset, TimeScale, ValueScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, TooltipState};
use crate::render::Renderer;
use crate::synth::SyntheticConfig;

use super::ChartEngineConfig;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the active dataset, both axis scales, tooltip state,
/// and the renderer. Scales exist only while the dataset is non-empty; the
/// engine recomputes them on every wholesale dataset replacement.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) layout: ChartLayout,
    pub(super) plot: Viewport,
    pub(super) headroom_ratio: f64,
    pub(super) synthetic: SyntheticConfig,
    pub(super) dataset: Dataset,
    pub(super) time_scale: Option<TimeScale>,
    pub(super) value_scale: Option<ValueScale>,
    pub(super) interaction: InteractionState,
}

impl<R: Renderer> ChartEngine<R> {
    /// Creates an engine with an empty dataset.
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let plot = config.layout.plot_viewport()?;

        Ok(Self {
            renderer,
            layout: config.layout,
            plot,
            headroom_ratio: config.headroom_ratio,
            synthetic: config.synthetic,
            dataset: Dataset::new(),
            time_scale: None,
            value_scale: None,
            interaction: InteractionState::default(),
        })
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn plot_viewport(&self) -> Viewport {
        self.plot
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// True once a non-empty dataset is installed and pointer interaction
    /// is enabled.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.dataset.is_empty()
    }

    #[must_use]
    pub fn tooltip_state(&self) -> TooltipState {
        self.interaction.tooltip()
    }

    pub fn map_time_to_pixel(&self, time: f64) -> ChartResult<f64> {
        self.require_time_scale()?.time_to_pixel(time, self.plot)
    }

    pub fn map_pixel_to_time(&self, pixel: f64) -> ChartResult<f64> {
        self.require_time_scale()?.pixel_to_time(pixel, self.plot)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.require_value_scale()?.value_to_pixel(value, self.plot)
    }

    pub fn map_pixel_to_value(&self, pixel: f64) -> ChartResult<f64> {
        self.require_value_scale()?.pixel_to_value(pixel, self.plot)
    }

    pub fn time_domain(&self) -> ChartResult<(f64, f64)> {
        Ok(self.require_time_scale()?.domain())
    }

    pub fn value_domain(&self) -> ChartResult<(f64, f64)> {
        Ok(self.require_value_scale()?.domain())
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn require_time_scale(&self) -> ChartResult<TimeScale> {
        self.time_scale.ok_or_else(|| {
            ChartError::InvalidData("time scale requires a non-empty dataset".to_owned())
        })
    }

    pub(super) fn require_value_scale(&self) -> ChartResult<ValueScale> {
        self.value_scale.ok_or_else(|| {
            ChartError::InvalidData("value scale requires a non-empty dataset".to_owned())
        })
    }
}

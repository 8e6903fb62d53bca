use ordered_float::OrderedFloat;
use smallvec::SmallVec;
use tracing::trace;

use crate::core::nearest_sample;
use crate::interaction::TooltipSnap;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Recomputes tooltip state for a pointer position in plot-space pixels.
    ///
    /// Lookup uses the x-coordinate alone; `y` only positions the cursor.
    /// While the dataset is empty the event is ignored and the tooltip stays
    /// hidden. The whole update is synchronous: tooltip state is final when
    /// this returns.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.dataset.is_empty() {
            trace!("pointer move ignored: empty dataset");
            return;
        }

        self.interaction.on_pointer_move(x, y);
        let snap = self.snap_at_x(x);
        self.interaction.set_tooltip_snap(snap);
    }

    /// Hides the tooltip and clears any snap.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Resolves the sample nearest to a pointer x-coordinate across every
    /// series.
    ///
    /// Each series contributes its own bisection winner; candidates then
    /// compete on absolute time distance. Equal distances keep the
    /// first-inserted series, so resolution is deterministic.
    fn snap_at_x(&self, pointer_x: f64) -> Option<TooltipSnap> {
        let time_scale = self.time_scale?;
        let value_scale = self.value_scale?;
        let target_time = time_scale.pixel_to_time(pointer_x, self.plot).ok()?;

        let mut candidates: SmallVec<[(OrderedFloat<f64>, TooltipSnap); 4]> = SmallVec::new();
        for (series_index, (_, series)) in self.dataset.iter().enumerate() {
            let Some(sample) = nearest_sample(series.samples(), target_time) else {
                continue;
            };
            let Ok(x) = time_scale.time_to_pixel(sample.time, self.plot) else {
                continue;
            };
            let Ok(y) = value_scale.value_to_pixel(sample.value, self.plot) else {
                continue;
            };
            candidates.push((
                OrderedFloat((sample.time - target_time).abs()),
                TooltipSnap {
                    x,
                    y,
                    time: sample.time,
                    value: sample.value,
                    series_index,
                },
            ));
        }

        candidates
            .into_iter()
            .min_by_key(|candidate| candidate.0)
            .map(|(_, snap)| snap)
    }
}

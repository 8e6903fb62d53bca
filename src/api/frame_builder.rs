use chrono::DateTime;

use crate::error::ChartResult;
use crate::render::{
    AreaPrimitive, Color, LinePrimitive, MarkerPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

const AXIS_COLOR: Color = Color::rgb(0.35, 0.35, 0.35);
const GUIDE_COLOR: Color = Color::rgba(0.25, 0.25, 0.25, 0.6);
const MARKER_COLOR: Color = Color::rgb(0.1, 0.1, 0.1);
const LABEL_COLOR: Color = Color::rgb(0.15, 0.15, 0.15);

const SERIES_FILLS: [Color; 4] = [
    Color::rgba(0.86, 0.24, 0.24, 0.75),
    Color::rgba(0.22, 0.47, 0.85, 0.75),
    Color::rgba(0.24, 0.68, 0.37, 0.75),
    Color::rgba(0.91, 0.64, 0.15, 0.75),
];

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Builds the backend-agnostic scene for the current dataset and
    /// tooltip state.
    ///
    /// Each non-empty series becomes one closed area polygon; an empty
    /// dataset yields a frame with axis lines only.
    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let width = f64::from(self.plot.width);
        let height = f64::from(self.plot.height);

        let mut frame = RenderFrame::new(self.plot)
            .with_line(LinePrimitive::new(0.0, height, width, height, 1.0, AXIS_COLOR))
            .with_line(LinePrimitive::new(0.0, 0.0, 0.0, height, 1.0, AXIS_COLOR));

        if self.dataset.is_empty() {
            return Ok(frame);
        }

        let time_scale = self.require_time_scale()?;
        let value_scale = self.require_value_scale()?;

        for (series_index, (_, series)) in self.dataset.iter().enumerate() {
            if series.is_empty() {
                continue;
            }

            let mut points = Vec::with_capacity(series.len() + 2);
            for sample in series.samples() {
                let x = time_scale.time_to_pixel(sample.time, self.plot)?;
                let y = value_scale.value_to_pixel(sample.value, self.plot)?;
                points.push((x, y));
            }

            // Close the polygon down to the baseline under the first and
            // last sample.
            let first_x = points[0].0;
            let last_x = points[points.len() - 1].0;
            points.push((last_x, height));
            points.push((first_x, height));

            frame = frame.with_area(AreaPrimitive::new(points, series_fill(series_index)));
        }

        let tooltip = self.interaction.tooltip();
        if tooltip.visible {
            if let Some(snap) = tooltip.snap {
                frame = frame
                    .with_line(LinePrimitive::new(snap.x, 0.0, snap.x, height, 1.0, GUIDE_COLOR))
                    .with_marker(MarkerPrimitive::new(snap.x, snap.y, 4.0, MARKER_COLOR))
                    .with_text(TextPrimitive::new(
                        tooltip_label(snap.time, snap.value),
                        snap.x,
                        (snap.y - 14.0).max(0.0),
                        12.0,
                        LABEL_COLOR,
                        TextHAlign::Center,
                    ));
            }
        }

        Ok(frame)
    }
}

fn series_fill(series_index: usize) -> Color {
    SERIES_FILLS[series_index % SERIES_FILLS.len()]
}

fn tooltip_label(time: f64, value: f64) -> String {
    match DateTime::from_timestamp(time as i64, 0) {
        Some(datetime) => format!("{value:.2} @ {}", datetime.format("%Y-%m-%d")),
        None => format!("{value:.2} @ t={time}"),
    }
}

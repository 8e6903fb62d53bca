use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{AreaPrimitive, LinePrimitive, MarkerPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub areas: Vec<AreaPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            areas: Vec::new(),
            lines: Vec::new(),
            markers: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_area(mut self, area: AreaPrimitive) -> Self {
        self.areas.push(area);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for area in &self.areas {
            area.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
            && self.lines.is_empty()
            && self.markers.is_empty()
            && self.texts.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Resolved nearest sample plus its pixel projection through both scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSnap {
    pub x: f64,
    pub y: f64,
    pub time: f64,
    pub value: f64,
    pub series_index: usize,
}

/// Ephemeral tooltip state exposed to host applications.
///
/// Created on pointer movement and cleared on pointer exit; the snap is
/// always dropped when the dataset it pointed into is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub snap: Option<TooltipSnap>,
}

impl Default for TooltipState {
    fn default() -> Self {
        Self {
            visible: false,
            x: 0.0,
            y: 0.0,
            snap: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    cursor_x: f64,
    cursor_y: f64,
    tooltip: TooltipState,
}

impl InteractionState {
    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn tooltip(self) -> TooltipState {
        self.tooltip
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.tooltip.visible = true;
        self.tooltip.x = x;
        self.tooltip.y = y;
    }

    pub fn on_pointer_leave(&mut self) {
        self.tooltip.visible = false;
        self.tooltip.snap = None;
    }

    pub fn set_tooltip_snap(&mut self, snap: Option<TooltipSnap>) {
        self.tooltip.snap = snap;
    }
}

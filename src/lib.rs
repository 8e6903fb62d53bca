//! areachart-rs: headless engine for interactive stock-price area charts.
//!
//! The crate keeps chart math (scales, nearest-sample lookup, synthetic
//! data) separate from drawing: backends consume deterministic
//! [`render::RenderFrame`] scenes through the [`render::Renderer`] trait.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod synth;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};

mod data_controller;
mod engine;
mod engine_config;
mod frame_builder;
mod interaction_controller;

pub use engine::ChartEngine;
pub use engine_config::ChartEngineConfig;

//! gradeline_engine - Score normalization, metrics and chart data.

pub mod engine;
pub mod plot;

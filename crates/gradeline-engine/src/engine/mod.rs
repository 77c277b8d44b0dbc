//! Score engine API.
//!
//! This module provides the pure computation behind the dashboard:
//!
//! - [`RawCell`] - A spreadsheet value as read from disk
//! - [`Value`] - A normalized score (`Number` or `Missing`)
//! - [`normalize`] - Locale-aware number parsing
//! - [`build_metrics`] - Period-over-period deltas for one group
//! - [`format_number`], [`format_label`], [`format_tooltip`] - Display strings

mod cell;
mod format;
mod metrics;
mod number;
mod value;

pub use cell::RawCell;
pub use format::{
    MISSING_PLACEHOLDER, format_label, format_number, format_score, format_signed,
    format_tooltip,
};
pub use metrics::{LongRow, MetricRow, build_metrics};
pub use number::{normalize, normalize_str};
pub use value::Value;

//! Typed builders for ECharts-style chart option documents.
//!
//! Every builder in [`options`] renders to a [`serde_json::Value`] whose keys
//! follow the renderer's option schema. Builders never fail and do not
//! validate values; the renderer is expected to tolerate `null` fields.

pub mod config;
pub mod error;
pub mod options;

pub use error::{ChartOptsError, Result};
pub use options::OptionBuilder;

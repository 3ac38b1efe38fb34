//! Option builders for the chart option document.
//!
//! Each builder covers one visual concern and renders to a mapping whose key
//! names follow the renderer's option schema. Nested style parameters accept
//! either a typed builder or a raw [`serde_json::Value`] (see [`OptsInput`]).

/// Implements `From<Builder> for OptsInput<Builder>` for typed inputs.
macro_rules! impl_typed_input {
    ($($builder:ty),* $(,)?) => {
        $(
            impl From<$builder> for $crate::options::OptsInput<$builder> {
                fn from(builder: $builder) -> Self {
                    Self::Typed(builder)
                }
            }
        )*
    };
}

mod axis;
mod calendar;
mod data_zoom;
mod document;
mod globals;
mod grid;
mod init;
mod legend;
mod normalize;
mod parallel;
mod radar;
mod series;
mod title;
mod toolbox;
mod tooltip;
mod value;
mod visual_map;

use serde_json::Value;

pub use axis::{AxisOpts, SingleAxisOpts};
pub use calendar::CalendarOpts;
pub use data_zoom::DataZoomOpts;
pub use document::{ChartOptions, GlobalOpts};
pub use globals::{RenderType, ThemeType};
pub use grid::{Axis3DOpts, Grid3DOpts, GridOpts};
pub use init::InitOpts;
pub use legend::LegendOpts;
pub use normalize::OptsInput;
pub use parallel::{ParallelAxisOpts, ParallelOpts};
pub use radar::RadarIndicatorOpts;
pub use series::{LabelOpts, LineStyleOpts, SplitLineOpts, TextStyleOpts};
pub use title::TitleOpts;
pub use toolbox::{ToolBoxFeatureOpts, ToolboxOpts};
pub use tooltip::TooltipOpts;
pub use value::Numeric;
pub use visual_map::VisualMapOpts;

/// A builder that renders to a renderer-facing option mapping.
pub trait OptionBuilder {
    /// The option mapping, with every schema key present (`null` when unset).
    fn opts(&self) -> Value;
}

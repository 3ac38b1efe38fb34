use serde_json::{Value, json};

use super::{Numeric, OptionBuilder};

/// Data zoom component (`dataZoom`), a slider by default.
#[derive(Debug, Clone, PartialEq)]
pub struct DataZoomOpts {
    is_show: bool,
    type_: String,
    range_start: Numeric,
    range_end: Numeric,
    orient: String,
    xaxis_index: i64,
    yaxis_index: i64,
}

impl Default for DataZoomOpts {
    fn default() -> Self {
        Self {
            is_show: true,
            type_: "slider".to_string(),
            range_start: Numeric::Int(20),
            range_end: Numeric::Int(80),
            orient: "horizontal".to_string(),
            xaxis_index: 0,
            yaxis_index: 0,
        }
    }
}

impl DataZoomOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
        self
    }

    /// `slider` or `inside`.
    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    /// Start of the window, in percent.
    #[must_use]
    pub fn range_start(mut self, range_start: impl Into<Numeric>) -> Self {
        self.range_start = range_start.into();
        self
    }

    /// End of the window, in percent.
    #[must_use]
    pub fn range_end(mut self, range_end: impl Into<Numeric>) -> Self {
        self.range_end = range_end.into();
        self
    }

    #[must_use]
    pub fn orient(mut self, orient: impl Into<String>) -> Self {
        self.orient = orient.into();
        self
    }

    #[must_use]
    pub const fn xaxis_index(mut self, xaxis_index: i64) -> Self {
        self.xaxis_index = xaxis_index;
        self
    }

    #[must_use]
    pub const fn yaxis_index(mut self, yaxis_index: i64) -> Self {
        self.yaxis_index = yaxis_index;
        self
    }
}

impl OptionBuilder for DataZoomOpts {
    fn opts(&self) -> Value {
        json!({
            "show": self.is_show,
            "type": self.type_,
            "start": self.range_start,
            "end": self.range_end,
            "orient": self.orient,
            "xAxisIndex": self.xaxis_index,
            "yAxisIndex": self.yaxis_index,
        })
    }
}

#[cfg(test)]
#[path = "data_zoom_tests.rs"]
mod tests;

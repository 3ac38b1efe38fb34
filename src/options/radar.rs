use serde_json::{Value, json};

use super::{Numeric, OptionBuilder};

/// One radar indicator (`radar.indicator` entry).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarIndicatorOpts {
    name: Option<String>,
    min: Option<Numeric>,
    max: Option<Numeric>,
    color: Option<String>,
}

impl RadarIndicatorOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<Numeric>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<Numeric>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl OptionBuilder for RadarIndicatorOpts {
    fn opts(&self) -> Value {
        json!({
            "name": self.name,
            "max": self.max,
            "min": self.min,
            "color": self.color,
        })
    }
}

#[cfg(test)]
#[path = "radar_tests.rs"]
mod tests;

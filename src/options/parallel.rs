//! Parallel coordinates: the container and its per-dimension axes.

use serde_json::{Value, json};

use super::{Numeric, OptionBuilder};

/// Parallel coordinate system (`parallel`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelOpts {
    pos_left: String,
    pos_right: String,
    pos_bottom: String,
    pos_top: String,
    layout: Option<String>,
}

impl Default for ParallelOpts {
    fn default() -> Self {
        Self {
            pos_left: "5%".to_string(),
            pos_right: "13%".to_string(),
            pos_bottom: "10%".to_string(),
            pos_top: "20%".to_string(),
            layout: None,
        }
    }
}

impl ParallelOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pos_left(mut self, pos_left: impl Into<String>) -> Self {
        self.pos_left = pos_left.into();
        self
    }

    #[must_use]
    pub fn pos_right(mut self, pos_right: impl Into<String>) -> Self {
        self.pos_right = pos_right.into();
        self
    }

    #[must_use]
    pub fn pos_bottom(mut self, pos_bottom: impl Into<String>) -> Self {
        self.pos_bottom = pos_bottom.into();
        self
    }

    #[must_use]
    pub fn pos_top(mut self, pos_top: impl Into<String>) -> Self {
        self.pos_top = pos_top.into();
        self
    }

    /// `horizontal` or `vertical`.
    #[must_use]
    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }
}

impl OptionBuilder for ParallelOpts {
    fn opts(&self) -> Value {
        json!({
            "left": self.pos_left,
            "right": self.pos_right,
            "bottom": self.pos_bottom,
            "top": self.pos_top,
            "layout": self.layout,
        })
    }
}

/// One dimension of a parallel coordinate system (`parallelAxis` entry).
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelAxisOpts {
    dim: Numeric,
    name: String,
    data: Option<Vec<Value>>,
    type_: Option<String>,
    min: Option<Value>,
    max: Option<Value>,
    is_scale: bool,
}

impl ParallelAxisOpts {
    /// Axis for dimension `dim`, labelled `name`.
    #[must_use]
    pub fn new(dim: impl Into<Numeric>, name: impl Into<String>) -> Self {
        Self {
            dim: dim.into(),
            name: name.into(),
            data: None,
            type_: None,
            min: None,
            max: None,
            is_scale: false,
        }
    }

    #[must_use]
    pub fn data<I, V>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.data = Some(data.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub const fn scale(mut self, is_scale: bool) -> Self {
        self.is_scale = is_scale;
        self
    }
}

impl OptionBuilder for ParallelAxisOpts {
    fn opts(&self) -> Value {
        json!({
            "dim": self.dim,
            "name": self.name,
            "data": self.data,
            "type": self.type_,
            "min": self.min,
            "max": self.max,
            "scale": self.is_scale,
        })
    }
}

#[cfg(test)]
#[path = "parallel_tests.rs"]
mod tests;

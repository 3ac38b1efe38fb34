//! Visual map component, continuous or piecewise.

use serde_json::{Map, Value, json};
use tracing::debug;

use super::{Numeric, OptionBuilder, OptsInput, TextStyleOpts};

const DEFAULT_RANGE_COLOR: [&str; 3] = ["#50a3ba", "#eac763", "#d94e5d"];
const DEFAULT_RANGE_SIZE: [i64; 2] = [20, 50];

/// Visual map component (`visualMap`).
///
/// `type_` selects which visual channel is mapped: `"color"` fills
/// `inRange.color`, `"size"` fills `inRange.symbolSize`. Anything else leaves
/// `inRange` empty.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualMapOpts {
    type_: String,
    min: Numeric,
    max: Numeric,
    range_text: Option<Vec<String>>,
    range_color: Option<Vec<String>>,
    range_size: Option<Vec<Numeric>>,
    orient: String,
    pos_left: String,
    pos_top: String,
    split_number: i64,
    dimension: Option<Value>,
    is_calculable: bool,
    is_piecewise: bool,
    pieces: Option<Value>,
    textstyle_opts: OptsInput<TextStyleOpts>,
}

impl Default for VisualMapOpts {
    fn default() -> Self {
        Self {
            type_: "color".to_string(),
            min: Numeric::Int(0),
            max: Numeric::Int(100),
            range_text: None,
            range_color: None,
            range_size: None,
            orient: "vertical".to_string(),
            pos_left: "left".to_string(),
            pos_top: "bottom".to_string(),
            split_number: 5,
            dimension: None,
            is_calculable: true,
            is_piecewise: false,
            pieces: None,
            textstyle_opts: OptsInput::none(),
        }
    }
}

impl VisualMapOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `"color"` or `"size"`.
    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<Numeric>) -> Self {
        self.min = min.into();
        self
    }

    #[must_use]
    pub fn max(mut self, max: impl Into<Numeric>) -> Self {
        self.max = max.into();
        self
    }

    /// Labels at the high and low ends, e.g. `["High", "Low"]`.
    #[must_use]
    pub fn range_text<I, S>(mut self, range_text: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.range_text = Some(range_text.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn range_color<I, S>(mut self, range_color: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.range_color = Some(range_color.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn range_size<I, N>(mut self, range_size: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Numeric>,
    {
        self.range_size = Some(range_size.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn orient(mut self, orient: impl Into<String>) -> Self {
        self.orient = orient.into();
        self
    }

    #[must_use]
    pub fn pos_left(mut self, pos_left: impl Into<String>) -> Self {
        self.pos_left = pos_left.into();
        self
    }

    #[must_use]
    pub fn pos_top(mut self, pos_top: impl Into<String>) -> Self {
        self.pos_top = pos_top.into();
        self
    }

    #[must_use]
    pub const fn split_number(mut self, split_number: i64) -> Self {
        self.split_number = split_number;
        self
    }

    /// Data dimension the map applies to.
    #[must_use]
    pub fn dimension(mut self, dimension: impl Into<Value>) -> Self {
        self.dimension = Some(dimension.into());
        self
    }

    #[must_use]
    pub const fn calculable(mut self, is_calculable: bool) -> Self {
        self.is_calculable = is_calculable;
        self
    }

    #[must_use]
    pub const fn piecewise(mut self, is_piecewise: bool) -> Self {
        self.is_piecewise = is_piecewise;
        self
    }

    /// Custom pieces; only rendered for a piecewise map.
    #[must_use]
    pub fn pieces(mut self, pieces: impl Into<Value>) -> Self {
        self.pieces = Some(pieces.into());
        self
    }

    #[must_use]
    pub fn textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.textstyle_opts = opts.into();
        self
    }

    fn in_range(&self) -> Value {
        let mut in_range = Map::new();
        match self.type_.as_str() {
            "color" => {
                let colors = match &self.range_color {
                    Some(colors) if !colors.is_empty() => json!(colors),
                    _ => json!(DEFAULT_RANGE_COLOR),
                };
                in_range.insert("color".to_string(), colors);
            }
            "size" => {
                let sizes = match &self.range_size {
                    Some(sizes) if !sizes.is_empty() => json!(sizes),
                    _ => json!(DEFAULT_RANGE_SIZE),
                };
                in_range.insert("symbolSize".to_string(), sizes);
            }
            other => {
                debug!(visual_type = other, "Unknown visual map type, inRange left empty");
            }
        }
        Value::Object(in_range)
    }
}

impl OptionBuilder for VisualMapOpts {
    fn opts(&self) -> Value {
        let visual_type = if self.is_piecewise {
            "piecewise"
        } else {
            "continuous"
        };

        let mut opts = json!({
            "type": visual_type,
            "min": self.min,
            "max": self.max,
            "text": self.range_text,
            "textStyle": self.textstyle_opts.to_opts(),
            "inRange": self.in_range(),
            "calculable": self.is_calculable,
            "splitNumber": self.split_number,
            "dimension": self.dimension,
            "orient": self.orient,
            "left": self.pos_left,
            "top": self.pos_top,
            "showLabel": true,
        });
        if self.is_piecewise
            && let Some(map) = opts.as_object_mut()
        {
            map.insert(
                "pieces".to_string(),
                self.pieces.clone().unwrap_or(Value::Null),
            );
        }
        opts
    }
}

#[cfg(test)]
#[path = "visual_map_tests.rs"]
mod tests;

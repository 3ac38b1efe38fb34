//! Cartesian and single axes.

use serde_json::{Value, json};

use super::{LineStyleOpts, Numeric, OptionBuilder, OptsInput, SplitLineOpts, TextStyleOpts};

/// Cartesian axis (`xAxis` / `yAxis` entry).
///
/// `min`, `max`, `boundary_gap`, `label_alignment` and `inverse` accept any
/// JSON value since the renderer takes numbers, booleans or keywords such as
/// `"dataMin"` there.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisOpts {
    name: Option<String>,
    is_show: bool,
    is_scale: bool,
    name_location: String,
    name_gap: Numeric,
    interval: Option<Numeric>,
    grid_index: Numeric,
    position: Option<String>,
    boundary_gap: Option<Value>,
    label_alignment: Option<Value>,
    formatter: Option<String>,
    inverse: Option<Value>,
    min: Option<Value>,
    max: Option<Value>,
    type_: Option<String>,
    name_textstyle_opts: OptsInput<TextStyleOpts>,
    splitline_opts: OptsInput<SplitLineOpts>,
    linestyle_opts: OptsInput<LineStyleOpts>,
}

impl Default for AxisOpts {
    fn default() -> Self {
        Self {
            name: None,
            is_show: true,
            is_scale: false,
            name_location: "end".to_string(),
            name_gap: Numeric::Int(15),
            interval: None,
            grid_index: Numeric::Int(0),
            position: None,
            boundary_gap: None,
            label_alignment: None,
            formatter: None,
            inverse: None,
            min: None,
            max: None,
            type_: None,
            name_textstyle_opts: OptsInput::none(),
            splitline_opts: OptsInput::Typed(SplitLineOpts::default()),
            linestyle_opts: OptsInput::Typed(LineStyleOpts::default()),
        }
    }
}

impl AxisOpts {
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
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
        self
    }

    /// Let a value axis leave out zero.
    #[must_use]
    pub const fn scale(mut self, is_scale: bool) -> Self {
        self.is_scale = is_scale;
        self
    }

    /// `start`, `middle`/`center` or `end`.
    #[must_use]
    pub fn name_location(mut self, name_location: impl Into<String>) -> Self {
        self.name_location = name_location.into();
        self
    }

    #[must_use]
    pub fn name_gap(mut self, name_gap: impl Into<Numeric>) -> Self {
        self.name_gap = name_gap.into();
        self
    }

    #[must_use]
    pub fn interval(mut self, interval: impl Into<Numeric>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    #[must_use]
    pub fn grid_index(mut self, grid_index: impl Into<Numeric>) -> Self {
        self.grid_index = grid_index.into();
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    #[must_use]
    pub fn boundary_gap(mut self, boundary_gap: impl Into<Value>) -> Self {
        self.boundary_gap = Some(boundary_gap.into());
        self
    }

    /// Align ticks with labels (`axisTick.alignWithLabel`).
    #[must_use]
    pub fn label_alignment(mut self, label_alignment: impl Into<Value>) -> Self {
        self.label_alignment = Some(label_alignment.into());
        self
    }

    /// Label formatter (`axisLabel.formatter`).
    #[must_use]
    pub fn formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    #[must_use]
    pub fn inverse(mut self, inverse: impl Into<Value>) -> Self {
        self.inverse = Some(inverse.into());
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

    /// `value`, `category`, `time` or `log`.
    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    #[must_use]
    pub fn name_textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.name_textstyle_opts = opts.into();
        self
    }

    #[must_use]
    pub fn splitline_opts(mut self, opts: impl Into<OptsInput<SplitLineOpts>>) -> Self {
        self.splitline_opts = opts.into();
        self
    }

    /// Axis line style (`axisLine.lineStyle`).
    #[must_use]
    pub fn linestyle_opts(mut self, opts: impl Into<OptsInput<LineStyleOpts>>) -> Self {
        self.linestyle_opts = opts.into();
        self
    }
}

impl OptionBuilder for AxisOpts {
    fn opts(&self) -> Value {
        json!({
            "name": self.name,
            "show": self.is_show,
            "scale": self.is_scale,
            "nameLocation": self.name_location,
            "nameGap": self.name_gap,
            "interval": self.interval,
            "nameTextStyle": self.name_textstyle_opts.to_opts(),
            "gridIndex": self.grid_index,
            "axisTick": {"alignWithLabel": self.label_alignment},
            "axisLabel": {"formatter": self.formatter},
            "inverse": self.inverse,
            "position": self.position,
            "boundaryGap": self.boundary_gap,
            "min": self.min,
            "max": self.max,
            "type": self.type_,
            "splitLine": self.splitline_opts.to_opts(),
            "axisLine": {"lineStyle": self.linestyle_opts.to_opts()},
        })
    }
}

/// Single axis (`singleAxis`), used by theme river and scatter on one axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleAxisOpts {
    name: Option<String>,
    max: Option<Value>,
    min: Option<Value>,
    pos_left: Option<String>,
    pos_right: Option<String>,
    pos_top: Option<String>,
    pos_bottom: Option<String>,
    width: Option<String>,
    height: Option<String>,
    orient: Option<String>,
    type_: Option<String>,
}

impl SingleAxisOpts {
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
    pub fn max(mut self, max: impl Into<Value>) -> Self {
        self.max = Some(max.into());
        self
    }

    #[must_use]
    pub fn min(mut self, min: impl Into<Value>) -> Self {
        self.min = Some(min.into());
        self
    }

    #[must_use]
    pub fn pos_left(mut self, pos_left: impl Into<String>) -> Self {
        self.pos_left = Some(pos_left.into());
        self
    }

    #[must_use]
    pub fn pos_right(mut self, pos_right: impl Into<String>) -> Self {
        self.pos_right = Some(pos_right.into());
        self
    }

    #[must_use]
    pub fn pos_top(mut self, pos_top: impl Into<String>) -> Self {
        self.pos_top = Some(pos_top.into());
        self
    }

    #[must_use]
    pub fn pos_bottom(mut self, pos_bottom: impl Into<String>) -> Self {
        self.pos_bottom = Some(pos_bottom.into());
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn orient(mut self, orient: impl Into<String>) -> Self {
        self.orient = Some(orient.into());
        self
    }

    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = Some(type_.into());
        self
    }
}

impl OptionBuilder for SingleAxisOpts {
    fn opts(&self) -> Value {
        json!({
            "name": self.name,
            "max": self.max,
            "min": self.min,
            "left": self.pos_left,
            "right": self.pos_right,
            "top": self.pos_top,
            "bottom": self.pos_bottom,
            "width": self.width,
            "height": self.height,
            "orient": self.orient,
            "type": self.type_,
        })
    }
}

#[cfg(test)]
#[path = "axis_tests.rs"]
mod tests;

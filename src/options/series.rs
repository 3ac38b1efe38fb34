//! Style builders shared by the global option builders: text, line, split
//! line and label styles.

use serde_json::{Value, json};

use super::{Numeric, OptionBuilder, OptsInput};

/// Text style (`textStyle`, `nameTextStyle`, `subtextStyle`, ...).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyleOpts {
    color: Option<String>,
    font_style: Option<String>,
    font_weight: Option<String>,
    font_family: Option<String>,
    font_size: Option<Numeric>,
    align: Option<String>,
    vertical_align: Option<String>,
    line_height: Option<Numeric>,
}

impl TextStyleOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn font_style(mut self, font_style: impl Into<String>) -> Self {
        self.font_style = Some(font_style.into());
        self
    }

    #[must_use]
    pub fn font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = Some(font_weight.into());
        self
    }

    #[must_use]
    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    #[must_use]
    pub fn font_size(mut self, font_size: impl Into<Numeric>) -> Self {
        self.font_size = Some(font_size.into());
        self
    }

    #[must_use]
    pub fn align(mut self, align: impl Into<String>) -> Self {
        self.align = Some(align.into());
        self
    }

    #[must_use]
    pub fn vertical_align(mut self, vertical_align: impl Into<String>) -> Self {
        self.vertical_align = Some(vertical_align.into());
        self
    }

    #[must_use]
    pub fn line_height(mut self, line_height: impl Into<Numeric>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }
}

impl OptionBuilder for TextStyleOpts {
    fn opts(&self) -> Value {
        json!({
            "color": self.color,
            "fontStyle": self.font_style,
            "fontWeight": self.font_weight,
            "fontFamily": self.font_family,
            "fontSize": self.font_size,
            "align": self.align,
            "verticalAlign": self.vertical_align,
            "lineHeight": self.line_height,
        })
    }
}

/// Line style (`lineStyle`).
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyleOpts {
    is_show: bool,
    width: Numeric,
    opacity: Numeric,
    curve: Numeric,
    type_: String,
    color: Option<String>,
}

impl Default for LineStyleOpts {
    fn default() -> Self {
        Self {
            is_show: true,
            width: Numeric::Int(1),
            opacity: Numeric::Int(1),
            curve: Numeric::Int(0),
            type_: "solid".to_string(),
            color: None,
        }
    }
}

impl LineStyleOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
        self
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<Numeric>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn opacity(mut self, opacity: impl Into<Numeric>) -> Self {
        self.opacity = opacity.into();
        self
    }

    /// Edge curvature (`curveness`), 0 for straight lines.
    #[must_use]
    pub fn curve(mut self, curve: impl Into<Numeric>) -> Self {
        self.curve = curve.into();
        self
    }

    /// `solid`, `dashed` or `dotted`.
    #[must_use]
    pub fn type_(mut self, type_: impl Into<String>) -> Self {
        self.type_ = type_.into();
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl OptionBuilder for LineStyleOpts {
    fn opts(&self) -> Value {
        json!({
            "show": self.is_show,
            "width": self.width,
            "opacity": self.opacity,
            "curveness": self.curve,
            "type": self.type_,
            "color": self.color,
        })
    }
}

/// Split line of an axis (`splitLine`). Hidden by default.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitLineOpts {
    is_show: bool,
    linestyle_opts: OptsInput<LineStyleOpts>,
}

impl Default for SplitLineOpts {
    fn default() -> Self {
        Self {
            is_show: false,
            linestyle_opts: OptsInput::Typed(LineStyleOpts::default()),
        }
    }
}

impl SplitLineOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
        self
    }

    #[must_use]
    pub fn linestyle_opts(mut self, opts: impl Into<OptsInput<LineStyleOpts>>) -> Self {
        self.linestyle_opts = opts.into();
        self
    }
}

impl OptionBuilder for SplitLineOpts {
    fn opts(&self) -> Value {
        json!({
            "show": self.is_show,
            "lineStyle": self.linestyle_opts.to_opts(),
        })
    }
}

/// Text label (`label`, `dayLabel`, `monthLabel`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOpts {
    is_show: bool,
    position: String,
    color: Option<String>,
    font_size: Numeric,
    font_style: Option<String>,
    font_weight: Option<String>,
    font_family: Option<String>,
    rotate: Option<Numeric>,
    margin: Numeric,
    interval: Option<Value>,
    horizontal_align: Option<String>,
    vertical_align: Option<String>,
    formatter: Option<String>,
}

impl Default for LabelOpts {
    fn default() -> Self {
        Self {
            is_show: true,
            position: "top".to_string(),
            color: None,
            font_size: Numeric::Int(12),
            font_style: None,
            font_weight: None,
            font_family: None,
            rotate: None,
            margin: Numeric::Int(8),
            interval: None,
            horizontal_align: None,
            vertical_align: None,
            formatter: None,
        }
    }
}

impl LabelOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
        self
    }

    #[must_use]
    pub fn position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn font_size(mut self, font_size: impl Into<Numeric>) -> Self {
        self.font_size = font_size.into();
        self
    }

    #[must_use]
    pub fn font_style(mut self, font_style: impl Into<String>) -> Self {
        self.font_style = Some(font_style.into());
        self
    }

    #[must_use]
    pub fn font_weight(mut self, font_weight: impl Into<String>) -> Self {
        self.font_weight = Some(font_weight.into());
        self
    }

    #[must_use]
    pub fn font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    /// Rotation in degrees, -90 to 90.
    #[must_use]
    pub fn rotate(mut self, rotate: impl Into<Numeric>) -> Self {
        self.rotate = Some(rotate.into());
        self
    }

    #[must_use]
    pub fn margin(mut self, margin: impl Into<Numeric>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Label interval: a number or `"auto"`.
    #[must_use]
    pub fn interval(mut self, interval: impl Into<Value>) -> Self {
        self.interval = Some(interval.into());
        self
    }

    #[must_use]
    pub fn horizontal_align(mut self, align: impl Into<String>) -> Self {
        self.horizontal_align = Some(align.into());
        self
    }

    #[must_use]
    pub fn vertical_align(mut self, align: impl Into<String>) -> Self {
        self.vertical_align = Some(align.into());
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }
}

impl OptionBuilder for LabelOpts {
    fn opts(&self) -> Value {
        json!({
            "show": self.is_show,
            "position": self.position,
            "color": self.color,
            "rotate": self.rotate,
            "margin": self.margin,
            "interval": self.interval,
            "fontSize": self.font_size,
            "fontStyle": self.font_style,
            "fontWeight": self.font_weight,
            "fontFamily": self.font_family,
            "align": self.horizontal_align,
            "verticalAlign": self.vertical_align,
            "formatter": self.formatter,
        })
    }
}

impl_typed_input!(TextStyleOpts, LineStyleOpts, SplitLineOpts, LabelOpts);

#[cfg(test)]
#[path = "series_tests.rs"]
mod tests;

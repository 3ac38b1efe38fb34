use serde_json::{Value, json};

use super::{Numeric, OptionBuilder, OptsInput, TextStyleOpts};

/// Tooltip component (`tooltip`).
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOpts {
    trigger: String,
    trigger_on: String,
    axis_pointer_type: String,
    formatter: Option<String>,
    background_color: Option<String>,
    border_color: Option<String>,
    border_width: Numeric,
    textstyle_opts: OptsInput<TextStyleOpts>,
}

impl Default for TooltipOpts {
    fn default() -> Self {
        Self {
            trigger: "item".to_string(),
            trigger_on: "mousemove|click".to_string(),
            axis_pointer_type: "line".to_string(),
            formatter: None,
            background_color: None,
            border_color: None,
            border_width: Numeric::Int(0),
            textstyle_opts: OptsInput::Typed(TextStyleOpts::new().font_size(14)),
        }
    }
}

impl TooltipOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `item`, `axis` or `none`.
    #[must_use]
    pub fn trigger(mut self, trigger: impl Into<String>) -> Self {
        self.trigger = trigger.into();
        self
    }

    #[must_use]
    pub fn trigger_on(mut self, trigger_on: impl Into<String>) -> Self {
        self.trigger_on = trigger_on.into();
        self
    }

    /// `line`, `shadow` or `cross`.
    #[must_use]
    pub fn axis_pointer_type(mut self, axis_pointer_type: impl Into<String>) -> Self {
        self.axis_pointer_type = axis_pointer_type.into();
        self
    }

    #[must_use]
    pub fn formatter(mut self, formatter: impl Into<String>) -> Self {
        self.formatter = Some(formatter.into());
        self
    }

    #[must_use]
    pub fn background_color(mut self, background_color: impl Into<String>) -> Self {
        self.background_color = Some(background_color.into());
        self
    }

    #[must_use]
    pub fn border_color(mut self, border_color: impl Into<String>) -> Self {
        self.border_color = Some(border_color.into());
        self
    }

    #[must_use]
    pub fn border_width(mut self, border_width: impl Into<Numeric>) -> Self {
        self.border_width = border_width.into();
        self
    }

    #[must_use]
    pub fn textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.textstyle_opts = opts.into();
        self
    }
}

impl OptionBuilder for TooltipOpts {
    fn opts(&self) -> Value {
        json!({
            "trigger": self.trigger,
            "triggerOn": self.trigger_on,
            "axisPointer": {"type": self.axis_pointer_type},
            "formatter": self.formatter,
            "textStyle": self.textstyle_opts.to_opts(),
            "backgroundColor": self.background_color,
            "borderColor": self.border_color,
            "borderWidth": self.border_width,
        })
    }
}

#[cfg(test)]
#[path = "tooltip_tests.rs"]
mod tests;

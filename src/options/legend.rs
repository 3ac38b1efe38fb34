use serde_json::{Value, json};

use super::{OptionBuilder, OptsInput, TextStyleOpts};

/// Legend component (`legend`).
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOpts {
    selected_mode: Option<String>,
    is_show: bool,
    pos_left: Option<String>,
    pos_right: Option<String>,
    pos_top: Option<String>,
    pos_bottom: Option<String>,
    orient: Option<String>,
    textstyle_opts: OptsInput<TextStyleOpts>,
}

impl Default for LegendOpts {
    fn default() -> Self {
        Self {
            selected_mode: None,
            is_show: true,
            pos_left: None,
            pos_right: None,
            pos_top: None,
            pos_bottom: None,
            orient: None,
            textstyle_opts: OptsInput::none(),
        }
    }
}

impl LegendOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `single` or `multiple`.
    #[must_use]
    pub fn selected_mode(mut self, selected_mode: impl Into<String>) -> Self {
        self.selected_mode = Some(selected_mode.into());
        self
    }

    #[must_use]
    pub const fn show(mut self, is_show: bool) -> Self {
        self.is_show = is_show;
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
    pub fn orient(mut self, orient: impl Into<String>) -> Self {
        self.orient = Some(orient.into());
        self
    }

    #[must_use]
    pub fn textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.textstyle_opts = opts.into();
        self
    }
}

impl OptionBuilder for LegendOpts {
    fn opts(&self) -> Value {
        json!({
            "selectedMode": self.selected_mode,
            "show": self.is_show,
            "left": self.pos_left,
            "right": self.pos_right,
            "top": self.pos_top,
            "bottom": self.pos_bottom,
            "orient": self.orient,
            "textStyle": self.textstyle_opts.to_opts(),
        })
    }
}

#[cfg(test)]
#[path = "legend_tests.rs"]
mod tests;

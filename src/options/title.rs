use serde_json::{Value, json};

use super::{OptionBuilder, OptsInput, TextStyleOpts};

/// Title component (`title`).
///
/// Renders as a one-element array so several titles can be merged by the
/// document later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleOpts {
    title: Option<String>,
    subtitle: Option<String>,
    pos_left: Option<String>,
    pos_right: Option<String>,
    pos_top: Option<String>,
    pos_bottom: Option<String>,
    title_textstyle_opts: OptsInput<TextStyleOpts>,
    subtitle_textstyle_opts: OptsInput<TextStyleOpts>,
}

impl TitleOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
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
    pub fn title_textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.title_textstyle_opts = opts.into();
        self
    }

    #[must_use]
    pub fn subtitle_textstyle_opts(mut self, opts: impl Into<OptsInput<TextStyleOpts>>) -> Self {
        self.subtitle_textstyle_opts = opts.into();
        self
    }
}

impl OptionBuilder for TitleOpts {
    fn opts(&self) -> Value {
        json!([{
            "text": self.title,
            "subtext": self.subtitle,
            "left": self.pos_left,
            "right": self.pos_right,
            "top": self.pos_top,
            "bottom": self.pos_bottom,
            "textStyle": self.title_textstyle_opts.to_opts(),
            "subtextStyle": self.subtitle_textstyle_opts.to_opts(),
        }])
    }
}

#[cfg(test)]
#[path = "title_tests.rs"]
mod tests;

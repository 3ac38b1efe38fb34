use serde_json::{Value, json};

use super::{LabelOpts, OptionBuilder, OptsInput};

/// Calendar coordinate system (`calendar`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarOpts {
    pos_left: Option<String>,
    pos_top: Option<String>,
    pos_right: Option<String>,
    pos_bottom: Option<String>,
    orient: Option<String>,
    range: Option<Value>,
    daylabel_opts: OptsInput<LabelOpts>,
    monthlabel_opts: OptsInput<LabelOpts>,
    yearlabel_opts: OptsInput<LabelOpts>,
}

impl CalendarOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pos_left(mut self, pos_left: impl Into<String>) -> Self {
        self.pos_left = Some(pos_left.into());
        self
    }

    #[must_use]
    pub fn pos_top(mut self, pos_top: impl Into<String>) -> Self {
        self.pos_top = Some(pos_top.into());
        self
    }

    #[must_use]
    pub fn pos_right(mut self, pos_right: impl Into<String>) -> Self {
        self.pos_right = Some(pos_right.into());
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

    /// A year (`2017`), a month (`"2017-02"`) or a `[start, end]` pair.
    #[must_use]
    pub fn range(mut self, range: impl Into<Value>) -> Self {
        self.range = Some(range.into());
        self
    }

    #[must_use]
    pub fn daylabel_opts(mut self, opts: impl Into<OptsInput<LabelOpts>>) -> Self {
        self.daylabel_opts = opts.into();
        self
    }

    #[must_use]
    pub fn monthlabel_opts(mut self, opts: impl Into<OptsInput<LabelOpts>>) -> Self {
        self.monthlabel_opts = opts.into();
        self
    }

    #[must_use]
    pub fn yearlabel_opts(mut self, opts: impl Into<OptsInput<LabelOpts>>) -> Self {
        self.yearlabel_opts = opts.into();
        self
    }
}

impl OptionBuilder for CalendarOpts {
    fn opts(&self) -> Value {
        json!({
            "left": self.pos_left,
            "top": self.pos_top,
            "right": self.pos_right,
            "bottom": self.pos_bottom,
            "orient": self.orient,
            "range": self.range,
            "dayLabel": self.daylabel_opts.to_opts(),
            "monthLabel": self.monthlabel_opts.to_opts(),
            "yearLabel": self.yearlabel_opts.to_opts(),
        })
    }
}

#[cfg(test)]
#[path = "calendar_tests.rs"]
mod tests;

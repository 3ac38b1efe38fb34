//! Toolbox and its feature toggles.

use serde_json::{Value, json};

use super::normalize::is_unset;
use super::{OptionBuilder, OptsInput};

/// Toolbox features. Each feature given as unset, `null`, `false`, zero or
/// an empty mapping falls back to `{"show": true, "title": <feature title>}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolBoxFeatureOpts {
    save_as_image: Option<Value>,
    restore: Option<Value>,
    data_view: Option<Value>,
    data_zoom: Option<Value>,
}

fn feature_or_default(feature: Option<&Value>, title: &str) -> Value {
    match feature {
        Some(value) if !is_unset(value) => value.clone(),
        _ => json!({"show": true, "title": title}),
    }
}

impl ToolBoxFeatureOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn save_as_image(mut self, save_as_image: impl Into<Value>) -> Self {
        self.save_as_image = Some(save_as_image.into());
        self
    }

    #[must_use]
    pub fn restore(mut self, restore: impl Into<Value>) -> Self {
        self.restore = Some(restore.into());
        self
    }

    #[must_use]
    pub fn data_view(mut self, data_view: impl Into<Value>) -> Self {
        self.data_view = Some(data_view.into());
        self
    }

    #[must_use]
    pub fn data_zoom(mut self, data_zoom: impl Into<Value>) -> Self {
        self.data_zoom = Some(data_zoom.into());
        self
    }
}

impl OptionBuilder for ToolBoxFeatureOpts {
    fn opts(&self) -> Value {
        json!({
            "saveAsImage": feature_or_default(self.save_as_image.as_ref(), "save as image"),
            "restore": feature_or_default(self.restore.as_ref(), "restore"),
            "dataView": feature_or_default(self.data_view.as_ref(), "data view"),
            "dataZoom": feature_or_default(self.data_zoom.as_ref(), "data zoom"),
        })
    }
}

/// Toolbox component (`toolbox`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolboxOpts {
    is_show: bool,
    orient: String,
    pos_left: String,
    pos_right: Option<String>,
    pos_top: Option<String>,
    pos_bottom: Option<String>,
    feature: OptsInput<ToolBoxFeatureOpts>,
}

impl Default for ToolboxOpts {
    fn default() -> Self {
        Self {
            is_show: true,
            orient: "horizontal".to_string(),
            pos_left: "80%".to_string(),
            pos_right: None,
            pos_top: None,
            pos_bottom: None,
            feature: OptsInput::Typed(ToolBoxFeatureOpts::default()),
        }
    }
}

impl ToolboxOpts {
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
    pub fn feature(mut self, feature: impl Into<OptsInput<ToolBoxFeatureOpts>>) -> Self {
        self.feature = feature.into();
        self
    }
}

impl OptionBuilder for ToolboxOpts {
    fn opts(&self) -> Value {
        json!({
            "show": self.is_show,
            "orient": self.orient,
            "left": self.pos_left,
            "right": self.pos_right,
            "top": self.pos_top,
            "bottom": self.pos_bottom,
            "feature": self.feature.to_opts(),
        })
    }
}

impl_typed_input!(ToolBoxFeatureOpts);

#[cfg(test)]
#[path = "toolbox_tests.rs"]
mod tests;

//! Chart window and page settings.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::globals::{RenderType, ThemeType};
use super::OptionBuilder;

/// Initialization settings for a chart: canvas size, renderer, theme and
/// page-level attributes used by the host page.
///
/// Unlike the other builders these keys are consumed by the page template
/// rather than the option document, so they keep their `snake_case` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitOpts {
    pub width: String,
    pub height: String,
    pub chart_id: Option<String>,
    pub renderer: String,
    pub page_title: String,
    pub theme: String,
    pub bg_color: Option<String>,
    pub js_host: String,
}

impl Default for InitOpts {
    fn default() -> Self {
        Self {
            width: "900px".to_string(),
            height: "500px".to_string(),
            chart_id: None,
            renderer: RenderType::CANVAS.to_string(),
            page_title: "Awesome-pyecharts".to_string(),
            theme: ThemeType::WHITE.to_string(),
            bg_color: None,
            js_host: String::new(),
        }
    }
}

impl InitOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn chart_id(mut self, chart_id: impl Into<String>) -> Self {
        self.chart_id = Some(chart_id.into());
        self
    }

    /// See [`RenderType`].
    #[must_use]
    pub fn renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = renderer.into();
        self
    }

    #[must_use]
    pub fn page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = page_title.into();
        self
    }

    /// See [`ThemeType`].
    #[must_use]
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn bg_color(mut self, bg_color: impl Into<String>) -> Self {
        self.bg_color = Some(bg_color.into());
        self
    }

    #[must_use]
    pub fn js_host(mut self, js_host: impl Into<String>) -> Self {
        self.js_host = js_host.into();
        self
    }
}

impl OptionBuilder for InitOpts {
    fn opts(&self) -> Value {
        json!({
            "width": self.width,
            "height": self.height,
            "chart_id": self.chart_id,
            "renderer": self.renderer,
            "page_title": self.page_title,
            "theme": self.theme,
            "bg_color": self.bg_color,
            "js_host": self.js_host,
        })
    }
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;

//! Root option document assembled from the global option builders.

use serde_json::{Map, Value, json};
use tracing::debug;

use crate::error::Result;

use super::{
    AxisOpts, DataZoomOpts, GridOpts, InitOpts, LegendOpts, OptionBuilder, TitleOpts, ToolboxOpts,
    TooltipOpts, VisualMapOpts,
};

/// Global (non-series) options applied to a chart in one call.
#[derive(Debug, Clone, Default)]
pub struct GlobalOpts {
    title: Option<TitleOpts>,
    toolbox: Option<ToolboxOpts>,
    tooltip: Option<TooltipOpts>,
    legend: Option<LegendOpts>,
    xaxis: Option<AxisOpts>,
    yaxis: Option<AxisOpts>,
    visualmap: Option<VisualMapOpts>,
    datazoom: Vec<DataZoomOpts>,
    grid: Option<GridOpts>,
}

impl GlobalOpts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title_opts(mut self, opts: TitleOpts) -> Self {
        self.title = Some(opts);
        self
    }

    #[must_use]
    pub fn toolbox_opts(mut self, opts: ToolboxOpts) -> Self {
        self.toolbox = Some(opts);
        self
    }

    #[must_use]
    pub fn tooltip_opts(mut self, opts: TooltipOpts) -> Self {
        self.tooltip = Some(opts);
        self
    }

    #[must_use]
    pub fn legend_opts(mut self, opts: LegendOpts) -> Self {
        self.legend = Some(opts);
        self
    }

    #[must_use]
    pub fn xaxis_opts(mut self, opts: AxisOpts) -> Self {
        self.xaxis = Some(opts);
        self
    }

    #[must_use]
    pub fn yaxis_opts(mut self, opts: AxisOpts) -> Self {
        self.yaxis = Some(opts);
        self
    }

    #[must_use]
    pub fn visualmap_opts(mut self, opts: VisualMapOpts) -> Self {
        self.visualmap = Some(opts);
        self
    }

    /// Adds a data zoom; may be called more than once (e.g. slider + inside).
    #[must_use]
    pub fn datazoom_opts(mut self, opts: DataZoomOpts) -> Self {
        self.datazoom.push(opts);
        self
    }

    #[must_use]
    pub fn grid_opts(mut self, opts: GridOpts) -> Self {
        self.grid = Some(opts);
        self
    }
}

/// The option document handed to the renderer.
///
/// Keys keep insertion order. Setting a key twice replaces its value in place.
#[derive(Debug, Clone)]
pub struct ChartOptions {
    init: InitOpts,
    options: Map<String, Value>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::new(InitOpts::default())
    }
}

impl ChartOptions {
    #[must_use]
    pub fn new(init: InitOpts) -> Self {
        let mut options = Map::new();
        if let Some(bg_color) = &init.bg_color {
            options.insert("backgroundColor".to_string(), json!(bg_color));
        }
        Self { init, options }
    }

    #[must_use]
    pub const fn init_opts(&self) -> &InitOpts {
        &self.init
    }

    #[must_use]
    pub fn set_global_opts(mut self, global: GlobalOpts) -> Self {
        if let Some(title) = global.title {
            self.insert("title", title.opts());
        }
        if let Some(toolbox) = global.toolbox {
            self.insert("toolbox", toolbox.opts());
        }
        if let Some(tooltip) = global.tooltip {
            self.insert("tooltip", tooltip.opts());
        }
        if let Some(legend) = global.legend {
            self.insert("legend", json!([legend.opts()]));
        }
        if let Some(xaxis) = global.xaxis {
            self.insert("xAxis", json!([xaxis.opts()]));
        }
        if let Some(yaxis) = global.yaxis {
            self.insert("yAxis", json!([yaxis.opts()]));
        }
        if let Some(visualmap) = global.visualmap {
            self.insert("visualMap", visualmap.opts());
        }
        if !global.datazoom.is_empty() {
            let zooms: Vec<Value> = global.datazoom.iter().map(OptionBuilder::opts).collect();
            self.insert("dataZoom", Value::Array(zooms));
        }
        if let Some(grid) = global.grid {
            self.insert("grid", grid.opts());
        }
        debug!(keys = self.options.len(), "Applied global options");
        self
    }

    /// Sets any other top-level key, such as `series` or `radar`.
    #[must_use]
    pub fn set_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.options.insert(key.into(), value);
    }

    #[must_use]
    pub fn options(&self) -> Value {
        Value::Object(self.options.clone())
    }

    /// Serialize the document to compact JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.options)?)
    }

    /// Serialize the document to indented JSON.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.options)?)
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::options::InitOpts;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Render defaults loaded from `.chart-opts.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Config schema version. Omitted means current.
    #[serde(default)]
    pub version: Option<String>,

    /// Defaults for every chart's [`InitOpts`].
    #[serde(default)]
    pub init: InitOpts,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

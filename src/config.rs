//! Dashboard configuration, read from an optional JSON file.
//!
//! Every field has a default, so a config file only needs the values it
//! changes:
//!
//! ```json
//! { "title": "My XP", "theme": { "bar_color": "#f59e0b" },
//!   "style": { "monthly_format": { "kind": "compact" } } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{read_file, Result};
use crate::plotting::{ChartStyle, ChartTheme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page title of the rendered dashboard
    pub title: String,
    pub theme: ChartTheme,
    pub style: ChartStyle,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "XP Dashboard".to_string(),
            theme: ChartTheme::default(),
            style: ChartStyle::default(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading config from {}", path.display());
        Self::from_json(&read_file(path)?)
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SALES_DASHBOARD_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.json";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Top-level dashboard configuration. Every field has a default, so an empty
/// JSON object is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub source: SourceConfig,
    pub window: WindowConfig,
}

/// Where the sales sheet lives and which cells of it hold the table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub path: PathBuf,
    pub sheet: String,
    /// Rows above the header row.
    pub skip_rows: u32,
    /// First column letter of the table (inclusive).
    pub first_column: String,
    /// Last column letter of the table (inclusive).
    pub last_column: String,
    /// Maximum number of data rows read below the header.
    pub max_rows: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("supermarkt_sales.xlsx"),
            sheet: "Sales".to_string(),
            skip_rows: 3,
            first_column: "B".to_string(),
            last_column: "R".to_string(),
            max_rows: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

impl DashboardConfig {
    /// Resolve the configuration: `$SALES_DASHBOARD_CONFIG`, then
    /// `./dashboard.json`, then built-in defaults.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_file(local);
        }
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides (a single optional source path).
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(path) = args.next() {
            self.source.path = PathBuf::from(path);
        }
        self
    }
}

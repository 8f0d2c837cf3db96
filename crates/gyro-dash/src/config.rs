// File: crates/gyro-dash/src/config.rs
// Summary: TOML configuration: data source, navigation mode, control defaults, rendering.

use std::path::{Path, PathBuf};

use chart_core::{theme, RenderOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::window::NavigationMode;

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "GYRO_DASH_CONFIG";
/// Config file picked up from the working directory.
pub const LOCAL_CONFIG: &str = "gyro-dash.toml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub navigation: NavigationMode,
    pub histogram_bins: Option<usize>,
    pub defaults: ControlDefaults,
    pub render: RenderConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("t6.csv"),
            navigation: NavigationMode::Literal,
            histogram_bins: None,
            defaults: ControlDefaults::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Initial control values shown before the user touches anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlDefaults {
    pub graph_type: String,
    pub variables: String,
    pub samples: usize,
}

impl Default for ControlDefaults {
    fn default() -> Self {
        Self { graph_type: "scatter".into(), variables: "all".into(), samples: 100 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: i32,
    pub height: i32,
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { width: chart_core::types::WIDTH, height: chart_core::types::HEIGHT, theme: "dark".into() }
    }
}

impl RenderConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width.max(1),
            height: self.height.max(1),
            theme: theme::find(&self.theme),
            ..RenderOptions::default()
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from `explicit` if given, else from `$GYRO_DASH_CONFIG`,
    /// else from `./gyro-dash.toml`, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        Self::load_from(explicit, from_env.as_deref(), Path::new(LOCAL_CONFIG))
    }

    /// Lookup with every location passed in. A named file (explicit or from the
    /// environment) must be readable; only a missing `local` file is skipped.
    pub fn load_from(explicit: Option<&Path>, from_env: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            return Self::read(path);
        }
        match std::fs::read_to_string(local) {
            Ok(text) => {
                info!(path = %local.display(), "config loaded");
                Self::from_toml_str(&text)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
            Err(e) => {
                warn!(path = %local.display(), error = %e, "config file unreadable");
                Err(e.into())
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "config file unreadable");
            e
        })?;
        info!(path = %path.display(), "config loaded");
        Self::from_toml_str(&text)
    }
}

//! Explorer configuration file support.
//!
//! Configuration is read from a TOML file and then overridden by environment
//! variables. Every key has a default, so an empty file is a valid config.
//!
//! ```toml
//! [dataset]
//! path = "Road_Accident_Data.csv"
//! seed = 42
//!
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [defaults]
//! sample_size = 1000
//! point_opacity = 0.5
//! boundary_layer = "utla"
//! color_field = "accident_severity"
//! pie_field = "day_of_week"
//! layout = "grid"
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::data::DEFAULT_SAMPLE_SEED;
use crate::error::{ExplorerError, ExplorerResult};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub dataset: DatasetSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub defaults: DefaultSettings,
}

/// Where the accident table lives and how it is sampled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_path")]
    pub path: String,
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// HTTP bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Initial dashboard control values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultSettings {
    /// `None` means `min(1000, dataset size)`.
    #[serde(default)]
    pub sample_size: Option<usize>,
    #[serde(default = "default_point_opacity")]
    pub point_opacity: f64,
    #[serde(default = "default_boundary_layer")]
    pub boundary_layer: String,
    #[serde(default)]
    pub color_field: Option<String>,
    #[serde(default)]
    pub pie_field: Option<String>,
    #[serde(default)]
    pub shape_field: Option<String>,
    #[serde(default)]
    pub size_field: Option<String>,
    #[serde(default = "default_layout")]
    pub layout: String,
}

fn default_dataset_path() -> String {
    "Road_Accident_Data.csv".to_string()
}

fn default_seed() -> u64 {
    DEFAULT_SAMPLE_SEED
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_point_opacity() -> f64 {
    0.5
}

fn default_boundary_layer() -> String {
    "utla".to_string()
}

fn default_layout() -> String {
    "grid".to_string()
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            seed: default_seed(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            sample_size: None,
            point_opacity: default_point_opacity(),
            boundary_layer: default_boundary_layer(),
            color_field: None,
            pie_field: None,
            shape_field: None,
            size_field: None,
            layout: default_layout(),
        }
    }
}

impl ExplorerConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ExplorerResult<Self> {
        toml::from_str(content).map_err(|e| {
            ExplorerError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ExplorerResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ExplorerError::configuration(format!("Failed to read config file: {}", e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `explorer.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> ExplorerResult<Self> {
        let search_paths = [
            PathBuf::from("explorer.toml"),
            PathBuf::from("backend/explorer.toml"),
            PathBuf::from("../explorer.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                debug!("Using configuration file {}", path.display());
                return Self::from_file(&path);
            }
        }

        Err(ExplorerError::configuration(
            "No explorer.toml found in standard locations",
        ))
    }

    /// Apply environment variable overrides.
    ///
    /// # Environment Variables
    /// - `EXPLORER_DATA_PATH`: dataset file
    /// - `EXPLORER_SEED`: sampling seed
    /// - `HOST`: server host
    /// - `PORT`: server port
    pub fn apply_env_overrides(mut self) -> ExplorerResult<Self> {
        if let Ok(path) = env::var("EXPLORER_DATA_PATH") {
            self.dataset.path = path;
        }
        if let Ok(seed) = env::var("EXPLORER_SEED") {
            self.dataset.seed = seed.parse().map_err(|_| {
                ExplorerError::configuration("EXPLORER_SEED must be an unsigned integer")
            })?;
        }
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ExplorerError::configuration("PORT must be a valid port number"))?;
        }
        Ok(self)
    }

    /// Default-location file if present (built-in defaults otherwise), then env overrides.
    pub fn load() -> ExplorerResult<Self> {
        let config = match Self::from_default_location() {
            Ok(config) => config,
            Err(ExplorerError::Configuration { message, .. })
                if message.starts_with("No explorer.toml") =>
            {
                Self::default()
            }
            Err(e) => return Err(e),
        };
        config.apply_env_overrides()
    }
}

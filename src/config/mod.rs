use crate::core::graph::filter::DEFAULT_EXCLUSION_MARKER;
use crate::core::graph::windows::WindowStrategy;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub include_projects: bool,
    #[serde(default = "default_anonymize")]
    pub anonymize_labels: bool,
    #[serde(default = "default_exclusion_marker")]
    pub exclusion_marker: String,
    #[serde(default)]
    pub window: WindowStrategy,
    #[serde(default = "default_nodes_file")]
    pub nodes_file: String,
    #[serde(default = "default_edges_file")]
    pub edges_file: String,
    #[serde(default = "default_output_format")]
    pub output_format: ExportFormat,
}

fn default_anonymize() -> bool {
    true
}
fn default_exclusion_marker() -> String {
    DEFAULT_EXCLUSION_MARKER.to_string()
}
fn default_nodes_file() -> String {
    "nodes.csv".to_string()
}
fn default_edges_file() -> String {
    "edges.csv".to_string()
}
fn default_output_format() -> ExportFormat {
    ExportFormat::Csv
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_projects: false,
            anonymize_labels: default_anonymize(),
            exclusion_marker: default_exclusion_marker(),
            window: WindowStrategy::default(),
            nodes_file: default_nodes_file(),
            edges_file: default_edges_file(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Every top-level key of the configuration file.
    pub const KEYS: [&'static str; 7] = [
        "include_projects",
        "anonymize_labels",
        "exclusion_marker",
        "window",
        "nodes_file",
        "edges_file",
        "output_format",
    ];

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("harvestgraph")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".harvestgraph")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("harvestgraph.conf")
    }

    /// Load configuration from `path` (or the standard location).
    /// A missing file means defaults; a broken one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| AppError::config_load(&path, e))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.window.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the standard location).
    ///
    /// In test mode nothing is written; the target path is still returned.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if is_test {
            return Ok(path);
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| AppError::config_save(&path, e))?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path).map_err(|e| AppError::config_save(&path, e))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| AppError::config_save(&path, e))?;

        Ok(path)
    }
}

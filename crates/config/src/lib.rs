//! Configuration models and loaders for the orbit visualizer client.
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! client pointed at a local propagation service with the stock LEO parameters.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Top-level client configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub service: ServiceConfig,
    pub parameters: ParameterDefaults,
    pub scene: SceneConfig,
    pub output: OutputConfig,
}

/// Where the propagation service lives and how long to wait for it.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    pub base_url: String,
    pub compute_path: String,
    pub health_path: String,
    /// Per-call deadline in seconds; `None` or `0` disables it.
    pub timeout_secs: Option<f64>,
    pub max_error_chars: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            compute_path: "/api/calculate-orbit".to_string(),
            health_path: "/api/hello".to_string(),
            timeout_secs: Some(30.0),
            max_error_chars: 4_096,
        }
    }
}

/// Initial orbital elements (km, degrees). Range checks happen when the session starts.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ParameterDefaults {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub raan: f64,
    pub argp: f64,
    pub true_anomaly: f64,
}

impl Default for ParameterDefaults {
    fn default() -> Self {
        Self {
            semi_major_axis: 7_000.0,
            eccentricity: 0.01,
            inclination: 45.0,
            raan: 10.0,
            argp: 20.0,
            true_anomaly: 0.0,
        }
    }
}

/// Optional overrides of the scene look.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    pub title: Option<String>,
    pub trajectory_name: Option<String>,
    pub trajectory_color: Option<String>,
    pub trajectory_width: Option<f64>,
    pub body_name: Option<String>,
    pub body_color: Option<String>,
    pub body_size: Option<f64>,
    pub camera_eye: Option<[f64; 3]>,
    pub show_legend: Option<bool>,
}

/// Default artifact destinations written after each successful request.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub scene_json: Option<PathBuf>,
    pub plotly_json: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub csv: Option<PathBuf>,
    pub png_width: u32,
    pub png_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            scene_json: None,
            plotly_json: None,
            png: None,
            csv: None,
            png_width: 1_000,
            png_height: 800,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a client configuration; `.toml` files are TOML, anything else YAML.
pub fn load_client_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
    load_record(path)
}

/// Load from `path` when given, otherwise fall back to defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    match path {
        Some(path) => load_client_config(path),
        None => Ok(ClientConfig::default()),
    }
}

fn load_record<T, P>(path: P) -> Result<T, ConfigError>
where
    T: for<'de> Deserialize<'de> + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        // serde_yaml rejects a completely empty document for struct targets.
        match serde_yaml::from_reader::<_, Option<T>>(reader)? {
            Some(record) => Ok(record),
            None => Ok(T::default()),
        }
    }
}

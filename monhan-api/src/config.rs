//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following
//! precedence (highest to lowest):
//! 1. Environment variables (prefix: MONHAN_)
//! 2. ./config.toml
//! 3. Default values

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Dataset locations
    #[serde(default)]
    pub data: DataConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_service_name")]
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,
}

/// Dataset configuration
///
/// The three collections are bulk-loaded from JSON files under `dir` once at
/// startup; the API layer never writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the dataset files and icon assets
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_monsters_file")]
    pub monsters_file: String,

    #[serde(default = "default_quests_file")]
    pub quests_file: String,

    #[serde(default = "default_endemic_life_file")]
    pub endemic_life_file: String,

    /// Directory served under `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// URL prefix the icon endpoint redirects into
    #[serde(default = "default_icon_route_prefix")]
    pub icon_route_prefix: String,
}

impl DataConfig {
    pub fn monsters_path(&self) -> PathBuf {
        self.dir.join(&self.monsters_file)
    }

    pub fn quests_path(&self) -> PathBuf {
        self.dir.join(&self.quests_file)
    }

    pub fn endemic_life_path(&self) -> PathBuf {
        self.dir.join(&self.endemic_life_file)
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            monsters_file: default_monsters_file(),
            quests_file: default_quests_file(),
            endemic_life_file: default_endemic_life_file(),
            static_dir: default_static_dir(),
            icon_route_prefix: default_icon_route_prefix(),
        }
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// Enable panic recovery middleware
    #[serde(default = "default_true")]
    pub catch_panic: bool,

    /// Enable compression
    #[serde(default = "default_true")]
    pub compression: bool,

    /// CORS configuration
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            catch_panic: true,
            compression: true,
            cors_mode: default_cors_mode(),
        }
    }
}

// Default value functions
fn default_service_name() -> String {
    "monhan-api".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("static/monster-hunter-DB-master")
}

fn default_monsters_file() -> String {
    "monsters.json".to_string()
}

fn default_quests_file() -> String {
    "quests.json".to_string()
}

fn default_endemic_life_file() -> String {
    "endemicLife.json".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_icon_route_prefix() -> String {
    "/static/monster-hunter-DB-master/icons".to_string()
}

fn default_body_limit_mb() -> usize {
    10
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Environment variables (MONHAN_ prefix) override ./config.toml, which
    /// overrides the built-in defaults.
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &str) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("MONHAN_").split("_"))
            .extract()?;

        Ok(config)
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.service.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: default_service_name(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
            },
            data: DataConfig::default(),
            middleware: MiddlewareConfig::default(),
        }
    }
}

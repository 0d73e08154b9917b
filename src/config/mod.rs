use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub web: WebConfig,
    pub storage: StorageConfig,
    pub rate_limit: RateLimitConfig,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Name reported by the health endpoint
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; a `*` entry allows any origin
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding profile.json, skills.json, talks.json, projects.json and quotes.json.
    /// Files missing here fall back to the copies embedded in the binary.
    pub data_dir: PathBuf,
    pub questions_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub max_requests: usize,
    pub window_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Mounts the /debug routes
    pub enabled: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "portfolio-api".to_string(),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec![
                "https://m365princess.com".to_string(),
                "https://www.m365princess.com".to_string(),
            ],
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            questions_file: PathBuf::from("./data/questions.json"),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 5,
            window_secs: 60,
        }
    }
}

impl Config {
    /// Load from `CONFIG_FILE` (default `config.toml`), writing defaults if the file is absent
    pub fn load() -> Result<Self> {
        let config_file =
            std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());
        let mut config = Self::load_from_file(&config_file)?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        let config_file = config_file.as_ref();
        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)
                .with_context(|| format!("reading {}", config_file.display()))?;
            let config = toml::from_str(&contents)
                .with_context(|| format!("parsing {}", config_file.display()))?;
            Ok(config)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            if let Some(parent) = config_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(config_file, contents)?;
            info!("Wrote default configuration to {}", config_file.display());
            Ok(default_config)
        }
    }

    /// `DEBUG`, `HOST` and `PORT` take precedence over the file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(debug) = std::env::var("DEBUG") {
            self.debug.enabled = debug.eq_ignore_ascii_case("true");
        }
        if let Ok(host) = std::env::var("HOST") {
            self.web.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.web.port = port;
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.web.cors_origins.iter().any(|o| o == "*")
    }
}

use crate::domain::error::{Result, TranslateError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Setting that names the translator backend
pub const SERVICE_SETTING: &str = "translator_service";
/// Environment override for [`SERVICE_SETTING`]
pub const SERVICE_ENV: &str = "AUTOTRANSLATE_TRANSLATOR_SERVICE";
/// Setting holding the Google Cloud Translation API key
pub const GOOGLE_KEY_SETTING: &str = "google_translate_key";
/// Environment override for [`GOOGLE_KEY_SETTING`]
pub const GOOGLE_KEY_ENV: &str = "GOOGLE_TRANSLATE_KEY";
/// Provider-documented hard limit on segments per Google Cloud request
pub const DEFAULT_MAX_SEGMENTS: usize = 128;
/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_ENV: &str = "AUTOTRANSLATE_CONFIG";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub translator_service: Option<String>,
    pub google_translate_key: Option<String>,
    pub http_proxy: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub google: GoogleWebConfig,
    #[serde(default)]
    pub google_api: GoogleApiConfig,
    #[serde(default)]
    pub amazon: AmazonConfig,
    #[serde(default)]
    pub logging: Logging,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleWebConfig {
    #[serde(default = "default_google_service_url")]
    pub service_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GoogleApiConfig {
    // Google rejects requests with more than 128 text segments
    #[serde(default = "default_max_segments")]
    pub max_segments: usize,
    #[serde(default = "default_google_api_endpoint")]
    pub endpoint: String,
    /// "text" or "html"; the API assumes html when unset
    pub format: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AmazonConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Logging {
    #[serde(default = "default_enable")]
    pub enable: bool,
    pub path: Option<String>,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for GoogleWebConfig {
    fn default() -> Self {
        Self {
            service_url: default_google_service_url(),
        }
    }
}

impl Default for GoogleApiConfig {
    fn default() -> Self {
        Self {
            max_segments: default_max_segments(),
            endpoint: default_google_api_endpoint(),
            format: None,
        }
    }
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            enable: true,
            path: None,
            level: default_log_level(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator_service: None,
            google_translate_key: None,
            http_proxy: None,
            timeout_secs: default_timeout_secs(),
            google: GoogleWebConfig::default(),
            google_api: GoogleApiConfig::default(),
            amazon: AmazonConfig::default(),
            logging: Logging::default(),
        }
    }
}

impl Config {
    /// Apply environment overrides, looking variables up through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(service) = lookup(SERVICE_ENV) {
            self.translator_service = Some(service);
        }
        if let Some(key) = lookup(GOOGLE_KEY_ENV) {
            self.google_translate_key = Some(key);
        }
    }

    /// The Google API key, if one is configured and not blank
    pub fn google_translate_key(&self) -> Option<&str> {
        self.google_translate_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

// Defaults
fn default_timeout_secs() -> u64 {
    30
}
fn default_google_service_url() -> String {
    "https://translate.googleapis.com/translate_a/t".to_string()
}
fn default_max_segments() -> usize {
    DEFAULT_MAX_SEGMENTS
}
fn default_google_api_endpoint() -> String {
    "https://translation.googleapis.com/language/translate/v2".to_string()
}
fn default_enable() -> bool {
    true
}
fn default_log_level() -> String {
    "WARN".to_string()
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|p| p.join("autotranslate").join("config.toml"))
}

/// Load the configuration file (if any) and apply environment overrides
pub fn load_config() -> Result<Config> {
    let mut config = match get_config_path() {
        Some(path) if path.exists() => load_config_from(&path)?,
        _ => Config::default(),
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    Ok(config)
}

/// Read a config file; a malformed file falls back to the defaults
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "Warning: Failed to parse config file {}: {}. Using defaults.",
                path.display(),
                e
            );
            Ok(Config::default())
        }
    }
}

pub fn generate_config_sample() -> Result<()> {
    let path = get_config_path()
        .ok_or_else(|| TranslateError::Config("Cannot determine config directory".to_string()))?;

    if path.exists() {
        eprintln!("Config file already exists at: {}", path.display());
        return Ok(());
    }

    write_config_sample(&path)?;
    println!("Generated config file at: {}", path.display());
    Ok(())
}

pub fn write_config_sample(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let sample = Config::default();
    let toml_content = toml::to_string_pretty(&sample)
        .map_err(|e| TranslateError::Config(format!("Failed to serialize config: {}", e)))?;
    fs::write(path, toml_content)
        .map_err(|e| TranslateError::Config(format!("Failed to write config file: {}", e)))?;
    Ok(())
}

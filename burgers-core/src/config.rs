use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_BASE_URL: &str = "https://stellarburgers.nomoreparties.site";

pub const BASE_URL_ENV: &str = "STELLAR_BURGERS_BASE_URL";
pub const TARGET_ENV: &str = "STELLAR_BURGERS_TARGET";

// Which backend the scenarios talk to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// The deployed service at `base_url`.
    Live,
    /// An in-process stand-in spawned per test.
    #[default]
    Stub,
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Target::Live),
            "stub" => Ok(Target::Stub),
            other => Err(format!("Unknown backend target '{}', expected 'live' or 'stub'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarnessConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub target: Target,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            target: Target::default(),
        }
    }
}

impl HarnessConfig {
    pub fn live(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            target: Target::Live,
        }
    }

    /// Apply `STELLAR_BURGERS_BASE_URL` and `STELLAR_BURGERS_TARGET`.
    ///
    /// An explicit base URL implies a live target unless the target variable
    /// says otherwise.
    pub fn with_env_overrides(mut self) -> Result<Self, String> {
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().trim_end_matches('/').to_string();
                self.target = Target::Live;
            }
        }
        if let Ok(target) = std::env::var(TARGET_ENV) {
            self.target = target.parse()?;
        }
        Ok(self)
    }
}

/// Get config file path, using the provided base directory
pub fn get_config_path_with_base(base_dir: &Path) -> PathBuf {
    base_dir.join("stellar-burgers").join("config.json")
}

/// Get config file path under the user config directory, if there is one
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| get_config_path_with_base(&dir))
}

/// Load config from a specific path, falling back to defaults when the file
/// is absent. A file that cannot be read or parsed is an error.
pub fn load_config_from_path(path: &Path) -> Result<HarnessConfig, String> {
    if !path.exists() {
        return Ok(HarnessConfig::default());
    }
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid config {}: {}", path.display(), e))
}

/// Save config to a specific path
pub fn save_config_to_path(config: &HarnessConfig, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let data = serde_json::to_string_pretty(config).map_err(|e| e.to_string())?;
    std::fs::write(path, data).map_err(|e| e.to_string())
}

/// Load config: defaults, then the config file, then environment overrides
pub fn load_config() -> Result<HarnessConfig, String> {
    let config = match get_config_path() {
        Some(path) => load_config_from_path(&path)?,
        None => HarnessConfig::default(),
    };
    config.with_env_overrides()
}

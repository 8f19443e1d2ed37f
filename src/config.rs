// Configuration module for coursefinder
// Loads settings from ~/.config/coursefinder/config.toml; command-line flags and
// environment variables are layered on top by the caller.

use chrono::{Duration, Utc};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cache::{default_cache_dir, CacheManager};
use crate::data::search::DEFAULT_SEARCH_URL;
use crate::fetcher::DEFAULT_TTL_MINUTES;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub cache: CacheConfig,
}

/// Search API settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API credential sent as `key`
    pub api_key: Option<String>,
    /// Search engine context id sent as `cx`
    pub cx: Option<String>,
    /// Endpoint of the custom search API
    pub base_url: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            cx: None,
            base_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}

/// Disk cache settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Minutes a search result stays fresh
    pub ttl_minutes: i64,
    /// Cache directory; the platform cache dir when unset
    pub dir: Option<PathBuf>,
    /// Whether results are cached at all
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: DEFAULT_TTL_MINUTES,
            dir: None,
            enabled: true,
        }
    }
}

impl CacheConfig {
    /// TTL as a duration, never negative
    ///
    /// Values too large to represent fall back to the default TTL.
    pub fn ttl(&self) -> Duration {
        Duration::try_minutes(self.ttl_minutes.max(0))
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TTL_MINUTES))
    }

    /// Resets a TTL that cannot be added to the current time
    ///
    /// Returns a warning describing the reset value.
    fn check_ttl(&mut self) -> Option<String> {
        let representable = Duration::try_minutes(self.ttl_minutes.max(0))
            .and_then(|ttl| Utc::now().checked_add_signed(ttl))
            .is_some();
        if representable {
            return None;
        }

        let rejected = self.ttl_minutes;
        self.ttl_minutes = DEFAULT_TTL_MINUTES;
        Some(format!(
            "Invalid config: cache.ttl_minutes {} is out of range, using {}",
            rejected, DEFAULT_TTL_MINUTES
        ))
    }

    /// Directory the cache (and the debug log) live in
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        self.dir.clone().or_else(default_cache_dir)
    }

    /// Builds the cache manager, or `None` when caching is disabled or no
    /// cache directory can be determined
    pub fn manager(&self) -> Option<CacheManager> {
        if !self.enabled {
            return None;
        }
        self.resolved_dir().map(CacheManager::with_dir)
    }
}

impl Config {
    /// Layers command-line and environment values over the file values
    ///
    /// `None` keeps whatever the file configured.
    pub fn with_overrides(
        mut self,
        api_key: Option<String>,
        cx: Option<String>,
        no_cache: bool,
    ) -> Self {
        if api_key.is_some() {
            self.search.api_key = api_key;
        }
        if cx.is_some() {
            self.search.cx = cx;
        }
        if no_cache {
            self.cache.enabled = false;
        }
        self
    }
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from `path`, or the default config location
/// Returns default configuration if the file doesn't exist or on parse errors
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let Some(config_path) = path.map(Path::to_path_buf).or_else(get_config_path) else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config {:?}: {}", config_path, e)),
            };
        }
    };

    parse_config(&contents)
}

/// Parses TOML config contents, falling back to defaults on error
fn parse_config(contents: &str) -> ConfigResult {
    match toml::from_str::<Config>(contents) {
        Ok(mut config) => {
            let warning = config.cache.check_ttl();
            ConfigResult { config, warning }
        }
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("Invalid config: {}", e.message())),
        },
    }
}

/// Returns the path to the configuration file (`~/.config/coursefinder/config.toml` on Linux)
fn get_config_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "coursefinder")?;
    Some(project_dirs.config_dir().join("config.toml"))
}

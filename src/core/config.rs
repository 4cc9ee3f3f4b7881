//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.asker/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AskerConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub placeholder: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Empty base URL: the endpoint path is used as-is (same origin).
pub const DEFAULT_BASE_URL: &str = "";
pub const DEFAULT_PLACEHOLDER: &str = "What player at the Bears ex...";
pub const BASE_URL_ENV: &str = "ASKER_API_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub placeholder: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.asker/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".asker").join("config.toml"))
}

/// Load config from `~/.asker/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AskerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AskerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AskerConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AskerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AskerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AskerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Asker Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:8000"   # Or set ASKER_API_BASE_URL; empty = same origin

# [ui]
# placeholder = "What player at the Bears ex..."
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` comes from `--base-url` (None = not specified).
pub fn resolve(config: &AskerConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, std::env::var(BASE_URL_ENV).ok())
}

fn resolve_with_env(
    config: &AskerConfig,
    cli_base_url: Option<&str>,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or(env_base_url)
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let placeholder = config
        .ui
        .placeholder
        .clone()
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string());

    ResolvedConfig {
        base_url,
        placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AskerConfig::default();
        assert!(config.backend.base_url.is_none());
        assert!(config.ui.placeholder.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&AskerConfig::default(), None, None);
        assert_eq!(resolved.base_url, "");
        assert_eq!(resolved.placeholder, DEFAULT_PLACEHOLDER);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = AskerConfig {
            backend: BackendConfig {
                base_url: Some("http://10.0.0.5:8000".to_string()),
            },
            ui: UiConfig {
                placeholder: Some("Ask me anything".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, None, None);
        assert_eq!(resolved.base_url, "http://10.0.0.5:8000");
        assert_eq!(resolved.placeholder, "Ask me anything");
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = AskerConfig {
            backend: BackendConfig {
                base_url: Some("http://from-file".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, Some("http://from-env".to_string()));
        assert_eq!(resolved.base_url, "http://from-env");
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = AskerConfig {
            backend: BackendConfig {
                base_url: Some("http://from-file".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(
            &config,
            Some("http://from-cli"),
            Some("http://from-env".to_string()),
        );
        assert_eq!(resolved.base_url, "http://from-cli");
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[backend]
base_url = "http://localhost:8000"
"#;
        let config: AskerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.backend.base_url.as_deref(),
            Some("http://localhost:8000")
        );
        assert!(config.ui.placeholder.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("asker-config-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[backend\nbase_url = ").unwrap();

        let result = load_config_from(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_missing_file_generates_commented_default() {
        let dir = std::env::temp_dir().join(format!("asker-config-new-{}", std::process::id()));
        let path = dir.join("config.toml");
        fs::remove_dir_all(&dir).ok();

        let config = load_config_from(&path).unwrap();

        assert!(config.backend.base_url.is_none());
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("# [backend]"));
        // The generated file must itself parse to defaults
        let reparsed: AskerConfig = toml::from_str(&written).unwrap();
        assert!(reparsed.backend.base_url.is_none());
        fs::remove_dir_all(&dir).ok();
    }
}

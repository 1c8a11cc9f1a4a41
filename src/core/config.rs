//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quotes/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::ClientOptions;
use crate::api::client::{DEFAULT_BASE_URL, DEFAULT_LISTING_PATH, DEFAULT_RANDOM_PATH};
use crate::core::reachability::DEFAULT_PROBE_TIMEOUT;
use crate::core::share::ShareCommand;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuotesConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub reachability: ReachabilityConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub listing_path: Option<String>,
    pub random_path: Option<String>,
    pub timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ReachabilityConfig {
    pub enabled: Option<bool>,
    pub probe_timeout_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ShareConfig {
    pub command: Option<String>,
    pub args: Option<Vec<String>>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TIMEOUT_SECS: u64 = 40;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub client: ClientOptions,
    pub reachability_check: bool,
    pub probe_timeout: Duration,
    pub share: ShareCommand,
}

/// Values that came from command-line flags.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub skip_reachability_check: bool,
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

/// Returns the path to `~/.quotes/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quotes").join("config.toml"))
}

/// Load config from `~/.quotes/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuotesConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuotesConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuotesConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] against an explicit path.
pub fn load_config_from(path: &Path) -> Result<QuotesConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(QuotesConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuotesConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Quotes Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "https://dummyjson.com"   # Or set QUOTES_BASE_URL, or pass --base-url
# listing_path = "/quotes"
# random_path = "/quotes/random"
# timeout_secs = 40                   # Whole-call bound. Or set QUOTES_TIMEOUT_SECS
# connect_timeout_secs = 40

# [reachability]
# enabled = true                      # --no-reachability-check turns it off
# probe_timeout_ms = 1500

# [share]
# command = "xclip"                   # Or set QUOTES_SHARE_COMMAND
# args = ["-selection", "clipboard"]
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuotesConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("QUOTES_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: env → config → default
    let timeout_secs = std::env::var("QUOTES_TIMEOUT_SECS")
        .ok()
        .and_then(|s| match s.parse::<u64>() {
            Ok(secs) => non_zero("QUOTES_TIMEOUT_SECS", secs),
            Err(e) => {
                warn!("Ignoring QUOTES_TIMEOUT_SECS={s:?}: {e}");
                None
            }
        })
        .or_else(|| config.api.timeout_secs.and_then(|v| non_zero("api.timeout_secs", v)))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let connect_timeout_secs = config
        .api
        .connect_timeout_secs
        .and_then(|v| non_zero("api.connect_timeout_secs", v))
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let client = ClientOptions {
        base_url,
        listing_path: config
            .api
            .listing_path
            .clone()
            .unwrap_or_else(|| DEFAULT_LISTING_PATH.to_string()),
        random_path: config
            .api
            .random_path
            .clone()
            .unwrap_or_else(|| DEFAULT_RANDOM_PATH.to_string()),
        connect_timeout: Duration::from_secs(connect_timeout_secs),
        timeout: Duration::from_secs(timeout_secs),
    };

    // Reachability: CLI flag can only switch it off
    let reachability_check =
        !cli.skip_reachability_check && config.reachability.enabled.unwrap_or(true);
    let probe_timeout = config
        .reachability
        .probe_timeout_ms
        .and_then(|v| non_zero("reachability.probe_timeout_ms", v))
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_PROBE_TIMEOUT);

    ResolvedConfig {
        client,
        reachability_check,
        probe_timeout,
        share: resolve_share(config),
    }
}

/// A zero timeout would fail every request, so it falls back to the default.
fn non_zero(name: &str, value: u64) -> Option<u64> {
    if value == 0 {
        warn!("Ignoring {name}=0, using the default");
        None
    } else {
        Some(value)
    }
}

/// Share command: env → config → platform default.
/// Args from the config only apply when the program also came from the config.
fn resolve_share(config: &QuotesConfig) -> ShareCommand {
    if let Some(command) = std::env::var("QUOTES_SHARE_COMMAND")
        .ok()
        .and_then(|value| parse_share_command(&value))
    {
        return command;
    }
    match config.share.command {
        Some(ref program) => {
            ShareCommand::new(program.clone(), config.share.args.clone().unwrap_or_default())
        }
        None => ShareCommand::platform_default(),
    }
}

/// Splits `"xclip -selection clipboard"` into program and args.
fn parse_share_command(value: &str) -> Option<ShareCommand> {
    let mut words = value.split_whitespace().map(str::to_string);
    match words.next() {
        Some(program) => Some(ShareCommand::new(program, words.collect())),
        None => {
            warn!("Ignoring empty QUOTES_SHARE_COMMAND");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = QuotesConfig::default();
        assert!(config.api.base_url.is_none());
        assert!(config.share.command.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: QuotesConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(config.reachability.enabled.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = QuotesConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.client.listing_path, "/quotes");
        assert_eq!(resolved.client.random_path, "/quotes/random");
        assert_eq!(resolved.client.connect_timeout, Duration::from_secs(40));
        assert!(resolved.reachability_check);
        assert_eq!(resolved.probe_timeout, DEFAULT_PROBE_TIMEOUT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = QuotesConfig {
            api: ApiConfig {
                listing_path: Some("/api/quotes".to_string()),
                random_path: Some("/api/random".to_string()),
                connect_timeout_secs: Some(5),
                ..Default::default()
            },
            reachability: ReachabilityConfig {
                enabled: Some(false),
                probe_timeout_ms: Some(250),
            },
            share: ShareConfig {
                command: Some("wl-copy".to_string()),
                args: None,
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.client.listing_path, "/api/quotes");
        assert_eq!(resolved.client.random_path, "/api/random");
        assert_eq!(resolved.client.connect_timeout, Duration::from_secs(5));
        assert!(!resolved.reachability_check);
        assert_eq!(resolved.probe_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_resolve_cli_base_url_wins() {
        let config = QuotesConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            skip_reachability_check: true,
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.client.base_url, "http://from-cli");
        assert!(!resolved.reachability_check);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[api]
base_url = "http://localhost:8080"
timeout_secs = 10

[reachability]
enabled = true
probe_timeout_ms = 800

[share]
command = "xsel"
args = ["--clipboard", "--input"]
"#;
        let config: QuotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.api.timeout_secs, Some(10));
        assert_eq!(config.reachability.probe_timeout_ms, Some(800));
        assert_eq!(
            config.share.args,
            Some(vec!["--clipboard".to_string(), "--input".to_string()])
        );
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[reachability]
enabled = false
"#;
        let config: QuotesConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.reachability.enabled, Some(false));
        assert!(config.api.base_url.is_none());
        assert!(config.share.command.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!("quotes-bad-config-{}.toml", std::process::id()));
        fs::write(&path, "[api\nbase_url = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("quotes-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.api.base_url.is_none());
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_zero_timeouts_fall_back_to_defaults() {
        let config = QuotesConfig {
            api: ApiConfig {
                timeout_secs: Some(0),
                connect_timeout_secs: Some(0),
                ..Default::default()
            },
            reachability: ReachabilityConfig {
                enabled: None,
                probe_timeout_ms: Some(0),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.client.connect_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(!resolved.client.timeout.is_zero());
        assert_eq!(resolved.probe_timeout, DEFAULT_PROBE_TIMEOUT);
    }

    #[test]
    fn test_share_command_from_env_value_splits_args() {
        assert_eq!(
            parse_share_command("xclip -selection  clipboard"),
            Some(ShareCommand::new(
                "xclip",
                vec!["-selection".to_string(), "clipboard".to_string()]
            ))
        );
        assert_eq!(
            parse_share_command("pbcopy"),
            Some(ShareCommand::new("pbcopy", Vec::new()))
        );
        assert_eq!(parse_share_command("   "), None);
    }
}

//! # Configuration
//!
//! Startup values for the session, with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.soloforge/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing is ever written back; changes made during a run die with the process.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::session::{DEFAULT_CHAOS, DEFAULT_ENGINE, DEFAULT_THEME, Session};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SoloForgeConfig {
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    pub engine: Option<String>,
    pub theme: Option<String>,
    pub chaos: Option<i64>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub engine: String,
    pub theme: String,
    /// Already clamped into the chaos range.
    pub chaos: u8,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            theme: DEFAULT_THEME.to_string(),
            chaos: DEFAULT_CHAOS,
        }
    }
}

impl ResolvedConfig {
    pub fn session(&self) -> Session {
        let mut session = Session::new();
        session.set_engine(self.engine.clone());
        session.set_theme(self.theme.clone());
        session.set_chaos(i64::from(self.chaos));
        session
    }
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

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.soloforge/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".soloforge").join("config.toml"))
}

/// Load config from `~/.soloforge/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SoloForgeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SoloForgeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SoloForgeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SoloForgeConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SoloForgeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SoloForgeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# SoloForge Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [session]
# engine = "Mythic 2e"     # Or set SOLOFORGE_ENGINE
# theme = "Fantasy"        # Or set SOLOFORGE_THEME
# chaos = 5                # 1-9, out-of-range values are clamped. Or set SOLOFORGE_CHAOS
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

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &SoloForgeConfig) -> ResolvedConfig {
    resolve_with_env(config, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &SoloForgeConfig,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Engine: env → config → default
    let engine = env("SOLOFORGE_ENGINE")
        .or_else(|| config.session.engine.clone())
        .unwrap_or_else(|| DEFAULT_ENGINE.to_string());

    // Theme: env → config → default
    let theme = env("SOLOFORGE_THEME")
        .or_else(|| config.session.theme.clone())
        .unwrap_or_else(|| DEFAULT_THEME.to_string());

    // Chaos: env (if it parses) → config → default, clamped either way
    let env_chaos = env("SOLOFORGE_CHAOS").and_then(|raw| match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring SOLOFORGE_CHAOS={:?}: {}", raw, e);
            None
        }
    });
    let requested = env_chaos
        .or(config.session.chaos)
        .unwrap_or(i64::from(DEFAULT_CHAOS));

    let mut session = Session::new();
    let chaos = session.set_chaos(requested);
    if i64::from(chaos) != requested {
        warn!("Chaos {} is out of range, clamped to {}", requested, chaos);
    }

    ResolvedConfig {
        engine,
        theme,
        chaos,
    }
}

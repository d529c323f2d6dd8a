//! Configuration loading and merging.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pattern::GlobOptions;

const DEFAULT_TREE_EXTENSION: &str = "txt";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid glob delimiter '{0}': must be one non-alphanumeric, non-backslash, non-space character")]
    Delimiter(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Defaults for glob translation.
    pub glob: GlobConfig,

    /// Defaults for directory listings.
    pub tree: TreeConfig,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// Glob translation defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GlobConfig {
    /// Delimiter wrapping translated patterns (default `/`).
    pub delimiter: Option<String>,
    /// Wrap the body in `^`/`$` (default true).
    pub anchor: Option<bool>,
    /// Append the `i` flag (default false).
    pub case_insensitive: Option<bool>,
}

/// Directory listing defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Extension filter (default `txt`); empty keeps every file.
    pub extension: Option<String>,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// Validated configuration ready for use.
#[derive(Debug, Clone)]
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Glob options built from `[glob]`.
    pub glob: GlobOptions,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(user_config) = Self::load_user_config()? {
            config = user_config;
        }

        if let Some(cwd) = cwd
            && let Some(project_config) = Self::load_project_config(cwd)?
        {
            config.merge(project_config);
        }

        Ok(config)
    }

    /// Parse a config from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn load_user_config() -> Result<Option<Self>, ConfigError> {
        match Self::user_config_path() {
            Some(path) if path.exists() => Ok(Some(Self::parse(&fs::read_to_string(&path)?)?)),
            _ => Ok(None),
        }
    }

    /// Load project-level config from .ktools.toml
    fn load_project_config(cwd: &Path) -> Result<Option<Self>, ConfigError> {
        let path = cwd.join(".ktools.toml");
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            return Ok(Some(Self::parse(&content)?));
        }
        Ok(None)
    }

    /// Get user config path.
    /// Respects KTOOLS_CONFIG env var for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("KTOOLS_CONFIG") {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|d| d.join("ktools/config.toml"))
    }

    /// Merge another config into this one (other takes precedence when set).
    fn merge(&mut self, other: Config) {
        if other.glob.delimiter.is_some() {
            self.glob.delimiter = other.glob.delimiter;
        }
        if other.glob.anchor.is_some() {
            self.glob.anchor = other.glob.anchor;
        }
        if other.glob.case_insensitive.is_some() {
            self.glob.case_insensitive = other.glob.case_insensitive;
        }
        if other.tree.extension.is_some() {
            self.tree.extension = other.tree.extension;
        }
        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Validate settings and build the glob options.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let defaults = GlobOptions::default();
        let delimiter = match &self.glob.delimiter {
            Some(d) => parse_delimiter(d)?,
            None => defaults.delimiter,
        };
        let glob = GlobOptions {
            delimiter,
            anchor: self.glob.anchor.unwrap_or(defaults.anchor),
            case_insensitive: self.glob.case_insensitive.unwrap_or(defaults.case_insensitive),
        };
        Ok(CompiledConfig { raw: self, glob })
    }
}

/// A delimiter must be a single character a regex engine can't confuse
/// with pattern content.
pub fn parse_delimiter(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_alphanumeric() && c != '\\' && !c.is_whitespace() => Ok(c),
        _ => Err(ConfigError::Delimiter(s.to_string())),
    }
}

impl CompiledConfig {
    /// Extension filter for directory listings, if any.
    pub fn tree_extension(&self) -> Option<&str> {
        match self.raw.tree.extension.as_deref() {
            None => Some(DEFAULT_TREE_EXTENSION),
            Some("") => None,
            Some(ext) => Some(ext),
        }
    }
}

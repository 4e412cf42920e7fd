use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use crate::models::{Locale, StatusKey};
use crate::status::{AliasTable, UnknownPolicy};

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" => Some(ColorMode::Always),
            "never" | "off" | "none" => Some(ColorMode::Never),
            _ => None,
        }
    }

    pub fn enabled(&self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Settings from `~/.befast/rc`
///
/// ```text
/// # comments and blank lines are ignored
/// locale=en
/// color=never
/// unknown=reject
/// alias.EN_RUTA=IN_TRANSIT
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub locale: Locale,
    pub color: ColorMode,
    pub unknown: UnknownPolicy,
    pub aliases: Vec<(String, StatusKey)>,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME")
            .context("HOME environment variable not set")?;
        Ok(PathBuf::from(home).join(".befast").join("rc"))
    }

    /// Load from the default path. A missing file yields the defaults.
    pub fn load() -> Result<Config> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Config> {
        let mut config = Config::default();

        for (idx, line) in contents.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                bail!("line {}: expected key=value, got '{}'", line_no, line);
            };
            let key = key.trim();
            let value = value.trim();

            if let Some(alias) = key.strip_prefix("alias.") {
                let target = StatusKey::from_str(&value.to_uppercase()).with_context(|| {
                    format!("line {}: '{}' is not a canonical status key", line_no, value)
                })?;
                config.aliases.push((alias.to_string(), target));
                continue;
            }

            match key {
                "locale" => {
                    config.locale = Locale::from_str(value)
                        .with_context(|| format!("line {}: unknown locale '{}'", line_no, value))?;
                }
                "color" => {
                    config.color = ColorMode::from_str(value)
                        .with_context(|| format!("line {}: unknown color mode '{}'", line_no, value))?;
                }
                "unknown" => {
                    config.unknown = UnknownPolicy::from_str(value).with_context(|| {
                        format!("line {}: unknown status policy '{}' (use pending or reject)", line_no, value)
                    })?;
                }
                other => {
                    log::warn!("Ignoring unknown config key '{}' on line {}", other, line_no);
                }
            }
        }

        Ok(config)
    }

    /// Alias table for this configuration: the built-in table, or a new one
    /// with the configured extra aliases.
    pub fn alias_table(&self) -> Result<AliasTable> {
        if self.aliases.is_empty() {
            return Ok(AliasTable::builtin().clone());
        }
        AliasTable::with_extra(self.aliases.iter().cloned())
            .context("Configured aliases conflict with the built-in status aliases")
    }
}

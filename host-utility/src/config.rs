// Configuration management for the ks01lte-props host utility
//
// The configuration lives in the XDG config directory and only carries what
// the device cannot infer from ro.bootloader: the carrier's radio block.

use anyhow::{Context, Result};
use colored::Colorize;
use ks01lte_init::RadioProfile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ConfigCommands;
use crate::utils::{info, print_title_bar, success};

const CONFIG_VERSION: u32 = 1;

/// ks01lte-props configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropsConfig {
    /// Configuration schema version for future migrations
    pub version: u32,

    /// Radio block applied by `apply --radio`
    #[serde(default)]
    pub radio: Option<RadioProfile>,
}

impl Default for PropsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            radio: None,
        }
    }
}

impl PropsConfig {
    /// Load configuration from `path`, or the XDG default when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        Self::load_from_file(&path)
    }

    /// Load configuration from a specific file path
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get the XDG-compliant configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory (XDG_CONFIG_HOME or ~/.config)")?;

        Ok(config_dir.join("ks01lte").join("config.json"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            anyhow::bail!(
                "Unsupported config version {} (expected {CONFIG_VERSION})",
                self.version
            );
        }

        Ok(())
    }
}

/// Handle `config` subcommands
pub fn run_config_command(command: &ConfigCommands, path: Option<&Path>) -> Result<()> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => PropsConfig::config_path()?,
    };

    match command {
        ConfigCommands::Show => {
            let config = PropsConfig::load(Some(&config_path))?;
            print_title_bar("Configuration");
            info(&format!("File: {}", config_path.display()));
            match &config.radio {
                Some(radio) => {
                    let json = serde_json::to_string_pretty(radio)?;
                    info("Radio:");
                    for line in json.lines() {
                        println!("    {line}");
                    }
                }
                None => info(&format!("Radio: {}", "not configured".dimmed())),
            }
        }
        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommands::Reset => {
            PropsConfig::default().save(&config_path)?;
            success(&format!("Configuration reset at {}", config_path.display()));
        }
    }

    Ok(())
}

use crate::cli::output::OutputFormat;
use crate::parser::SIGNATURE_DELIMITERS;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".sigparse.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,

    /// Used by `split` when no delimiters are given on the command line
    #[serde(default = "default_delimiters")]
    pub delimiters: Vec<String>,
}

fn default_color() -> bool {
    true
}

fn default_delimiters() -> Vec<String> {
    SIGNATURE_DELIMITERS.iter().map(|d| d.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: default_color(),
            delimiters: default_delimiters(),
        }
    }
}

/// One config file as written on disk; absent keys leave earlier layers alone
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    format: Option<OutputFormat>,
    color: Option<bool>,
    delimiters: Option<Vec<String>>,
}

/// Values given on the command line; they win over every config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<OutputFormat>,
    pub no_color: bool,
    pub delimiters: Vec<String>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global_path = Self::global_config_path();
        Self::load_from(
            global_path.as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    pub fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("Loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        // Local config overrides global
        if local.exists() {
            debug!("Loading local config from {}", local.display());
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }
        if !overrides.delimiters.is_empty() {
            config.delimiters = overrides.delimiters;
        }

        debug!("Effective config: {:?}", config);
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(format) = file.format {
            self.format = format;
        }
        if let Some(color) = file.color {
            self.color = color;
        }
        if let Some(delimiters) = file.delimiters {
            self.delimiters = delimiters;
        }
        self
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "sigparse").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

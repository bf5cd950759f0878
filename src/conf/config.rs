// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{defs, utils};

pub const CONFIG_FILE_DEFAULT: &str = defs::CONFIG_FILE;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_primary_env")]
    pub primary_env: String,
    #[serde(default = "default_secondary_env")]
    pub secondary_env: String,
    /// Skips mount detection when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_emulated: Option<bool>,
    #[serde(default = "default_getprop_bin")]
    pub getprop_bin: String,
    #[serde(default = "default_setprop_bin")]
    pub setprop_bin: String,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default)]
    pub verbose: bool,
}

fn default_primary_env() -> String {
    defs::PRIMARY_STORAGE_ENV.to_string()
}

fn default_secondary_env() -> String {
    defs::SECONDARY_STORAGE_ENV.to_string()
}

fn default_getprop_bin() -> String {
    "getprop".to_string()
}

fn default_setprop_bin() -> String {
    "setprop".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from(defs::LOG_FILE)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            primary_env: default_primary_env(),
            secondary_env: default_secondary_env(),
            primary_emulated: None,
            getprop_bin: default_getprop_bin(),
            setprop_bin: default_setprop_bin(),
            log_file: default_log_file(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).context("failed to read config file")?;

        let config: Config = toml::from_str(&content).context("failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    pub fn load_default() -> Result<Self> {
        Self::from_file(CONFIG_FILE_DEFAULT)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).context("failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("failed to create config directory")?;
        }

        fs::write(path.as_ref(), content).context("failed to write config file")?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        utils::validate_env_name(&self.primary_env).context("invalid primary_env")?;
        utils::validate_env_name(&self.secondary_env).context("invalid secondary_env")?;
        Ok(())
    }

    pub fn merge_with_cli(&mut self, verbose: bool, primary_emulated: Option<bool>) {
        if verbose {
            self.verbose = true;
        }

        if primary_emulated.is_some() {
            self.primary_emulated = primary_emulated;
        }
    }
}

// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::{defs, utils};

/// Backing store for Android system properties.
///
/// Reads never fail: a missing or unreadable property is `None`.
pub trait PropertyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn get_flag(&self, key: &str) -> bool {
        decode_flag(self.get(key).as_deref())
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<()> {
        self.set(key, encode_flag(value))
    }
}

pub fn decode_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.trim() == defs::PROP_TRUE)
}

pub fn encode_flag(value: bool) -> &'static str {
    if value {
        defs::PROP_TRUE
    } else {
        defs::PROP_FALSE
    }
}

/// Talks to the device property service through the `getprop`/`setprop` tools.
pub struct SystemProps {
    getprop: String,
    setprop: String,
}

impl SystemProps {
    pub fn new(getprop: &str, setprop: &str) -> Self {
        Self {
            getprop: getprop.to_string(),
            setprop: setprop.to_string(),
        }
    }
}

impl PropertyStore for SystemProps {
    fn get(&self, key: &str) -> Option<String> {
        let output = match Command::new(&self.getprop)
            .arg(key)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!("{} {} failed: {}", self.getprop, key, e);
                return None;
            }
        };

        if !output.status.success() {
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if value.is_empty() { None } else { Some(value) }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        utils::validate_prop_key(key)?;
        utils::validate_prop_value(key, value)?;

        let output = Command::new(&self.setprop)
            .arg(key)
            .arg(value)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("Failed to execute {}", self.setprop))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "{} {}={} failed: {}",
                self.setprop,
                key,
                value,
                stderr.trim()
            );
        }
        Ok(())
    }
}

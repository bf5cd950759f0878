// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::OnceLock;

use anyhow::{Result, bail};
use regex_lite::Regex;

// Values of non read-only properties are capped by the property area.
const PROP_VALUE_MAX: usize = 91;

static PROP_KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static ENV_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn validate_prop_key(key: &str) -> Result<()> {
    let re = PROP_KEY_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_-]+(\.[a-zA-Z0-9_@:-]+)*$").expect("Invalid Regex pattern")
    });
    if re.is_match(key) {
        Ok(())
    } else {
        bail!("Invalid property name: '{key}'")
    }
}

pub fn validate_prop_value(key: &str, value: &str) -> Result<()> {
    if value.len() > PROP_VALUE_MAX && !key.starts_with("ro.") {
        bail!(
            "Value for '{key}' is {} bytes, limit is {PROP_VALUE_MAX}",
            value.len()
        );
    }
    if value.contains('\n') {
        bail!("Value for '{key}' must be a single line");
    }
    Ok(())
}

pub fn validate_env_name(name: &str) -> Result<()> {
    let re = ENV_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid Regex pattern"));
    if re.is_match(name) {
        Ok(())
    } else {
        bail!("Invalid environment variable name: '{name}'")
    }
}

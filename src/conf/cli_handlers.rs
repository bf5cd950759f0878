// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fmt::Write as _,
    io::{self, BufRead, Write},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    conf::{
        cli::{SwitchState, ToggleArg},
        config::Config,
    },
    core::{
        probe::{self, Probe},
        resolver::{Resolution, Toggle},
        session::{
            Availability, RebootPrompt, Session, SwapFlags, ToggleOutcome, apply_toggle,
        },
    },
    defs,
    sys::{monkey::MonkeyGuard, power::PowerCtl, props::SystemProps, storage},
};

/// Answers the reboot prompt on the terminal.
struct StdinPrompt;

impl RebootPrompt for StdinPrompt {
    fn confirm(&mut self) -> Result<bool> {
        print!("Reboot now to apply the storage swap? [y/N] ");
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin()
            .lock()
            .read_line(&mut answer)
            .context("Failed to read answer")?;

        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }
}

/// Fixed answer from `--yes` / `--no-reboot`.
struct PresetAnswer(bool);

impl RebootPrompt for PresetAnswer {
    fn confirm(&mut self) -> Result<bool> {
        Ok(self.0)
    }
}

#[derive(Serialize)]
struct StatusReport<'a> {
    probe: &'a Probe,
    availability: Availability,
    flags: SwapFlags,
    resolution: &'a Resolution,
}

fn system_props(config: &Config) -> SystemProps {
    SystemProps::new(&config.getprop_bin, &config.setprop_bin)
}

fn read_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::debug!("{} is not set", name);
        String::new()
    })
}

fn detect_primary_emulated(config: &Config, primary_path: &str) -> bool {
    if let Some(emulated) = config.primary_emulated {
        tracing::debug!("Primary emulation forced by config: {}", emulated);
        return emulated;
    }

    let path = if primary_path.is_empty() {
        defs::PRIMARY_MOUNT
    } else {
        primary_path
    };
    storage::primary_is_emulated(path)
}

/// Probes the environment once and opens a session over the device store.
fn open_session(config: &Config) -> (Probe, Session<SystemProps>) {
    let mut props = system_props(config);

    let primary_path = read_env(&config.primary_env);
    let secondary_paths = read_env(&config.secondary_env);

    let probe = probe::establish(&mut props, &primary_path, &secondary_paths);
    let availability = Availability {
        switchable_pair_found: probe.available(),
        primary_emulated: detect_primary_emulated(config, &primary_path),
    };
    tracing::debug!("Availability: {:?}", availability);

    (probe, Session::new(props, availability))
}

pub fn render_resolution(resolution: &Resolution) -> String {
    let mut out = String::new();

    if resolution.primary_storage_warning {
        let _ = writeln!(
            out,
            "!! Both swaps are enabled. Primary storage may not behave as expected."
        );
    }

    for toggle in [Toggle::Sys, Toggle::Env] {
        let view = resolution.view(toggle);
        let mark = if view.checked { "x" } else { " " };
        let lock = if view.enabled { "" } else { " (locked)" };
        let _ = writeln!(
            out,
            "[{}] {}{}\n    {}",
            mark,
            toggle.title(),
            lock,
            view.message.summary(toggle)
        );
    }

    out
}

pub fn handle_gen_config(output: &Path) -> Result<()> {
    Config::default()
        .save_to_file(output)
        .with_context(|| format!("Failed to save generated config to {}", output.display()))?;

    println!("Config written to {}", output.display());

    Ok(())
}

pub fn handle_show_config(config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;

    print!("{}", content);

    Ok(())
}

pub fn handle_probe(config: &Config) -> Result<()> {
    let (probe, session) = open_session(config);

    let json = serde_json::json!({
        "probe": probe,
        "available": probe.available(),
        "switchable_pair": probe.switchable_pair(),
        "availability": session.availability(),
    });

    println!(
        "{}",
        serde_json::to_string_pretty(&json).context("Failed to serialize probe report")?
    );

    Ok(())
}

pub fn handle_status(config: &Config, json: bool) -> Result<()> {
    let (probe, session) = open_session(config);
    let resolution = session.resolve();

    if json {
        let report = StatusReport {
            probe: &probe,
            availability: session.availability(),
            flags: session.flags(),
            resolution: &resolution,
        };
        let out =
            serde_json::to_string_pretty(&report).context("Failed to serialize status report")?;
        println!("{}", out);
    } else {
        print!("{}", render_resolution(&resolution));
    }

    Ok(())
}

pub fn handle_set(
    config: &Config,
    toggle: ToggleArg,
    state: SwitchState,
    yes: bool,
    no_reboot: bool,
) -> Result<()> {
    let toggle = Toggle::from(toggle);
    let (_, mut session) = open_session(config);

    let mut prompt: Box<dyn RebootPrompt> = if yes {
        Box::new(PresetAnswer(true))
    } else if no_reboot {
        Box::new(PresetAnswer(false))
    } else {
        Box::new(StdinPrompt)
    };
    let mut rebooter = PowerCtl::new(system_props(config));

    let outcome = apply_toggle(
        &mut session,
        &MonkeyGuard,
        toggle,
        state.as_bool(),
        prompt.as_mut(),
        &mut rebooter,
        |resolution| print!("{}", render_resolution(resolution)),
    )?;

    match outcome {
        ToggleOutcome::Ignored => println!("Automated test run in progress, change ignored."),
        ToggleOutcome::Applied {
            rebooting: false, ..
        } => println!("Changes take effect after the next reboot."),
        ToggleOutcome::Applied { .. } => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resolver::resolve;

    #[test]
    fn renders_locked_peer() {
        let out = render_resolution(&resolve(true, false, true, false));

        assert!(out.contains("[x] System vold swap\n"));
        assert!(out.contains("[ ] Environment primary swap (locked)"));
        assert!(out.contains("Disabled while system vold swap is enabled"));
        assert!(!out.contains("!!"));
    }

    #[test]
    fn renders_warning_when_both_enabled() {
        let out = render_resolution(&resolve(true, false, true, true));
        assert!(out.starts_with("!! Both swaps are enabled"));
    }

    #[test]
    fn renders_unavailable() {
        let out = render_resolution(&resolve(false, false, false, false));
        assert_eq!(out.matches("(locked)").count(), 2);
        assert_eq!(
            out.matches("Storage swap is not available on this device")
                .count(),
            2
        );
    }

    #[test]
    fn config_override_skips_detection() {
        let config = Config {
            primary_emulated: Some(true),
            ..Default::default()
        };
        assert!(detect_primary_emulated(&config, "/nonexistent"));
    }
}

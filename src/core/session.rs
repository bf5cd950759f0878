// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::{
    core::resolver::{Resolution, Toggle, resolve},
    defs,
    sys::{monkey::AutomationGuard, power::Rebooter, props::PropertyStore},
};

/// Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Availability {
    pub switchable_pair_found: bool,
    pub primary_emulated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SwapFlags {
    pub sys_swap: bool,
    pub env_swap: bool,
}

impl SwapFlags {
    pub fn read<S: PropertyStore + ?Sized>(store: &S) -> Self {
        Self {
            sys_swap: store.get_flag(defs::SYS_SWAP_PROP),
            env_swap: store.get_flag(defs::ENV_SWAP_PROP),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// An automation agent is driving the device; nothing was written.
    Ignored,
    Applied(Resolution),
}

pub trait RebootPrompt {
    fn confirm(&mut self) -> Result<bool>;
}

pub struct Session<S> {
    store: S,
    availability: Availability,
}

impl<S: PropertyStore> Session<S> {
    pub fn new(store: S, availability: Availability) -> Self {
        Self {
            store,
            availability,
        }
    }

    pub fn availability(&self) -> Availability {
        self.availability
    }

    pub fn flags(&self) -> SwapFlags {
        SwapFlags::read(&self.store)
    }

    pub fn resolve(&self) -> Resolution {
        let flags = self.flags();
        resolve(
            self.availability.switchable_pair_found,
            self.availability.primary_emulated,
            flags.sys_swap,
            flags.env_swap,
        )
    }

    /// Persists `toggle := value` and returns the refreshed state.
    pub fn commit(
        &mut self,
        guard: &dyn AutomationGuard,
        toggle: Toggle,
        value: bool,
    ) -> Result<CommitOutcome> {
        // Changes would disconnect the USB host and kill the monkey run.
        if guard.automation_running() {
            tracing::warn!("Automation in progress, ignoring {:?} toggle", toggle);
            return Ok(CommitOutcome::Ignored);
        }

        let current = self.resolve();
        if !current.view(toggle).enabled {
            bail!(
                "{} cannot be changed: {}",
                toggle.title(),
                current.view(toggle).message.summary(toggle)
            );
        }

        let prop = toggle.prop();
        self.store
            .set_flag(prop, value)
            .with_context(|| format!("Failed to persist {}", prop))?;
        tracing::info!(
            "System property set: {}={}",
            prop,
            self.store.get(prop).unwrap_or_default()
        );

        Ok(CommitOutcome::Applied(self.resolve()))
    }
}

/// Asks for confirmation and reboots on acceptance. Returns whether a reboot
/// was requested.
pub fn request_reboot(
    prompt: &mut dyn RebootPrompt,
    rebooter: &mut dyn Rebooter,
) -> Result<bool> {
    if !prompt.confirm()? {
        tracing::info!("Reboot declined, storage swap applies on next boot");
        return Ok(false);
    }
    rebooter.reboot()?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Ignored,
    Applied {
        resolution: Resolution,
        rebooting: bool,
    },
}

/// Full click flow: commit, show the refreshed toggles, then offer a reboot.
/// Ignored or refused commits never reach the prompt.
pub fn apply_toggle<S, F>(
    session: &mut Session<S>,
    guard: &dyn AutomationGuard,
    toggle: Toggle,
    value: bool,
    prompt: &mut dyn RebootPrompt,
    rebooter: &mut dyn Rebooter,
    on_applied: F,
) -> Result<ToggleOutcome>
where
    S: PropertyStore,
    F: FnOnce(&Resolution),
{
    let resolution = match session.commit(guard, toggle, value)? {
        CommitOutcome::Ignored => return Ok(ToggleOutcome::Ignored),
        CommitOutcome::Applied(resolution) => resolution,
    };

    on_applied(&resolution);

    let rebooting = request_reboot(prompt, rebooter)?;
    Ok(ToggleOutcome::Applied {
        resolution,
        rebooting,
    })
}

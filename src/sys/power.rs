// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use anyhow::{Context, Result};

use crate::{
    defs,
    sys::props::{PropertyStore, SystemProps},
};

pub trait Rebooter {
    fn reboot(&mut self) -> Result<()>;
}

/// Asks init for a clean reboot through `sys.powerctl`.
pub struct PowerCtl {
    props: SystemProps,
}

impl PowerCtl {
    pub fn new(props: SystemProps) -> Self {
        Self { props }
    }
}

impl Rebooter for PowerCtl {
    fn reboot(&mut self) -> Result<()> {
        tracing::warn!(">> Rebooting to apply storage swap...");
        self.props
            .set(defs::POWERCTL_PROP, defs::POWERCTL_REBOOT)
            .context("Failed to request reboot")
    }
}

// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{core::resolver::Toggle, defs};

#[derive(Parser, Debug)]
#[command(name = "storage-swap", version, about = "Advanced storage swap settings")]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
    /// Override primary storage emulation detection
    #[arg(long = "primary-emulated")]
    pub primary_emulated: Option<bool>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    GenConfig {
        #[arg(short = 'o', long = "output", default_value = defs::CONFIG_FILE)]
        output: PathBuf,
    },
    ShowConfig,
    Probe,
    Status {
        #[arg(long)]
        json: bool,
    },
    Set {
        toggle: ToggleArg,
        state: SwitchState,
        /// Reboot without asking
        #[arg(short = 'y', long, conflicts_with = "no_reboot")]
        yes: bool,
        #[arg(long)]
        no_reboot: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ToggleArg {
    Sys,
    Env,
}

impl From<ToggleArg> for Toggle {
    fn from(arg: ToggleArg) -> Self {
        match arg {
            ToggleArg::Sys => Toggle::Sys,
            ToggleArg::Env => Toggle::Env,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SwitchState {
    On,
    Off,
}

impl SwitchState {
    pub fn as_bool(&self) -> bool {
        matches!(self, SwitchState::On)
    }
}

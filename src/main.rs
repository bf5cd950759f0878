// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later
mod conf;
mod core;
mod defs;
mod sys;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use conf::{
    cli::{Cli, Commands},
    cli_handlers,
    config::{CONFIG_FILE_DEFAULT, Config},
};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn load_config(cli: &Cli) -> Result<Config> {
    if let Some(config_path) = &cli.config {
        return Config::from_file(config_path).with_context(|| {
            format!(
                "Failed to load config from custom path: {}",
                config_path.display()
            )
        });
    }

    match Config::load_default() {
        Ok(config) => Ok(config),
        Err(e) => {
            let is_not_found = e
                .root_cause()
                .downcast_ref::<std::io::Error>()
                .map(|io_err| io_err.kind() == std::io::ErrorKind::NotFound)
                .unwrap_or(false);

            if is_not_found {
                Ok(Config::default())
            } else {
                Err(e).context(format!(
                    "Failed to load default config from {}",
                    CONFIG_FILE_DEFAULT
                ))
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::GenConfig { output }) = &cli.command {
        return cli_handlers::handle_gen_config(output);
    }

    let mut config = load_config(&cli)?;
    config.merge_with_cli(cli.verbose, cli.primary_emulated);

    let _log_guard = match utils::init_logging(config.verbose, Some(&config.log_file)) {
        Ok(guard) => guard,
        Err(e) => {
            // Without root the log directory is not writable; keep stderr.
            eprintln!(
                "Log file {} unavailable ({:#}), logging to stderr only",
                config.log_file.display(),
                e
            );
            utils::init_logging(config.verbose, None).context("Failed to initialize logging")?
        }
    };

    tracing::debug!("Loaded config: {:?}", config);

    match cli.command.unwrap_or(Commands::Status { json: false }) {
        Commands::GenConfig { .. } => {}
        Commands::ShowConfig => cli_handlers::handle_show_config(&config)?,
        Commands::Probe => cli_handlers::handle_probe(&config)?,
        Commands::Status { json } => cli_handlers::handle_status(&config, json)?,
        Commands::Set {
            toggle,
            state,
            yes,
            no_reboot,
        } => cli_handlers::handle_set(&config, toggle, state, yes, no_reboot)?,
    }

    Ok(())
}

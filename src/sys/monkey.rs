// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use procfs::process::all_processes;

use crate::defs;

/// Reports whether an automated agent is currently driving the device.
pub trait AutomationGuard {
    fn automation_running(&self) -> bool;
}

/// Looks for the `monkey` exerciser in the process table.
pub struct MonkeyGuard;

impl AutomationGuard for MonkeyGuard {
    fn automation_running(&self) -> bool {
        let Ok(processes) = all_processes() else {
            return false;
        };

        processes
            .filter_map(|p| p.ok())
            .filter_map(|p| p.cmdline().ok())
            .any(|cmdline| is_monkey_cmdline(&cmdline))
    }
}

fn is_monkey_cmdline(cmdline: &[String]) -> bool {
    cmdline.iter().any(|arg| arg == defs::MONKEY_CMDLINE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_monkey_invocation() {
        let cmdline = vec![
            "app_process".to_string(),
            "/system/bin".to_string(),
            "com.android.commands.monkey".to_string(),
            "-p".to_string(),
            "com.android.settings".to_string(),
        ];
        assert!(is_monkey_cmdline(&cmdline));
    }

    #[test]
    fn ignores_other_processes() {
        let cmdline = vec!["/system/bin/vold".to_string()];
        assert!(!is_monkey_cmdline(&cmdline));
        assert!(!is_monkey_cmdline(&[]));
    }
}

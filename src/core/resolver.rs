// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use crate::defs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Toggle {
    Sys,
    Env,
}

impl Toggle {
    pub fn prop(&self) -> &'static str {
        match self {
            Toggle::Sys => defs::SYS_SWAP_PROP,
            Toggle::Env => defs::ENV_SWAP_PROP,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Toggle::Sys => "System vold swap",
            Toggle::Env => "Environment primary swap",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    #[default]
    Default,
    Unavailable,
    NoEmulatedSupport,
    DisabledBecausePeerEnabled,
}

impl MessageKind {
    pub fn summary(&self, toggle: Toggle) -> &'static str {
        match (self, toggle) {
            (MessageKind::Default, Toggle::Sys) => {
                "Swap internal and external storage at the vold level"
            }
            (MessageKind::Default, Toggle::Env) => {
                "Use external storage as primary storage for apps"
            }
            (MessageKind::Unavailable, _) => "Storage swap is not available on this device",
            (MessageKind::NoEmulatedSupport, _) => {
                "Not supported when primary storage is emulated"
            }
            (MessageKind::DisabledBecausePeerEnabled, Toggle::Sys) => {
                "Disabled while environment primary swap is enabled"
            }
            (MessageKind::DisabledBecausePeerEnabled, Toggle::Env) => {
                "Disabled while system vold swap is enabled"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ToggleView {
    pub checked: bool,
    pub enabled: bool,
    pub message: MessageKind,
}

impl ToggleView {
    const fn new(checked: bool, enabled: bool, message: MessageKind) -> Self {
        Self {
            checked,
            enabled,
            message,
        }
    }

    const fn locked(message: MessageKind) -> Self {
        Self::new(false, false, message)
    }

    const fn open(checked: bool) -> Self {
        Self::new(checked, true, MessageKind::Default)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub sys: ToggleView,
    pub env: ToggleView,
    pub primary_storage_warning: bool,
}

impl Resolution {
    pub fn view(&self, toggle: Toggle) -> &ToggleView {
        match toggle {
            Toggle::Sys => &self.sys,
            Toggle::Env => &self.env,
        }
    }
}

pub fn resolve(
    available: bool,
    primary_emulated: bool,
    sys_flag: bool,
    env_flag: bool,
) -> Resolution {
    let (sys, env) = if !available {
        (
            ToggleView::locked(MessageKind::Unavailable),
            ToggleView::locked(MessageKind::Unavailable),
        )
    } else if primary_emulated {
        (
            ToggleView::locked(MessageKind::NoEmulatedSupport),
            ToggleView::open(env_flag),
        )
    } else {
        match (sys_flag, env_flag) {
            // Unreachable through this tool, tolerated when set externally.
            (true, true) => (ToggleView::open(true), ToggleView::open(true)),
            (true, false) => (
                ToggleView::open(true),
                ToggleView::locked(MessageKind::DisabledBecausePeerEnabled),
            ),
            (false, true) => (
                ToggleView::locked(MessageKind::DisabledBecausePeerEnabled),
                ToggleView::open(true),
            ),
            (false, false) => (ToggleView::open(false), ToggleView::open(false)),
        }
    };

    Resolution {
        sys,
        env,
        primary_storage_warning: sys_flag && env_flag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOOLS: [bool; 2] = [false, true];

    #[test]
    fn unavailable_locks_everything() {
        for emulated in BOOLS {
            for sys in BOOLS {
                for env in BOOLS {
                    let r = resolve(false, emulated, sys, env);
                    assert_eq!(r.sys, ToggleView::locked(MessageKind::Unavailable));
                    assert_eq!(r.env, ToggleView::locked(MessageKind::Unavailable));
                }
            }
        }
    }

    #[test]
    fn emulated_primary_only_offers_env() {
        for sys in BOOLS {
            for env in BOOLS {
                let r = resolve(true, true, sys, env);
                assert!(!r.sys.checked);
                assert!(!r.sys.enabled);
                assert_eq!(r.sys.message, MessageKind::NoEmulatedSupport);
                assert_eq!(r.env.checked, env);
                assert!(r.env.enabled);
                assert_eq!(r.env.message, MessageKind::Default);
            }
        }
    }

    #[test]
    fn enabled_side_locks_its_peer() {
        let r = resolve(true, false, true, false);
        assert_eq!(r.sys, ToggleView::open(true));
        assert_eq!(
            r.env,
            ToggleView::locked(MessageKind::DisabledBecausePeerEnabled)
        );

        let r = resolve(true, false, false, true);
        assert_eq!(
            r.sys,
            ToggleView::locked(MessageKind::DisabledBecausePeerEnabled)
        );
        assert_eq!(r.env, ToggleView::open(true));
    }

    #[test]
    fn nothing_set_leaves_both_open() {
        let r = resolve(true, false, false, false);
        assert_eq!(r.sys, ToggleView::open(false));
        assert_eq!(r.env, ToggleView::open(false));
        assert!(!r.primary_storage_warning);
    }

    #[test]
    fn contradictory_flags_are_tolerated() {
        let r = resolve(true, false, true, true);
        assert_eq!(r.sys, ToggleView::open(true));
        assert_eq!(r.env, ToggleView::open(true));
        assert!(r.primary_storage_warning);
    }

    #[test]
    fn warning_follows_both_flags_only() {
        for available in BOOLS {
            for emulated in BOOLS {
                for sys in BOOLS {
                    for env in BOOLS {
                        let r = resolve(available, emulated, sys, env);
                        assert_eq!(r.primary_storage_warning, sys && env);
                    }
                }
            }
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        for available in BOOLS {
            for emulated in BOOLS {
                for sys in BOOLS {
                    for env in BOOLS {
                        assert_eq!(
                            resolve(available, emulated, sys, env),
                            resolve(available, emulated, sys, env)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn peer_message_names_the_other_toggle() {
        let kind = MessageKind::DisabledBecausePeerEnabled;
        assert!(kind.summary(Toggle::Sys).contains("environment"));
        assert!(kind.summary(Toggle::Env).contains("system"));
    }
}

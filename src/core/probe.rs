// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use crate::{defs, sys::props::PropertyStore};

/// Which of the fixed mount points the environment advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Probe {
    pub primary_found: bool,
    pub secondary_found: bool,
}

impl Probe {
    /// The swap is offered whenever the removable slot exists. The primary
    /// slot only gates the switchable pair property.
    pub fn available(&self) -> bool {
        self.secondary_found
    }

    pub fn switchable_pair(&self) -> Option<&'static str> {
        (self.primary_found && self.secondary_found).then_some(defs::SWITCHABLE_PAIR_VALUE)
    }
}

pub fn probe<'a, I>(primary_path: &str, secondary_paths: I) -> Probe
where
    I: IntoIterator<Item = &'a str>,
{
    let primary_found = primary_path == defs::PRIMARY_MOUNT;
    let secondary_found = secondary_paths
        .into_iter()
        .any(|path| path == defs::SECONDARY_MOUNT);

    Probe {
        primary_found,
        secondary_found,
    }
}

pub fn split_secondary(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(defs::SECONDARY_PATH_SEPARATOR)
}

/// Probes the environment, logs what is missing and publishes the
/// switchable pair when both slots are present. Never fails.
pub fn establish<S: PropertyStore + ?Sized>(
    store: &mut S,
    primary_path: &str,
    secondary_paths: &str,
) -> Probe {
    let result = probe(primary_path, split_secondary(secondary_paths));

    if !result.primary_found {
        tracing::error!("{} was not found", defs::PRIMARY_MOUNT);
        tracing::error!("System vold swap unavailable");
    }

    if !result.secondary_found {
        tracing::error!("{} was not found", defs::SECONDARY_MOUNT);
        tracing::error!("System vold swap unavailable");
        tracing::error!("Environment primary swap unavailable");
        return result;
    }

    if let Some(pair) = result.switchable_pair() {
        match store.set(defs::SWITCHABLE_PAIR_PROP, pair) {
            Ok(()) => tracing::info!(
                "System property set: {}={}",
                defs::SWITCHABLE_PAIR_PROP,
                pair
            ),
            Err(e) => tracing::warn!(
                "Failed to publish {}: {:#}",
                defs::SWITCHABLE_PAIR_PROP,
                e
            ),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::props::memory::MemoryProps;

    #[test]
    fn secondary_slot_is_required() {
        for primary in ["/storage/sdcard0", "/storage/emulated/0", ""] {
            let result = probe(primary, ["/storage/usbdisk", "/storage/sdcard2"]);
            assert!(!result.available(), "primary {primary:?}");
            assert_eq!(result.switchable_pair(), None);
        }
    }

    #[test]
    fn both_slots_publish_pair() {
        let mut store = MemoryProps::default();
        let result = establish(
            &mut store,
            "/storage/sdcard0",
            "/storage/usbdisk:/storage/sdcard1",
        );

        assert!(result.available());
        assert_eq!(
            store.writes,
            vec![(
                "persist.sys.vold.switchablepair".to_string(),
                "sdcard0,sdcard1".to_string()
            )]
        );
    }

    #[test]
    fn primary_mismatch_does_not_gate_availability() {
        let mut store = MemoryProps::default();
        let result = establish(&mut store, "/storage/emulated/legacy", "/storage/sdcard1");

        assert!(result.available());
        assert!(!result.primary_found);
        assert!(store.writes.is_empty());
    }

    #[test]
    fn matching_is_exact() {
        let result = probe(
            "/storage/sdcard0/",
            split_secondary("/storage/sdcard1/:/storage/SDCARD1"),
        );
        assert!(!result.primary_found);
        assert!(!result.secondary_found);
    }

    #[test]
    fn empty_environment_is_unavailable() {
        let mut store = MemoryProps::default();
        let result = establish(&mut store, "", "");

        assert_eq!(result, Probe::default());
        assert!(store.writes.is_empty());
    }

    #[test]
    fn failed_pair_write_keeps_availability() {
        let mut store = MemoryProps {
            read_only: true,
            ..Default::default()
        };
        let result = establish(&mut store, "/storage/sdcard0", "/storage/sdcard1");

        assert!(result.available());
        assert!(store.values.is_empty());
    }
}

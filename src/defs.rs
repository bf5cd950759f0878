// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

// Storage Swap Constants

// Fixed mount points of the swappable pair
pub const PRIMARY_MOUNT: &str = "/storage/sdcard0";
pub const SECONDARY_MOUNT: &str = "/storage/sdcard1";
pub const SWITCHABLE_PAIR_VALUE: &str = "sdcard0,sdcard1";

// Environment inputs
pub const PRIMARY_STORAGE_ENV: &str = "EXTERNAL_STORAGE";
pub const SECONDARY_STORAGE_ENV: &str = "SECONDARY_STORAGE";
pub const SECONDARY_PATH_SEPARATOR: char = ':';

// Persisted properties
pub const SYS_SWAP_PROP: &str = "persist.sys.vold.switchexternal";
pub const ENV_SWAP_PROP: &str = "persist.sys.env.switchexternal";
pub const SWITCHABLE_PAIR_PROP: &str = "persist.sys.vold.switchablepair";

// Reboot is requested from init through this property
pub const POWERCTL_PROP: &str = "sys.powerctl";
pub const POWERCTL_REBOOT: &str = "reboot";

pub const PROP_TRUE: &str = "1";
pub const PROP_FALSE: &str = "0";

// Filesystems backing an emulated primary storage
pub const EMULATED_FS_TYPES: &[&str] = &["fuse", "sdcardfs", "esdfs"];

// Automation agent that must not drive a commit
pub const MONKEY_CMDLINE: &str = "com.android.commands.monkey";

pub const CONFIG_FILE: &str = "/data/adb/storage-swap/config.toml";
pub const LOG_FILE: &str = "/data/adb/storage-swap/storage-swap.log";

#[cfg(target_os = "android")]
pub const LOG_TAG: &str = "AdvancedStorageSettings";

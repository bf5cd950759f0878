// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{
    fs,
    path::{Path, PathBuf},
};

use procfs::process::Process;

use crate::defs;

pub fn is_emulated_fs(fs_type: &str) -> bool {
    defs::EMULATED_FS_TYPES.contains(&fs_type)
}

/// Filesystem type of the mount containing `path`: the deepest mount point
/// that is a prefix of it. Later entries shadow earlier ones on the same point.
pub fn fs_type_for<'a>(path: &Path, mounts: &'a [(PathBuf, String)]) -> Option<&'a str> {
    mounts
        .iter()
        .filter(|(mount_point, _)| path.starts_with(mount_point))
        .max_by_key(|(mount_point, _)| mount_point.components().count())
        .map(|(_, fs_type)| fs_type.as_str())
}

/// Whether the primary storage at `path` is backed by an emulated filesystem.
///
/// Unreadable mount tables count as physical.
pub fn primary_is_emulated<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

    let Ok(mountinfo) = Process::myself().and_then(|p| p.mountinfo()) else {
        tracing::debug!("mountinfo unavailable, assuming physical primary storage");
        return false;
    };

    let mounts: Vec<(PathBuf, String)> = mountinfo
        .into_iter()
        .map(|m| (m.mount_point, m.fs_type))
        .collect();

    fs_type_for(&resolved, &mounts).is_some_and(|fs_type| {
        tracing::debug!("{} is backed by {}", resolved.display(), fs_type);
        is_emulated_fs(fs_type)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounts(entries: &[(&str, &str)]) -> Vec<(PathBuf, String)> {
        entries
            .iter()
            .map(|(point, fs)| (PathBuf::from(point), fs.to_string()))
            .collect()
    }

    #[test]
    fn fuse_family_is_emulated() {
        assert!(is_emulated_fs("fuse"));
        assert!(is_emulated_fs("sdcardfs"));
        assert!(is_emulated_fs("esdfs"));
        assert!(!is_emulated_fs("vfat"));
        assert!(!is_emulated_fs("ext4"));
    }

    #[test]
    fn nested_path_uses_enclosing_mount() {
        let table = mounts(&[
            ("/", "rootfs"),
            ("/mnt/shell/emulated", "fuse"),
            ("/storage/sdcard1", "vfat"),
        ]);
        assert_eq!(
            fs_type_for(Path::new("/mnt/shell/emulated/0"), &table),
            Some("fuse")
        );

        let table = mounts(&[
            ("/", "rootfs"),
            ("/storage", "tmpfs"),
            ("/storage/emulated", "sdcardfs"),
        ]);
        assert_eq!(
            fs_type_for(Path::new("/storage/emulated/0"), &table),
            Some("sdcardfs")
        );
    }

    #[test]
    fn deepest_mount_wins() {
        let table = mounts(&[
            ("/storage", "tmpfs"),
            ("/storage/sdcard0", "vfat"),
            ("/", "rootfs"),
        ]);
        assert_eq!(
            fs_type_for(Path::new("/storage/sdcard0"), &table),
            Some("vfat")
        );
    }

    #[test]
    fn later_mount_shadows_same_point() {
        let table = mounts(&[
            ("/storage/emulated", "tmpfs"),
            ("/storage/emulated", "fuse"),
        ]);
        assert_eq!(
            fs_type_for(Path::new("/storage/emulated/0"), &table),
            Some("fuse")
        );
    }

    #[test]
    fn prefix_match_is_per_component() {
        let table = mounts(&[("/storage/sdcard", "fuse")]);
        assert_eq!(fs_type_for(Path::new("/storage/sdcard1"), &table), None);
    }
}

// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod monkey;
pub mod power;
pub mod props;
pub mod storage;

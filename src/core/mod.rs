// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod probe;
pub mod resolver;
pub mod session;

// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod log;
pub mod validation;

pub use self::{log::*, validation::*};

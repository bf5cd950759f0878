// Copyright 2026 Storage Swap Developers
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fmt as std_fmt, fs::create_dir_all, path::Path};

use anyhow::{Result, anyhow};
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, FmtContext, FormatEvent, FormatFields},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

struct SimpleFormatter;

impl<S, N> FormatEvent<S, N> for SimpleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> std_fmt::Result {
        let level = *event.metadata().level();
        write!(writer, "[{}] ", level)?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so the file writer flushes.
pub fn init_logging(verbose: bool, log_path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let mut guard = None;

    let file_layer = match log_path {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log filename"))?;
            let directory = path
                .parent()
                .ok_or_else(|| anyhow!("Invalid log directory"))?;
            create_dir_all(directory)?;

            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);
            guard = Some(g);

            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking)
                    .event_format(SimpleFormatter),
            )
        }
        None => None,
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(SimpleFormatter);

    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer);

    #[cfg(target_os = "android")]
    {
        let android_layer = tracing_android::layer(crate::defs::LOG_TAG).ok();
        registry.with(android_layer).init();
    }

    #[cfg(not(target_os = "android"))]
    {
        registry.init();
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    // The global subscriber can only be installed once per test binary.
    #[test]
    fn each_event_reaches_the_log_file_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("storage-swap.log");

        let guard = init_logging(false, Some(&path)).unwrap();
        tracing::info!("switchable pair marker");
        tracing::debug!("filtered out at info level");
        drop(guard);

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("switchable pair marker").count(), 1);
        assert!(content.contains("[INFO] switchable pair marker"));
        assert!(!content.contains("filtered out"));
    }
}

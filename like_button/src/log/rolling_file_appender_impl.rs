// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::{Context, IntoDiagnostic};
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// The file is never rotated. Wrapping the returned appender in
/// `tracing_appender::non_blocking` loses log lines on exit, so don't.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no parent folder, or no file name
/// - The parent folder or the file can't be created (eg: missing permissions)
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(&path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access current folder {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
        .wrap_err(format!("Can't create log file {}", path.display()))
}

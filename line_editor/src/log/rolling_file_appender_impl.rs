// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A file appender that never rolls over. `path_str` is the full path of the log file,
/// eg: `/tmp/line_editor.log` or `line_editor.log`.
///
/// # Errors
///
/// Returns an error if the path has no file name, or the file can't be created.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = Path::new(path_str);

    let parent = path.parent().unwrap_or_else(|| Path::new("."));

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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_without_file_name_is_an_error() {
        assert!(try_create("/").is_err());
        assert!(try_create("..").is_err());
    }

    #[test]
    fn test_creates_file_in_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("line_editor.log");
        let _appender = try_create(file_path.to_str().unwrap()).unwrap();
        assert!(file_path.exists());
    }
}

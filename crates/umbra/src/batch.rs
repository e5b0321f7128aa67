//! File and directory plumbing around the pure rewrite.
//!
//! Per-file failures never abort a batch: every `.svg` file is attempted, the
//! failures are logged, and a single aggregate error reports the count at the
//! end.

use crate::annotate::Annotator;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read one file as UTF-8, annotate it, and write the result.
///
/// Parent directories of `dest` are created as needed. Unreadable files and
/// invalid encodings are reported as distinct errors.
pub fn process_file(annotator: &Annotator, source: &Path, dest: &Path) -> Result<()> {
    let bytes = fs::read(source).map_err(|source_err| Error::Io {
        path: source.display().to_string(),
        source: source_err,
    })?;
    let svg = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8 {
        path: source.display().to_string(),
    })?;

    let rewritten = annotator.annotate(&svg);

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source_err| Error::Io {
                path: parent.display().to_string(),
                source: source_err,
            })?;
        }
    }
    fs::write(dest, rewritten).map_err(|source_err| Error::Io {
        path: dest.display().to_string(),
        source: source_err,
    })
}

/// Annotate every `.svg` file in `source_dir` (non-recursive) into `dest_dir`.
///
/// A source path that is not a directory aborts before any file is touched.
/// After that, per-file errors are collected without stopping the batch; a
/// nonzero count surfaces as [`Error::Batch`] once every file was attempted.
pub fn process_dir(annotator: &Annotator, source_dir: &Path, dest_dir: &Path) -> Result<()> {
    if !source_dir.is_dir() {
        return Err(Error::SourceNotADirectory {
            path: source_dir.display().to_string(),
        });
    }
    fs::create_dir_all(dest_dir).map_err(|source_err| Error::Io {
        path: dest_dir.display().to_string(),
        source: source_err,
    })?;

    let entries = fs::read_dir(source_dir).map_err(|source_err| Error::Io {
        path: source_dir.display().to_string(),
        source: source_err,
    })?;

    let mut failed = 0usize;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "failed to read directory entry");
                failed += 1;
                continue;
            }
        };
        let source = entry.path();
        let Some(name) = source.file_name() else {
            continue;
        };
        if source.extension().and_then(|ext| ext.to_str()) != Some("svg") {
            continue;
        }

        let dest = dest_dir.join(name);
        match process_file(annotator, &source, &dest) {
            Ok(()) => {
                tracing::debug!(file = %source.display(), "processed");
            }
            Err(err) => {
                tracing::warn!(file = %source.display(), %err, "failed to process");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(Error::Batch { failed });
    }
    Ok(())
}

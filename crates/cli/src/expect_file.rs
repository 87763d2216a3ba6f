// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading and writing line files.
//!
//! Files are always written with LF line endings so stored fixtures
//! stay diff-stable across platforms. Reading tolerates CRLF.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::CompareError;

/// Read `path` and split it into lines without terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CompareError> {
    let bytes = std::fs::read(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| CompareError::NotUtf8 {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Write `lines` to `path`, each followed by `\n`.
///
/// The path is opened and written through, so symlinks, FIFOs and
/// devices such as `/dev/stdout` receive the content in place.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), CompareError> {
    let write_err = |source| CompareError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_all_lines(&mut out, lines).map_err(write_err)?;
    out.flush().map_err(write_err)
}

/// Replace the contents of `path` with `lines`, each followed by `\n`.
///
/// The content goes to a temporary file next to the resolved target that
/// is then renamed over it, so readers never see a partially written
/// file. A symlinked `path` stays a symlink; its target is replaced.
pub fn replace_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<(), CompareError> {
    let write_err = |source| CompareError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        write_all_lines(&mut out, lines).map_err(write_err)?;
        out.flush().map_err(write_err)?;
    }
    if let Some(permissions) = target_permissions(&target) {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(write_err)?;
    }
    tmp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn write_all_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> io::Result<()> {
    for line in lines {
        out.write_all(line.as_ref().as_bytes())?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Permissions for the file replacing `path`: those of the existing file,
/// or 0644 for a new one on Unix.
fn target_permissions(path: &Path) -> Option<std::fs::Permissions> {
    if let Ok(meta) = std::fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(std::fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

#[cfg(test)]
#[path = "expect_file_tests.rs"]
mod tests;

//! Best-effort secure file deletion.
//!
//! Overwrites a file's contents with zero bytes, flushes them to disk and
//! then unlinks the file. Journaling filesystems, SSD wear levelling and OS
//! caches may still hold old copies of the data elsewhere.

use std::fs::{self, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, StoreError};

const CHUNK: usize = 8 * 1024;

/// Zero a file's contents in place and delete it. No-op if `path` is absent.
///
/// # Errors
///
/// Returns `StoreError::WriteFailed` if the file cannot be overwritten or
/// removed.
pub fn secure_delete(path: &Path) -> Result<()> {
    if !path.exists() {
        debug!(path = %path.display(), "nothing to erase");
        return Ok(());
    }

    let zeroed = overwrite_with_zeros(path)?;
    fs::remove_file(path).map_err(|source| StoreError::WriteFailed {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), bytes = zeroed, "file erased");
    Ok(())
}

/// Overwrite every byte of an existing file with zero, keeping its length.
///
/// Returns the number of bytes overwritten.
pub fn overwrite_with_zeros(path: &Path) -> Result<u64> {
    let failed = |source| StoreError::WriteFailed {
        path: path.display().to_string(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(failed)?;

    let len = file.metadata().map_err(failed)?.len();
    file.seek(SeekFrom::Start(0)).map_err(failed)?;

    let zeros = [0u8; CHUNK];
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(CHUNK as u64) as usize;
        file.write_all(&zeros[..n]).map_err(failed)?;
        remaining -= n as u64;
    }
    file.sync_all().map_err(failed)?;

    Ok(len)
}

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::CapError;
use crate::types::CapOutcome;

/// Shrink the file at `path` to at most `threshold` bytes, in place.
///
/// The first `threshold` bytes are kept as-is; everything at or beyond that
/// offset is discarded. The size comes from a metadata query, never from
/// reading the content. A missing file is a normal outcome and is never
/// created.
///
/// The metadata query and the truncating write are separate filesystem
/// calls; a concurrent writer to the same path can race them.
pub fn cap_file(path: &Path, threshold: u64) -> Result<CapOutcome, CapError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "target file does not exist");
            return Ok(CapOutcome::NotFound);
        }
        Err(source) => return Err(CapError::io(path, source)),
    };

    if !meta.is_file() {
        return Err(CapError::NotAFile(path.to_path_buf()));
    }

    let len = meta.len();
    if len <= threshold {
        debug!(path = %path.display(), len, threshold, "file already within threshold");
        return Ok(CapOutcome::AlreadySmall { len });
    }

    let file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| CapError::io(path, source))?;
    file.set_len(threshold)
        .map_err(|source| CapError::io(path, source))?;

    debug!(path = %path.display(), from = len, to = threshold, "truncated file");
    Ok(CapOutcome::Truncated { from: len })
}

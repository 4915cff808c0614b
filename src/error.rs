use std::io;
use std::path::PathBuf;

/// Errors surfaced by the cap operation.
///
/// A missing target file is not an error; it is reported as
/// [`CapOutcome::NotFound`](crate::types::CapOutcome::NotFound). Everything
/// else the filesystem can throw at us propagates through here unmodified,
/// with the offending path attached.
#[derive(Debug, thiserror::Error)]
pub enum CapError {
    #[error("'{0}' exists but is not a regular file")]
    NotAFile(PathBuf),

    #[error("'{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CapError {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        CapError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Terminal failures of a single write run.
#[derive(Debug)]
pub enum WriteError {
    /// The destination could not be created or opened.
    Open { path: PathBuf, source: io::Error },
    /// The write call itself failed.
    Write { path: PathBuf, source: io::Error },
    /// Fewer bytes were accepted than the payload holds.
    PartialWrite {
        path: PathBuf,
        written: usize,
        expected: usize,
    },
}

impl WriteError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            WriteError::Open { path, .. }
            | WriteError::Write { path, .. }
            | WriteError::PartialWrite { path, .. } => path,
        }
    }
}

impl fmt::Display for WriteError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            WriteError::Open { path, source } => {
                write!(f, "Error opening file '{}': {source}", path.display())
            }
            WriteError::Write { path, source } => {
                write!(f, "Error writing to file '{}': {source}", path.display())
            }
            WriteError::PartialWrite {
                path,
                written,
                expected,
            } => write!(
                f,
                "Error writing to file '{}': wrote {written} of {expected} bytes",
                path.display()
            ),
        }
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriteError::Open { source, .. } | WriteError::Write { source, .. } => Some(source),
            WriteError::PartialWrite { .. } => None,
        }
    }
}

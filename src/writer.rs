use crate::error::WriteError;
use crate::report::Written;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes a payload to one destination in a single call.
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create or truncate the destination, write `payload` once and close it.
    ///
    /// The handle is dropped on every return path; on success it is closed
    /// before the outcome is handed back.
    pub fn write(
        &self,
        payload: &[u8],
    ) -> Result<Written, WriteError> {
        let mut file = self.open()?;
        let bytes = self.write_to(&mut file, payload)?;
        drop(file);
        debug!("closed {:?}", self.path);

        Ok(Written {
            path: self.path.clone(),
            bytes,
        })
    }

    /// Issue exactly one `write` of `payload` into `sink` and check the count.
    pub fn write_to<W: Write>(
        &self,
        sink: &mut W,
        payload: &[u8],
    ) -> Result<usize, WriteError> {
        let written = sink.write(payload).map_err(|source| WriteError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("wrote {written}/{} bytes to {:?}", payload.len(), self.path);

        if written != payload.len() {
            return Err(WriteError::PartialWrite {
                path: self.path.clone(),
                written,
                expected: payload.len(),
            });
        }
        Ok(written)
    }

    fn open(&self) -> Result<File, WriteError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| WriteError::Open {
                path: self.path.clone(),
                source,
            })?;
        debug!("opened {:?}", self.path);
        Ok(file)
    }
}

//! Destinations for finished export files.

use std::future::Future;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::ExportError;

/// Where a saved export ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedExport {
    pub location: String,
    pub bytes: usize,
}

/// Receives finished export files.
pub trait ExportSink {
    fn save(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<SavedExport, ExportError>> + Send;
}

/// Writes exports into a directory.
///
/// Files are written to a temporary name first and renamed into place, so a
/// reader never sees a half-written document.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    async fn save(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<SavedExport, ExportError> {
        let write_error = |path: &Path| {
            let path = path.to_path_buf();
            move |source| ExportError::Write { path, source }
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_error(&self.dir))?;

        let path = self.dir.join(filename);
        let tmp = self.dir.join(format!(".{filename}.tmp"));
        let len = bytes.len();

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(write_error(&tmp))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(write_error(&path))?;

        info!(path = %path.display(), content_type, bytes = len, "export saved");

        Ok(SavedExport {
            location: path.display().to_string(),
            bytes: len,
        })
    }
}

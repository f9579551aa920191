//! Where export assets such as the organization logo come from.

use std::future::Future;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ExportError;

/// Supplies binary assets to the exporter.
pub trait AssetSource {
    /// Logo image bytes, or `None` when no logo is configured.
    fn logo(&self) -> impl Future<Output = Result<Option<Vec<u8>>, ExportError>> + Send;
}

/// No assets at all. Exports come out without a logo.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetSource for NoAssets {
    async fn logo(&self) -> Result<Option<Vec<u8>>, ExportError> {
        Ok(None)
    }
}

/// Assets read from the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FileAssets {
    pub logo_path: Option<PathBuf>,
}

impl FileAssets {
    pub fn new(logo_path: Option<PathBuf>) -> Self {
        Self { logo_path }
    }
}

impl AssetSource for FileAssets {
    async fn logo(&self) -> Result<Option<Vec<u8>>, ExportError> {
        let Some(path) = &self.logo_path else {
            return Ok(None);
        };
        debug!(path = %path.display(), "loading logo");
        tokio::fs::read(path)
            .await
            .map(Some)
            .map_err(|e| ExportError::Asset(format!("{}: {e}", path.display())))
    }
}

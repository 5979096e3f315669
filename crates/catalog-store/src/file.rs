use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::item::Catalog;
use crate::traits::CatalogStore;

/// Catalog stored as a JSON file on local disk.
///
/// Every call opens and closes its own handle. By default `save` writes the
/// target in place. With atomic writes enabled each save writes a uniquely
/// named temp file in the target's directory and renames it over the
/// original, so readers never observe a half-written document and
/// overlapping saves never share a temp file.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    atomic_writes: bool,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            atomic_writes: false,
        }
    }

    /// Enable or disable write-to-temp-then-rename on `save`.
    pub fn with_atomic_writes(mut self, enabled: bool) -> Self {
        self.atomic_writes = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn atomic_writes(&self) -> bool {
        self.atomic_writes
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    async fn write_atomic(&self, bytes: Vec<u8>) -> StoreResult<()> {
        let dir = self.parent_dir();
        let target = self.path.clone();
        tokio::task::spawn_blocking(move || -> StoreResult<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(&bytes)?;
            tmp.persist(&target).map_err(|e| StoreError::Io(e.error))?;
            Ok(())
        })
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(e)))?
    }

    async fn read_bytes(&self) -> StoreResult<Option<Vec<u8>>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Catalog> {
        let bytes = self
            .read_bytes()
            .await?
            .ok_or_else(|| StoreError::NotFound(self.path.display().to_string()))?;
        Catalog::from_document(&bytes)
    }

    async fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let bytes = catalog.to_document()?;
        let len = bytes.len();
        if self.atomic_writes {
            self.write_atomic(bytes).await?;
        } else {
            tokio::fs::write(&self.path, &bytes).await?;
        }
        tracing::debug!(path = %self.path.display(), bytes = len, "catalog saved");
        Ok(())
    }

    async fn read_raw(&self) -> StoreResult<Option<Vec<u8>>> {
        self.read_bytes().await
    }
}

use std::path::{Path, PathBuf};
use std::sync::Arc;

use catalog_store::{Catalog, CatalogStore};
use tokio::sync::Mutex;

use crate::error::ServerResult;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn CatalogStore>,
    index_path: Arc<PathBuf>,
    write_lock: Option<Arc<Mutex<()>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, index_path: impl Into<PathBuf>) -> Self {
        Self {
            store,
            index_path: Arc::new(index_path.into()),
            write_lock: None,
        }
    }

    /// Serialize every read-modify-write cycle behind one lock.
    pub fn with_serialized_writes(mut self, enabled: bool) -> Self {
        self.write_lock = enabled.then(|| Arc::new(Mutex::new(())));
        self
    }

    pub fn store(&self) -> &dyn CatalogStore {
        self.store.as_ref()
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn serializes_writes(&self) -> bool {
        self.write_lock.is_some()
    }

    /// Load the catalog, apply `mutate`, and save the result.
    ///
    /// The catalog is saved even when `mutate` changed nothing. Any load or
    /// save failure aborts the cycle; an unsaved mutation is simply dropped.
    pub async fn modify_catalog<F, R>(&self, mutate: F) -> ServerResult<R>
    where
        F: FnOnce(&mut Catalog) -> R + Send,
        R: Send,
    {
        let _guard = match &self.write_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };
        let mut catalog = self.store.load().await?;
        let out = mutate(&mut catalog);
        self.store.save(&catalog).await?;
        Ok(out)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("index_path", &self.index_path)
            .field("serialize_writes", &self.serializes_writes())
            .finish()
    }
}

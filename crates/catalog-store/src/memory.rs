use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::item::Catalog;
use crate::traits::CatalogStore;

/// In-memory catalog store.
///
/// Holds the serialized document bytes rather than a parsed [`Catalog`], so
/// it goes through the same encode/parse path as the file backend and can
/// hold empty or malformed documents in tests.
pub struct InMemoryCatalogStore {
    document: RwLock<Option<Vec<u8>>>,
}

impl InMemoryCatalogStore {
    /// Create a store with no document.
    pub fn new() -> Self {
        Self {
            document: RwLock::new(None),
        }
    }

    /// Create a store holding `catalog`.
    pub fn with_catalog(catalog: &Catalog) -> StoreResult<Self> {
        Ok(Self::from_bytes(catalog.to_document()?))
    }

    /// Create a store holding the given document bytes as-is.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            document: RwLock::new(Some(bytes.into())),
        }
    }

    /// A copy of the current document bytes, if any.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.document.read().expect("lock poisoned").clone()
    }

    /// Drop the document entirely.
    pub fn clear(&self) {
        *self.document.write().expect("lock poisoned") = None;
    }
}

impl Default for InMemoryCatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn load(&self) -> StoreResult<Catalog> {
        let doc = self.document.read().expect("lock poisoned");
        match doc.as_deref() {
            Some(bytes) => Catalog::from_document(bytes),
            None => Err(StoreError::NotFound("in-memory document".into())),
        }
    }

    async fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let bytes = catalog.to_document()?;
        *self.document.write().expect("lock poisoned") = Some(bytes);
        Ok(())
    }

    async fn read_raw(&self) -> StoreResult<Option<Vec<u8>>> {
        Ok(self.snapshot())
    }
}

impl std::fmt::Debug for InMemoryCatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.snapshot().map(|doc| doc.len());
        f.debug_struct("InMemoryCatalogStore")
            .field("document_bytes", &size)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, Price};

    #[tokio::test]
    async fn save_then_load() {
        let store = InMemoryCatalogStore::new();
        let mut catalog = Catalog::new();
        catalog.push(Item::new("remo", "80"));
        store.save(&catalog).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, catalog);
        assert_eq!(loaded.find("remo").unwrap().price, Some(Price::from("80")));
    }

    #[tokio::test]
    async fn load_without_document_fails() {
        let store = InMemoryCatalogStore::new();
        assert!(matches!(store.load().await, Err(StoreError::NotFound(_))));
        assert!(store.read_raw().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn read_raw_is_verbatim() {
        let store = InMemoryCatalogStore::from_bytes(r#"{"items":[]}   "#);
        let raw = store.read_raw().await.unwrap().unwrap();
        assert_eq!(raw, br#"{"items":[]}   "#);
    }

    #[tokio::test]
    async fn malformed_document_fails_load() {
        let store = InMemoryCatalogStore::from_bytes("garbage");
        assert!(matches!(store.load().await, Err(StoreError::Malformed(_))));
    }

    #[tokio::test]
    async fn clear_drops_document() {
        let store = InMemoryCatalogStore::with_catalog(&Catalog::new()).unwrap();
        assert!(store.snapshot().is_some());
        store.clear();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryCatalogStore::from_bytes("{}");
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryCatalogStore"));
        assert!(debug.contains("document_bytes"));
    }
}

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::item::Catalog;

/// Durable home of the catalog document.
///
/// All implementations must satisfy these invariants:
/// - `load` reads the current document every time; nothing is cached.
/// - `save` replaces the whole document.
/// - `read_raw` returns the stored bytes without parsing them.
/// - No locking spans a `load`/`save` pair. Two overlapping
///   read-modify-write cycles race, and the last `save` wins.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Load and parse the catalog.
    ///
    /// Returns `Err(StoreError::NotFound)` if no document exists and
    /// `Err(StoreError::Malformed)` if it cannot be parsed.
    async fn load(&self) -> StoreResult<Catalog>;

    /// Overwrite the stored document with `catalog`.
    async fn save(&self, catalog: &Catalog) -> StoreResult<()>;

    /// Read the stored document bytes verbatim.
    ///
    /// Returns `Ok(None)` if no document exists. An existing but empty
    /// document comes back as `Some` with zero bytes.
    async fn read_raw(&self) -> StoreResult<Option<Vec<u8>>>;
}

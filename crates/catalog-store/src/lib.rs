//! Item catalog storage for the catalog service.
//!
//! The whole catalog lives in a single JSON document of the form
//! `{"items": [{"name": ..., "price": ...}, ...]}`. Every request that needs
//! it loads the document fresh, and every mutation rewrites it whole.
//!
//! # Model
//!
//! - [`Catalog`] -- ordered list of items plus any extra top-level keys
//! - [`Item`] -- a named entry with an opaque [`Price`]
//! - [`Price`] -- text or number, stored exactly as supplied
//!
//! # Storage Backends
//!
//! All backends implement the [`CatalogStore`] trait:
//!
//! - [`JsonFileStore`] -- a JSON file on local disk
//! - [`InMemoryCatalogStore`] -- an in-memory document for tests and embedding
//!
//! # Design Rules
//!
//! 1. No caching: `load` always reads the current document.
//! 2. `save` overwrites the whole document, formatted with one-space indentation.
//! 3. `read_raw` never parses; it hands back the stored bytes untouched.
//! 4. Stores do not lock across load/save. Callers that need serialized
//!    read-modify-write cycles must coordinate themselves.
//! 5. A malformed document is an error, never silently replaced.

pub mod error;
pub mod file;
pub mod item;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileStore;
pub use item::{Catalog, Item, Price};
pub use memory::InMemoryCatalogStore;
pub use traits::CatalogStore;

//! HTTP server for the item catalog.
//!
//! Serves a static index page and four item endpoints over a single JSON
//! document. Every mutating request runs a full load -> mutate -> save cycle
//! against the injected [`catalog_store::CatalogStore`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::{DEFAULT_PORT, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use handler::ItemParams;
pub use server::CatalogServer;
pub use state::AppState;

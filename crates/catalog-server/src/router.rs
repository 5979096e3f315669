use axum::{Router, routing::any};
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all catalog endpoints.
///
/// Routes match the exact path only and accept any method.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handler::serve_index))
        .route("/agregar", any(handler::add_item))
        .route("/deportes", any(handler::list_items))
        .route("/editar", any(handler::update_item))
        .route("/eliminar", any(handler::delete_item))
        .fallback(handler::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse};
use catalog_store::{Item, Price};
use serde::Deserialize;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Operation completed successfully";
pub const NO_DATA_MESSAGE: &str = "No data found";
pub const NOT_FOUND_MESSAGE: &str = "Not Found";

/// Query parameters shared by the item endpoints.
///
/// The wire names are `nombre` and `precio`; `name` and `price` are accepted
/// as aliases. Empty values count as missing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ItemParams {
    #[serde(rename = "nombre", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "precio", alias = "price")]
    pub price: Option<String>,
}

impl ItemParams {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    pub fn price(&self) -> Option<Price> {
        self.price
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(Price::from)
    }
}

type ParamsExtract = Result<Query<ItemParams>, QueryRejection>;

fn params(extracted: ParamsExtract) -> ServerResult<ItemParams> {
    extracted
        .map(|Query(p)| p)
        .map_err(|e| ServerError::BadRequest(e.body_text()))
}

/// `/` -- the static index page.
pub async fn serve_index(State(state): State<AppState>) -> ServerResult<Html<String>> {
    let html = tokio::fs::read_to_string(state.index_path()).await?;
    Ok(Html(html))
}

/// `/agregar` -- append an item.
pub async fn add_item(
    State(state): State<AppState>,
    query: ParamsExtract,
) -> ServerResult<&'static str> {
    let params = params(query)?;
    let (Some(name), Some(price)) = (params.name(), params.price()) else {
        return Err(ServerError::BadRequest("name and price are required".into()));
    };

    let item = Item::new(name, price);
    state.modify_catalog(move |catalog| catalog.push(item)).await?;
    tracing::info!(name, "item added");
    Ok(SUCCESS_MESSAGE)
}

/// `/deportes` -- the stored document, byte for byte.
pub async fn list_items(State(state): State<AppState>) -> ServerResult<impl IntoResponse> {
    match state.store().read_raw().await? {
        Some(bytes) if !bytes.is_empty() => {
            Ok(([(header::CONTENT_TYPE, "application/json")], bytes))
        }
        _ => Err(ServerError::NotFound(NO_DATA_MESSAGE.into())),
    }
}

/// `/editar` -- set the price of the first item with the given name.
///
/// Reports success even when no item matches; the unchanged catalog is
/// still written back.
pub async fn update_item(
    State(state): State<AppState>,
    query: ParamsExtract,
) -> ServerResult<&'static str> {
    let params = params(query)?;
    let Some(name) = params.name() else {
        return Err(ServerError::BadRequest("name is required".into()));
    };

    let price = params.price();
    let matched = state
        .modify_catalog(|catalog| catalog.update_price(name, price))
        .await?;
    tracing::info!(name, matched, "item updated");
    Ok(SUCCESS_MESSAGE)
}

/// `/eliminar` -- remove every item with the given name.
pub async fn delete_item(
    State(state): State<AppState>,
    query: ParamsExtract,
) -> ServerResult<&'static str> {
    let params = params(query)?;
    let Some(name) = params.name() else {
        return Err(ServerError::BadRequest("name is required".into()));
    };

    let removed = state
        .modify_catalog(|catalog| catalog.remove_named(name))
        .await?;
    tracing::info!(name, removed, "items deleted");
    Ok(SUCCESS_MESSAGE)
}

/// Fallback for every unrouted path.
pub async fn not_found() -> ServerError {
    ServerError::NotFound(NOT_FOUND_MESSAGE.into())
}

//! HTTP backend for the to-do list.
//!
//! # Design
//! Four routes over a single `Items` table. Handlers translate JSON payloads
//! into `ItemStore` calls; failures funnel through `ApiError` and the panic
//! layer so no handler formats its own error response.

pub mod config;
pub mod db;
pub mod error;
pub mod store;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use db::Database;
pub use error::{ApiError, ErrorBody};
pub use store::{Item, ItemPatch, ItemStore, NewItem, StoreError};

/// Shown to clients in place of a stored null name. English wording chosen
/// over the original service's Hebrew "שם לא זמין" ("name not available").
pub const NAME_PLACEHOLDER: &str = "Name not available";

/// An item as returned by `GET /items`, with null fields defaulted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name.unwrap_or_else(|| NAME_PLACEHOLDER.to_string()),
            is_complete: item.is_complete.unwrap_or(false),
        }
    }
}

pub fn app(store: ItemStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", put(update_item).delete(delete_item))
        .with_state(store)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(listener: TcpListener, store: ItemStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_items(State(store): State<ItemStore>) -> Result<Json<Vec<ItemView>>, ApiError> {
    let items = store.list_all()?;
    Ok(Json(items.into_iter().map(ItemView::from).collect()))
}

async fn create_item(
    State(store): State<ItemStore>,
    payload: Result<Json<NewItem>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;
    let item = store.create(&input)?;
    let location = format!("/items/{}", item.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(item)))
}

async fn update_item(
    State(store): State<ItemStore>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemPatch>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(store.update(id, &patch)?))
}

async fn delete_item(
    State(store): State<ItemStore>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    store.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

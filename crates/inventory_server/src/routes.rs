//! Router assembly for the inventory API.

use crate::controller::{
    create_fruit, delete_fruit, get_fruit_by_id, get_fruits, health, route_not_found,
    update_fruit,
};
use crate::state::AppState;
use axum::routing::{get, MethodRouter};
use axum::Router;

/// Base path of the fruit resource.
pub const INVENTORY_BASE_PATH: &str = "/api/inventory";

/// Routes of the fruit resource, mounted at `INVENTORY_BASE_PATH`.
///
/// Each path is also served with a trailing slash.
pub fn inventory_routes() -> Router<AppState> {
    let collection = format!("{INVENTORY_BASE_PATH}/");
    let item = format!("{INVENTORY_BASE_PATH}/{{id}}");

    Router::new()
        .route(INVENTORY_BASE_PATH, collection_methods())
        .route(&collection, collection_methods())
        .route(&item, item_methods())
        .route(&format!("{item}/"), item_methods())
}

fn collection_methods() -> MethodRouter<AppState> {
    get(get_fruits).post(create_fruit)
}

fn item_methods() -> MethodRouter<AppState> {
    get(get_fruit_by_id).put(update_fruit).delete(delete_fruit)
}

/// Builds the complete application router.
///
/// Unmatched paths answer 404 with the usual `{"error": ...}` body.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(inventory_routes())
        .fallback(route_not_found)
        .with_state(state)
}

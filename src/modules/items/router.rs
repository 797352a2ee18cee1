use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_item, delete_item, get_item_by_id, get_items, upsert_item};

pub fn init_items_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_items).post(create_item))
        .route(
            "/{id}",
            get(get_item_by_id).put(upsert_item).delete(delete_item),
        )
}

//! In-memory to-do service.
//!
//! Routes map one-to-one onto [`ItemStore`] operations. The store sits behind
//! a single lock and each handler takes it once, so lookup and mutation happen
//! as one step.

pub mod error;
pub mod store;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

pub use error::ApiError;
pub use store::{Item, ItemStore};

/// Body accepted by create and update. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct ItemPayload {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Welcome {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Deleted {
    pub result: String,
}

pub type Db = Arc<RwLock<ItemStore>>;

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(ItemStore::seeded())
}

pub fn app_with_store(store: ItemStore) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let router = Router::new()
        .route("/", get(welcome))
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .with_state(db);
    server_support::with_request_tracing(router)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    server_support::serve(listener, app()).await
}

async fn welcome() -> Json<Welcome> {
    Json(Welcome {
        message: "welcome to this api course".to_string(),
    })
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    Json(db.read().await.list())
}

async fn get_item(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Item>, ApiError> {
    let items = db.read().await;
    items.find(id).cloned().map(Json).ok_or_else(|| {
        tracing::debug!(id, "item not found");
        ApiError::NotFound(id)
    })
}

async fn create_item(
    State(db): State<Db>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(input) = payload?;
    let item = db.write().await.insert(input.name, input.description);
    tracing::info!(id = item.id, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(db): State<Db>,
    Path(id): Path<u64>,
    payload: Result<Json<ItemPayload>, JsonRejection>,
) -> Result<Json<Item>, ApiError> {
    let Json(input) = payload?;
    let mut items = db.write().await;
    let item = items
        .update(id, input.name, input.description)
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(id, "update target not found");
            ApiError::NotFound(id)
        })?;
    tracing::info!(id, "item updated");
    Ok(Json(item))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<u64>) -> Result<Json<Deleted>, ApiError> {
    if !db.write().await.delete(id) {
        tracing::debug!(id, "delete target not found");
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(id, "item deleted");
    Ok(Json(Deleted {
        result: "Item deleted".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_to_json() {
        let item = Item {
            id: 1,
            name: "ML".to_string(),
            description: "Udemy course".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "ML", "description": "Udemy course"})
        );
    }

    #[test]
    fn payload_requires_name() {
        let result: Result<ItemPayload, _> = serde_json::from_str(r#"{"description":"Y"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_requires_description() {
        let result: Result<ItemPayload, _> = serde_json::from_str(r#"{"name":"X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_rejects_null_fields() {
        let result: Result<ItemPayload, _> =
            serde_json::from_str(r#"{"name":null,"description":"Y"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn payload_ignores_unknown_keys() {
        let input: ItemPayload =
            serde_json::from_str(r#"{"name":"X","description":"Y","id":77}"#).unwrap();
        assert_eq!(input.name, "X");
        assert_eq!(input.description, "Y");
    }
}

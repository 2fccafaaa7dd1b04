//! API Handlers
//!
//! HTTP request handlers for the `/shoes` resource.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use tracing::info;

use crate::config::Config;
use crate::error::{Result, ShoeError};
use crate::models::{DataResponse, HealthResponse, ShoeId, ShoeRecord, ShoeRequest};
use crate::store::ShoeStore;

/// Application state shared across all handlers.
///
/// Contains the shoe store wrapped in Arc<RwLock<>> so mutations are
/// serialized behind the write lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe shoe store
    pub store: Arc<RwLock<ShoeStore>>,
}

impl AppState {
    /// Creates a new AppState with the given store.
    pub fn new(store: ShoeStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Seeds the store when `seed_data` is set.
    pub fn from_config(config: &Config) -> Self {
        let store = if config.seed_data {
            ShoeStore::with_seed()
        } else {
            ShoeStore::new()
        };
        Self::new(store)
    }
}

/// Request body as extracted: only a JSON object gets past the extractor.
type ShoeBody = std::result::Result<Json<Map<String, Value>>, JsonRejection>;

fn read_body(body: ShoeBody) -> Result<ShoeRequest> {
    let Json(object) = body?;
    ShoeRequest::from_object(object)
}

/// Parses a path id.
///
/// Only canonical decimal (`7`, not `+7` or `07`) is accepted, so each record
/// has exactly one URL. Anything else cannot name a stored shoe.
fn parse_id(raw: &str) -> Result<ShoeId> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw == "0" || !raw.starts_with('0'));
    if !canonical {
        return Err(ShoeError::not_found(raw));
    }
    raw.parse().map_err(|_| ShoeError::not_found(raw))
}

/// Handler for GET /shoes
pub async fn list_shoes(State(state): State<AppState>) -> Json<DataResponse<Vec<ShoeRecord>>> {
    let store = state.store.read().await;
    Json(DataResponse::new(store.find_all()))
}

/// Handler for GET /shoes/:id
pub async fn get_shoe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<ShoeRecord>>> {
    let id = parse_id(&id)?;

    let store = state.store.read().await;
    let shoe = store.find_by_id(id)?;

    Ok(Json(DataResponse::new(shoe)))
}

/// Handler for POST /shoes
///
/// Responds 201 with the stored record, including its new id.
pub async fn create_shoe(
    State(state): State<AppState>,
    body: ShoeBody,
) -> Result<(StatusCode, Json<DataResponse<ShoeRecord>>)> {
    let (brand, model) = read_body(body)?.validate()?;

    // Acquire write lock; id assignment happens under it
    let shoe = state.store.write().await.create(brand, model)?;
    info!(id = shoe.id, brand = %shoe.brand, model = %shoe.model, "shoe created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(shoe))))
}

/// Handler for PUT /shoes/:id
///
/// The body is validated before the id is looked up, so a bad body on an
/// unknown id is a 400.
pub async fn update_shoe(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: ShoeBody,
) -> Result<Json<DataResponse<ShoeRecord>>> {
    let (brand, model) = read_body(body)?.validate()?;
    let id = parse_id(&id)?;

    let shoe = state.store.write().await.update(id, brand, model)?;
    info!(id = shoe.id, "shoe updated");

    Ok(Json(DataResponse::new(shoe)))
}

/// Handler for DELETE /shoes/:id
///
/// Responds 204 with an empty body.
pub async fn remove_shoe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;

    state.store.write().await.remove(id)?;
    info!(id = id, "shoe removed");

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(brand: Option<&str>, model: Option<&str>) -> ShoeBody {
        let mut object = Map::new();
        if let Some(brand) = brand {
            object.insert("brand".to_string(), Value::from(brand));
        }
        if let Some(model) = model {
            object.insert("model".to_string(), Value::from(model));
        }
        Ok(Json(object))
    }

    fn empty_state() -> AppState {
        AppState::new(ShoeStore::new())
    }

    #[tokio::test]
    async fn test_create_and_get_handler() {
        let state = empty_state();

        let (status, Json(created)) =
            create_shoe(State(state.clone()), body(Some("scarpa"), Some("instinct")))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.data.brand, "scarpa");

        let Json(fetched) = get_shoe(State(state), Path(created.data.id.to_string()))
            .await
            .unwrap();
        assert_eq!(fetched.data, created.data);
    }

    #[tokio::test]
    async fn test_create_missing_model() {
        let state = empty_state();

        let result = create_shoe(State(state.clone()), body(Some("scarpa"), None)).await;
        assert!(matches!(result, Err(ShoeError::Validation(_))));
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_handler() {
        let state = AppState::new(ShoeStore::with_seed());

        let Json(response) = list_shoes(State(state)).await;
        assert_eq!(response.data.len(), 3);
        assert!(response.data.iter().all(|shoe| shoe.id > 0));
    }

    #[tokio::test]
    async fn test_get_nonexistent_shoe() {
        let state = empty_state();

        let result = get_shoe(State(state.clone()), Path("999".to_string())).await;
        assert!(matches!(result, Err(ShoeError::NotFound(_))));

        let result = get_shoe(State(state), Path("abc".to_string())).await;
        assert!(matches!(result, Err(ShoeError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_handler() {
        let state = AppState::new(ShoeStore::with_seed());

        let Json(updated) = update_shoe(
            State(state.clone()),
            Path("1".to_string()),
            body(Some("Willy"), Some("Black Lab/Golden Retriever Mix")),
        )
        .await
        .unwrap();
        assert_eq!(updated.data.id, 1);
        assert_eq!(updated.data.brand, "Willy");

        let stored = state.store.read().await.find_by_id(1).unwrap();
        assert_eq!(stored, updated.data);
    }

    #[tokio::test]
    async fn test_update_validation_before_lookup() {
        let state = empty_state();

        let result = update_shoe(
            State(state),
            Path("999".to_string()),
            body(None, Some("x")),
        )
        .await;
        assert!(matches!(result, Err(ShoeError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_handler() {
        let state = AppState::new(ShoeStore::with_seed());

        let status = remove_shoe(State(state.clone()), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let result = get_shoe(State(state.clone()), Path("2".to_string())).await;
        assert!(matches!(result, Err(ShoeError::NotFound(_))));

        let result = remove_shoe(State(state), Path("2".to_string())).await;
        assert!(matches!(result, Err(ShoeError::NotFound(_))));
    }

    #[test]
    fn test_parse_id_canonical_only() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("120").unwrap(), 120);

        for raw in ["+1", "01", "00", "", "-1", " 1", "1.0", "99999999999999999999"] {
            assert!(
                matches!(parse_id(raw), Err(ShoeError::NotFound(_))),
                "{:?} should not parse",
                raw
            );
        }
    }

    #[tokio::test]
    async fn test_alias_ids_do_not_resolve() {
        let state = AppState::new(ShoeStore::with_seed());

        for raw in ["+1", "01"] {
            let result = get_shoe(State(state.clone()), Path(raw.to_string())).await;
            assert!(matches!(result, Err(ShoeError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}

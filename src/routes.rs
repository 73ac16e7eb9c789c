//! HTTP surface of the storefront API.
//!
//! Handlers are stateless routers over the injected [`CatalogStore`]; whether
//! the catalog comes from Postgres or the built-in demo set is decided once at
//! startup, never per request.

use std::sync::Arc;

use axum::extract::{Multipart, Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::catalog;
use crate::error::ApiError;
use crate::models::{Order, OrderStatus};
use crate::store::{CatalogStore, SeedOutcome};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub list_limit: i64,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/seed", post(seed))
        .route("/products", get(list_products))
        .route("/products/:slug", get(get_product))
        .route("/orders", post(create_order))
        .route("/upload", post(upload))
        .layer(TraceLayer::new_for_http())
        // Public storefront API: any origin, any method, any header.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct Message {
    message: &'static str,
}

async fn root() -> Json<Message> {
    Json(Message { message: "SurpriseSoul API running" })
}

#[derive(Serialize)]
struct SeedResponse {
    seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let outcome = state.store.seed_products(&catalog::starter_products()).await?;
    let response = match outcome {
        SeedOutcome::NotConfigured => SeedResponse {
            seeded: false,
            message: Some("Database not configured"),
            count: None,
        },
        SeedOutcome::AlreadySeeded => SeedResponse {
            seeded: false,
            message: Some("Products already exist"),
            count: None,
        },
        SeedOutcome::Seeded { count } => {
            tracing::info!(count, "starter catalog seeded");
            SeedResponse { seeded: true, message: None, count: Some(count) }
        }
    };
    Ok(Json(response))
}

async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.store.list_products(state.list_limit).await?))
}

async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state
        .store
        .product_by_slug(&slug)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

#[derive(Serialize)]
struct OrderAccepted {
    order_id: String,
}

async fn create_order(
    State(state): State<AppState>,
    Json(mut order): Json<Order>,
) -> Result<Json<OrderAccepted>, ApiError> {
    order.validate()?;
    // New orders always start out pending, whatever the client sent.
    order.status = OrderStatus::Pending;
    let order_id = state.store.insert_order(&order).await?;
    Ok(Json(OrderAccepted { order_id }))
}

#[derive(Serialize)]
struct UploadResponse {
    url: String,
}

/// Accepts a multipart file and answers with a synthesized path. The file is
/// not persisted; storage is handled outside this service.
async fn upload(mut multipart: Multipart) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        if let Some(name) = field.file_name() {
            let url = format!("/uploads/{name}");
            return Ok(Json(UploadResponse { url }));
        }
    }
    Err(ApiError::BadRequest("no file field in upload".to_string()))
}

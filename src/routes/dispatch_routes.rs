use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::dispatch_controller::DispatchController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::dispatch_dto::{DispatchEntryRequest, DispatchFilterQuery, DispatchResponse};
use crate::middleware::auth::Identity;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dispatch_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_dispatch))
        .route("/", get(list_dispatch))
        .route("/:id", get(get_dispatch))
        .route("/:id", put(update_dispatch))
        .route("/:id", delete(delete_dispatch))
}

async fn create_dispatch(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<DispatchEntryRequest>,
) -> Result<Json<ApiResponse<DispatchResponse>>, AppError> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.create(&identity, request).await?;
    Ok(Json(response))
}

async fn list_dispatch(
    State(state): State<AppState>,
    Query(query): Query<DispatchFilterQuery>,
) -> Result<Json<Vec<DispatchResponse>>, AppError> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DispatchResponse>, AppError> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<DispatchEntryRequest>,
) -> Result<Json<ApiResponse<DispatchResponse>>, AppError> {
    let controller = DispatchController::new(state.pool.clone());
    let response = controller.update(id, &identity, request).await?;
    Ok(Json(response))
}

async fn delete_dispatch(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DispatchController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Despacho eliminado exitosamente"
    })))
}

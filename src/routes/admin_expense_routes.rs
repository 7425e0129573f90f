use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_expense_controller::AdminExpenseController;
use crate::dto::admin_expense_dto::{
    AdminExpenseEntryRequest, AdminExpenseFilterQuery, AdminExpenseResponse,
};
use crate::dto::auth_dto::ApiResponse;
use crate::middleware::auth::Identity;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_expense_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_admin_expense))
        .route("/", get(list_admin_expenses))
        .route("/:id", get(get_admin_expense))
        .route("/:id", put(update_admin_expense))
        .route("/:id", delete(delete_admin_expense))
}

async fn create_admin_expense(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AdminExpenseEntryRequest>,
) -> Result<Json<ApiResponse<AdminExpenseResponse>>, AppError> {
    let controller = AdminExpenseController::new(state.pool.clone());
    let response = controller.create(&identity, request).await?;
    Ok(Json(response))
}

async fn list_admin_expenses(
    State(state): State<AppState>,
    Query(query): Query<AdminExpenseFilterQuery>,
) -> Result<Json<Vec<AdminExpenseResponse>>, AppError> {
    let controller = AdminExpenseController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_admin_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdminExpenseResponse>, AppError> {
    let controller = AdminExpenseController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_admin_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AdminExpenseEntryRequest>,
) -> Result<Json<ApiResponse<AdminExpenseResponse>>, AppError> {
    let controller = AdminExpenseController::new(state.pool.clone());
    let response = controller.update(id, &identity, request).await?;
    Ok(Json(response))
}

async fn delete_admin_expense(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AdminExpenseController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Gasto administrativo eliminado exitosamente"
    })))
}

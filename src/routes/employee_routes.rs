use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::employee_dto::{
    EmployeeAdminUpdateRequest, EmployeeEntryRequest, EmployeeResponse,
};
use crate::middleware::auth::Identity;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_employee_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/", get(list_employees))
        .route("/:id", get(get_employee))
        .route("/:id", put(update_employee))
        .route("/:id", delete(delete_employee))
        .route("/:id/admin", put(update_employee_admin))
}

async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeEntryRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<EmployeeEntryRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.update_personal(id, request).await?;
    Ok(Json(response))
}

async fn update_employee_admin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<EmployeeAdminUpdateRequest>,
) -> Result<Json<ApiResponse<EmployeeResponse>>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    let response = controller.update_admin(id, &identity, request).await?;
    Ok(Json(response))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = EmployeeController::new(state.pool.clone());
    controller.delete(id, &identity).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Empleado eliminado exitosamente"
    })))
}

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::payroll_controller::PayrollController;
use crate::dto::auth_dto::ApiResponse;
use crate::dto::pay_strip_dto::{PayStripEntryRequest, PayStripResponse};
use crate::dto::payroll_dto::{DispatchSummaryResponse, PayrollSummaryQuery};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payroll_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dispatch_summary))
        .route("/strips", get(list_pay_strips))
        .route("/strips", post(create_pay_strip))
        .route("/strips/:id", put(update_pay_strip))
        .route("/strips/:id", delete(delete_pay_strip))
}

async fn dispatch_summary(
    State(state): State<AppState>,
    Query(query): Query<PayrollSummaryQuery>,
) -> Result<Json<DispatchSummaryResponse>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.summary(query).await?;
    Ok(Json(response))
}

async fn list_pay_strips(
    State(state): State<AppState>,
) -> Result<Json<Vec<PayStripResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.list_strips().await?;
    Ok(Json(response))
}

async fn create_pay_strip(
    State(state): State<AppState>,
    Json(request): Json<PayStripEntryRequest>,
) -> Result<Json<ApiResponse<PayStripResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.create_strip(request).await?;
    Ok(Json(response))
}

async fn update_pay_strip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PayStripEntryRequest>,
) -> Result<Json<ApiResponse<PayStripResponse>>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    let response = controller.update_strip(id, request).await?;
    Ok(Json(response))
}

async fn delete_pay_strip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PayrollController::new(state.pool.clone());
    controller.delete_strip(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Corte de nómina eliminado exitosamente"
    })))
}

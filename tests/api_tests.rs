use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Json, Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["service"], "dispatch-ledger");
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_echo_shape() {
    let app = create_test_app();
    let payload = json!({
        "email": "encoder@example.com",
        "password": "secreta123"
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

// Función helper para crear la app de test
fn create_test_app() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/auth/login", post(login_stub))
}

async fn health() -> Json<Value> {
    Json(json!({
        "service": "dispatch-ledger",
        "status": "healthy"
    }))
}

// Stub sin base de datos: siempre rechaza las credenciales
async fn login_stub(Json(payload): Json<Value>) -> Json<Value> {
    let email = payload["email"].as_str().unwrap_or_default();
    Json(json!({
        "success": false,
        "message": format!("Credenciales inválidas para '{}'", email)
    }))
}

mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Dispatch Ledger - registros de la operación de reparto");
    info!("=========================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, EnvironmentConfig::default());

    // Rutas públicas: salud y autenticación
    let public_routes = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router());

    // Rutas protegidas: requieren identidad válida en cada request
    let protected_routes = Router::new()
        .nest("/api/auth", routes::auth_routes::create_session_router())
        .nest(
            "/api/dispatch",
            routes::dispatch_routes::create_dispatch_router(),
        )
        .nest(
            "/api/maintenance",
            routes::maintenance_routes::create_maintenance_router(),
        )
        .nest(
            "/api/admin-expense",
            routes::admin_expense_routes::create_admin_expense_router(),
        )
        .nest(
            "/api/employee",
            routes::employee_routes::create_employee_router(),
        )
        .nest(
            "/api/payroll",
            routes::payroll_routes::create_payroll_router(),
        )
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            middleware::auth::require_identity,
        ));

    let app = public_routes
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state.clone());

    // Puerto del servidor
    let addr: SocketAddr = format!("{}:{}", app_state.config.host, app_state.config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar encoder");
    info!("   POST /api/auth/login - Iniciar sesión");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("   GET  /api/auth/users - Listar usuarios (solo admin)");
    info!("🚚 Endpoints - Dispatch:");
    info!("   POST /api/dispatch - Registrar despacho");
    info!("   GET  /api/dispatch - Listar despachos (filtro por fechas)");
    info!("   GET  /api/dispatch/:id - Obtener despacho");
    info!("   PUT  /api/dispatch/:id - Actualizar despacho");
    info!("   DELETE /api/dispatch/:id - Eliminar despacho");
    info!("🔧 Endpoints - Maintenance:");
    info!("   POST /api/maintenance - Registrar gasto de mantenimiento");
    info!("   GET  /api/maintenance - Listar gastos (filtro por fechas)");
    info!("   PUT  /api/maintenance/:id - Actualizar gasto");
    info!("   DELETE /api/maintenance/:id - Eliminar gasto");
    info!("🏛️ Endpoints - Admin expense:");
    info!("   POST /api/admin-expense - Registrar gasto administrativo");
    info!("   GET  /api/admin-expense - Listar gastos (filtro por fechas)");
    info!("   PUT  /api/admin-expense/:id - Actualizar gasto");
    info!("   DELETE /api/admin-expense/:id - Eliminar gasto");
    info!("👷 Endpoints - Employee:");
    info!("   POST /api/employee - Alta de empleado");
    info!("   GET  /api/employee - Listar empleados");
    info!("   PUT  /api/employee/:id - Editar datos personales");
    info!("   PUT  /api/employee/:id/admin - Editar datos administrativos (solo admin)");
    info!("   DELETE /api/employee/:id - Baja de empleado (solo admin)");
    info!("💰 Endpoints - Payroll:");
    info!("   GET  /api/payroll/summary - Pivote de despachos por día y trabajador");
    info!("   GET  /api/payroll/strips - Listar cortes de nómina");
    info!("   POST /api/payroll/strips - Registrar corte de nómina");
    info!("   PUT  /api/payroll/strips/:id - Actualizar corte");
    info!("   DELETE /api/payroll/strips/:id - Eliminar corte");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!("Error del servidor: {}", e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de salud
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "dispatch-ledger",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}

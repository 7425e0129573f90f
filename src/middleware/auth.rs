//! Middleware de autenticación
//!
//! Valida el token de sesión y deja en el request una identidad con alcance
//! de request. Los handlers la reciben vía `Extension<Identity>` y los
//! controllers la usan para el sello de auditoría y los chequeos de permisos;
//! no existe estado global de sesión.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{verify_token, JwtConfig};

/// Identidad del encoder autenticado, con alcance de un solo request
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
    pub first_name: String,
    pub role: UserRole,
}

/// Middleware que exige un token válido e inyecta la identidad
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Falta el header Authorization".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Se espera un token Bearer".to_string()))?;

    let config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &config)?;

    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Jwt("Token con identificador inválido".to_string()))?;
    let role = UserRole::parse(&claims.role)
        .ok_or_else(|| AppError::Jwt(format!("Rol desconocido: '{}'", claims.role)))?;

    let identity = Identity {
        user_id,
        first_name: claims.first_name,
        role,
    };

    log::debug!("Request autenticado para encoder '{}'", identity.first_name);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::middleware::auth::Identity;
use crate::models::user::{User, UserRole};
use crate::repositories::user_repository::UserRepository;
use crate::services::authorization_service::{authorize, Action, Resource};
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<LoginResponse, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        // Confirmar que el email no esté ya registrado; el registro original
        // queda intacto y el usuario puede reintentar con otro email.
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict(format!(
                "El email '{}' ya está registrado.",
                request.email
            )));
        }

        // El primer usuario registrado administra el sistema
        let role = if self.repository.count().await? == 0 {
            UserRole::Admin
        } else {
            UserRole::Encoder
        };

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        let user = User {
            id: uuid::Uuid::new_v4(),
            email: request.email,
            password_hash,
            first_name: request.first_name,
            middle_name: request.middle_name,
            last_name: request.last_name,
            role: role.as_str().to_string(),
            created_at: chrono::Utc::now(),
        };

        let saved = self.repository.create(&user).await?;

        // El registro inicia sesión de inmediato
        let token = generate_token(saved.id, &saved.first_name, &saved.role, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            UserResponse::from(saved),
            "Usuario registrado exitosamente".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, &user.first_name, &user.role, &self.jwt_config)?;

        Ok(LoginResponse::success(
            token,
            UserResponse::from(user),
            "Sesión iniciada".to_string(),
        ))
    }

    pub async fn me(&self, identity: &Identity) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(identity.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn list_users(&self, identity: &Identity) -> Result<Vec<UserResponse>, AppError> {
        authorize(identity, Resource::Users, Action::View)?;

        let users = self.repository.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}

//! Servicio de autorización
//!
//! Chequeo explícito de permisos (actor, recurso, acción) -> permitir/negar,
//! verificable en aislamiento. Ningún handler decide acceso por su cuenta.

use crate::middleware::auth::Identity;
use crate::models::user::UserRole;
use crate::utils::errors::AppError;

/// Recursos protegidos del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Dispatch,
    Maintenance,
    AdminExpense,
    Employee,
    /// Datos administrativos del empleado: empresa, afiliaciones, compensación
    EmployeeAdmin,
    PayStrip,
    PayrollSummary,
    Users,
}

/// Acciones sobre un recurso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

/// Decide si un rol puede ejecutar una acción sobre un recurso.
pub fn is_allowed(role: UserRole, resource: Resource, action: Action) -> bool {
    match resource {
        // Solo administradores tocan datos administrativos del empleado,
        // dan de baja empleados o listan usuarios.
        Resource::EmployeeAdmin => role == UserRole::Admin,
        Resource::Users => role == UserRole::Admin,
        Resource::Employee => match action {
            Action::Delete => role == UserRole::Admin,
            _ => true,
        },
        // El resto de los recursos está abierto a cualquier sesión válida.
        Resource::Dispatch
        | Resource::Maintenance
        | Resource::AdminExpense
        | Resource::PayStrip
        | Resource::PayrollSummary => true,
    }
}

/// Variante con error listo para propagar desde un controller.
pub fn authorize(identity: &Identity, resource: Resource, action: Action) -> Result<(), AppError> {
    if is_allowed(identity.role, resource, action) {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "No tienes permiso para realizar esta acción".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity(role: UserRole) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            first_name: "Juan".to_string(),
            role,
        }
    }

    #[test]
    fn test_encoder_cannot_touch_admin_resources() {
        assert!(!is_allowed(
            UserRole::Encoder,
            Resource::EmployeeAdmin,
            Action::Edit
        ));
        assert!(!is_allowed(
            UserRole::Encoder,
            Resource::Employee,
            Action::Delete
        ));
        assert!(!is_allowed(UserRole::Encoder, Resource::Users, Action::View));
    }

    #[test]
    fn test_admin_is_allowed_everywhere() {
        assert!(is_allowed(
            UserRole::Admin,
            Resource::EmployeeAdmin,
            Action::Edit
        ));
        assert!(is_allowed(
            UserRole::Admin,
            Resource::Employee,
            Action::Delete
        ));
        assert!(is_allowed(UserRole::Admin, Resource::Users, Action::View));
    }

    #[test]
    fn test_everyday_records_open_to_encoders() {
        for resource in [
            Resource::Dispatch,
            Resource::Maintenance,
            Resource::AdminExpense,
            Resource::PayStrip,
            Resource::PayrollSummary,
        ] {
            assert!(is_allowed(UserRole::Encoder, resource, Action::Create));
            assert!(is_allowed(UserRole::Encoder, resource, Action::View));
        }
    }

    #[test]
    fn test_authorize_maps_denial_to_forbidden() {
        let encoder = identity(UserRole::Encoder);
        let result = authorize(&encoder, Resource::EmployeeAdmin, Action::Edit);
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let admin = identity(UserRole::Admin);
        assert!(authorize(&admin, Resource::EmployeeAdmin, Action::Edit).is_ok());
    }
}

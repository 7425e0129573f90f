//! Controllers del sistema
//!
//! Un controller por recurso: validación de negocio, normalización de texto,
//! campos derivados y sello de auditoría antes de tocar el repositorio.

pub mod admin_expense_controller;
pub mod auth_controller;
pub mod dispatch_controller;
pub mod employee_controller;
pub mod maintenance_controller;
pub mod payroll_controller;

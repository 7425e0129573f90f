//! Repositorios de acceso a datos
//!
//! Un repositorio por colección, envolviendo las consultas a PostgreSQL.

pub mod admin_expense_repository;
pub mod dispatch_repository;
pub mod employee_repository;
pub mod maintenance_repository;
pub mod pay_strip_repository;
pub mod user_repository;

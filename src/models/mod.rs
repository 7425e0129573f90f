//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod admin_expense;
pub mod dispatch;
pub mod employee;
pub mod maintenance;
pub mod pay_strip;
pub mod user;

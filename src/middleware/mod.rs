//! Middleware del sistema
//!
//! Este módulo contiene el middleware para autenticación y CORS.

pub mod auth;
pub mod cors;

pub use cors::*;

//! Services module
//!
//! Este módulo contiene la lógica que cruza registros: la síntesis de
//! despachos para nómina y el chequeo de permisos.

pub mod authorization_service;
pub mod dispatch_summary_service;

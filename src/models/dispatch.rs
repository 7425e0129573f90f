//! Modelo de Dispatch
//!
//! Este módulo contiene el registro de un viaje de reparto y el código de
//! día trabajado que clasifica el día para efectos de nómina.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Clasificación del día trabajado - afecta la tarifa de pago
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkDayCode {
    Normal,
    RegHol,
    NoSpHol,
    WkSpHol,
    Rd,
}

impl WorkDayCode {
    pub const ALL: [WorkDayCode; 5] = [
        WorkDayCode::Normal,
        WorkDayCode::RegHol,
        WorkDayCode::NoSpHol,
        WorkDayCode::WkSpHol,
        WorkDayCode::Rd,
    ];

    /// Valor persistido, igual al de los datos existentes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkDayCode::Normal => "normal",
            WorkDayCode::RegHol => "reg_hol",
            WorkDayCode::NoSpHol => "no_sp_hol",
            WorkDayCode::WkSpHol => "wk_sp_hol",
            WorkDayCode::Rd => "rd",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkDayCode::Normal => "Normal Working day",
            WorkDayCode::RegHol => "Regular holiday",
            WorkDayCode::NoSpHol => "Non-working special holiday",
            WorkDayCode::WkSpHol => "Working special holiday",
            WorkDayCode::Rd => "Rest day",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == value)
    }
}

/// Dispatch - mapea exactamente a la tabla dispatch
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dispatch {
    pub id: Uuid,
    pub dispatch_date: String,
    pub wd_code: String,
    pub slip_no: String,
    pub route: String,
    pub area: String,
    pub odo_start: i64,
    pub odo_end: i64,
    pub km: i64,
    pub cbm: Decimal,
    pub qty: i32,
    pub drops: i32,
    pub rate: Decimal,
    pub plate_no: String,
    pub driver: String,
    pub courier: String,
    pub pay_day: String,
    pub invoice_no: String,
    pub or_no: String,
    pub or_amt: Decimal,
    pub encoded_on: String,
    pub encoded_by: String,
    pub encoder_id: Uuid,
}

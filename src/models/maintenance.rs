//! Modelo de Maintenance
//!
//! Gastos de mantenimiento de vehículos. El total es siempre la suma exacta
//! de los tres componentes de costo.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de gasto de mantenimiento
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseType {
    Repair,
    Service,
    RepairAndService,
    Tools,
    Others,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 5] = [
        ExpenseType::Repair,
        ExpenseType::Service,
        ExpenseType::RepairAndService,
        ExpenseType::Tools,
        ExpenseType::Others,
    ];

    /// Valor persistido, igual al de los datos existentes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseType::Repair => "Repair",
            ExpenseType::Service => "Service",
            ExpenseType::RepairAndService => "Repair and service",
            ExpenseType::Tools => "Tool/s",
            ExpenseType::Others => "Others",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

/// Maintenance - mapea exactamente a la tabla maintenance
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maintenance {
    pub id: Uuid,
    pub date: String,
    pub plate_no: String,
    pub expense_type: String,
    pub comment: String,
    pub pyesa_amt: Decimal,
    pub tools_amt: Decimal,
    pub service_charge: Decimal,
    pub total_amt: Decimal,
    pub encoded_on: String,
    pub encoded_by: String,
    pub encoder_id: Uuid,
}

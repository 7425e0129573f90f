//! Modelo de AdminExpense
//!
//! Gastos administrativos: pagos a agencias y oficinas de gobierno.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AdminExpense - mapea exactamente a la tabla admin_expense
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AdminExpense {
    pub id: Uuid,
    pub date: String,
    pub agency: String,
    pub office: String,
    pub frequency: String,
    pub description: String,
    pub amount: Decimal,
    pub encoded_on: String,
    pub encoded_by: String,
    pub encoder_id: Uuid,
}

//! DTOs de AdminExpense

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin_expense::AdminExpense;

/// Request para capturar o editar un gasto administrativo
#[derive(Debug, Deserialize, Validate)]
pub struct AdminExpenseEntryRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub agency: String,

    #[validate(length(min = 1, max = 100))]
    pub office: String,

    #[validate(length(min = 1, max = 100))]
    pub frequency: String,

    #[validate(length(min = 1, max = 250))]
    pub description: String,

    pub amount: Decimal,
}

/// Filtro por rango de fechas para el listado
#[derive(Debug, Deserialize)]
pub struct AdminExpenseFilterQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Response de gasto administrativo
#[derive(Debug, Serialize)]
pub struct AdminExpenseResponse {
    pub id: Uuid,
    pub date: String,
    pub agency: String,
    pub office: String,
    pub frequency: String,
    pub description: String,
    pub amount: Decimal,
    pub encoded_on: String,
    pub encoded_by: String,
}

impl From<AdminExpense> for AdminExpenseResponse {
    fn from(a: AdminExpense) -> Self {
        Self {
            id: a.id,
            date: a.date,
            agency: a.agency,
            office: a.office,
            frequency: a.frequency,
            description: a.description,
            amount: a.amount,
            encoded_on: a.encoded_on,
            encoded_by: a.encoded_by,
        }
    }
}

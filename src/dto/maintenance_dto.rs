//! DTOs de Maintenance

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::maintenance::Maintenance;

/// Request para capturar o editar un gasto de mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct MaintenanceEntryRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub plate_no: String,

    pub expense_type: String,

    #[validate(length(min = 1, max = 250))]
    pub comment: String,

    pub pyesa_amt: Decimal,
    pub tools_amt: Decimal,
    pub service_charge: Decimal,
}

/// Filtro por rango de fechas para el listado
#[derive(Debug, Deserialize)]
pub struct MaintenanceFilterQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Response de gasto de mantenimiento
#[derive(Debug, Serialize)]
pub struct MaintenanceResponse {
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
}

impl From<Maintenance> for MaintenanceResponse {
    fn from(m: Maintenance) -> Self {
        Self {
            id: m.id,
            date: m.date,
            plate_no: m.plate_no,
            expense_type: m.expense_type,
            comment: m.comment,
            pyesa_amt: m.pyesa_amt,
            tools_amt: m.tools_amt,
            service_charge: m.service_charge,
            total_amt: m.total_amt,
            encoded_on: m.encoded_on,
            encoded_by: m.encoded_by,
        }
    }
}

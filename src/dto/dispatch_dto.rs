//! DTOs de Dispatch

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::dispatch::Dispatch;

/// Request para capturar o editar un despacho.
///
/// El mismo formulario sirve para alta y edición; los campos de facturación
/// (pay_day, invoice_no, or_no, or_amt) no se capturan aquí.
#[derive(Debug, Deserialize, Validate)]
pub struct DispatchEntryRequest {
    pub dispatch_date: NaiveDate,

    pub wd_code: String,

    #[validate(length(min = 1, max = 100))]
    pub slip_no: String,

    #[validate(length(min = 1, max = 100))]
    pub route: String,

    #[validate(length(min = 1, max = 250))]
    pub area: String,

    pub odo_start: i64,
    pub odo_end: i64,
    pub cbm: Decimal,
    pub qty: i32,
    pub drops: i32,
    pub rate: Decimal,

    #[validate(length(min = 1, max = 100))]
    pub plate_no: String,

    #[validate(length(min = 1, max = 100))]
    pub driver: String,

    #[validate(length(min = 1, max = 100))]
    pub courier: String,
}

/// Filtros para el listado de despachos
#[derive(Debug, Deserialize)]
pub struct DispatchFilterQuery {
    pub field: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Response de despacho para la API
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
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
}

impl From<Dispatch> for DispatchResponse {
    fn from(d: Dispatch) -> Self {
        Self {
            id: d.id,
            dispatch_date: d.dispatch_date,
            wd_code: d.wd_code,
            slip_no: d.slip_no,
            route: d.route,
            area: d.area,
            odo_start: d.odo_start,
            odo_end: d.odo_end,
            km: d.km,
            cbm: d.cbm,
            qty: d.qty,
            drops: d.drops,
            rate: d.rate,
            plate_no: d.plate_no,
            driver: d.driver,
            courier: d.courier,
            pay_day: d.pay_day,
            invoice_no: d.invoice_no,
            or_no: d.or_no,
            or_amt: d.or_amt,
            encoded_on: d.encoded_on,
            encoded_by: d.encoded_by,
        }
    }
}

//! Modelo de PayStrip
//!
//! Corte de nómina de un empleado para un periodo de pago: asistencia por
//! código de día trabajado, percepciones, deducciones y neto. Los campos de
//! resumen son derivados y se recalculan en cada escritura.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// PayStrip - mapea exactamente a la tabla pay_strip
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PayStrip {
    pub id: Uuid,
    pub pay_day: String,
    pub start_date: String,
    pub end_date: String,
    pub employee_name: String,
    pub employee_no: String,

    // attendance
    pub normal: i32,
    pub reg_hol: i32,
    pub no_sp_hol: i32,
    pub wk_sp_hol: i32,
    pub rd: i32,
    pub equiv_wd: Decimal,

    // pay
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
    pub pay_adj: Decimal,
    pub pay_adj_reason: String,

    // deduction
    pub cash_adv: Decimal,
    pub ca_date: String,
    pub ca_deduction: Decimal,
    pub ca_remaining: Decimal,
    pub sss: Decimal,
    pub philhealth: Decimal,
    pub pag_ibig: Decimal,
    pub life_insurance: Decimal,
    pub income_tax: Decimal,

    // summary (derivados)
    pub total_pay: Decimal,
    pub total_deduct: Decimal,
    pub net_pay: Decimal,
}

//! DTOs de PayStrip

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::pay_strip::PayStrip;

/// Request para capturar o editar un corte de nómina.
///
/// Los campos de resumen (total_pay, total_deduct, net_pay, equiv_wd) son
/// derivados y se recalculan en el servidor en cada escritura.
#[derive(Debug, Deserialize, Validate)]
pub struct PayStripEntryRequest {
    pub pay_day: NaiveDate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub employee_name: String,

    #[validate(length(min = 1, max = 100))]
    pub employee_no: String,

    // attendance
    pub normal: i32,
    pub reg_hol: i32,
    pub no_sp_hol: i32,
    pub wk_sp_hol: i32,
    pub rd: i32,

    // pay
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
    #[serde(default)]
    pub pay_adj: Decimal,
    #[serde(default)]
    pub pay_adj_reason: String,

    // deduction
    pub cash_adv: Decimal,
    pub ca_date: NaiveDate,
    pub ca_deduction: Decimal,
    pub ca_remaining: Decimal,
    pub sss: Decimal,
    pub philhealth: Decimal,
    pub pag_ibig: Decimal,
    pub life_insurance: Decimal,
    pub income_tax: Decimal,
}

/// Response de corte de nómina
#[derive(Debug, Serialize)]
pub struct PayStripResponse {
    pub id: Uuid,
    pub pay_day: String,
    pub start_date: String,
    pub end_date: String,
    pub employee_name: String,
    pub employee_no: String,
    pub normal: i32,
    pub reg_hol: i32,
    pub no_sp_hol: i32,
    pub wk_sp_hol: i32,
    pub rd: i32,
    pub equiv_wd: Decimal,
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
    pub pay_adj: Decimal,
    pub pay_adj_reason: String,
    pub cash_adv: Decimal,
    pub ca_date: String,
    pub ca_deduction: Decimal,
    pub ca_remaining: Decimal,
    pub sss: Decimal,
    pub philhealth: Decimal,
    pub pag_ibig: Decimal,
    pub life_insurance: Decimal,
    pub income_tax: Decimal,
    pub total_pay: Decimal,
    pub total_deduct: Decimal,
    pub net_pay: Decimal,
}

impl From<PayStrip> for PayStripResponse {
    fn from(p: PayStrip) -> Self {
        Self {
            id: p.id,
            pay_day: p.pay_day,
            start_date: p.start_date,
            end_date: p.end_date,
            employee_name: p.employee_name,
            employee_no: p.employee_no,
            normal: p.normal,
            reg_hol: p.reg_hol,
            no_sp_hol: p.no_sp_hol,
            wk_sp_hol: p.wk_sp_hol,
            rd: p.rd,
            equiv_wd: p.equiv_wd,
            basic: p.basic,
            allowance1: p.allowance1,
            allowance2: p.allowance2,
            allowance3: p.allowance3,
            pay_adj: p.pay_adj,
            pay_adj_reason: p.pay_adj_reason,
            cash_adv: p.cash_adv,
            ca_date: p.ca_date,
            ca_deduction: p.ca_deduction,
            ca_remaining: p.ca_remaining,
            sss: p.sss,
            philhealth: p.philhealth,
            pag_ibig: p.pag_ibig,
            life_insurance: p.life_insurance,
            income_tax: p.income_tax,
            total_pay: p.total_pay,
            total_deduct: p.total_deduct,
            net_pay: p.net_pay,
        }
    }
}

//! DTOs de EmployeeProfile

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::employee::EmployeeProfile;

/// Request para alta o edición de datos personales del empleado
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeeEntryRequest {
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    pub middle_name: String,

    #[validate(length(min = 1, max = 100))]
    pub last_name: String,

    #[serde(default)]
    pub extn_name: String,
    pub birthday: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    pub gender: String,

    // address
    pub house_no: Option<i32>,
    pub lot_no: Option<i32>,
    pub block_no: String,
    pub sub_division: String,
    pub purok: String,
    pub brgy: String,
    pub district: String,
    pub city: String,
    pub province: String,
    pub zip_code: String,
}

/// Request de edición administrativa: datos de la empresa, afiliaciones
/// y compensación. Solo disponible para administradores.
#[derive(Debug, Deserialize, Validate)]
pub struct EmployeeAdminUpdateRequest {
    #[validate(length(min = 1, max = 100))]
    pub employee_no: String,

    pub date_hired: NaiveDate,
    pub employment_status: String,

    #[validate(length(min = 1, max = 100))]
    pub position: String,

    #[validate(length(min = 1, max = 100))]
    pub rank: String,

    // benefits
    pub sss_no: String,
    pub philhealth_no: String,
    pub pag_ibig_no: String,
    pub sss_prem: Decimal,
    pub philhealth_prem: Decimal,
    pub pag_ibig_prem: Decimal,

    // compensation
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
}

/// Response de perfil de empleado
#[derive(Debug, Serialize)]
pub struct EmployeeResponse {
    pub id: Uuid,
    pub full_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub extn_name: String,
    pub birthday: String,
    pub gender: String,
    pub house_no: Option<i32>,
    pub lot_no: Option<i32>,
    pub block_no: String,
    pub sub_division: String,
    pub purok: String,
    pub brgy: String,
    pub district: String,
    pub city: String,
    pub province: String,
    pub zip_code: String,
    pub employee_no: String,
    pub date_hired: String,
    pub date_resigned: String,
    pub employment_status: String,
    pub position: String,
    pub rank: String,
    pub sss_no: String,
    pub philhealth_no: String,
    pub pag_ibig_no: String,
    pub sss_prem: Decimal,
    pub philhealth_prem: Decimal,
    pub pag_ibig_prem: Decimal,
    pub cash_adv: Decimal,
    pub ca_date: String,
    pub ca_deduction: Decimal,
    pub ca_remaining: Decimal,
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
}

impl From<EmployeeProfile> for EmployeeResponse {
    fn from(e: EmployeeProfile) -> Self {
        Self {
            id: e.id,
            full_name: e.full_name,
            first_name: e.first_name,
            middle_name: e.middle_name,
            last_name: e.last_name,
            extn_name: e.extn_name,
            birthday: e.birthday,
            gender: e.gender,
            house_no: e.house_no,
            lot_no: e.lot_no,
            block_no: e.block_no,
            sub_division: e.sub_division,
            purok: e.purok,
            brgy: e.brgy,
            district: e.district,
            city: e.city,
            province: e.province,
            zip_code: e.zip_code,
            employee_no: e.employee_no,
            date_hired: e.date_hired,
            date_resigned: e.date_resigned,
            employment_status: e.employment_status,
            position: e.position,
            rank: e.rank,
            sss_no: e.sss_no,
            philhealth_no: e.philhealth_no,
            pag_ibig_no: e.pag_ibig_no,
            sss_prem: e.sss_prem,
            philhealth_prem: e.philhealth_prem,
            pag_ibig_prem: e.pag_ibig_prem,
            cash_adv: e.cash_adv,
            ca_date: e.ca_date,
            ca_deduction: e.ca_deduction,
            ca_remaining: e.ca_remaining,
            basic: e.basic,
            allowance1: e.allowance1,
            allowance2: e.allowance2,
            allowance3: e.allowance3,
        }
    }
}

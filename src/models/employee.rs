//! Modelo de EmployeeProfile
//!
//! Perfil del empleado: datos personales, domicilio, datos de la empresa,
//! afiliaciones y compensación. El nombre completo es un campo derivado.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estatus de empleo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EmploymentStatus {
    Contractual,
    Provisional,
    Regular,
    Awol,
    Resigned,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 5] = [
        EmploymentStatus::Contractual,
        EmploymentStatus::Provisional,
        EmploymentStatus::Regular,
        EmploymentStatus::Awol,
        EmploymentStatus::Resigned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmploymentStatus::Contractual => "Contractual",
            EmploymentStatus::Provisional => "Provisional",
            EmploymentStatus::Regular => "Regular",
            EmploymentStatus::Awol => "Awol",
            EmploymentStatus::Resigned => "Resigned",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

/// EmployeeProfile - mapea exactamente a la tabla employee
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployeeProfile {
    pub id: Uuid,

    // personal info
    pub full_name: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub extn_name: String,
    pub birthday: String,
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

    // company info
    pub employee_no: String,
    pub date_hired: String,
    pub date_resigned: String,
    pub employment_status: String,
    pub position: String,
    pub rank: String,

    // benefits
    pub sss_no: String,
    pub philhealth_no: String,
    pub pag_ibig_no: String,
    pub sss_prem: Decimal,
    pub philhealth_prem: Decimal,
    pub pag_ibig_prem: Decimal,

    // cash advance
    pub cash_adv: Decimal,
    pub ca_date: String,
    pub ca_deduction: Decimal,
    pub ca_remaining: Decimal,

    // compensation
    pub basic: Decimal,
    pub allowance1: Decimal,
    pub allowance2: Decimal,
    pub allowance3: Decimal,
}

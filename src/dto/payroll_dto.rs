//! DTOs del resumen de nómina

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::dispatch_summary_service::DispatchSummary;

/// Rango opcional de fechas de despacho para acotar el resumen
#[derive(Debug, Deserialize)]
pub struct PayrollSummaryQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Tabla pivote de conteos de despacho por código de día trabajado.
///
/// Las filas van en orden de primera aparición; las columnas de drivers
/// primero y las de couriers después, también en orden de primera aparición.
#[derive(Debug, Serialize)]
pub struct DispatchSummaryResponse {
    pub drivers: Vec<String>,
    pub couriers: Vec<String>,
    pub rows: Vec<DispatchSummaryRow>,
}

/// Una fila del pivote: un código de día trabajado y sus conteos por persona
#[derive(Debug, Serialize)]
pub struct DispatchSummaryRow {
    pub wd_code: String,
    pub driver_counts: Vec<usize>,
    pub courier_counts: Vec<usize>,
}

impl From<&DispatchSummary> for DispatchSummaryResponse {
    fn from(summary: &DispatchSummary) -> Self {
        let drivers = summary.drivers().to_vec();
        let couriers = summary.couriers().to_vec();

        let rows = summary
            .wd_codes()
            .iter()
            .map(|wd| DispatchSummaryRow {
                wd_code: wd.clone(),
                driver_counts: drivers
                    .iter()
                    .map(|name| summary.driver_count(wd, name))
                    .collect(),
                courier_counts: couriers
                    .iter()
                    .map(|name| summary.courier_count(wd, name))
                    .collect(),
            })
            .collect();

        Self {
            drivers,
            couriers,
            rows,
        }
    }
}

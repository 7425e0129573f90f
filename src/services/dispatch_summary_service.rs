//! Síntesis de despachos para nómina
//!
//! La nómina necesita saber cuántos días normales, festivos y de descanso
//! despachó cada trabajador. Esto se responde con una tabla pivote de dos
//! lados construida en una sola pasada sobre la colección de despachos:
//! filas = código de día trabajado, columnas = nombre de la persona (sección
//! de drivers seguida de la sección de couriers), celda = número de
//! remisiones distintas. Una combinación sin registros vale 0, nunca se
//! omite.
//!
//! El orden de iteración de los maps no está garantizado, así que el orden
//! de primera aparición de filas y columnas se captura por separado.

use std::collections::{HashMap, HashSet};

use crate::models::dispatch::Dispatch;

/// Cubeta para registros sin código de día trabajado.
pub const UNKNOWN_WD_CODE: &str = "unknown";

/// Hechos mínimos de un despacho que consume la síntesis.
#[derive(Debug, Clone)]
pub struct DispatchFact {
    pub wd_code: String,
    pub driver: String,
    pub courier: String,
    pub slip_no: String,
}

impl From<&Dispatch> for DispatchFact {
    fn from(d: &Dispatch) -> Self {
        Self {
            wd_code: d.wd_code.clone(),
            driver: d.driver.clone(),
            courier: d.courier.clone(),
            slip_no: d.slip_no.clone(),
        }
    }
}

/// Tabla pivote de conteos por (código de día, persona).
#[derive(Debug, Clone, Default)]
pub struct DispatchSummary {
    wd_codes: Vec<String>,
    drivers: Vec<String>,
    couriers: Vec<String>,
    driver_counts: HashMap<(String, String), usize>,
    courier_counts: HashMap<(String, String), usize>,
}

impl DispatchSummary {
    /// Filas del pivote, en orden de primera aparición.
    pub fn wd_codes(&self) -> &[String] {
        &self.wd_codes
    }

    /// Columnas de la sección de drivers, en orden de primera aparición.
    pub fn drivers(&self) -> &[String] {
        &self.drivers
    }

    /// Columnas de la sección de couriers, en orden de primera aparición.
    pub fn couriers(&self) -> &[String] {
        &self.couriers
    }

    /// Remisiones distintas de un driver en un código de día; 0 si no hay.
    pub fn driver_count(&self, wd_code: &str, driver: &str) -> usize {
        self.driver_counts
            .get(&(wd_code.to_string(), driver.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Remisiones distintas de un courier en un código de día; 0 si no hay.
    pub fn courier_count(&self, wd_code: &str, courier: &str) -> usize {
        self.courier_counts
            .get(&(wd_code.to_string(), courier.to_string()))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.wd_codes.is_empty()
    }
}

/// Construye el pivote de conteos a partir de la colección de despachos.
///
/// Cada celda cuenta remisiones distintas, no renglones: una remisión
/// duplicada por un join no infla el conteo. Un registro sin código de día
/// se acumula bajo [`UNKNOWN_WD_CODE`] en lugar de descartarse.
pub fn summarize_dispatch_counts(facts: &[DispatchFact]) -> DispatchSummary {
    let mut summary = DispatchSummary::default();
    let mut driver_slips: HashMap<(String, String), HashSet<String>> = HashMap::new();
    let mut courier_slips: HashMap<(String, String), HashSet<String>> = HashMap::new();

    for fact in facts {
        let wd_code = normalize_wd_code(&fact.wd_code);

        if !summary.wd_codes.iter().any(|c| c == &wd_code) {
            summary.wd_codes.push(wd_code.clone());
        }

        let driver = fact.driver.trim();
        if !driver.is_empty() {
            if !summary.drivers.iter().any(|d| d == driver) {
                summary.drivers.push(driver.to_string());
            }
            driver_slips
                .entry((wd_code.clone(), driver.to_string()))
                .or_default()
                .insert(fact.slip_no.clone());
        }

        let courier = fact.courier.trim();
        if !courier.is_empty() {
            if !summary.couriers.iter().any(|c| c == courier) {
                summary.couriers.push(courier.to_string());
            }
            courier_slips
                .entry((wd_code.clone(), courier.to_string()))
                .or_default()
                .insert(fact.slip_no.clone());
        }
    }

    summary.driver_counts = driver_slips
        .into_iter()
        .map(|(key, slips)| (key, slips.len()))
        .collect();
    summary.courier_counts = courier_slips
        .into_iter()
        .map(|(key, slips)| (key, slips.len()))
        .collect();

    summary
}

fn normalize_wd_code(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNKNOWN_WD_CODE.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fact(wd_code: &str, driver: &str, courier: &str, slip_no: &str) -> DispatchFact {
        DispatchFact {
            wd_code: wd_code.to_string(),
            driver: driver.to_string(),
            courier: courier.to_string(),
            slip_no: slip_no.to_string(),
        }
    }

    #[test]
    fn test_empty_collection_gives_empty_summary() {
        let summary = summarize_dispatch_counts(&[]);
        assert!(summary.is_empty());
        assert!(summary.wd_codes().is_empty());
        assert!(summary.drivers().is_empty());
        assert!(summary.couriers().is_empty());
    }

    #[test]
    fn test_single_record() {
        let summary = summarize_dispatch_counts(&[fact("normal", "Alice", "", "S1")]);

        assert_eq!(summary.wd_codes(), ["normal"]);
        assert_eq!(summary.drivers(), ["Alice"]);
        assert!(summary.couriers().is_empty());
        assert_eq!(summary.driver_count("normal", "Alice"), 1);
        // combinaciones ausentes valen 0
        assert_eq!(summary.driver_count("rd", "Alice"), 0);
        assert_eq!(summary.courier_count("normal", "Alice"), 0);
    }

    #[test]
    fn test_counts_distinct_slips_not_rows() {
        let summary = summarize_dispatch_counts(&[
            fact("normal", "Bob", "", "S1"),
            fact("normal", "Bob", "", "S2"),
        ]);
        assert_eq!(summary.driver_count("normal", "Bob"), 2);

        let duplicated = summarize_dispatch_counts(&[
            fact("normal", "Bob", "", "S1"),
            fact("normal", "Bob", "", "S1"),
        ]);
        assert_eq!(duplicated.driver_count("normal", "Bob"), 1);
    }

    #[test]
    fn test_two_sided_pivot_scenario() {
        let summary = summarize_dispatch_counts(&[
            fact("normal", "Bob", "", "1"),
            fact("rd", "Bob", "", "2"),
            fact("normal", "", "Carl", "3"),
        ]);

        assert_eq!(summary.wd_codes(), ["normal", "rd"]);
        assert_eq!(summary.drivers(), ["Bob"]);
        assert_eq!(summary.couriers(), ["Carl"]);

        assert_eq!(summary.driver_count("normal", "Bob"), 1);
        assert_eq!(summary.driver_count("rd", "Bob"), 1);
        assert_eq!(summary.courier_count("normal", "Carl"), 1);
        assert_eq!(summary.courier_count("rd", "Carl"), 0);
    }

    #[test]
    fn test_same_person_counted_on_both_sides() {
        // un trabajador que manejó y también repartió aparece en ambas secciones
        let summary = summarize_dispatch_counts(&[
            fact("normal", "Dina", "", "S1"),
            fact("rd", "", "Dina", "S2"),
        ]);

        assert_eq!(summary.drivers(), ["Dina"]);
        assert_eq!(summary.couriers(), ["Dina"]);
        assert_eq!(summary.driver_count("normal", "Dina"), 1);
        assert_eq!(summary.courier_count("rd", "Dina"), 1);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let summary = summarize_dispatch_counts(&[
            fact("rd", "Zoe", "Max", "1"),
            fact("normal", "Abe", "Max", "2"),
            fact("rd", "Abe", "Ana", "3"),
        ]);

        assert_eq!(summary.wd_codes(), ["rd", "normal"]);
        assert_eq!(summary.drivers(), ["Zoe", "Abe"]);
        assert_eq!(summary.couriers(), ["Max", "Ana"]);
    }

    #[test]
    fn test_missing_wd_code_buckets_as_unknown() {
        let summary = summarize_dispatch_counts(&[
            fact("", "Bob", "", "S1"),
            fact("   ", "Bob", "", "S2"),
        ]);

        assert_eq!(summary.wd_codes(), [UNKNOWN_WD_CODE]);
        assert_eq!(summary.driver_count(UNKNOWN_WD_CODE, "Bob"), 2);
    }
}

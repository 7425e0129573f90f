//! Fechas del libro de registros
//!
//! Todas las fechas se persisten como texto de ancho fijo `AAAA-MM-DD-Día`
//! (ej. `2024-06-03-Mon`). Con el día de la semana derivado de la fecha, el
//! orden lexicográfico del formato coincide con el orden cronológico, y los
//! filtros por rango se resuelven comparando strings. Este formato debe
//! preservarse exactamente para interoperar con los datos existentes.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Formato persistido: fecha ISO con cero a la izquierda más abreviatura del día.
pub const LEDGER_DATE_FORMAT: &str = "%Y-%m-%d-%a";

/// Convierte una fecha al formato persistido del libro.
pub fn to_ledger_date(date: NaiveDate) -> String {
    date.format(LEDGER_DATE_FORMAT).to_string()
}

/// Fecha de hoy en formato del libro, para el sello de auditoría `encoded_on`.
pub fn today_ledger_date() -> String {
    to_ledger_date(chrono::Local::now().date_naive())
}

/// Parsea una fecha en formato del libro.
pub fn parse_ledger_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, LEDGER_DATE_FORMAT)
        .map_err(|_| AppError::ValidationError(format!("Fecha inválida: '{}'", value)))
}

/// Valida que un rango de fechas esté bien ordenado.
pub fn ensure_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::BadRequest(format!(
            "Rango de fechas inválido: '{}' es posterior a '{}'",
            start, end
        )));
    }
    Ok(())
}

/// Filtro inclusivo por rango sobre un campo de fecha persistido.
///
/// Los límites deben venir ya en formato del libro; el resultado queda
/// ordenado descendente por el campo filtrado. Aplicar el filtro dos veces
/// con los mismos límites devuelve el mismo conjunto.
pub fn filter_by_date_range<T, F>(records: Vec<T>, field: F, start: &str, end: &str) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let mut filtered: Vec<T> = records
        .into_iter()
        .filter(|r| {
            let value = field(r);
            value >= start && value <= end
        })
        .collect();
    filtered.sort_by(|a, b| field(b).cmp(field(a)));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_ledger_format_round_trip() {
        let date = d(2024, 6, 3);
        let text = to_ledger_date(date);
        assert_eq!(text, "2024-06-03-Mon");
        assert_eq!(parse_ledger_date(&text).unwrap(), date);
    }

    #[test]
    fn test_lexicographic_order_matches_chronological() {
        let earlier = to_ledger_date(d(2024, 2, 9));
        let later = to_ledger_date(d(2024, 11, 1));
        assert!(earlier < later);
    }

    #[test]
    fn test_filter_is_inclusive_and_sorted_descending() {
        let records = vec![
            ("a", to_ledger_date(d(2024, 1, 10))),
            ("b", to_ledger_date(d(2024, 1, 15))),
            ("c", to_ledger_date(d(2024, 1, 20))),
            ("d", to_ledger_date(d(2024, 2, 1))),
        ];
        let start = to_ledger_date(d(2024, 1, 10));
        let end = to_ledger_date(d(2024, 1, 20));

        let filtered = filter_by_date_range(records, |r| r.1.as_str(), &start, &end);
        let names: Vec<&str> = filtered.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            ("a", to_ledger_date(d(2024, 3, 5))),
            ("b", to_ledger_date(d(2024, 3, 9))),
            ("c", to_ledger_date(d(2024, 4, 2))),
        ];
        let start = to_ledger_date(d(2024, 3, 1));
        let end = to_ledger_date(d(2024, 3, 31));

        let once = filter_by_date_range(records, |r| r.1.as_str(), &start, &end);
        let twice = filter_by_date_range(once.clone(), |r| r.1.as_str(), &start, &end);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_ensure_date_range_rejects_inverted_bounds() {
        assert!(ensure_date_range(d(2024, 5, 2), d(2024, 5, 1)).is_err());
        assert!(ensure_date_range(d(2024, 5, 1), d(2024, 5, 1)).is_ok());
    }
}

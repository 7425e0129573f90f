use crate::dto::auth_dto::ApiResponse;
use crate::dto::dispatch_dto::{DispatchEntryRequest, DispatchFilterQuery, DispatchResponse};
use crate::middleware::auth::Identity;
use crate::models::dispatch::{Dispatch, WorkDayCode};
use crate::repositories::dispatch_repository::{DispatchDateField, DispatchRepository};
use crate::utils::dates::{ensure_date_range, to_ledger_date, today_ledger_date};
use crate::utils::errors::AppError;
use crate::utils::text::{title_case, upper_case};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Cuántos despachos recientes se muestran sin filtro
const RECENT_LIMIT: i64 = 20;

pub struct DispatchController {
    repository: DispatchRepository,
}

impl DispatchController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DispatchRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        query: DispatchFilterQuery,
    ) -> Result<Vec<DispatchResponse>, AppError> {
        let records = match (query.start, query.end) {
            (Some(start), Some(end)) => {
                ensure_date_range(start, end)?;
                let field = match query.field.as_deref() {
                    None => DispatchDateField::DispatchDate,
                    Some(raw) => DispatchDateField::parse(raw).ok_or_else(|| {
                        AppError::ValidationError(format!("Campo de filtro inválido: '{}'", raw))
                    })?,
                };
                self.repository
                    .filter_by_date_range(field, &to_ledger_date(start), &to_ledger_date(end))
                    .await?
            }
            (None, None) => self.repository.list_recent(RECENT_LIMIT).await?,
            _ => {
                return Err(AppError::BadRequest(
                    "El filtro requiere fecha inicial y final".to_string(),
                ))
            }
        };

        Ok(records.into_iter().map(DispatchResponse::from).collect())
    }

    pub async fn create(
        &self,
        identity: &Identity,
        request: DispatchEntryRequest,
    ) -> Result<ApiResponse<DispatchResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let wd_code = parse_wd_code(&request.wd_code)?;
        let km = compute_distance(request.odo_start, request.odo_end)?;

        let dispatch = Dispatch {
            id: Uuid::new_v4(),
            dispatch_date: to_ledger_date(request.dispatch_date),
            wd_code: wd_code.as_str().to_string(),
            slip_no: request.slip_no,
            route: title_case(&request.route),
            area: title_case(&request.area),
            odo_start: request.odo_start,
            odo_end: request.odo_end,
            km,
            cbm: request.cbm,
            qty: request.qty,
            drops: request.drops,
            rate: request.rate,
            plate_no: upper_case(&request.plate_no),
            driver: title_case(&request.driver),
            courier: title_case(&request.courier),
            // los campos de facturación se llenan después, al liquidar
            pay_day: "-".to_string(),
            invoice_no: "-".to_string(),
            or_no: "-".to_string(),
            or_amt: rust_decimal::Decimal::ZERO,
            encoded_on: today_ledger_date(),
            encoded_by: title_case(&identity.first_name),
            encoder_id: identity.user_id,
        };

        let saved = self.repository.create(&dispatch).await?;

        Ok(ApiResponse::success_with_message(
            DispatchResponse::from(saved),
            "Despacho registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DispatchResponse, AppError> {
        let dispatch = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Despacho no encontrado".to_string()))?;

        Ok(DispatchResponse::from(dispatch))
    }

    pub async fn update(
        &self,
        id: Uuid,
        identity: &Identity,
        request: DispatchEntryRequest,
    ) -> Result<ApiResponse<DispatchResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut dispatch = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Despacho no encontrado".to_string()))?;

        let wd_code = parse_wd_code(&request.wd_code)?;
        let km = compute_distance(request.odo_start, request.odo_end)?;

        dispatch.dispatch_date = to_ledger_date(request.dispatch_date);
        dispatch.wd_code = wd_code.as_str().to_string();
        dispatch.slip_no = request.slip_no;
        dispatch.route = title_case(&request.route);
        dispatch.area = title_case(&request.area);
        dispatch.odo_start = request.odo_start;
        dispatch.odo_end = request.odo_end;
        dispatch.km = km;
        dispatch.cbm = request.cbm;
        dispatch.qty = request.qty;
        dispatch.drops = request.drops;
        dispatch.rate = request.rate;
        dispatch.plate_no = upper_case(&request.plate_no);
        dispatch.driver = title_case(&request.driver);
        dispatch.courier = title_case(&request.courier);
        dispatch.encoded_on = today_ledger_date();
        dispatch.encoded_by = title_case(&identity.first_name);

        let saved = self.repository.update(&dispatch).await?;

        Ok(ApiResponse::success_with_message(
            DispatchResponse::from(saved),
            "Despacho actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Despacho no encontrado".to_string()))?;

        self.repository.delete(id).await?;
        Ok(())
    }
}

fn parse_wd_code(raw: &str) -> Result<WorkDayCode, AppError> {
    WorkDayCode::parse(raw).ok_or_else(|| {
        AppError::ValidationError(format!("Código de día trabajado inválido: '{}'", raw))
    })
}

/// Kilometraje recorrido derivado del odómetro. Un odómetro final menor
/// al inicial se rechaza en lugar de persistir una distancia negativa.
fn compute_distance(odo_start: i64, odo_end: i64) -> Result<i64, AppError> {
    if odo_end < odo_start {
        return Err(AppError::ValidationError(format!(
            "El odómetro final ({}) no puede ser menor que el inicial ({})",
            odo_end, odo_start
        )));
    }
    Ok(odo_end - odo_start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_difference_of_odometers() {
        assert_eq!(compute_distance(1000, 1250).unwrap(), 250);
        assert_eq!(compute_distance(500, 500).unwrap(), 0);
    }

    #[test]
    fn test_inverted_odometer_is_rejected() {
        let result = compute_distance(1250, 1000);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_parse_wd_code_accepts_known_codes() {
        for code in ["normal", "reg_hol", "no_sp_hol", "wk_sp_hol", "rd"] {
            assert_eq!(parse_wd_code(code).unwrap().as_str(), code);
        }
    }

    #[test]
    fn test_parse_wd_code_rejects_unknown() {
        assert!(parse_wd_code("feriado").is_err());
    }
}

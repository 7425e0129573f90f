use crate::dto::auth_dto::ApiResponse;
use crate::dto::maintenance_dto::{
    MaintenanceEntryRequest, MaintenanceFilterQuery, MaintenanceResponse,
};
use crate::middleware::auth::Identity;
use crate::models::maintenance::{ExpenseType, Maintenance};
use crate::repositories::maintenance_repository::MaintenanceRepository;
use crate::utils::dates::{ensure_date_range, to_ledger_date, today_ledger_date};
use crate::utils::errors::AppError;
use crate::utils::text::{title_case, upper_case};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Cuántos gastos recientes se muestran sin filtro
const RECENT_LIMIT: i64 = 10;

pub struct MaintenanceController {
    repository: MaintenanceRepository,
}

impl MaintenanceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaintenanceRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        query: MaintenanceFilterQuery,
    ) -> Result<Vec<MaintenanceResponse>, AppError> {
        let records = match (query.start, query.end) {
            (Some(start), Some(end)) => {
                ensure_date_range(start, end)?;
                self.repository
                    .filter_by_date_range(&to_ledger_date(start), &to_ledger_date(end))
                    .await?
            }
            (None, None) => self.repository.list_recent(RECENT_LIMIT).await?,
            _ => {
                return Err(AppError::BadRequest(
                    "El filtro requiere fecha inicial y final".to_string(),
                ))
            }
        };

        Ok(records.into_iter().map(MaintenanceResponse::from).collect())
    }

    pub async fn create(
        &self,
        identity: &Identity,
        request: MaintenanceEntryRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let expense_type = parse_expense_type(&request.expense_type)?;

        let record = Maintenance {
            id: Uuid::new_v4(),
            date: to_ledger_date(request.date),
            plate_no: upper_case(&request.plate_no),
            expense_type: expense_type.as_str().to_string(),
            comment: title_case(&request.comment),
            pyesa_amt: request.pyesa_amt,
            tools_amt: request.tools_amt,
            service_charge: request.service_charge,
            total_amt: maintenance_total(
                request.pyesa_amt,
                request.tools_amt,
                request.service_charge,
            ),
            encoded_on: today_ledger_date(),
            encoded_by: title_case(&identity.first_name),
            encoder_id: identity.user_id,
        };

        let saved = self.repository.create(&record).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(saved),
            "Gasto de mantenimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<MaintenanceResponse, AppError> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto de mantenimiento no encontrado".to_string()))?;

        Ok(MaintenanceResponse::from(record))
    }

    pub async fn update(
        &self,
        id: Uuid,
        identity: &Identity,
        request: MaintenanceEntryRequest,
    ) -> Result<ApiResponse<MaintenanceResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto de mantenimiento no encontrado".to_string()))?;

        let expense_type = parse_expense_type(&request.expense_type)?;

        record.date = to_ledger_date(request.date);
        record.plate_no = upper_case(&request.plate_no);
        record.expense_type = expense_type.as_str().to_string();
        record.comment = title_case(&request.comment);
        record.pyesa_amt = request.pyesa_amt;
        record.tools_amt = request.tools_amt;
        record.service_charge = request.service_charge;
        record.total_amt =
            maintenance_total(request.pyesa_amt, request.tools_amt, request.service_charge);
        record.encoded_on = today_ledger_date();
        record.encoded_by = title_case(&identity.first_name);

        let saved = self.repository.update(&record).await?;

        Ok(ApiResponse::success_with_message(
            MaintenanceResponse::from(saved),
            "Gasto de mantenimiento actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto de mantenimiento no encontrado".to_string()))?;

        self.repository.delete(id).await?;
        Ok(())
    }
}

fn parse_expense_type(raw: &str) -> Result<ExpenseType, AppError> {
    ExpenseType::parse(raw)
        .ok_or_else(|| AppError::ValidationError(format!("Tipo de gasto inválido: '{}'", raw)))
}

/// El total es siempre la suma exacta de los tres componentes.
fn maintenance_total(pyesa_amt: Decimal, tools_amt: Decimal, service_charge: Decimal) -> Decimal {
    pyesa_amt + tools_amt + service_charge
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_total_is_exact_sum_of_components() {
        let total = maintenance_total(dec("1250.50"), dec("320.25"), dec("75.10"));
        assert_eq!(total, dec("1645.85"));
    }

    #[test]
    fn test_total_has_no_drift_across_repeated_edits() {
        let (pyesa, tools, service) = (dec("0.10"), dec("0.20"), dec("0.30"));
        let mut total = maintenance_total(pyesa, tools, service);
        // re-derivar con los mismos componentes nunca cambia el total
        for _ in 0..100 {
            total = maintenance_total(pyesa, tools, service);
        }
        assert_eq!(total, dec("0.60"));
    }

    #[test]
    fn test_parse_expense_type_accepts_catalog_values() {
        for raw in ["Repair", "Service", "Repair and service", "Tool/s", "Others"] {
            assert_eq!(parse_expense_type(raw).unwrap().as_str(), raw);
        }
        assert!(parse_expense_type("Fuel").is_err());
    }
}

use crate::dto::admin_expense_dto::{
    AdminExpenseEntryRequest, AdminExpenseFilterQuery, AdminExpenseResponse,
};
use crate::dto::auth_dto::ApiResponse;
use crate::middleware::auth::Identity;
use crate::models::admin_expense::AdminExpense;
use crate::repositories::admin_expense_repository::AdminExpenseRepository;
use crate::utils::dates::{ensure_date_range, to_ledger_date, today_ledger_date};
use crate::utils::errors::AppError;
use crate::utils::text::{title_case, upper_case};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// Cuántos gastos recientes se muestran sin filtro
const RECENT_LIMIT: i64 = 10;

pub struct AdminExpenseController {
    repository: AdminExpenseRepository,
}

impl AdminExpenseController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AdminExpenseRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        query: AdminExpenseFilterQuery,
    ) -> Result<Vec<AdminExpenseResponse>, AppError> {
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

        Ok(records
            .into_iter()
            .map(AdminExpenseResponse::from)
            .collect())
    }

    pub async fn create(
        &self,
        identity: &Identity,
        request: AdminExpenseEntryRequest,
    ) -> Result<ApiResponse<AdminExpenseResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let record = AdminExpense {
            id: Uuid::new_v4(),
            date: to_ledger_date(request.date),
            agency: upper_case(&request.agency),
            office: title_case(&request.office),
            frequency: title_case(&request.frequency),
            description: title_case(&request.description),
            amount: request.amount,
            encoded_on: today_ledger_date(),
            encoded_by: title_case(&identity.first_name),
            encoder_id: identity.user_id,
        };

        let saved = self.repository.create(&record).await?;

        Ok(ApiResponse::success_with_message(
            AdminExpenseResponse::from(saved),
            "Gasto administrativo registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AdminExpenseResponse, AppError> {
        let record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto administrativo no encontrado".to_string()))?;

        Ok(AdminExpenseResponse::from(record))
    }

    pub async fn update(
        &self,
        id: Uuid,
        identity: &Identity,
        request: AdminExpenseEntryRequest,
    ) -> Result<ApiResponse<AdminExpenseResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto administrativo no encontrado".to_string()))?;

        record.date = to_ledger_date(request.date);
        record.agency = upper_case(&request.agency);
        record.office = title_case(&request.office);
        record.frequency = title_case(&request.frequency);
        record.description = title_case(&request.description);
        record.amount = request.amount;
        record.encoded_on = today_ledger_date();
        record.encoded_by = title_case(&identity.first_name);

        let saved = self.repository.update(&record).await?;

        Ok(ApiResponse::success_with_message(
            AdminExpenseResponse::from(saved),
            "Gasto administrativo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Gasto administrativo no encontrado".to_string()))?;

        self.repository.delete(id).await?;
        Ok(())
    }
}

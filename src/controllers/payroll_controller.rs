use crate::dto::auth_dto::ApiResponse;
use crate::dto::pay_strip_dto::{PayStripEntryRequest, PayStripResponse};
use crate::dto::payroll_dto::{DispatchSummaryResponse, PayrollSummaryQuery};
use crate::models::pay_strip::PayStrip;
use crate::repositories::dispatch_repository::DispatchRepository;
use crate::repositories::pay_strip_repository::PayStripRepository;
use crate::services::dispatch_summary_service::{summarize_dispatch_counts, DispatchFact};
use crate::utils::dates::{ensure_date_range, filter_by_date_range, to_ledger_date};
use crate::utils::errors::AppError;
use crate::utils::text::{title_case, upper_case};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct PayrollController {
    dispatch_repository: DispatchRepository,
    pay_strip_repository: PayStripRepository,
}

impl PayrollController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            dispatch_repository: DispatchRepository::new(pool.clone()),
            pay_strip_repository: PayStripRepository::new(pool),
        }
    }

    /// Pivote de conteos de despacho por código de día y trabajador,
    /// opcionalmente acotado a un periodo de pago.
    pub async fn summary(
        &self,
        query: PayrollSummaryQuery,
    ) -> Result<DispatchSummaryResponse, AppError> {
        // la síntesis lee la colección completa en cada request
        let mut records = self.dispatch_repository.list_all().await?;

        match (query.start, query.end) {
            (Some(start), Some(end)) => {
                ensure_date_range(start, end)?;
                records = filter_by_date_range(
                    records,
                    |r| r.dispatch_date.as_str(),
                    &to_ledger_date(start),
                    &to_ledger_date(end),
                );
            }
            (None, None) => {}
            _ => {
                return Err(AppError::BadRequest(
                    "El periodo requiere fecha inicial y final".to_string(),
                ))
            }
        }

        let facts: Vec<DispatchFact> = records.iter().map(DispatchFact::from).collect();
        let summary = summarize_dispatch_counts(&facts);

        Ok(DispatchSummaryResponse::from(&summary))
    }

    pub async fn list_strips(&self) -> Result<Vec<PayStripResponse>, AppError> {
        let strips = self.pay_strip_repository.list_all().await?;
        Ok(strips.into_iter().map(PayStripResponse::from).collect())
    }

    pub async fn create_strip(
        &self,
        request: PayStripEntryRequest,
    ) -> Result<ApiResponse<PayStripResponse>, AppError> {
        let strip = self.build_strip(Uuid::new_v4(), request)?;
        let saved = self.pay_strip_repository.create(&strip).await?;

        Ok(ApiResponse::success_with_message(
            PayStripResponse::from(saved),
            "Corte de nómina registrado exitosamente".to_string(),
        ))
    }

    pub async fn update_strip(
        &self,
        id: Uuid,
        request: PayStripEntryRequest,
    ) -> Result<ApiResponse<PayStripResponse>, AppError> {
        self.pay_strip_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Corte de nómina no encontrado".to_string()))?;

        let strip = self.build_strip(id, request)?;
        let saved = self.pay_strip_repository.update(&strip).await?;

        Ok(ApiResponse::success_with_message(
            PayStripResponse::from(saved),
            "Corte de nómina actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete_strip(&self, id: Uuid) -> Result<(), AppError> {
        self.pay_strip_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Corte de nómina no encontrado".to_string()))?;

        self.pay_strip_repository.delete(id).await?;
        Ok(())
    }

    /// Normaliza la captura y recalcula los campos derivados del corte.
    fn build_strip(&self, id: Uuid, request: PayStripEntryRequest) -> Result<PayStrip, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        ensure_date_range(request.start_date, request.end_date)?;

        let attendance = [
            request.normal,
            request.reg_hol,
            request.no_sp_hol,
            request.wk_sp_hol,
            request.rd,
        ];
        if attendance.iter().any(|c| *c < 0) {
            return Err(AppError::ValidationError(
                "Los días de asistencia no pueden ser negativos".to_string(),
            ));
        }

        let total_pay = compute_total_pay(
            request.basic,
            request.allowance1,
            request.allowance2,
            request.allowance3,
            request.pay_adj,
        );
        let total_deduct = compute_total_deductions(
            request.ca_deduction,
            request.sss,
            request.philhealth,
            request.pag_ibig,
            request.life_insurance,
            request.income_tax,
        );

        Ok(PayStrip {
            id,
            pay_day: to_ledger_date(request.pay_day),
            start_date: to_ledger_date(request.start_date),
            end_date: to_ledger_date(request.end_date),
            employee_name: title_case(&request.employee_name),
            employee_no: upper_case(&request.employee_no),
            normal: request.normal,
            reg_hol: request.reg_hol,
            no_sp_hol: request.no_sp_hol,
            wk_sp_hol: request.wk_sp_hol,
            rd: request.rd,
            equiv_wd: compute_equiv_workdays(&attendance),
            basic: request.basic,
            allowance1: request.allowance1,
            allowance2: request.allowance2,
            allowance3: request.allowance3,
            pay_adj: request.pay_adj,
            pay_adj_reason: request.pay_adj_reason,
            cash_adv: request.cash_adv,
            ca_date: to_ledger_date(request.ca_date),
            ca_deduction: request.ca_deduction,
            ca_remaining: request.ca_remaining,
            sss: request.sss,
            philhealth: request.philhealth,
            pag_ibig: request.pag_ibig,
            life_insurance: request.life_insurance,
            income_tax: request.income_tax,
            total_pay,
            total_deduct,
            net_pay: total_pay - total_deduct,
        })
    }
}

/// Días equivalentes trabajados en el periodo.
fn compute_equiv_workdays(attendance: &[i32]) -> Decimal {
    Decimal::from(attendance.iter().sum::<i32>())
}

fn compute_total_pay(
    basic: Decimal,
    allowance1: Decimal,
    allowance2: Decimal,
    allowance3: Decimal,
    pay_adj: Decimal,
) -> Decimal {
    basic + allowance1 + allowance2 + allowance3 + pay_adj
}

fn compute_total_deductions(
    ca_deduction: Decimal,
    sss: Decimal,
    philhealth: Decimal,
    pag_ibig: Decimal,
    life_insurance: Decimal,
    income_tax: Decimal,
) -> Decimal {
    ca_deduction + sss + philhealth + pag_ibig + life_insurance + income_tax
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn test_total_pay_sums_all_components() {
        let total = compute_total_pay(
            dec("12000.00"),
            dec("500.00"),
            dec("250.00"),
            dec("0.00"),
            dec("-150.00"),
        );
        assert_eq!(total, dec("12600.00"));
    }

    #[test]
    fn test_total_deductions_sums_all_components() {
        let total = compute_total_deductions(
            dec("1000.00"),
            dec("545.00"),
            dec("300.00"),
            dec("100.00"),
            dec("200.00"),
            dec("850.75"),
        );
        assert_eq!(total, dec("2995.75"));
    }

    #[test]
    fn test_net_pay_is_pay_minus_deductions() {
        let pay = compute_total_pay(
            dec("10000.00"),
            dec("0.00"),
            dec("0.00"),
            dec("0.00"),
            dec("0.00"),
        );
        let deduct = compute_total_deductions(
            dec("500.00"),
            dec("0.00"),
            dec("0.00"),
            dec("0.00"),
            dec("0.00"),
            dec("0.00"),
        );
        assert_eq!(pay - deduct, dec("9500.00"));
    }

    #[test]
    fn test_equiv_workdays_counts_all_day_codes() {
        assert_eq!(compute_equiv_workdays(&[10, 1, 0, 2, 3]), Decimal::from(16));
        assert_eq!(compute_equiv_workdays(&[0, 0, 0, 0, 0]), Decimal::ZERO);
    }
}

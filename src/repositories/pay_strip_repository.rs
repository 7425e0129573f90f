use crate::models::pay_strip::PayStrip;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PayStripRepository {
    pool: PgPool,
}

impl PayStripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, strip: &PayStrip) -> Result<PayStrip, AppError> {
        let result = sqlx::query_as::<_, PayStrip>(
            r#"
            INSERT INTO pay_strip (
                id, pay_day, start_date, end_date, employee_name, employee_no,
                normal, reg_hol, no_sp_hol, wk_sp_hol, rd, equiv_wd,
                basic, allowance1, allowance2, allowance3, pay_adj,
                pay_adj_reason, cash_adv, ca_date, ca_deduction, ca_remaining,
                sss, philhealth, pag_ibig, life_insurance, income_tax,
                total_pay, total_deduct, net_pay
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    $25, $26, $27, $28, $29, $30)
            RETURNING *
            "#,
        )
        .bind(strip.id)
        .bind(&strip.pay_day)
        .bind(&strip.start_date)
        .bind(&strip.end_date)
        .bind(&strip.employee_name)
        .bind(&strip.employee_no)
        .bind(strip.normal)
        .bind(strip.reg_hol)
        .bind(strip.no_sp_hol)
        .bind(strip.wk_sp_hol)
        .bind(strip.rd)
        .bind(strip.equiv_wd)
        .bind(strip.basic)
        .bind(strip.allowance1)
        .bind(strip.allowance2)
        .bind(strip.allowance3)
        .bind(strip.pay_adj)
        .bind(&strip.pay_adj_reason)
        .bind(strip.cash_adv)
        .bind(&strip.ca_date)
        .bind(strip.ca_deduction)
        .bind(strip.ca_remaining)
        .bind(strip.sss)
        .bind(strip.philhealth)
        .bind(strip.pag_ibig)
        .bind(strip.life_insurance)
        .bind(strip.income_tax)
        .bind(strip.total_pay)
        .bind(strip.total_deduct)
        .bind(strip.net_pay)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating pay strip: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<PayStrip>, AppError> {
        let result = sqlx::query_as::<_, PayStrip>("SELECT * FROM pay_strip WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding pay strip: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<PayStrip>, AppError> {
        let result =
            sqlx::query_as::<_, PayStrip>("SELECT * FROM pay_strip ORDER BY start_date DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing pay strips: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, strip: &PayStrip) -> Result<PayStrip, AppError> {
        let result = sqlx::query_as::<_, PayStrip>(
            r#"
            UPDATE pay_strip
            SET pay_day = $2, start_date = $3, end_date = $4,
                employee_name = $5, employee_no = $6, normal = $7,
                reg_hol = $8, no_sp_hol = $9, wk_sp_hol = $10, rd = $11,
                equiv_wd = $12, basic = $13, allowance1 = $14,
                allowance2 = $15, allowance3 = $16, pay_adj = $17,
                pay_adj_reason = $18, cash_adv = $19, ca_date = $20,
                ca_deduction = $21, ca_remaining = $22, sss = $23,
                philhealth = $24, pag_ibig = $25, life_insurance = $26,
                income_tax = $27, total_pay = $28, total_deduct = $29,
                net_pay = $30
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(strip.id)
        .bind(&strip.pay_day)
        .bind(&strip.start_date)
        .bind(&strip.end_date)
        .bind(&strip.employee_name)
        .bind(&strip.employee_no)
        .bind(strip.normal)
        .bind(strip.reg_hol)
        .bind(strip.no_sp_hol)
        .bind(strip.wk_sp_hol)
        .bind(strip.rd)
        .bind(strip.equiv_wd)
        .bind(strip.basic)
        .bind(strip.allowance1)
        .bind(strip.allowance2)
        .bind(strip.allowance3)
        .bind(strip.pay_adj)
        .bind(&strip.pay_adj_reason)
        .bind(strip.cash_adv)
        .bind(&strip.ca_date)
        .bind(strip.ca_deduction)
        .bind(strip.ca_remaining)
        .bind(strip.sss)
        .bind(strip.philhealth)
        .bind(strip.pag_ibig)
        .bind(strip.life_insurance)
        .bind(strip.income_tax)
        .bind(strip.total_pay)
        .bind(strip.total_deduct)
        .bind(strip.net_pay)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating pay strip: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM pay_strip WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting pay strip: {}", e)))?;

        Ok(())
    }
}

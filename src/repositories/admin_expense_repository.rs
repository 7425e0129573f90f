use crate::models::admin_expense::AdminExpense;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AdminExpenseRepository {
    pool: PgPool,
}

impl AdminExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &AdminExpense) -> Result<AdminExpense, AppError> {
        let result = sqlx::query_as::<_, AdminExpense>(
            r#"
            INSERT INTO admin_expense (
                id, date, agency, office, frequency, description, amount,
                encoded_on, encoded_by, encoder_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.date)
        .bind(&record.agency)
        .bind(&record.office)
        .bind(&record.frequency)
        .bind(&record.description)
        .bind(record.amount)
        .bind(&record.encoded_on)
        .bind(&record.encoded_by)
        .bind(record.encoder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating admin expense: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminExpense>, AppError> {
        let result = sqlx::query_as::<_, AdminExpense>("SELECT * FROM admin_expense WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding admin expense: {}", e)))?;

        Ok(result)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<AdminExpense>, AppError> {
        let result = sqlx::query_as::<_, AdminExpense>(
            "SELECT * FROM admin_expense ORDER BY date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing admin expenses: {}", e)))?;

        Ok(result)
    }

    pub async fn filter_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<AdminExpense>, AppError> {
        let result = sqlx::query_as::<_, AdminExpense>(
            "SELECT * FROM admin_expense WHERE date >= $1 AND date <= $2 ORDER BY date DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error filtering admin expenses: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, record: &AdminExpense) -> Result<AdminExpense, AppError> {
        let result = sqlx::query_as::<_, AdminExpense>(
            r#"
            UPDATE admin_expense
            SET date = $2, agency = $3, office = $4, frequency = $5,
                description = $6, amount = $7, encoded_on = $8, encoded_by = $9
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.date)
        .bind(&record.agency)
        .bind(&record.office)
        .bind(&record.frequency)
        .bind(&record.description)
        .bind(record.amount)
        .bind(&record.encoded_on)
        .bind(&record.encoded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating admin expense: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM admin_expense WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting admin expense: {}", e)))?;

        Ok(())
    }
}

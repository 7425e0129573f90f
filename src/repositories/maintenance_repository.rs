use crate::models::maintenance::Maintenance;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct MaintenanceRepository {
    pool: PgPool,
}

impl MaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, record: &Maintenance) -> Result<Maintenance, AppError> {
        let result = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance (
                id, date, plate_no, expense_type, comment,
                pyesa_amt, tools_amt, service_charge, total_amt,
                encoded_on, encoded_by, encoder_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.date)
        .bind(&record.plate_no)
        .bind(&record.expense_type)
        .bind(&record.comment)
        .bind(record.pyesa_amt)
        .bind(record.tools_amt)
        .bind(record.service_charge)
        .bind(record.total_amt)
        .bind(&record.encoded_on)
        .bind(&record.encoded_by)
        .bind(record.encoder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating maintenance: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Maintenance>, AppError> {
        let result = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding maintenance: {}", e)))?;

        Ok(result)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Maintenance>, AppError> {
        let result =
            sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance ORDER BY date DESC LIMIT $1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::DatabaseError(format!("Error listing maintenance: {}", e))
                })?;

        Ok(result)
    }

    pub async fn filter_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<Vec<Maintenance>, AppError> {
        let result = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenance WHERE date >= $1 AND date <= $2 ORDER BY date DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error filtering maintenance: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, record: &Maintenance) -> Result<Maintenance, AppError> {
        let result = sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenance
            SET date = $2, plate_no = $3, expense_type = $4, comment = $5,
                pyesa_amt = $6, tools_amt = $7, service_charge = $8,
                total_amt = $9, encoded_on = $10, encoded_by = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(record.id)
        .bind(&record.date)
        .bind(&record.plate_no)
        .bind(&record.expense_type)
        .bind(&record.comment)
        .bind(record.pyesa_amt)
        .bind(record.tools_amt)
        .bind(record.service_charge)
        .bind(record.total_amt)
        .bind(&record.encoded_on)
        .bind(&record.encoded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating maintenance: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting maintenance: {}", e)))?;

        Ok(())
    }
}

use crate::models::dispatch::Dispatch;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

/// Campos de fecha por los que se puede filtrar el listado de despachos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDateField {
    DispatchDate,
    EncodedOn,
}

impl DispatchDateField {
    pub fn column(&self) -> &'static str {
        match self {
            DispatchDateField::DispatchDate => "dispatch_date",
            DispatchDateField::EncodedOn => "encoded_on",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dispatch_date" => Some(DispatchDateField::DispatchDate),
            "encoded_on" => Some(DispatchDateField::EncodedOn),
            _ => None,
        }
    }
}

pub struct DispatchRepository {
    pool: PgPool,
}

impl DispatchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dispatch: &Dispatch) -> Result<Dispatch, AppError> {
        let result = sqlx::query_as::<_, Dispatch>(
            r#"
            INSERT INTO dispatch (
                id, dispatch_date, wd_code, slip_no, route, area,
                odo_start, odo_end, km, cbm, qty, drops, rate, plate_no,
                driver, courier, pay_day, invoice_no, or_no, or_amt,
                encoded_on, encoded_by, encoder_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
            RETURNING *
            "#,
        )
        .bind(dispatch.id)
        .bind(&dispatch.dispatch_date)
        .bind(&dispatch.wd_code)
        .bind(&dispatch.slip_no)
        .bind(&dispatch.route)
        .bind(&dispatch.area)
        .bind(dispatch.odo_start)
        .bind(dispatch.odo_end)
        .bind(dispatch.km)
        .bind(dispatch.cbm)
        .bind(dispatch.qty)
        .bind(dispatch.drops)
        .bind(dispatch.rate)
        .bind(&dispatch.plate_no)
        .bind(&dispatch.driver)
        .bind(&dispatch.courier)
        .bind(&dispatch.pay_day)
        .bind(&dispatch.invoice_no)
        .bind(&dispatch.or_no)
        .bind(dispatch.or_amt)
        .bind(&dispatch.encoded_on)
        .bind(&dispatch.encoded_by)
        .bind(dispatch.encoder_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating dispatch: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Dispatch>, AppError> {
        let result = sqlx::query_as::<_, Dispatch>("SELECT * FROM dispatch WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding dispatch: {}", e)))?;

        Ok(result)
    }

    pub async fn list_all(&self) -> Result<Vec<Dispatch>, AppError> {
        let result =
            sqlx::query_as::<_, Dispatch>("SELECT * FROM dispatch ORDER BY dispatch_date DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing dispatch: {}", e)))?;

        Ok(result)
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Dispatch>, AppError> {
        let result = sqlx::query_as::<_, Dispatch>(
            "SELECT * FROM dispatch ORDER BY dispatch_date DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error listing dispatch: {}", e)))?;

        Ok(result)
    }

    /// Filtro inclusivo por rango sobre un campo de fecha del libro.
    /// Los límites vienen en formato del libro, la comparación es de texto.
    pub async fn filter_by_date_range(
        &self,
        field: DispatchDateField,
        start: &str,
        end: &str,
    ) -> Result<Vec<Dispatch>, AppError> {
        let query = format!(
            "SELECT * FROM dispatch WHERE {col} >= $1 AND {col} <= $2 ORDER BY {col} DESC",
            col = field.column()
        );

        let result = sqlx::query_as::<_, Dispatch>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error filtering dispatch: {}", e)))?;

        Ok(result)
    }

    pub async fn update(&self, dispatch: &Dispatch) -> Result<Dispatch, AppError> {
        let result = sqlx::query_as::<_, Dispatch>(
            r#"
            UPDATE dispatch
            SET dispatch_date = $2, wd_code = $3, slip_no = $4, route = $5,
                area = $6, odo_start = $7, odo_end = $8, km = $9, cbm = $10,
                qty = $11, drops = $12, rate = $13, plate_no = $14,
                driver = $15, courier = $16, pay_day = $17, invoice_no = $18,
                or_no = $19, or_amt = $20, encoded_on = $21, encoded_by = $22
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(dispatch.id)
        .bind(&dispatch.dispatch_date)
        .bind(&dispatch.wd_code)
        .bind(&dispatch.slip_no)
        .bind(&dispatch.route)
        .bind(&dispatch.area)
        .bind(dispatch.odo_start)
        .bind(dispatch.odo_end)
        .bind(dispatch.km)
        .bind(dispatch.cbm)
        .bind(dispatch.qty)
        .bind(dispatch.drops)
        .bind(dispatch.rate)
        .bind(&dispatch.plate_no)
        .bind(&dispatch.driver)
        .bind(&dispatch.courier)
        .bind(&dispatch.pay_day)
        .bind(&dispatch.invoice_no)
        .bind(&dispatch.or_no)
        .bind(dispatch.or_amt)
        .bind(&dispatch.encoded_on)
        .bind(&dispatch.encoded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating dispatch: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM dispatch WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting dispatch: {}", e)))?;

        Ok(())
    }
}

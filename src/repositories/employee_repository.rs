use crate::models::employee::EmployeeProfile;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use uuid::Uuid;

pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, employee: &EmployeeProfile) -> Result<EmployeeProfile, AppError> {
        let result = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            INSERT INTO employee (
                id, full_name, first_name, middle_name, last_name, extn_name,
                birthday, gender, house_no, lot_no, block_no, sub_division,
                purok, brgy, district, city, province, zip_code, employee_no,
                date_hired, date_resigned, employment_status, position, rank,
                sss_no, philhealth_no, pag_ibig_no, sss_prem, philhealth_prem,
                pag_ibig_prem, cash_adv, ca_date, ca_deduction, ca_remaining,
                basic, allowance1, allowance2, allowance3
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24,
                    $25, $26, $27, $28, $29, $30, $31, $32, $33, $34, $35,
                    $36, $37, $38)
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.full_name)
        .bind(&employee.first_name)
        .bind(&employee.middle_name)
        .bind(&employee.last_name)
        .bind(&employee.extn_name)
        .bind(&employee.birthday)
        .bind(&employee.gender)
        .bind(employee.house_no)
        .bind(employee.lot_no)
        .bind(&employee.block_no)
        .bind(&employee.sub_division)
        .bind(&employee.purok)
        .bind(&employee.brgy)
        .bind(&employee.district)
        .bind(&employee.city)
        .bind(&employee.province)
        .bind(&employee.zip_code)
        .bind(&employee.employee_no)
        .bind(&employee.date_hired)
        .bind(&employee.date_resigned)
        .bind(&employee.employment_status)
        .bind(&employee.position)
        .bind(&employee.rank)
        .bind(&employee.sss_no)
        .bind(&employee.philhealth_no)
        .bind(&employee.pag_ibig_no)
        .bind(employee.sss_prem)
        .bind(employee.philhealth_prem)
        .bind(employee.pag_ibig_prem)
        .bind(employee.cash_adv)
        .bind(&employee.ca_date)
        .bind(employee.ca_deduction)
        .bind(employee.ca_remaining)
        .bind(employee.basic)
        .bind(employee.allowance1)
        .bind(employee.allowance2)
        .bind(employee.allowance3)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error creating employee: {}", e)))?;

        Ok(result)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EmployeeProfile>, AppError> {
        let result = sqlx::query_as::<_, EmployeeProfile>("SELECT * FROM employee WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error finding employee: {}", e)))?;

        Ok(result)
    }

    /// Listado ordenado por nombre, como se muestran las opciones de
    /// driver/courier en la captura de despachos.
    pub async fn list_all(&self) -> Result<Vec<EmployeeProfile>, AppError> {
        let result =
            sqlx::query_as::<_, EmployeeProfile>("SELECT * FROM employee ORDER BY first_name")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::DatabaseError(format!("Error listing employees: {}", e)))?;

        Ok(result)
    }

    /// Actualiza los datos personales y de domicilio (y el nombre derivado).
    pub async fn update_personal(
        &self,
        employee: &EmployeeProfile,
    ) -> Result<EmployeeProfile, AppError> {
        let result = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            UPDATE employee
            SET full_name = $2, first_name = $3, middle_name = $4,
                last_name = $5, extn_name = $6, birthday = $7, gender = $8,
                house_no = $9, lot_no = $10, block_no = $11,
                sub_division = $12, purok = $13, brgy = $14, district = $15,
                city = $16, province = $17, zip_code = $18
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.full_name)
        .bind(&employee.first_name)
        .bind(&employee.middle_name)
        .bind(&employee.last_name)
        .bind(&employee.extn_name)
        .bind(&employee.birthday)
        .bind(&employee.gender)
        .bind(employee.house_no)
        .bind(employee.lot_no)
        .bind(&employee.block_no)
        .bind(&employee.sub_division)
        .bind(&employee.purok)
        .bind(&employee.brgy)
        .bind(&employee.district)
        .bind(&employee.city)
        .bind(&employee.province)
        .bind(&employee.zip_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating employee: {}", e)))?;

        Ok(result)
    }

    /// Actualiza los datos de empresa, afiliaciones y compensación.
    pub async fn update_admin(
        &self,
        employee: &EmployeeProfile,
    ) -> Result<EmployeeProfile, AppError> {
        let result = sqlx::query_as::<_, EmployeeProfile>(
            r#"
            UPDATE employee
            SET employee_no = $2, date_hired = $3, date_resigned = $4,
                employment_status = $5, position = $6, rank = $7,
                sss_no = $8, philhealth_no = $9, pag_ibig_no = $10,
                sss_prem = $11, philhealth_prem = $12, pag_ibig_prem = $13,
                basic = $14, allowance1 = $15, allowance2 = $16,
                allowance3 = $17
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(employee.id)
        .bind(&employee.employee_no)
        .bind(&employee.date_hired)
        .bind(&employee.date_resigned)
        .bind(&employee.employment_status)
        .bind(&employee.position)
        .bind(&employee.rank)
        .bind(&employee.sss_no)
        .bind(&employee.philhealth_no)
        .bind(&employee.pag_ibig_no)
        .bind(employee.sss_prem)
        .bind(employee.philhealth_prem)
        .bind(employee.pag_ibig_prem)
        .bind(employee.basic)
        .bind(employee.allowance1)
        .bind(employee.allowance2)
        .bind(employee.allowance3)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(format!("Error updating employee: {}", e)))?;

        Ok(result)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM employee WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(format!("Error deleting employee: {}", e)))?;

        Ok(())
    }
}

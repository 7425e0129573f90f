use crate::dto::auth_dto::ApiResponse;
use crate::dto::employee_dto::{
    EmployeeAdminUpdateRequest, EmployeeEntryRequest, EmployeeResponse,
};
use crate::middleware::auth::Identity;
use crate::models::employee::{EmployeeProfile, EmploymentStatus};
use crate::repositories::employee_repository::EmployeeRepository;
use crate::services::authorization_service::{authorize, Action, Resource};
use crate::utils::dates::{to_ledger_date, today_ledger_date};
use crate::utils::errors::AppError;
use crate::utils::text::{build_full_name, title_case, upper_case};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

pub struct EmployeeController {
    repository: EmployeeRepository,
}

impl EmployeeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmployeeRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeResponse>, AppError> {
        let employees = self.repository.list_all().await?;
        Ok(employees.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn create(
        &self,
        request: EmployeeEntryRequest,
    ) -> Result<ApiResponse<EmployeeResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let employee = EmployeeProfile {
            id: Uuid::new_v4(),

            // personal info
            full_name: build_full_name(
                &request.first_name,
                &request.middle_name,
                &request.last_name,
                &request.extn_name,
            ),
            first_name: title_case(&request.first_name),
            middle_name: title_case(&request.middle_name),
            last_name: title_case(&request.last_name),
            extn_name: title_case(&request.extn_name),
            birthday: to_ledger_date(request.birthday),
            gender: title_case(&request.gender),

            // address
            house_no: request.house_no,
            lot_no: request.lot_no,
            block_no: request.block_no,
            sub_division: title_case(&request.sub_division),
            purok: title_case(&request.purok),
            brgy: title_case(&request.brgy),
            district: title_case(&request.district),
            city: title_case(&request.city),
            province: title_case(&request.province),
            zip_code: upper_case(&request.zip_code),

            // los datos de empresa y afiliaciones los completa después
            // un administrador
            employee_no: "?".to_string(),
            date_hired: today_ledger_date(),
            date_resigned: "?".to_string(),
            employment_status: "?".to_string(),
            position: "?".to_string(),
            rank: "?".to_string(),
            sss_no: "?".to_string(),
            philhealth_no: "?".to_string(),
            pag_ibig_no: "?".to_string(),
            sss_prem: Decimal::ZERO,
            philhealth_prem: Decimal::ZERO,
            pag_ibig_prem: Decimal::ZERO,
            cash_adv: Decimal::ZERO,
            ca_date: "?".to_string(),
            ca_deduction: Decimal::ZERO,
            ca_remaining: Decimal::ZERO,
            basic: Decimal::ZERO,
            allowance1: Decimal::ZERO,
            allowance2: Decimal::ZERO,
            allowance3: Decimal::ZERO,
        };

        let saved = self.repository.create(&employee).await?;

        Ok(ApiResponse::success_with_message(
            EmployeeResponse::from(saved),
            "Empleado registrado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<EmployeeResponse, AppError> {
        let employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        Ok(EmployeeResponse::from(employee))
    }

    pub async fn update_personal(
        &self,
        id: Uuid,
        request: EmployeeEntryRequest,
    ) -> Result<ApiResponse<EmployeeResponse>, AppError> {
        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        employee.first_name = title_case(&request.first_name);
        employee.middle_name = title_case(&request.middle_name);
        employee.last_name = title_case(&request.last_name);
        employee.extn_name = title_case(&request.extn_name);
        employee.full_name = build_full_name(
            &request.first_name,
            &request.middle_name,
            &request.last_name,
            &request.extn_name,
        );
        employee.birthday = to_ledger_date(request.birthday);
        employee.gender = title_case(&request.gender);
        employee.house_no = request.house_no;
        employee.lot_no = request.lot_no;
        employee.block_no = request.block_no;
        employee.sub_division = title_case(&request.sub_division);
        employee.purok = title_case(&request.purok);
        employee.brgy = title_case(&request.brgy);
        employee.district = title_case(&request.district);
        employee.city = title_case(&request.city);
        employee.province = title_case(&request.province);
        employee.zip_code = upper_case(&request.zip_code);

        let saved = self.repository.update_personal(&employee).await?;

        Ok(ApiResponse::success_with_message(
            EmployeeResponse::from(saved),
            "Empleado actualizado exitosamente".to_string(),
        ))
    }

    pub async fn update_admin(
        &self,
        id: Uuid,
        identity: &Identity,
        request: EmployeeAdminUpdateRequest,
    ) -> Result<ApiResponse<EmployeeResponse>, AppError> {
        authorize(identity, Resource::EmployeeAdmin, Action::Edit)?;

        request
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;

        let status = EmploymentStatus::parse(&request.employment_status).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Estatus de empleo inválido: '{}'",
                request.employment_status
            ))
        })?;

        let mut employee = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        employee.employee_no = upper_case(&request.employee_no);
        employee.date_hired = to_ledger_date(request.date_hired);
        employee.employment_status = status.as_str().to_string();
        employee.position = upper_case(&request.position);
        employee.rank = upper_case(&request.rank);
        employee.sss_no = upper_case(&request.sss_no);
        employee.philhealth_no = upper_case(&request.philhealth_no);
        employee.pag_ibig_no = upper_case(&request.pag_ibig_no);
        employee.sss_prem = request.sss_prem;
        employee.philhealth_prem = request.philhealth_prem;
        employee.pag_ibig_prem = request.pag_ibig_prem;
        employee.basic = request.basic;
        employee.allowance1 = request.allowance1;
        employee.allowance2 = request.allowance2;
        employee.allowance3 = request.allowance3;

        // La baja queda fechada al marcar el estatus como Resigned
        employee.date_resigned = if status == EmploymentStatus::Resigned {
            today_ledger_date()
        } else {
            String::new()
        };

        let saved = self.repository.update_admin(&employee).await?;

        Ok(ApiResponse::success_with_message(
            EmployeeResponse::from(saved),
            "Datos administrativos actualizados exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, identity: &Identity) -> Result<(), AppError> {
        authorize(identity, Resource::Employee, Action::Delete)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empleado no encontrado".to_string()))?;

        self.repository.delete(id).await?;
        Ok(())
    }
}

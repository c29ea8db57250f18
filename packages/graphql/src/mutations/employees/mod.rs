use crate::errors::{NotFoundError, ServiceError, ValidationErrorType};
use crate::mutations::input_validators::EmployeeInput;
use crate::types::employee::{record_to_employee_type, Employee};
use async_graphql::{Context, Object, Result, Union};
use repositories::EmployeeRepository;
use services::{EmployeeForm, EmployeeServiceError, HistoryNavigator};

mod add_employee;
mod update_employee;

#[derive(Union)]
pub enum EmployeeMutationResult {
    SavedEmployee(Employee),
    ValidationError(ValidationErrorType),
    NotFound(NotFoundError),
    ServiceError(ServiceError),
}

/// Saves a validated form and maps the outcome onto the result union.
pub(super) async fn submit_form(
    repository: &EmployeeRepository,
    form: &EmployeeForm,
) -> EmployeeMutationResult {
    let navigator = HistoryNavigator::new();
    match form.submit(repository, &navigator).await {
        Ok(saved) => {
            tracing::debug!(redirect = ?navigator.current(), "employee form submitted");
            EmployeeMutationResult::SavedEmployee(record_to_employee_type(&saved))
        }
        Err(EmployeeServiceError::NotFound(id)) => {
            EmployeeMutationResult::NotFound(NotFoundError::new(id))
        }
        Err(e) => EmployeeMutationResult::ServiceError(ServiceError::from(e)),
    }
}

#[derive(Default)]
pub struct EmployeeMutation;

#[Object]
impl EmployeeMutation {
    async fn create_employee(
        &self,
        ctx: &Context<'_>,
        employee: EmployeeInput,
    ) -> Result<EmployeeMutationResult> {
        add_employee::create_employee(ctx, employee).await
    }

    async fn update_employee(
        &self,
        ctx: &Context<'_>,
        id: i64,
        employee: EmployeeInput,
    ) -> Result<EmployeeMutationResult> {
        update_employee::update_employee(ctx, id, employee).await
    }
}

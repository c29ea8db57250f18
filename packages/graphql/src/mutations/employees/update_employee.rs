use super::{submit_form, EmployeeMutationResult};
use crate::errors::NotFoundError;
use crate::mutations::input_validators::EmployeeInput;
use async_graphql::{Context, Result};
use repositories::EmployeeRepository;
use services::validation::input_validator::InputValidator;
use services::FormConfig;

pub(super) async fn update_employee(
    ctx: &Context<'_>,
    id: i64,
    input: EmployeeInput,
) -> Result<EmployeeMutationResult> {
    let repository = ctx.data::<EmployeeRepository>()?;
    let config = ctx.data::<FormConfig>()?;

    if repository.find(id).is_none() {
        return Ok(EmployeeMutationResult::NotFound(NotFoundError::new(id)));
    }

    let form = input.to_form(Some(id), config)?;
    if let Err(validation_errors) = form.validate() {
        return Ok(EmployeeMutationResult::ValidationError(validation_errors.into()));
    }

    Ok(submit_form(repository, &form).await)
}

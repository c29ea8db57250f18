use crate::employees::EmployeeForm;
use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};

impl InputValidator for EmployeeForm {
    /// Reports every message currently visible, keyed by dotted path.
    fn validate(&self) -> Result<(), ValidationErrors> {
        if self.is_valid() {
            return Ok(());
        }

        let mut errors = ValidationErrors::from_form_errors(self.errors_by_path());
        if errors.is_empty() {
            errors.add_error("form", "Employee form is invalid".to_string());
        }
        Err(errors)
    }
}

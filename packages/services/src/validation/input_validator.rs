use std::collections::HashMap;

use crate::forms::FormErrors;

/// Messages keyed by field, as returned to API callers.
pub type ValidationErrors = HashMap<String, Vec<String>>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;

    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// Helper trait for combining validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: &str, message: String);
    fn from_form_errors(form_errors: FormErrors) -> Self;
}

impl ValidationErrorsExt for ValidationErrors {
    fn add_error(&mut self, field: &str, message: String) {
        self.entry(field.to_string())
            .or_insert_with(Vec::new)
            .push(message);
    }

    /// Keeps only fields that currently show a message.
    fn from_form_errors(form_errors: FormErrors) -> Self {
        let mut errors = ValidationErrors::new();
        for (field, message) in form_errors {
            if !message.is_empty() {
                errors.add_error(&field, message);
            }
        }
        errors
    }
}

pub mod field_validators;
pub mod input_validator;
pub mod messages;
mod models;

// Re-export common types and functions
pub use field_validators::{email_domain, ValidationCode, Validator};
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
pub use messages::{MessageCatalog, EMPLOYEE_FORM_MESSAGES};

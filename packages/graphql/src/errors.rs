use async_graphql::SimpleObject;
use std::fmt;
use services::validation::input_validator::ValidationErrors;
use services::EmployeeServiceError;

#[derive(SimpleObject, Debug)]
pub struct ServiceError {
    pub message: String,
}

impl From<EmployeeServiceError> for ServiceError {
    fn from(e: EmployeeServiceError) -> Self {
        ServiceError { message: e.to_string() }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

#[derive(SimpleObject, Debug)]
pub struct NotFoundError {
    pub id: i64,
    pub message: String,
}

impl NotFoundError {
    pub fn new(id: i64) -> Self {
        NotFoundError {
            id,
            message: format!("Employee {} not found", id),
        }
    }
}

#[derive(SimpleObject, Debug)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

#[derive(SimpleObject, Debug)]
pub struct ValidationErrorType {
    pub message: String,
    pub fields: Vec<FieldError>,
}

impl From<ValidationErrors> for ValidationErrorType {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .into_iter()
            .map(|(field, messages)| FieldError { field, messages })
            .collect();
        fields.sort_by(|a, b| a.field.cmp(&b.field));

        let message = fields
            .iter()
            .flat_map(|f| f.messages.iter().cloned())
            .collect::<Vec<String>>()
            .join(", ");

        ValidationErrorType { message, fields }
    }
}

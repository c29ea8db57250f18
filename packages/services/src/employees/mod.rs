pub mod config;
pub mod form;
pub mod service;

pub use config::FormConfig;
pub use form::{validate_email_group, EmployeeForm, FormMode};
pub use service::{EmployeeLookup, EmployeePersistence, EmployeeServiceError};

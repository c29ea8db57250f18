use std::fmt;

use mockall::automock;
use models::{EmployeeId, EmployeeRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeServiceError {
    NotFound(EmployeeId),
    Failure(String),
}

impl fmt::Display for EmployeeServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeServiceError::NotFound(id) => write!(f, "Employee {} not found", id),
            EmployeeServiceError::Failure(message) => write!(f, "Employee service failure: {}", message),
        }
    }
}

impl std::error::Error for EmployeeServiceError {}

#[automock]
#[allow(async_fn_in_trait)]
pub trait EmployeeLookup {
    async fn fetch_by_id(&self, id: EmployeeId) -> Result<EmployeeRecord, EmployeeServiceError>;
}

#[automock]
#[allow(async_fn_in_trait)]
pub trait EmployeePersistence {
    /// Stores a new employee and returns the id it was given.
    async fn create(&self, record: EmployeeRecord) -> Result<EmployeeId, EmployeeServiceError>;

    async fn update(&self, record: EmployeeRecord) -> Result<(), EmployeeServiceError>;
}

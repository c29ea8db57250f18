use models::EmployeeRecord;
use services::EmployeeServiceError;

use super::EmployeeRepository;

impl EmployeeRepository {
    /// Overwrites an existing employee. Records without an id, or with an id
    /// that is not stored, are rejected.
    pub fn replace(&self, record: EmployeeRecord) -> Result<EmployeeRecord, EmployeeServiceError> {
        let id = record.id.ok_or_else(|| {
            EmployeeServiceError::Failure("cannot update an employee without an id".to_string())
        })?;

        match self.employees.get_mut(&id) {
            Some(mut entry) => {
                *entry = record.clone();
                tracing::debug!(employee_id = id, "employee updated");
                Ok(record)
            }
            None => {
                tracing::warn!(employee_id = id, "update of unknown employee");
                Err(EmployeeServiceError::NotFound(id))
            }
        }
    }
}

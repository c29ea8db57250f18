use models::{EmployeeId, EmployeeRecord};
use services::{EmployeeLookup, EmployeeServiceError};

use super::EmployeeRepository;

impl EmployeeRepository {
    pub fn find(&self, id: EmployeeId) -> Option<EmployeeRecord> {
        self.employees.get(&id).map(|entry| entry.value().clone())
    }

    /// All employees, ordered by id.
    pub fn list_employees(&self) -> Vec<EmployeeRecord> {
        let mut employees: Vec<EmployeeRecord> = self
            .employees
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        employees.sort_by_key(|e| e.id);
        employees
    }
}

impl EmployeeLookup for EmployeeRepository {
    async fn fetch_by_id(&self, id: EmployeeId) -> Result<EmployeeRecord, EmployeeServiceError> {
        self.find(id).ok_or(EmployeeServiceError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_missing_employee_returns_not_found() {
        let repo = EmployeeRepository::new();
        assert_eq!(
            repo.fetch_by_id(3).await.unwrap_err(),
            EmployeeServiceError::NotFound(3)
        );
    }

    #[tokio::test]
    async fn test_list_employees_is_ordered_by_id() {
        let repo = EmployeeRepository::new();
        for name in ["Ann", "Bob", "Cy"] {
            repo.insert(EmployeeRecord {
                full_name: name.to_string(),
                ..Default::default()
            });
        }

        let names: Vec<String> = repo
            .list_employees()
            .into_iter()
            .map(|e| e.full_name)
            .collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cy"]);

        let fetched = repo.fetch_by_id(2).await.unwrap();
        assert_eq!(fetched.full_name, "Bob");
    }
}

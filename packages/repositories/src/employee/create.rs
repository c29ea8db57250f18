use models::{EmployeeId, EmployeeRecord};
use services::{EmployeePersistence, EmployeeServiceError};

use super::EmployeeRepository;

impl EmployeeRepository {
    /// Stores `record` under a fresh id, ignoring any id it already carries.
    pub fn insert(&self, mut record: EmployeeRecord) -> EmployeeRecord {
        let id = self.allocate_id();
        record.id = Some(id);
        self.employees.insert(id, record.clone());
        tracing::debug!(employee_id = id, "employee created");
        record
    }
}

impl EmployeePersistence for EmployeeRepository {
    async fn create(&self, record: EmployeeRecord) -> Result<EmployeeId, EmployeeServiceError> {
        let saved = self.insert(record);
        saved
            .id
            .ok_or_else(|| EmployeeServiceError::Failure("created employee has no id".to_string()))
    }

    async fn update(&self, record: EmployeeRecord) -> Result<(), EmployeeServiceError> {
        self.replace(record).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::SkillEntry;

    fn record(name: &str) -> EmployeeRecord {
        EmployeeRecord {
            full_name: name.to_string(),
            email: format!("{}@gmail.com", name.to_lowercase()),
            skills: vec![SkillEntry {
                skill_name: "rust".into(),
                experience_in_years: 2.0,
                proficiency: "intermediate".into(),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = EmployeeRepository::new();

        let first = repo.create(record("Mark")).await.unwrap();
        let second = repo.create(record("Sara")).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let repo = EmployeeRepository::new();
        let mut incoming = record("Mark");
        incoming.id = Some(99);

        let id = repo.create(incoming).await.unwrap();
        assert_eq!(id, 1);
        assert!(repo.find(99).is_none());
        assert_eq!(repo.find(1).unwrap().id, Some(1));
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let repo = EmployeeRepository::new();
        let clone = repo.clone();

        clone.create(record("Mark")).await.unwrap();
        assert_eq!(repo.len(), 1);
    }
}

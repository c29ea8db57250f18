use models::{ContactPreference, EmployeeRecord, SkillEntry};
use repositories::EmployeeRepository;
use services::FormConfig;

use crate::{build_schema, EmployeeSchema};

pub fn create_test_schema(repository: EmployeeRepository) -> EmployeeSchema {
    build_schema(repository, FormConfig::default())
}

pub fn seed_employee(repository: &EmployeeRepository, full_name: &str) -> EmployeeRecord {
    repository.insert(EmployeeRecord {
        id: None,
        full_name: full_name.to_string(),
        contact_preference: ContactPreference::Email,
        email: format!("{}@gmail.com", full_name.to_lowercase()),
        phone: None,
        skills: vec![SkillEntry {
            skill_name: "rust".to_string(),
            experience_in_years: 2.0,
            proficiency: "intermediate".to_string(),
        }],
    })
}

/// GraphQL literal for an `EmployeeInput` with one skill.
pub fn employee_input(full_name: &str, email: &str) -> String {
    format!(
        r#"{{
            fullName: "{full_name}",
            contactPreference: EMAIL,
            email: "{email}",
            skills: [{{ skillName: "rust", experienceInYears: 3, proficiency: "advanced" }}]
        }}"#
    )
}

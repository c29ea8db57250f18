use models::{ContactPreference, EmployeeRecord, SkillEntry};

use crate::employees::{EmployeeForm, FormConfig};

pub fn sample_record() -> EmployeeRecord {
    EmployeeRecord {
        id: Some(7),
        full_name: "Mark".to_string(),
        contact_preference: ContactPreference::Email,
        email: "mark@gmail.com".to_string(),
        phone: Some("5551234".to_string()),
        skills: vec![
            SkillEntry {
                skill_name: "rust".to_string(),
                experience_in_years: 3.0,
                proficiency: "advanced".to_string(),
            },
            SkillEntry {
                skill_name: "go".to_string(),
                experience_in_years: 1.5,
                proficiency: "beginner".to_string(),
            },
        ],
    }
}

/// A create-mode form filled in the way a user would, and therefore valid.
pub fn filled_create_form() -> EmployeeForm {
    let mut form = EmployeeForm::new(&FormConfig::default());
    form.set_value("fullName", "Mark").unwrap();
    form.set_value("emailGroup.email", "mark@gmail.com").unwrap();
    form.set_value("emailGroup.confirmEmail", "mark@gmail.com").unwrap();
    form.set_value("skills.0.skillName", "rust").unwrap();
    form.set_value("skills.0.experienceInYears", 3.0).unwrap();
    form.set_value("skills.0.proficiency", "advanced").unwrap();
    form
}

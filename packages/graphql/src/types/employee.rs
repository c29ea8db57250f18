use async_graphql::{Enum, SimpleObject};
use models::{ContactPreference as ContactPreferenceModel, EmployeeRecord, SkillEntry};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContactPreference {
    Email,
    Phone,
}

impl From<ContactPreferenceModel> for ContactPreference {
    fn from(p: ContactPreferenceModel) -> Self {
        match p {
            ContactPreferenceModel::Email => ContactPreference::Email,
            ContactPreferenceModel::Phone => ContactPreference::Phone,
        }
    }
}

impl From<ContactPreference> for ContactPreferenceModel {
    fn from(p: ContactPreference) -> Self {
        match p {
            ContactPreference::Email => ContactPreferenceModel::Email,
            ContactPreference::Phone => ContactPreferenceModel::Phone,
        }
    }
}

#[derive(SimpleObject)]
pub struct Skill {
    pub skill_name: String,
    pub experience_in_years: f64,
    pub proficiency: String,
}

impl From<&SkillEntry> for Skill {
    fn from(s: &SkillEntry) -> Self {
        Skill {
            skill_name: s.skill_name.clone(),
            experience_in_years: s.experience_in_years,
            proficiency: s.proficiency.clone(),
        }
    }
}

#[derive(SimpleObject)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub contact_preference: ContactPreference,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<Skill>,
}

/// Stored records always carry an id; `0` only shows up for unsaved ones.
pub fn record_to_employee_type(r: &EmployeeRecord) -> Employee {
    Employee {
        id: r.id.unwrap_or_default(),
        full_name: r.full_name.clone(),
        contact_preference: r.contact_preference.into(),
        email: r.email.clone(),
        phone: r.phone.clone(),
        skills: r.skills.iter().map(Skill::from).collect(),
    }
}

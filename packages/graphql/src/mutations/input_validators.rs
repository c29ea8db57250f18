use async_graphql::InputObject;
use models::{EmployeeId, EmployeeRecord, SkillEntry};
use services::employees::form::{CONFIRM_EMAIL, EMAIL_GROUP};
use services::forms::FormError;
use services::{EmployeeForm, FormConfig};

use crate::types::employee::ContactPreference;

#[derive(InputObject)]
pub struct SkillInput {
    pub skill_name: String,
    pub experience_in_years: f64,
    pub proficiency: String,
}

#[derive(InputObject)]
pub struct EmployeeInput {
    pub full_name: String,
    pub contact_preference: Option<ContactPreference>,
    pub email: String,
    /// Checked against `email` when given
    pub confirm_email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<SkillInput>,
}

impl EmployeeInput {
    pub fn to_record(&self, id: Option<EmployeeId>) -> EmployeeRecord {
        EmployeeRecord {
            id,
            full_name: self.full_name.clone(),
            contact_preference: self
                .contact_preference
                .map(Into::into)
                .unwrap_or_default(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            skills: self
                .skills
                .iter()
                .map(|s| SkillEntry {
                    skill_name: s.skill_name.clone(),
                    experience_in_years: s.experience_in_years,
                    proficiency: s.proficiency.clone(),
                })
                .collect(),
        }
    }

    /// The employee form filled from this input with every control touched,
    /// so all failures are reported.
    pub fn to_form(&self, id: Option<EmployeeId>, config: &FormConfig) -> Result<EmployeeForm, FormError> {
        let mut form = EmployeeForm::edit(&self.to_record(id), config);
        if let Some(confirm_email) = &self.confirm_email {
            form.set_value(&format!("{}.{}", EMAIL_GROUP, CONFIRM_EMAIL), confirm_email.as_str())?;
        }
        form.mark_all_as_touched();
        Ok(form)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type EmployeeId = i64;

/// How an employee prefers to be contacted. Drives whether a phone number is required.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactPreference {
    #[default]
    Email,
    Phone,
}

impl ContactPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactPreference::Email => "email",
            ContactPreference::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(ContactPreference::Email),
            "phone" => Ok(ContactPreference::Phone),
            other => Err(format!("unknown contact preference: {}", other)),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub skill_name: String,
    pub experience_in_years: f64,
    pub proficiency: String,
}

/// An employee as stored by the employee service.
///
/// `id` is `None` until the record has been persisted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: Option<EmployeeId>,
    pub full_name: String,
    pub contact_preference: ContactPreference,
    pub email: String,
    pub phone: Option<String>,
    pub skills: Vec<SkillEntry>,
}

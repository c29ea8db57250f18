use models::{ContactPreference, EmployeeId, EmployeeRecord, SkillEntry};

use super::{EmployeeLookup, EmployeePersistence, EmployeeServiceError, FormConfig};
use crate::forms::{
    collect_error_codes, ErrorCollector, ErrorKeys, ErrorVisibility, FieldValue, FormControl,
    FormError, FormErrors, FormGroup, FormList, FormNode, ValidatorDependency,
};
use crate::navigation::{Navigator, Route};
use crate::validation::field_validators::{ValidationCode, Validator};
use crate::validation::messages::EMPLOYEE_FORM_MESSAGES;
use std::collections::BTreeMap;

pub const FULL_NAME: &str = "fullName";
pub const CONTACT_PREFERENCE: &str = "contactPreference";
pub const EMAIL_GROUP: &str = "emailGroup";
pub const EMAIL: &str = "email";
pub const CONFIRM_EMAIL: &str = "confirmEmail";
pub const PHONE: &str = "phone";
pub const SKILLS: &str = "skills";
pub const SKILL_NAME: &str = "skillName";
pub const EXPERIENCE_IN_YEARS: &str = "experienceInYears";
pub const PROFICIENCY: &str = "proficiency";

const FULL_NAME_MIN_LENGTH: usize = 2;
const FULL_NAME_MAX_LENGTH: usize = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// The employee create/edit form.
///
/// Every mutation revalidates the whole tree and refreshes the display
/// messages before returning, so [`errors`](Self::errors) is always current.
#[derive(Clone, Debug)]
pub struct EmployeeForm {
    mode: FormMode,
    employee_id: Option<EmployeeId>,
    root: FormGroup,
    form_errors: FormErrors,
}

impl EmployeeForm {
    /// An empty form for a new employee, with one blank skill.
    pub fn new(config: &FormConfig) -> Self {
        let root = build_root(&EmployeeRecord::default(), vec![skill_group(None)], config);
        Self::with_root(FormMode::Create, None, root)
    }

    /// A form pre-filled from an existing employee.
    pub fn edit(record: &EmployeeRecord, config: &FormConfig) -> Self {
        let skills = record.skills.iter().map(Some).map(skill_group).collect();
        let root = build_root(record, skills, config);
        Self::with_root(FormMode::Edit, record.id, root)
    }

    /// Fetches the employee and opens it for editing.
    pub async fn load<L: EmployeeLookup>(
        lookup: &L,
        id: EmployeeId,
        config: &FormConfig,
    ) -> Result<Self, EmployeeServiceError> {
        match lookup.fetch_by_id(id).await {
            Ok(record) => Ok(Self::edit(&record, config)),
            Err(e) => {
                tracing::error!(employee_id = id, error = %e, "failed to load employee");
                Err(e)
            }
        }
    }

    fn with_root(mode: FormMode, employee_id: Option<EmployeeId>, root: FormGroup) -> Self {
        let mut form = Self {
            mode,
            employee_id,
            root,
            form_errors: FormErrors::new(),
        };
        form.refresh();
        form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.employee_id
    }

    pub fn root(&self) -> &FormGroup {
        &self.root
    }

    pub fn is_valid(&self) -> bool {
        self.root.is_valid()
    }

    /// Display messages keyed by bare field name.
    pub fn errors(&self) -> &FormErrors {
        &self.form_errors
    }

    pub fn error(&self, field: &str) -> &str {
        self.form_errors.get(field).map(String::as_str).unwrap_or("")
    }

    /// Display messages keyed by dotted path, so each skill reports separately.
    pub fn errors_by_path(&self) -> FormErrors {
        self.collector().keys(ErrorKeys::Path).collect(&self.root)
    }

    pub fn error_codes(&self) -> BTreeMap<String, Vec<ValidationCode>> {
        collect_error_codes(&self.root)
    }

    pub fn value(&self) -> serde_json::Value {
        self.root.value()
    }

    /// Applies user input to the control at `path`.
    pub fn set_value(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.root.set_value(path, value)?;
        self.refresh();
        Ok(())
    }

    /// Records that the control at `path` lost focus.
    pub fn mark_as_touched(&mut self, path: &str) -> Result<(), FormError> {
        self.root.mark_as_touched(path)?;
        self.refresh();
        Ok(())
    }

    pub fn mark_all_as_touched(&mut self) {
        self.root.mark_all_as_touched();
        self.refresh();
    }

    pub fn contact_preference(&self) -> ContactPreference {
        self.text(CONTACT_PREFERENCE).parse().unwrap_or_default()
    }

    /// Choosing `Phone` makes the phone number required; any other choice
    /// drops the requirement.
    pub fn set_contact_preference(&mut self, preference: ContactPreference) -> Result<(), FormError> {
        self.set_value(CONTACT_PREFERENCE, preference.as_str())
    }

    pub fn skill_count(&self) -> usize {
        self.skills().map(FormList::len).unwrap_or(0)
    }

    pub fn add_skill(&mut self) {
        if let Some(skills) = self.skills_mut() {
            skills.push(skill_group(None));
        }
        self.refresh();
    }

    /// Removes the skill at `index`. Negative or too-large indexes fail with
    /// [`FormError::OutOfRange`].
    pub fn remove_skill(&mut self, index: isize) -> Result<(), FormError> {
        let skills = self
            .skills_mut()
            .ok_or_else(|| FormError::UnknownField(SKILLS.to_string()))?;
        let len = skills.len();
        let position = usize::try_from(index).ok().filter(|i| *i < len);
        let Some(position) = position else {
            tracing::error!(index, len, "skill index out of range");
            return Err(FormError::OutOfRange { index, len });
        };

        skills.remove_at(position)?;
        skills.mark_as_touched();
        skills.mark_as_dirty();
        self.refresh();
        Ok(())
    }

    /// Projects the current values into a record ready for the employee service.
    pub fn to_record(&self) -> EmployeeRecord {
        let phone = self.text(PHONE);
        let skills = self
            .skills()
            .map(|list| {
                list.iter()
                    .map(|group| SkillEntry {
                        skill_name: control_text(group, SKILL_NAME),
                        experience_in_years: group
                            .control(EXPERIENCE_IN_YEARS)
                            .and_then(|c| c.value().as_number())
                            .unwrap_or_default(),
                        proficiency: control_text(group, PROFICIENCY),
                    })
                    .collect()
            })
            .unwrap_or_default();

        EmployeeRecord {
            id: self.employee_id,
            full_name: self.text(FULL_NAME),
            contact_preference: self.contact_preference(),
            email: self.text(&format!("{}.{}", EMAIL_GROUP, EMAIL)),
            phone: (!phone.is_empty()).then_some(phone),
            skills,
        }
    }

    /// Saves the employee: `update` when it already has an id, `create`
    /// otherwise. On success the record (with its id) is returned and the
    /// navigator is sent to the employee list. Failures are logged and
    /// returned; the form is left as it was.
    pub async fn submit<P, N>(
        &self,
        persistence: &P,
        navigator: &N,
    ) -> Result<EmployeeRecord, EmployeeServiceError>
    where
        P: EmployeePersistence,
        N: Navigator,
    {
        let mut record = self.to_record();
        tracing::debug!(value = %self.value(), "submitting employee form");

        let saved = match record.id {
            Some(id) => persistence.update(record.clone()).await.map(|_| id),
            None => persistence.create(record.clone()).await,
        };

        match saved {
            Ok(id) => {
                tracing::info!(employee_id = id, mode = ?self.mode, "employee saved");
                record.id = Some(id);
                navigator.go_to(Route::Employees);
                Ok(record)
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to save employee");
                Err(e)
            }
        }
    }

    pub(crate) fn collector(&self) -> ErrorCollector<'static> {
        let visibility = match self.mode {
            FormMode::Create => ErrorVisibility::Interacted,
            FormMode::Edit => ErrorVisibility::InteractedOrFilled,
        };
        ErrorCollector::new(&EMPLOYEE_FORM_MESSAGES).visibility(visibility)
    }

    fn refresh(&mut self) {
        self.root.update_validity();
        self.form_errors = self.collector().collect(&self.root);
    }

    fn text(&self, path: &str) -> String {
        self.root
            .get(path)
            .and_then(FormNode::as_control)
            .map(|c| c.value().as_text().into_owned())
            .unwrap_or_default()
    }

    fn skills(&self) -> Option<&FormList> {
        self.root.get(SKILLS).and_then(FormNode::as_list)
    }

    fn skills_mut(&mut self) -> Option<&mut FormList> {
        self.root.get_mut(SKILLS).and_then(FormNode::as_list_mut)
    }
}

/// Group validator for the email pair.
///
/// Passes when both values are equal, or while the confirmation has not
/// been interacted with and is still empty.
pub fn validate_email_group(group: &FormGroup) -> Option<ValidationCode> {
    let (Some(email), Some(confirm)) = (group.control(EMAIL), group.control(CONFIRM_EMAIL)) else {
        return None;
    };
    let untouched_and_empty = !confirm.is_interacted() && confirm.value().is_empty();
    if email.value() == confirm.value() || untouched_and_empty {
        None
    } else {
        Some(ValidationCode::EmailMismatch)
    }
}

fn phone_validators(preference: &FieldValue) -> Vec<Validator> {
    if preference.as_text() == ContactPreference::Phone.as_str() {
        vec![Validator::Required]
    } else {
        Vec::new()
    }
}

fn confirm_email_validators(email: &FieldValue) -> Vec<Validator> {
    if email.is_empty() {
        Vec::new()
    } else {
        vec![Validator::Required]
    }
}

fn control_text(group: &FormGroup, key: &str) -> String {
    group
        .control(key)
        .map(|c| c.value().as_text().into_owned())
        .unwrap_or_default()
}

fn skill_group(entry: Option<&SkillEntry>) -> FormGroup {
    let (name, experience, proficiency) = match entry {
        Some(entry) => (
            FieldValue::text(entry.skill_name.as_str()),
            FieldValue::Number(entry.experience_in_years),
            FieldValue::text(entry.proficiency.as_str()),
        ),
        None => (FieldValue::text(""), FieldValue::text(""), FieldValue::text("")),
    };

    FormGroup::new()
        .add_control(SKILL_NAME, FormControl::new(name, vec![Validator::Required]))
        .add_control(
            EXPERIENCE_IN_YEARS,
            FormControl::new(experience, vec![Validator::Required, Validator::Number]),
        )
        .add_control(PROFICIENCY, FormControl::new(proficiency, vec![Validator::Required]))
}

fn build_root(record: &EmployeeRecord, skills: Vec<FormGroup>, config: &FormConfig) -> FormGroup {
    let email_group = FormGroup::new()
        .add_control(
            EMAIL,
            FormControl::new(
                record.email.as_str(),
                vec![
                    Validator::Required,
                    Validator::EmailDomain(config.required_email_domain.clone()),
                ],
            ),
        )
        .add_control(CONFIRM_EMAIL, FormControl::new(record.email.as_str(), vec![]))
        .with_validator(validate_email_group)
        .with_dependency(ValidatorDependency::new(EMAIL, CONFIRM_EMAIL, confirm_email_validators));

    FormGroup::new()
        .add_control(
            FULL_NAME,
            FormControl::new(
                record.full_name.as_str(),
                vec![
                    Validator::Required,
                    Validator::MinLength(FULL_NAME_MIN_LENGTH),
                    Validator::MaxLength(FULL_NAME_MAX_LENGTH),
                ],
            ),
        )
        .add_control(
            CONTACT_PREFERENCE,
            FormControl::new(record.contact_preference.as_str(), vec![]),
        )
        .add_control(EMAIL_GROUP, email_group)
        .add_control(PHONE, FormControl::new(record.phone.clone(), vec![]))
        .add_control(SKILLS, FormList::new(skills))
        .with_dependency(ValidatorDependency::new(CONTACT_PREFERENCE, PHONE, phone_validators))
}

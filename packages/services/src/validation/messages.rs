/// Read-only table of display messages, field key -> (error code -> message).
#[derive(Debug)]
pub struct MessageCatalog {
    entries: &'static [(&'static str, &'static [(&'static str, &'static str)])],
}

impl MessageCatalog {
    pub const fn new(
        entries: &'static [(&'static str, &'static [(&'static str, &'static str)])],
    ) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, field: &str, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, codes)| codes.iter().find(|(key, _)| *key == code))
            .map(|(_, message)| *message)
    }
}

pub static EMPLOYEE_FORM_MESSAGES: MessageCatalog = MessageCatalog::new(&[
    (
        "fullName",
        &[
            ("required", "Full Name is required."),
            ("minlength", "Full Name must be greater than 2 characters."),
            ("maxlength", "Full Name must be less than 10 characters."),
        ],
    ),
    (
        "email",
        &[
            ("required", "Email is required."),
            ("emailDomain", "Email domain is not accepted."),
        ],
    ),
    ("confirmEmail", &[("required", "Confirm Email is required.")]),
    ("emailGroup", &[("emailMismatch", "Email and Confirm Email do not match.")]),
    ("phone", &[("required", "Phone is required.")]),
    ("skillName", &[("required", "Skill Name is required.")]),
    (
        "experienceInYears",
        &[
            ("required", "Experience is required."),
            ("number", "Experience must be a number."),
        ],
    ),
    ("proficiency", &[("required", "Proficiency is required.")]),
]);

pub const DEFAULT_EMAIL_DOMAIN: &str = "gmail.com";

/// Settings that shape the employee form's validators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormConfig {
    pub required_email_domain: String,
}

impl FormConfig {
    pub fn new(required_email_domain: impl Into<String>) -> Self {
        Self {
            required_email_domain: required_email_domain.into(),
        }
    }

    pub fn from_env() -> Self {
        let required_email_domain = std::env::var("REQUIRED_EMAIL_DOMAIN")
            .ok()
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| DEFAULT_EMAIL_DOMAIN.to_string());

        FormConfig {
            required_email_domain,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new(DEFAULT_EMAIL_DOMAIN)
    }
}

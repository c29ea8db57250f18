use std::fmt;

use crate::forms::FieldValue;

/// An active validation failure on a control or group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationCode {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    Number,
    EmailDomain,
    EmailMismatch,
}

impl ValidationCode {
    /// Key used to look the code up in a message catalog.
    pub fn key(&self) -> &'static str {
        match self {
            ValidationCode::Required => "required",
            ValidationCode::MinLength { .. } => "minlength",
            ValidationCode::MaxLength { .. } => "maxlength",
            ValidationCode::Number => "number",
            ValidationCode::EmailDomain => "emailDomain",
            ValidationCode::EmailMismatch => "emailMismatch",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validators attachable to a single control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validator {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Number,
    EmailDomain(String),
}

impl Validator {
    pub fn validate(&self, value: &FieldValue) -> Option<ValidationCode> {
        match self {
            Validator::Required => required(value),
            Validator::MinLength(min) => min_length(value, *min),
            Validator::MaxLength(max) => max_length(value, *max),
            Validator::Number => number(value),
            Validator::EmailDomain(domain) => email_domain(domain)(value),
        }
    }
}

pub fn required(value: &FieldValue) -> Option<ValidationCode> {
    value.is_empty().then_some(ValidationCode::Required)
}

/// Empty values pass; emptiness is the job of [`required`]. Only text has a length.
pub fn min_length(value: &FieldValue, min: usize) -> Option<ValidationCode> {
    match value {
        FieldValue::Text(s) if !s.is_empty() => {
            let actual = s.chars().count();
            (actual < min).then_some(ValidationCode::MinLength {
                required: min,
                actual,
            })
        }
        _ => None,
    }
}

pub fn max_length(value: &FieldValue, max: usize) -> Option<ValidationCode> {
    match value {
        FieldValue::Text(s) => {
            let actual = s.chars().count();
            (actual > max).then_some(ValidationCode::MaxLength {
                required: max,
                actual,
            })
        }
        _ => None,
    }
}

/// Non-empty text must parse as a number.
pub fn number(value: &FieldValue) -> Option<ValidationCode> {
    (!value.is_empty() && value.as_number().is_none()).then_some(ValidationCode::Number)
}

/// Builds a validator accepting only addresses in `required_domain`.
///
/// The domain is whatever follows the last `@`, or the whole value when
/// there is none, compared case-insensitively. Empty values pass.
pub fn email_domain(required_domain: &str) -> impl Fn(&FieldValue) -> Option<ValidationCode> {
    let required_domain = required_domain.to_lowercase();
    move |value| {
        let email = value.as_text();
        if email.is_empty() {
            return None;
        }
        let domain = match email.rfind('@') {
            Some(at) => &email[at + 1..],
            None => &email[..],
        };
        if domain.to_lowercase() == required_domain {
            None
        } else {
            Some(ValidationCode::EmailDomain)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(required(&FieldValue::Null), Some(ValidationCode::Required));
        assert_eq!(required(&FieldValue::text("")), Some(ValidationCode::Required));
        assert_eq!(required(&FieldValue::text("a")), None);
        assert_eq!(required(&FieldValue::Number(0.0)), None);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(min_length(&FieldValue::text(""), 2), None);
        assert_eq!(
            min_length(&FieldValue::text("a"), 2),
            Some(ValidationCode::MinLength { required: 2, actual: 1 })
        );
        assert_eq!(min_length(&FieldValue::text("ab"), 2), None);
        assert_eq!(max_length(&FieldValue::text("abcdefghij"), 10), None);
        assert_eq!(
            max_length(&FieldValue::text("abcdefghijk"), 10),
            Some(ValidationCode::MaxLength { required: 10, actual: 11 })
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(number(&FieldValue::text("")), None);
        assert_eq!(number(&FieldValue::text(" 1.5 ")), None);
        assert_eq!(number(&FieldValue::Number(3.0)), None);
        assert_eq!(number(&FieldValue::text("lots")), Some(ValidationCode::Number));
        assert_eq!(Validator::Number.validate(&FieldValue::text("3 years")).map(|c| c.key()), Some("number"));
    }

    #[test]
    fn test_email_domain_empty_is_valid() {
        assert_eq!(email_domain("gmail.com")(&FieldValue::text("")), None);
        assert_eq!(email_domain("gmail.com")(&FieldValue::Null), None);
    }

    #[test]
    fn test_email_domain_is_case_insensitive() {
        let validate = email_domain("gmail.com");
        assert_eq!(validate(&FieldValue::text("mark@GMail.COM")), None);
        assert_eq!(
            validate(&FieldValue::text("mark@yahoo.com")),
            Some(ValidationCode::EmailDomain)
        );
    }

    #[test]
    fn test_email_domain_uses_last_at_sign() {
        let validate = email_domain("gmail.com");
        assert_eq!(validate(&FieldValue::text("a@yahoo.com@gmail.com")), None);
        assert_eq!(
            validate(&FieldValue::text("a@gmail.com@yahoo.com")),
            Some(ValidationCode::EmailDomain)
        );
    }

    #[test]
    fn test_email_domain_without_at_sign_fails_cleanly() {
        let validate = email_domain("gmail.com");
        for value in ["mark", "gmail", "markgmail.com", " "] {
            assert_eq!(
                validate(&FieldValue::text(value)),
                Some(ValidationCode::EmailDomain),
                "{value}"
            );
        }
        // a bare domain is its own domain
        assert_eq!(validate(&FieldValue::text("gmail.com")), None);
    }

    #[test]
    fn test_validator_enum_dispatch() {
        let validator = Validator::EmailDomain("example.org".to_string());
        assert_eq!(validator.validate(&FieldValue::text("x@example.org")), None);
        assert_eq!(
            Validator::MaxLength(1).validate(&FieldValue::text("xy")).map(|c| c.key()),
            Some("maxlength")
        );
    }
}

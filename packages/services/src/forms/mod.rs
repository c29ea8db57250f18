//! A small reactive-form toolkit: a tree of controls, groups and lists whose
//! validity is recomputed after every change.

pub mod control;
pub mod errors;
pub mod group;
pub mod list;
pub mod node;
pub mod value;

use std::fmt;

pub use control::FormControl;
pub use errors::{
    collect_error_codes, collect_errors, ErrorCollector, ErrorKeys, ErrorVisibility, FormErrors,
};
pub use group::{FormGroup, GroupValidator, ValidatorDependency};
pub use list::FormList;
pub use node::FormNode;
pub use value::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A list index outside `0..len`.
    OutOfRange { index: isize, len: usize },
    /// A path that does not resolve to a node of the expected kind.
    UnknownField(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::OutOfRange { index, len } => {
                write!(f, "index {} is out of range for a list of length {}", index, len)
            }
            FormError::UnknownField(path) => write!(f, "unknown form field: {}", path),
        }
    }
}

impl std::error::Error for FormError {}

/// Splits `skills.0.skillName` into `("skills", Some("0.skillName"))`.
pub(crate) fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}

pub(crate) fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

use std::collections::{BTreeMap, HashMap};

use super::{join_path, FormGroup, FormNode};
use crate::validation::field_validators::ValidationCode;
use crate::validation::messages::MessageCatalog;

/// Display messages keyed by field. Every visited key is present; fields
/// without visible errors map to an empty string.
pub type FormErrors = HashMap<String, String>;

/// When an invalid node is allowed to show its messages.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorVisibility {
    /// Only after the node was touched or changed.
    #[default]
    Interacted,
    /// Also when it already holds a value, as with a form pre-filled for editing.
    InteractedOrFilled,
}

/// How nested nodes are keyed in the resulting map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorKeys {
    /// Bare field names. Same-named fields at different depths overwrite
    /// each other, last visited wins.
    #[default]
    Flat,
    /// Dotted paths, e.g. `skills.1.skillName`.
    Path,
}

/// Walks a form tree and renders the active error codes of each node into
/// display messages.
#[derive(Copy, Clone, Debug)]
pub struct ErrorCollector<'a> {
    messages: &'a MessageCatalog,
    visibility: ErrorVisibility,
    keys: ErrorKeys,
}

impl<'a> ErrorCollector<'a> {
    pub fn new(messages: &'a MessageCatalog) -> Self {
        Self {
            messages,
            visibility: ErrorVisibility::default(),
            keys: ErrorKeys::default(),
        }
    }

    pub fn visibility(mut self, visibility: ErrorVisibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn keys(mut self, keys: ErrorKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn collect(&self, group: &FormGroup) -> FormErrors {
        let mut errors = FormErrors::new();
        self.walk(group, "", &mut errors);
        errors
    }

    fn walk(&self, group: &FormGroup, prefix: &str, errors: &mut FormErrors) {
        for (key, node) in group.controls() {
            let path = join_path(prefix, key);
            let entry = match self.keys {
                ErrorKeys::Flat => key.to_string(),
                ErrorKeys::Path => path.clone(),
            };

            let message = if self.is_reportable(node) {
                self.render(key, node.errors())
            } else {
                String::new()
            };
            errors.insert(entry, message);

            match node {
                FormNode::Group(child) => self.walk(child, &path, errors),
                FormNode::List(list) => {
                    for (index, child) in list.iter().enumerate() {
                        self.walk(child, &join_path(&path, &index.to_string()), errors);
                    }
                }
                FormNode::Control(_) => {}
            }
        }
    }

    fn is_reportable(&self, node: &FormNode) -> bool {
        if node.is_valid() {
            return false;
        }
        match self.visibility {
            ErrorVisibility::Interacted => node.is_interacted(),
            ErrorVisibility::InteractedOrFilled => node.is_interacted() || !node.is_empty(),
        }
    }

    /// Codes without a catalog entry are skipped.
    fn render(&self, field: &str, codes: &[ValidationCode]) -> String {
        codes
            .iter()
            .filter_map(|code| self.messages.lookup(field, code.key()))
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// Flat, interaction-gated messages for every field of `group`.
pub fn collect_errors(group: &FormGroup, messages: &MessageCatalog) -> FormErrors {
    ErrorCollector::new(messages).collect(group)
}

/// Active error codes of every node that has any, keyed by dotted path.
/// Ignores interaction state.
pub fn collect_error_codes(group: &FormGroup) -> BTreeMap<String, Vec<ValidationCode>> {
    let mut codes = BTreeMap::new();
    walk_codes(group, "", &mut codes);
    codes
}

fn walk_codes(group: &FormGroup, prefix: &str, codes: &mut BTreeMap<String, Vec<ValidationCode>>) {
    for (key, node) in group.controls() {
        let path = join_path(prefix, key);
        if !node.errors().is_empty() {
            codes.insert(path.clone(), node.errors().to_vec());
        }
        match node {
            FormNode::Group(child) => walk_codes(child, &path, codes),
            FormNode::List(list) => {
                for (index, child) in list.iter().enumerate() {
                    walk_codes(child, &join_path(&path, &index.to_string()), codes);
                }
            }
            FormNode::Control(_) => {}
        }
    }
}

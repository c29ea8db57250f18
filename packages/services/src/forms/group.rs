use super::{split_path, FieldValue, FormControl, FormError, FormNode};
use crate::validation::field_validators::{ValidationCode, Validator};

/// A cross-field rule evaluated against the whole group.
pub type GroupValidator = fn(&FormGroup) -> Option<ValidationCode>;

/// An explicit edge between two sibling controls: whenever the group
/// recomputes, the validator set of `target` is rebuilt from the current
/// value of `source`.
#[derive(Clone, Debug)]
pub struct ValidatorDependency {
    source: String,
    target: String,
    rule: fn(&FieldValue) -> Vec<Validator>,
}

impl ValidatorDependency {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        rule: fn(&FieldValue) -> Vec<Validator>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            rule,
        }
    }
}

/// Named children kept in declaration order, plus an optional group-level
/// validator and any dependency edges between children.
#[derive(Clone, Debug, Default)]
pub struct FormGroup {
    controls: Vec<(String, FormNode)>,
    validator: Option<GroupValidator>,
    dependencies: Vec<ValidatorDependency>,
    errors: Vec<ValidationCode>,
}

impl FormGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_control(mut self, key: impl Into<String>, node: impl Into<FormNode>) -> Self {
        self.controls.push((key.into(), node.into()));
        self
    }

    pub fn with_validator(mut self, validator: GroupValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn with_dependency(mut self, dependency: ValidatorDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn controls(&self) -> impl Iterator<Item = (&str, &FormNode)> {
        self.controls.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn child(&self, key: &str) -> Option<&FormNode> {
        self.controls
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    fn child_mut(&mut self, key: &str) -> Option<&mut FormNode> {
        self.controls
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Direct child control by key.
    pub fn control(&self, key: &str) -> Option<&FormControl> {
        self.child(key).and_then(FormNode::as_control)
    }

    /// Resolves a dotted path such as `emailGroup.email` or
    /// `skills.0.skillName`. List elements are addressed by index and are
    /// only reachable through one of their children.
    pub fn get(&self, path: &str) -> Option<&FormNode> {
        let (key, rest) = split_path(path);
        let node = self.child(key)?;
        match rest {
            None => Some(node),
            Some(rest) => match node {
                FormNode::Group(group) => group.get(rest),
                FormNode::List(list) => {
                    let (index, rest) = split_path(rest);
                    list.at(index.parse().ok()?)?.get(rest?)
                }
                FormNode::Control(_) => None,
            },
        }
    }

    pub fn get_mut(&mut self, path: &str) -> Option<&mut FormNode> {
        let (key, rest) = split_path(path);
        let node = self.child_mut(key)?;
        match rest {
            None => Some(node),
            Some(rest) => match node {
                FormNode::Group(group) => group.get_mut(rest),
                FormNode::List(list) => {
                    let (index, rest) = split_path(rest);
                    list.at_mut(index.parse().ok()?)?.get_mut(rest?)
                }
                FormNode::Control(_) => None,
            },
        }
    }

    fn control_at_mut(&mut self, path: &str) -> Option<&mut FormControl> {
        self.get_mut(path).and_then(FormNode::as_control_mut)
    }

    /// Sets the control at `path` as user input and recomputes the group.
    pub fn set_value(&mut self, path: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let control = self
            .control_at_mut(path)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))?;
        control.set_value(value);
        self.update_validity();
        Ok(())
    }

    pub fn mark_as_touched(&mut self, path: &str) -> Result<(), FormError> {
        let control = self
            .control_at_mut(path)
            .ok_or_else(|| FormError::UnknownField(path.to_string()))?;
        control.mark_as_touched();
        self.update_validity();
        Ok(())
    }

    pub fn mark_all_as_touched(&mut self) {
        for (_, node) in &mut self.controls {
            node.mark_all_as_touched();
        }
        self.update_validity();
    }

    /// Rebuilds dependent validator sets, revalidates every child, then
    /// runs the group validator.
    pub fn update_validity(&mut self) {
        for dependency in &self.dependencies {
            let source = self
                .controls
                .iter()
                .find(|(key, _)| *key == dependency.source)
                .and_then(|(_, node)| node.as_control())
                .map(|control| control.value().clone());
            let Some(source) = source else {
                continue;
            };
            let validators = (dependency.rule)(&source);
            let target = self
                .controls
                .iter_mut()
                .find(|(key, _)| *key == dependency.target)
                .and_then(|(_, node)| node.as_control_mut());
            if let Some(target) = target {
                target.set_validators(validators);
            }
        }

        for (_, node) in &mut self.controls {
            node.update_validity();
        }

        let errors = match self.validator {
            Some(validator) => validator(self).into_iter().collect(),
            None => Vec::new(),
        };
        self.errors = errors;
    }

    /// Errors reported by the group validator only.
    pub fn errors(&self) -> &[ValidationCode] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.controls.iter().all(|(_, node)| node.is_valid())
    }

    pub fn is_touched(&self) -> bool {
        self.controls.iter().any(|(_, node)| node.is_touched())
    }

    pub fn is_dirty(&self) -> bool {
        self.controls.iter().any(|(_, node)| node.is_dirty())
    }

    pub fn is_empty(&self) -> bool {
        self.controls.iter().all(|(_, node)| node.is_empty())
    }

    pub fn value(&self) -> serde_json::Value {
        let map = self
            .controls
            .iter()
            .map(|(key, node)| (key.clone(), node.value()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::FormList;

    fn required_when_yes(value: &FieldValue) -> Vec<Validator> {
        if value.as_text() == "yes" {
            vec![Validator::Required]
        } else {
            Vec::new()
        }
    }

    fn sample() -> FormGroup {
        let mut group = FormGroup::new()
            .add_control("flag", FormControl::new("no", vec![]))
            .add_control("detail", FormControl::new("", vec![]))
            .add_control(
                "items",
                FormList::new(vec![FormGroup::new()
                    .add_control("name", FormControl::new("", vec![Validator::Required]))]),
            )
            .with_dependency(ValidatorDependency::new("flag", "detail", required_when_yes));
        group.update_validity();
        group
    }

    #[test]
    fn test_get_resolves_nested_paths() {
        let group = sample();
        assert!(group.get("flag").is_some());
        assert!(group.get("items.0.name").is_some());
        assert!(group.get("items.1.name").is_none());
        assert!(group.get("items.x.name").is_none());
        assert!(group.get("flag.inner").is_none());
    }

    #[test]
    fn test_set_value_unknown_path() {
        let mut group = sample();
        assert_eq!(
            group.set_value("missing", "x").unwrap_err(),
            FormError::UnknownField("missing".to_string())
        );
        assert!(group.set_value("items", "x").is_err());
    }

    #[test]
    fn test_dependency_rebuilds_target_validators() {
        let mut group = sample();
        assert!(group.control("detail").unwrap().is_valid());

        group.set_value("flag", "yes").unwrap();
        let detail = group.control("detail").unwrap();
        assert!(detail.has_validator(&Validator::Required));
        assert!(!detail.is_valid());

        group.set_value("flag", "no").unwrap();
        let detail = group.control("detail").unwrap();
        assert!(detail.validators().is_empty());
        assert!(detail.is_valid());
    }

    #[test]
    fn test_set_value_inside_list() {
        let mut group = sample();
        assert!(!group.is_valid());
        group.set_value("items.0.name", "widget").unwrap();
        assert!(group.is_valid());
        assert!(group.is_dirty());
    }

    #[test]
    fn test_mark_all_as_touched() {
        let mut group = sample();
        assert!(!group.is_touched());
        group.mark_all_as_touched();
        assert!(group.get("items.0.name").unwrap().is_touched());
    }

    #[test]
    fn test_value_projects_tree() {
        let group = sample();
        let value = group.value();
        assert_eq!(value["flag"], "no");
        assert_eq!(value["items"][0]["name"], "");
    }
}

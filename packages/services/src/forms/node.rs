use super::{FormControl, FormGroup, FormList};
use crate::validation::field_validators::ValidationCode;

#[derive(Clone, Debug)]
pub enum FormNode {
    Control(FormControl),
    Group(FormGroup),
    List(FormList),
}

impl From<FormControl> for FormNode {
    fn from(control: FormControl) -> Self {
        FormNode::Control(control)
    }
}

impl From<FormGroup> for FormNode {
    fn from(group: FormGroup) -> Self {
        FormNode::Group(group)
    }
}

impl From<FormList> for FormNode {
    fn from(list: FormList) -> Self {
        FormNode::List(list)
    }
}

impl FormNode {
    pub fn as_control(&self) -> Option<&FormControl> {
        match self {
            FormNode::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_control_mut(&mut self) -> Option<&mut FormControl> {
        match self {
            FormNode::Control(control) => Some(control),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&FormList> {
        match self {
            FormNode::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut FormList> {
        match self {
            FormNode::List(list) => Some(list),
            _ => None,
        }
    }

    /// The node's own error codes. Lists carry no validators of their own.
    pub fn errors(&self) -> &[ValidationCode] {
        match self {
            FormNode::Control(control) => control.errors(),
            FormNode::Group(group) => group.errors(),
            FormNode::List(_) => &[],
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            FormNode::Control(control) => control.is_valid(),
            FormNode::Group(group) => group.is_valid(),
            FormNode::List(list) => list.is_valid(),
        }
    }

    pub fn is_touched(&self) -> bool {
        match self {
            FormNode::Control(control) => control.is_touched(),
            FormNode::Group(group) => group.is_touched(),
            FormNode::List(list) => list.is_touched(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        match self {
            FormNode::Control(control) => control.is_dirty(),
            FormNode::Group(group) => group.is_dirty(),
            FormNode::List(list) => list.is_dirty(),
        }
    }

    pub fn is_interacted(&self) -> bool {
        self.is_touched() || self.is_dirty()
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FormNode::Control(control) => control.value().is_empty(),
            FormNode::Group(group) => group.is_empty(),
            FormNode::List(list) => list.iter().all(FormGroup::is_empty),
        }
    }

    pub fn update_validity(&mut self) {
        match self {
            FormNode::Control(control) => control.update_validity(),
            FormNode::Group(group) => group.update_validity(),
            FormNode::List(list) => list.update_validity(),
        }
    }

    pub fn mark_all_as_touched(&mut self) {
        match self {
            FormNode::Control(control) => control.mark_as_touched(),
            FormNode::Group(group) => group.mark_all_as_touched(),
            FormNode::List(list) => list.mark_all_as_touched(),
        }
    }

    pub fn value(&self) -> serde_json::Value {
        match self {
            FormNode::Control(control) => control.value().to_json(),
            FormNode::Group(group) => group.value(),
            FormNode::List(list) => {
                serde_json::Value::Array(list.iter().map(FormGroup::value).collect())
            }
        }
    }
}

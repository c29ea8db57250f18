use super::FieldValue;
use crate::validation::field_validators::{ValidationCode, Validator};

/// A single-value field with its validators and interaction flags.
#[derive(Clone, Debug, Default)]
pub struct FormControl {
    value: FieldValue,
    validators: Vec<Validator>,
    errors: Vec<ValidationCode>,
    touched: bool,
    dirty: bool,
}

impl FormControl {
    pub fn new(value: impl Into<FieldValue>, validators: Vec<Validator>) -> Self {
        let mut control = Self {
            value: value.into(),
            validators,
            ..Default::default()
        };
        control.update_validity();
        control
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Replaces the value as user input would: the control becomes dirty
    /// and its errors are recomputed.
    pub fn set_value(&mut self, value: impl Into<FieldValue>) {
        self.value = value.into();
        self.dirty = true;
        self.update_validity();
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn has_validator(&self, validator: &Validator) -> bool {
        self.validators.contains(validator)
    }

    /// Swaps the validator set. Errors are not recomputed until
    /// [`update_validity`](Self::update_validity) runs.
    pub fn set_validators(&mut self, validators: Vec<Validator>) {
        self.validators = validators;
    }

    pub fn clear_validators(&mut self) {
        self.validators.clear();
    }

    /// Runs every validator in registration order.
    pub fn update_validity(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|validator| validator.validate(&self.value))
            .collect();
    }

    pub fn errors(&self) -> &[ValidationCode] {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Touched or dirty.
    pub fn is_interacted(&self) -> bool {
        self.touched || self.dirty
    }
}

use super::{FormError, FormGroup};

/// An ordered, resizable sequence of groups.
#[derive(Clone, Debug, Default)]
pub struct FormList {
    groups: Vec<FormGroup>,
    touched: bool,
    dirty: bool,
}

impl FormList {
    pub fn new(groups: Vec<FormGroup>) -> Self {
        Self {
            groups,
            ..Default::default()
        }
    }

    pub fn push(&mut self, group: FormGroup) {
        self.groups.push(group);
    }

    pub fn remove_at(&mut self, index: usize) -> Result<FormGroup, FormError> {
        if index >= self.groups.len() {
            return Err(FormError::OutOfRange {
                index: isize::try_from(index).unwrap_or(isize::MAX),
                len: self.groups.len(),
            });
        }
        Ok(self.groups.remove(index))
    }

    pub fn at(&self, index: usize) -> Option<&FormGroup> {
        self.groups.get(index)
    }

    pub fn at_mut(&mut self, index: usize) -> Option<&mut FormGroup> {
        self.groups.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormGroup> {
        self.groups.iter()
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn mark_as_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_touched(&self) -> bool {
        self.touched || self.groups.iter().any(FormGroup::is_touched)
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty || self.groups.iter().any(FormGroup::is_dirty)
    }

    pub fn is_valid(&self) -> bool {
        self.groups.iter().all(FormGroup::is_valid)
    }

    pub fn update_validity(&mut self) {
        for group in &mut self.groups {
            group.update_validity();
        }
    }

    pub fn mark_all_as_touched(&mut self) {
        self.touched = true;
        for group in &mut self.groups {
            group.mark_all_as_touched();
        }
    }
}

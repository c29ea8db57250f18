mod create;
mod read;
mod update;

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use models::{EmployeeId, EmployeeRecord};

/// In-memory employee store shared between request handlers. Clones share
/// the same data.
#[derive(Clone, Debug, Default)]
pub struct EmployeeRepository {
    employees: Arc<DashMap<EmployeeId, EmployeeRecord>>,
    next_id: Arc<AtomicI64>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> EmployeeId {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

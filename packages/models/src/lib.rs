pub mod employees;

pub use employees::{ContactPreference, EmployeeId, EmployeeRecord, SkillEntry};

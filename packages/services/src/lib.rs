pub mod employees;
pub mod forms;
pub mod navigation;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use employees::*;
pub use navigation::{HistoryNavigator, Navigator, Route};
pub use validation::*;

pub mod errors;
pub mod mutations;
pub mod queries;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

use async_graphql::{EmptySubscription, Schema};
use repositories::EmployeeRepository;
use services::FormConfig;

use crate::mutations::Mutations;
use crate::queries::Queries;

pub type EmployeeSchema = Schema<Queries, Mutations, EmptySubscription>;

pub fn build_schema(repository: EmployeeRepository, config: FormConfig) -> EmployeeSchema {
    Schema::build(Queries::default(), Mutations::default(), EmptySubscription)
        .data(repository)
        .data(config)
        .finish()
}

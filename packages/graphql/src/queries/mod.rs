use async_graphql::MergedObject;
mod employees;

#[derive(MergedObject, Default)]
pub struct Queries(employees::EmployeeQueries);

use async_graphql::MergedObject;
mod employees;
mod input_validators;

#[derive(MergedObject, Default)]
pub struct Mutations(employees::EmployeeMutation);

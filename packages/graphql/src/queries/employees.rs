use async_graphql::{Context, Object, Result};
use repositories::EmployeeRepository;
use crate::types::employee::{record_to_employee_type, Employee};

#[derive(Default)]
pub struct EmployeeQueries;

#[Object]
impl EmployeeQueries {
    /// All employees, ordered by id
    async fn employees(&self, ctx: &Context<'_>) -> Result<Vec<Employee>> {
        let repository = ctx.data::<EmployeeRepository>()?;
        Ok(repository
            .list_employees()
            .iter()
            .map(record_to_employee_type)
            .collect())
    }

    /// A single employee by id
    async fn employee(&self, ctx: &Context<'_>, id: i64) -> Result<Option<Employee>> {
        let repository = ctx.data::<EmployeeRepository>()?;
        Ok(repository.find(id).as_ref().map(record_to_employee_type))
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::EmployeeRepository;

    #[tokio::test]
    async fn test_employees_lists_all_in_id_order() {
        let repository = EmployeeRepository::new();
        seed_employee(&repository, "Mark");
        seed_employee(&repository, "Sara");
        let schema = create_test_schema(repository);

        let res = schema
            .execute(Request::new("query { employees { id fullName email } }"))
            .await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let employees = data["employees"].as_array().unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0]["fullName"], "Mark");
        assert_eq!(employees[1]["email"], "sara@gmail.com");
    }

    #[tokio::test]
    async fn test_employee_by_id() {
        let repository = EmployeeRepository::new();
        let saved = seed_employee(&repository, "Mark");
        let schema = create_test_schema(repository);

        let query = format!(
            "query {{ employee(id: {}) {{ fullName contactPreference skills {{ skillName experienceInYears }} }} }}",
            saved.id.unwrap()
        );
        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["employee"]["fullName"], "Mark");
        assert_eq!(data["employee"]["contactPreference"], "EMAIL");
        assert_eq!(data["employee"]["skills"][0]["skillName"], "rust");
    }

    #[tokio::test]
    async fn test_missing_employee_is_null() {
        let schema = create_test_schema(EmployeeRepository::new());

        let res = schema
            .execute(Request::new("query { employee(id: 42) { id } }"))
            .await;
        assert!(res.errors.is_empty());

        let data = res.data.into_json().unwrap();
        assert!(data["employee"].is_null());
    }
}

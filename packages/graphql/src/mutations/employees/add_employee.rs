use super::{submit_form, EmployeeMutationResult};
use crate::mutations::input_validators::EmployeeInput;
use async_graphql::{Context, Result};
use repositories::EmployeeRepository;
use services::validation::input_validator::InputValidator;
use services::FormConfig;

pub(super) async fn create_employee(
    ctx: &Context<'_>,
    input: EmployeeInput,
) -> Result<EmployeeMutationResult> {
    let repository = ctx.data::<EmployeeRepository>()?;
    let config = ctx.data::<FormConfig>()?;

    let form = input.to_form(None, config)?;
    if let Err(validation_errors) = form.validate() {
        return Ok(EmployeeMutationResult::ValidationError(validation_errors.into()));
    }

    Ok(submit_form(repository, &form).await)
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use async_graphql::Request;
    use repositories::EmployeeRepository;

    #[tokio::test]
    async fn test_create_employee_stores_record() {
        let repository = EmployeeRepository::new();
        let schema = create_test_schema(repository.clone());

        let query = format!(
            r#"mutation {{
                createEmployee(employee: {}) {{
                    __typename
                    ... on Employee {{ id fullName email phone skills {{ skillName }} }}
                }}
            }}"#,
            employee_input("Mark", "mark@gmail.com")
        );

        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        assert_eq!(data["createEmployee"]["__typename"], "Employee");
        assert_eq!(data["createEmployee"]["id"], 1);
        assert!(data["createEmployee"]["phone"].is_null());
        assert_eq!(repository.len(), 1);
        assert_eq!(repository.find(1).unwrap().skills[0].skill_name, "rust");
    }

    #[tokio::test]
    async fn test_create_employee_invalid_domain_returns_validation_error() {
        let repository = EmployeeRepository::new();
        let schema = create_test_schema(repository.clone());

        let query = format!(
            r#"mutation {{
                createEmployee(employee: {}) {{
                    ... on ValidationErrorType {{ message fields {{ field messages }} }}
                }}
            }}"#,
            employee_input("Mark", "mark@yahoo.com")
        );

        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let fields = data["createEmployee"]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0]["field"], "emailGroup.email");
        assert_eq!(data["createEmployee"]["message"], "Email domain is not accepted.");
        assert!(repository.is_empty());
    }

    #[tokio::test]
    async fn test_create_employee_phone_contact_requires_phone() {
        let repository = EmployeeRepository::new();
        let schema = create_test_schema(repository.clone());

        let query = r#"mutation {
            createEmployee(employee: {
                fullName: "Mark",
                contactPreference: PHONE,
                email: "mark@gmail.com",
                skills: []
            }) {
                ... on ValidationErrorType { fields { field messages } }
            }
        }"#;

        let res = schema.execute(Request::new(query)).await;
        assert!(res.errors.is_empty(), "Errors: {:?}", res.errors);

        let data = res.data.into_json().unwrap();
        let fields = data["createEmployee"]["fields"].as_array().unwrap();
        assert_eq!(fields[0]["field"], "phone");
        assert_eq!(fields[0]["messages"][0], "Phone is required.");
        assert!(repository.is_empty());
    }
}

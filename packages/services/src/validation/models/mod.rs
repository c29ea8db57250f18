mod employee_validator;

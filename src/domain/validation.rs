//! Employee record validation.
//!
//! [`validate_employee`] is the single rule set; the `validator::Validate`
//! impl lets request extractors reuse it.

use std::borrow::Cow;
use std::collections::BTreeMap;

use validator::{Validate, ValidationError, ValidationErrors};

use super::employee::{Employee, Salary};

/// Field name -> error message. Empty means the record can be persisted.
pub type FieldErrors = BTreeMap<String, String>;

pub const MSG_FIRSTNAME_REQUIRED: &str = "First Name is required.";
pub const MSG_SURNAME_REQUIRED: &str = "Surname is required.";
pub const MSG_SALUTATION_REQUIRED: &str = "Salutation is required.";
pub const MSG_GENDER_REQUIRED: &str = "Gender is required.";
pub const MSG_EMPLOYEENUMBER_REQUIRED: &str = "Employee Number is required.";
pub const MSG_PROFILE_COLOR_REQUIRED: &str = "Profile Color is required.";
pub const MSG_FULLNAME_REQUIRED: &str = "Full Name is required.";
pub const MSG_SALARY_REQUIRED: &str = "Salary is required";
pub const MSG_SALARY_NOT_A_NUMBER: &str = "Salary must be a valid number.";

/// Check a candidate record and report every failing field.
pub fn validate_employee(employee: &Employee) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let blank_checks = [
        ("firstname", &employee.firstname, MSG_FIRSTNAME_REQUIRED),
        ("surname", &employee.surname, MSG_SURNAME_REQUIRED),
        ("salutation", &employee.salutation, MSG_SALUTATION_REQUIRED),
        ("employeenumber", &employee.employeenumber, MSG_EMPLOYEENUMBER_REQUIRED),
        ("fullname", &employee.fullname, MSG_FULLNAME_REQUIRED),
    ];
    for (field, value, message) in blank_checks {
        if value.trim().is_empty() {
            errors.insert(field.to_string(), message.to_string());
        }
    }

    // Presence only, whitespace counts as a value
    if employee.gender.is_empty() {
        errors.insert("gender".to_string(), MSG_GENDER_REQUIRED.to_string());
    }
    if employee.profile_color.is_empty() {
        errors.insert("profile_color".to_string(), MSG_PROFILE_COLOR_REQUIRED.to_string());
    }

    if let Some(message) = salary_error(employee.salary.as_ref()) {
        errors.insert("salary".to_string(), message.to_string());
    }

    errors
}

fn salary_error(salary: Option<&Salary>) -> Option<&'static str> {
    match salary {
        None => Some(MSG_SALARY_REQUIRED),
        Some(salary) if salary.is_blank() => Some(MSG_SALARY_REQUIRED),
        Some(salary) if salary.amount().is_none() => Some(MSG_SALARY_NOT_A_NUMBER),
        Some(_) => None,
    }
}

impl Validate for Employee {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let fields = validate_employee(self);
        if fields.is_empty() {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        for (field, message) in fields {
            let mut error = ValidationError::new("employee");
            error.message = Some(Cow::Owned(message));
            errors.add(field_key(&field), error);
        }
        Err(errors)
    }
}

/// `ValidationErrors` keys are `'static`; map back onto the known field names.
fn field_key(field: &str) -> &'static str {
    match field {
        "firstname" => "firstname",
        "surname" => "surname",
        "salutation" => "salutation",
        "gender" => "gender",
        "employeenumber" => "employeenumber",
        "profile_color" => "profile_color",
        "fullname" => "fullname",
        "salary" => "salary",
        _ => "employee",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_employee() -> Employee {
        Employee {
            id: None,
            firstname: "Jane".to_string(),
            surname: "Doe".to_string(),
            fullname: "Jane Doe".to_string(),
            salutation: "Ms.".to_string(),
            gender: "Female".to_string(),
            employeenumber: "10042".to_string(),
            profile_color: "Green".to_string(),
            salary: Some(Salary::Text("52 000".to_string())),
        }
    }

    #[test]
    fn test_valid_employee_has_no_errors() {
        assert!(validate_employee(&valid_employee()).is_empty());
        assert!(valid_employee().validate().is_ok());
    }

    #[test]
    fn test_empty_draft_flags_every_required_field() {
        let errors = validate_employee(&Employee::draft());

        let keys: Vec<&str> = errors.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "employeenumber",
                "firstname",
                "fullname",
                "gender",
                "profile_color",
                "salary",
                "salutation",
                "surname",
            ]
        );
        assert_eq!(errors["salary"], MSG_SALARY_REQUIRED);
    }

    #[test]
    fn test_whitespace_only_text_fields_are_blank() {
        let mut employee = valid_employee();
        employee.firstname = "   ".to_string();
        employee.employeenumber = "\t".to_string();

        let errors = validate_employee(&employee);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["firstname"], MSG_FIRSTNAME_REQUIRED);
        assert_eq!(errors["employeenumber"], MSG_EMPLOYEENUMBER_REQUIRED);
    }

    #[test]
    fn test_gender_and_color_are_presence_checks() {
        let mut employee = valid_employee();
        employee.gender = " ".to_string();
        employee.profile_color = " ".to_string();
        assert!(validate_employee(&employee).is_empty());

        employee.gender.clear();
        employee.profile_color.clear();
        let errors = validate_employee(&employee);
        assert_eq!(errors["gender"], MSG_GENDER_REQUIRED);
        assert_eq!(errors["profile_color"], MSG_PROFILE_COLOR_REQUIRED);
    }

    #[test]
    fn test_non_numeric_salary_is_distinct_from_missing() {
        let mut employee = valid_employee();

        employee.salary = Some(Salary::Text("12a3".to_string()));
        assert_eq!(validate_employee(&employee)["salary"], MSG_SALARY_NOT_A_NUMBER);

        employee.salary = Some(Salary::Text(String::new()));
        assert_eq!(validate_employee(&employee)["salary"], MSG_SALARY_REQUIRED);

        employee.salary = Some(Salary::Text("   ".to_string()));
        assert_eq!(validate_employee(&employee)["salary"], MSG_SALARY_REQUIRED);

        employee.salary = Some(Salary::Text("Infinity".to_string()));
        assert_eq!(validate_employee(&employee)["salary"], MSG_SALARY_NOT_A_NUMBER);

        employee.salary = None;
        assert_eq!(validate_employee(&employee)["salary"], MSG_SALARY_REQUIRED);
    }

    #[test]
    fn test_numeric_salary_is_valid() {
        let mut employee = valid_employee();
        employee.salary = Some(Salary::Amount(0.0));
        assert!(validate_employee(&employee).is_empty());

        employee.salary = Some(Salary::Text("1 234 567".to_string()));
        assert!(validate_employee(&employee).is_empty());
    }

    #[test]
    fn test_validate_trait_reports_same_fields() {
        let errors = Employee::draft().validate().unwrap_err();
        let fields = errors.field_errors();

        assert_eq!(fields.len(), 8);
        let salary = fields
            .iter()
            .find(|(field, _)| field.to_string() == "salary")
            .and_then(|(_, errs)| errs[0].message.as_ref().map(|m| m.to_string()));
        assert_eq!(salary.as_deref(), Some(MSG_SALARY_REQUIRED));
    }
}

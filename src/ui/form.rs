//! Employee form model.
//!
//! Holds one draft while it is being edited and applies the derivation
//! rules on every change: full name on name edits, gender on salutation
//! edits, salary grouping on every keystroke.

use crate::config::{PROFILE_COLORS, SALUTATIONS};
use crate::domain::normalize::{
    capitalize_color, color_class, format_salary, full_name, gender_for_salutation,
    salary_for_submission,
};
use crate::domain::{validate_employee, Employee, FieldErrors, Gender, Salary};

/// Editable inputs. `fullname` is derived and has no input of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Firstname,
    Surname,
    Salutation,
    Gender,
    EmployeeNumber,
    Salary,
    ProfileColor,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Firstname,
        FormField::Surname,
        FormField::Salutation,
        FormField::Gender,
        FormField::EmployeeNumber,
        FormField::Salary,
        FormField::ProfileColor,
    ];

    /// Input name, identical to the record field name
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Firstname => "firstname",
            FormField::Surname => "surname",
            FormField::Salutation => "salutation",
            FormField::Gender => "gender",
            FormField::EmployeeNumber => "employeenumber",
            FormField::Salary => "salary",
            FormField::ProfileColor => "profile_color",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

/// One entry of a select or radio group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOption {
    pub label: &'static str,
    pub value: String,
    pub selected: bool,
}

/// What a valid submission asks the service to do
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(Employee),
    Update { id: i32, employee: Employee },
}

impl SaveRequest {
    pub fn employee(&self) -> &Employee {
        match self {
            SaveRequest::Create(employee) | SaveRequest::Update { employee, .. } => employee,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    draft: Employee,
    errors: FieldErrors,
}

impl EmployeeForm {
    /// Blank form opened by "Add New".
    pub fn new_draft() -> Self {
        Self {
            draft: Employee {
                salary: Some(Salary::Text(String::new())),
                ..Employee::draft()
            },
            errors: FieldErrors::new(),
        }
    }

    /// Form for an existing row. Stored gender and full name are kept as-is;
    /// only the salary is reformatted for display.
    pub fn edit(record: &Employee) -> Self {
        let salary = record.salary.as_ref().map(Salary::display).unwrap_or_default();

        Self {
            draft: Employee {
                salary: Some(Salary::Text(salary)),
                ..record.clone()
            },
            errors: FieldErrors::new(),
        }
    }

    pub fn draft(&self) -> &Employee {
        &self.draft
    }

    /// Errors from the last submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether an input should render as invalid
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn title(&self) -> &'static str {
        if self.draft.is_persisted() {
            "Employee Information"
        } else {
            "Add New Employee"
        }
    }

    /// Current text in the salary input
    pub fn salary_text(&self) -> &str {
        match &self.draft.salary {
            Some(Salary::Text(text)) => text,
            _ => "",
        }
    }

    pub fn gender_checked(&self, gender: Gender) -> bool {
        self.draft.gender == gender.as_str()
    }

    /// Radio values are the lower-cased option labels.
    ///
    /// Stored colors are capitalized, so a reloaded "Green" leaves every
    /// color radio unchecked.
    pub fn color_checked(&self, option: &str) -> bool {
        self.draft.profile_color == option.to_lowercase()
    }

    /// Salutation dropdown, in display order
    pub fn salutation_options(&self) -> Vec<FormOption> {
        SALUTATIONS
            .iter()
            .map(|&label| FormOption {
                label,
                value: label.to_string(),
                selected: self.draft.salutation == label,
            })
            .collect()
    }

    pub fn gender_options(&self) -> Vec<FormOption> {
        Gender::ALL
            .into_iter()
            .map(|gender| FormOption {
                label: gender.as_str(),
                value: gender.as_str().to_string(),
                selected: self.gender_checked(gender),
            })
            .collect()
    }

    /// Color radios; values are the lower-cased labels
    pub fn color_options(&self) -> Vec<FormOption> {
        PROFILE_COLORS
            .iter()
            .map(|&label| FormOption {
                label,
                value: label.to_lowercase(),
                selected: self.color_checked(label),
            })
            .collect()
    }

    /// CSS class for the save button
    pub fn save_button_class(&self) -> &'static str {
        color_class(Some(&self.draft.profile_color))
    }

    /// Apply one input change and its derivations.
    pub fn change(&mut self, field: FormField, value: &str) {
        let draft = &mut self.draft;

        match field {
            FormField::Firstname => {
                draft.firstname = value.to_string();
                draft.fullname = full_name(value, &draft.surname);
            }
            FormField::Surname => {
                draft.surname = value.to_string();
                draft.fullname = full_name(&draft.firstname, value);
            }
            FormField::Salutation => {
                draft.salutation = value.to_string();
                draft.gender = gender_for_salutation(value).to_string();
            }
            FormField::Gender => draft.gender = value.to_string(),
            FormField::EmployeeNumber => draft.employeenumber = value.to_string(),
            FormField::Salary => draft.salary = Some(Salary::Text(format_salary(value))),
            FormField::ProfileColor => draft.profile_color = value.to_string(),
        }
    }

    /// Validate the draft and build the payload for the service.
    ///
    /// On failure the field errors are kept on the form and returned; nothing
    /// should be sent.
    pub fn submit(&mut self) -> Result<SaveRequest, FieldErrors> {
        self.errors = validate_employee(&self.draft);
        if !self.errors.is_empty() {
            return Err(self.errors.clone());
        }

        let employee = Employee {
            fullname: full_name(&self.draft.firstname, &self.draft.surname),
            profile_color: capitalize_color(&self.draft.profile_color),
            salary: Some(Salary::Amount(salary_for_submission(self.salary_text()))),
            ..self.draft.clone()
        };

        Ok(match employee.id.filter(|_| employee.is_persisted()) {
            Some(id) => SaveRequest::Update { id, employee },
            None => SaveRequest::Create(employee),
        })
    }
}

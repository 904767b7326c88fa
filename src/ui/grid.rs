//! Employee grid: column layout and row preparation.

use crate::domain::{Employee, Salary};

/// One grid column bound to a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
}

pub const COLUMNS: [Column; 5] = [
    Column { header: "Employee #", field: "employeenumber" },
    Column { header: "First Name", field: "firstname" },
    Column { header: "Surname", field: "surname" },
    Column { header: "Salutation", field: "salutation" },
    Column { header: "Profile Color", field: "profile_color" },
];

/// Rows as fetched, with each salary replaced by its grouped display text.
/// A missing salary shows as empty.
pub fn prepare_rows(records: Vec<Employee>) -> Vec<Employee> {
    records
        .into_iter()
        .map(|mut record| {
            let display = record.salary.as_ref().map(Salary::display).unwrap_or_default();
            record.salary = Some(Salary::Text(display));
            record
        })
        .collect()
}

/// Text shown in a cell. Unknown fields render empty.
pub fn cell<'a>(row: &'a Employee, field: &str) -> &'a str {
    match field {
        "employeenumber" => &row.employeenumber,
        "firstname" => &row.firstname,
        "surname" => &row.surname,
        "salutation" => &row.salutation,
        "profile_color" => &row.profile_color,
        "fullname" => &row.fullname,
        "gender" => &row.gender,
        _ => "",
    }
}

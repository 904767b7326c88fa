//! Employee domain entity and related types.
//!
//! `Employee` is the one schema shared by the validator, the normalizer,
//! the store mapping and the HTTP transport.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::normalize;

/// Gender options offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    Male,
    Female,
    Unspecified,
}

impl Gender {
    /// All options, in radio-button order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Unspecified];

    /// Gender implied by a salutation.
    ///
    /// "Mr." maps to Male, "Ms." and "Mrs." to Female, anything else
    /// (including the empty selection) to Unspecified.
    pub fn from_salutation(salutation: &str) -> Self {
        match salutation {
            "Mr." => Gender::Male,
            "Ms." | "Mrs." => Gender::Female,
            _ => Gender::Unspecified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Unspecified => "Unspecified",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Salary as it travels: a JSON number from the store or API clients,
/// or the grouped text typed into the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Salary {
    Amount(f64),
    Text(String),
}

impl Salary {
    /// Numeric value, if the salary is a finite number after whitespace removal.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Salary::Amount(value) => value.is_finite().then_some(*value),
            Salary::Text(text) => normalize::parse_salary(text),
        }
    }

    /// True when nothing was entered.
    ///
    /// Whitespace-only text counts as blank and is reported as missing, not
    /// coerced to `0`.
    pub fn is_blank(&self) -> bool {
        match self {
            Salary::Amount(_) => false,
            Salary::Text(text) => text.trim().is_empty(),
        }
    }

    /// Display form: digits grouped in threes separated by spaces.
    pub fn display(&self) -> String {
        match self {
            Salary::Amount(value) => normalize::format_salary(&value.to_string()),
            Salary::Text(text) => normalize::format_salary(text),
        }
    }
}

impl From<f64> for Salary {
    fn from(value: f64) -> Self {
        Salary::Amount(value)
    }
}

/// Employee record.
///
/// Text fields treat JSON `null` and a missing key the same as `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    /// Store-assigned identifier (absent for drafts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 7)]
    pub id: Option<i32>,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Jane")]
    pub firstname: String,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Doe")]
    pub surname: String,
    /// Derived: `trim(firstname + " " + surname)`
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Jane Doe")]
    pub fullname: String,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Ms.")]
    pub salutation: String,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Female")]
    pub gender: String,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "10042")]
    pub employeenumber: String,
    #[serde(default, deserialize_with = "nullable_text")]
    #[schema(example = "Green")]
    pub profile_color: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 52000)]
    pub salary: Option<Salary>,
}

impl Employee {
    /// Blank draft, as opened by "Add New".
    pub fn draft() -> Self {
        Self::default()
    }

    /// True once the store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some_and(|id| id != 0)
    }

    /// Salary as a number; `0` when missing or unparseable.
    pub fn salary_amount(&self) -> f64 {
        self.salary.as_ref().and_then(Salary::amount).unwrap_or(0.0)
    }
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

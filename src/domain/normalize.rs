//! Derived and display values for employee records.
//!
//! Every function here is pure; the form model and the API both call into
//! this module instead of repeating the rules.

use super::employee::Gender;
use crate::config::{CLASS_BLUE, CLASS_FALLBACK, CLASS_GREEN, CLASS_RED};

/// `trim(firstname + " " + surname)`
pub fn full_name(firstname: &str, surname: &str) -> String {
    format!("{} {}", firstname, surname).trim().to_string()
}

/// Gender implied by a salutation edit.
pub fn gender_for_salutation(salutation: &str) -> Gender {
    Gender::from_salutation(salutation)
}

/// Format a raw salary for display.
///
/// Drops every character that is not an ASCII digit, then separates groups
/// of three digits, counted from the right, with a single space. There is
/// no decimal handling. Applying it to its own output is a no-op.
pub fn format_salary(raw: &str) -> String {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, digit) in digits.into_iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    grouped
}

/// Parse a salary after removing all whitespace.
///
/// Returns `None` for blank input and for anything that is not a finite number,
/// so "Infinity" and "NaN" are rejected rather than stored.
pub fn parse_salary(text: &str) -> Option<f64> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return None;
    }
    compact.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Salary value sent on submission; blank input submits as `0`.
pub fn salary_for_submission(text: &str) -> f64 {
    parse_salary(text).unwrap_or(0.0)
}

/// Capitalize a profile color for storage: "gREEN" -> "Green".
pub fn capitalize_color(color: &str) -> String {
    let mut chars = color.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// CSS class for a profile color, matched case-insensitively.
///
/// Independent of [`capitalize_color`]: the form keeps lower-cased colors
/// while the store receives capitalized ones.
pub fn color_class(color: Option<&str>) -> &'static str {
    let Some(color) = color.filter(|c| !c.is_empty()) else {
        return CLASS_FALLBACK;
    };

    match color.to_lowercase().as_str() {
        "green" => CLASS_GREEN,
        "red" => CLASS_RED,
        "blue" => CLASS_BLUE,
        _ => CLASS_FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_joins_and_trims() {
        assert_eq!(full_name("Jane", "Doe"), "Jane Doe");
        assert_eq!(full_name("Jane", ""), "Jane");
        assert_eq!(full_name("", "Doe"), "Doe");
        assert_eq!(full_name("", ""), "");
        assert_eq!(full_name(" Mary Ann ", " Lee "), "Mary Ann   Lee");
    }

    #[test]
    fn test_format_salary_groups_from_the_right() {
        assert_eq!(format_salary(""), "");
        assert_eq!(format_salary("7"), "7");
        assert_eq!(format_salary("123"), "123");
        assert_eq!(format_salary("1234"), "1 234");
        assert_eq!(format_salary("123456"), "123 456");
        assert_eq!(format_salary("1234567"), "1 234 567");
    }

    #[test]
    fn test_format_salary_strips_non_digits() {
        assert_eq!(format_salary("$12,345.67"), "1 234 567");
        assert_eq!(format_salary("12a3"), "123");
        assert_eq!(format_salary("abc"), "");
    }

    #[test]
    fn test_format_salary_is_idempotent() {
        for raw in ["", "5", "1000", "98765", "1234567890", "12 34 5", "x9y8z7w6"] {
            let once = format_salary(raw);
            assert_eq!(format_salary(&once), once, "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("52 000"), Some(52000.0));
        assert_eq!(parse_salary(" 1 234 567 "), Some(1234567.0));
        assert_eq!(parse_salary("1234.5"), Some(1234.5));
        assert_eq!(parse_salary("12a3"), None);
        assert_eq!(parse_salary("   "), None);
        assert_eq!(parse_salary("NaN"), None);
        assert_eq!(parse_salary("inf"), None);
        assert_eq!(parse_salary("Infinity"), None);
    }

    #[test]
    fn test_salary_for_submission_defaults_to_zero() {
        assert_eq!(salary_for_submission(""), 0.0);
        assert_eq!(salary_for_submission("45 000"), 45000.0);
    }

    #[test]
    fn test_capitalize_color() {
        assert_eq!(capitalize_color("green"), "Green");
        assert_eq!(capitalize_color("BLUE"), "Blue");
        assert_eq!(capitalize_color("dEfAuLt"), "Default");
        assert_eq!(capitalize_color(""), "");
    }

    #[test]
    fn test_color_class() {
        assert_eq!(color_class(Some("green")), "btn-success");
        assert_eq!(color_class(Some("Green")), "btn-success");
        assert_eq!(color_class(Some("RED")), "btn-danger");
        assert_eq!(color_class(Some("blue")), "btn-primary");
        assert_eq!(color_class(Some("default")), "btn-secondary");
        assert_eq!(color_class(Some("purple")), "btn-secondary");
        assert_eq!(color_class(Some("")), "btn-secondary");
        assert_eq!(color_class(None), "btn-secondary");
    }

    #[test]
    fn test_gender_for_salutation() {
        assert_eq!(gender_for_salutation("Mrs."), Gender::Female);
        assert_eq!(gender_for_salutation("Dr."), Gender::Unspecified);
    }
}

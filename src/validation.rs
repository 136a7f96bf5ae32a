//! Input validation at the interaction boundary
//!
//! Turns raw user text into the values the services accept. The services
//! trust these values and never validate them again.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Amount;

/// Capitalize the first character and lowercase the rest ("dining OUT" -> "Dining out")
pub fn capitalize(input: &str) -> String {
    let mut chars = input.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validate a category name: non-empty, no digits, capitalized
pub fn parse_category(input: &str) -> TrackerResult<String> {
    let category = capitalize(input);
    if category.is_empty() {
        return Err(TrackerError::Validation("Input cannot be empty".into()));
    }
    if category.chars().any(char::is_numeric) {
        return Err(TrackerError::Validation(
            "A category cannot contain numbers".into(),
        ));
    }
    Ok(category)
}

/// Validate a financial goal name: non-empty, capitalized
pub fn parse_goal_name(input: &str) -> TrackerResult<String> {
    let goal = capitalize(input);
    if goal.is_empty() {
        return Err(TrackerError::Validation(
            "Financial goal cannot be empty".into(),
        ));
    }
    Ok(goal)
}

/// Validate an amount: non-empty, finite decimal
pub fn parse_amount(input: &str) -> TrackerResult<Amount> {
    Amount::parse(input).map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Validate a calendar date written exactly as `YYYY-MM-DD`
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(TrackerError::Validation("Date cannot be empty".into()));
    }

    let bytes = input.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return Err(invalid_date(input));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid_date(input))
}

fn invalid_date(input: &str) -> TrackerError {
    TrackerError::Validation(format!(
        "Invalid date '{}'. Please use YYYY-MM-DD",
        input
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("groceries"), "Groceries");
        assert_eq!(capitalize("  dining OUT "), "Dining out");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("groceries").unwrap(), "Groceries");
        assert!(parse_category("   ").unwrap_err().is_validation());
        assert!(parse_category("Rent2024").unwrap_err().is_validation());
        assert!(parse_category("Rent٣").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_goal_name_allows_digits() {
        assert_eq!(parse_goal_name("save 1000 for bike").unwrap(), "Save 1000 for bike");
        assert!(parse_goal_name("").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap().value(), 12.5);
        assert!(parse_amount("").unwrap_err().is_validation());
        assert!(parse_amount("12,5").unwrap_err().is_validation());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-12-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 1).unwrap()
        );
        assert!(parse_date("2024-1-5").is_err());
        assert!(parse_date("2024/12/01").is_err());
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
    }
}

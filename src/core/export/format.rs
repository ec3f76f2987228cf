// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Cell value formatting
//!
//! Only date and date-time values honor a column's format pattern; every
//! other type renders its natural string form. Numeric and boolean values
//! are never pattern-formatted in this domain.

use crate::core::export::value::FieldValue;
use std::fmt::Write as _;

/// Renders a resolved value into its output cell text
///
/// `format_spec` is a chrono strftime pattern, e.g. `%d/%m/%y`. A pattern
/// that chrono cannot render falls back to the natural form rather than
/// aborting the export.
pub fn format_value(value: &FieldValue, format_spec: Option<&str>) -> String {
    match (value, format_spec) {
        (FieldValue::Date(date), Some(spec)) => {
            let mut out = String::new();
            match write!(out, "{}", date.format(spec)) {
                Ok(()) => out,
                Err(_) => value.natural(),
            }
        }
        (FieldValue::DateTime(dt), Some(spec)) => {
            let mut out = String::new();
            match write!(out, "{}", dt.format(spec)) {
                Ok(()) => out,
                Err(_) => value.natural(),
            }
        }
        _ => value.natural(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use test_case::test_case;

    #[test]
    fn test_date_with_pattern() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(format_value(&value, Some("%d/%m/%y")), "14/03/25");
    }

    #[test]
    fn test_datetime_with_pattern() {
        let value = FieldValue::DateTime(Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 0).unwrap());
        assert_eq!(format_value(&value, Some("%Y%m%d %H:%M")), "20250314 09:05");
    }

    #[test]
    fn test_date_without_pattern_uses_natural_form() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        assert_eq!(format_value(&value, None), "2025-03-14");
    }

    #[test_case(FieldValue::Integer(42), "42"; "integer ignores pattern")]
    #[test_case(FieldValue::Boolean(false), "false"; "boolean ignores pattern")]
    #[test_case(FieldValue::Text("A,B".to_string()), "A,B"; "text ignores pattern")]
    #[test_case(FieldValue::Null, ""; "null renders empty")]
    fn test_non_dates_never_pattern_formatted(value: FieldValue, expected: &str) {
        assert_eq!(format_value(&value, Some("%d/%m/%y")), expected);
    }

    #[test]
    fn test_invalid_pattern_falls_back_to_natural() {
        let value = FieldValue::Date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        // %q is not a chrono specifier
        assert_eq!(format_value(&value, Some("%q")), "2025-03-14");
    }
}

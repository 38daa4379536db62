use thiserror::Error;

use crate::models::Dimensions;

pub const MIN_DIMENSION: i64 = 1;
pub const MAX_DIMENSION: i64 = 6;

/// Reasons a grid request is rejected. The `Display` text is shown to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("`{field}` is required.")]
    MissingField { field: &'static str },
    #[error("`{field}` must be a positive integer between {min} and {max}.")]
    OutOfRangeOrNonInteger {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("Either `rows` or `columns` needs to be an even number.")]
    NeitherEven,
    #[error("Requested `rows` and `columns` would generate an odd number of cards.")]
    OddCardTotal,
}

/// Constraints applied to a single query parameter.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub min: i64,
    pub max: i64,
}

pub const ROWS_RULE: FieldRule = FieldRule {
    field: "rows",
    required: true,
    min: MIN_DIMENSION,
    max: MAX_DIMENSION,
};

pub const COLUMNS_RULE: FieldRule = FieldRule {
    field: "columns",
    required: true,
    min: MIN_DIMENSION,
    max: MAX_DIMENSION,
};

/// Checks run once both fields have parsed, evaluated in order.
const CROSS_FIELD_RULES: [(fn(i64, i64) -> bool, ValidationError); 2] = [
    (
        |rows: i64, columns: i64| rows % 2 == 0 || columns % 2 == 0,
        ValidationError::NeitherEven,
    ),
    (
        |rows: i64, columns: i64| (rows * columns) % 2 == 0,
        ValidationError::OddCardTotal,
    ),
];

/// Validates raw `rows`/`columns` query values, stopping at the first failure.
pub fn validate(rows: Option<&str>, columns: Option<&str>) -> Result<Dimensions, ValidationError> {
    // Presence of both fields is checked before either is parsed.
    for (rule, raw) in [(ROWS_RULE, rows), (COLUMNS_RULE, columns)] {
        if rule.required && raw.is_none() {
            return Err(ValidationError::MissingField { field: rule.field });
        }
    }

    let rows = parse_field(&ROWS_RULE, rows)?;
    let columns = parse_field(&COLUMNS_RULE, columns)?;

    for (holds, error) in CROSS_FIELD_RULES {
        if !holds(rows, columns) {
            return Err(error);
        }
    }

    // Both values are within [MIN_DIMENSION, MAX_DIMENSION] here, so they fit in usize.
    Ok(Dimensions {
        rows: rows as usize,
        columns: columns as usize,
    })
}

fn parse_field(rule: &FieldRule, raw: Option<&str>) -> Result<i64, ValidationError> {
    let out_of_range = ValidationError::OutOfRangeOrNonInteger {
        field: rule.field,
        min: rule.min,
        max: rule.max,
    };
    let raw = match raw {
        Some(raw) => raw,
        None => return Err(out_of_range),
    };
    // Plain digits only: no sign, no whitespace and no leading zero.
    if !raw.bytes().all(|b| b.is_ascii_digit()) || (raw.len() > 1 && raw.starts_with('0')) {
        return Err(out_of_range);
    }
    match raw.parse::<i64>() {
        Ok(value) if (rule.min..=rule.max).contains(&value) => Ok(value),
        _ => Err(out_of_range),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(rows: Option<&str>, columns: Option<&str>) -> Result<Dimensions, ValidationError> {
        validate(rows, columns)
    }

    #[test]
    fn test_valid_two_by_two() {
        assert_eq!(
            check(Some("2"), Some("2")),
            Ok(Dimensions { rows: 2, columns: 2 })
        );
    }

    #[test]
    fn test_valid_cases_from_the_field() {
        for (rows, columns) in [("4", "6"), ("6", "4"), ("1", "2"), ("5", "4"), ("6", "6")] {
            assert!(
                check(Some(rows), Some(columns)).is_ok(),
                "{rows} x {columns} must be accepted"
            );
        }
    }

    #[test]
    fn test_missing_rows_reported_first() {
        let err = check(None, None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "rows" });
        assert_eq!(err.to_string(), "`rows` is required.");
    }

    #[test]
    fn test_missing_columns() {
        let err = check(Some("4"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "columns" });
    }

    #[test]
    fn test_missing_is_checked_before_range() {
        // A malformed rows value must not hide the missing columns value.
        let err = check(Some("squirrel"), None).unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: "columns" });
    }

    #[test]
    fn test_out_of_range_columns() {
        let err = check(Some("5"), Some("10")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`columns` must be a positive integer between 1 and 6."
        );
    }

    #[test]
    fn test_non_positive_values_rejected() {
        for (rows, columns, field) in [
            ("0", "6", "rows"),
            ("4", "0", "columns"),
            ("-5", "3", "rows"),
            ("4", "-7", "columns"),
        ] {
            let err = check(Some(rows), Some(columns)).unwrap_err();
            assert_eq!(
                err,
                ValidationError::OutOfRangeOrNonInteger {
                    field,
                    min: MIN_DIMENSION,
                    max: MAX_DIMENSION
                },
                "{rows} x {columns}"
            );
        }
    }

    #[test]
    fn test_non_integer_values_rejected() {
        for raw in ["2.5", "squirrel", "", " 2", "2 ", "+2", "0x2", "18", "06", "002"] {
            assert!(
                matches!(
                    check(Some(raw), Some("4")),
                    Err(ValidationError::OutOfRangeOrNonInteger { field: "rows", .. })
                ),
                "{raw:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_leading_zero_rejected() {
        let err = check(Some("06"), Some("2")).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRangeOrNonInteger {
                field: "rows",
                min: MIN_DIMENSION,
                max: MAX_DIMENSION
            }
        );
    }

    #[test]
    fn test_both_odd_rejected() {
        let err = check(Some("3"), Some("5")).unwrap_err();
        assert_eq!(err, ValidationError::NeitherEven);
        assert!(err.to_string().contains("needs to be an even number"));
    }

    #[test]
    fn test_cross_field_rules_agree_on_valid_range() {
        // The odd-total check is a safety net behind the even check and never fires alone.
        for rows in MIN_DIMENSION..=MAX_DIMENSION {
            for columns in MIN_DIMENSION..=MAX_DIMENSION {
                let either_even = CROSS_FIELD_RULES[0].0;
                let even_total = CROSS_FIELD_RULES[1].0;
                assert_eq!(either_even(rows, columns), even_total(rows, columns));
            }
        }
    }
}

//! Polars AnyValue utility functions.
//!
//! Source tables are read into Polars DataFrames of text columns; these
//! helpers turn the individual cells back into plain strings before
//! normalization.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`. Both readers build text columns, so
/// any other value is only rendered through its `Display` form.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use pvp_model::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::String("IBUPROFENO")), "IBUPROFENO");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to `String`, returning `None` if the result is blank.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_text_cells() {
        assert_eq!(any_to_string(AnyValue::String("12,50")), "12,50");
        assert_eq!(
            any_to_string(AnyValue::StringOwned("400 mg".into())),
            "400 mg"
        );
    }

    #[test]
    fn test_any_to_string_non_empty() {
        assert_eq!(any_to_string_non_empty(AnyValue::Null), None);
        assert_eq!(any_to_string_non_empty(AnyValue::String("   ")), None);
        assert_eq!(
            any_to_string_non_empty(AnyValue::String("BAYER")),
            Some("BAYER".to_string())
        );
    }
}

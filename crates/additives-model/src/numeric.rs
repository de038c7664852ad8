//! Numeric formatting for CSV output.

use serde::Serializer;

/// Formats a numeric value for output, dropping a redundant fractional part.
///
/// `25.0` renders as `25`, `0.5` as `0.5`.
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    // Only trim trailing zeros if there's a decimal point
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Serde adapter writing an `f64` through [`format_numeric`].
pub(crate) fn serialize_numeric<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_numeric(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric_integral() {
        assert_eq!(format_numeric(25.0), "25");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(-0.0), "0");
    }

    #[test]
    fn test_format_numeric_fractional() {
        assert_eq!(format_numeric(0.5), "0.5");
        assert_eq!(format_numeric(12.25), "12.25");
    }
}

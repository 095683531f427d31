//! Parsing of text inputs bound to form fields.

/// Blank input becomes `None`, anything else is trimmed.
pub fn opt_text(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses a money amount; accepts `,` as the decimal separator.
pub fn parse_amount(value: &str, field: &str) -> Result<f64, String> {
    let normalized = value.trim().replace(' ', "").replace(',', ".");
    if normalized.is_empty() {
        return Err(format!("{} is required", field));
    }
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("{} must be a number", field)),
    }
}

pub fn parse_optional_amount(value: &str, field: &str) -> Result<Option<f64>, String> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_amount(value, field).map(Some)
    }
}

/// Parses a non-negative whole quantity.
pub fn parse_count(value: &str, field: &str) -> Result<u32, String> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("{} must be a whole number", field))
}

/// Parses a signed stock delta such as `-3` or `+10`.
pub fn parse_delta(value: &str, field: &str) -> Result<i32, String> {
    let value = value.trim();
    let value = value.strip_prefix('+').unwrap_or(value);
    match value.parse::<i32>() {
        Ok(0) => Err(format!("{} cannot be zero", field)),
        Ok(v) => Ok(v),
        Err(_) => Err(format!("{} must be a whole number", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_text() {
        assert_eq!(opt_text("  "), None);
        assert_eq!(opt_text(" red "), Some("red".to_string()));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12,50", "Price"), Ok(12.5));
        assert_eq!(parse_amount("1 200.5", "Price"), Ok(1200.5));
        assert_eq!(parse_amount("", "Price"), Err("Price is required".to_string()));
        assert_eq!(parse_amount("abc", "Price"), Err("Price must be a number".to_string()));
        assert!(parse_amount("inf", "Price").is_err());
    }

    #[test]
    fn test_parse_optional_amount() {
        assert_eq!(parse_optional_amount("", "Compare-at"), Ok(None));
        assert_eq!(parse_optional_amount("9.99", "Compare-at"), Ok(Some(9.99)));
    }

    #[test]
    fn test_parse_count_and_delta() {
        assert_eq!(parse_count(" 7 ", "Stock"), Ok(7));
        assert!(parse_count("-1", "Stock").is_err());
        assert_eq!(parse_delta("+10", "Change"), Ok(10));
        assert_eq!(parse_delta("-3", "Change"), Ok(-3));
        assert!(parse_delta("0", "Change").is_err());
        assert!(parse_delta("x", "Change").is_err());
    }
}

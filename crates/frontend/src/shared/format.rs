//! Number and date formatting for tables and cards

use chrono::{DateTime, Utc};

/// Formats a number with a thousands separator and the given number of decimals
///
/// ```
/// # use frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // "-0.00" is not a useful thing to show
    let sign = if grouped.chars().all(|c| c == '0' || c == ',')
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Money value with 2 decimals and thousands separator
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Money value prefixed with the currency code, e.g. "USD 1,200.00"
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_money(value))
}

pub fn format_int(value: u32) -> String {
    format_number_with_decimals(f64::from(value), 0)
}

/// "2024-03-15T14:02:26Z" -> "15.03.2024 14:02"
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

pub fn format_datetime_opt(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1,234.56");
        assert_eq!(format_money(1234567.89), "1,234,567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1,234.56");
        assert_eq!(format_money(-0.001), "0.00");
        assert_eq!(format_money(999.999), "1,000.00");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1,235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1,234.6");
        assert_eq!(format_number_with_decimals(123.0, 0), "123");
        assert_eq!(format_number_with_decimals(-123456.0, 0), "-123,456");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2500.0, "USD"), "USD 2,500.00");
        assert_eq!(format_int(1_000_000), "1,000,000");
    }

    #[test]
    fn test_format_dates() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        assert_eq!(format_datetime(&ts), "15.03.2024 14:02");
        assert_eq!(format_date(&ts), "15.03.2024");
        assert_eq!(format_datetime_opt(None), "-");
    }
}

/// Display formatting for dates and amounts in tables
use chrono::{DateTime, Datelike, NaiveDate};

/// ISO date or datetime to `DD-MM-YYYY`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15-03-2024". Unparseable input is returned unchanged,
/// missing input becomes "-".
pub fn format_date(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    let day = value.split('T').next().unwrap_or(value);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => date.format("%d-%m-%Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// ISO datetime to `DD-MM-YYYY HH:MM`.
pub fn format_datetime(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return "-".to_string();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => format_date(Some(raw)),
    }
}

/// Today as `YYYY-MM-DD`, the value format of `<input type="date">`.
pub fn today_iso() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// First and last day of a month as `YYYY-MM-DD`.
pub fn month_bounds(year: i32, month: u32) -> Option<(String, String)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some((
        start.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}

/// Bounds of the month `offset` months away from today (0 = current, -1 = previous).
pub fn relative_month_bounds(offset: i32) -> Option<(String, String)> {
    let today = chrono::Local::now().date_naive();
    let index = today.year() * 12 + today.month0() as i32 + offset;
    month_bounds(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// Rupee amount with Indian digit grouping: 4500000 -> "₹45,00,000".
pub fn format_price(amount: Option<f64>) -> String {
    let Some(amount) = amount.filter(|a| a.is_finite()) else {
        return "-".to_string();
    };
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut parts: Vec<String> = Vec::new();
        let mut rest = head;
        while rest.len() > 2 {
            let (left, right) = rest.split_at(rest.len() - 2);
            parts.push(right.to_string());
            rest = left;
        }
        parts.push(rest.to_string());
        parts.reverse();
        format!("{},{}", parts.join(","), tail)
    };
    let sign = if rounded < 0 { "-" } else { "" };
    format!("{}₹{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-15")), "15-03-2024");
        assert_eq!(format_date(Some("2024-03-15T14:02:26.123Z")), "15-03-2024");
        assert_eq!(format_date(None), "-");
        assert_eq!(format_date(Some("  ")), "-");
        assert_eq!(format_date(Some("invalid")), "invalid");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime(Some("2024-12-31T23:59:59Z")), "31-12-2024 23:59");
        assert_eq!(format_datetime(Some("2024-12-31")), "31-12-2024");
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(2024, 2),
            Some(("2024-02-01".to_string(), "2024-02-29".to_string()))
        );
        assert_eq!(
            month_bounds(2023, 12),
            Some(("2023-12-01".to_string(), "2023-12-31".to_string()))
        );
        assert_eq!(month_bounds(2024, 13), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(999.0)), "₹999");
        assert_eq!(format_price(Some(4_500_000.0)), "₹45,00,000");
        assert_eq!(format_price(Some(12_345_678.4)), "₹1,23,45,678");
        assert_eq!(format_price(Some(-1500.0)), "-₹1,500");
        assert_eq!(format_price(None), "-");
    }
}

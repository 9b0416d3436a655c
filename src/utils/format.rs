//! Formatting utilities for prices, dates, and other display values.

/// Format a price in won with thousands separators (e.g., "12,000원").
pub fn format_price(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push('원');
    out
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Shorten text to `max` characters, appending "..." when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0원");
        assert_eq!(format_price(999), "999원");
        assert_eq!(format_price(1000), "1,000원");
        assert_eq!(format_price(12_000), "12,000원");
        assert_eq!(format_price(1_234_567), "1,234,567원");
    }

    #[test]
    fn test_format_date_iso() {
        // Unix epoch
        assert_eq!(format_date_iso(0), "1970-01-01");
        // 2024-01-01 00:00:00 UTC = 1704067200
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
        // 2024-02-29 (leap day) = 1709164800
        assert_eq!(format_date_iso(1709164800), "2024-02-29");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        assert_eq!(truncate("this is a long title", 10), "this is...");
        assert_eq!(truncate("한글로 된 아주 긴 상품 이름", 8), "한글로 된...");
    }
}

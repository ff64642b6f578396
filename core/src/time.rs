use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate};

/// Parse the date words an entry form accepts. Entries are date-only, so
/// everything resolves to a `NaiveDate` in local time.
pub fn parse_entry_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date"));
    }

    let today = Local::now().date_naive();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        if rest.len() >= 2 && rest.is_char_boundary(rest.len() - 1) {
            let (num_str, unit) = rest.split_at(rest.len() - 1);
            let count: i64 = num_str
                .parse()
                .map_err(|_| anyhow!("Invalid relative date: {}", input))?;
            return match unit {
                "d" => Ok(today + Duration::days(count)),
                "w" => Ok(today + Duration::weeks(count)),
                _ => Err(anyhow!("Unknown unit in relative date: {}", unit)),
            };
        }
        return Err(anyhow!("Invalid relative date: {}", input));
    }

    // 3. Fixed formats
    for fmt in ["%Y-%m-%d", "%d/%m/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }

    Err(anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keyword and relative forms depend on "now"; here we pin down the fixed
    // formats and the error paths, and only smoke-test the rest.

    #[test]
    fn test_fixed_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        assert_eq!(parse_entry_date("2026-03-09").unwrap(), expected);
        assert_eq!(parse_entry_date("09/03/2026").unwrap(), expected);
    }

    #[test]
    fn test_keywords_resolve() {
        let today = Local::now().date_naive();
        assert_eq!(parse_entry_date("today").unwrap(), today);
        assert_eq!(parse_entry_date("tod").unwrap(), today);
        assert_eq!(parse_entry_date("Tomorrow").unwrap(), today + Duration::days(1));
        assert_eq!(parse_entry_date("yesterday").unwrap(), today - Duration::days(1));
    }

    #[test]
    fn test_relative_forms() {
        let today = Local::now().date_naive();
        assert_eq!(parse_entry_date("+3d").unwrap(), today + Duration::days(3));
        assert_eq!(parse_entry_date("+2w").unwrap(), today + Duration::weeks(2));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_entry_date("").is_err());
        assert!(parse_entry_date("soon").is_err());
        assert!(parse_entry_date("+d").is_err());
        assert!(parse_entry_date("+3x").is_err());
        assert!(parse_entry_date("2026-13-40").is_err());
    }
}

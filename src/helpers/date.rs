//! Date helper functions

use chrono::NaiveDate;

/// Parse a date string in the formats the content files use:
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY-MM`, or a bare `YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Year-month: normalize to the first of the month
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d") {
        return Some(d);
    }

    // Bare year: normalize to January 1st
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(d) = NaiveDate::parse_from_str(&format!("{}-01-01", s), "%Y-%m-%d") {
            return Some(d);
        }
    }

    None
}

/// Ordering key for date strings; unparseable dates sort last
pub fn sort_key(s: &str) -> NaiveDate {
    parse_date(s).unwrap_or(NaiveDate::MIN)
}

/// Format a date string for display, falling back to the raw string when it
/// does not parse
pub fn format_date(s: &str, format: &str) -> String {
    match parse_date(s) {
        Some(d) => d.format(format).to_string(),
        None => s.to_string(),
    }
}

/// The leading year of a date string ("2022-09" -> "2022")
pub fn year_of(s: &str) -> &str {
    let s = s.trim();
    match s.char_indices().nth(4) {
        Some((idx, _)) if s.as_bytes()[..idx].iter().all(|b| b.is_ascii_digit()) => &s[..idx],
        None if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) => s,
        _ => s,
    }
}

/// Render a timeline period as a year span.
///
/// `("2020", Some("2022"), false)` -> `"2020 - 2022"`,
/// `("2022", _, true)` -> `"2022 - Present"`,
/// a missing or equal end year collapses to the start year.
pub fn year_span(start: &str, end: Option<&str>, present: bool) -> String {
    let start_year = year_of(start);
    if present {
        return format!("{} - Present", start_year);
    }
    match end.map(year_of) {
        Some(end_year) if end_year != start_year => format!("{} - {}", start_year, end_year),
        _ => start_year.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(parse_date("2024/01/15"), NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(parse_date("2024-03"), NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(parse_date("2024"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_date("soon"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15", "%B %-d, %Y"), "January 15, 2024");
        assert_eq!(format_date("not a date", "%Y"), "not a date");
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2022-09-01"), "2022");
        assert_eq!(year_of("2022"), "2022");
    }

    #[test]
    fn test_year_span() {
        assert_eq!(year_span("2020", Some("2022"), false), "2020 - 2022");
        assert_eq!(year_span("2022-01", None, true), "2022 - Present");
        assert_eq!(year_span("2021", None, false), "2021");
        assert_eq!(year_span("2021-02", Some("2021-08"), false), "2021");
    }
}

use anyhow::{anyhow, Result};
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};

/// The current calendar day in the viewer's local time zone.
///
/// Callers pass this into the classification and view functions; nothing in
/// this crate caches it, so a board left open across midnight reclassifies
/// as soon as the view is rebuilt.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a user-entered due date at day granularity.
///
/// Accepts reserved keywords (`today`, `tomorrow`), weekday names (the next
/// occurrence, e.g. `fri` on a Friday means a week from now), and plain
/// `%Y-%m-%d`.
pub fn parse_human_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty date string"));
    }

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return Ok(today + Duration::days(1)),
        _ => {}
    }

    // 2. Weekday names: next occurrence, always strictly in the future
    if let Ok(target) = parse_weekday(input) {
        let mut days_needed = target.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64;
        if days_needed <= 0 {
            days_needed += 7;
        }
        return Ok(today + Duration::days(days_needed));
    }

    // 3. Fallback to the standard format
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    Err(anyhow!("Could not parse date: {}", input))
}

/// Parses a weekday token: the two-letter wire keys or common names.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mo" | "mon" | "monday" => Ok(Weekday::Mon),
        "tu" | "tue" | "tuesday" => Ok(Weekday::Tue),
        "we" | "wed" | "wednesday" => Ok(Weekday::Wed),
        "th" | "thu" | "thursday" => Ok(Weekday::Thu),
        "fr" | "fri" | "friday" => Ok(Weekday::Fri),
        "sa" | "sat" | "saturday" => Ok(Weekday::Sat),
        "su" | "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday: '{}'", s)),
    }
}

/// Card label, e.g. "5 August".
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%-d %B").to_string()
}

/// Detail label, e.g. "5 Aug 2024".
pub fn format_date_info(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-05-06 is a Monday; keeps every test independent of the real clock.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[test]
    fn test_keywords() {
        let today = monday();
        assert_eq!(parse_human_date("today", today).unwrap(), today);
        assert_eq!(
            parse_human_date("tomorrow", today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()
        );
    }

    #[test]
    fn test_weekday_is_next_occurrence() {
        let today = monday();
        // Friday of the same week
        assert_eq!(
            parse_human_date("fri", today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
        );
        // "mon" on a Monday means next Monday, not today
        assert_eq!(
            parse_human_date("mon", today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
        );
    }

    #[test]
    fn test_iso_fallback_and_garbage() {
        let today = monday();
        assert_eq!(
            parse_human_date("2024-12-31", today).unwrap(),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
        );
        assert!(parse_human_date("not-a-date", today).is_err());
        assert!(parse_human_date("", today).is_err());
    }

    #[test]
    fn test_parse_weekday_tokens() {
        assert_eq!(parse_weekday("mo").unwrap(), Weekday::Mon);
        assert_eq!(parse_weekday("WED").unwrap(), Weekday::Wed);
        assert_eq!(parse_weekday("sunday").unwrap(), Weekday::Sun);
        assert!(parse_weekday("noday").is_err());
    }

    #[test]
    fn test_formatting_never_pads_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        assert_eq!(format_due_date(date), "6 May");
        assert_eq!(format_date_info(date), "6 May 2024");
    }
}

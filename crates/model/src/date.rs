use chrono::{NaiveDate, NaiveDateTime};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_TIME_T_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `date_created` column value. Rows carry either a full
/// date-time (space or `T` separated) or a bare date, which reads as
/// midnight.
pub fn parse_created(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT) {
        return Some(date_time);
    }
    if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, DATE_TIME_T_FORMAT) {
        return Some(date_time);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Sort key for "most recent" orderings. Unparseable values sort last.
pub fn sort_key(raw: &str) -> NaiveDateTime {
    parse_created(raw).unwrap_or(NaiveDateTime::MIN)
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::{NaiveDate, Timelike as _};

    #[test]
    fn test_parse_date_time() {
        let parsed = parse_created("2020-10-21 14:39:26").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2020, 10, 21).unwrap());
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (14, 39, 26));

        let with_t = parse_created("2020-10-21T14:39:26").unwrap();
        assert_eq!(parsed, with_t);
    }

    #[test]
    fn test_parse_date_only() {
        let parsed = parse_created("2020-10-21").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2020, 10, 21).unwrap());
        assert_eq!((parsed.hour(), parsed.minute(), parsed.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_created("").is_none());
        assert!(parse_created("next tuesday").is_none());
        assert!(parse_created("2020-21-10").is_none());
    }

    #[test]
    fn test_sort_key_order() {
        assert!(sort_key("2020-10-21 14:39:52") > sort_key("2020-10-21 14:39:26"));
        assert!(sort_key("2020-10-21 14:39:26") > sort_key("2020-10-21"));
        assert!(sort_key("not a date") < sort_key("1970-01-01"));
    }

    #[test]
    fn test_prev_month() {
        assert_eq!(prev_month(2023, 6), (2023, 5));
        assert_eq!(prev_month(2024, 1), (2023, 12));
    }
}

use chrono::{Days, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn yesterday_of(d: NaiveDate) -> NaiveDate {
    d.checked_sub_days(Days::new(1)).unwrap_or(d)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_dates_only() {
        assert!(parse_date("2022-06-09").is_some());
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2022-13-40").is_none());
    }

    #[test]
    fn yesterday_crosses_month() {
        let d = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
        assert_eq!(format_date(yesterday_of(d)), "2022-02-28");
    }
}

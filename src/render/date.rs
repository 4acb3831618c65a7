//! Year extraction for dated entries

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Year of a CMS date value
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (what the CMS datetime widget
/// writes), naive timestamps and bare years. Anything else is returned as
/// written so free-form values such as `Spring 2021` still show up.
pub fn year(value: &str) -> String {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date.year().to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return datetime.year().to_string();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return datetime.year().to_string();
        }
    }

    value.to_string()
}

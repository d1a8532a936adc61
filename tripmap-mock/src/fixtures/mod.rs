pub mod points;
pub mod routes;

use chrono::NaiveDate;

pub(crate) fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

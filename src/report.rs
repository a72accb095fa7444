use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::lookup::PassWindow;

const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S GMT%z";

/// Console line for a single pass, with the rise time rendered in `tz`.
pub fn pass_line<Tz>(pass: &PassWindow, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let when = match DateTime::from_timestamp(pass.risetime, 0) {
        Some(utc) => utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => pass.risetime.to_string(),
    };
    format!("Next pass at {} for {} seconds!", when, pass.duration)
}

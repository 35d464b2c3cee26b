use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::error::{Error, Result};

pub const MISSING_DATE_TIME: &str = "Please choose a date and time.";
pub const INVALID_DATE_TIME: &str = "Please choose a valid date & time.";
pub const PAST_DATE_TIME: &str = "Please choose a future date & time.";

/// Format of the `date` input value
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Format of the `time` select value
pub const TIME_INPUT_FORMAT: &str = "%H:%M";

/// A requested session time, in the studio's local time, that lies in the future
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferredDateTime(NaiveDateTime);

impl PreferredDateTime {
    /// Compose the date and time inputs and check them against `now`
    pub fn parse(date: &str, time: &str, now: NaiveDateTime) -> Result<Self> {
        let (date, time) = (date.trim(), time.trim());
        if date.is_empty() || time.is_empty() {
            return Err(Error::Validation(MISSING_DATE_TIME));
        }

        let date = NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT)
            .map_err(|_| Error::Validation(INVALID_DATE_TIME))?;
        let time = NaiveTime::parse_from_str(time, TIME_INPUT_FORMAT)
            .map_err(|_| Error::Validation(INVALID_DATE_TIME))?;
        let value = date.and_time(time);

        if value <= now {
            return Err(Error::Validation(PAST_DATE_TIME));
        }
        Ok(Self(value))
    }

    pub fn to_us(&self) -> UsDateTime {
        format_us_date_time(&self.0)
    }
}

/// A date-time rendered the way the studio reads it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsDateTime {
    /// `MM-DD-YYYY`
    pub date_us: String,
    /// `H:MM AM` / `H:MM PM`
    pub time_12: String,
}

/// Render a local date-time as a US date and a 12-hour clock time
pub fn format_us_date_time(value: &NaiveDateTime) -> UsDateTime {
    let date_us = format!("{:02}-{:02}-{:04}", value.month(), value.day(), value.year());
    let time_12 = format_12_hour(value.hour(), value.minute());

    UsDateTime { date_us, time_12 }
}

fn format_12_hour(hour: u32, minute: u32) -> String {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let hour = (hour + 11) % 12 + 1;

    format!("{}:{:02} {}", hour, minute, meridiem)
}

/// One choice of the preferred-time select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// 24-hour `HH:MM`, as posted back
    pub value: String,
    /// 12-hour label shown to the visitor
    pub label: String,
}

/// Half-hour slots over the whole day
pub fn time_slots() -> Vec<TimeSlot> {
    (0..24)
        .flat_map(|hour| [0, 30].into_iter().map(move |minute| (hour, minute)))
        .map(|(hour, minute)| TimeSlot {
            value: format!("{:02}:{:02}", hour, minute),
            label: format_12_hour(hour, minute),
        })
        .collect()
}

/// Today's date in the `date` input format, used as the input's minimum
pub fn date_input_min(now: &NaiveDateTime) -> String {
    now.format(DATE_INPUT_FORMAT).to_string()
}

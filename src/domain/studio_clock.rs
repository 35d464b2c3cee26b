use chrono::{DateTime, NaiveDateTime, Utc};

use chrono_tz::Tz;

/// Wall clock of the studio
///
/// Booking dates and times are entered in the studio's local time, whatever
/// zone the server itself runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudioClock {
    timezone: Tz,
}

impl StudioClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Current local time at the studio
    pub fn now(&self) -> NaiveDateTime {
        self.local(Utc::now())
    }

    /// Studio local time at the given instant
    pub fn local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.timezone).naive_local()
    }
}

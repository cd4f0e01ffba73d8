use core::fmt;

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Name for a KNX day-of-week value, `1` = Monday through `7` = Sunday.
///
/// `0` ("any day") and anything above `7` have no name.
pub fn weekday_name(day_of_week: u8) -> Option<&'static str> {
    match day_of_week {
        1..=7 => Some(WEEKDAYS[usize::from(day_of_week) - 1]),
        _ => None,
    }
}

/// DPT 19.001 date and time record.
///
/// Fields hold plain calendar values (`year` is the full year, not the
/// wire offset). Use [`DateTime::is_valid`] before trusting a record built
/// by hand; [`DateTime::from_bytes`] only ever returns valid records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    /// 1900 ..= 2155.
    pub year: u16,
    /// 1 ..= 12.
    pub month: u8,
    /// 1 ..= 31, bounded by the month length.
    pub day_of_month: u8,
    /// 0 = any day, 1 = Monday ..= 7 = Sunday.
    pub day_of_week: u8,
    /// 0 ..= 24; 24 only as 24:00:00.
    pub hour_of_day: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub fault: bool,
    /// Working day (`false` = bank day).
    pub working_day: bool,
    /// `working_day` is not valid.
    pub no_working_day: bool,
    /// `year` is not valid.
    pub no_year: bool,
    /// `month` and `day_of_month` are not valid.
    pub no_date: bool,
    /// `day_of_week` is not valid.
    pub no_day_of_week: bool,
    /// `hour_of_day`, `minutes` and `seconds` are not valid.
    pub no_time: bool,
    /// Summer time in effect (UT+X+1).
    pub summer_time: bool,
    /// Clock is synchronised to an external signal.
    pub clock_quality: bool,
}

impl DateTime {
    /// Record with the given date and time, no weekday and all flags clear.
    pub const fn new(
        year: u16,
        month: u8,
        day_of_month: u8,
        hour_of_day: u8,
        minutes: u8,
        seconds: u8,
    ) -> Self {
        Self {
            year,
            month,
            day_of_month,
            day_of_week: 0,
            hour_of_day,
            minutes,
            seconds,
            fault: false,
            working_day: false,
            no_working_day: false,
            no_year: false,
            no_date: false,
            no_day_of_week: false,
            no_time: false,
            summer_time: false,
            clock_quality: false,
        }
    }

    pub const fn with_day_of_week(mut self, day_of_week: u8) -> Self {
        self.day_of_week = day_of_week;
        self
    }
}

/// `YYYY-MM-DD [Weekday ]HH:MM:SS`. Fields are printed as stored, valid or not.
impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} ",
            self.year, self.month, self.day_of_month
        )?;
        if let Some(name) = weekday_name(self.day_of_week) {
            write!(f, "{name} ")?;
        }
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour_of_day, self.minutes, self.seconds
        )
    }
}

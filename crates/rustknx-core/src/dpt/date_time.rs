use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, Timelike};

use crate::dpt::Datapoint;
use crate::encoding::{field::BitField, reader::Reader, writer::Writer};
use crate::types::{DateTime, DptId};
use crate::{DecodeError, EncodeError};

pub const DPT_DATE_TIME: DptId = DptId::new(19, 1);
pub const DATE_TIME_LEN: usize = 9;

pub const YEAR_MIN: u16 = 1900;
pub const YEAR_MAX: u16 = 2155;

// Octet 0 is reserved and always zero.
const YEAR: BitField = BitField::new(1, 0, 8);
const MONTH: BitField = BitField::new(2, 0, 4);
const DAY_OF_MONTH: BitField = BitField::new(3, 0, 5);
const DAY_OF_WEEK: BitField = BitField::new(4, 5, 3);
const HOUR_OF_DAY: BitField = BitField::new(4, 0, 5);
const MINUTES: BitField = BitField::new(5, 0, 6);
const SECONDS: BitField = BitField::new(6, 0, 6);
const FAULT: BitField = BitField::flag(7, 7);
const WORKING_DAY: BitField = BitField::flag(7, 6);
const NO_WORKING_DAY: BitField = BitField::flag(7, 5);
const NO_YEAR: BitField = BitField::flag(7, 4);
const NO_DATE: BitField = BitField::flag(7, 3);
const NO_DAY_OF_WEEK: BitField = BitField::flag(7, 2);
const NO_TIME: BitField = BitField::flag(7, 1);
const SUMMER_TIME: BitField = BitField::flag(7, 0);
const CLOCK_QUALITY: BitField = BitField::flag(8, 7);

/// Rolls `(year, month, day)` forward or back the way calendar arithmetic
/// does: month 13 is January of the next year, day 0 is the last day of
/// the previous month, and so on.
fn normalize_date(year: u16, month: u8, day: u8) -> Option<NaiveDate> {
    let first_of_year = NaiveDate::from_ymd_opt(i32::from(year), 1, 1)?;
    let first_of_month = match month {
        0 => first_of_year.checked_sub_months(Months::new(1))?,
        m => first_of_year.checked_add_months(Months::new(u32::from(m) - 1))?,
    };
    match day {
        0 => first_of_month.checked_sub_days(Days::new(1)),
        d => first_of_month.checked_add_days(Days::new(u64::from(d) - 1)),
    }
}

impl DateTime {
    /// Checks the record against the calendar and the time-of-day ranges.
    ///
    /// Status flags are not consulted; `no_year` does not exempt `year`
    /// from the range check.
    pub fn is_valid(&self) -> bool {
        let Some(date) = normalize_date(self.year, self.month, self.day_of_month) else {
            return false;
        };
        if date.year() < i32::from(YEAR_MIN) || date.year() > i32::from(YEAR_MAX) {
            return false;
        }
        if date.year() != i32::from(self.year)
            || date.month() != u32::from(self.month)
            || date.day() != u32::from(self.day_of_month)
        {
            return false;
        }
        if self.day_of_week > 7 || self.hour_of_day > 24 {
            return false;
        }
        // 24:00:00 marks the end of the day
        if self.hour_of_day == 24 && (self.minutes != 0 || self.seconds != 0) {
            return false;
        }
        self.minutes <= 59 && self.seconds <= 59
    }

    /// Packs the record into its wire form.
    ///
    /// An invalid record packs to nine zero octets, which is itself not a
    /// decodable value. Use [`DateTime::try_to_bytes`] to get an error
    /// instead.
    pub fn to_bytes(&self) -> [u8; DATE_TIME_LEN] {
        self.try_to_bytes().unwrap_or([0; DATE_TIME_LEN])
    }

    pub fn try_to_bytes(&self) -> Result<[u8; DATE_TIME_LEN], EncodeError> {
        if !self.is_valid() {
            return Err(EncodeError::ValueOutOfRange);
        }
        let mut buf = [0u8; DATE_TIME_LEN];
        YEAR.pack(&mut buf, (self.year - YEAR_MIN) as u8);
        MONTH.pack(&mut buf, self.month);
        DAY_OF_MONTH.pack(&mut buf, self.day_of_month);
        DAY_OF_WEEK.pack(&mut buf, self.day_of_week);
        HOUR_OF_DAY.pack(&mut buf, self.hour_of_day);
        MINUTES.pack(&mut buf, self.minutes);
        SECONDS.pack(&mut buf, self.seconds);
        FAULT.pack_flag(&mut buf, self.fault);
        WORKING_DAY.pack_flag(&mut buf, self.working_day);
        NO_WORKING_DAY.pack_flag(&mut buf, self.no_working_day);
        NO_YEAR.pack_flag(&mut buf, self.no_year);
        NO_DATE.pack_flag(&mut buf, self.no_date);
        NO_DAY_OF_WEEK.pack_flag(&mut buf, self.no_day_of_week);
        NO_TIME.pack_flag(&mut buf, self.no_time);
        SUMMER_TIME.pack_flag(&mut buf, self.summer_time);
        CLOCK_QUALITY.pack_flag(&mut buf, self.clock_quality);
        Ok(buf)
    }

    /// Unpacks a nine-octet payload. Reserved bits are ignored; the
    /// unpacked record must pass [`DateTime::is_valid`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        if data.len() != DATE_TIME_LEN {
            return Err(DecodeError::InvalidLength);
        }
        let record = Self {
            year: YEAR_MIN + u16::from(YEAR.unpack(data)),
            month: MONTH.unpack(data),
            day_of_month: DAY_OF_MONTH.unpack(data),
            day_of_week: DAY_OF_WEEK.unpack(data),
            hour_of_day: HOUR_OF_DAY.unpack(data),
            minutes: MINUTES.unpack(data),
            seconds: SECONDS.unpack(data),
            fault: FAULT.unpack_flag(data),
            working_day: WORKING_DAY.unpack_flag(data),
            no_working_day: NO_WORKING_DAY.unpack_flag(data),
            no_year: NO_YEAR.unpack_flag(data),
            no_date: NO_DATE.unpack_flag(data),
            no_day_of_week: NO_DAY_OF_WEEK.unpack_flag(data),
            no_time: NO_TIME.unpack_flag(data),
            summer_time: SUMMER_TIME.unpack_flag(data),
            clock_quality: CLOCK_QUALITY.unpack_flag(data),
        };
        if !record.is_valid() {
            return Err(DecodeError::OutOfRange);
        }
        Ok(record)
    }

    /// Calendar value of the record, if it names one.
    ///
    /// Returns `None` for invalid records and when `no_year`, `no_date` or
    /// `no_time` mark the corresponding fields as meaningless. 24:00:00 is
    /// midnight of the following day.
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        if !self.is_valid() || self.no_year || self.no_date || self.no_time {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(
            i32::from(self.year),
            u32::from(self.month),
            u32::from(self.day_of_month),
        )?;
        if self.hour_of_day == 24 {
            return date.succ_opt()?.and_hms_opt(0, 0, 0);
        }
        date.and_hms_opt(
            u32::from(self.hour_of_day),
            u32::from(self.minutes),
            u32::from(self.seconds),
        )
    }
}

/// Fills date, time and weekday; all status flags are cleared.
impl TryFrom<NaiveDateTime> for DateTime {
    type Error = EncodeError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| EncodeError::ValueOutOfRange)?;
        let record = DateTime::new(
            year,
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
        .with_day_of_week(value.weekday().number_from_monday() as u8);
        if !record.is_valid() {
            return Err(EncodeError::ValueOutOfRange);
        }
        Ok(record)
    }
}

impl Datapoint for DateTime {
    const ID: DptId = DPT_DATE_TIME;
    const SIZE: usize = DATE_TIME_LEN;

    fn is_valid(&self) -> bool {
        DateTime::is_valid(self)
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&self.to_bytes())
    }

    fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Self::from_bytes(r.read_exact(DATE_TIME_LEN)?)
    }
}

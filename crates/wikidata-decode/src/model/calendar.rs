//! Precision-aware calendar values ("carbon dates").
//!
//! Wikibase time values carry a precision code next to the timestamp. A
//! value with century precision says nothing about its decade, so two such
//! values are equal whenever they fall in the same century, whatever
//! digits the wire happened to carry below that.

use std::fmt;

use crate::error::DecodeError;

/// Granularity of a calendar value, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Precision {
    BillionYears = 0,
    HundredMillionYears = 1,
    TenMillionYears = 2,
    MillionYears = 3,
    HundredThousandYears = 4,
    TenThousandYears = 5,
    Millennium = 6,
    Century = 7,
    Decade = 8,
    Year = 9,
    Month = 10,
    Day = 11,
    Hour = 12,
    Minute = 13,
    Second = 14,
}

impl Precision {
    /// All precisions, indexed by wire code.
    pub const ALL: [Precision; 15] = [
        Precision::BillionYears,
        Precision::HundredMillionYears,
        Precision::TenMillionYears,
        Precision::MillionYears,
        Precision::HundredThousandYears,
        Precision::TenThousandYears,
        Precision::Millennium,
        Precision::Century,
        Precision::Decade,
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
    ];

    /// Looks up a precision from its wire code (0 = billion years … 14 = second).
    pub fn from_code(code: i64) -> Option<Precision> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Returns the wire code.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Number of years one step of this precision spans.
    ///
    /// Year and finer precisions return 1.
    pub fn year_unit(self) -> i64 {
        match self {
            Precision::BillionYears => 1_000_000_000,
            Precision::HundredMillionYears => 100_000_000,
            Precision::TenMillionYears => 10_000_000,
            Precision::MillionYears => 1_000_000,
            Precision::HundredThousandYears => 100_000,
            Precision::TenThousandYears => 10_000,
            Precision::Millennium => 1_000,
            Precision::Century => 100,
            Precision::Decade => 10,
            _ => 1,
        }
    }

    /// Snake-case name, as used in the claim value tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Precision::BillionYears => "billion_years",
            Precision::HundredMillionYears => "hundred_million_years",
            Precision::TenMillionYears => "ten_million_years",
            Precision::MillionYears => "million_years",
            Precision::HundredThousandYears => "hundred_thousand_years",
            Precision::TenThousandYears => "ten_thousand_years",
            Precision::Millennium => "millennium",
            Precision::Century => "century",
            Precision::Decade => "decade",
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds `year` down to a multiple of the precision's year unit.
fn bucket(year: i64, precision: Precision) -> i64 {
    year.div_euclid(precision.year_unit())
}

/// A calendar value on the proleptic calendar with a declared precision.
///
/// Negative years are BCE/BP and kept as-is. Equality only looks at the
/// fields that are meaningful at the coarser of the two precisions, so it
/// is not transitive across mixed precisions and the type is not `Eq`.
#[derive(Debug, Clone, Copy)]
pub struct CalendarValue {
    year: i64,
    month: Option<u8>,
    day: Option<u8>,
    hour: Option<u8>,
    minute: Option<u8>,
    second: Option<u8>,
    precision: Precision,
}

impl CalendarValue {
    /// Creates a value holding only a year.
    pub fn new(year: i64, precision: Precision) -> Self {
        Self {
            year,
            month: None,
            day: None,
            hour: None,
            minute: None,
            second: None,
            precision,
        }
    }

    pub fn with_month(mut self, month: u8) -> Self {
        self.month = Some(month);
        self
    }

    pub fn with_day(mut self, day: u8) -> Self {
        self.day = Some(day);
        self
    }

    pub fn with_hour(mut self, hour: u8) -> Self {
        self.hour = Some(hour);
        self
    }

    pub fn with_minute(mut self, minute: u8) -> Self {
        self.minute = Some(minute);
        self
    }

    pub fn with_second(mut self, second: u8) -> Self {
        self.second = Some(second);
        self
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn hour(&self) -> Option<u8> {
        self.hour
    }

    pub fn minute(&self) -> Option<u8> {
        self.minute
    }

    pub fn second(&self) -> Option<u8> {
        self.second
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }
}

impl PartialEq for CalendarValue {
    fn eq(&self, other: &Self) -> bool {
        let p = self.precision.min(other.precision);
        bucket(self.year, p) == bucket(other.year, p)
            && (p < Precision::Month || self.month == other.month)
            && (p < Precision::Day || self.day == other.day)
            && (p < Precision::Hour || self.hour == other.hour)
            && (p < Precision::Minute || self.minute == other.minute)
            && (p < Precision::Second || self.second == other.second)
    }
}

impl fmt::Display for CalendarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision;
        if p < Precision::Year {
            return write!(f, "{} ({})", self.year, p);
        }
        write!(f, "{}", self.year)?;
        if let Some(m) = self.month.filter(|_| p >= Precision::Month) {
            write!(f, "-{:02}", m)?;
        }
        if let Some(d) = self.day.filter(|_| p >= Precision::Day) {
            write!(f, "-{:02}", d)?;
        }
        if let Some(h) = self.hour.filter(|_| p >= Precision::Hour) {
            write!(f, "T{:02}", h)?;
            if let Some(m) = self.minute.filter(|_| p >= Precision::Minute) {
                write!(f, ":{:02}", m)?;
                if let Some(s) = self.second.filter(|_| p >= Precision::Second) {
                    write!(f, ":{:02}", s)?;
                }
            }
        }
        Ok(())
    }
}

/// Raw calendar fields as read off the wire, before precision is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawTime {
    pub year: i64,
    pub month: Option<u8>,
    pub day: Option<u8>,
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub second: Option<u8>,
}

/// Applies a wire precision code to raw calendar fields.
///
/// Coarse precisions round the year down to their unit (century → 1400
/// for 1405, millennium → -3000 for -2500); year and finer keep the literal
/// year and admit month through second progressively. Fields finer than
/// the precision are dropped.
pub fn normalize(raw: RawTime, precision_code: i64) -> Result<CalendarValue, DecodeError> {
    let precision = Precision::from_code(precision_code)
        .ok_or(DecodeError::UnsupportedPrecision { code: precision_code })?;

    let keep = |field: Option<u8>, at: Precision| field.filter(|_| precision >= at);

    let year = bucket(raw.year, precision)
        .checked_mul(precision.year_unit())
        .ok_or_else(|| DecodeError::MalformedValue {
            kind: "time",
            message: format!("year {} does not fit once rounded to {}", raw.year, precision),
        })?;

    Ok(CalendarValue {
        year,
        month: keep(raw.month, Precision::Month),
        day: keep(raw.day, Precision::Day),
        hour: keep(raw.hour, Precision::Hour),
        minute: keep(raw.minute, Precision::Minute),
        second: keep(raw.second, Precision::Second),
        precision,
    })
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Validated civil (solar) dates.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{CalendarError, Result};
use crate::julian_day::{JulianDayNumber, GREGORIAN_REFORM};

/// JDN of 0000-12-31 (proleptic Gregorian), chrono's day 0 from the common era.
const CE_EPOCH_JDN: i64 = 1_721_425;

/// First year for which conversions are checked against published almanacs.
pub const VERIFIED_FIRST_YEAR: i32 = 1900;
/// Last year for which conversions are checked against published almanacs.
pub const VERIFIED_LAST_YEAR: i32 = 2100;

/// Whether a result lies in the range where the series are known to
/// reproduce published almanacs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accuracy {
    /// Inside 1900-01-01..=2100-12-31.
    Verified,
    /// Computed with the same formulas, but never checked against an almanac.
    Unverified,
}

impl Accuracy {
    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// A solar calendar date.
///
/// Dates from 1582-10-15 on are Gregorian; earlier dates are Julian, as in
/// [`JulianDayNumber::from_civil`]. Construction rejects days that do not
/// exist in that calendar, including 1582-10-05 to 1582-10-14; an accepted
/// date is never normalized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCivilDate"))]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

/// Unchecked fields of a deserialized [`CivilDate`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawCivilDate {
    year: i32,
    month: u32,
    day: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCivilDate> for CivilDate {
    type Error = CalendarError;

    fn try_from(raw: RawCivilDate) -> Result<Self> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl CivilDate {
    /// Creates a date, rejecting days and months outside the calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for e.g. 31 February, month 13
    /// or 1582-10-10.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        let invalid = CalendarError::InvalidDate { year, month, day };
        if (year, month, day) >= (1582, 10, 15) {
            return NaiveDate::from_ymd_opt(year, month, day)
                .map(|_| Self { year, month, day })
                .ok_or(invalid);
        }
        if !(1..=12).contains(&month) || day == 0 {
            return Err(invalid);
        }
        // A Julian date exists iff its day number maps back to it.
        let jdn = JulianDayNumber::from_civil(day, month, year);
        if jdn < GREGORIAN_REFORM && jdn.to_civil() == (day, month, year) {
            Ok(Self { year, month, day })
        } else {
            Err(invalid)
        }
    }

    /// Date of a Julian Day Number (Julian calendar before 1582-10-15).
    pub fn from_jdn(jdn: JulianDayNumber) -> Self {
        let (day, month, year) = jdn.to_civil();
        Self { year, month, day }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    pub fn jdn(self) -> JulianDayNumber {
        JulianDayNumber::from_civil(self.day, self.month, self.year)
    }

    /// ISO-8601 day of week, `1..=7` for Monday through Sunday.
    pub fn weekday(self) -> u8 {
        self.jdn().weekday()
    }

    /// The following day.
    pub fn succ(self) -> Self {
        Self::from_jdn(self.jdn() + 1)
    }

    pub fn accuracy(self) -> Accuracy {
        if (VERIFIED_FIRST_YEAR..=VERIFIED_LAST_YEAR).contains(&self.year) {
            Accuracy::Verified
        } else {
            Accuracy::Unverified
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Same day; a proleptic-Gregorian `NaiveDate` before the reform becomes
/// its Julian-calendar date.
impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        let days = i64::from(date.num_days_from_ce());
        Self::from_jdn(JulianDayNumber::new(days + CE_EPOCH_JDN))
    }
}

impl TryFrom<CivilDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(date: CivilDate) -> Result<Self> {
        i32::try_from(date.jdn().value() - CE_EPOCH_JDN)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or(CalendarError::InvalidDate {
                year: date.year,
                month: date.month,
                day: date.day,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(
            CivilDate::new(2023, 2, 31),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 2,
                day: 31
            })
        );
        assert!(CivilDate::new(2023, 2, 29).is_err());
        assert!(CivilDate::new(2023, 13, 1).is_err());
        assert!(CivilDate::new(2023, 0, 1).is_err());
        assert!(CivilDate::new(2023, 4, 0).is_err());
        assert!(CivilDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn accessors_and_display() {
        let date = CivilDate::new(2024, 2, 10).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2024, 2, 10));
        assert_eq!(date.to_string(), "2024-02-10");
        assert_eq!(date.jdn().value(), 2_460_351);
    }

    #[test]
    fn succ_crosses_month_and_year() {
        let date = CivilDate::new(2023, 12, 31).unwrap();
        assert_eq!(date.succ(), CivilDate::new(2024, 1, 1).unwrap());
        let date = CivilDate::new(2024, 2, 28).unwrap();
        assert_eq!(date.succ(), CivilDate::new(2024, 2, 29).unwrap());
    }

    #[test]
    fn weekday_matches_chrono() {
        let mut date = CivilDate::new(1999, 12, 1).unwrap();
        for _ in 0..100 {
            let naive = NaiveDate::try_from(date).unwrap();
            assert_eq!(u32::from(date.weekday()), naive.weekday().number_from_monday());
            date = date.succ();
        }
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(monday.weekday(), Weekday::Mon);
        assert_eq!(CivilDate::from(monday).weekday(), 1);
    }

    #[test]
    fn accuracy_window() {
        assert_eq!(CivilDate::new(1900, 1, 1).unwrap().accuracy(), Accuracy::Verified);
        assert_eq!(CivilDate::new(2100, 12, 31).unwrap().accuracy(), Accuracy::Verified);
        assert_eq!(CivilDate::new(1899, 12, 31).unwrap().accuracy(), Accuracy::Unverified);
        assert!(!CivilDate::new(2101, 1, 1).unwrap().accuracy().is_verified());
    }

    #[test]
    fn julian_calendar_before_the_reform() {
        // 1500 is a leap year only in the Julian calendar.
        let feb29 = CivilDate::new(1500, 2, 29).unwrap();
        assert_eq!(feb29.succ(), CivilDate::new(1500, 3, 1).unwrap());
        assert!(CivilDate::new(1500, 2, 30).is_err());
        assert!(CivilDate::new(1700, 2, 29).is_err());

        assert!(CivilDate::new(1582, 10, 4).is_ok());
        for day in 5..=14 {
            assert!(CivilDate::new(1582, 10, day).is_err(), "1582-10-{day}");
        }
        assert_eq!(
            CivilDate::new(1582, 10, 4).unwrap().succ(),
            CivilDate::new(1582, 10, 15).unwrap()
        );
    }

    #[test]
    fn jdn_round_trips_across_the_reform() {
        let mut date = CivilDate::new(1400, 1, 1).unwrap();
        while date.year() < 1700 {
            assert_eq!(CivilDate::from_jdn(date.jdn()), date);
            let next = date.succ();
            assert_eq!(next.jdn() - date.jdn(), 1);
            assert_eq!(CivilDate::new(next.year(), next.month(), next.day()), Ok(next));
            date = next;
        }
    }

    #[test]
    fn chrono_maps_by_day_not_by_fields() {
        // Gregorian 1500-03-10 is Julian 1500-02-29.
        let naive = NaiveDate::from_ymd_opt(1500, 3, 10).unwrap();
        let date = CivilDate::from(naive);
        assert_eq!(date, CivilDate::new(1500, 2, 29).unwrap());
        assert_eq!(NaiveDate::try_from(date).unwrap(), naive);
        assert_eq!(
            CivilDate::from(NaiveDate::from_ymd_opt(1582, 10, 14).unwrap()),
            CivilDate::new(1582, 10, 4).unwrap()
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates() {
        let date: CivilDate = serde_json::from_str(r#"{"year":2024,"month":2,"day":29}"#).unwrap();
        assert_eq!(date, CivilDate::new(2024, 2, 29).unwrap());
        assert_eq!(serde_json::to_string(&date).unwrap(), r#"{"year":2024,"month":2,"day":29}"#);

        for json in [
            r#"{"year":2023,"month":2,"day":31}"#,
            r#"{"year":2023,"month":13,"day":0}"#,
            r#"{"year":1582,"month":10,"day":10}"#,
        ] {
            let err = serde_json::from_str::<CivilDate>(json).unwrap_err();
            assert!(err.to_string().contains("invalid date"), "{json}: {err}");
        }
    }

    #[test]
    fn chrono_roundtrip() {
        let naive = NaiveDate::from_ymd_opt(2023, 3, 22).unwrap();
        let date = CivilDate::from(naive);
        assert_eq!(NaiveDate::try_from(date).unwrap(), naive);
    }
}

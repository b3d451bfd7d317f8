// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day Numbers and the civil calendar.
//!
//! A [`JulianDayNumber`] is the integer count of days since noon UT,
//! 24 November 4714 BCE (proleptic Gregorian). Conversions follow the
//! Fliegel–Van Flandern formulas, switching to the Julian calendar before
//! 1582-10-15 exactly as the historical reform did: 1582-10-04 (Julian) is
//! followed by 1582-10-15 (Gregorian).

use std::fmt;
use std::ops::{Add, Sub};

/// First day of the Gregorian calendar, 1582-10-15.
pub const GREGORIAN_REFORM: JulianDayNumber = JulianDayNumber(2_299_161);

/// Integer Julian Day Number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JulianDayNumber(i64);

impl JulianDayNumber {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Day number of a civil date.
    ///
    /// Dates that the Gregorian formula places before the reform are
    /// recomputed with the Julian-calendar formula. No range checking is
    /// done here; validated dates come from [`crate::CivilDate`].
    pub fn from_civil(day: u32, month: u32, year: i32) -> Self {
        let (dd, mm, yy) = (i64::from(day), i64::from(month), i64::from(year));
        let a = (14 - mm).div_euclid(12);
        let y = yy + 4800 - a;
        let m = mm + 12 * a - 3;
        let month_days = (153 * m + 2).div_euclid(5);
        let jd = dd + month_days + 365 * y + y.div_euclid(4) - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045;
        if jd < GREGORIAN_REFORM.0 {
            return Self(dd + month_days + 365 * y + y.div_euclid(4) - 32083);
        }
        Self(jd)
    }

    /// Civil `(day, month, year)` of this day number, Julian calendar before
    /// the reform and Gregorian from it on.
    pub fn to_civil(self) -> (u32, u32, i32) {
        let (b, c) = if self >= GREGORIAN_REFORM {
            let a = self.0 + 32044;
            let b = (4 * a + 3).div_euclid(146_097);
            (b, a - (b * 146_097).div_euclid(4))
        } else {
            (0, self.0 + 32082)
        };
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);
        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = b * 100 + d - 4800 + m.div_euclid(10);
        (day as u32, month as u32, year as i32)
    }

    /// ISO-8601 day of week, `1..=7` for Monday through Sunday.
    #[inline]
    pub fn weekday(self) -> u8 {
        (self.0.rem_euclid(7) + 1) as u8
    }
}

impl fmt::Display for JulianDayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

impl Add<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDayNumber {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDayNumber {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Solar-to-lunar conversion.
//!
//! [`LunarCalendar`] turns a [`CivilDate`] into its [`LunarDate`] and the
//! Can-Chi names of that day. Each conversion is a pure function of the date
//! and the calendar's [`CalendarConfig`]; a calendar can be shared freely
//! between threads.
//!
//! ```
//! use amlich::{CivilDate, LunarCalendar};
//!
//! let calendar = LunarCalendar::default();
//! let tet = calendar.convert(CivilDate::new(2024, 2, 10).unwrap());
//! assert_eq!((tet.lunar.day, tet.lunar.month, tet.lunar.year), (1, 1, 2024));
//! assert_eq!(tet.can_chi.year.to_string(), "Giáp Thìn");
//! ```

use std::fmt;

use crate::config::{CalendarConfig, CanChiBasis};
use crate::date::{Accuracy, CivilDate};
use crate::ephemeris::Lunation;
use crate::error::Result;
use crate::lunar_year::{is_leap_year_span, leap_month_offset, month_11_start};
use crate::sexagenary::CanChi;

/// A date of the lunisolar calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarDate {
    /// Day of the lunar month, `1..=30`.
    pub day: u32,
    /// Month number, `1..=12`. A leap month repeats the number of the
    /// month before it.
    pub month: u32,
    pub year: i32,
    pub is_leap: bool,
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.day, self.month)?;
        if self.is_leap {
            f.write_str(" nhuận")?;
        }
        write!(f, "/{}", self.year)
    }
}

/// Everything one civil date converts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conversion {
    pub lunar: LunarDate,
    pub can_chi: CanChi,
    pub accuracy: Accuracy,
}

/// Lunisolar calendar for one time zone and Can-Chi basis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LunarCalendar {
    config: CalendarConfig,
}

impl LunarCalendar {
    /// Builds a calendar after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimeZone`](crate::CalendarError::InvalidTimeZone)
    /// when the configured offset is unusable.
    pub fn new(config: CalendarConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Lunar date of the civil day `date`.
    ///
    /// The date is placed in the lunation that began on or before it, and
    /// that lunation is numbered by counting months from the month-11 new
    /// moon that opens its lunar year. In a thirteen-month year every month
    /// from the leap month on is numbered one lower, the leap month itself
    /// repeating the number of its predecessor.
    pub fn solar_to_lunar(&self, date: CivilDate) -> LunarDate {
        let tz = self.config.time_zone;
        let day_number = date.jdn();

        // The mean estimate lands within one lunation of the true month, on
        // either side: try k+1, then k, then k-1.
        let k = Lunation::mean_before(day_number.value() as f64);
        let mut month_start = k.offset(1).new_moon_day(tz);
        for step in [0, -1] {
            if month_start <= day_number {
                break;
            }
            month_start = k.offset(step).new_moon_day(tz);
        }

        let yy = date.year();
        let mut a11 = month_11_start(yy, tz);
        let mut b11 = a11;
        let mut lunar_year;
        if a11 >= month_start {
            lunar_year = yy;
            a11 = month_11_start(yy - 1, tz);
        } else {
            lunar_year = yy + 1;
            b11 = month_11_start(yy + 1, tz);
        }

        let lunar_day = (day_number - month_start + 1) as u32;
        let diff = (month_start - a11).div_euclid(29);
        let mut lunar_month = diff + 11;
        let mut is_leap = false;
        if is_leap_year_span(a11, b11) {
            let leap = leap_month_offset(a11, tz);
            if diff >= leap {
                lunar_month = diff + 10;
                is_leap = diff == leap;
            }
        }
        if lunar_month > 12 {
            lunar_month -= 12;
        }
        if lunar_month >= 11 && diff < 4 {
            lunar_year -= 1;
        }

        tracing::trace!(
            %date,
            month_start = month_start.value(),
            a11 = a11.value(),
            b11 = b11.value(),
            diff,
            "lunar month resolved"
        );

        LunarDate {
            day: lunar_day,
            month: lunar_month as u32,
            year: lunar_year,
            is_leap,
        }
    }

    /// Can-Chi names of `date`, whose lunar date is `lunar`.
    pub fn can_chi(&self, date: CivilDate, lunar: &LunarDate) -> CanChi {
        match self.config.can_chi_basis {
            CanChiBasis::Solar => CanChi::solar(date),
            CanChiBasis::Lunar => CanChi::lunar(date, lunar.month, lunar.year),
        }
    }

    /// Lunar date, Can-Chi names and accuracy of `date`.
    pub fn convert(&self, date: CivilDate) -> Conversion {
        let accuracy = date.accuracy();
        if !accuracy.is_verified() {
            tracing::debug!(%date, "date outside the verified 1900-2100 window");
        }
        let lunar = self.solar_to_lunar(date);
        Conversion {
            lunar,
            can_chi: self.can_chi(date, &lunar),
            accuracy,
        }
    }
}

/// Converts `date` with the default (Vietnamese, solar-basis) calendar.
pub fn convert(date: CivilDate) -> Conversion {
    LunarCalendar::default().convert(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHINA_TIME_ZONE;
    use crate::error::CalendarError;

    fn lunar(y: i32, m: u32, d: u32) -> (u32, u32, i32, bool) {
        let date = CivilDate::new(y, m, d).unwrap();
        let l = LunarCalendar::default().solar_to_lunar(date);
        (l.day, l.month, l.year, l.is_leap)
    }

    #[test]
    fn tet_new_years() {
        assert_eq!(lunar(2024, 2, 10), (1, 1, 2024, false));
        assert_eq!(lunar(2024, 2, 9), (30, 12, 2023, false));
        assert_eq!(lunar(2023, 1, 22), (1, 1, 2023, false));
        assert_eq!(lunar(2023, 1, 21), (30, 12, 2022, false));
        assert_eq!(lunar(2025, 1, 29), (1, 1, 2025, false));
        assert_eq!(lunar(2026, 2, 17), (1, 1, 2026, false));
        assert_eq!(lunar(1900, 1, 31), (1, 1, 1900, false));
    }

    #[test]
    fn leap_month_2_of_2023() {
        assert_eq!(lunar(2023, 2, 20), (1, 2, 2023, false));
        assert_eq!(lunar(2023, 3, 22), (1, 2, 2023, true));
        assert_eq!(lunar(2023, 4, 19), (29, 2, 2023, true));
        assert_eq!(lunar(2023, 4, 20), (1, 3, 2023, false));
    }

    #[test]
    fn leap_month_6_of_2025() {
        assert_eq!(lunar(2025, 7, 25), (1, 6, 2025, true));
        assert_eq!(lunar(2025, 8, 22), (29, 6, 2025, true));
        assert_eq!(lunar(2025, 8, 23), (1, 7, 2025, false));
    }

    #[test]
    fn dates_in_the_tail_of_the_previous_lunar_year() {
        assert_eq!(lunar(2024, 1, 1), (20, 11, 2023, false));
        assert_eq!(lunar(2000, 1, 1), (25, 11, 1999, false));
        assert_eq!(lunar(1900, 1, 1), (1, 12, 1899, false));
        assert_eq!(lunar(2100, 12, 31), (1, 12, 2100, false));
    }

    #[test]
    fn mean_estimate_two_lunations_ahead() {
        // Both k+1 and k fall after these days; the month began at k-1.
        assert_eq!(lunar(2054, 5, 7), (30, 3, 2054, false));
        assert_eq!(lunar(2054, 5, 8), (1, 4, 2054, false));
        assert_eq!(lunar(2062, 4, 9), (30, 2, 2062, false));
        assert_eq!(lunar(2062, 4, 10), (1, 3, 2062, false));
    }

    #[test]
    fn convert_carries_can_chi_and_accuracy() {
        let date = CivilDate::new(2024, 2, 10).unwrap();
        let c = convert(date);
        assert_eq!(c.can_chi.day.to_string(), "Giáp Thìn");
        assert_eq!(c.can_chi.month.to_string(), "Đinh Mão");
        assert_eq!(c.accuracy, Accuracy::Verified);

        let lunar_basis =
            LunarCalendar::new(CalendarConfig::default().with_can_chi_basis(CanChiBasis::Lunar))
                .unwrap();
        let c = lunar_basis.convert(date);
        assert_eq!(c.can_chi.month.to_string(), "Bính Dần");
        assert_eq!(c.can_chi.year.to_string(), "Giáp Thìn");

        let far = convert(CivilDate::new(2150, 6, 1).unwrap());
        assert_eq!(far.accuracy, Accuracy::Unverified);
        assert!((1..=30).contains(&far.lunar.day));
    }

    #[test]
    fn lunar_basis_year_lags_before_tet() {
        let calendar =
            LunarCalendar::new(CalendarConfig::default().with_can_chi_basis(CanChiBasis::Lunar))
                .unwrap();
        let c = calendar.convert(CivilDate::new(2024, 2, 9).unwrap());
        assert_eq!(c.can_chi.year.to_string(), "Quý Mão");
        let solar = convert(CivilDate::new(2024, 2, 9).unwrap());
        assert_eq!(solar.can_chi.year.to_string(), "Giáp Thìn");
    }

    #[test]
    fn time_zone_is_validated() {
        let config = CalendarConfig {
            time_zone: 20.0,
            ..CalendarConfig::default()
        };
        assert_eq!(LunarCalendar::new(config), Err(CalendarError::InvalidTimeZone(20.0)));
        let china = LunarCalendar::new(CalendarConfig::china()).unwrap();
        assert_eq!(china.config().time_zone, CHINA_TIME_ZONE);
    }

    #[test]
    fn display_marks_leap_months() {
        let date = LunarDate {
            day: 1,
            month: 2,
            year: 2023,
            is_leap: true,
        };
        assert_eq!(date.to_string(), "01/02 nhuận/2023");
        let date = LunarDate {
            is_leap: false,
            ..date
        };
        assert_eq!(date.to_string(), "01/02/2023");
    }

    #[test]
    fn conversion_is_deterministic() {
        let calendar = LunarCalendar::default();
        let date = CivilDate::new(1987, 7, 15).unwrap();
        assert_eq!(calendar.convert(date), calendar.convert(date));
    }
}

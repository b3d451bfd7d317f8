// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Vietnamese lunisolar calendar (âm lịch)
//!
//! Converts solar (civil) dates to lunar dates with the astronomical method
//! of Hồ Ngọc Đức, and names days, months and years in the sixty-term Can-Chi
//! cycle.
//!
//! # Core types
//!
//! - [`LunarCalendar`] — converter bound to a [`CalendarConfig`].
//! - [`CivilDate`] — validated solar date; [`LunarDate`] — its lunar counterpart.
//! - [`CanChi`] / [`SexagenaryPair`] — stem-branch names of a date.
//! - [`DayRecord`] — one row of a converted range.
//! - [`JulianDayNumber`] — integer day count used as the calendar pivot.
//! - [`Time<S>`] — fractional instant on the [`UT`] or [`JDE`] axis.
//!
//! # Building blocks
//!
//! | Item | Role |
//! |------|------|
//! | [`JulianDayNumber::from_civil`] / [`JulianDayNumber::to_civil`] | civil date ⇄ day number |
//! | [`Lunation::new_moon`] | instant of the `k`-th new moon |
//! | [`sun_longitude`] / [`major_term`] | apparent solar longitude and its 30° sector |
//! | [`month_11_start`] | new moon opening the month of the winter solstice |
//! | [`leap_month_offset`] | position of the month without a major term |
//!
//! # Example
//!
//! ```
//! use amlich::{convert_range, CivilDate};
//!
//! let start = CivilDate::new(2024, 1, 1).unwrap();
//! let end = CivilDate::new(2024, 1, 7).unwrap();
//! let week = convert_range(start, end).unwrap();
//! assert_eq!(week.len(), 7);
//! assert_eq!(week[0].weekday, 1);
//! assert_eq!(week[6].weekday, 7);
//! ```

mod batch;
mod config;
mod converter;
mod date;
mod delta_t;
mod ephemeris;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod julian_day;
mod lunar_year;
pub(crate) mod scales;
mod sexagenary;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use batch::{convert_range, DayRecord};
pub use config::{CalendarConfig, CanChiBasis, CHINA_TIME_ZONE, VIETNAM_TIME_ZONE};
pub use converter::{convert, Conversion, LunarCalendar, LunarDate};
pub use date::{Accuracy, CivilDate, VERIFIED_FIRST_YEAR, VERIFIED_LAST_YEAR};
pub use ephemeris::{major_term, sun_longitude, Lunation, LUNATION_EPOCH, SYNODIC_MONTH};
pub use error::{CalendarError, Result};
pub use instant::{Time, TimeScale};
pub use julian_day::{JulianDayNumber, GREGORIAN_REFORM};
pub use lunar_year::{is_leap_year_span, leap_month_offset, month_11_start};
pub use scales::{JDE, UT};
pub use sexagenary::{Branch, CanChi, SexagenaryPair, Stem};

/// Universal Time instant, the axis new moons are assigned to civil days on.
pub type UniversalTime = Time<UT>;

/// Julian Ephemeris Day, the dynamical-time axis of the lunar series.
pub type JulianEphemerisDay = Time<JDE>;

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar-year framing: the month-11 anchor and the leap month.
//!
//! A lunar year is framed by two consecutive "month 11" new moons, the months
//! containing the winter solstice. Twelve lunations between them make an
//! ordinary year; thirteen make a leap year, whose first month without a
//! major solar term is the inserted leap month.

use crate::ephemeris::{major_term, Lunation, SYNODIC_MONTH};
use crate::julian_day::JulianDayNumber;

/// Day number that the month-11 estimate is counted from.
const MONTH_11_EPOCH: i64 = 2_415_021;

/// Major-term sector beginning at the winter solstice (270°).
const WINTER_SOLSTICE_TERM: u8 = 9;

/// Upper bound on lunations scanned for the leap month.
const MAX_LEAP_SCAN: i64 = 14;

/// Civil day on which lunar month 11 of `solar_year` begins.
///
/// Takes the mean new moon preceding 31 December; when the Sun is already
/// past the winter solstice on that day, month 11 began one lunation earlier.
/// The estimate is corrected at most once.
pub fn month_11_start(solar_year: i32, time_zone: f64) -> JulianDayNumber {
    let off = JulianDayNumber::from_civil(31, 12, solar_year).value() - MONTH_11_EPOCH;
    let k = Lunation((off as f64 / SYNODIC_MONTH).floor() as i64);
    let nm = k.new_moon_day(time_zone);
    if major_term(nm, time_zone) >= WINTER_SOLSTICE_TERM {
        return k.offset(-1).new_moon_day(time_zone);
    }
    nm
}

/// Offset, in lunations after the month-11 new moon `a11`, of the first
/// month whose major term does not change from the previous month's.
///
/// Only meaningful for a thirteen-month year; the scan stops after
/// [`MAX_LEAP_SCAN`] lunations.
pub fn leap_month_offset(a11: JulianDayNumber, time_zone: f64) -> i64 {
    let k = Lunation::mean_nearest(a11.value() as f64);
    let term_at = |i: i64| major_term(k.offset(i).new_moon_day(time_zone), time_zone);

    let mut i = 1;
    let mut arc = term_at(i);
    loop {
        let last = arc;
        i += 1;
        arc = term_at(i);
        if arc == last || i >= MAX_LEAP_SCAN {
            break;
        }
    }
    tracing::trace!(a11 = a11.value(), offset = i - 1, "leap month located");
    i - 1
}

/// Whether the lunar year opened by `a11` and closed by `b11` has thirteen
/// months.
#[inline]
pub fn is_leap_year_span(a11: JulianDayNumber, b11: JulianDayNumber) -> bool {
    b11 - a11 > 365
}

#[cfg(test)]
mod tests {
    use super::*;

    const HANOI: f64 = 7.0;

    #[test]
    fn month_11_reference_days() {
        // 2022-11-24, 2023-12-13, 2024-12-01.
        assert_eq!(month_11_start(2022, HANOI).value(), 2_459_908);
        assert_eq!(month_11_start(2023, HANOI).value(), 2_460_292);
        assert_eq!(month_11_start(2024, HANOI).value(), 2_460_646);
        assert_eq!(JulianDayNumber::new(2_460_292).to_civil(), (13, 12, 2023));
    }

    #[test]
    fn month_11_contains_winter_solstice() {
        for year in 1900..=2100 {
            let a11 = month_11_start(year, HANOI);
            let (_, month, y) = a11.to_civil();
            assert_eq!(y, year);
            assert!(month == 11 || month == 12, "{year}: {a11}");
            assert!(major_term(a11, HANOI) < WINTER_SOLSTICE_TERM, "{year}: {a11}");
        }
    }

    #[test]
    fn year_spans_are_twelve_or_thirteen_lunations() {
        for year in 1900..2100 {
            let span = month_11_start(year + 1, HANOI) - month_11_start(year, HANOI);
            assert!(
                (353..=355).contains(&span) || (383..=385).contains(&span),
                "{year}: {span} days"
            );
        }
    }

    #[test]
    fn leap_offset_for_2023() {
        // Lunar year 2023 runs from month 11 of 2022; months 12, 1 and 2
        // follow, then the leap month 2 at offset 4.
        let a11 = month_11_start(2022, HANOI);
        let b11 = month_11_start(2023, HANOI);
        assert!(is_leap_year_span(a11, b11));
        assert_eq!(leap_month_offset(a11, HANOI), 4);
    }

    #[test]
    fn leap_offset_for_2025() {
        // Leap month 6: eighth lunation after month 11 of 2024.
        let a11 = month_11_start(2024, HANOI);
        assert!(is_leap_year_span(a11, month_11_start(2025, HANOI)));
        assert_eq!(leap_month_offset(a11, HANOI), 8);
    }

    #[test]
    fn ordinary_year_is_not_leap() {
        assert!(!is_leap_year_span(
            month_11_start(2023, HANOI),
            month_11_start(2024, HANOI)
        ));
    }

    #[test]
    fn scan_stops_at_cap_in_ordinary_year() {
        // No repeated term within twelve months: the scan runs to its limit.
        let a11 = month_11_start(2023, HANOI);
        assert_eq!(leap_month_offset(a11, HANOI), MAX_LEAP_SCAN - 1);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Truncated lunar and solar series.
//!
//! Two quantities drive the lunisolar calendar:
//!
//! * the instant of the `k`-th new moon after the reference new moon of
//!   1900-01-01 ([`Lunation::new_moon`]), from the first-order lunar theory
//!   in Meeus, *Astronomical Formulae for Calculators*, ch. 32;
//! * the Sun's apparent ecliptic longitude ([`sun_longitude`]), from Meeus,
//!   *Astronomical Algorithms*, ch. 25 (low-accuracy method).
//!
//! Terms are summed in the published order. Calendar decisions compare these
//! values against sector boundaries, so the floating-point evaluation order
//! is part of the result.

use std::f64::consts::PI;

use qtty::Days;

use crate::delta_t::delta_t_days;
use crate::instant::Time;
use crate::julian_day::JulianDayNumber;
use crate::scales::{JDE, UT};

/// Mean synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530588853;

/// JD(UT) of the reference new moon, lunation 0 (1900-01-01 13:51 UT).
pub const LUNATION_EPOCH: f64 = 2_415_021.076998695;

/// Lunations per Julian century; turns a lunation index into centuries
/// since 1900.
const LUNATIONS_PER_CENTURY: f64 = 1236.85;

const DR: f64 = PI / 180.0;

/// Index of a new moon counted from [`LUNATION_EPOCH`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lunation(pub i64);

impl Lunation {
    /// Lunation whose mean new moon most recently precedes `jd` (may be off
    /// by one against the true new moon; callers correct once).
    #[inline]
    pub fn mean_before(jd: f64) -> Self {
        Self(((jd - LUNATION_EPOCH) / SYNODIC_MONTH).floor() as i64)
    }

    /// Lunation whose mean new moon is nearest to `jd`.
    #[inline]
    pub fn mean_nearest(jd: f64) -> Self {
        Self(((jd - LUNATION_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64)
    }

    #[inline]
    pub const fn index(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn offset(self, n: i64) -> Self {
        Self(self.0 + n)
    }

    /// Instant of this new moon, still in dynamical time.
    pub fn new_moon_jde(self) -> Time<JDE> {
        let k = self.0 as f64;
        let t = k / LUNATIONS_PER_CENTURY;
        let t2 = t * t;
        let t3 = t2 * t;

        // Mean phase plus the long-period term.
        let mut jd1 = 2_415_020.75933 + 29.53058868 * k + 0.0001178 * t2 - 0.000000155 * t3;
        jd1 = jd1 + 0.00033 * ((166.56 + 132.87 * t - 0.009173 * t2) * DR).sin();

        // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude.
        let m = 359.2242 + 29.10535608 * k - 0.0000333 * t2 - 0.00000347 * t3;
        let mpr = 306.0253 + 385.81691806 * k + 0.0107306 * t2 + 0.00001236 * t3;
        let f = 21.2964 + 390.67050646 * k - 0.0016528 * t2 - 0.00000239 * t3;

        let mut c1 = (0.1734 - 0.000393 * t) * (m * DR).sin() + 0.0021 * (2.0 * DR * m).sin();
        c1 = c1 - 0.4068 * (mpr * DR).sin() + 0.0161 * (DR * 2.0 * mpr).sin();
        c1 = c1 - 0.0004 * (DR * 3.0 * mpr).sin();
        c1 = c1 + 0.0104 * (DR * 2.0 * f).sin() - 0.0051 * (DR * (m + mpr)).sin();
        c1 = c1 - 0.0074 * (DR * (m - mpr)).sin() + 0.0004 * (DR * (2.0 * f + m)).sin();
        c1 = c1 - 0.0004 * (DR * (2.0 * f - m)).sin() - 0.0006 * (DR * (2.0 * f + mpr)).sin();
        c1 = c1 + 0.0010 * (DR * (2.0 * f - mpr)).sin() + 0.0005 * (DR * (2.0 * mpr + m)).sin();

        Time::<JDE>::new(jd1 + c1)
    }

    /// Instant of this new moon on the UT axis.
    pub fn new_moon(self) -> Time<UT> {
        let t = self.0 as f64 / LUNATIONS_PER_CENTURY;
        let jde = self.new_moon_jde();
        Time::<UT>::from_days(Days::new(jde.value() - delta_t_days(t).value()))
    }

    /// Civil day on which this new moon falls, `time_zone` hours east of
    /// Greenwich.
    #[inline]
    pub fn new_moon_day(self, time_zone: f64) -> JulianDayNumber {
        self.new_moon().day_number(time_zone)
    }
}

/// The Sun's apparent longitude in radians, normalized to `[0, 2π)`.
fn sun_longitude_radians(jd: Time<UT>) -> f64 {
    let t = jd.julian_centuries();
    let t2 = t * t;
    // Mean anomaly and mean longitude, degrees.
    let m = 357.52910 + 35999.05030 * t - 0.0001559 * t2 - 0.00000048 * t * t2;
    let l0 = 280.46645 + 36000.76983 * t + 0.0003032 * t2;
    // Equation of center.
    let mut dl = (1.914600 - 0.004817 * t - 0.000014 * t2) * (DR * m).sin();
    dl = dl
        + (0.019993 - 0.000101 * t) * (DR * 2.0 * m).sin()
        + 0.000290 * (DR * 3.0 * m).sin();
    let l = (l0 + dl) * DR;
    l - PI * 2.0 * (l / (PI * 2.0)).floor()
}

/// The Sun's apparent ecliptic longitude at `jd`, in degrees within `[0, 360)`.
pub fn sun_longitude(jd: Time<UT>) -> f64 {
    sun_longitude_radians(jd).to_degrees()
}

/// Major solar term in force at local midnight opening civil day `day`:
/// the 30° sector `0..=11` the Sun occupies, counted from the vernal equinox.
///
/// Sector 9 begins at the winter solstice (270°).
pub fn major_term(day: JulianDayNumber, time_zone: f64) -> u8 {
    let midnight = Time::<UT>::local_midnight(day, time_zone);
    (sun_longitude_radians(midnight) / PI * 6.0).floor() as u8
}

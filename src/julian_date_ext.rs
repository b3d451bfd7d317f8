// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Universal-time Julian Date (`Time<UT>`) specific extensions.

use chrono::{DateTime, Utc};
use qtty::*;

use super::instant::Time;
use super::julian_day::JulianDayNumber;
use super::scales::UT;

/// Julian Date of 1970-01-01T00:00:00Z.
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl Time<UT> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the time argument of the solar series.
    ///
    /// Evaluated as `(jd − 2451545.0) / 36525` on raw `f64` so the rounding
    /// matches the published series exactly.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        (self.value() - Self::J2000.value()) / Self::JULIAN_CENTURY.value()
    }

    /// Civil day number on which this instant falls for an observer
    /// `time_zone` hours east of Greenwich.
    ///
    /// Julian days start at noon, so the civil day is `⌊jd + 0.5 + tz/24⌋`.
    #[inline]
    pub fn day_number(&self, time_zone: f64) -> JulianDayNumber {
        JulianDayNumber::new((self.value() + 0.5 + time_zone / 24.0).floor() as i64)
    }

    /// Instant of local midnight opening civil day `day` for an observer
    /// `time_zone` hours east of Greenwich.
    #[inline]
    pub fn local_midnight(day: JulianDayNumber, time_zone: f64) -> Self {
        Self::new(day.value() as f64 - 0.5 - time_zone / 24.0)
    }

    /// UTC timestamp of this instant, `None` outside chrono's range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let since_epoch = (Days::new(self.value()) - UNIX_EPOCH_JD).to::<Second>().value();
        let secs = since_epoch.floor();
        let nanos = ((since_epoch - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos)
    }

    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let whole = Seconds::new(datetime.timestamp() as f64);
        let frac = Seconds::new(f64::from(datetime.timestamp_subsec_nanos()) / 1e9);
        Self::from_days(UNIX_EPOCH_JD + (whole + frac).to::<Day>())
    }
}

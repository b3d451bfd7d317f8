// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Batch evaluation of date ranges.
//!
//! Every day of a range is converted independently on the rayon pool; the
//! output is always in ascending date order.

use rayon::prelude::*;

use crate::converter::{Conversion, LunarCalendar, LunarDate};
use crate::date::{Accuracy, CivilDate};
use crate::error::{CalendarError, Result};
use crate::julian_day::JulianDayNumber;
use crate::sexagenary::CanChi;

/// One row of a converted range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayRecord {
    pub solar: CivilDate,
    /// ISO day of week, `1` (Monday) to `7` (Sunday).
    pub weekday: u8,
    pub lunar: LunarDate,
    pub can_chi: CanChi,
    pub accuracy: Accuracy,
}

impl DayRecord {
    pub fn new(solar: CivilDate, conversion: Conversion) -> Self {
        Self {
            solar,
            weekday: solar.weekday(),
            lunar: conversion.lunar,
            can_chi: conversion.can_chi,
            accuracy: conversion.accuracy,
        }
    }
}

impl LunarCalendar {
    /// Converts every day from `start` to `end`, both inclusive.
    ///
    /// Uses a dedicated pool of [`CalendarConfig::workers`](crate::CalendarConfig::workers)
    /// threads when set, otherwise the global rayon pool.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidRange`] when `start` is after `end`;
    /// [`CalendarError::WorkerPool`] when the dedicated pool cannot be built.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(start = %start, end = %end, n_days = tracing::field::Empty)
    )]
    pub fn convert_range(&self, start: CivilDate, end: CivilDate) -> Result<Vec<DayRecord>> {
        if start.jdn() > end.jdn() {
            return Err(CalendarError::InvalidRange { start, end });
        }

        let days: Vec<JulianDayNumber> = (start.jdn().value()..=end.jdn().value())
            .map(JulianDayNumber::new)
            .collect();
        tracing::Span::current().record("n_days", days.len());

        let records = match self.config().workers {
            Some(workers) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| CalendarError::WorkerPool(e.to_string()))?;
                tracing::debug!(workers, "using dedicated worker pool");
                pool.install(|| self.evaluate(&days))
            }
            None => self.evaluate(&days),
        };

        tracing::debug!(n_records = records.len(), "range converted");
        Ok(records)
    }

    fn evaluate(&self, days: &[JulianDayNumber]) -> Vec<DayRecord> {
        days.par_iter()
            .map(|&jdn| {
                let solar = CivilDate::from_jdn(jdn);
                DayRecord::new(solar, self.convert(solar))
            })
            .collect()
    }
}

/// Converts a range with the default (Vietnamese, solar-basis) calendar.
///
/// # Errors
///
/// See [`LunarCalendar::convert_range`].
pub fn convert_range(start: CivilDate, end: CivilDate) -> Result<Vec<DayRecord>> {
    LunarCalendar::default().convert_range(start, end)
}

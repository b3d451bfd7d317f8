// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar error types.

use crate::date::CivilDate;

/// Errors reported for caller input. The conversion itself cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Day or month outside the civil calendar (e.g. 31 February).
    #[error("invalid date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    /// A date range whose start comes after its end.
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: CivilDate, end: CivilDate },

    /// Time-zone offset outside [-12, +14] hours or not finite.
    #[error("invalid time zone offset {0} h")]
    InvalidTimeZone(f64),

    /// A dedicated worker pool for batch evaluation could not be built.
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),
}

/// Result alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;

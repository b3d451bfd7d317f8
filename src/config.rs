// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar configuration.
//!
//! A [`CalendarConfig`] is built once and shared read-only by every
//! conversion, including concurrent batch workers.

use crate::error::{CalendarError, Result};

/// UTC offset, in hours, of the reference Vietnamese almanac.
pub const VIETNAM_TIME_ZONE: f64 = 7.0;
/// UTC offset, in hours, of the Chinese almanac.
pub const CHINA_TIME_ZONE: f64 = 8.0;

/// Which date the month and year Can-Chi pairs are derived from.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CanChiBasis {
    /// Solar month and solar year of the civil date.
    #[default]
    Solar,
    /// Lunar month and lunar year the civil date converts to.
    Lunar,
}

/// Settings shared by all conversions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct CalendarConfig {
    /// Hours east of Greenwich at which new moons and solar terms are
    /// assigned to civil days.
    #[cfg_attr(feature = "serde", serde(default = "default_time_zone"))]
    pub time_zone: f64,

    /// Basis for the month and year Can-Chi pairs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub can_chi_basis: CanChiBasis,

    /// Size of a dedicated batch worker pool; `None` uses the global pool.
    #[cfg_attr(feature = "serde", serde(default))]
    pub workers: Option<usize>,
}

#[cfg(feature = "serde")]
fn default_time_zone() -> f64 {
    VIETNAM_TIME_ZONE
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::vietnam()
    }
}

impl CalendarConfig {
    /// Vietnamese almanac (UTC+7).
    pub fn vietnam() -> Self {
        Self {
            time_zone: VIETNAM_TIME_ZONE,
            can_chi_basis: CanChiBasis::Solar,
            workers: None,
        }
    }

    /// Chinese almanac (UTC+8).
    pub fn china() -> Self {
        Self {
            time_zone: CHINA_TIME_ZONE,
            ..Self::vietnam()
        }
    }

    /// Replaces the time zone.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimeZone`] unless `hours` is finite and
    /// within `[-12, 14]`.
    pub fn with_time_zone(self, hours: f64) -> Result<Self> {
        let config = Self {
            time_zone: hours,
            ..self
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_can_chi_basis(self, basis: CanChiBasis) -> Self {
        Self {
            can_chi_basis: basis,
            ..self
        }
    }

    pub fn with_workers(self, workers: usize) -> Self {
        Self {
            workers: Some(workers),
            ..self
        }
    }

    /// Checks settings that can arrive unchecked (e.g. deserialized).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidTimeZone`] for an out-of-range offset.
    pub fn validate(&self) -> Result<()> {
        if !self.time_zone.is_finite() || !(-12.0..=14.0).contains(&self.time_zone) {
            return Err(CalendarError::InvalidTimeZone(self.time_zone));
        }
        Ok(())
    }
}

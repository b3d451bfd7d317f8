// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fractional instants tagged with their time axis.
//!
//! [`Time<S>`] wraps a Julian Date in [`Days`]; the marker `S` records which
//! axis the number lives on. The lunar series hands out `Time<JDE>`, and only
//! `Time<UT>` can be placed on a civil day. No conversion between axes is
//! offered: [`Lunation::new_moon`](crate::Lunation::new_moon) produces the UT
//! instant by subtracting ΔT, and no method re-tags a `Time<JDE>` as UT.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

use qtty::Days;

/// A time axis measured in Julian days.
pub trait TimeScale: Copy + fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Prefix used when an instant is displayed.
    const LABEL: &'static str;
}

/// An instant on axis `S`.
///
/// Instants on different axes do not mix:
///
/// ```compile_fail
/// use amlich::{Lunation, Time, UT};
///
/// let ut: Time<UT> = Lunation(0).new_moon_jde();
/// ```
///
/// ```compile_fail
/// use amlich::{Lunation, Time, UT};
///
/// let ut: Time<UT> = Lunation(0).new_moon_jde().to::<UT>();
/// ```
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    days: Days,
    _axis: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self::from_days(Days::new(value))
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            days,
            _axis: PhantomData,
        }
    }

    /// Raw day count, for the series arithmetic.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.days.value()
    }
}

impl<S: TimeScale> fmt::Display for Time<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", S::LABEL, self.days)
    }
}

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;

    fn add(self, rhs: Days) -> Self {
        Self::from_days(self.days + rhs)
    }
}

/// Elapsed days between two instants on the same axis.
impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;

    fn sub(self, rhs: Self) -> Days {
        self.days - rhs.days
    }
}

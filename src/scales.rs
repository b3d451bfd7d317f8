// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description |
//! |--------|-------------|
//! | [`UT`] | Universal Time Julian Date, the civil day axis |
//! | [`JDE`] | Julian Ephemeris Day, as produced by the lunar series |
//!
//! Both markers share the absolute Julian Day origin. Going from [`JDE`] to
//! [`UT`] requires the ΔT correction, which the lunar series evaluates from
//! its own time argument (see [`Lunation::new_moon`](crate::Lunation::new_moon)).

use super::instant::TimeScale;

/// Universal Time Julian Date, the axis calendars count days on.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "JD(UT)";
}

/// Julian Ephemeris Day.
///
/// Values coming straight out of a series expansion, before ΔT has been
/// removed.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";
}

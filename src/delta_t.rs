// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT (Delta T) for the new-moon series
//!
//! **ΔT = TT − UT**, the drift of Earth-rotation time against uniform
//! dynamical time. The new-moon series of [`crate::ephemeris`] produces
//! dynamical Julian days; subtracting ΔT moves them onto the civil UT axis.
//!
//! The correction is the pair of polynomials that accompany the truncated
//! lunar theory (Meeus, *Astronomical Formulae for Calculators*), evaluated in
//! Julian centuries `T` from the 1900 epoch:
//!
//! * `T < −11` (before ≈ 800 CE): a quartic fitted to ancient eclipse records.
//! * otherwise: a quadratic valid across the modern era.
//!
//! The split keeps the quartic from diverging over the modern range. Results
//! are in days; terms are summed left to right as published.

use qtty::Days;

/// Centuries from 1900 below which the ancient polynomial applies.
const ANCIENT_LIMIT: f64 = -11.0;

/// **T < −11**
#[inline]
fn delta_t_ancient(t: f64) -> Days {
    let t2 = t * t;
    let t3 = t2 * t;
    Days::new(0.001 + 0.000839 * t + 0.0002261 * t2 - 0.00000845 * t3 - 0.000000081 * t * t3)
}

/// **T ≥ −11**
#[inline]
fn delta_t_modern(t: f64) -> Days {
    let t2 = t * t;
    Days::new(-0.000278 + 0.000265 * t + 0.000262 * t2)
}

/// Returns **ΔT** in days for `t` Julian centuries since 1900.
#[inline]
pub(crate) fn delta_t_days(t: f64) -> Days {
    if t < ANCIENT_LIMIT {
        delta_t_ancient(t)
    } else {
        delta_t_modern(t)
    }
}

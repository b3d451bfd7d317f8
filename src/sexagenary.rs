// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Can-Chi: the sexagenary cycle of Heavenly Stems and Earthly Branches.
//!
//! Days, months and years are each named by a [`SexagenaryPair`]. All three
//! are residues of plain integer arithmetic on the civil date; none of them
//! needs the lunar conversion unless the lunar basis is asked for.

use std::fmt;

use crate::date::CivilDate;
use crate::julian_day::JulianDayNumber;

/// Heavenly Stems (Thiên Can), in cycle order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stem {
    Giap,
    At,
    Binh,
    Dinh,
    Mau,
    Ky,
    Canh,
    Tan,
    Nham,
    Quy,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Giap,
        Stem::At,
        Stem::Binh,
        Stem::Dinh,
        Stem::Mau,
        Stem::Ky,
        Stem::Canh,
        Stem::Tan,
        Stem::Nham,
        Stem::Quy,
    ];

    /// Stem at position `index` of the cycle; any integer is accepted.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Stem::Giap => "Giáp",
            Stem::At => "Ất",
            Stem::Binh => "Bính",
            Stem::Dinh => "Đinh",
            Stem::Mau => "Mậu",
            Stem::Ky => "Kỷ",
            Stem::Canh => "Canh",
            Stem::Tan => "Tân",
            Stem::Nham => "Nhâm",
            Stem::Quy => "Quý",
        }
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Earthly Branches (Địa Chi), in cycle order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Ty,
    Suu,
    Dan,
    Mao,
    Thin,
    Ti,
    Ngo,
    Mui,
    Than,
    Dau,
    Tuat,
    Hoi,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Ty,
        Branch::Suu,
        Branch::Dan,
        Branch::Mao,
        Branch::Thin,
        Branch::Ti,
        Branch::Ngo,
        Branch::Mui,
        Branch::Than,
        Branch::Dau,
        Branch::Tuat,
        Branch::Hoi,
    ];

    /// Branch at position `index` of the cycle; any integer is accepted.
    #[inline]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Branch::Ty => "Tý",
            Branch::Suu => "Sửu",
            Branch::Dan => "Dần",
            Branch::Mao => "Mão",
            Branch::Thin => "Thìn",
            Branch::Ti => "Tỵ",
            Branch::Ngo => "Ngọ",
            Branch::Mui => "Mùi",
            Branch::Than => "Thân",
            Branch::Dau => "Dậu",
            Branch::Tuat => "Tuất",
            Branch::Hoi => "Hợi",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One name of the sixty-term cycle, rendered as `"<stem> <branch>"`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SexagenaryPair {
    pub stem: Stem,
    pub branch: Branch,
}

impl SexagenaryPair {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pair naming civil day `jdn`.
    pub fn for_day(jdn: JulianDayNumber) -> Self {
        let n = jdn.value();
        Self::new(Stem::from_index(n + 9), Branch::from_index(n + 1))
    }

    /// Pair naming `month` of `year`; the month branch starts from Dần at
    /// month 1.
    pub fn for_month(month: u32, year: i32) -> Self {
        let (m, y) = (i64::from(month), i64::from(year));
        Self::new(Stem::from_index(y * 12 + m + 3), Branch::from_index(m + 1))
    }

    /// Pair naming `year`; 1984 is Giáp Tý.
    pub fn for_year(year: i32) -> Self {
        let y = i64::from(year);
        Self::new(Stem::from_index(y + 6), Branch::from_index(y + 8))
    }

    /// Position in the sixty-term cycle, `1` (Giáp Tý) to `60` (Quý Hợi).
    ///
    /// Only pairs whose stem and branch share parity occur in the cycle;
    /// for any other pair the result is meaningless.
    pub fn cycle_index(self) -> u8 {
        let (s, b) = (i32::from(self.stem.index()), i32::from(self.branch.index()));
        ((6 * s - 5 * b).rem_euclid(60) + 1) as u8
    }
}

impl fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

/// Day, month and year names of one civil date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CanChi {
    pub day: SexagenaryPair,
    pub month: SexagenaryPair,
    pub year: SexagenaryPair,
}

impl CanChi {
    /// Names computed from the solar date alone.
    pub fn solar(date: CivilDate) -> Self {
        Self {
            day: SexagenaryPair::for_day(date.jdn()),
            month: SexagenaryPair::for_month(date.month(), date.year()),
            year: SexagenaryPair::for_year(date.year()),
        }
    }

    /// Day name from the solar date; month and year names from the lunar
    /// month and lunar year the date belongs to.
    pub fn lunar(date: CivilDate, lunar_month: u32, lunar_year: i32) -> Self {
        Self {
            day: SexagenaryPair::for_day(date.jdn()),
            month: SexagenaryPair::for_month(lunar_month, lunar_year),
            year: SexagenaryPair::for_year(lunar_year),
        }
    }
}

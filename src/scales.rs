// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a day count and encodes how values in that
//! count relate to the absolute **Julian Day number**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day number | 0.0 |
//! | [`J2000`] | Days since J2000.0 (2000-01-01T12:00) | 2 451 545.0 |
//!
//! Neither marker applies ΔT or leap seconds: the low-precision ephemeris
//! formulas of this crate are fitted directly on civil time.

use super::instant::TimeScale;
use super::julian_date_ext::J2000_JD;
use qtty::Days;

// ---------------------------------------------------------------------------
// Epoch counters
// ---------------------------------------------------------------------------

/// Julian Day number: the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Days elapsed since the J2000.0 epoch; the time argument `d` of every
/// ephemeris formula in this crate.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2000;

impl TimeScale for J2000 {
    const LABEL: &'static str = "J2000 +";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + J2000_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - J2000_JD
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, J2000);

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::{J2000, JD};

/// Milliseconds in one civil day.
pub(crate) const DAY_MS: f64 = 86_400_000.0;

/// Julian day number whose noon-to-noon day contains the POSIX epoch
/// (1970-01-01); the POSIX epoch itself is `J1970 − 0.5`.
pub(crate) const J1970: f64 = 2_440_588.0;

/// Julian day number of the J2000.0 epoch.
pub(crate) const J2000_JD: Days = Days::new(2_451_545.0);

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::from_days(J2000_JD);

    /// Days elapsed since J2000.0, the time argument of the ephemerides.
    #[inline]
    pub fn days_since_j2000(&self) -> Time<J2000> {
        self.to::<J2000>()
    }
}

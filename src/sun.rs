// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Mean anomaly, equation of centre and ecliptic longitude of the Sun as
//! functions of the day count `d` since J2000.0, plus the transit arithmetic
//! the phase engine uses to locate local solar noon.

use qtty::{Days, Degrees, Radian, Radians};
use std::f64::consts::{PI, TAU};

use crate::coordinates::EquatorialCoordinates;
use crate::instant::Time;
use crate::julian_date_ext::J2000_JD;
use crate::scales::{J2000, JD};
use crate::transform::{declination, right_ascension};

/// Longitude of perihelion of the Earth's orbit.
const PERIHELION: Degrees = Degrees::new(102.9372);

/// Transit offset of the day-count used by the Julian cycle (`J0`).
pub(crate) const J0: f64 = 0.0009;

/// `M = 357.5291° + 0.98560028°·d`
pub fn solar_mean_anomaly(d: Time<J2000>) -> Radians {
    Degrees::new(357.5291 + 0.985_600_28 * d.value()).to::<Radian>()
}

/// `C = 1.9148°·sin M + 0.02°·sin 2M + 0.0003°·sin 3M`
pub fn equation_of_center(m: Radians) -> Radians {
    let m = m.value();
    Degrees::new(1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin())
        .to::<Radian>()
}

/// Ecliptic longitude of the Sun, `M + C + ϖ + π`, from the mean anomaly
/// `m` and the equation of centre `c` evaluated at it.
///
/// Not reduced to `[0, 2π)`; every consumer feeds it straight to a
/// trigonometric function.
pub fn ecliptic_longitude(m: Radians, c: Radians) -> Radians {
    m + c + PERIHELION.to::<Radian>() + Radians::new(PI)
}

/// Right ascension and declination of the Sun `d` days after J2000.0.
/// The ecliptic latitude of the Sun is taken as zero.
pub fn sun_coordinates(d: Time<J2000>) -> EquatorialCoordinates {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m, equation_of_center(m));
    let b = Radians::new(0.0);
    EquatorialCoordinates::new(right_ascension(l, b), declination(l, b))
}

// ── Transit arithmetic ────────────────────────────────────────────────────

/// Number of the local solar transit closest to `d` for west longitude `lw`.
pub(crate) fn julian_cycle(d: Time<J2000>, lw: Radians) -> f64 {
    (d.value() - J0 - lw.value() / TAU).round()
}

/// Approximate day count of the instant the Sun reaches hour angle `ht`.
/// With `ht = 0` this is the approximate transit.
pub(crate) fn approx_transit(ht: Radians, lw: Radians, n: f64) -> Time<J2000> {
    Time::new(J0 + (ht.value() + lw.value()) / TAU + n)
}

/// Julian day of the instant approximated by `ds`, corrected for the
/// eccentricity of the orbit (`M`) and the obliquity (`2L`).
pub(crate) fn solar_transit(ds: Time<J2000>, m: Radians, l: Radians) -> Time<JD> {
    let correction = 0.0053 * m.sin() - 0.0069 * (2.0 * l.value()).sin();
    Time::from_days(J2000_JD + ds.quantity() + Days::new(correction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn anomaly_and_longitude_at_epoch() {
        let m = solar_mean_anomaly(Time::new(0.0));
        assert_abs_diff_eq!(m.value(), 6.240_059_966_692_059, epsilon = 1e-12);
        let c = equation_of_center(m);
        assert_abs_diff_eq!(c.value(), -0.001_471_528_783_689_366_8, epsilon = 1e-12);
        assert_abs_diff_eq!(ecliptic_longitude(m, c).value(), 11.176_774_154_282_07, epsilon = 1e-12);
    }

    #[test]
    fn coordinates_at_epoch() {
        let c = sun_coordinates(Time::new(0.0));
        assert_abs_diff_eq!(c.right_ascension.value(), -1.373_700_987_234_334_2, epsilon = 1e-9);
        assert_abs_diff_eq!(c.declination.value(), -0.402_012_575_859_971_47, epsilon = 1e-9);
    }

    #[test]
    fn coordinates_for_paris_reference() {
        let c = sun_coordinates(Time::new(5_082.500_694_444_403));
        assert_abs_diff_eq!(c.right_ascension.value(), -1.972_355_726_911_251_5, epsilon = 1e-9);
        assert_abs_diff_eq!(c.declination.value(), -0.379_706_856_081_126_6, epsilon = 1e-9);
    }

    #[test]
    fn equation_of_center_vanishes_at_apsides() {
        assert_abs_diff_eq!(equation_of_center(Radians::new(0.0)).value(), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(equation_of_center(Radians::new(PI)).value(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn longitude_uses_the_given_center() {
        let m = Radians::new(1.0);
        let base = ecliptic_longitude(m, Radians::new(0.0));
        let shifted = ecliptic_longitude(m, Radians::new(0.25));
        assert_abs_diff_eq!((shifted - base).value(), 0.25, epsilon = 1e-15);
        assert_abs_diff_eq!(
            base.value(),
            1.0 + 102.9372_f64.to_radians() + PI,
            epsilon = 1e-12
        );
    }

    #[test]
    fn cycle_follows_longitude() {
        // Paris, local noon of 2013-12-01.
        let d = Time::<J2000>::new(5_083.0);
        let lw = Radians::new(-2.323_096_f64.to_radians());
        assert_eq!(julian_cycle(d, lw), 5_083.0);

        let ds = approx_transit(Radians::new(0.0), lw, 5_083.0);
        assert_abs_diff_eq!(ds.value(), 5_083.0009 + lw.value() / TAU, epsilon = 1e-9);
    }

    #[test]
    fn transit_near_noon() {
        let lw = Radians::new(-2.323_096_f64.to_radians());
        let ds = approx_transit(Radians::new(0.0), lw, 5_083.0);
        let m = solar_mean_anomaly(ds);
        let noon = solar_transit(ds, m, ecliptic_longitude(m, equation_of_center(m)));
        assert_abs_diff_eq!(noon.value(), 2_456_627.987_007_611, epsilon = 1e-8);
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision lunar ephemeris and illuminated fraction.
//!
//! Only the leading periodic terms are kept (one in longitude, one in
//! latitude, one in distance), which gives positions good to a fraction of a
//! degree.

use chrono::{DateTime, FixedOffset};
use qtty::{Degrees, Kilometers, Radian, Radians};

use crate::coordinates::GeocentricCoordinates;
use crate::instant::Time;
use crate::scales::J2000;
use crate::sun::sun_coordinates;
use crate::transform::{declination, right_ascension};

/// Mean Earth–Sun distance used for the phase angle.
pub const SUN_DISTANCE: Kilometers = Kilometers::new(149_598_000.0);

/// Geocentric right ascension, declination and distance of the Moon `d` days
/// after J2000.0.
pub fn moon_coordinates(d: Time<J2000>) -> GeocentricCoordinates {
    let d = d.value();
    let mean_longitude = Degrees::new(218.316 + 13.176_396 * d).to::<Radian>();
    let mean_anomaly = Degrees::new(134.963 + 13.064_993 * d).to::<Radian>();
    let mean_distance = Degrees::new(93.272 + 13.229_350 * d).to::<Radian>();

    let l = mean_longitude + Degrees::new(6.289).to::<Radian>() * mean_anomaly.sin();
    let b = Degrees::new(5.128).to::<Radian>() * mean_distance.sin();
    let distance = Kilometers::new(385_001.0 - 20_905.0 * mean_anomaly.cos());

    GeocentricCoordinates::new(right_ascension(l, b), declination(l, b), distance)
}

/// Phase angle of the Moon (Sun–Moon–Earth) at `instant`.
///
/// `0` at full moon, `π` at new moon. Independent of the observer.
pub fn moon_phase_angle(instant: &DateTime<FixedOffset>) -> Radians {
    let d = Time::<J2000>::from_instant(instant);
    let sun = sun_coordinates(d);
    let moon = moon_coordinates(d);

    let cos_elongation = sun.declination.sin() * moon.declination.sin()
        + sun.declination.cos()
            * moon.declination.cos()
            * (sun.right_ascension - moon.right_ascension).cos();
    let phi = cos_elongation.clamp(-1.0, 1.0).acos();

    let s = SUN_DISTANCE.value();
    Radians::new((s * phi.sin()).atan2(moon.distance.value() - s * phi.cos()))
}

/// Illuminated fraction of the Moon's disk at `instant`, in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use suncalc::moon_illumination_fraction;
///
/// let new_moon = DateTime::parse_from_rfc3339("2024-01-11T11:57:00Z").unwrap();
/// assert!(moon_illumination_fraction(&new_moon) < 0.01);
/// ```
pub fn moon_illumination_fraction(instant: &DateTime<FixedOffset>) -> f64 {
    (1.0 + moon_phase_angle(instant).cos()) / 2.0
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Apparent Sun and Moon positions for an observer.

use chrono::{DateTime, FixedOffset};
use qtty::{Degrees, Radian, Radians};

use crate::coordinates::{HorizontalPosition, MoonPosition, Observer};
use crate::instant::Time;
use crate::moon::moon_coordinates;
use crate::scales::J2000;
use crate::sun::sun_coordinates;
use crate::transform::{altitude, azimuth, sidereal_time};

/// Azimuth and altitude of the Sun seen from `latitude`/`longitude`
/// (north and east positive) at `instant`.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use qtty::Degrees;
/// use suncalc::sun_position;
///
/// let t = DateTime::parse_from_rfc3339("2013-12-01T00:01:00+01:00").unwrap();
/// let pos = sun_position(&t, Degrees::new(48.818684), Degrees::new(2.323096));
/// assert!(!pos.is_above_horizon());
/// ```
pub fn sun_position(
    instant: &DateTime<FixedOffset>,
    latitude: Degrees,
    longitude: Degrees,
) -> HorizontalPosition {
    let observer = Observer::new(latitude, longitude);
    let d = Time::<J2000>::from_instant(instant);
    let c = sun_coordinates(d);
    let h = sidereal_time(d, observer.lw) - c.right_ascension;

    HorizontalPosition::new(
        azimuth(h, observer.phi, c.declination),
        altitude(h, observer.phi, c.declination),
    )
}

/// Azimuth, refracted altitude and distance of the Moon seen from
/// `latitude`/`longitude` at `instant`.
pub fn moon_position(
    instant: &DateTime<FixedOffset>,
    latitude: Degrees,
    longitude: Degrees,
) -> MoonPosition {
    let observer = Observer::new(latitude, longitude);
    let d = Time::<J2000>::from_instant(instant);
    let c = moon_coordinates(d);
    let h = sidereal_time(d, observer.lw) - c.right_ascension;

    let alt = altitude(h, observer.phi, c.declination);
    MoonPosition::new(
        azimuth(h, observer.phi, c.declination),
        alt + refraction(alt),
        c.distance,
    )
}

/// Empirical refraction term applied to the Moon's geometric altitude.
fn refraction(h: Radians) -> Radians {
    let rad = |deg: f64| Degrees::new(deg).to::<Radian>().value();
    let h = h.value();
    Radians::new(rad(0.017) / (h + rad(10.26) / (h + rad(5.10))).tan())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ecliptic → equatorial → horizontal transforms.
//!
//! Every function here is a closed-form spherical-trigonometry identity.
//! Arguments of `asin` that drift past `±1` through rounding are clamped;
//! [`hour_angle_at_altitude`] is the exception, since its `NaN` is how the
//! phase engine learns that an elevation is never reached.

use qtty::{Degrees, Radian, Radians};

use crate::instant::Time;
use crate::scales::J2000;

/// Obliquity of the ecliptic (tilt of Earth's axis), J2000 value.
pub const EARTH_OBLIQUITY: Degrees = Degrees::new(23.4397);

#[inline]
fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// Right ascension of a point at ecliptic longitude `l` and latitude `b`.
pub fn right_ascension(l: Radians, b: Radians) -> Radians {
    let (sin_e, cos_e) = EARTH_OBLIQUITY.sin_cos();
    Radians::new((l.sin() * cos_e - b.tan() * sin_e).atan2(l.cos()))
}

/// Declination of a point at ecliptic longitude `l` and latitude `b`.
pub fn declination(l: Radians, b: Radians) -> Radians {
    let (sin_e, cos_e) = EARTH_OBLIQUITY.sin_cos();
    Radians::new(clamped_asin(b.sin() * cos_e + b.cos() * sin_e * l.sin()))
}

/// Local sidereal time for `d` days after J2000 at west longitude `lw`.
pub fn sidereal_time(d: Time<J2000>, lw: Radians) -> Radians {
    Degrees::new(280.16 + 360.985_623_5 * d.value()).to::<Radian>() - lw
}

/// Azimuth from the hour angle `h`, observer latitude `phi` and declination
/// `dec`: 0 = north, increasing clockwise, wrapped into `[0, 2π)`.
pub fn azimuth(h: Radians, phi: Radians, dec: Radians) -> Radians {
    let y = h.sin();
    let x = h.cos() * phi.sin() - dec.tan() * phi.cos();
    (Radians::HALF_TURN + Radians::new(y.atan2(x))).wrap_pos()
}

/// Altitude above the horizon from the hour angle `h`, observer latitude
/// `phi` and declination `dec`.
pub fn altitude(h: Radians, phi: Radians, dec: Radians) -> Radians {
    Radians::new(clamped_asin(
        phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos(),
    ))
}

/// Hour angle at which a body of declination `dec` reaches altitude `h` for
/// an observer at latitude `phi`.
///
/// `NaN` when the body never reaches that altitude on this day (polar day or
/// polar night for the Sun).
pub fn hour_angle_at_altitude(h: Radians, phi: Radians, dec: Radians) -> Radians {
    Radians::new(((h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos())).acos())
}

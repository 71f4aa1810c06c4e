// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coordinate records produced by the ephemerides and position queries.
//!
//! All angles are stored in radians; the `*_degrees()` accessors are there
//! for display and for callers that think in degrees.

use qtty::{Degree, Degrees, Kilometers, Radian, Radians};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Observer frame shared by every location-dependent query: the *west*
/// longitude `lw` and the latitude `phi`, both in radians.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Observer {
    pub lw: Radians,
    pub phi: Radians,
}

impl Observer {
    pub(crate) fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            lw: -longitude.to::<Radian>(),
            phi: latitude.to::<Radian>(),
        }
    }
}

/// Right ascension and declination, independent of the observer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EquatorialCoordinates {
    pub right_ascension: Radians,
    pub declination: Radians,
}

impl EquatorialCoordinates {
    pub const fn new(right_ascension: Radians, declination: Radians) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }
}

/// Equatorial coordinates plus geocentric distance. Used for the Moon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeocentricCoordinates {
    pub right_ascension: Radians,
    pub declination: Radians,
    pub distance: Kilometers,
}

impl GeocentricCoordinates {
    pub const fn new(right_ascension: Radians, declination: Radians, distance: Kilometers) -> Self {
        Self {
            right_ascension,
            declination,
            distance,
        }
    }

    /// Drop the distance.
    pub const fn equatorial(&self) -> EquatorialCoordinates {
        EquatorialCoordinates::new(self.right_ascension, self.declination)
    }
}

/// Position relative to an observer's horizon.
///
/// Azimuth is measured from north, increasing eastward (clockwise seen from
/// above), in `[0, 2π)`; altitude is `0` on the horizon and `+π/2` at the
/// zenith.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HorizontalPosition {
    pub azimuth: Radians,
    pub altitude: Radians,
}

impl HorizontalPosition {
    pub const fn new(azimuth: Radians, altitude: Radians) -> Self {
        Self { azimuth, altitude }
    }

    pub fn azimuth_degrees(&self) -> Degrees {
        self.azimuth.to::<Degree>()
    }

    pub fn altitude_degrees(&self) -> Degrees {
        self.altitude.to::<Degree>()
    }

    /// `true` when the body is above the mathematical horizon.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.value() > 0.0
    }
}

/// Horizontal position of the Moon together with its distance from Earth.
/// The altitude includes the empirical refraction correction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MoonPosition {
    pub azimuth: Radians,
    pub altitude: Radians,
    pub distance: Kilometers,
}

impl MoonPosition {
    pub const fn new(azimuth: Radians, altitude: Radians, distance: Kilometers) -> Self {
        Self {
            azimuth,
            altitude,
            distance,
        }
    }

    pub const fn horizontal(&self) -> HorizontalPosition {
        HorizontalPosition::new(self.azimuth, self.altitude)
    }

    pub fn azimuth_degrees(&self) -> Degrees {
        self.azimuth.to::<Degree>()
    }

    pub fn altitude_degrees(&self) -> Degrees {
        self.altitude.to::<Degree>()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for HorizontalPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("HorizontalPosition", 2)?;
        s.serialize_field("azimuth_rad", &self.azimuth.value())?;
        s.serialize_field("altitude_rad", &self.altitude.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for MoonPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("MoonPosition", 3)?;
        s.serialize_field("azimuth_rad", &self.azimuth.value())?;
        s.serialize_field("altitude_rad", &self.altitude.value())?;
        s.serialize_field("distance_km", &self.distance.value())?;
        s.end()
    }
}

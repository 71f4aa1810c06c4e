// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun and Moon ephemeris
//!
//! Low-precision positions of the Sun and Moon for an observer on Earth, the
//! illuminated fraction of the Moon, and the segmentation of a calendar day
//! into named solar phases (night, twilights, golden hours, daylight).
//!
//! # Core operations
//!
//! - [`sun_position`]: azimuth/altitude of the Sun.
//! - [`moon_position`]: azimuth/altitude/distance of the Moon.
//! - [`moon_illumination_fraction`]: lit fraction of the lunar disk.
//! - [`solar_phases`]: the 13 [`SunPhase`] periods of a day as a [`SolarDay`].
//!
//! # Conventions
//!
//! Instants are `chrono::DateTime<FixedOffset>`; no time-zone database is
//! consulted. Latitude and longitude are [`qtty::Degrees`], north and east
//! positive. Computed angles are [`qtty::Radians`]; azimuth is measured from
//! north, clockwise, in `[0, 2π)`.
//!
//! The day count fed to the ephemerides is taken from the *local* wall clock
//! of the instant (UTC offset included):
//!
//! ```text
//! JD = (epoch_ms + offset_ms) / 86 400 000 − 0.5 + 2 440 588
//! ```
//!
//! # Time types
//!
//! - [`Time<S>`]: day count parameterised by a [`TimeScale`] marker.
//! - [`JulianDate`]: alias for `Time<JD>`.
//! - [`DaysSinceJ2000`]: alias for `Time<J2000>`.
//! - [`Interval<T>`]: a generic interval over any [`TimeInstant`];
//!   [`LocalPeriod`] is the civil-time instantiation used by [`SolarDay`].

mod coordinates;
mod error;
pub(crate) mod instant;
mod julian_date_ext;
mod moon;
mod period;
pub mod phase;
mod position;
pub(crate) mod scales;
mod solar_day;
mod sun;
pub mod transform;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use coordinates::{EquatorialCoordinates, GeocentricCoordinates, HorizontalPosition, MoonPosition};
pub use error::{Result, SunCalcError};
pub use instant::{Time, TimeInstant, TimeScale};
pub use moon::{moon_coordinates, moon_illumination_fraction, moon_phase_angle, SUN_DISTANCE};
pub use period::{complement_within, Interval, LocalPeriod};
pub use phase::{angles, PhaseBoundary, PhaseDefinition, SunPhase};
pub use position::{moon_position, sun_position};
pub use scales::{J2000, JD};
pub use solar_day::{solar_phases, PhaseInstance, SolarDay};
pub use sun::{ecliptic_longitude, equation_of_center, solar_mean_anomaly, sun_coordinates};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date: continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Days elapsed since J2000.0 (2000-01-01T12:00), the time argument of the
/// ephemerides.
///
/// This is a type alias for [`Time<J2000>`].
pub type DaysSinceJ2000 = Time<J2000>;

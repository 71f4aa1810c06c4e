// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic time–scale parameterised instant.
//!
//! [`Time<S>`] stores a scalar quantity in [`Days`] whose *meaning* is
//! determined by the compile-time marker `S: TimeScale`: an absolute Julian
//! Day number for [`JD`](crate::JD), or a day offset from the J2000.0 epoch
//! for [`J2000`](crate::J2000).
//!
//! Civil instants enter and leave this module as
//! `chrono::DateTime<FixedOffset>`. The conversion *includes* the UTC offset
//! of the instant, so a Julian day built here counts local wall-clock days.
//! The ephemeris formulas of this crate are calibrated on that convention.

use chrono::{DateTime, FixedOffset};
use qtty::*;
use std::marker::PhantomData;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::julian_date_ext::{DAY_MS, J1970};
use super::scales::JD;

// ═══════════════════════════════════════════════════════════════════════════
// TimeScale trait
// ═══════════════════════════════════════════════════════════════════════════

/// Marker trait for time scales.
///
/// A **time scale** defines a human-readable label and a pair of conversion
/// functions between the scale's native quantity (in [`Days`]) and the
/// absolute Julian Day number, the canonical representation of the crate.
pub trait TimeScale: Copy + Clone + std::fmt::Debug + PartialEq + PartialOrd + 'static {
    /// Display label used by [`Time`] formatting.
    const LABEL: &'static str;

    /// Convert a quantity in this scale's native unit to an absolute JD.
    fn to_jd(value: Days) -> Days;

    /// Convert an absolute JD back to this scale's native quantity.
    fn from_jd(jd: Days) -> Days;
}

// ═══════════════════════════════════════════════════════════════════════════
// Time<S>: the generic instant
// ═══════════════════════════════════════════════════════════════════════════

/// A point on time scale `S`.
///
/// Layout-identical to a single `f64`. Values may be `NaN`: the phase engine
/// produces them for elevations the Sun never reaches, and
/// [`Time::to_instant`] maps them to `None`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Time<S: TimeScale> {
    quantity: Days,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Time<S> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days on this scale).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
            _scale: PhantomData,
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self {
            quantity: days,
            _scale: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Absolute Julian Day corresponding to this instant.
    #[inline]
    pub fn julian_day(&self) -> Days {
        S::to_jd(self.quantity)
    }

    /// Absolute Julian Day as scalar.
    #[inline]
    pub fn julian_day_value(&self) -> f64 {
        self.julian_day().value()
    }

    /// Build an instant from an absolute Julian Day.
    #[inline]
    pub fn from_julian_day(jd: Days) -> Self {
        Self::from_days(S::from_jd(jd))
    }

    /// `true` unless the value is `NaN` or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    // ── cross-scale conversion ────────────────────────────────────────

    /// Convert this instant to another time scale, routing through the
    /// absolute Julian Day.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Time<T> {
        Time::<T>::from_julian_day(S::to_jd(self.quantity))
    }

    // ── civil instants ────────────────────────────────────────────────

    /// Build an instant from a civil date-time, **offset included**:
    ///
    /// ```text
    /// JD = (epoch_ms + offset_ms) / 86 400 000 − 0.5 + 2 440 588
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::DateTime;
    /// use suncalc::{DaysSinceJ2000, JulianDate};
    ///
    /// let noon = DateTime::parse_from_rfc3339("2000-01-01T12:00:00Z").unwrap();
    /// assert_eq!(JulianDate::from_instant(&noon).value(), 2_451_545.0);
    /// assert_eq!(DaysSinceJ2000::from_instant(&noon).value(), 0.0);
    /// ```
    pub fn from_instant(instant: &DateTime<FixedOffset>) -> Self {
        let offset_ms = i64::from(instant.offset().local_minus_utc()) * 1_000;
        let local_ms = (instant.timestamp_millis() + offset_ms) as f64;
        Time::<JD>::new(local_ms / DAY_MS - 0.5 + J1970).to::<S>()
    }

    /// Convert back to a civil date-time tagged with `offset`.
    ///
    /// The epoch milliseconds are `round((JD + 0.5 − 2 440 588) × 86 400 000)`;
    /// the offset only changes how the result is displayed, it is *not*
    /// subtracted. Returns `None` for `NaN`/infinite values or values outside
    /// chrono's representable range.
    pub fn to_instant(&self, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let millis = (self.julian_day_value() + 0.5 - J1970) * DAY_MS;
        if !millis.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(millis.round() as i64).map(|utc| utc.with_timezone(&offset))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Generic trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Display ───────────────────────────────────────────────────────────────

impl<S: TimeScale> std::fmt::Display for Time<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", S::LABEL, self.quantity)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<S: TimeScale> Serialize for Time<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> Deserialize<'de> for Time<S> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<S: TimeScale> Add<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl<S: TimeScale> Sub<Days> for Time<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl<S: TimeScale> Sub for Time<S> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TimeInstant trait
// ═══════════════════════════════════════════════════════════════════════════

/// Trait for types that represent a point in time.
///
/// Types implementing this trait can be used as endpoints of an
/// [`Interval`](crate::Interval).
pub trait TimeInstant: Copy + Clone + PartialEq + PartialOrd + Sized {
    /// The duration type used for arithmetic operations.
    type Duration;

    /// Compute the difference between two time instants.
    fn difference(&self, other: &Self) -> Self::Duration;

    /// Add a duration to this time instant.
    fn add_duration(&self, duration: Self::Duration) -> Self;

    /// Subtract a duration from this time instant.
    fn sub_duration(&self, duration: Self::Duration) -> Self;
}

impl TimeInstant for DateTime<FixedOffset> {
    type Duration = chrono::Duration;

    fn difference(&self, other: &Self) -> Self::Duration {
        *self - *other
    }

    fn add_duration(&self, duration: Self::Duration) -> Self {
        *self + duration
    }

    fn sub_duration(&self, duration: Self::Duration) -> Self {
        *self - duration
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::super::scales::J2000;
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};

    fn paris() -> FixedOffset {
        FixedOffset::east_opt(3_600).unwrap()
    }

    #[test]
    fn test_julian_day_of_j2000_epoch() {
        let epoch = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap().fixed_offset();
        assert_eq!(Time::<JD>::from_instant(&epoch).value(), 2_451_545.0);
        assert_eq!(Time::<J2000>::from_instant(&epoch).value(), 0.0);
    }

    #[test]
    fn test_from_instant_includes_offset() {
        // 2013-12-01 00:01 in Paris is 2013-11-30 23:01 UTC.
        let local = paris().with_ymd_and_hms(2013, 12, 1, 0, 1, 0).unwrap();
        let jd = Time::<JD>::from_instant(&local);
        assert!((jd.value() - 2_456_627.500_694_444_4).abs() < 1e-9);

        let utc = local.with_timezone(&Utc).fixed_offset();
        let shift = Time::<JD>::from_instant(&local) - Time::<JD>::from_instant(&utc);
        assert!((shift - Days::new(1.0 / 24.0)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_utc_roundtrip_within_a_millisecond() {
        let utc = FixedOffset::east_opt(0).unwrap();
        for millis in [0_i64, 946_728_000_123, 1_385_852_460_000, 1_718_966_836_175] {
            let instant = DateTime::from_timestamp_millis(millis).unwrap().with_timezone(&utc);
            let back = Time::<J2000>::from_instant(&instant).to_instant(utc).unwrap();
            let delta = (back - instant).num_milliseconds();
            assert!(delta.abs() <= 1, "roundtrip error: {delta} ms");
        }
    }

    #[test]
    fn test_offset_roundtrip_keeps_wall_clock() {
        let local = paris().with_ymd_and_hms(2013, 12, 1, 0, 1, 0).unwrap();
        let back = Time::<JD>::from_instant(&local)
            .to_instant(FixedOffset::east_opt(0).unwrap())
            .unwrap();
        assert_eq!(back.naive_utc(), local.naive_local());
    }

    #[test]
    fn test_to_instant_retags_offset() {
        let jd = Time::<JD>::new(2_451_545.0);
        let instant = jd.to_instant(paris()).unwrap();
        assert_eq!(instant.offset(), &paris());
        assert_eq!(instant.hour(), 13);
        assert_eq!(instant.timestamp(), 946_728_000);
    }

    #[test]
    fn test_nan_has_no_instant() {
        assert!(Time::<JD>::new(f64::NAN).to_instant(paris()).is_none());
        assert!(Time::<J2000>::new(f64::INFINITY).to_instant(paris()).is_none());
        assert!(!Time::<JD>::new(f64::NAN).is_finite());
    }

    #[test]
    fn test_scale_conversion() {
        let d = Time::<J2000>::new(5_083.0);
        let jd: Time<JD> = d.to::<JD>();
        assert_eq!(jd.value(), 2_456_628.0);
        assert_eq!(jd.to::<J2000>(), d);
    }

    #[test]
    fn test_arithmetic() {
        let noon = Time::<JD>::new(2_456_628.0);
        let set = noon + Days::new(0.25);
        let rise = noon - (set - noon);
        assert_eq!(rise.value(), 2_456_627.75);
        assert_eq!(set - rise, Days::new(0.5));
        assert_eq!(rise + Days::new(0.5), set);
        assert_eq!(set - Days::new(0.5), rise);
    }

    #[test]
    fn test_datetime_instant_uses_chrono_durations() {
        let start = paris().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = paris().with_ymd_and_hms(2024, 1, 1, 6, 30, 0).unwrap();
        let diff = end.difference(&start);
        assert_eq!(diff.num_minutes(), 390);
        assert_eq!(start.add_duration(diff), end);
        assert_eq!(end.sub_duration(diff), start);
    }

    #[test]
    fn test_display() {
        let jd = Time::<JD>::new(2_451_545.0);
        assert!(format!("{jd}").contains("Julian Day"));
        let d = Time::<J2000>::new(1.5);
        assert!(format!("{d}").contains("J2000"));
    }
}

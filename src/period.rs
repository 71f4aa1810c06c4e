// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`LocalPeriod`]: interval between two offset-tagged civil instants

use super::TimeInstant;
use chrono::{DateTime, FixedOffset};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

/// Represents an interval between two instants.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use suncalc::LocalPeriod;
///
/// let start = DateTime::parse_from_rfc3339("2013-12-01T09:17:10+01:00").unwrap();
/// let end = DateTime::parse_from_rfc3339("2013-12-01T16:05:23+01:00").unwrap();
/// let period = LocalPeriod::new(start, end);
/// assert_eq!(period.duration().num_minutes(), 408);
/// assert!(period.contains(&start));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Interval between two civil instants carrying a fixed UTC offset.
pub type LocalPeriod = Interval<DateTime<FixedOffset>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// `true` when `instant` lies within `[start, end]` (both ends inclusive).
    pub fn contains(&self, instant: &T) -> bool {
        self.start <= *instant && *instant <= self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl Interval<DateTime<FixedOffset>> {
    /// Returns the duration in whole milliseconds.
    pub fn duration_millis(&self) -> i64 {
        self.duration().num_milliseconds()
    }
}

// Serde: civil periods are written as RFC 3339 strings, which keep the offset.
#[cfg(feature = "serde")]
impl Serialize for Interval<DateTime<FixedOffset>> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start", &self.start.to_rfc3339())?;
        s.serialize_field("end", &self.end.to_rfc3339())?;
        s.end()
    }
}

/// Returns the gaps (complement) of `periods` within the bounding `outer` period.
///
/// Given a sorted, non-overlapping list of sub-periods and a bounding period,
/// this returns the time intervals NOT covered by any sub-period, in
/// chronological order. Runs in a single O(n) pass.
pub fn complement_within<T: TimeInstant>(
    outer: Interval<T>,
    periods: &[Interval<T>],
) -> Vec<Interval<T>> {
    let mut gaps = Vec::new();
    let mut cursor = outer.start;
    for p in periods {
        if p.start > cursor {
            gaps.push(Interval::new(cursor, p.start));
        }
        if p.end > cursor {
            cursor = p.end;
        }
    }
    if cursor < outer.end {
        gaps.push(Interval::new(cursor, outer.end));
    }
    gaps
}

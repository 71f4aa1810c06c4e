// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Segmentation of a calendar day into solar phases.
//!
//! [`solar_phases`] locates the local solar transit of the requested day,
//! inverts every [`PhaseBoundary`] elevation into an hour angle around that
//! transit and returns the 13 [`SunPhase`] periods in chronological order.
//!
//! ## Unreachable elevations
//!
//! Near the poles the Sun may never reach a given elevation on a given day
//! (midnight sun, polar night). The affected boundaries resolve to `None`
//! and every phase touching them is *degenerate*: see
//! [`PhaseInstance::is_degenerate`] and [`SolarDay::gaps`].
//!
//! ## Day edges
//!
//! The night is split into two halves that bound the day. After resolution
//! the first phase always starts at `00:00:00.000` and the last always ends
//! at `23:59:59.999` local time, and every other boundary is bounded into
//! that window.
//!
//! ## Halves
//!
//! Daylight splits at solar noon. The night splits at the nadirs on either
//! side of the transit. [`SolarDay::daylight_rising`] and its three siblings
//! expose these halves, built from [`PhaseDefinition::DAYLIGHT_RISING`] and
//! the related constants and bounded into the day like every other boundary.

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use log::{debug, trace};
use qtty::{Days, Degrees, Radian, Radians};

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Serialize, Serializer};

use crate::coordinates::Observer;
use crate::instant::Time;
use crate::period::{complement_within, LocalPeriod};
use crate::phase::{angles, PhaseBoundary, PhaseDefinition, SunPhase};
use crate::scales::{J2000, JD};
use crate::sun::{
    approx_transit, ecliptic_longitude, equation_of_center, julian_cycle, solar_mean_anomaly, solar_transit,
};
use crate::transform::{declination, hour_angle_at_altitude};

/// Last millisecond of a civil day, counted from midnight.
const LAST_MS_OF_DAY: i64 = 86_399_999;

// ═══════════════════════════════════════════════════════════════════════════
// PhaseInstance
// ═══════════════════════════════════════════════════════════════════════════

/// A [`SunPhase`] resolved for one day and location.
///
/// `start`/`end` are `None` when the Sun never crosses the corresponding
/// elevation that day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseInstance {
    phase: SunPhase,
    start: Option<DateTime<FixedOffset>>,
    end: Option<DateTime<FixedOffset>>,
}

impl PhaseInstance {
    #[inline]
    pub const fn phase(&self) -> SunPhase {
        self.phase
    }

    #[inline]
    pub const fn definition(&self) -> PhaseDefinition {
        self.phase.definition()
    }

    #[inline]
    pub const fn start(&self) -> Option<DateTime<FixedOffset>> {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Option<DateTime<FixedOffset>> {
        self.end
    }

    /// `true` when at least one boundary could not be resolved.
    pub fn is_degenerate(&self) -> bool {
        self.start.is_none() || self.end.is_none()
    }

    /// The resolved period, if both boundaries are known.
    pub fn period(&self) -> Option<LocalPeriod> {
        Some(LocalPeriod::new(self.start?, self.end?))
    }

    pub fn duration(&self) -> Option<Duration> {
        self.period().map(|p| p.duration())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SolarDay
// ═══════════════════════════════════════════════════════════════════════════

/// The 13 solar phases of one calendar day at one location.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarDay {
    day: LocalPeriod,
    noon: Option<DateTime<FixedOffset>>,
    nadir: Option<DateTime<FixedOffset>>,
    phases: [PhaseInstance; 13],
    daylight_rising: Option<LocalPeriod>,
    daylight_setting: Option<LocalPeriod>,
    night_setting: Option<LocalPeriod>,
    night_rising: Option<LocalPeriod>,
}

impl SolarDay {
    /// `00:00:00.000` to `23:59:59.999` of the requested day.
    pub const fn day(&self) -> LocalPeriod {
        self.day
    }

    /// Phases in chronological order, indexed like [`SunPhase::ALL`].
    pub const fn phases(&self) -> &[PhaseInstance; 13] {
        &self.phases
    }

    pub const fn get(&self, phase: SunPhase) -> &PhaseInstance {
        &self.phases[phase.index()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhaseInstance> {
        self.phases.iter()
    }

    /// Local solar transit (the Sun on the meridian).
    pub const fn solar_noon(&self) -> Option<DateTime<FixedOffset>> {
        self.noon
    }

    /// Half a day before [`solar_noon`](Self::solar_noon).
    pub const fn nadir(&self) -> Option<DateTime<FixedOffset>> {
        self.nadir
    }

    /// Start of [`SunPhase::Daylight`] to solar noon.
    pub const fn daylight_rising(&self) -> Option<LocalPeriod> {
        self.daylight_rising
    }

    /// Solar noon to the end of [`SunPhase::Daylight`].
    pub const fn daylight_setting(&self) -> Option<LocalPeriod> {
        self.daylight_setting
    }

    /// Start of [`SunPhase::NightEvening`] to the following nadir, or to the
    /// end of the day when that nadir falls after midnight.
    pub const fn night_setting(&self) -> Option<LocalPeriod> {
        self.night_setting
    }

    /// [`nadir`](Self::nadir) to the end of [`SunPhase::NightMorning`].
    pub const fn night_rising(&self) -> Option<LocalPeriod> {
        self.night_rising
    }

    /// Phase in effect at `instant`.
    ///
    /// On a boundary shared by two phases the later one is returned. `None`
    /// outside the day or inside a stretch covered only by degenerate phases.
    pub fn phase_at(&self, instant: &DateTime<FixedOffset>) -> Option<SunPhase> {
        self.phases
            .iter()
            .rev()
            .find(|p| p.period().is_some_and(|period| period.contains(instant)))
            .map(PhaseInstance::phase)
    }

    /// Stretches of the day not covered by any resolved phase.
    ///
    /// Empty whenever the Sun crosses every threshold; at high latitudes it
    /// holds the parts of the day swallowed by degenerate phases.
    pub fn gaps(&self) -> Vec<LocalPeriod> {
        let resolved: Vec<LocalPeriod> = self.phases.iter().filter_map(PhaseInstance::period).collect();
        complement_within(self.day, &resolved)
    }
}

impl<'a> IntoIterator for &'a SolarDay {
    type Item = &'a PhaseInstance;
    type IntoIter = std::slice::Iter<'a, PhaseInstance>;

    fn into_iter(self) -> Self::IntoIter {
        self.phases.iter()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Engine
// ═══════════════════════════════════════════════════════════════════════════

/// Solar quantities frozen at the transit of one day.
#[derive(Debug, Copy, Clone)]
struct TransitFrame {
    observer: Observer,
    /// Julian cycle.
    n: f64,
    m: Radians,
    l: Radians,
    dec: Radians,
    noon: Time<JD>,
}

impl TransitFrame {
    /// `midnight` selects the calendar day; the cycle is taken at local noon
    /// so the requested time of day never shifts the transit by one day.
    fn new(midnight: &DateTime<FixedOffset>, observer: Observer) -> Self {
        let d = Time::<J2000>::from_instant(midnight) + Days::new(0.5);
        let n = julian_cycle(d, observer.lw);
        let ds = approx_transit(Radians::new(0.0), observer.lw, n);
        let m = solar_mean_anomaly(ds);
        let l = ecliptic_longitude(m, equation_of_center(m));

        Self {
            observer,
            n,
            m,
            l,
            dec: declination(l, Radians::new(0.0)),
            noon: solar_transit(ds, m, l),
        }
    }

    /// Julian day at which the Sun crosses `boundary`; `NaN` if never.
    fn resolve(&self, boundary: PhaseBoundary) -> Time<JD> {
        if boundary.angle == angles::SOLAR_NOON {
            return self.noon;
        }
        if boundary.angle == angles::NADIR {
            let half = Days::new(0.5);
            return if boundary.rising { self.noon - half } else { self.noon + half };
        }

        let h = boundary.angle.to::<Radian>();
        let w = hour_angle_at_altitude(h, self.observer.phi, self.dec);
        let set = solar_transit(approx_transit(w, self.observer.lw, self.n), self.m, self.l);

        if boundary.rising {
            self.noon - (set - self.noon)
        } else {
            set
        }
    }

    fn instant(&self, boundary: PhaseBoundary, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
        let jd = self.resolve(boundary);
        if !jd.is_finite() {
            debug!(
                "Sun does not reach {} ({}) at latitude {:.4} rad",
                boundary.angle,
                if boundary.rising { "rising" } else { "setting" },
                self.observer.phi.value()
            );
        }
        jd.to_instant(offset)
    }

    /// `definition` resolved and bounded into `day`.
    fn period(&self, definition: PhaseDefinition, offset: FixedOffset, day: LocalPeriod) -> Option<LocalPeriod> {
        let bound = |b| self.instant(b, offset).map(|t| t.clamp(day.start, day.end));
        Some(LocalPeriod::new(bound(definition.start)?, bound(definition.end)?))
    }
}

/// First instant of the calendar day of `date`, in its own offset.
fn local_midnight(date: &DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    *date
        - Duration::seconds(i64::from(date.num_seconds_from_midnight()))
        - Duration::nanoseconds(i64::from(date.nanosecond()))
}

/// Bound every resolved boundary into `day`, then pin the outer edges of the
/// two night halves to the edges of the day.
fn clamp_to_day(raw: [PhaseInstance; 13], day: LocalPeriod) -> [PhaseInstance; 13] {
    let bound = |t: Option<DateTime<FixedOffset>>| t.map(|t| t.clamp(day.start, day.end));
    let last = raw.len() - 1;

    std::array::from_fn(|i| PhaseInstance {
        phase: raw[i].phase,
        start: if i == 0 { Some(day.start) } else { bound(raw[i].start) },
        end: if i == last { Some(day.end) } else { bound(raw[i].end) },
    })
}

/// Solar phases of the calendar day of `date` at `latitude`/`longitude`.
///
/// Only the calendar day and the UTC offset of `date` are used; every
/// returned instant carries that same offset.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Timelike};
/// use qtty::Degrees;
/// use suncalc::{solar_phases, SunPhase};
///
/// let date = DateTime::parse_from_rfc3339("2013-12-01T00:01:00+01:00").unwrap();
/// let day = solar_phases(&date, Degrees::new(48.818684), Degrees::new(2.323096));
///
/// let daylight = day.get(SunPhase::Daylight);
/// assert_eq!(daylight.start().unwrap().hour(), 9);
/// assert_eq!(daylight.end().unwrap().hour(), 16);
/// ```
pub fn solar_phases(date: &DateTime<FixedOffset>, latitude: Degrees, longitude: Degrees) -> SolarDay {
    let offset = *date.offset();
    let midnight = local_midnight(date);
    let day = LocalPeriod::new(midnight, midnight + Duration::milliseconds(LAST_MS_OF_DAY));

    let frame = TransitFrame::new(&midnight, Observer::new(latitude, longitude));
    trace!(
        "solar phases for {}: cycle {}, transit JD {}",
        midnight.date_naive(),
        frame.n,
        frame.noon.value()
    );

    let raw = SunPhase::ALL.map(|phase| {
        let def = phase.definition();
        PhaseInstance {
            phase,
            start: frame.instant(def.start, offset),
            end: frame.instant(def.end, offset),
        }
    });

    SolarDay {
        day,
        noon: frame.instant(PhaseBoundary::rising(angles::SOLAR_NOON), offset),
        nadir: frame.instant(PhaseBoundary::rising(angles::NADIR), offset),
        phases: clamp_to_day(raw, day),
        daylight_rising: frame.period(PhaseDefinition::DAYLIGHT_RISING, offset, day),
        daylight_setting: frame.period(PhaseDefinition::DAYLIGHT_SETTING, offset, day),
        night_setting: frame.period(PhaseDefinition::NIGHT_SETTING, offset, day),
        night_rising: frame.period(PhaseDefinition::NIGHT_RISING, offset, day),
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for PhaseInstance {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("PhaseInstance", 3)?;
        s.serialize_field("phase", &self.phase)?;
        s.serialize_field("start", &self.start.map(|t| t.to_rfc3339()))?;
        s.serialize_field("end", &self.end.map(|t| t.to_rfc3339()))?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl Serialize for SolarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("SolarDay", 8)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("solar_noon", &self.noon.map(|t| t.to_rfc3339()))?;
        s.serialize_field("nadir", &self.nadir.map(|t| t.to_rfc3339()))?;
        s.serialize_field("phases", &self.phases)?;
        s.serialize_field("daylight_rising", &self.daylight_rising)?;
        s.serialize_field("daylight_setting", &self.daylight_setting)?;
        s.serialize_field("night_setting", &self.night_setting)?;
        s.serialize_field("night_rising", &self.night_rising)?;
        s.end()
    }
}

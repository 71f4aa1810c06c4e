// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Named solar phases of a day and the elevation bands that delimit them.
//!
//! [`SunPhase`] is a closed set of 13 phases in chronological order, from the
//! morning half of the night to its evening half. Each phase is bounded by two
//! [`PhaseBoundary`] values: a solar elevation and whether the Sun is rising
//! or setting when it crosses it.
//!
//! ```text
//!   Night │ Astro │ Naut │ Civil │ Sunrise │ Golden │ Daylight │ Golden │ Sunset │ Civil │ Naut │ Astro │ Night
//!  -18↓   -18↑   -12↑   -6↑   -0.833↑   -0.3↑     6↑        6↓      -0.3↓   -0.833↓  -6↓   -12↓   -18↓  -18↑
//! ```

use qtty::Degrees;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SunCalcError;

/// Solar elevation thresholds.
pub mod angles {
    use qtty::Degrees;

    /// Resolved to the solar transit, not by hour-angle inversion.
    pub const SOLAR_NOON: Degrees = Degrees::new(90.0);
    pub const DAYLIGHT_START: Degrees = Degrees::new(6.0);
    pub const GOLDEN_HOUR_MORNING_START: Degrees = Degrees::new(-0.3);
    /// Upper limb on the horizon, refraction included.
    pub const SUNRISE_START: Degrees = Degrees::new(-0.833);
    pub const CIVIL_TWILIGHT_MORNING_START: Degrees = Degrees::new(-6.0);
    pub const NAUTICAL_TWILIGHT_MORNING_START: Degrees = Degrees::new(-12.0);
    pub const NIGHT_START: Degrees = Degrees::new(-18.0);
    /// Half a day from the transit: before it when rising, after it when
    /// setting.
    pub const NADIR: Degrees = Degrees::new(-90.0);
}

/// One edge of a phase: the Sun crosses `angle`, going up if `rising`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseBoundary {
    pub angle: Degrees,
    pub rising: bool,
}

impl PhaseBoundary {
    pub const fn rising(angle: Degrees) -> Self {
        Self { angle, rising: true }
    }

    pub const fn setting(angle: Degrees) -> Self {
        Self {
            angle,
            rising: false,
        }
    }
}

/// Start and end boundary of a phase.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseDefinition {
    pub start: PhaseBoundary,
    pub end: PhaseBoundary,
}

impl PhaseDefinition {
    /// Morning half of [`SunPhase::Daylight`], up to solar noon.
    pub const DAYLIGHT_RISING: Self = Self {
        start: PhaseBoundary::rising(angles::DAYLIGHT_START),
        end: PhaseBoundary::rising(angles::SOLAR_NOON),
    };

    /// Afternoon half of [`SunPhase::Daylight`], from solar noon.
    pub const DAYLIGHT_SETTING: Self = Self {
        start: PhaseBoundary::setting(angles::SOLAR_NOON),
        end: PhaseBoundary::setting(angles::DAYLIGHT_START),
    };

    /// Evening night, up to the nadir that follows the transit.
    pub const NIGHT_SETTING: Self = Self {
        start: PhaseBoundary::setting(angles::NIGHT_START),
        end: PhaseBoundary::setting(angles::NADIR),
    };

    /// Morning night, from the nadir that precedes the transit.
    pub const NIGHT_RISING: Self = Self {
        start: PhaseBoundary::rising(angles::NADIR),
        end: PhaseBoundary::rising(angles::NIGHT_START),
    };
}

/// A named solar phase.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SunPhase {
    NightMorning,
    AstronomicalTwilightMorning,
    NauticalTwilightMorning,
    CivilTwilightMorning,
    Sunrise,
    GoldenHourMorning,
    Daylight,
    GoldenHourEvening,
    Sunset,
    CivilTwilightEvening,
    NauticalTwilightEvening,
    AstronomicalTwilightEvening,
    NightEvening,
}

impl SunPhase {
    /// Every phase, in the order they occur during a day.
    pub const ALL: [SunPhase; 13] = [
        SunPhase::NightMorning,
        SunPhase::AstronomicalTwilightMorning,
        SunPhase::NauticalTwilightMorning,
        SunPhase::CivilTwilightMorning,
        SunPhase::Sunrise,
        SunPhase::GoldenHourMorning,
        SunPhase::Daylight,
        SunPhase::GoldenHourEvening,
        SunPhase::Sunset,
        SunPhase::CivilTwilightEvening,
        SunPhase::NauticalTwilightEvening,
        SunPhase::AstronomicalTwilightEvening,
        SunPhase::NightEvening,
    ];

    /// Elevation band of this phase.
    pub const fn definition(self) -> PhaseDefinition {
        use angles::*;
        use PhaseBoundary as B;

        let (start, end) = match self {
            SunPhase::NightMorning => (B::setting(NIGHT_START), B::rising(NIGHT_START)),
            SunPhase::AstronomicalTwilightMorning => (
                B::rising(NIGHT_START),
                B::rising(NAUTICAL_TWILIGHT_MORNING_START),
            ),
            SunPhase::NauticalTwilightMorning => (
                B::rising(NAUTICAL_TWILIGHT_MORNING_START),
                B::rising(CIVIL_TWILIGHT_MORNING_START),
            ),
            SunPhase::CivilTwilightMorning => {
                (B::rising(CIVIL_TWILIGHT_MORNING_START), B::rising(SUNRISE_START))
            }
            SunPhase::Sunrise => (B::rising(SUNRISE_START), B::rising(GOLDEN_HOUR_MORNING_START)),
            SunPhase::GoldenHourMorning => {
                (B::rising(GOLDEN_HOUR_MORNING_START), B::rising(DAYLIGHT_START))
            }
            SunPhase::Daylight => (B::rising(DAYLIGHT_START), B::setting(DAYLIGHT_START)),
            SunPhase::GoldenHourEvening => {
                (B::setting(DAYLIGHT_START), B::setting(GOLDEN_HOUR_MORNING_START))
            }
            SunPhase::Sunset => (B::setting(GOLDEN_HOUR_MORNING_START), B::setting(SUNRISE_START)),
            SunPhase::CivilTwilightEvening => {
                (B::setting(SUNRISE_START), B::setting(CIVIL_TWILIGHT_MORNING_START))
            }
            SunPhase::NauticalTwilightEvening => (
                B::setting(CIVIL_TWILIGHT_MORNING_START),
                B::setting(NAUTICAL_TWILIGHT_MORNING_START),
            ),
            SunPhase::AstronomicalTwilightEvening => {
                (B::setting(NAUTICAL_TWILIGHT_MORNING_START), B::setting(NIGHT_START))
            }
            SunPhase::NightEvening => (B::setting(NIGHT_START), B::rising(NIGHT_START)),
        };
        PhaseDefinition { start, end }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            SunPhase::NightMorning => "Night Morning",
            SunPhase::AstronomicalTwilightMorning => "Twilight Astronomical Morning",
            SunPhase::NauticalTwilightMorning => "Twilight Nautical Morning",
            SunPhase::CivilTwilightMorning => "Twilight Civil Morning",
            SunPhase::Sunrise => "Sunrise",
            SunPhase::GoldenHourMorning => "Golden Hour Morning",
            SunPhase::Daylight => "Daylight",
            SunPhase::GoldenHourEvening => "Golden Hour Evening",
            SunPhase::Sunset => "Sunset",
            SunPhase::CivilTwilightEvening => "Twilight Civil Evening",
            SunPhase::NauticalTwilightEvening => "Twilight Nautical Evening",
            SunPhase::AstronomicalTwilightEvening => "Twilight Astronomical Evening",
            SunPhase::NightEvening => "Night Evening",
        }
    }

    /// Position of the phase within [`SunPhase::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Lower-case alphanumerics only, so `"Night Morning"`, `"night_morning"`
/// and `"NightMorning"` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for SunPhase {
    type Err = SunCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        SunPhase::ALL
            .into_iter()
            .find(|phase| normalize(phase.label()) == wanted)
            .ok_or_else(|| SunCalcError::UnknownPhase(s.to_owned()))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for SunPhase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SunPhase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn table_is_chained() {
        // Each phase starts where the previous one ended.
        for pair in SunPhase::ALL.windows(2) {
            assert_eq!(
                pair[0].definition().end,
                pair[1].definition().start,
                "{} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn night_wraps_around_midnight() {
        let first = SunPhase::NightMorning.definition();
        let last = SunPhase::NightEvening.definition();
        assert_eq!(first, last);
        assert_eq!(first.start, PhaseBoundary::setting(angles::NIGHT_START));
        assert_eq!(first.end, PhaseBoundary::rising(angles::NIGHT_START));
    }

    #[test]
    fn halves_split_daylight_and_night() {
        let daylight = SunPhase::Daylight.definition();
        assert_eq!(PhaseDefinition::DAYLIGHT_RISING.start, daylight.start);
        assert_eq!(PhaseDefinition::DAYLIGHT_SETTING.end, daylight.end);
        assert_eq!(
            PhaseDefinition::DAYLIGHT_RISING.end.angle,
            PhaseDefinition::DAYLIGHT_SETTING.start.angle
        );

        let night = SunPhase::NightEvening.definition();
        assert_eq!(PhaseDefinition::NIGHT_SETTING.start, night.start);
        assert_eq!(PhaseDefinition::NIGHT_RISING.end, night.end);
        assert_eq!(PhaseDefinition::NIGHT_SETTING.end, PhaseBoundary::setting(angles::NADIR));
        assert_eq!(PhaseDefinition::NIGHT_RISING.start, PhaseBoundary::rising(angles::NADIR));
    }

    #[test]
    fn display_honours_width_and_alignment() {
        assert_eq!(format!("{:<10}|", SunPhase::Sunset), "Sunset    |");
        assert_eq!(format!("{:>10}|", SunPhase::Sunset), "    Sunset|");
        assert_eq!(format!("{:^8}", SunPhase::Sunset), " Sunset ");
        assert_eq!(format!("{:.3}", SunPhase::Daylight), "Day");
    }

    #[test]
    fn index_matches_table_order() {
        for (i, phase) in SunPhase::ALL.iter().enumerate() {
            assert_eq!(phase.index(), i);
        }
    }

    #[rstest]
    #[case(SunPhase::Sunrise, -0.833, true, -0.3, true)]
    #[case(SunPhase::Daylight, 6.0, true, 6.0, false)]
    #[case(SunPhase::GoldenHourEvening, 6.0, false, -0.3, false)]
    #[case(SunPhase::CivilTwilightEvening, -0.833, false, -6.0, false)]
    #[case(SunPhase::AstronomicalTwilightMorning, -18.0, true, -12.0, true)]
    fn definitions(
        #[case] phase: SunPhase,
        #[case] start: f64,
        #[case] start_rising: bool,
        #[case] end: f64,
        #[case] end_rising: bool,
    ) {
        let def = phase.definition();
        assert_eq!(def.start.angle.value(), start);
        assert_eq!(def.start.rising, start_rising);
        assert_eq!(def.end.angle.value(), end);
        assert_eq!(def.end.rising, end_rising);
    }

    #[rstest]
    #[case("Night Morning", SunPhase::NightMorning)]
    #[case("twilight astronomical evening", SunPhase::AstronomicalTwilightEvening)]
    #[case("GOLDEN_HOUR_MORNING", SunPhase::GoldenHourMorning)]
    #[case("twilight-civil-evening", SunPhase::CivilTwilightEvening)]
    #[case("  Daylight ", SunPhase::Daylight)]
    fn parse_labels(#[case] name: &str, #[case] expected: SunPhase) {
        assert_eq!(name.parse::<SunPhase>(), Ok(expected));
    }

    #[test]
    fn labels_roundtrip_through_display() {
        for phase in SunPhase::ALL {
            assert_eq!(phase.to_string().parse::<SunPhase>(), Ok(phase));
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "Blue Hour".parse::<SunPhase>().unwrap_err();
        assert_eq!(err, SunCalcError::UnknownPhase("Blue Hour".into()));
        assert!(err.to_string().contains("Blue Hour"));
    }
}

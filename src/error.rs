// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type for the crate.
//!
//! Astronomical edge cases (polar day, polar night) are *not* errors: they
//! surface as `NaN` angles or unresolved (`None`) phase boundaries. The only
//! failure a caller can trigger is asking for something that does not exist.

use thiserror::Error;

/// Errors returned by `suncalc`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SunCalcError {
    /// A phase name that matches none of the [`SunPhase`](crate::SunPhase) labels.
    #[error("unknown sun phase: {0:?}")]
    UnknownPhase(String),
}

/// Result alias for `suncalc` operations.
pub type Result<T> = std::result::Result<T, SunCalcError>;

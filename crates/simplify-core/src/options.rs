// File: crates/simplify-core/src/options.rs
// Summary: Simplifier configuration (tolerance + quality mode) with validation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{InvalidInput, SimplifyError};

/// Speed/fidelity trade-off of the simplifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Quality {
    /// Radial-distance pre-filter, then perpendicular-distance simplification.
    Fast,
    /// Perpendicular-distance simplification only.
    #[default]
    Precise,
}

impl Quality {
    /// Map the legacy `highQuality` flag.
    pub const fn from_high_quality(high_quality: bool) -> Self {
        if high_quality { Quality::Precise } else { Quality::Fast }
    }

    pub const fn is_high_quality(self) -> bool { matches!(self, Quality::Precise) }

    pub const fn as_str(self) -> &'static str {
        match self {
            Quality::Fast => "fast",
            Quality::Precise => "precise",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown quality '{0}', expected 'fast' or 'precise'")]
pub struct ParseQualityError(String);

impl FromStr for Quality {
    type Err = ParseQualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "low" => Ok(Quality::Fast),
            "precise" | "high" => Ok(Quality::Precise),
            other => Err(ParseQualityError(other.to_string())),
        }
    }
}

/// Options for a single simplification run.
/// Contract: `tolerance` is finite and >= 0 (checked by [`SimplifyOptions::validate`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimplifyOptions {
    /// Maximum deviation (in data units) a dropped point may have had from the kept curve.
    pub tolerance: f64,
    pub quality: Quality,
}

impl Default for SimplifyOptions {
    fn default() -> Self {
        Self { tolerance: 0.1, quality: Quality::Precise }
    }
}

impl SimplifyOptions {
    pub const fn new(tolerance: f64) -> Self {
        Self { tolerance, quality: Quality::Precise }
    }

    pub const fn fast(tolerance: f64) -> Self {
        Self { tolerance, quality: Quality::Fast }
    }

    pub const fn precise(tolerance: f64) -> Self {
        Self { tolerance, quality: Quality::Precise }
    }

    pub const fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn sq_tolerance(&self) -> f64 { self.tolerance * self.tolerance }

    /// A zero tolerance keeps every point.
    pub fn is_noop(&self) -> bool { self.tolerance == 0.0 }

    pub fn validate(&self) -> Result<(), SimplifyError> {
        if !self.tolerance.is_finite() {
            return Err(InvalidInput::NonFiniteTolerance(self.tolerance).into());
        }
        if self.tolerance < 0.0 {
            return Err(InvalidInput::NegativeTolerance(self.tolerance).into());
        }
        Ok(())
    }
}

//! Adapted font sizes
//!
//! Font point sizes adapt like any other length, against the
//! orientation-preferred axis, so text keeps its proportion of the
//! screen across devices and rotations.

use crate::domain::scale::ScaleEngine;
use crate::host::ScreenMetrics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Bold,
}

/// A font request with a design-time point size
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub weight: FontWeight,
    /// Point size authored against the baseline screen
    pub size: f64,
}

impl FontSpec {
    pub fn regular(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Regular,
            size,
        }
    }

    pub fn bold(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Bold,
            size,
        }
    }

    /// Returns the point size adapted to the current screen
    pub fn point_size(&self, engine: &ScaleEngine, metrics: &ScreenMetrics) -> f64 {
        engine.adapted_length(self.size, metrics.preferred_axis(), metrics.size())
    }
}

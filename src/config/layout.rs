//! Design-time layout values and their resolution
//!
//! A [`LayoutConfig`] declares the dimensions a screen was designed
//! with, each tied to the axis it scales against. Resolving the config
//! against the current screen metrics produces plain numbers the host
//! feeds into its own layout primitives. The view layer owns no mutable
//! scaled state; it re-resolves whenever the screen metrics change.

use std::collections::HashMap;

use thiserror::Error;

use crate::domain::core::{Axis, Size};
use crate::domain::scale::ScaleEngine;
use crate::host::ScreenMetrics;

/// Axis a configured value scales against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Always the given axis, regardless of orientation
    Fixed(Axis),
    /// The orientation-preferred axis of the current screen
    Preferred,
}

impl Anchor {
    fn resolve(self, metrics: &ScreenMetrics) -> Axis {
        match self {
            Anchor::Fixed(axis) => axis,
            Anchor::Preferred => metrics.preferred_axis(),
        }
    }
}

/// A named scalar dimension authored against the baseline screen
///
/// Covers spacings, corner radii, font sizes: anything one number wide.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthSpec {
    pub name: String,
    pub value: f64,
    pub anchor: Anchor,
}

impl LengthSpec {
    pub fn new(name: impl Into<String>, value: f64, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            value,
            anchor,
        }
    }
}

/// A named two-dimensional size authored against the baseline screen
#[derive(Debug, Clone, PartialEq)]
pub struct SizeSpec {
    pub name: String,
    pub size: Size,
    pub anchor: Anchor,
}

impl SizeSpec {
    pub fn new(name: impl Into<String>, size: Size, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            size,
            anchor,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("Layout entry '{name}' is declared more than once")]
    DuplicateName { name: String },
    #[error("Layout entry '{name}' has a non-finite value")]
    NonFiniteValue { name: String },
    #[error("Size entry '{name}' has a zero anchor dimension; its aspect ratio would be undefined")]
    ZeroAnchorDimension { name: String },
}

/// Declarative set of design-time layout values
///
/// Validated once at construction so that resolution can never divide by
/// a zero anchor dimension, mirroring the fail-fast policy of
/// [`crate::domain::catalog::DeviceCatalog`].
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    lengths: Vec<LengthSpec>,
    sizes: Vec<SizeSpec>,
}

impl LayoutConfig {
    /// Creates a validated layout config
    ///
    /// # Arguments
    /// * `lengths` - Scalar dimensions; values must be finite
    /// * `sizes` - Two-dimensional sizes; the anchor dimension must be
    ///   non-zero, and `Preferred`-anchored sizes need both dimensions
    ///   non-zero since either axis may become the anchor after an
    ///   orientation change
    pub fn new(lengths: Vec<LengthSpec>, sizes: Vec<SizeSpec>) -> Result<Self, LayoutError> {
        let mut seen: Vec<&str> = Vec::with_capacity(lengths.len() + sizes.len());
        for name in lengths
            .iter()
            .map(|spec| spec.name.as_str())
            .chain(sizes.iter().map(|spec| spec.name.as_str()))
        {
            if seen.contains(&name) {
                return Err(LayoutError::DuplicateName {
                    name: name.to_string(),
                });
            }
            seen.push(name);
        }

        for spec in &lengths {
            if !spec.value.is_finite() {
                return Err(LayoutError::NonFiniteValue {
                    name: spec.name.clone(),
                });
            }
        }

        for spec in &sizes {
            if !spec.size.width.is_finite() || !spec.size.height.is_finite() {
                return Err(LayoutError::NonFiniteValue {
                    name: spec.name.clone(),
                });
            }
            let anchor_ok = match spec.anchor {
                Anchor::Fixed(axis) => spec.size.along(axis) != 0.0,
                Anchor::Preferred => spec.size.width != 0.0 && spec.size.height != 0.0,
            };
            if !anchor_ok {
                return Err(LayoutError::ZeroAnchorDimension {
                    name: spec.name.clone(),
                });
            }
        }

        Ok(Self { lengths, sizes })
    }

    /// Resolves every configured value against the current screen
    ///
    /// Pure with respect to its arguments; the host calls it again after
    /// every [`ScreenMetrics::update`] that reports a change.
    pub fn resolve(&self, engine: &ScaleEngine, metrics: &ScreenMetrics) -> ResolvedLayout {
        let screen = metrics.size();

        let lengths = self
            .lengths
            .iter()
            .map(|spec| {
                let axis = spec.anchor.resolve(metrics);
                let value = engine.adapted_length(spec.value, axis, screen);
                (spec.name.clone(), value)
            })
            .collect();

        let sizes = self
            .sizes
            .iter()
            .map(|spec| {
                let axis = spec.anchor.resolve(metrics);
                let size = engine.adapted_size(spec.size, axis, screen);
                (spec.name.clone(), size)
            })
            .collect();

        tracing::debug!(
            screen = ?screen,
            orientation = ?metrics.orientation(),
            entries = self.lengths.len() + self.sizes.len(),
            "resolved layout config"
        );

        ResolvedLayout { lengths, sizes }
    }
}

/// Scaled layout values for one specific screen
///
/// A plain value object; the host applies these to its layout primitives
/// and throws the instance away on the next screen change.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout {
    lengths: HashMap<String, f64>,
    sizes: HashMap<String, Size>,
}

impl ResolvedLayout {
    pub fn length(&self, name: &str) -> Option<f64> {
        self.lengths.get(name).copied()
    }

    pub fn size(&self, name: &str) -> Option<Size> {
        self.sizes.get(name).copied()
    }
}

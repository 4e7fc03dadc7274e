//! Core domain types and operations
//!
//! This module defines pure geometric types that work exclusively with
//! point values and have no knowledge of any host UI framework.

/// Two-dimensional size in points
///
/// This is the fundamental building block for all scaling calculations.
/// A `Size` describes either a device screen resolution (portrait)
/// or the dimensions of an individual UI element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the component selected by the given axis
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// Returns the width-to-height ratio
    ///
    /// Undefined for a zero height; callers guard the height themselves.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Returns true if both components are strictly positive and finite
    ///
    /// Screen resolutions must satisfy this before they can act as a
    /// scaling baseline.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Screen dimension a ratio is computed against
///
/// Every adaptation call selects exactly one axis; there is no implicit
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// Orientation of a screen computed from its current bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn from_size(size: Size) -> Self {
        if size.height >= size.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }

    /// Returns the axis that orientation-following layout values scale
    /// against: width while portrait, height while landscape
    pub fn preferred_axis(self) -> Axis {
        match self {
            Orientation::Portrait => Axis::Width,
            Orientation::Landscape => Axis::Height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_component_selection() {
        let size = Size::new(320.0, 568.0);
        assert_eq!(size.along(Axis::Width), 320.0);
        assert_eq!(size.along(Axis::Height), 568.0);
    }

    #[test]
    fn size_validity() {
        assert!(Size::new(320.0, 568.0).is_valid());
        assert!(!Size::new(0.0, 568.0).is_valid());
        assert!(!Size::new(320.0, -1.0).is_valid());
        assert!(!Size::new(f64::NAN, 568.0).is_valid());
        assert!(!Size::new(320.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn aspect_ratio() {
        let size = Size::new(200.0, 44.0);
        assert!((size.aspect_ratio() - 200.0 / 44.0).abs() < 1e-12);
    }

    #[test]
    fn orientation_from_size() {
        assert_eq!(
            Orientation::from_size(Size::new(320.0, 568.0)),
            Orientation::Portrait
        );
        assert_eq!(
            Orientation::from_size(Size::new(568.0, 320.0)),
            Orientation::Landscape
        );
        // Square bounds count as portrait
        assert_eq!(
            Orientation::from_size(Size::new(400.0, 400.0)),
            Orientation::Portrait
        );
    }

    #[test]
    fn preferred_axis_follows_orientation() {
        assert_eq!(Orientation::Portrait.preferred_axis(), Axis::Width);
        assert_eq!(Orientation::Landscape.preferred_axis(), Axis::Height);
    }
}

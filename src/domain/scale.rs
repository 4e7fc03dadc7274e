//! Dimension adaptation and aspect-preserving resizing
//!
//! This module holds the scaling math: design-time values authored
//! against the baseline screen are projected onto the screen of the
//! device actually running the app, preserving relative proportions.
//! Every operation is a pure function of its arguments.

use crate::domain::catalog::DeviceCatalog;
use crate::domain::core::{Axis, Size};

/// Stateless scaler anchored to a validated baseline screen size
///
/// Built from a [`DeviceCatalog`], whose construction already guarantees
/// strictly positive, finite baseline components, so the divisions below
/// are always well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleEngine {
    baseline: Size,
}

impl ScaleEngine {
    /// Creates an engine scaling against the catalog's baseline
    pub fn new(catalog: &DeviceCatalog) -> Self {
        Self {
            baseline: catalog.baseline(),
        }
    }

    /// Returns the baseline screen size this engine scales against
    pub fn baseline(&self) -> Size {
        self.baseline
    }

    /// Projects a design-time length onto the current screen
    ///
    /// The value's proportion of the baseline dimension selected by
    /// `axis` is preserved: the result is
    /// `value / baseline(axis) * screen(axis)`. Linear in `value`, and
    /// the identity when `screen` equals the baseline.
    ///
    /// # Arguments
    /// * `value` - Length in points, authored against the baseline screen
    /// * `axis` - Baseline dimension the length is proportional to
    /// * `screen` - Current screen bounds supplied by the host
    pub fn adapted_length(&self, value: f64, axis: Axis, screen: Size) -> f64 {
        let ratio = value / self.baseline.along(axis);
        screen.along(axis) * ratio
    }

    /// Resizes a design-time size, preserving its aspect ratio
    ///
    /// The dimension selected by `axis` is the anchor: it scales by the
    /// same ratio [`Self::adapted_length`] would apply, and the other
    /// dimension is derived from the input's aspect ratio.
    ///
    /// The anchor dimension of `size` must be non-zero or the aspect
    /// ratio is undefined; [`crate::config::layout::LayoutConfig`]
    /// validates this before resolving configured sizes.
    pub fn adapted_size(&self, size: Size, axis: Axis, screen: Size) -> Size {
        match axis {
            Axis::Width => {
                let aspect = size.height / size.width;
                let width = screen.width * (size.width / self.baseline.width);
                Size::new(width, width * aspect)
            }
            Axis::Height => {
                let aspect = size.width / size.height;
                let height = screen.height * (size.height / self.baseline.height);
                Size::new(height * aspect, height)
            }
        }
    }
}

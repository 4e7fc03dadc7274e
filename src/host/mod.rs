//! Host screen state supplied by the embedding UI layer
//!
//! The crate never queries screen bounds or orientation itself. The host
//! owns a [`ScreenMetrics`] snapshot, feeds it fresh bounds on every
//! layout-size change, and re-resolves its layout values when the
//! snapshot reports a change.

use crate::domain::core::{Axis, Orientation, Size};

/// Snapshot of the current screen as of the last layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    size: Size,
    orientation: Orientation,
}

impl ScreenMetrics {
    /// Creates a snapshot from the host-reported screen bounds
    ///
    /// Orientation is derived from the bounds rather than queried from
    /// the host, so rotated bounds and orientation can never disagree.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            orientation: Orientation::from_size(size),
        }
    }

    /// Replaces the snapshot with fresh screen bounds
    ///
    /// The host calls this from its layout-size-change callback.
    ///
    /// # Returns
    /// true if the snapshot changed and dependent layout values should
    /// be re-resolved
    pub fn update(&mut self, size: Size) -> bool {
        if size == self.size {
            return false;
        }

        let previous = *self;
        self.size = size;
        self.orientation = Orientation::from_size(size);
        tracing::debug!(
            ?previous,
            current = ?self,
            "screen metrics changed; layout values need re-resolving"
        );
        true
    }

    /// Current screen bounds in points
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current orientation, derived from the bounds
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Axis that orientation-following layout values scale against
    pub fn preferred_axis(&self) -> Axis {
        self.orientation.preferred_axis()
    }
}

//! Screen-adaptation helper for proportional UI scaling
//!
//! Dimensions authored against a baseline device screen are projected
//! onto the screen of the device actually running the app, preserving
//! their relative proportions. The host UI layer supplies screen bounds
//! and applies the scaled results; this crate holds the catalog of known
//! device sizes and the pure scaling math in between.

pub mod config;
pub mod domain;
pub mod host;

pub use config::{Anchor, FontSpec, FontWeight, LayoutConfig, LayoutError, LengthSpec, ResolvedLayout, SizeSpec};
pub use domain::catalog::{CatalogError, DeviceCatalog, DeviceProfile};
pub use domain::core::{Axis, Orientation, Size};
pub use domain::scale::ScaleEngine;
pub use host::ScreenMetrics;

//! Configuration module for adaptive-layout
//!
//! This module concentrates the design-time values shared between the
//! host view layer and the scaling domain: named layout dimensions and
//! font specs, declared once and re-resolved whenever the screen
//! changes.

pub mod layout;
pub mod typography;

pub use layout::{Anchor, LayoutConfig, LayoutError, LengthSpec, ResolvedLayout, SizeSpec};
pub use typography::{FontSpec, FontWeight};

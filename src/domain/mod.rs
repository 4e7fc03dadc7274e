//! Domain logic and core data structures
//!
//! This module contains pure scaling logic that is independent
//! of any host UI framework or platform-specific screen APIs.

pub mod catalog;
pub mod core;
pub mod scale;

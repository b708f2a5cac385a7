//! Foundational types for the scatter layout engine.
//!
//! This crate provides the types shared across the scatter crates:
//! - Plane geometry (rectangles, viewports)
//! - Exclusion zones that placements must keep clear of
//! - Error types

pub mod errors;
pub mod geometry;
pub mod zone;

pub use errors::*;
pub use geometry::*;
pub use zone::*;

//! Exclusion zones.
//!
//! A zone marks a region of the viewport that placed items must keep
//! clear of: a header bar, a counter badge, a footnote. Zones are plain
//! data in viewport coordinates; measuring live chrome into these shapes
//! is the renderer's job.

use glam::DVec2;

use crate::geometry::Rect;

/// A region placements must avoid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zone {
    /// Rectangular chrome such as a header bar or footnote.
    Rect(Rect),
    /// Circular keep-out around a focal widget.
    Circle { center: DVec2, radius: f64 },
}

impl Zone {
    /// Grow the zone outward by `pad` on every side.
    ///
    /// Keeping item centers out of the inflated zone keeps their whole
    /// footprint out of the original one.
    pub fn inflate(&self, pad: f64) -> Zone {
        match self {
            Zone::Rect(rect) => Zone::Rect(rect.expand(pad)),
            Zone::Circle { center, radius } => Zone::Circle {
                center: *center,
                radius: radius + pad,
            },
        }
    }

    /// Check if a point falls inside the zone.
    pub fn contains(&self, point: DVec2) -> bool {
        match self {
            Zone::Rect(rect) => rect.contains(point),
            Zone::Circle { center, radius } => center.distance(point) < *radius,
        }
    }
}

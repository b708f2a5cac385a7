//! Plane geometry for placement.
//!
//! Everything is f64 in abstract length units; the caller decides whether
//! a unit is a CSS pixel, a terminal cell, or anything else.

use glam::DVec2;

use crate::errors::LayoutError;

/// Axis-aligned rectangle, anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Get the top-left corner.
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Get the size.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Get the center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Check if a point is inside the rectangle.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Check if two rectangles overlap (touching edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Compute the overlapping region with another rectangle.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Expand the rectangle by a uniform amount on all sides.
    pub fn expand(&self, amount: f64) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + 2.0 * amount,
            self.height + 2.0 * amount,
        )
    }

    /// Inset the rectangle by a uniform amount on all sides.
    pub fn inset(&self, amount: f64) -> Rect {
        self.expand(-amount)
    }
}

/// The area items are placed into.
///
/// Viewports change between layout passes (window resizes), so callers
/// query this fresh for every placement rather than caching it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from its dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The shorter of the two dimensions.
    pub fn min_dimension(&self) -> f64 {
        self.width.min(self.height)
    }

    /// The center point.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Reject degenerate dimensions before placement.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
        {
            Ok(())
        } else {
            Err(LayoutError::EmptyViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

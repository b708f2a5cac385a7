//! Count-aware starting size.
//!
//! Before placing, callers can derive a starting item size from the item
//! count so crowded scenes begin closer to a size that will fit, instead
//! of burning shrink passes on one that obviously will not.

use scatter_core::Viewport;

/// How tightly a scene packs its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Density {
    /// Roomy layouts on large surfaces.
    #[default]
    Regular,
    /// Tight layouts on small surfaces.
    Compact,
}

/// Suggest a starting item size for `count` items, capped at `base`.
///
/// Estimates a square-ish grid from the count (a couple of slots are
/// added so the estimate stays conservative for tiny counts) and scales
/// the item so that many rows fit the viewport.
pub fn suggested_size(count: usize, viewport: &Viewport, base: f64, density: Density) -> f64 {
    let per_row = ((count as f64) + 4.0).sqrt().ceil();
    match density {
        Density::Regular => base.min(viewport.height / (per_row * 2.0)),
        Density::Compact => base.min(viewport.min_dimension() / (per_row * 4.0)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_count_keeps_base_size() {
        let viewport = Viewport::new(1280.0, 720.0);
        // 5 items: grid estimate 3 per row, 720 / 6 = 120 > base.
        let size = suggested_size(5, &viewport, 80.0, Density::Regular);
        assert!((size - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_large_count_shrinks_start() {
        let viewport = Viewport::new(1280.0, 720.0);
        // 60 items: grid estimate 8 per row, 720 / 16 = 45 < base.
        let size = suggested_size(60, &viewport, 80.0, Density::Regular);
        assert!((size - 45.0).abs() < 0.001);
    }

    #[test]
    fn test_compact_uses_min_dimension() {
        let viewport = Viewport::new(375.0, 800.0);
        // 12 items: grid estimate 4 per row, 375 / 16 = 23.4375.
        let size = suggested_size(12, &viewport, 80.0, Density::Compact);
        assert!((size - 23.4375).abs() < 0.001);
    }

    #[test]
    fn test_zero_items_is_well_defined() {
        let viewport = Viewport::new(800.0, 600.0);
        let size = suggested_size(0, &viewport, 80.0, Density::Regular);
        assert!(size > 0.0 && size <= 80.0);
    }
}

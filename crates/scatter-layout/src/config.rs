//! Placement tuning knobs.

use scatter_core::LayoutError;

/// Tunable parameters for a placement pass.
///
/// The defaults match a desktop-sized scene; small surfaces usually want
/// a smaller [`initial_size`](Self::initial_size) (see
/// [`suggested_size`](crate::suggested_size)) and tighter spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementConfig {
    /// Item size (diameter of the spacing footprint) tried first.
    pub initial_size: f64,
    /// Size floor; the engine never shrinks below this.
    pub min_size: f64,
    /// Multiplier applied to the size after a failed pass. Must lie
    /// strictly between 0 and 1.
    pub shrink_factor: f64,
    /// Minimum center-to-center distance between items, as a multiple of
    /// the current size.
    pub spacing: f64,
    /// Random draws allowed per item before the pass is abandoned.
    pub retry_budget: usize,
    /// Zone padding as a fraction of the current size; zones are inflated
    /// by this much so item footprints, not just centers, stay clear.
    pub zone_padding: f64,
    /// Horizontal edge margin as a multiple of the current size. Wider
    /// than the vertical margin because rotated items sweep a wider arc.
    pub side_margin: f64,
    /// Extra clearance above each item for its on-click label, in
    /// absolute units.
    pub label_clearance: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            initial_size: 80.0,
            min_size: 10.0,
            shrink_factor: 0.9,
            spacing: 1.2,
            retry_budget: 200,
            zone_padding: 0.5,
            side_margin: 1.5,
            label_clearance: 40.0,
        }
    }
}

impl PlacementConfig {
    /// Set the size tried first.
    pub fn with_initial_size(mut self, size: f64) -> Self {
        self.initial_size = size;
        self
    }

    /// Set the size floor.
    pub fn with_min_size(mut self, size: f64) -> Self {
        self.min_size = size;
        self
    }

    /// Set the shrink factor.
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    /// Set the spacing multiplier.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the per-item retry budget.
    pub fn with_retry_budget(mut self, budget: usize) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Set the zone padding fraction.
    pub fn with_zone_padding(mut self, padding: f64) -> Self {
        self.zone_padding = padding;
        self
    }

    /// Set the horizontal edge margin factor.
    pub fn with_side_margin(mut self, margin: f64) -> Self {
        self.side_margin = margin;
        self
    }

    /// Set the label clearance.
    pub fn with_label_clearance(mut self, clearance: f64) -> Self {
        self.label_clearance = clearance;
        self
    }

    /// Check every knob for values that would make placement meaningless
    /// or non-terminating.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for size in [self.initial_size, self.min_size] {
            if !size.is_finite() || size <= 0.0 {
                return Err(LayoutError::InvalidItemSize { value: size });
            }
        }
        if !self.shrink_factor.is_finite() || self.shrink_factor <= 0.0 || self.shrink_factor >= 1.0
        {
            return Err(LayoutError::InvalidShrinkFactor {
                value: self.shrink_factor,
            });
        }
        if !self.spacing.is_finite() || self.spacing <= 0.0 {
            return Err(LayoutError::InvalidSpacing {
                value: self.spacing,
            });
        }
        for margin in [self.zone_padding, self.side_margin, self.label_clearance] {
            if !margin.is_finite() || margin < 0.0 {
                return Err(LayoutError::InvalidMargin { value: margin });
            }
        }
        if self.retry_budget == 0 {
            return Err(LayoutError::ZeroRetryBudget);
        }
        Ok(())
    }
}

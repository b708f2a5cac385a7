//! Randomized rejection-sampling placement.
//!
//! One placement call runs a sequence of passes. A pass tries to seat
//! every item at a fixed size by drawing uniform random candidates and
//! keeping the first one that clears the viewport margins, every inflated
//! zone, and every already-seated neighbor. A pass that cannot seat an
//! item within its retry budget is abandoned, the size shrinks, and the
//! next pass starts from scratch. Random sampling is deliberate: the goal
//! is organic scatter, not maximal density.

use std::ops::Range;

use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;

use scatter_core::{LayoutError, Viewport, Zone};

use crate::config::PlacementConfig;

/// One layout request: how many items to seat, where, and around what.
///
/// Requests are cheap to build and stateless; construct a fresh one per
/// layout pass (initial load or resize) with freshly measured viewport
/// and zones.
#[derive(Debug, Clone)]
pub struct PlacementRequest {
    /// Number of items to seat. Items are opaque; results are by index.
    pub item_count: usize,
    /// Area to place into.
    pub viewport: Viewport,
    /// Regions to keep clear of.
    pub zones: Vec<Zone>,
    /// Tuning knobs.
    pub config: PlacementConfig,
}

impl PlacementRequest {
    /// Create a request with no zones and default tuning.
    pub fn new(item_count: usize, viewport: Viewport) -> Self {
        Self {
            item_count,
            viewport,
            zones: Vec::new(),
            config: PlacementConfig::default(),
        }
    }

    /// Add one exclusion zone.
    pub fn with_zone(mut self, zone: Zone) -> Self {
        self.zones.push(zone);
        self
    }

    /// Replace the exclusion zones.
    pub fn with_zones(mut self, zones: Vec<Zone>) -> Self {
        self.zones = zones;
        self
    }

    /// Replace the tuning knobs.
    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }
}

/// Result of one placement call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Item size the positions were computed for. Uniform across the
    /// result; one of `initial_size * shrink_factor^k`.
    pub size: f64,
    /// Center of each seated item, in viewport coordinates.
    pub positions: Vec<DVec2>,
    /// Whether every requested item was seated. When false the caller
    /// should surface reduced capacity (an advisory note, a count badge);
    /// it is not an error.
    pub complete: bool,
}

/// Seat `request.item_count` items, shrinking the item size as needed.
///
/// Runs to completion without I/O or locking; worst-case work is bounded
/// by `item_count * retry_budget` draws per size step. The random source
/// is injected so callers can pass a seeded generator and get
/// reproducible layouts.
pub fn place<R: Rng>(request: &PlacementRequest, rng: &mut R) -> Result<Placement, LayoutError> {
    request.viewport.validate()?;
    request.config.validate()?;

    let mut size = request.config.initial_size;
    loop {
        let positions = attempt_pass(request, size, rng);
        if positions.len() == request.item_count {
            return Ok(Placement {
                size,
                positions,
                complete: true,
            });
        }

        let next = size * request.config.shrink_factor;
        if next < request.config.min_size {
            tracing::debug!(
                seated = positions.len(),
                requested = request.item_count,
                size,
                "placement incomplete at minimum size"
            );
            return Ok(Placement {
                size,
                positions,
                complete: false,
            });
        }
        tracing::trace!(from = size, to = next, "pass failed, shrinking item size");
        size = next;
    }
}

/// Try to seat every item at a fixed size. Returns the seated positions;
/// fewer than `item_count` means the pass failed.
fn attempt_pass<R: Rng>(request: &PlacementRequest, size: f64, rng: &mut R) -> Vec<DVec2> {
    let config = &request.config;

    let (xs, ys) = match sample_region(&request.viewport, config, size) {
        Some(region) => region,
        None => return Vec::new(),
    };

    let zones: SmallVec<[Zone; 4]> = request
        .zones
        .iter()
        .map(|zone| zone.inflate(size * config.zone_padding))
        .collect();
    let min_distance = size * config.spacing;

    let mut placed = Vec::with_capacity(request.item_count);
    for _ in 0..request.item_count {
        match draw_candidate(rng, &xs, &ys, &zones, &placed, min_distance, config.retry_budget) {
            Some(position) => placed.push(position),
            // One unseatable item fails the whole pass.
            None => break,
        }
    }
    placed
}

/// Compute the rectangle centers may be drawn from: the viewport inset by
/// the current size vertically, by `side_margin` times it horizontally,
/// and by the label clearance at the top. None if the margins leave no
/// room at this size.
fn sample_region(
    viewport: &Viewport,
    config: &PlacementConfig,
    size: f64,
) -> Option<(Range<f64>, Range<f64>)> {
    let side = size * config.side_margin;
    let xs = side..(viewport.width - side);
    let ys = (size + config.label_clearance)..(viewport.height - size);
    if xs.is_empty() || ys.is_empty() {
        None
    } else {
        Some((xs, ys))
    }
}

/// Draw candidates until one clears every zone and every neighbor, or the
/// budget runs out.
fn draw_candidate<R: Rng>(
    rng: &mut R,
    xs: &Range<f64>,
    ys: &Range<f64>,
    zones: &[Zone],
    placed: &[DVec2],
    min_distance: f64,
    budget: usize,
) -> Option<DVec2> {
    for _ in 0..budget {
        let candidate = DVec2::new(rng.gen_range(xs.clone()), rng.gen_range(ys.clone()));
        if zones.iter().any(|zone| zone.contains(candidate)) {
            continue;
        }
        if placed.iter().any(|&seated| seated.distance(candidate) < min_distance) {
            continue;
        }
        return Some(candidate);
    }
    None
}

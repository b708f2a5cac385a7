//! Randomized scatter placement for icon scenes.
//!
//! Seats a number of items in a viewport so that no two items crowd each
//! other and none lands on reserved chrome (header, badge, footnote).
//! When the requested item size cannot fit every item, the size shrinks
//! step by step until everything fits or a floor is reached.
//!
//! # Architecture
//!
//! 1. **Rejection sampling**: candidate positions are drawn uniformly and
//!    kept only if they clear every zone and every seated neighbor
//! 2. **Adaptive sizing**: a failed pass shrinks the item size and retries
//! 3. **Decoration**: poses and drift offsets layer organic motion on top
//!    of the static positions
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use scatter_core::{Rect, Viewport, Zone};
//! use scatter_layout::{place, PlacementRequest};
//!
//! let request = PlacementRequest::new(6, Viewport::new(1280.0, 720.0))
//!     .with_zone(Zone::Rect(Rect::new(0.0, 0.0, 1280.0, 100.0)));
//! let placement = place(&request, &mut StdRng::seed_from_u64(42))?;
//! assert!(placement.complete);
//! # Ok::<(), scatter_core::LayoutError>(())
//! ```

mod config;
mod drift;
mod engine;
mod pose;
mod sizing;

pub use config::PlacementConfig;
pub use drift::Drift;
pub use engine::{place, Placement, PlacementRequest};
pub use pose::{assign_poses, Pose};
pub use sizing::{suggested_size, Density};

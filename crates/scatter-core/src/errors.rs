//! Error types for the scatter engine.
//!
//! Only malformed inputs are errors. A placement that cannot seat every
//! item is a normal outcome and is reported as data on the result, never
//! through this type.

use thiserror::Error;

/// Errors raised while validating a placement request.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("item size must be positive and finite, got {value}")]
    InvalidItemSize { value: f64 },

    #[error("shrink factor must be strictly between 0 and 1, got {value}")]
    InvalidShrinkFactor { value: f64 },

    #[error("spacing multiplier must be positive and finite, got {value}")]
    InvalidSpacing { value: f64 },

    #[error("margin factors must be non-negative and finite, got {value}")]
    InvalidMargin { value: f64 },

    #[error("retry budget must be at least 1")]
    ZeroRetryBudget,

    #[error("viewport must have positive finite dimensions, got {width}x{height}")]
    EmptyViewport { width: f64, height: f64 },
}

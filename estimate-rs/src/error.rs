use thiserror::Error;

/// Errors detected when constructing an [`Estimate`](crate::Estimate).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum EstimateError {
    /// The optimistic bound exceeds the pessimistic bound.
    #[error("inverted bounds: best {best} > worst {worst}")]
    InvertedBounds { best: f64, worst: f64 },
    /// A bound is NaN or infinite.
    #[error("non-finite bound: {0}")]
    NonFiniteBound(f64),
}

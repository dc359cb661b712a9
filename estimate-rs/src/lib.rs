//! # estimate-rs: Three-Point Estimates for Monte Carlo Simulation
//!
//! An [`Estimate`] captures an uncertain quantity as best, worst, and
//! likely case values and draws simulated cases from the triangular
//! distribution those three points define, using inverse-transform
//! sampling.
//!
//! Sampling is driven by any [`rand::Rng`]: [`Estimate::trial`] uses the
//! process-wide generator, while [`Estimate::trial_with`] takes an
//! explicit generator so runs can be reproduced from a fixed seed.

mod error;
mod estimate;

pub use error::EstimateError;
pub use estimate::Estimate;

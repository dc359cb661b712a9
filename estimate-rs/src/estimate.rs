use rand::Rng;

use crate::error::EstimateError;

/// A three-point (best/worst/likely) estimate of an uncertain quantity.
///
/// An estimate defines a triangular probability distribution over
/// `[best, worst]` with its peak at `likely`; [`trial`](Estimate::trial)
/// draws simulated cases from it for Monte Carlo runs.
///
/// Fields are public and nothing prevents direct mutation after
/// construction; the `best <= likely <= worst` ordering is only
/// established by [`Estimate::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// Best (optimistic) case.
    pub best: f64,
    /// Worst (pessimistic) case.
    pub worst: f64,
    /// Most likely case, the mode of the distribution.
    pub likely: f64,
    /// Descriptive label for the estimated event. Never validated.
    pub title: String,
}

impl Estimate {
    /// Create a new estimate with the default title `"unknown"`.
    ///
    /// `likely` is clamped into `[best, worst]`, first down to `worst` and
    /// then up to `best`. The bounds themselves must be finite and ordered
    /// `best <= worst`.
    pub fn new(best: f64, worst: f64, likely: f64) -> Result<Self, EstimateError> {
        for v in [best, worst, likely] {
            if !v.is_finite() {
                return Err(EstimateError::NonFiniteBound(v));
            }
        }
        if best > worst {
            return Err(EstimateError::InvertedBounds { best, worst });
        }
        let mut likely = likely;
        if likely > worst {
            likely = worst;
        }
        if likely < best {
            likely = best;
        }
        Ok(Self {
            best,
            worst,
            likely,
            title: String::from("unknown"),
        })
    }

    /// Set the descriptive label.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Draw one simulated case using the process-wide generator.
    ///
    /// See [`trial_with`](Estimate::trial_with).
    pub fn trial(&self) -> i64 {
        self.trial_with(&mut rand::rng())
    }

    /// Draw one simulated case from the triangular distribution.
    ///
    /// The continuous sample is rounded to the nearest integer, ties away
    /// from zero, so results cover the closed integer range
    /// `[best.round(), worst.round()]`. Repeated calls are independent
    /// draws; pass a seeded generator for reproducible sequences.
    #[inline]
    pub fn trial_with<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.triangular(rng).round() as i64
    }

    /// Inverse-CDF transform of a uniform draw in `[0, 1)`.
    #[inline]
    fn triangular<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let range = self.worst - self.best;
        if range == 0.0 {
            // best == worst: single fixed outcome
            return self.best;
        }
        let offset = self.likely - self.best;
        let u = rng.random::<f64>();
        if u <= offset / range {
            self.best + (u * range * offset).sqrt()
        } else {
            self.worst - ((1.0 - u) * range * (self.worst - self.likely)).sqrt()
        }
    }
}

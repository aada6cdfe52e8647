/*!
# Utilities

Small helpers shared by the generators:
- [`Probability`] validates probability-like parameters,
- [`SkipSampler`](geometric::SkipSampler) enumerates Bernoulli successes over an index range by
  geometric jumps, which drives the [`Gnp`](crate::gens::Gnp) generator.
*/

use num::{One, Zero};

use crate::error::ParameterError;

pub mod geometric;

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the value lies in `[0, 1]` (and thus is not `NaN`)
    fn is_valid_probability(&self) -> bool;
}

impl<P> Probability for P
where
    P: Zero + One + PartialOrd,
{
    fn is_valid_probability(&self) -> bool {
        Self::zero().le(self) && Self::one().ge(self)
    }
}

/// Checks a named probability parameter
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_valid_probability() {
        Ok(value)
    } else {
        Err(ParameterError::InvalidProbability { name, value })
    }
}

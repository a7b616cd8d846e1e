use crate::error::Result;
use crate::model::Structure;

/// Boundary to the physics side.
///
/// Implementations judge a decoded structure and return a non-negative
/// scalar, or 0.0 when the structure fails the stability probe. Errors are
/// propagated verbatim to the evolution loop and abort the current fitness
/// pass; there are no retries.
pub trait FitnessEvaluator: Send + Sync {
    fn evaluate(&self, structure: &Structure) -> Result<f64>;
}

impl<F> FitnessEvaluator for F
where
    F: Fn(&Structure) -> Result<f64> + Send + Sync,
{
    fn evaluate(&self, structure: &Structure) -> Result<f64> {
        self(structure)
    }
}

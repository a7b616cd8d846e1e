use super::genome::Genome;
use serde::{Deserialize, Serialize};

/// A candidate solution: a genome paired with its evaluated fitness.
///
/// Fitness defaults to 0.0 until `calculate_population_fitness` writes the
/// evaluator's score back. Chromosomes are owned by the current generation
/// and replaced wholesale each round; only the explicit elite copy crosses
/// generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromosome {
    pub genes: Genome,
    pub fitness: f64,
}

impl Chromosome {
    pub fn new(genes: Genome) -> Self {
        Self {
            genes,
            fitness: 0.0,
        }
    }
}

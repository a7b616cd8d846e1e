use super::traits::ConfigSection;
use crate::error::TensegError;
use serde::{Deserialize, Serialize};

/// Knobs of the generational search.
///
/// Mutation and crossover probabilities are absent on purpose: they are
/// derived from the strut count inside the engine and are not independently
/// configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub tournament_size: usize,
    pub elitism: bool,
    pub maximize_fitness: bool,
    /// Seed for the engine's generator. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            generations: 100,
            tournament_size: 3,
            elitism: true,
            maximize_fitness: true,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), TensegError> {
        if self.population_size == 0 {
            return Err(TensegError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(TensegError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(TensegError::Configuration(format!(
                "Tournament size must be between 1 and the population size ({})",
                self.population_size
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(EvolutionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_counts_rejected() {
        for config in [
            EvolutionConfig {
                population_size: 0,
                ..Default::default()
            },
            EvolutionConfig {
                generations: 0,
                ..Default::default()
            },
            EvolutionConfig {
                tournament_size: 0,
                ..Default::default()
            },
            EvolutionConfig {
                population_size: 4,
                tournament_size: 5,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                config.validate(),
                Err(TensegError::Configuration(_))
            ));
        }
    }
}

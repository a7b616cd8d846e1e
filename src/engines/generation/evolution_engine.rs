use crate::config::traits::ConfigSection;
use crate::config::EvolutionConfig;
use crate::engines::evaluation::{ExecutionMode, FitnessEvaluator};
use crate::engines::generation::{
    chromosome::Chromosome,
    codec::GenomeCodec,
    genome::Genome,
    operators::{crossover, mutate, tournament_selection},
    progress::ProgressCallback,
};
use crate::error::Result;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Drives the generational search over tensegrity genomes.
///
/// The engine owns the codec, the injected fitness evaluator and a single
/// seeded generator used for every random draw, so a fixed
/// `EvolutionConfig::seed` reproduces the whole run. Mutation and crossover
/// probabilities are derived from the strut count and are not independently
/// configurable: `mutation = 3.8 * strut_num / 1000`, `crossover` its
/// complement.
pub struct EvolutionEngine<E: FitnessEvaluator> {
    config: EvolutionConfig,
    codec: GenomeCodec,
    evaluator: E,
    mutation_rate: f64,
    crossover_rate: f64,
    generation: Vec<Chromosome>,
    generation_index: usize,
    rng: StdRng,
}

impl<E: FitnessEvaluator> EvolutionEngine<E> {
    pub fn new(config: EvolutionConfig, codec: GenomeCodec, evaluator: E) -> Result<Self> {
        config.validate()?;

        let mutation_rate = 3.8 * codec.layout().strut_num as f64 / 1000.0;
        let crossover_rate = 1.0 - mutation_rate;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            config,
            codec,
            evaluator,
            mutation_rate,
            crossover_rate,
            generation: Vec::new(),
            generation_index: 0,
            rng,
        })
    }

    pub fn codec(&self) -> &GenomeCodec {
        &self.codec
    }

    /// Run the full search: one first generation, then `generations - 1`
    /// replacement rounds. Any evaluator failure aborts the run.
    pub fn run<C: ProgressCallback>(
        &mut self,
        mode: ExecutionMode,
        callback: &mut C,
    ) -> Result<()> {
        self.create_first_generation(mode, callback)?;

        for _ in 1..self.config.generations {
            self.create_next_generation(mode, callback)?;
        }

        Ok(())
    }

    pub fn create_first_generation<C: ProgressCallback>(
        &mut self,
        mode: ExecutionMode,
        callback: &mut C,
    ) -> Result<()> {
        self.generation_index = 0;
        callback.on_generation_start(0);
        self.create_initial_population();
        self.calculate_population_fitness(mode, callback)?;
        self.rank_population();
        let best = self.generation[0].fitness;
        log::debug!("generation 0: best fitness {:.4}", best);
        callback.on_generation_complete(0, best);
        Ok(())
    }

    pub fn create_next_generation<C: ProgressCallback>(
        &mut self,
        mode: ExecutionMode,
        callback: &mut C,
    ) -> Result<()> {
        self.generation_index += 1;
        let generation = self.generation_index;
        callback.on_generation_start(generation);
        self.create_new_population();
        self.calculate_population_fitness(mode, callback)?;
        self.rank_population();
        let best = self.generation[0].fitness;
        log::debug!("generation {}: best fitness {:.4}", generation, best);
        callback.on_generation_complete(generation, best);
        Ok(())
    }

    /// Fill the current generation with fresh random chromosomes.
    pub fn create_initial_population(&mut self) {
        self.generation = (0..self.config.population_size)
            .map(|_| Chromosome::new(self.codec.create_individual(&mut self.rng)))
            .collect();
    }

    /// Decode and evaluate every candidate, writing scores back in order.
    pub fn calculate_population_fitness<C: ProgressCallback>(
        &mut self,
        mode: ExecutionMode,
        callback: &mut C,
    ) -> Result<()> {
        let codec = &self.codec;
        let evaluator = &self.evaluator;

        let fitnesses = mode.map(&self.generation, |chromosome| {
            let structure = codec.decode(&chromosome.genes)?;
            evaluator.evaluate(&structure)
        })?;

        let total = self.generation.len();
        for (i, (chromosome, fitness)) in self.generation.iter_mut().zip(fitnesses).enumerate() {
            chromosome.fitness = fitness;
            callback.on_individual_evaluated(i + 1, total);
        }

        Ok(())
    }

    /// Sort the generation by fitness, best first under the configured
    /// direction.
    pub fn rank_population(&mut self) {
        let maximize = self.config.maximize_fitness;
        self.generation.sort_by(|a, b| {
            let ordering = a
                .fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal);
            if maximize {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Replace the generation with offspring of tournament-selected parents.
    ///
    /// Children start unevaluated. Crossover fires once per pair and
    /// replaces both children's genomes; each child then mutates
    /// independently with the derived probability. When the population size
    /// is odd the extra child of the final pair is discarded. With elitism
    /// enabled, slot 0 is unconditionally overwritten by the previous best
    /// even if it already held a strong new candidate.
    pub fn create_new_population(&mut self) {
        let elite = self.generation[0].clone();
        let position_len = self.codec.layout().position_len();
        let mut next = Vec::with_capacity(self.config.population_size);

        while next.len() < self.config.population_size {
            let parent1 = tournament_selection(
                &self.generation,
                self.config.tournament_size,
                self.config.maximize_fitness,
                &mut self.rng,
            );
            let parent2 = tournament_selection(
                &self.generation,
                self.config.tournament_size,
                self.config.maximize_fitness,
                &mut self.rng,
            );

            let mut child1 = Chromosome::new(parent1.genes.clone());
            let mut child2 = Chromosome::new(parent2.genes.clone());

            if self.rng.gen::<f64>() < self.crossover_rate {
                let (genes1, genes2) = crossover(&parent1.genes, &parent2.genes, &mut self.rng);
                child1.genes = genes1;
                child2.genes = genes2;
            }

            if self.rng.gen::<f64>() < self.mutation_rate {
                mutate(&mut child1.genes, position_len, &mut self.rng);
            }
            if self.rng.gen::<f64>() < self.mutation_rate {
                mutate(&mut child2.genes, position_len, &mut self.rng);
            }

            next.push(child1);
            if next.len() < self.config.population_size {
                next.push(child2);
            }
        }

        if self.config.elitism {
            next[0] = elite;
        }

        self.generation = next;
    }

    /// Fitness and genome of the ranked best candidate.
    pub fn best_individual(&self) -> Option<(f64, &Genome)> {
        self.generation.first().map(|c| (c.fitness, &c.genes))
    }

    /// Restartable view over the stored final generation.
    pub fn last_generation(&self) -> impl Iterator<Item = (f64, &Genome)> + '_ {
        self.generation.iter().map(|c| (c.fitness, &c.genes))
    }
}

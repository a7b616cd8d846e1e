use super::chromosome::Chromosome;
use super::genome::Genome;
use rand::seq::index::sample;
use rand::Rng;

/// Tournament selection: sample K distinct chromosomes, keep the best.
///
/// `tournament_size` must not exceed the population size; the configuration
/// layer enforces this before any generation runs.
pub fn tournament_selection<R: Rng>(
    population: &[Chromosome],
    tournament_size: usize,
    maximize: bool,
    rng: &mut R,
) -> Chromosome {
    let picked = sample(rng, population.len(), tournament_size);

    let mut best = &population[picked.index(0)];
    for i in 1..picked.len() {
        let candidate = &population[picked.index(i)];
        let better = if maximize {
            candidate.fitness > best.fitness
        } else {
            candidate.fitness < best.fitness
        };
        if better {
            best = candidate;
        }
    }

    best.clone()
}

/// Single-point crossover: swap genome tails
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> (Genome, Genome) {
    let len = parent1.len().min(parent2.len());
    if len <= 1 {
        return (parent1.clone(), parent2.clone());
    }

    let point = rng.gen_range(1..len);

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();

    child1[point..len].copy_from_slice(&parent2[point..len]);
    child2[point..len].copy_from_slice(&parent1[point..len]);

    (child1, child2)
}

/// Binary-flip mutation over the position segment.
///
/// Picks one index in `[0, position_len)` and flips it between the literal
/// values 0 and 1: an exact 0 becomes 1, anything else becomes 0. The
/// rewiring segments are never touched (see DESIGN.md).
pub fn mutate<R: Rng>(genome: &mut Genome, position_len: usize, rng: &mut R) {
    let index = rng.gen_range(0..position_len);
    genome[index] = if genome[index] == 0.0 { 1.0 } else { 0.0 };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population_with_fitness(fitness: &[f64]) -> Vec<Chromosome> {
        fitness
            .iter()
            .map(|&f| {
                let mut c = Chromosome::new(vec![f; 4]);
                c.fitness = f;
                c
            })
            .collect()
    }

    #[test]
    fn test_tournament_full_sample_returns_global_best() {
        let population = population_with_fitness(&[0.2, 0.9, 0.5, 0.1]);
        let mut rng = StdRng::seed_from_u64(7);

        // Sampling the whole population makes the winner deterministic.
        let winner = tournament_selection(&population, population.len(), true, &mut rng);
        assert_eq!(winner.fitness, 0.9);

        let loser = tournament_selection(&population, population.len(), false, &mut rng);
        assert_eq!(loser.fitness, 0.1);
    }

    #[test]
    fn test_tournament_winner_is_population_member() {
        let population = population_with_fitness(&[0.3, 0.6, 0.8, 0.4, 0.7]);
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..32 {
            let winner = tournament_selection(&population, 2, true, &mut rng);
            assert!(population.contains(&winner));
        }
    }

    #[test]
    fn test_crossover_splices_at_single_point() {
        let p1: Genome = (0..10).map(|i| i as f64).collect();
        let p2: Genome = (0..10).map(|i| (i + 100) as f64).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let (c1, c2) = crossover(&p1, &p2, &mut rng);

        assert_eq!(c1.len(), p1.len());
        assert_eq!(c2.len(), p2.len());

        // Recover the cut point from the first child and check both splices.
        let point = c1
            .iter()
            .position(|&v| v >= 100.0)
            .expect("crossover must always splice in a tail");
        assert!(point >= 1 && point < p1.len());
        assert_eq!(c1[..point], p1[..point]);
        assert_eq!(c1[point..], p2[point..]);
        assert_eq!(c2[..point], p2[..point]);
        assert_eq!(c2[point..], p1[point..]);
    }

    #[test]
    fn test_mutate_flips_between_zero_and_one() {
        let mut rng = StdRng::seed_from_u64(11);

        let mut zeros: Genome = vec![0.0; 6];
        mutate(&mut zeros, 6, &mut rng);
        assert_eq!(zeros.iter().filter(|&&v| v == 1.0).count(), 1);

        let mut others: Genome = vec![0.37; 6];
        mutate(&mut others, 6, &mut rng);
        assert_eq!(others.iter().filter(|&&v| v == 0.0).count(), 1);
    }

    #[test]
    fn test_mutate_stays_inside_position_segment() {
        let mut rng = StdRng::seed_from_u64(5);
        let position_len = 12;
        let rewire_tail = vec![4.0, 2.0, 1.0, 0.0];

        for _ in 0..64 {
            let mut genome: Genome = vec![0.5; position_len];
            genome.extend_from_slice(&rewire_tail);
            mutate(&mut genome, position_len, &mut rng);
            assert_eq!(genome[position_len..], rewire_tail[..]);
        }
    }
}

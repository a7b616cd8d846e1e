pub trait ProgressCallback: Send {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64);
    fn on_individual_evaluated(&mut self, individual: usize, total: usize);
}

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, generation: usize, best_fitness: f64) {
        println!(
            "Generation {} complete. Best fitness: {:.4}",
            generation + 1,
            best_fitness
        );
    }

    fn on_individual_evaluated(&mut self, individual: usize, total: usize) {
        if individual % 10 == 0 || individual == total {
            println!("  Evaluated {}/{} candidates", individual, total);
        }
    }
}

/// Discards all progress events. Handy for embedding and tests.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _generation: usize, _best_fitness: f64) {}
    fn on_individual_evaluated(&mut self, _individual: usize, _total: usize) {}
}

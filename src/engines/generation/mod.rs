pub mod chromosome;
pub mod codec;
pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod progress;

pub use chromosome::Chromosome;
pub use codec::GenomeCodec;
pub use evolution_engine::EvolutionEngine;
pub use genome::{Genome, GenomeLayout};
pub use progress::{ConsoleProgressCallback, ProgressCallback, SilentProgressCallback};

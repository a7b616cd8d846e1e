use crate::error::{Result, TensegError};
use rayon::prelude::*;

/// How a fitness pass is dispatched, decided once at call time.
///
/// Fitness evaluation is the only concurrency point in the search: every
/// other phase is single-threaded. `map` preserves input order so results
/// can be zipped back onto the originating candidates positionally, and it
/// fails fast on the first error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Sequential,
    /// Bounded rayon pool with the given worker count.
    Parallel { workers: usize },
}

impl ExecutionMode {
    pub fn map<T, U, F>(&self, items: &[T], f: F) -> Result<Vec<U>>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> Result<U> + Send + Sync,
    {
        match *self {
            ExecutionMode::Sequential => items.iter().map(&f).collect(),
            ExecutionMode::Parallel { workers } => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .build()
                    .map_err(|e| {
                        TensegError::Configuration(format!("Failed to build worker pool: {}", e))
                    })?;
                pool.install(|| items.par_iter().map(&f).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallel_map_preserves_order() {
        let items: Vec<u64> = (0..100).collect();
        let mode = ExecutionMode::Parallel { workers: 4 };

        let doubled = mode.map(&items, |&v| Ok(v * 2)).unwrap();
        let expected: Vec<u64> = items.iter().map(|v| v * 2).collect();
        assert_eq!(doubled, expected);
    }

    #[test]
    fn test_map_fails_fast_on_error() {
        let items: Vec<u64> = (0..10).collect();

        for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel { workers: 2 }] {
            let result = mode.map(&items, |&v| {
                if v == 7 {
                    Err(TensegError::Evaluation("unstable".to_string()))
                } else {
                    Ok(v)
                }
            });
            assert!(matches!(result, Err(TensegError::Evaluation(_))));
        }
    }
}

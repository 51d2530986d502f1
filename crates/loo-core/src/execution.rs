//! Execution strategy for per-group work
//!
//! Groups (one simulation × one column) never share state, so a batch can be
//! spread over the rayon pool without changing any result. Without the
//! `parallel` feature every strategy runs sequentially.

/// Execution strategy for batch operations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Process groups one after another on the calling thread
    #[default]
    Sequential,
    /// Process groups on the rayon pool (requires the `parallel` feature)
    Parallel,
}

impl ExecutionStrategy {
    /// Whether work will actually be distributed across threads
    pub fn is_parallel(&self) -> bool {
        cfg!(feature = "parallel") && matches!(self, ExecutionStrategy::Parallel)
    }

    /// Evaluate `f` for every index in `0..count`, preserving index order in the output
    pub fn execute_batch<F, R>(&self, count: usize, f: F) -> Vec<R>
    where
        F: Fn(usize) -> R + Sync + Send,
        R: Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self.is_parallel() {
                use rayon::prelude::*;
                return (0..count).into_par_iter().map(f).collect();
            }
        }

        (0..count).map(f).collect()
    }
}

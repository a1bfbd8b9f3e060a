//! Execution queues for device-parallel work.
//!
//! A queue is an ordering token: work submitted to the same queue runs in
//! submission order, work on different queues may run concurrently. The
//! default queue shares the process-wide rayon pool and completes work
//! before returning to the caller, so results are immediately readable.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use crate::error::{Result, RudfError};

/// An ordering context for parallel work issued by the host.
#[derive(Debug, Clone, Default)]
pub struct ExecutionQueue {
    /// Dedicated thread pool, or `None` for the shared default pool.
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl ExecutionQueue {
    /// Returns the default queue backed by the shared rayon pool.
    #[must_use]
    pub fn default_queue() -> Self {
        ExecutionQueue { pool: None }
    }

    /// Creates a queue with its own pool of `num_threads` workers.
    ///
    /// Work on this queue executes independently of work on other queues.
    ///
    /// # Errors
    ///
    /// Returns [`RudfError::ExecutionFailure`] if the pool cannot be built.
    pub fn with_threads(num_threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map_err(|e| RudfError::ExecutionFailure(format!("Failed to build thread pool: {e}")))?;
        Ok(ExecutionQueue {
            pool: Some(Arc::new(pool)),
        })
    }

    /// Runs `work` to completion on this queue.
    ///
    /// Calls on the same queue execute in call order. A panic escaping the
    /// parallel pass is converted into an error; no partial output survives.
    ///
    /// # Errors
    ///
    /// Returns [`RudfError::ExecutionFailure`] if the work panicked.
    pub fn run<R, F>(&self, work: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        let outcome = catch_unwind(AssertUnwindSafe(|| match &self.pool {
            Some(pool) => pool.install(work),
            None => work(),
        }));
        outcome.map_err(|payload| {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "worker panicked".to_string());
            RudfError::ExecutionFailure(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_runs_work() {
        let queue = ExecutionQueue::default_queue();
        let result = queue.run(|| 1 + 1).unwrap();
        assert_eq!(result, 2);
    }

    #[test]
    fn test_dedicated_queue_runs_work() {
        let queue = ExecutionQueue::with_threads(2).unwrap();
        let result = queue.run(|| (0..100).sum::<i32>()).unwrap();
        assert_eq!(result, 4950);
    }

    #[test]
    fn test_same_queue_preserves_submission_order() {
        let queue = ExecutionQueue::with_threads(4).unwrap();
        let mut seen = Vec::new();
        for i in 0..10 {
            let value = queue.run(move || i).unwrap();
            seen.push(value);
        }
        assert_eq!(seen, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_panic_becomes_execution_failure() {
        let queue = ExecutionQueue::default_queue();
        let err = queue.run(|| panic!("kernel fault")).map(|()| ()).unwrap_err();
        match err {
            RudfError::ExecutionFailure(message) => assert!(message.contains("kernel fault")),
            other => panic!("unexpected error: {other}"),
        }
    }
}

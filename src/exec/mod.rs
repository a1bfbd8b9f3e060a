//! Execution services: queues, memory resources, and the transform context.
//!
//! Both services are injected by the caller; the core never picks a memory
//! resource or queue on its own beyond the documented defaults.

pub mod memory;
pub mod queue;

pub use memory::{AllocationToken, HostMemoryResource, MemoryResource, MemoryStats};
pub use queue::ExecutionQueue;

use std::sync::Arc;

use crate::error::Result;

/// Configuration passed explicitly at every transform call site.
///
/// Bundles the execution queue the work is issued on and the memory
/// resource output buffers are drawn from. There are no hidden globals:
/// [`TransformContext::default`] wires the shared default queue and an
/// unbounded host resource, and callers swap in their own services.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// Queue the parallel pass is issued on.
    pub queue: ExecutionQueue,
    /// Allocation service for output buffers.
    pub memory: Arc<dyn MemoryResource>,
}

impl Default for TransformContext {
    fn default() -> Self {
        TransformContext {
            queue: ExecutionQueue::default_queue(),
            memory: Arc::new(HostMemoryResource::unbounded()),
        }
    }
}

impl TransformContext {
    /// Creates a context from explicit services.
    #[must_use]
    pub fn new(queue: ExecutionQueue, memory: Arc<dyn MemoryResource>) -> Self {
        TransformContext { queue, memory }
    }

    /// Reserves `bytes` from the memory resource for one output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RudfError::AllocationFailure`] if the resource
    /// refuses the request.
    pub(crate) fn allocate(&self, bytes: usize) -> Result<AllocationToken> {
        self.memory.allocate(bytes)?;
        Ok(AllocationToken::new(bytes, Arc::clone(&self.memory)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = TransformContext::default();
        assert_eq!(ctx.memory.bytes_in_use(), 0);
    }

    #[test]
    fn test_allocate_produces_token() {
        let ctx = TransformContext::default();
        let token = ctx.allocate(512).unwrap();
        assert_eq!(ctx.memory.bytes_in_use(), 512);
        drop(token);
        assert_eq!(ctx.memory.bytes_in_use(), 0);
    }

    #[test]
    fn test_allocate_respects_injected_limit() {
        let ctx = TransformContext::new(
            ExecutionQueue::default_queue(),
            Arc::new(HostMemoryResource::with_limit(16)),
        );
        assert!(ctx.allocate(8).is_ok());
        assert!(ctx.allocate(32).is_err());
    }
}

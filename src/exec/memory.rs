//! Memory resources for output-buffer accounting.
//!
//! The transform core requests an output-sized allocation exactly once per
//! operation and never resizes it. The resource is a shared, externally
//! owned service: allocations from unrelated operations may interleave, so
//! nothing here depends on allocation ordering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{Result, RudfError};

/// An allocation service for transform output buffers.
///
/// Implementations track bytes handed out and may enforce a limit. The
/// engine calls [`MemoryResource::allocate`] before issuing any parallel
/// work and releases the bytes when the produced column is dropped.
pub trait MemoryResource: Send + Sync + std::fmt::Debug {
    /// Reserves `bytes` for an output buffer.
    ///
    /// # Errors
    ///
    /// Returns [`RudfError::AllocationFailure`] if the request cannot be
    /// satisfied; the operation that asked is then aborted with no column
    /// produced.
    fn allocate(&self, bytes: usize) -> Result<()>;

    /// Returns `bytes` previously obtained from [`MemoryResource::allocate`].
    fn deallocate(&self, bytes: usize);

    /// Bytes currently handed out.
    fn bytes_in_use(&self) -> usize;
}

/// Guard for one reserved output buffer.
///
/// Dropping the token returns the bytes to the resource that issued it.
#[derive(Debug)]
pub struct AllocationToken {
    bytes: usize,
    resource: Arc<dyn MemoryResource>,
}

impl AllocationToken {
    pub(crate) fn new(bytes: usize, resource: Arc<dyn MemoryResource>) -> Self {
        AllocationToken { bytes, resource }
    }

    /// Size of the reservation in bytes.
    #[must_use]
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl Drop for AllocationToken {
    fn drop(&mut self) {
        self.resource.deallocate(self.bytes);
    }
}

/// Cumulative statistics for a [`HostMemoryResource`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryStats {
    /// Number of allocations served.
    pub allocations: u64,
    /// High-water mark of bytes in use.
    pub peak_bytes: usize,
}

/// Host-side memory resource with an optional byte limit.
#[derive(Debug)]
pub struct HostMemoryResource {
    limit: Option<usize>,
    in_use: AtomicUsize,
    stats: Mutex<MemoryStats>,
}

impl HostMemoryResource {
    /// Creates a resource with no limit.
    #[must_use]
    pub fn unbounded() -> Self {
        HostMemoryResource {
            limit: None,
            in_use: AtomicUsize::new(0),
            stats: Mutex::new(MemoryStats::default()),
        }
    }

    /// Creates a resource that refuses to exceed `limit` bytes in use.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        HostMemoryResource {
            limit: Some(limit),
            in_use: AtomicUsize::new(0),
            stats: Mutex::new(MemoryStats::default()),
        }
    }

    /// Returns a snapshot of the allocation statistics.
    #[must_use]
    pub fn stats(&self) -> MemoryStats {
        *self.stats.lock()
    }
}

impl MemoryResource for HostMemoryResource {
    fn allocate(&self, bytes: usize) -> Result<()> {
        let previous = self.in_use.fetch_add(bytes, Ordering::SeqCst);
        if let Some(limit) = self.limit {
            if previous + bytes > limit {
                self.in_use.fetch_sub(bytes, Ordering::SeqCst);
                return Err(RudfError::AllocationFailure {
                    requested: bytes,
                    in_use: previous,
                    limit,
                });
            }
        }
        let mut stats = self.stats.lock();
        stats.allocations += 1;
        stats.peak_bytes = stats.peak_bytes.max(previous + bytes);
        Ok(())
    }

    fn deallocate(&self, bytes: usize) {
        self.in_use.fetch_sub(bytes, Ordering::SeqCst);
    }

    fn bytes_in_use(&self) -> usize {
        self.in_use.load(Ordering::SeqCst)
    }
}

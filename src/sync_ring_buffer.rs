//! Thread-Safe Ring Buffer Wrapper
//!
//! One [`RingBuffer`] behind a single exclusive lock. Every mutating call
//! (and `peek`) holds the lock for the full delegated operation, so each
//! call observes and leaves a consistent buffer. Nothing here blocks on
//! buffer state: a call succeeds or fails immediately.
//!
//! The state queries (`len`, `can_enqueue`, `can_dequeue`, ...) do NOT take
//! the lock. They read an atomic length mirror maintained under the lock,
//! so their results are advisory snapshots: another thread may mutate the
//! buffer between a query and the next call. Check-then-act is therefore
//! racy on purpose; callers handle [`RingBufferError::Full`] /
//! [`RingBufferError::Empty`] instead of trusting the check.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::error::RingBufferError;
use crate::ring_buffer::RingBuffer;

/// Mutex-synchronized fixed-capacity ring buffer.
///
/// Shareable across threads (`&self` API); all failure semantics are
/// identical to [`RingBuffer`], and the lock adds no failure mode.
#[derive(Debug)]
pub struct SyncRingBuffer<T> {
    inner: Mutex<RingBuffer<T>>,
    /// Length mirror for the unlocked queries. Written only while the
    /// lock is held; reads are advisory snapshots.
    len: AtomicUsize,
    capacity: usize,
}

impl<T> SyncRingBuffer<T> {
    /// Creates a synchronized buffer with `capacity` slots.
    ///
    /// Returns [`RingBufferError::InvalidCapacity`] when `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        let inner = RingBuffer::new(capacity)?;
        Ok(Self {
            inner: Mutex::new(inner),
            len: AtomicUsize::new(0),
            capacity,
        })
    }

    /// Appends `item` at the tail, holding the lock for the whole call.
    ///
    /// Returns [`RingBufferError::Full`] when no slot is free; the buffer
    /// is left untouched on failure.
    pub fn enqueue(&self, item: T) -> Result<(), RingBufferError> {
        let mut inner = self.inner.lock();
        inner.enqueue(item)?;
        self.len.store(inner.len(), Ordering::Relaxed);
        Ok(())
    }

    /// Removes and returns the oldest element, holding the lock for the
    /// whole call.
    ///
    /// Returns [`RingBufferError::Empty`] when nothing is stored.
    pub fn dequeue(&self) -> Result<T, RingBufferError> {
        let mut inner = self.inner.lock();
        let item = inner.dequeue()?;
        self.len.store(inner.len(), Ordering::Relaxed);
        Ok(item)
    }

    /// Returns a clone of the oldest element without removing it.
    ///
    /// The clone is taken under the lock; a borrow cannot outlive the
    /// guard. Returns [`RingBufferError::Empty`] when nothing is stored.
    pub fn peek(&self) -> Result<T, RingBufferError>
    where
        T: Clone,
    {
        let inner = self.inner.lock();
        inner.peek().cloned()
    }

    /// Advisory: true when the last observed state had a free slot.
    #[inline(always)]
    pub fn can_enqueue(&self) -> bool {
        self.len.load(Ordering::Relaxed) != self.capacity
    }

    /// Advisory: true when the last observed state held an element.
    #[inline(always)]
    pub fn can_dequeue(&self) -> bool {
        self.len.load(Ordering::Relaxed) > 0
    }

    /// Advisory snapshot of the element count.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed)
    }

    /// Advisory: true when the last observed state was empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len.load(Ordering::Relaxed) == 0
    }

    /// Advisory: true when the last observed state was full.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len.load(Ordering::Relaxed) == self.capacity
    }

    /// Total number of slots, fixed at construction. Never stale.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

//! Fixed-Capacity FIFO Ring Buffer
//!
//! Single contiguous slot array allocated once at construction. Head/tail
//! indices wrap modulo capacity, so a bounded array carries an unbounded
//! FIFO stream. No locking here; callers synchronize externally (or use
//! [`SyncRingBuffer`](crate::SyncRingBuffer)).

use crate::error::RingBufferError;

/// Unsynchronized fixed-capacity ring buffer.
///
/// Occupied slots are the `len` consecutive positions starting at `head`,
/// wrapping modulo `capacity`. Slots outside that range are `None` and are
/// never read through the public API.
#[derive(Debug)]
pub struct RingBuffer<T> {
    /// Pre-allocated slot array - no allocation after construction.
    slots: Box<[Option<T>]>,
    /// Index of the oldest occupied slot (meaningful only when `len > 0`).
    head: usize,
    /// Index where the next element will be written.
    tail: usize,
    /// Number of occupied slots, `0..=capacity`.
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with `capacity` slots.
    ///
    /// Allocation happens exactly once, here. Returns
    /// [`RingBufferError::InvalidCapacity`] when `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, RingBufferError> {
        if capacity == 0 {
            return Err(RingBufferError::InvalidCapacity);
        }

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            tail: 0,
            len: 0,
        })
    }

    /// Advances an index by one slot, wrapping at capacity.
    ///
    /// All index arithmetic funnels through here.
    #[inline(always)]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Appends `item` at the tail.
    ///
    /// Returns [`RingBufferError::Full`] when `len == capacity`. A full
    /// buffer rejects the write; nothing is overwritten.
    #[inline]
    pub fn enqueue(&mut self, item: T) -> Result<(), RingBufferError> {
        if !self.can_enqueue() {
            return Err(RingBufferError::Full);
        }

        self.slots[self.tail] = Some(item);
        self.tail = self.advance(self.tail);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the oldest element.
    ///
    /// Returns [`RingBufferError::Empty`] when `len == 0`.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, RingBufferError> {
        if !self.can_dequeue() {
            return Err(RingBufferError::Empty);
        }

        // The occupied range always starts at head, so the slot is Some.
        let item = self.slots[self.head]
            .take()
            .ok_or(RingBufferError::Empty)?;
        self.head = self.advance(self.head);
        self.len -= 1;
        Ok(item)
    }

    /// Borrows the oldest element without removing it.
    ///
    /// Returns [`RingBufferError::Empty`] when `len == 0`.
    #[inline]
    pub fn peek(&self) -> Result<&T, RingBufferError> {
        if !self.can_dequeue() {
            return Err(RingBufferError::Empty);
        }

        self.slots[self.head].as_ref().ok_or(RingBufferError::Empty)
    }

    /// True when at least one slot is free.
    #[inline(always)]
    pub fn can_enqueue(&self) -> bool {
        self.len != self.slots.len()
    }

    /// True when at least one element is stored.
    #[inline(always)]
    pub fn can_dequeue(&self) -> bool {
        self.len > 0
    }

    /// Number of elements currently stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no element is stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when every slot is occupied.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Total number of slots, fixed at construction.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

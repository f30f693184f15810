//! Error taxonomy for buffer operations.
//!
//! Every failure is reported synchronously to the caller at the point of
//! violation. No operation mutates state on failure.

use std::error::Error;
use std::fmt;

/// Errors returned by [`RingBuffer`](crate::RingBuffer) and
/// [`SyncRingBuffer`](crate::SyncRingBuffer) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingBufferError {
    /// Construction was requested with capacity zero.
    InvalidCapacity,
    /// Enqueue attempted while `len == capacity`.
    Full,
    /// Dequeue or peek attempted while `len == 0`.
    Empty,
}

impl fmt::Display for RingBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity => write!(f, "capacity must be greater than zero"),
            Self::Full => write!(f, "buffer is full"),
            Self::Empty => write!(f, "buffer is empty"),
        }
    }
}

impl Error for RingBufferError {}

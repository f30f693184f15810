//! Cirque - Fixed-Capacity Circular FIFO Buffer
//!
//! Design principles:
//! - No-Reallocation: all slots pre-allocated at construction
//! - Reject-on-Full: a full buffer refuses new writes instead of
//!   silently evicting the oldest element
//! - Fail-Fast: no operation ever blocks waiting for buffer state
//!
//! Two layers:
//! - [`RingBuffer`]: the unsynchronized core. Head/tail bookkeeping with
//!   wrap-around arithmetic; assumes external synchronization.
//! - [`SyncRingBuffer`]: one [`RingBuffer`] behind a single exclusive
//!   lock, safe to share across threads.

mod error;
mod ring_buffer;
mod sync_ring_buffer;

pub use error::RingBufferError;
pub use ring_buffer::RingBuffer;
pub use sync_ring_buffer::SyncRingBuffer;

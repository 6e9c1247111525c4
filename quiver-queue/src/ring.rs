//! Fixed-capacity queue over the ring buffer.
//!
//! The only variant whose enqueue can legitimately fail under normal use:
//! a full buffer rejects the value instead of growing. In exchange, the
//! queue runs on a single unchanging allocation with O(1) worst-case
//! operations and no reallocation jitter, which is the whole point of
//! choosing it over [`LinkedQueue`](crate::LinkedQueue).

use quiver_collections::RingBuffer;

use crate::{Full, Queue};

/// A queue over a fixed-capacity circular buffer.
#[derive(Debug, Clone)]
pub struct RingQueue<T> {
    buffer: RingBuffer<T>,
}

impl<T> RingQueue<T> {
    /// Creates a queue holding up to `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: RingBuffer::with_capacity(capacity),
        }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns `true` if the queue is at capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.buffer.is_full()
    }

    /// Appends a value at the back.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` without mutating anything if the queue is
    /// at capacity.
    #[inline]
    #[must_use = "try_push returns Err if full, which should be handled"]
    pub fn try_push(&mut self, value: T) -> Result<(), Full<T>> {
        self.buffer.write(value)
    }

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the queue is empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.buffer.read()
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.buffer.front()
    }

    /// Removes all elements from the queue. Capacity is unchanged.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl<T> Queue<T> for RingQueue<T> {
    #[inline]
    fn enqueue(&mut self, value: T) -> Result<(), Full<T>> {
        self.try_push(value)
    }

    #[inline]
    fn dequeue(&mut self) -> Option<T> {
        self.pop()
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        self.front()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}

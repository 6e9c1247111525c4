//! Helpers written against the [`Queue`] contract alone.
//!
//! Nothing here knows which storage strategy sits underneath; any current
//! or future [`Queue`] implementation gets these behaviors for free.

use crate::Queue;

/// Rotates the queue by one position.
///
/// Dequeues the front element, immediately re-enqueues it at the back, and
/// returns it. Calling this repeatedly cycles through the elements forever,
/// which is the turn-order pattern: whoever comes off the front goes
/// straight to the back of the line.
///
/// Returns `None` if the queue is empty.
pub fn rotate<T, Q>(queue: &mut Q) -> Option<T>
where
    T: Clone,
    Q: Queue<T>,
{
    let value = queue.dequeue()?;
    assert!(
        queue.enqueue(value.clone()).is_ok(),
        "re-enqueue after a dequeue cannot be rejected"
    );
    Some(value)
}

/// Returns a reversed copy of the queue.
///
/// The copy is drained into an auxiliary stack and refilled from it, so
/// successive dequeues on the result yield the original's elements in
/// reverse order. The original queue is left untouched. O(n) time, one
/// auxiliary stack of the queue's length.
pub fn reversed<T, Q>(queue: &Q) -> Q
where
    Q: Queue<T> + Clone,
{
    let mut copy = queue.clone();
    let mut stack = Vec::with_capacity(copy.len());

    while let Some(value) = copy.dequeue() {
        stack.push(value);
    }
    while let Some(value) = stack.pop() {
        assert!(
            copy.enqueue(value).is_ok(),
            "refilling a drained queue cannot be rejected"
        );
    }

    copy
}

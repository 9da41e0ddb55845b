//! Grow/shrink policy for the plain queue's backing buffer.
//!
//! Growth triggers at 100% occupancy and doubles; shrinking triggers only
//! below 25% occupancy and halves, and never while the queue holds
//! [`MIN_CAPACITY`] elements or fewer. The gap between the two thresholds
//! keeps an interleaved push/pop sequence from reallocating on every call.
//! The indexed queue never uses this policy: its index space is fixed at
//! construction.

use std::mem;

/// Floor for shrinking and the default initial capacity.
pub(crate) const MIN_CAPACITY: usize = 32;

/// True when the next append needs a bigger buffer.
#[inline(always)]
pub(crate) fn should_expand(len: usize, capacity: usize) -> bool {
    len == capacity
}

/// True when the buffer is empty enough to be worth halving.
#[inline(always)]
pub(crate) fn should_shrink(len: usize, capacity: usize) -> bool {
    len <= capacity / 4 && len > MIN_CAPACITY
}

/// Capacity after an expand trigger.
#[inline(always)]
pub(crate) fn expanded(capacity: usize) -> usize {
    if capacity == 0 {
        MIN_CAPACITY
    } else {
        capacity * 2
    }
}

/// Capacity after a shrink trigger.
#[inline(always)]
pub(crate) fn shrunk(capacity: usize) -> usize {
    capacity / 2
}

/// Moves every element into a fresh buffer allocated for `capacity`
/// slots, keeping element order, and releases the old buffer.
pub(crate) fn rebuffer<T>(data: &mut Vec<T>, capacity: usize) {
    debug_assert!(capacity >= data.len(), "rebuffer would drop elements");
    let old = mem::replace(data, Vec::with_capacity(capacity));
    data.extend(old);
}

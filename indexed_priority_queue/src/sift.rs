//! Sift primitives shared by both queues.
//!
//! The queues differ in what a heap slot holds (a bare value, or an index
//! into a values arena), so the algorithms are written against an abstract
//! slot view: compare two slots, exchange two slots. These two functions
//! are the only mutators of heap shape; every public queue operation is
//! "place or replace an element, then sift it into position".

/// Slot-level view of a binary heap.
///
/// Slots are 0-based: the parent of slot `k` is `(k - 1) / 2`, its
/// children are `2k + 1` and `2k + 2`. Implementors must keep any reverse
/// position mapping in sync inside [`exchange`].
///
/// [`exchange`]: HeapSlots::exchange
pub(crate) trait HeapSlots {
    /// Number of occupied slots.
    fn slot_count(&self) -> usize;

    /// True if the value in slot `a` must sink below the value in slot `b`.
    fn sinks_below(&self, a: usize, b: usize) -> bool;

    /// Swaps the contents of two slots.
    fn exchange(&mut self, a: usize, b: usize);

    /// Moves a slot toward the root while it is preferred over its parent.
    /// Returns the final slot.
    /// Time complexity - O(log n) comparisons and exchanges.
    fn sift_up(&mut self, position: usize) -> usize {
        debug_assert!(position < self.slot_count(), "Out of index in sift_up");
        let mut position = position;
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.sinks_below(parent, position) {
                self.exchange(parent, position);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    /// Moves a slot toward the leaves while one of its children is
    /// preferred over it.
    /// Returns the final slot.
    /// Time complexity - O(log n) comparisons and exchanges.
    fn sift_down(&mut self, position: usize) -> usize {
        debug_assert!(position < self.slot_count(), "Out of index in sift_down");
        let mut position = position;
        loop {
            let preferred_child = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.slot_count() {
                    break;
                }
                if child2 >= self.slot_count() || self.sinks_below(child2, child1) {
                    child1
                } else {
                    child2
                }
            };

            if self.sinks_below(position, preferred_child) {
                self.exchange(position, preferred_child);
                position = preferred_child;
            } else {
                break;
            }
        }
        position
    }
}

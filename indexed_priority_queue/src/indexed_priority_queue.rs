use std::fmt::{Debug, Display};

use crate::ordering::{HeapOrder, MaxFirst};
use crate::sift::HeapSlots;

/// A priority queue addressable by a fixed space of `usize` indices.
///
/// The queue is built over indices `0..capacity`, chosen at construction
/// and never grown. Each index is either absent or queued with exactly
/// one value, and a queued value can be replaced ([`set_value`]) or
/// removed ([`remove`]) in ***O(log n)*** no matter where it currently
/// sits in the heap. This is the classic decrease-key building block for
/// Dijkstra, Prim and friends; the crate docs walk through a full
/// Dijkstra run.
///
/// Internally the heap stores indices and a reverse map remembers each
/// index's heap slot, so addressing never searches.
///
/// It is a logic error to change a queued value's order rank other than
/// through [`set_value`]; updates through [`value_mut`] must keep the
/// rank unchanged.
///
/// [`set_value`]: struct.IndexedPriorityQueue.html#method.set_value
/// [`remove`]: struct.IndexedPriorityQueue.html#method.remove
/// [`value_mut`]: struct.IndexedPriorityQueue.html#method.value_mut
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_priority_queue::{IndexError, IndexedPriorityQueue};
///
/// // Eight addressable indices, biggest value on top.
/// let mut queue = IndexedPriorityQueue::with_capacity(8);
///
/// queue.push(0, 5).unwrap();
/// queue.push(1, 9).unwrap();
/// queue.push(2, 3).unwrap();
///
/// assert_eq!(queue.peek(), Some((1, &9)));
///
/// // Raise index 2 to the top; the old value comes back
/// assert_eq!(queue.set_value(2, 20), Ok(3));
/// assert_eq!(queue.peek(), Some((2, &20)));
///
/// // Drop index 1 out of the middle of the queue
/// assert_eq!(queue.remove(1), Ok(9));
/// assert!(!queue.contains(1));
///
/// assert_eq!(queue.pop(), Some((2, 20)));
/// assert_eq!(queue.peek(), Some((0, &5)));
///
/// // Every index-taking operation is checked
/// assert_eq!(queue.push(100, 1), Err(IndexError::OutOfBounds));
/// assert_eq!(queue.set_value(3, 1), Err(IndexError::NotQueued));
/// ```
///
/// ## Min queue
///
/// ```
/// use indexed_priority_queue::{IndexedPriorityQueue, MinFirst};
///
/// let mut queue = IndexedPriorityQueue::with_capacity_and_order(4, MinFirst);
/// queue.push(0, 30u32).unwrap();
/// queue.push(1, 10).unwrap();
/// queue.push(2, 20).unwrap();
/// assert_eq!(queue.pop(), Some((1, 10)));
/// assert_eq!(queue.pop(), Some((2, 20)));
/// assert_eq!(queue.pop(), Some((0, 30)));
/// ```
#[derive(Clone)]
pub struct IndexedPriorityQueue<T, O = MaxFirst>
where
    O: HeapOrder<T>,
{
    values: Vec<Option<T>>,
    heap: Vec<usize>,
    position_of: Vec<Option<usize>>,
    order: O,
}

impl<T: Ord> IndexedPriorityQueue<T, MaxFirst> {
    /// Creates an empty max-first queue over indices `0..capacity`.
    /// The index space is fixed for the queue's whole life.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(16);
    /// queue.push(3, 40).unwrap();
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MaxFirst)
    }
}

impl<T, O: HeapOrder<T>> IndexedPriorityQueue<T, O> {
    /// Creates an empty queue over indices `0..capacity` with a
    /// caller-supplied order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexedPriorityQueue, MinFirst};
    /// let mut queue = IndexedPriorityQueue::with_capacity_and_order(16, MinFirst);
    /// queue.push(3, 40).unwrap();
    /// ```
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            values: (0..capacity).map(|_| None).collect(),
            heap: Vec::with_capacity(capacity),
            position_of: vec![None; capacity],
            order,
        }
    }

    /// Queues `value` under `index`.
    ///
    /// Fails with [`IndexError::OutOfBounds`] if `index` does not fit the
    /// queue's index space, and with [`IndexError::AlreadyQueued`] if a
    /// value is queued under `index` already. A full queue needs no
    /// dedicated error: the heap only fills up when every index is
    /// queued, so `AlreadyQueued` is what a push into a full queue hits.
    ///
    /// [`IndexError::OutOfBounds`]: enum.IndexError.html#variant.OutOfBounds
    /// [`IndexError::AlreadyQueued`]: enum.IndexError.html#variant.AlreadyQueued
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexError, IndexedPriorityQueue};
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// assert_eq!(queue.push(2, 8), Ok(()));
    /// assert_eq!(queue.push(2, 9), Err(IndexError::AlreadyQueued));
    /// assert_eq!(queue.push(4, 1), Err(IndexError::OutOfBounds));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    pub fn push(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        match self.position_of.get(index) {
            None => return Err(IndexError::OutOfBounds),
            Some(Some(_)) => return Err(IndexError::AlreadyQueued),
            Some(None) => {}
        }
        self.values[index] = Some(value);
        self.heap.push(index);
        self.position_of[index] = Some(self.heap.len() - 1);
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Index and value that would be popped next, or `None` when the
    /// queue is empty.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(0, 3).unwrap();
    /// queue.push(1, 7).unwrap();
    /// assert_eq!(queue.peek(), Some((1, &7)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek(&self) -> Option<(usize, &T)> {
        let &index = self.heap.first()?;
        let value = self.values[index].as_ref().expect("queued index has a value");
        Some((index, value))
    }

    /// Removes and returns the most preferred index and value, or `None`
    /// when the queue is empty. The index becomes absent and may be
    /// pushed again.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(0, 3).unwrap();
    /// queue.push(1, 7).unwrap();
    /// assert_eq!(queue.pop(), Some((1, 7)));
    /// assert_eq!(queue.pop(), Some((0, 3)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    pub fn pop(&mut self) -> Option<(usize, T)> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.exchange(0, last);
        let index = self.heap.pop().expect("heap checked non-empty");
        self.position_of[index] = None;
        let value = self.values[index].take().expect("queued index has a value");
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some((index, value))
    }

    /// Replaces the value queued under `index`, restores heap order and
    /// returns the previous value.
    ///
    /// Both sift directions run unconditionally: whichever does not apply
    /// compares one level and stops, which costs less than re-deriving
    /// the order's direction here.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(0, 3).unwrap();
    /// queue.push(1, 7).unwrap();
    /// assert_eq!(queue.set_value(0, 10), Ok(3));
    /// assert_eq!(queue.peek(), Some((0, &10)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    pub fn set_value(&mut self, index: usize, value: T) -> Result<T, IndexError> {
        let position = self.queued_position(index)?;
        let old = self.values[index].replace(value).expect("queued index has a value");
        let position = self.sift_up(position);
        self.sift_down(position);
        Ok(old)
    }

    /// True if a value is queued under `index`. Out-of-range indices are
    /// simply not queued, so the answer is `false` rather than an error.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(2, 8).unwrap();
    /// assert!(queue.contains(2));
    /// assert!(!queue.contains(0));
    /// assert!(!queue.contains(1000));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        matches!(self.position_of.get(index), Some(Some(_)))
    }

    /// Removes the value queued under `index`, wherever it sits in the
    /// heap, and returns it. The index becomes absent and may be pushed
    /// again.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(8);
    /// for (index, value) in [(0, 10), (1, 40), (2, 20), (3, 30)] {
    ///     queue.push(index, value).unwrap();
    /// }
    /// assert_eq!(queue.remove(2), Ok(20));
    /// assert_eq!(queue.pop(), Some((1, 40)));
    /// assert_eq!(queue.pop(), Some((3, 30)));
    /// // There is no index 2
    /// assert_eq!(queue.pop(), Some((0, 10)));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(log n)***
    pub fn remove(&mut self, index: usize) -> Result<T, IndexError> {
        let position = self.queued_position(index)?;
        let last = self.heap.len() - 1;
        self.exchange(position, last);
        self.heap.pop().expect("heap checked non-empty");
        self.position_of[index] = None;
        let value = self.values[index].take().expect("queued index has a value");
        // The former last element landed in the vacated slot; it may
        // belong on either side of it.
        if position < self.heap.len() {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
        Ok(value)
    }

    /// Reference to the value queued under `index`, bypassing the heap.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{IndexError, IndexedPriorityQueue};
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(2, 8).unwrap();
    /// assert_eq!(queue.value(2), Ok(&8));
    /// assert_eq!(queue.value(0), Err(IndexError::NotQueued));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn value(&self, index: usize) -> Result<&T, IndexError> {
        self.queued_position(index)?;
        Ok(self.values[index].as_ref().expect("queued index has a value"))
    }

    /// Mutable reference to the value queued under `index`, bypassing the
    /// heap.
    ///
    /// The heap is not re-ordered afterwards: this is for updates that do
    /// not change where the order ranks the value (auxiliary payload
    /// fields). Use [`set_value`] when the update can move the value.
    ///
    /// [`set_value`]: struct.IndexedPriorityQueue.html#method.set_value
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn value_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.queued_position(index)?;
        Ok(self.values[index].as_mut().expect("queued index has a value"))
    }

    /// Number of queued indices.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Size of the index space chosen at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Makes every index absent. The index space is kept.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(1, 5).unwrap();
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert!(!queue.contains(1));
    /// assert_eq!(queue.push(1, 6), Ok(()));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    pub fn clear(&mut self) {
        while let Some(index) = self.heap.pop() {
            self.values[index] = None;
            self.position_of[index] = None;
        }
    }

    /// Readonly iterator over queued `(index, &value)` pairs in arbitrary
    /// order.
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(0, 3).unwrap();
    /// queue.push(1, 7).unwrap();
    /// let mut pairs: Vec<(usize, i32)> = queue.iter().map(|(i, &v)| (i, v)).collect();
    /// pairs.sort_unstable();
    /// assert_eq!(pairs, vec![(0, 3), (1, 7)]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> IndexedPriorityQueueBorrowIter<'_, T> {
        IndexedPriorityQueueBorrowIter {
            heap_iterator: self.heap.iter(),
            values: &self.values,
        }
    }

    // Heap slot of a queued index, or the reason it has none.
    fn queued_position(&self, index: usize) -> Result<usize, IndexError> {
        match self.position_of.get(index) {
            None => Err(IndexError::OutOfBounds),
            Some(None) => Err(IndexError::NotQueued),
            Some(&Some(position)) => Ok(position),
        }
    }
}

impl<T, O: HeapOrder<T>> HeapSlots for IndexedPriorityQueue<T, O> {
    #[inline(always)]
    fn slot_count(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    fn sinks_below(&self, a: usize, b: usize) -> bool {
        let left = self.values[self.heap[a]].as_ref().expect("queued index has a value");
        let right = self.values[self.heap[b]].as_ref().expect("queued index has a value");
        self.order.sinks_below(left, right)
    }

    #[inline(always)]
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_of[self.heap[a]] = Some(a);
        self.position_of[self.heap[b]] = Some(b);
    }
}

impl<T: Debug, O: HeapOrder<T>> Debug for IndexedPriorityQueue<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<T, O: HeapOrder<T>> IntoIterator for IndexedPriorityQueue<T, O> {
    type Item = (usize, T);
    type IntoIter = IndexedPriorityQueueIterator<T, O>;

    /// Makes an iterator that returns `(index, value)` pairs in the order
    /// implied by the queue's order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::IndexedPriorityQueue;
    /// let mut queue = IndexedPriorityQueue::with_capacity(4);
    /// queue.push(0, 10).unwrap();
    /// queue.push(1, 30).unwrap();
    /// queue.push(2, 20).unwrap();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some((1, 30)));
    /// assert_eq!(iterator.next(), Some((2, 20)));
    /// assert_eq!(iterator.next(), Some((0, 10)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for whole iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// Consuming iterator that pops the queue until it is empty.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct IndexedPriorityQueueIterator<T, O = MaxFirst>
where
    O: HeapOrder<T>,
{
    queue: IndexedPriorityQueue<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for IndexedPriorityQueueIterator<T, O> {
    type Item = (usize, T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

/// Unordered borrowing iterator over queued `(index, &value)` pairs.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n)***
pub struct IndexedPriorityQueueBorrowIter<'a, T> {
    heap_iterator: std::slice::Iter<'a, usize>,
    values: &'a [Option<T>],
}

impl<'a, T> Iterator for IndexedPriorityQueueBorrowIter<'a, T> {
    type Item = (usize, &'a T);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let values = self.values;
        self.heap_iterator
            .next()
            .map(|&index| (index, values[index].as_ref().expect("queued index has a value")))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.heap_iterator.size_hint()
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.heap_iterator.count()
    }
}

/// Why an index-taking queue operation was rejected.
///
/// Returned by [`push`], [`set_value`], [`remove`], [`value`] and
/// [`value_mut`] of [`IndexedPriorityQueue`].
///
/// [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
/// [`push`]: struct.IndexedPriorityQueue.html#method.push
/// [`set_value`]: struct.IndexedPriorityQueue.html#method.set_value
/// [`remove`]: struct.IndexedPriorityQueue.html#method.remove
/// [`value`]: struct.IndexedPriorityQueue.html#method.value
/// [`value_mut`]: struct.IndexedPriorityQueue.html#method.value_mut
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum IndexError {
    /// The index does not fit the queue's fixed index space.
    OutOfBounds,
    /// A push hit an index that already has a queued value.
    AlreadyQueued,
    /// The index fits the space but nothing is queued under it.
    NotQueued,
}

impl Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            IndexError::OutOfBounds => write!(f, "index is outside the queue index space"),
            IndexError::AlreadyQueued => write!(f, "index already has a queued value"),
            IndexError::NotQueued => write!(f, "index has no queued value"),
        }
    }
}

impl std::error::Error for IndexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ordering::MinFirst;
    use std::cmp::Reverse;

    fn is_valid_heap<T, O: HeapOrder<T>>(queue: &IndexedPriorityQueue<T, O>) -> bool {
        for (slot, &index) in queue.heap.iter().enumerate().skip(1) {
            let parent = queue.heap[(slot - 1) / 2];
            let parent_value = queue.values[parent].as_ref().unwrap();
            let value = queue.values[index].as_ref().unwrap();
            if queue.order.sinks_below(parent_value, value) {
                return false;
            }
        }
        true
    }

    fn is_valid_mapping<T, O: HeapOrder<T>>(queue: &IndexedPriorityQueue<T, O>) -> bool {
        for (slot, &index) in queue.heap.iter().enumerate() {
            if queue.position_of[index] != Some(slot) {
                return false;
            }
        }
        let mut queued = 0;
        for index in 0..queue.capacity() {
            if queue.position_of[index].is_some() != queue.values[index].is_some() {
                return false;
            }
            if queue.position_of[index].is_some() {
                queued += 1;
            }
        }
        queued == queue.len()
    }

    #[test]
    fn test_top_follows_updates() {
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        queue.push(0, 5).unwrap();
        queue.push(1, 9).unwrap();
        queue.push(2, 3).unwrap();
        assert_eq!(queue.peek(), Some((1, &9)));

        assert_eq!(queue.set_value(2, 20), Ok(3));
        assert_eq!(queue.peek(), Some((2, &20)));

        assert_eq!(queue.remove(1), Ok(9));
        assert!(!queue.contains(1));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.pop(), Some((2, 20)));
        assert_eq!(queue.peek(), Some((0, &5)));
        assert!(is_valid_heap(&queue));
        assert!(is_valid_mapping(&queue));
    }

    #[test]
    fn test_pop_sorted_extraction() {
        let items = [
            -16, 5, 11, -1, -34, -42, -5, -6, 25, -35, 14, 35, -2, 40, 42, 43, -45, -48, 48, -38,
            -28, -33, -31, 34, -18, 24, 16, -32, -11, -7, -36, -39, 36, -41, -37, 31, -40, -23, 26,
            44, 38, 10, -49, 30, 7, 13, 12, -4, -12, -24, -50, 27, 41, 46, -25, -22, -8, -43, 28,
            45, -47, 8, 9, 21, 49, -13, -5, -35, -37, 23, -3, -26, 6, -14, 17, -44, -15, -39, -27,
        ];

        let mut queue = IndexedPriorityQueue::with_capacity(items.len());
        for (i, &x) in items.iter().enumerate() {
            queue.push(i, x).unwrap();
            assert!(
                is_valid_heap(&queue),
                "Heap state is invalid after pushing {}",
                x
            );
            assert!(is_valid_mapping(&queue));
        }

        let mut sorted_items = items;
        sorted_items.sort_unstable_by_key(|&x| Reverse(x));
        for &x in sorted_items.iter() {
            let (index, value) = queue.pop().unwrap();
            assert_eq!(value, x);
            assert_eq!(items[index], value);
            assert!(is_valid_heap(&queue), "Heap is invalid after {}", x);
            assert!(is_valid_mapping(&queue));
        }
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_min_order() {
        let mut queue = IndexedPriorityQueue::with_capacity_and_order(16, MinFirst);
        for (i, x) in [5, 1, 4, 2, 8].into_iter().enumerate() {
            queue.push(i, x).unwrap();
        }
        assert_eq!(queue.pop(), Some((1, 1)));
        assert_eq!(queue.pop(), Some((3, 2)));
        assert_eq!(queue.pop(), Some((2, 4)));
        assert_eq!(queue.pop(), Some((0, 5)));
        assert_eq!(queue.pop(), Some((4, 8)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_contains_lifecycle() {
        let mut queue = IndexedPriorityQueue::with_capacity(4);
        assert!(!queue.contains(2));
        queue.push(2, 8).unwrap();
        assert!(queue.contains(2));
        assert_eq!(queue.remove(2), Ok(8));
        assert!(!queue.contains(2));

        queue.push(2, 9).unwrap();
        assert_eq!(queue.pop(), Some((2, 9)));
        assert!(!queue.contains(2));

        assert!(!queue.contains(4));
        assert!(!queue.contains(usize::MAX));
    }

    #[test]
    fn test_push_errors() {
        let mut queue = IndexedPriorityQueue::with_capacity(4);
        assert_eq!(queue.push(4, 1), Err(IndexError::OutOfBounds));
        assert_eq!(queue.push(usize::MAX, 1), Err(IndexError::OutOfBounds));
        assert_eq!(queue.push(0, 1), Ok(()));
        assert_eq!(queue.push(0, 2), Err(IndexError::AlreadyQueued));
        // The failed pushes changed nothing.
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.value(0), Ok(&1));
    }

    #[test]
    fn test_absent_index_errors() {
        let mut queue = IndexedPriorityQueue::<i32>::with_capacity(4);
        assert_eq!(queue.set_value(1, 5), Err(IndexError::NotQueued));
        assert_eq!(queue.remove(1), Err(IndexError::NotQueued));
        assert_eq!(queue.value(1), Err(IndexError::NotQueued));
        assert_eq!(queue.value_mut(1), Err(IndexError::NotQueued));
        assert_eq!(queue.set_value(9, 5), Err(IndexError::OutOfBounds));
        assert_eq!(queue.remove(9), Err(IndexError::OutOfBounds));
        assert_eq!(queue.value(9), Err(IndexError::OutOfBounds));
        assert_eq!(queue.value_mut(9), Err(IndexError::OutOfBounds));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_rejects_pushes() {
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for index in 0..8 {
            queue.push(index, index as i32 * 10).unwrap();
        }
        assert_eq!(queue.len(), queue.capacity());
        for index in 0..8 {
            assert_eq!(queue.push(index, 0), Err(IndexError::AlreadyQueued));
        }
        assert_eq!(queue.push(8, 0), Err(IndexError::OutOfBounds));

        for expected in (0..8).rev() {
            assert_eq!(queue.pop(), Some((expected, expected as i32 * 10)));
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_set_value_moves_both_directions() {
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for (index, value) in [(0, 50), (1, 40), (2, 30), (3, 20), (4, 10)] {
            queue.push(index, value).unwrap();
        }

        // Up: the bottom entry becomes the top.
        assert_eq!(queue.set_value(4, 99), Ok(10));
        assert_eq!(queue.peek(), Some((4, &99)));
        assert!(is_valid_heap(&queue));
        assert!(is_valid_mapping(&queue));
        assert_eq!(queue.value(4), Ok(&99));

        // Down: the top sinks under everything else.
        assert_eq!(queue.set_value(4, -1), Ok(99));
        assert_eq!(queue.peek(), Some((0, &50)));
        assert!(is_valid_heap(&queue));
        assert!(is_valid_mapping(&queue));

        let drained: Vec<i32> = queue.into_iter().map(|(_, value)| value).collect();
        assert_eq!(drained, vec![50, 40, 30, 20, -1]);
    }

    #[test]
    fn test_remove_sifts_replacement_up() {
        // Shaped so the last element (19) outranks the removed slot's
        // parent (18) and must sift up after the swap.
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for (index, value) in [(0, 100), (1, 18), (2, 90), (3, 10), (4, 15), (5, 80), (6, 19)] {
            queue.push(index, value).unwrap();
        }
        assert!(is_valid_heap(&queue));

        assert_eq!(queue.remove(3), Ok(10));
        assert!(is_valid_heap(&queue), "Heap is invalid after remove");
        assert!(is_valid_mapping(&queue));

        let drained: Vec<(usize, i32)> = queue.into_iter().collect();
        assert_eq!(
            drained,
            vec![(0, 100), (2, 90), (5, 80), (6, 19), (1, 18), (4, 15)]
        );
    }

    #[test]
    fn test_remove_last_slot() {
        let mut queue = IndexedPriorityQueue::with_capacity(4);
        queue.push(0, 30).unwrap();
        queue.push(1, 20).unwrap();
        assert_eq!(queue.remove(1), Ok(20));
        assert_eq!(queue.len(), 1);
        assert!(is_valid_mapping(&queue));
        assert_eq!(queue.pop(), Some((0, 30)));
    }

    #[test]
    fn test_value_mut_keeps_position() {
        let mut queue = IndexedPriorityQueue::with_capacity(4);
        queue.push(0, 5).unwrap();
        queue.push(1, 9).unwrap();
        // Raising the current top keeps it the top.
        *queue.value_mut(1).unwrap() = 11;
        assert_eq!(queue.value(1), Ok(&11));
        assert!(is_valid_heap(&queue));
        assert_eq!(queue.pop(), Some((1, 11)));
    }

    #[test]
    fn test_clear() {
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for index in 0..5 {
            queue.push(index, index as i32).unwrap();
        }
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 8);
        for index in 0..5 {
            assert!(!queue.contains(index));
        }
        assert!(is_valid_mapping(&queue));
        // The space is reusable after a clear.
        assert_eq!(queue.push(3, 7), Ok(()));
        assert_eq!(queue.pop(), Some((3, 7)));
    }

    #[test]
    fn test_zero_capacity() {
        let mut queue = IndexedPriorityQueue::<i32>::with_capacity(0);
        assert_eq!(queue.capacity(), 0);
        assert!(queue.is_empty());
        assert!(!queue.contains(0));
        assert_eq!(queue.push(0, 1), Err(IndexError::OutOfBounds));
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_iteration() {
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for (index, value) in [(4, 1), (0, 5), (2, 3), (1, 4), (3, 2)] {
            queue.push(index, value).unwrap();
        }
        let mut iter = queue.into_iter();
        assert_eq!(iter.next(), Some((0, 5)));
        assert_eq!(iter.next(), Some((1, 4)));
        assert_eq!(iter.next(), Some((2, 3)));
        assert_eq!(iter.next(), Some((3, 2)));
        assert_eq!(iter.next(), Some((4, 1)));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_borrow_iter() {
        let pairs = [(4, 1), (0, 5), (2, 3), (1, 4), (3, 2)];
        let mut queue = IndexedPriorityQueue::with_capacity(8);
        for (index, value) in pairs {
            queue.push(index, value).unwrap();
        }
        let mut seen: Vec<(usize, i32)> = queue.iter().map(|(i, &v)| (i, v)).collect();
        seen.sort_unstable();
        let mut expected = pairs.to_vec();
        expected.sort_unstable();
        assert_eq!(seen, expected);
        assert_eq!(queue.len(), pairs.len());
    }

    #[test]
    fn test_fmt() {
        let mut queue = IndexedPriorityQueue::with_capacity(3);
        queue.push(0, 5).unwrap();
        queue.push(1, 9).unwrap();
        assert_eq!(format!("{:?}", queue), "{1: 9, 0: 5}");
    }

    #[test]
    fn test_random_ops_keep_invariants() {
        use rand::prelude::*;
        use rand_chacha::ChaCha8Rng;
        use std::collections::HashMap;

        let mut rng = ChaCha8Rng::seed_from_u64(8345);
        let capacity = 64usize;
        let mut queue: IndexedPriorityQueue<i64> = IndexedPriorityQueue::with_capacity(capacity);
        let mut mirror: HashMap<usize, i64> = HashMap::new();

        for _ in 0..2000 {
            let index = rng.gen_range(0..capacity);
            let value = rng.gen_range(-1000i64..1000);
            match rng.gen_range(0u8..4) {
                0 => {
                    let result = queue.push(index, value);
                    if mirror.contains_key(&index) {
                        assert_eq!(result, Err(IndexError::AlreadyQueued));
                    } else {
                        assert_eq!(result, Ok(()));
                        mirror.insert(index, value);
                    }
                }
                1 => {
                    let result = queue.set_value(index, value);
                    if mirror.contains_key(&index) {
                        let old = mirror.insert(index, value).unwrap();
                        assert_eq!(result, Ok(old));
                    } else {
                        assert_eq!(result, Err(IndexError::NotQueued));
                    }
                }
                2 => {
                    let result = queue.remove(index);
                    match mirror.remove(&index) {
                        Some(old) => assert_eq!(result, Ok(old)),
                        None => assert_eq!(result, Err(IndexError::NotQueued)),
                    }
                }
                _ => match queue.pop() {
                    Some((popped_index, popped_value)) => {
                        assert_eq!(mirror.remove(&popped_index), Some(popped_value));
                        assert!(mirror.values().all(|&left| left <= popped_value));
                    }
                    None => assert!(mirror.is_empty()),
                },
            }
            assert_eq!(queue.len(), mirror.len());
            assert!(is_valid_heap(&queue));
            assert!(is_valid_mapping(&queue));
        }

        let mut drained = Vec::new();
        while let Some((index, value)) = queue.pop() {
            assert_eq!(mirror.remove(&index), Some(value));
            drained.push(value);
        }
        assert!(mirror.is_empty());
        let mut expected = drained.clone();
        expected.sort_unstable_by_key(|&x| Reverse(x));
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<IndexedPriorityQueue<i32>>();
    }

    #[test]
    fn test_send() {
        fn assert_send<T: Send>() {}
        assert_send::<IndexedPriorityQueue<i32>>();
    }
}

use std::fmt::Debug;
use std::iter::FromIterator;

use crate::growth;
use crate::ordering::{HeapOrder, MaxFirst};
use crate::sift::HeapSlots;

/// An array-backed priority queue over anonymous values.
///
/// The order decides which value surfaces: with the default [`MaxFirst`]
/// popping returns the biggest value first. Values are not addressable
/// after they are pushed; use [`IndexedPriorityQueue`] when elements must
/// be updated or removed while queued.
///
/// The backing buffer doubles when full and halves when occupancy drops
/// below a quarter, never shrinking while the queue holds 32 elements or
/// fewer, so long push/pop sequences stay amortized ***O(log n)***.
///
/// [`MaxFirst`]: struct.MaxFirst.html
/// [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
///
/// # Examples
///
/// ## Main example
/// ```
/// use indexed_priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek(), None);
///
/// queue.push(4);
/// queue.push(3);
/// queue.push(5);
/// queue.push(2);
/// queue.push(1);
///
/// assert_eq!(queue.peek(), Some(&5));
/// assert_eq!(queue.len(), 5);
///
/// // We can clone queue if the value type is clonable
/// let queue_clone = queue.clone();
///
/// // Consuming iterator returns values in decreasing order
/// let drained: Vec<i32> = queue_clone.into_iter().collect();
/// assert_eq!(drained, vec![5, 4, 3, 2, 1]);
///
/// // Popping always returns the biggest value
/// assert_eq!(queue.pop(), Some(5));
/// assert_eq!(queue.pop(), Some(4));
///
/// // We can clear queue
/// queue.clear();
/// assert!(queue.is_empty());
/// ```
///
/// ## Min queue
///
/// ```
/// use indexed_priority_queue::{MinFirst, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_order(MinFirst);
/// for x in [5, 1, 4, 2, 8] {
///     queue.push(x);
/// }
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(2));
/// assert_eq!(queue.pop(), Some(4));
/// ```
#[derive(Clone)]
pub struct PriorityQueue<T, O = MaxFirst>
where
    O: HeapOrder<T>,
{
    data: Vec<T>,
    order: O,
}

impl<T: Ord> PriorityQueue<T, MaxFirst> {
    /// Creates an empty max-first queue with the default backing capacity.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(4);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(growth::MIN_CAPACITY)
    }

    /// Creates an empty max-first queue with room for `capacity` values
    /// before the first buffer growth.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::with_capacity(10);
    /// queue.push(4);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, MaxFirst)
    }
}

impl<T, O: HeapOrder<T>> PriorityQueue<T, O> {
    /// Creates an empty queue with a caller-supplied order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{MinFirst, PriorityQueue};
    /// let mut queue = PriorityQueue::with_order(MinFirst);
    /// queue.push(4);
    /// assert_eq!(queue.peek(), Some(&4));
    /// ```
    #[inline]
    pub fn with_order(order: O) -> Self {
        Self::with_capacity_and_order(growth::MIN_CAPACITY, order)
    }

    /// Creates an empty queue with a caller-supplied order and room for
    /// `capacity` values before the first buffer growth.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::{OrderBy, PriorityQueue};
    /// let mut queue = PriorityQueue::with_capacity_and_order(10, OrderBy(|a: &f32, b: &f32| a < b));
    /// queue.push(4.0);
    /// ```
    #[inline]
    pub fn with_capacity_and_order(capacity: usize, order: O) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Adds a value to the queue.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue = PriorityQueue::new();
    /// queue.push(5);
    /// queue.push(10);
    /// assert_eq!(queue.peek(), Some(&10));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***.
    /// The worst case is when the buffer grows; that single call is ***O(n)***.
    pub fn push(&mut self, value: T) {
        if growth::should_expand(self.data.len(), self.data.capacity()) {
            let capacity = growth::expanded(self.data.capacity());
            growth::rebuffer(&mut self.data, capacity);
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Reference to the value that would be popped next, or `None` when
    /// the queue is empty.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let queue: PriorityQueue<i32> = (0..5).collect();
    /// assert_eq!(queue.peek(), Some(&4));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the most preferred value, or `None` when the
    /// queue is empty.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32> = (0..5).collect();
    /// assert_eq!(queue.pop(), Some(4));
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), Some(2));
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.pop(), Some(0));
    /// assert_eq!(queue.pop(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Amortized ***O(log n)***; a call that shrinks the buffer is ***O(n)***.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let value = self.data.pop();
        if growth::should_shrink(self.data.len(), self.data.capacity()) {
            let capacity = growth::shrunk(self.data.capacity());
            growth::rebuffer(&mut self.data, capacity);
        }
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        value
    }

    /// Number of queued values.
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = indexed_priority_queue::PriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.push(5);
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Values the backing buffer holds before the next growth.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Drops every queued value. The buffer is kept.
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32> = (0..5).collect();
    /// assert!(!queue.is_empty());
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear()
    }

    /// Readonly iterator over the queued values in arbitrary order.
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let queue: PriorityQueue<i32> = (0..5).collect();
    /// let mut seen: Vec<i32> = queue.iter().copied().collect();
    /// seen.sort_unstable();
    /// assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Iterating over whole queue is ***O(n)***
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T, O: HeapOrder<T>> HeapSlots for PriorityQueue<T, O> {
    #[inline(always)]
    fn slot_count(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn sinks_below(&self, a: usize, b: usize) -> bool {
        self.order.sinks_below(&self.data[a], &self.data[b])
    }

    #[inline(always)]
    fn exchange(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

impl<T: Debug, O: HeapOrder<T>> Debug for PriorityQueue<T, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, O: HeapOrder<T> + Default> Default for PriorityQueue<T, O> {
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_order(growth::MIN_CAPACITY, O::default())
    }
}

impl<T, O: HeapOrder<T> + Default> FromIterator<T> for PriorityQueue<T, O> {
    /// Builds the queue from an iterator using `collect()`.
    ///
    /// Sifts down every non-leaf slot instead of pushing values one by
    /// one, so the build is ***O(n)***.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let mut queue: PriorityQueue<i32> = [3, 60, -4, 17].iter().copied().collect();
    /// assert_eq!(queue.pop(), Some(60));
    /// assert_eq!(queue.pop(), Some(17));
    /// assert_eq!(queue.pop(), Some(3));
    /// assert_eq!(queue.pop(), Some(-4));
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self {
            data: iter.into_iter().collect(),
            order: O::default(),
        };
        for position in (0..queue.data.len() / 2).rev() {
            queue.sift_down(position);
        }
        queue
    }
}

impl<T, O: HeapOrder<T>> IntoIterator for PriorityQueue<T, O> {
    type Item = T;
    type IntoIter = PriorityQueueIterator<T, O>;

    /// Makes an iterator that returns values in the order implied by the
    /// queue's order.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use indexed_priority_queue::PriorityQueue;
    /// let queue: PriorityQueue<i32> = [1, 3, 2].iter().copied().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), Some(2));
    /// assert_eq!(iterator.next(), Some(1));
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
pub struct PriorityQueueIterator<T, O = MaxFirst>
where
    O: HeapOrder<T>,
{
    queue: PriorityQueue<T, O>,
}

impl<T, O: HeapOrder<T>> Iterator for PriorityQueueIterator<T, O> {
    type Item = T;

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

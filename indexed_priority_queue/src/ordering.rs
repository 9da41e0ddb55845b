/// Decides which of two values should sit closer to the heap root.
///
/// `sinks_below(a, b) == true` means `a` must sink toward the leaves
/// relative to `b`, so `b` surfaces. A "less than" order therefore keeps
/// the biggest value at the root, a "greater than" order the smallest.
/// No secondary tie-break exists: values the order treats as equal come
/// out in arbitrary relative order.
///
/// It is a logic error if the answer for a pair of values changes while
/// they are in a queue. This is normally only possible through `Cell`,
/// `RefCell`, global state, IO, or unsafe code.
///
/// The queues take the order as a type parameter defaulting to
/// [`MaxFirst`]; implement this trait on your own unit struct, or wrap a
/// closure in [`OrderBy`], when the shipped orders don't fit.
///
/// [`MaxFirst`]: struct.MaxFirst.html
/// [`OrderBy`]: struct.OrderBy.html
pub trait HeapOrder<T> {
    /// Returns true if `a` must give up the root side to `b`.
    fn sinks_below(&self, a: &T, b: &T) -> bool;
}

/// Order that surfaces the biggest value first. The default.
///
/// ### Examples
///
///
/// ```
/// use indexed_priority_queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push(3);
/// queue.push(7);
/// queue.push(5);
/// assert_eq!(queue.pop(), Some(7));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> HeapOrder<T> for MaxFirst {
    #[inline(always)]
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Order that surfaces the smallest value first.
///
/// ### Examples
///
///
/// ```
/// use indexed_priority_queue::{MinFirst, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_order(MinFirst);
/// queue.push(3);
/// queue.push(7);
/// queue.push(5);
/// assert_eq!(queue.pop(), Some(3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> HeapOrder<T> for MinFirst {
    #[inline(always)]
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Adapts a `sinks below` closure into a heap order.
///
/// Useful for value types without a total `Ord`, such as floats:
///
/// ```
/// use indexed_priority_queue::{OrderBy, PriorityQueue};
///
/// let mut queue = PriorityQueue::with_order(OrderBy(|a: &f64, b: &f64| a < b));
/// queue.push(0.5);
/// queue.push(1.5);
/// assert_eq!(queue.pop(), Some(1.5));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct OrderBy<F>(pub F);

impl<T, F: Fn(&T, &T) -> bool> HeapOrder<T> for OrderBy<F> {
    #[inline(always)]
    fn sinks_below(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

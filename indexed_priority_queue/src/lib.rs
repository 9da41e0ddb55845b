//! Binary heap priority queues that support value updates and early
//! removal through stable `usize` indices.
//!
//! [`PriorityQueue`] is a plain heap over a growable buffer.
//! [`IndexedPriorityQueue`] is built over a fixed index space chosen at
//! construction: every queued value is addressed by its index, so its
//! value can be replaced or the entry removed without searching the heap.
//!
//! Both queues pop the biggest value first by default and take an order
//! type parameter ([`MaxFirst`], [`MinFirst`] or [`OrderBy`]) to change
//! that.
//!
//! Push, pop, value update and removal have ***O(log n)*** time
//! complexity; peek and lookup by index are ***O(1)***.
//!
//! # Examples
//!
//! This is implementation of [Dijkstra's algorithm][dijkstra] over an
//! adjacency list. Nodes are numbered `0..n`, which makes them indices
//! into the queue directly.
//!
//! Whenever a cheaper path to a node in the frontier is found, its
//! queued cost must be lowered. This example shows how to do that with
//! [`set_value`] instead of queueing the node a second time.
//!
//! [dijkstra]: https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
//! [`PriorityQueue`]: struct.PriorityQueue.html
//! [`IndexedPriorityQueue`]: struct.IndexedPriorityQueue.html
//! [`MaxFirst`]: struct.MaxFirst.html
//! [`MinFirst`]: struct.MinFirst.html
//! [`OrderBy`]: struct.OrderBy.html
//! [`set_value`]: struct.IndexedPriorityQueue.html#method.set_value
//!
//! ```
//! use indexed_priority_queue::{IndexedPriorityQueue, MinFirst};
//!
//! // graph[node] lists (neighbor, edge weight) pairs.
//! let graph: Vec<Vec<(usize, u32)>> = vec![
//!     vec![(1, 4), (2, 1)],
//!     vec![(3, 1)],
//!     vec![(1, 2), (3, 5)],
//!     vec![],
//! ];
//!
//! let mut distance = vec![u32::MAX; graph.len()];
//! distance[0] = 0;
//!
//! // Frontier of reachable nodes, cheapest on top.
//! let mut frontier = IndexedPriorityQueue::with_capacity_and_order(graph.len(), MinFirst);
//! frontier.push(0, 0u32).unwrap();
//!
//! while let Some((node, cost)) = frontier.pop() {
//!     for &(next, weight) in &graph[node] {
//!         let candidate = cost + weight;
//!         if candidate < distance[next] {
//!             distance[next] = candidate;
//!             if frontier.contains(next) {
//!                 // Cheaper path to a node already in the frontier.
//!                 frontier.set_value(next, candidate).unwrap();
//!             } else {
//!                 frontier.push(next, candidate).unwrap();
//!             }
//!         }
//!     }
//! }
//!
//! assert_eq!(distance, [0, 3, 1, 4]);
//! ```

mod growth;
mod indexed_priority_queue;
mod ordering;
mod priority_queue;
mod sift;

pub use crate::indexed_priority_queue::{
    IndexError, IndexedPriorityQueue, IndexedPriorityQueueBorrowIter,
    IndexedPriorityQueueIterator,
};
pub use crate::ordering::{HeapOrder, MaxFirst, MinFirst, OrderBy};
pub use crate::priority_queue::{PriorityQueue, PriorityQueueIterator};

#[doc = include_str!("../../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
